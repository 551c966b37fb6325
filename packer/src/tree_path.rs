//! Tree path helpers. Contains [from_file_base_relative_path] that creates tree
//! paths from fs paths.

use crate::common::tree_path::TreePath;
use anyhow::{Error, anyhow, ensure};
use std::path::{Component, Path};

/// Creates tree path (eg. "dir1/dir2/file.html") from relative fs path (eg.
/// "dir1\\dir2\\file.html").
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use std::path::PathBuf;
/// # use web_static_bundle_packer::{
/// #    common::tree_path::TreePath, tree_path::from_file_base_relative_path,
/// # };
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// assert_eq!(
///     from_file_base_relative_path(&PathBuf::from("path/to/file.txt"))?,
///     TreePath::from_string("path/to/file.txt".to_owned()),
/// );
/// #
/// # Ok(())
/// # }
/// ```
pub fn from_file_base_relative_path(file_base_relative_path: &Path) -> Result<TreePath, Error> {
    ensure!(
        file_base_relative_path.is_relative(),
        "path must be relative, got {:?}",
        file_base_relative_path
    );

    // list of path components, eg. ["dir1", "dir2", "file.bin"]
    let file_base_relative_path_components = file_base_relative_path
        .components()
        .map(|component| {
            // we cannot handle things like '/' or '.' or '..' here
            ensure!(
                matches!(component, Component::Normal(_)),
                "relative path must contain only standard path items, got {:?}",
                component
            );

            component
                .as_os_str()
                .to_str()
                .ok_or_else(|| anyhow!("cannot convert path component to string"))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    ensure!(
        !file_base_relative_path_components.is_empty(),
        "relative path must not be empty"
    );

    // unlike http paths, tree paths have no leading "/"
    let tree_path_string = itertools::join(file_base_relative_path_components, "/");

    // convert into tree path
    let tree_path = TreePath::from_string(tree_path_string);

    Ok(tree_path)
}
