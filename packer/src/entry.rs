//! Tree entry helpers. Contains [Entry], a combination of [FileRecord] and
//! [TreePath].

use crate::{
    common::{file_record::FileRecord, tree_path::TreePath},
    css::CssInliner,
    file, tree_path,
};
use anyhow::{Context, Error};
use log::Log;
use std::path::Path;

/// [FileRecord] (describing the content) + its [TreePath] (describing path the
/// file will be accessible at).
///
/// This is the main item added to the file tree.
#[derive(Debug)]
pub struct Entry {
    /// The file.
    pub file_record: FileRecord,

    /// The path inside the file tree, relative to packed directory.
    pub tree_path: TreePath,
}
impl Entry {
    /// Creates [self] by reading file relative to given base directory.
    ///
    /// Given file path (`path`) to read and base directory path creates a
    /// [self] by preparing:
    /// - [FileRecord] with [file::build_from_path] using
    ///   [file::BuildFromPathOptions].
    /// - [TreePath] with [tree_path::from_file_base_relative_path] (as relative
    ///   path between `path` and `base_directory_path`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyhow::Error;
    /// # use std::fs;
    /// # use web_static_bundle_packer::{
    /// #     css::RegexCssInliner, entry::Entry, file::BuildFromPathOptions,
    /// # };
    /// #
    /// # fn main() -> Result<(), Error> {
    /// #
    /// let base_directory = tempfile::TempDir::new()?;
    /// fs::create_dir(base_directory.path().join("_static"))?;
    /// fs::write(base_directory.path().join("_static").join("basic.css"), "p { margin: 0; }")?;
    ///
    /// // file in base/directory/path/_static/basic.css should end up as _static/basic.css
    /// let entry = Entry::build_from_path(
    ///     &base_directory.path().join("_static").join("basic.css"),
    ///     base_directory.path(),
    ///     &BuildFromPathOptions::default(),
    ///     &RegexCssInliner::new(),
    ///     log::logger(),
    /// )?;
    /// assert_eq!(entry.file_record.mime_type, "text/css");
    /// assert_eq!(&*entry.tree_path, "_static/basic.css");
    /// #
    /// # Ok(())
    /// # }
    /// ```
    pub fn build_from_path(
        path: &Path,
        base_directory_path: &Path,
        file_options: &file::BuildFromPathOptions,
        css_inliner: &dyn CssInliner,
        logger: &dyn Log,
    ) -> Result<Self, Error> {
        // strip prefix, so entry_path is relative to search root
        let file_base_relative_path = path
            .strip_prefix(base_directory_path)
            .context("resolve file_base_relative_path")?;

        // create tree path
        let tree_path = tree_path::from_file_base_relative_path(file_base_relative_path)?;

        // read and build file
        let file_record = file::build_from_path(path, file_options, css_inliner, logger)?;

        Ok(Self {
            file_record,
            tree_path,
        })
    }
}
