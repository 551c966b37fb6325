//! File tree is a collection of files, the virtual filesystem of a `bundle`.

use crate::{MANIFEST_PREVIEW_LENGTH, file_record::FileRecord, tree_path::TreePath};
use std::collections::BTreeMap;

/// Files of a `bundle` by their path.
///
/// Ordered map is used so serialized form does not depend on directory
/// traversal order.
pub type FileTree = BTreeMap<TreePath, FileRecord>;

/// Builds a copy of `file_tree` with every file content shortened to
/// [MANIFEST_PREVIEW_LENGTH] characters.
pub fn manifest(file_tree: &FileTree) -> FileTree {
    file_tree
        .iter()
        .map(|(tree_path, file_record)| {
            (
                tree_path.clone(),
                file_record.preview(MANIFEST_PREVIEW_LENGTH),
            )
        })
        .collect()
}
