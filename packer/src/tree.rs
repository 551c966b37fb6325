//! File tree helpers. Contains [Builder], builder for [FileTree].

use crate::{common::file_tree::FileTree, entry::Entry};
use anyhow::{Error, bail};
use std::collections::btree_map;

/// Main builder for file tree. Inside it keeps list of
/// [FileRecord](crate::common::file_record::FileRecord) under respective
/// [TreePath](crate::common::tree_path::TreePath).
#[derive(Debug)]
pub struct Builder {
    file_records_by_tree_path: FileTree,
}
impl Builder {
    /// Creates empty [self] to be filled with files.
    pub fn new() -> Self {
        let file_records_by_tree_path = FileTree::new();

        Self {
            file_records_by_tree_path,
        }
    }

    /// Adds file to the tree.
    pub fn entry_add(
        &mut self,
        entry: Entry,
    ) -> Result<(), Error> {
        let tree_entry = match self.file_records_by_tree_path.entry(entry.tree_path) {
            btree_map::Entry::Occupied(tree_entry) => {
                bail!("file on path {} already exist", tree_entry.key());
            }
            btree_map::Entry::Vacant(tree_entry) => tree_entry,
        };

        tree_entry.insert(entry.file_record);

        Ok(())
    }

    /// Adds collection of files to the tree.
    pub fn entries_add(
        &mut self,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Result<(), Error> {
        entries
            .into_iter()
            .try_for_each(|entry| self.entry_add(entry))?;

        Ok(())
    }

    /// Finalizes to builder, returning built [FileTree].
    pub fn finalize(self) -> FileTree {
        self.file_records_by_tree_path
    }
}
