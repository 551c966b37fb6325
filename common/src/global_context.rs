//! Global context is the root entity, embedded (compressed) into a `bundle`.

use crate::file_tree::FileTree;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// [GlobalContext] represents everything browser side runtime needs to serve
/// packed directory.
///
/// [GlobalContext] is built by
/// [web-static-bundle-packer](https://crates.io/crates/web-static-bundle-packer),
/// serialized to json, compressed and assigned to `window.globalContext` in the
/// resulting html document. Field names are part of the `bundle` format.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GlobalContext {
    /// Path of the entry document inside `file_tree`, eg. `index.html`.
    pub current_path: String,
    /// All packed files.
    pub file_tree: FileTree,
    /// Runtime scripts by their name, stored verbatim.
    pub utils: BTreeMap<String, String>,
}
