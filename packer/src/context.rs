//! Global context helpers. Contains [assemble], building the compressed form of
//! [GlobalContext] embedded into a `bundle`.

use crate::common::{codec, file_tree::FileTree, global_context::GlobalContext};
use anyhow::{Context, Error};
use log::{Level, Log};
use std::collections::BTreeMap;
use web_static_bundle_common::log_to;

/// Builds [GlobalContext] from its parts, serializes it to json and compresses
/// with [codec::compress].
///
/// `current_path` is the path of the entry document inside `file_tree`. `utils`
/// are runtime scripts, stored verbatim.
pub fn assemble(
    current_path: &str,
    file_tree: FileTree,
    utils: BTreeMap<String, String>,
    logger: &dyn Log,
) -> Result<String, Error> {
    let global_context = GlobalContext {
        current_path: current_path.to_owned(),
        file_tree,
        utils,
    };

    let global_context_serialized =
        serde_json::to_string(&global_context).context("serialize global context")?;
    log_to!(
        logger,
        Level::Debug,
        "total asset size: {}",
        global_context_serialized.len()
    );

    let global_context_compressed =
        codec::compress(&global_context_serialized).context("compress global context")?;
    log_to!(
        logger,
        Level::Debug,
        "total asset size (compressed): {}",
        global_context_compressed.len()
    );

    Ok(global_context_compressed)
}
