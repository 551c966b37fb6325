//! Extraction helpers. Contains [extract], restoring files packed into a
//! `bundle`.

use crate::{
    bundle,
    common::{
        MANIFEST_FILE_NAME,
        file_tree::{self, FileTree},
        log_to,
    },
};
use anyhow::{Context, Error};
use log::{Level, Log};
use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

/// Errors meaning that given file is not a valid `bundle`.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// Document contains no compressed global context.
    #[error("no global context found in {}", path.display())]
    BlobNotFound {
        /// Path of the document.
        path: PathBuf,
    },
    /// Compressed global context was found, but could not be decoded, or
    /// decoded content is not safe to be written.
    #[error("unable to decode global context of {}: {reason}", path.display())]
    DecodeFailure {
        /// Path of the document.
        path: PathBuf,
        /// What exactly went wrong.
        reason: String,
    },
}

/// Restores files from `bundle` located at `bundle_path` into
/// `output_directory`, together with `file_tree.json` manifest.
///
/// Everything is decoded and checked before the first write, so a `bundle`
/// that is not valid produces no files at all. Returns recovered file tree.
pub fn extract(
    bundle_path: &Path,
    output_directory: &Path,
    logger: &dyn Log,
) -> Result<FileTree, Error> {
    let content =
        fs::read(bundle_path).with_context(|| format!("read {}", bundle_path.display()))?;
    let document = String::from_utf8_lossy(&content);

    let blob = bundle::locate_blob(&document).ok_or_else(|| ExtractError::BlobNotFound {
        path: bundle_path.to_path_buf(),
    })?;
    log_to!(logger, Level::Debug, "global context found ({} bytes)", blob.len());

    let decode_failure = |reason: String| ExtractError::DecodeFailure {
        path: bundle_path.to_path_buf(),
        reason,
    };

    let global_context =
        bundle::decode_context(blob).map_err(|error| decode_failure(error.to_string()))?;
    let file_tree = global_context.file_tree;

    // decode all, write nothing yet
    let mut files = Vec::<(PathBuf, Vec<u8>)>::with_capacity(file_tree.len());
    for (tree_path, file_record) in &file_tree {
        if !tree_path.is_normal() {
            return Err(decode_failure(format!("invalid file path {tree_path:?}")).into());
        }
        let content = file_record
            .content()
            .map_err(|error| decode_failure(format!("{tree_path}: {error}")))?;

        let path = output_directory.join(tree_path.components().collect::<PathBuf>());
        files.push((path, content));
    }

    for (path, content) in files {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
        log_to!(logger, Level::Debug, "extracted {}", path.display());
    }

    fs::create_dir_all(output_directory)
        .with_context(|| format!("create {}", output_directory.display()))?;
    let manifest_path = output_directory.join(MANIFEST_FILE_NAME);
    let manifest_file = File::create(&manifest_path)
        .with_context(|| format!("create {}", manifest_path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(manifest_file), &file_tree::manifest(&file_tree))
        .context("write manifest")?;

    log_to!(
        logger,
        Level::Info,
        "extracted {} files to {}",
        file_tree.len(),
        output_directory.display()
    );

    Ok(file_tree)
}
