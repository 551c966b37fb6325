//! Embed helpers. Contains [embed], the main entry point packing a directory
//! into a single `bundle` html file.

use crate::{
    VERSION,
    assets::BootstrapAssets,
    context,
    css::RegexCssInliner,
    directory::{self, SearchOptions},
    document,
    file::BuildFromPathOptions,
};
use anyhow::{Context, Error, anyhow};
use glob::Pattern;
use log::{Level, Log};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use web_static_bundle_common::log_to;

/// Prefix of default output file name, eg. `SELF_CONTAINED_index.html`.
pub const OUTPUT_FILE_NAME_PREFIX: &str = "SELF_CONTAINED_";

/// Errors breaking integrity of the whole `bundle`.
#[derive(thiserror::Error, Debug)]
pub enum EmbedError {
    /// Entry (root) document does not exist.
    #[error("no such file: {}", path.display())]
    MissingEntryFile {
        /// Requested entry document path.
        path: PathBuf,
    },
    /// File (or directory) to be packed could not be read.
    #[error("unable to read {}", path.display())]
    UnreadableFile {
        /// Path of the unreadable item.
        path: PathBuf,
        /// Underlying fs error.
        source: io::Error,
    },
}

/// Options for [embed].
///
/// If not sure what to set here, use [Default].
#[derive(Debug)]
pub struct EmbedOptions {
    /// Output `bundle` path. If not set, `SELF_CONTAINED_<entry name>` next to
    /// the entry document is used.
    pub output_path: Option<PathBuf>,
    /// Script put before the script injected at the beginning of every
    /// document.
    pub prepend_script: String,
    /// Script put after the script injected at the end of every document.
    pub append_script: String,
    /// Whether to follow links while traversing directories.
    pub follow_links: bool,
    /// Glob pattern of file names not to be packed. If not set,
    /// `SELF_CONTAINED_<entry name>` is used, so previously generated `bundle`
    /// is not packed again. Entry document is never skipped.
    pub exclude_pattern: Option<String>,
    /// Browser side runtime sources.
    pub assets: BootstrapAssets,
}
impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            output_path: None,
            prepend_script: String::new(),
            append_script: String::new(),
            follow_links: true,
            exclude_pattern: None,
            assets: BootstrapAssets::bundled(),
        }
    }
}

/// Packs directory containing `input_index_path` into a single html file.
///
/// All files from the entry document directory (recursively) are added to the
/// file tree, stylesheets get their resources embedded. File tree is compressed
/// and rendered, together with runtime scripts, into the output document.
/// Returns path of the written `bundle`.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use std::fs;
/// # use web_static_bundle_packer::embed::{embed, EmbedOptions};
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let root = tempfile::TempDir::new()?;
/// fs::write(root.path().join("index.html"), "<h1>Hello</h1>")?;
///
/// let output_path = embed(
///     &root.path().join("index.html"),
///     &EmbedOptions::default(),
///     log::logger(),
/// )?;
/// assert_eq!(output_path, root.path().join("SELF_CONTAINED_index.html"));
/// #
/// # Ok(())
/// # }
/// ```
pub fn embed(
    input_index_path: &Path,
    options: &EmbedOptions,
    logger: &dyn Log,
) -> Result<PathBuf, Error> {
    if !input_index_path.is_file() {
        return Err(EmbedError::MissingEntryFile {
            path: input_index_path.to_path_buf(),
        }
        .into());
    }

    let base_directory = match input_index_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let base_name = input_index_path
        .file_name()
        .and_then(|base_name| base_name.to_str())
        .ok_or_else(|| anyhow!("entry file name is not valid utf-8"))?;

    let output_path = match &options.output_path {
        Some(output_path) => output_path.clone(),
        None => base_directory.join(format!("{OUTPUT_FILE_NAME_PREFIX}{base_name}")),
    };

    // by default skip bundles produced by previous runs with default output
    let exclude_pattern = match &options.exclude_pattern {
        Some(exclude_pattern) => exclude_pattern.clone(),
        None => Pattern::escape(&format!("{OUTPUT_FILE_NAME_PREFIX}{base_name}")),
    };
    let exclude_pattern = Pattern::new(&exclude_pattern).context("parse exclude pattern")?;

    let assets = options
        .assets
        .clone()
        .with_scripts(&options.prepend_script, &options.append_script);

    let file_tree = directory::build_tree(
        base_directory,
        &SearchOptions {
            follow_links: options.follow_links,
            exclude_pattern: Some(exclude_pattern),
            exclude_exempt: Some(PathBuf::from(base_name)),
        },
        &BuildFromPathOptions::default(),
        &RegexCssInliner::new(),
        logger,
    )?;
    log_to!(logger, Level::Debug, "packed {} files", file_tree.len());

    let global_context_compressed = context::assemble(base_name, file_tree, assets.utils, logger)?;

    let document = document::render(
        &assets.style,
        &assets.body,
        &assets.bootstrap,
        &assets.license,
        VERSION,
        &global_context_compressed,
    );

    fs::write(&output_path, document)
        .with_context(|| format!("write {}", output_path.display()))?;
    log_to!(
        logger,
        Level::Info,
        "result written to: {}",
        output_path.display()
    );

    Ok(output_path)
}
