//! Directory helpers. Contains [search] function, used to gather files from
//! directory recursively, and [build_tree] collecting them into a [FileTree].

use crate::{
    common::file_tree::FileTree, css::CssInliner, embed::EmbedError, entry::Entry, file, tree,
};
use anyhow::{Context, Error};
use glob::Pattern;
use log::{Level, Log};
use std::{
    io,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;
use web_static_bundle_common::log_to;

/// Settings for [search] function.
///
/// If not sure what to set here, use [Default].
#[derive(Debug)]
pub struct SearchOptions {
    /// Whether to follow links while traversing directories.
    pub follow_links: bool,
    /// Files with name (not path) matching this pattern are skipped. Used to
    /// prevent packing previously generated `bundle`.
    pub exclude_pattern: Option<Pattern>,
    /// File (relative to searched directory) never skipped by
    /// `exclude_pattern`, usually the entry document.
    pub exclude_exempt: Option<PathBuf>,
}
impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            follow_links: true,
            exclude_pattern: None,
            exclude_exempt: None,
        }
    }
}

/// Searches fs recursively and builds [Entry] for each file.
///
/// Traverses directory specified in `path` using [SearchOptions]. Builds all
/// found files as [Entry] using [file::BuildFromPathOptions]. Paths are created
/// by stripping `path` from full file path.
pub fn search(
    path: &Path,
    options: &SearchOptions,
    file_build_options: &file::BuildFromPathOptions,
    css_inliner: &dyn CssInliner,
    logger: &dyn Log,
) -> Result<Box<[Entry]>, Error> {
    let entries = WalkDir::new(path)
        .follow_links(options.follow_links)
        .into_iter()
        .map(|file_entry| {
            // detect search errors, including unreadable root
            let file_entry = file_entry.map_err(|error| EmbedError::UnreadableFile {
                path: error.path().unwrap_or(path).to_path_buf(),
                source: io::Error::from(error),
            })?;

            // we are interested in files only
            // if follow_links is true, this will be resolved as link target
            if !file_entry.file_type().is_file() {
                return Ok(None);
            }

            // skip excluded, usually previous bundle
            if let Some(exclude_pattern) = &options.exclude_pattern
                && exclude_pattern.matches(&file_entry.file_name().to_string_lossy())
                && !is_exclude_exempt(file_entry.path(), path, options)
            {
                log_to!(
                    logger,
                    Level::Debug,
                    "excluding file: {}",
                    file_entry.path().display()
                );
                return Ok(None);
            }

            // build file
            let entry = Entry::build_from_path(
                file_entry.path(),
                path,
                file_build_options,
                css_inliner,
                logger,
            )
            .with_context(|| file_entry.path().to_string_lossy().into_owned())?;

            // yield for processing
            Ok(Some(entry))
        })
        .filter_map(|entry_result| entry_result.transpose()) // strips Ok(None)
        .collect::<Result<Box<[_]>, Error>>()?;

    Ok(entries)
}

/// Whether `file_path` found in `path` is [SearchOptions::exclude_exempt].
fn is_exclude_exempt(
    file_path: &Path,
    path: &Path,
    options: &SearchOptions,
) -> bool {
    match (&options.exclude_exempt, file_path.strip_prefix(path)) {
        (Some(exclude_exempt), Ok(file_base_relative_path)) => {
            file_base_relative_path == exclude_exempt
        }
        _ => false,
    }
}

/// Builds [FileTree] from all files found by [search].
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use std::fs;
/// # use web_static_bundle_packer::{
/// #     css::RegexCssInliner,
/// #     directory::{build_tree, SearchOptions},
/// #     file::BuildFromPathOptions,
/// # };
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let root = tempfile::TempDir::new()?;
/// fs::create_dir(root.path().join("_static"))?;
/// fs::write(root.path().join("index.html"), "<p>index</p>")?;
/// fs::write(root.path().join("_static").join("doctools.js"), "let a = 1;")?;
/// fs::write(root.path().join("SELF_CONTAINED_index.html"), "<p>old</p>")?;
///
/// let file_tree = build_tree(
///     root.path(),
///     &SearchOptions {
///         exclude_pattern: Some(glob::Pattern::new("SELF_CONTAINED_*")?),
///         ..SearchOptions::default()
///     },
///     &BuildFromPathOptions::default(),
///     &RegexCssInliner::new(),
///     log::logger(),
/// )?;
///
/// assert_eq!(
///     file_tree.keys().map(|tree_path| &**tree_path).collect::<Vec<_>>(),
///     vec!["_static/doctools.js", "index.html"]
/// );
/// #
/// # Ok(())
/// # }
/// ```
pub fn build_tree(
    path: &Path,
    options: &SearchOptions,
    file_build_options: &file::BuildFromPathOptions,
    css_inliner: &dyn CssInliner,
    logger: &dyn Log,
) -> Result<FileTree, Error> {
    let mut builder = tree::Builder::new();
    builder.entries_add(search(
        path,
        options,
        file_build_options,
        css_inliner,
        logger,
    )?)?;

    Ok(builder.finalize())
}
