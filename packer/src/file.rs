//! File helpers. Contains [build_from_path] and [build_from_content] functions
//! to create a [FileRecord] from fs / memory content.

use crate::{common::file_record::FileRecord, css::CssInliner, embed::EmbedError, mime};
use anyhow::Error;
use log::{Level, Log};
use std::{ffi::OsStr, fs, path::Path};
use web_static_bundle_common::log_to;

/// Options when preparing file in [build_from_path].
///
/// If not sure what to set here, use [Default].
#[derive(Debug)]
pub struct BuildFromPathOptions {
    /// Embed resources referenced by stylesheets (files with `.css`
    /// extension), see [crate::css].
    pub inline_css: bool,

    /// Override mime type for this file.
    pub mime_type_override: Option<String>,
}
impl Default for BuildFromPathOptions {
    fn default() -> Self {
        Self {
            inline_css: true,
            mime_type_override: None,
        }
    }
}

/// Creates a [FileRecord] by reading file from fs, specified by `path`.
///
/// Inside file will be read, mime type determined with [mime::resolve], for
/// stylesheets referenced resources embedded with `css_inliner` and then
/// passed to [build_from_content].
pub fn build_from_path(
    path: &Path,
    options: &BuildFromPathOptions,
    css_inliner: &dyn CssInliner,
    logger: &dyn Log,
) -> Result<FileRecord, Error> {
    // read content
    let content = content_from_path(path)?;

    // use user provided mime type if set, otherwise resolve from path / content
    let mime_type = if let Some(mime_type) = &options.mime_type_override {
        mime_type.clone()
    } else {
        mime::resolve(path, &content, logger)
    };

    // stylesheets get their resources embedded
    let content = if options.inline_css && is_css(path) {
        css_inliner.inline(&content, path, logger)
    } else {
        content
    };

    // pass to inner builder
    let file_record = build_from_content(content, mime_type);

    log_to!(
        logger,
        Level::Debug,
        "loaded file: {} [{}, {} bytes]",
        path.display(),
        file_record.mime_type,
        file_record.data.len()
    );

    Ok(file_record)
}

/// Creates a [FileRecord] from provided raw content and mime type.
///
/// Valid utf-8 content is stored as text, anything else is base64 encoded.
///
/// # Examples
///
/// ```
/// # use web_static_bundle_packer::file::build_from_content;
/// #
/// let file_record = build_from_content(b"<html>Hello World!</html>".to_vec(), "text/html".to_owned());
/// assert_eq!(file_record.data, "<html>Hello World!</html>");
/// assert!(!file_record.base64_encoded);
///
/// let file_record = build_from_content(b"\xff\xd8\xff\xe0".to_vec(), "image/jpeg".to_owned());
/// assert_eq!(file_record.data, "/9j/4A==");
/// assert!(file_record.base64_encoded);
/// ```
pub fn build_from_content(
    content: Vec<u8>,
    mime_type: String,
) -> FileRecord {
    FileRecord::from_content(content, mime_type)
}

/// Builds content by reading given file.
fn content_from_path(path: &Path) -> Result<Vec<u8>, EmbedError> {
    fs::read(path).map_err(|source| EmbedError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Whether file should be treated as a stylesheet.
fn is_css(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|extension| extension.eq_ignore_ascii_case("css"))
}
