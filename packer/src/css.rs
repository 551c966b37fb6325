//! CSS helpers. Contains [CssInliner] trait and [RegexCssInliner], its
//! implementation embedding resources referenced by stylesheets as data uris.
//!
//! Browser side runtime can serve files requested by html documents, but
//! resources requested from within stylesheets (background images, fonts,
//! imported stylesheets) are resolved by the browser itself. Those are
//! therefore embedded directly into the stylesheet.

use crate::mime;
use log::{Level, Log};
use percent_encoding::percent_decode_str;
use regex::bytes::{Captures, Regex};
use std::{
    borrow::Cow,
    collections::{HashMap, HashSet, hash_map},
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};
use web_static_bundle_common::{codec, log_to};

/// `@import "X";` and `@import 'X';` rules, not wrapped in `url(...)`.
static IMPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)@import\s*['"](?P<url>[^'"]*)['"](?P<media>[^;]*);"#).unwrap()
});
/// `url(X)` with optional quotes, followed by optional `format(X)`.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)url\(\s*['"]?(?P<url>[^'")]*?)['"]?\s*\)(?:\s*format\(\s*['"]?(?P<format>[^'")]*?)['"]?\s*\))?"#,
    )
    .unwrap()
});

/// Rewrites stylesheet so all resources it references are embedded.
///
/// Implementations must never fail as a whole. Resources that cannot be
/// embedded should be logged and left as they were.
pub trait CssInliner {
    /// Returns `css` (content of stylesheet located at `css_path`) with
    /// referenced resources embedded.
    fn inline(
        &self,
        css: &[u8],
        css_path: &Path,
        logger: &dyn Log,
    ) -> Vec<u8>;
}

/// Heuristic [CssInliner] based on regular expressions.
///
/// Works in two passes:
/// - `@import "X";` rules are rewritten to `@import url('X');`,
/// - every `url(X)` (with optional `format(Y)` suffix) pointing to a local file
///   is replaced with `url("data:<mime>;charset=utf-8;base64,<content>")`.
///
/// Imported stylesheets are inlined recursively. Stylesheet importing itself
/// (directly or through other stylesheets) is reported as an import cycle and
/// the offending reference is left untouched.
#[derive(Default, Debug)]
pub struct RegexCssInliner;
impl RegexCssInliner {
    /// Creates [self].
    pub fn new() -> Self {
        Self
    }

    fn inline_chain(
        &self,
        css: &[u8],
        css_path: &Path,
        chain: &mut HashSet<PathBuf>,
        logger: &dyn Log,
    ) -> Vec<u8> {
        let css = normalize_imports(css);
        let css_directory = css_path.parent().unwrap_or_else(|| Path::new(""));

        // identical references are resolved once and replaced together
        let mut replacements = HashMap::<Vec<u8>, Option<Vec<u8>>>::new();

        URL_REGEX
            .replace_all(&css, |captures: &Captures| {
                let statement = &captures[0];

                let replacement = match replacements.entry(statement.to_vec()) {
                    hash_map::Entry::Occupied(entry) => entry.get().clone(),
                    hash_map::Entry::Vacant(entry) => entry
                        .insert(self.replacement(captures, css_directory, chain, logger))
                        .clone(),
                };

                replacement.unwrap_or_else(|| statement.to_vec())
            })
            .into_owned()
    }

    /// Builds data uri `url(...)` statement for single regex match. Returns
    /// [None] if reference should be left as is.
    fn replacement(
        &self,
        captures: &Captures,
        css_directory: &Path,
        chain: &mut HashSet<PathBuf>,
        logger: &dyn Log,
    ) -> Option<Vec<u8>> {
        let url = String::from_utf8_lossy(&captures["url"]);
        let url = url.trim();

        if url
            .get(..5)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
        {
            return None;
        }
        if is_remote(url) {
            log_to!(logger, Level::Debug, "skipping remote resource: {}", url);
            return None;
        }

        // strip query and fragment
        let url = url.split(['?', '#']).next().unwrap_or_default();
        if url.is_empty() {
            return None;
        }
        let url = percent_decode_str(url).decode_utf8_lossy();

        let resource_path = css_directory.join(&*url);
        let content = match fs::read(&resource_path) {
            Ok(content) => content,
            Err(error) => {
                log_to!(
                    logger,
                    Level::Error,
                    "unable to read {}: {}",
                    resource_path.display(),
                    error
                );
                return None;
            }
        };

        let format = captures
            .name("format")
            .map(|format| String::from_utf8_lossy(format.as_bytes()).trim().to_owned())
            .filter(|format| !format.is_empty());
        let extension = resource_path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);

        let (mime_type, content) = if let Some(format) = format {
            (format!("font/{format}"), content)
        } else if extension.as_deref() == Some("eot") {
            ("font/eot".to_owned(), content)
        } else if extension.as_deref() == Some("css") {
            let chain_key = chain_key(&resource_path);
            if !chain.insert(chain_key.clone()) {
                log_to!(
                    logger,
                    Level::Error,
                    "import cycle, not embedding {}",
                    resource_path.display()
                );
                return None;
            }
            let content = self.inline_chain(&content, &resource_path, chain, logger);
            chain.remove(&chain_key);

            ("text/css".to_owned(), content)
        } else {
            let mime_type = mime::resolve(&resource_path, &content, logger);
            (mime_type, content)
        };

        log_to!(
            logger,
            Level::Debug,
            "embedding {} [{}, {} bytes]",
            resource_path.display(),
            mime_type,
            content.len()
        );

        let statement = format!(
            "url(\"data:{};charset=utf-8;base64,{}\")",
            mime_type,
            codec::base64_encode(&content)
        );
        Some(statement.into_bytes())
    }
}
impl CssInliner for RegexCssInliner {
    fn inline(
        &self,
        css: &[u8],
        css_path: &Path,
        logger: &dyn Log,
    ) -> Vec<u8> {
        let mut chain = HashSet::<PathBuf>::new();
        chain.insert(chain_key(css_path));

        self.inline_chain(css, css_path, &mut chain, logger)
    }
}

/// Rewrites `@import "X";` rules into `@import url('X');`, keeping media
/// queries.
fn normalize_imports(css: &[u8]) -> Cow<'_, [u8]> {
    IMPORT_REGEX.replace_all(css, |captures: &Captures| {
        let mut rule = b"@import url('".to_vec();
        rule.extend_from_slice(&captures["url"]);
        rule.extend_from_slice(b"')");
        rule.extend_from_slice(&captures["media"]);
        rule.push(b';');
        rule
    })
}

/// Whether `url` points outside of packed directory, eg. `https://...` or
/// `//cdn...`.
fn is_remote(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }

    match url.split_once(':') {
        // single letter is most likely windows drive
        Some((scheme, _)) => {
            scheme.len() > 1
                && scheme.starts_with(|character: char| character.is_ascii_alphabetic())
                && scheme.chars().all(|character| {
                    character.is_ascii_alphanumeric() || matches!(character, '+' | '-' | '.')
                })
        }
        None => false,
    }
}

/// Identifies stylesheet in import chain, regardless of how it was referenced.
fn chain_key(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
