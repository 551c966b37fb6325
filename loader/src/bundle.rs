//! Bundle document helpers. Contains [locate_blob] and [decode_context], used
//! to get [GlobalContext] back from a `bundle`.

use crate::common::{
    BLOB_MINIMUM_LENGTH,
    codec::{self, CodecError},
    global_context::GlobalContext,
};
use regex::Regex;
use std::sync::LazyLock;

/// `<script>window.<name> = "<base64>"` with at least [BLOB_MINIMUM_LENGTH]
/// characters of base64, optionally padded.
static BLOB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"<script>[^<]*?window\.[A-Za-z_$][\w$]*\s*=\s*"(?P<blob>[A-Za-z0-9+/]{{{BLOB_MINIMUM_LENGTH},}}={{0,2}})""#
    ))
    .unwrap()
});

/// Errors produced by [decode_context].
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// Blob is not a valid compressed text.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// Decompressed text is not a valid serialized [GlobalContext].
    #[error("invalid global context: {0}")]
    Json(#[from] serde_json::Error),
}

/// Finds compressed global context in `document`.
///
/// The first script assigning a long base64 string literal to a `window`
/// property is taken. Returns [None] if document contains no such script.
pub fn locate_blob(document: &str) -> Option<&str> {
    let captures = BLOB_REGEX.captures(document)?;
    let blob = captures.name("blob")?;
    Some(blob.as_str())
}

/// Decompresses and deserializes global context found by [locate_blob].
pub fn decode_context(blob: &str) -> Result<GlobalContext, DecodeError> {
    let text = codec::decompress(blob)?;
    let global_context = serde_json::from_str(&text)?;
    Ok(global_context)
}
