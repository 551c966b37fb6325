//! Mime type helpers. Contains [resolve] function, used to determine mime type
//! of a packed file.

use log::{Level, Log};
use std::path::Path;
use web_static_bundle_common::log_to;

/// Mime type used when nothing else matches.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Wildcard byte in [SIGNATURES], matches any byte.
const ANY: u8 = b'?';

/// Magic bytes prefixes with corresponding mime types.
const SIGNATURES: &[(&[u8], &str)] = &[
    // image
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"\xFF\xD8\xFF", "image/jpeg"),
    (b"\x89PNG\x0D\x0A\x1A\x0A", "image/png"),
    (b"<svg", "image/svg+xml"),
    (b"RIFF????WEBPVP8", "image/webp"),
    (b"\x00\x00\x01\x00", "image/x-icon"),
    // font
    (b"wOFF", "font/woff"),
    (b"wOF2", "font/woff2"),
    (b"OTTO", "font/otf"),
    (b"\x00\x01\x00\x00\x00", "font/ttf"),
    // audio
    (b"ID3", "audio/mpeg"),
    (b"OggS", "audio/ogg"),
    (b"RIFF????WAVEfmt ", "audio/wav"),
    (b"fLaC", "audio/x-flac"),
    // video
    (b"RIFF????AVI LIST", "video/avi"),
    (b"????ftyp", "video/mp4"),
    (b"\x1A\x45\xDF\xA3", "video/webm"),
    // other
    (b"%PDF-", "application/pdf"),
    (b"\x00asm", "application/wasm"),
];

/// Determines mime type of file located at `path` with given `content`.
///
/// Extension is looked up first, then content signature is sniffed with
/// [sniff]. If neither gives a result, error is logged and [OCTET_STREAM] is
/// returned. Same input always produces same output.
pub fn resolve(
    path: &Path,
    content: &[u8],
    logger: &dyn Log,
) -> String {
    if let Some(mime_type) = from_path(path) {
        return mime_type.to_owned();
    }

    if let Some(mime_type) = sniff(content) {
        return mime_type.to_owned();
    }

    log_to!(
        logger,
        Level::Error,
        "unknown mime type ({}): {:?}...",
        path.display(),
        String::from_utf8_lossy(&content[..content.len().min(10)]),
    );
    OCTET_STREAM.to_owned()
}

/// Guesses mime type from file path extension.
fn from_path(path: &Path) -> Option<&'static str> {
    let mime_type = mime_guess::from_path(path).first_raw()?;

    // NOTE: temporary workaround for https://github.com/abonander/mime_guess/issues/90
    if mime_type == "application/javascript" {
        return Some("text/javascript");
    }

    Some(mime_type)
}

/// Guesses mime type from file content.
///
/// Known binary signatures are checked first. Content with no known signature,
/// being a valid utf-8 text, is considered `text/plain`.
pub fn sniff(content: &[u8]) -> Option<&'static str> {
    let signature_mime_type = SIGNATURES
        .iter()
        .find(|(signature, _)| signature_matches(signature, content))
        .map(|(_, mime_type)| *mime_type);
    if signature_mime_type.is_some() {
        return signature_mime_type;
    }

    if is_plain_text(content) {
        return Some("text/plain");
    }

    None
}

fn signature_matches(
    signature: &[u8],
    content: &[u8],
) -> bool {
    content.len() >= signature.len()
        && signature
            .iter()
            .zip(content)
            .all(|(expected, actual)| *expected == ANY || expected == actual)
}

fn is_plain_text(content: &[u8]) -> bool {
    if content.is_empty() {
        return false;
    }

    match std::str::from_utf8(content) {
        Ok(text) => text
            .chars()
            .all(|character| !character.is_control() || character.is_whitespace()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod test {
    use super::{OCTET_STREAM, resolve, sniff};
    use log::Level;
    use std::path::{Path, PathBuf};
    use test_case::test_case;
    use web_static_bundle_common::logging::MemoryLogger;

    #[test_case(&PathBuf::from("index.html"), b"", "text/html"; "html file")]
    #[test_case(&PathBuf::from("_static/pygments.css"), b"", "text/css"; "css file in directory")]
    #[test_case(&PathBuf::from("_static/doctools.3f2a1b.js"), b"", "text/javascript"; "js file with some hex in stem")]
    #[test_case(&PathBuf::from("logo.PNG"), b"", "image/png"; "upper case extension")]
    #[test_case(&PathBuf::from("fonts/lato.woff2"), b"", "font/woff2"; "woff2 font")]
    #[test_case(&PathBuf::from("logo"), b"\x89PNG\x0D\x0A\x1A\x0A\x00\x00", "image/png"; "png without extension")]
    #[test_case(&PathBuf::from("LICENSE"), b"MIT License\n\nCopyright", "text/plain"; "text without extension")]
    fn resolve_returns_expected(
        path: &Path,
        content: &[u8],
        expected: &str,
    ) {
        let logger = MemoryLogger::new();
        assert_eq!(resolve(path, content, &logger), expected);
        assert!(logger.records().is_empty());
    }

    #[test]
    fn resolve_falls_back_to_octet_stream_and_logs() {
        let logger = MemoryLogger::new();
        let path = PathBuf::from("objects.inv0");

        assert_eq!(resolve(&path, b"\x00\x01\x02\x03", &logger), OCTET_STREAM);
        assert!(logger.contains(Level::Error, "objects.inv0"));
    }

    #[test]
    fn resolve_is_idempotent() {
        let logger = MemoryLogger::new();
        let path = PathBuf::from("blob");
        let content = b"RIFF\x10\x00\x00\x00WEBPVP8 ";

        let first = resolve(&path, content, &logger);
        let second = resolve(&path, content, &logger);
        assert_eq!(first, "image/webp");
        assert_eq!(first, second);
    }

    #[test_case(b"RIFF\x24\x00\x00\x00WAVEfmt \x10", Some("audio/wav"); "wildcard length in riff header")]
    #[test_case(b"\x00\x00\x00\x18ftypmp42", Some("video/mp4"); "mp4 box")]
    #[test_case(b"wOF2\x00\x01", Some("font/woff2"); "woff2")]
    #[test_case(b"RIFF\x00\x00", None; "truncated signature")]
    #[test_case(b"", None; "empty")]
    #[test_case(b"\x00\x9f\x92\x96", None; "binary garbage")]
    fn sniff_returns_expected(
        content: &[u8],
        expected: Option<&str>,
    ) {
        assert_eq!(sniff(content), expected);
    }
}
