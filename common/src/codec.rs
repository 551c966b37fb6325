//! Binary safe text encoding and compression primitives.
//!
//! Files are stored in a `bundle` as text. Valid utf-8 content is kept as is,
//! anything else is base64 encoded ([encode_file] / [decode_file]). The whole
//! serialized context is deflated and base64 encoded ([compress] /
//! [decompress]), so it can be embedded as a quoted js string literal.

use base64::{Engine, engine::general_purpose::STANDARD};
use flate2::{
    Compression,
    write::{ZlibDecoder, ZlibEncoder},
};
use std::{io::Write, string::FromUtf8Error};

/// Errors produced while decoding content.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    /// Input is not a valid base64 string.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Deflate stream could not be written.
    #[error("deflate failed: {0}")]
    Deflate(#[source] std::io::Error),
    /// Input is not a valid zlib (deflate) stream.
    #[error("inflate failed: {0}")]
    Inflate(#[source] std::io::Error),
    /// Decompressed content is not a valid utf-8 text.
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Encodes raw file content as text.
///
/// Returns content decoded as utf-8 and `false` if content is valid utf-8,
/// otherwise returns base64 encoded content and `true`.
pub fn encode_file(content: Vec<u8>) -> (String, bool) {
    match String::from_utf8(content) {
        Ok(text) => (text, false),
        Err(error) => (STANDARD.encode(error.into_bytes()), true),
    }
}

/// Reverse of [encode_file].
pub fn decode_file(
    data: &str,
    base64_encoded: bool,
) -> Result<Vec<u8>, CodecError> {
    if base64_encoded {
        Ok(STANDARD.decode(data)?)
    } else {
        Ok(data.as_bytes().to_vec())
    }
}

/// Base64 encodes `content` with standard alphabet and padding.
pub fn base64_encode(content: &[u8]) -> String {
    STANDARD.encode(content)
}

/// Compresses `text` (deflate with zlib framing) and returns it base64
/// encoded.
pub fn compress(text: &str) -> Result<String, CodecError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(text.as_bytes())
        .map_err(CodecError::Deflate)?;
    let compressed = encoder.finish().map_err(CodecError::Deflate)?;

    Ok(STANDARD.encode(compressed))
}

/// Reverse of [compress].
pub fn decompress(blob: &str) -> Result<String, CodecError> {
    let compressed = STANDARD.decode(blob.trim())?;

    let mut decoder = ZlibDecoder::new(Vec::new());
    decoder
        .write_all(&compressed)
        .map_err(CodecError::Inflate)?;
    let decompressed = decoder.finish().map_err(CodecError::Inflate)?;

    let text = String::from_utf8(decompressed)?;
    Ok(text)
}

#[cfg(test)]
mod test {
    use super::{CodecError, compress, decode_file, decompress, encode_file};
    use test_case::test_case;

    #[test_case(b"" ; "empty")]
    #[test_case(b"<html>Hello World!</html>" ; "ascii text")]
    #[test_case("za\u{017c}\u{00f3}\u{0142}\u{0107} g\u{0119}\u{015b}l\u{0105} ja\u{017a}\u{0144}".as_bytes() ; "multibyte text")]
    #[test_case(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR" ; "png header")]
    #[test_case(b"\xff\xfe\xfd" ; "invalid utf-8")]
    fn decode_file_reverses_encode_file(content: &[u8]) {
        let (data, base64_encoded) = encode_file(content.to_vec());
        assert_eq!(decode_file(&data, base64_encoded).unwrap(), content);
    }

    #[test]
    fn encode_file_keeps_text_verbatim() {
        assert_eq!(
            encode_file(b"body { color: red; }".to_vec()),
            ("body { color: red; }".to_owned(), false)
        );
    }

    #[test]
    fn encode_file_base64_encodes_binary() {
        assert_eq!(
            encode_file(b"\x00\xff\x10".to_vec()),
            ("AP8Q".to_owned(), true)
        );
    }

    #[test_case("" ; "empty")]
    #[test_case("lorem ipsum lorem ipsum lorem ipsum lorem ipsum lorem ipsum" ; "repeated")]
    #[test_case("{\"currentPath\":\"index.html\",\"utils\":{\"main\":\"\u{2603}\"}}" ; "json with unicode")]
    fn decompress_reverses_compress(text: &str) {
        let blob = compress(text).unwrap();
        assert_eq!(decompress(&blob).unwrap(), text);
    }

    #[test]
    fn compress_produces_plain_base64() {
        let blob = compress(&"abc".repeat(1000)).unwrap();
        assert!(
            blob.bytes()
                .all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'/' | b'='))
        );
        // repeated content should shrink
        assert!(blob.len() < 3000);
    }

    #[test]
    fn decompress_rejects_invalid_base64() {
        assert!(matches!(decompress("not base64!"), Err(CodecError::Base64(_))));
    }

    #[test]
    fn decompress_rejects_not_deflated() {
        // "hello world" base64 encoded, but never compressed
        assert!(matches!(
            decompress("aGVsbG8gd29ybGQ="),
            Err(CodecError::Inflate(_))
        ));
    }
}
