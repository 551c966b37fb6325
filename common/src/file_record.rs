//! File record represents single item of a virtual file tree, accessible under
//! specific path.

use crate::codec::{self, CodecError};
use serde::{Deserialize, Serialize};

/// [FileRecord] represents an original file from filesystem, encoded as text.
///
/// [FileRecord] is created in packing phase (once) and is not modified
/// afterwards. Field names are part of `bundle` format, they are read by
/// browser side runtime.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// File contents, either utf-8 text or base64 string, depending on
    /// `base64_encoded`.
    pub data: String,
    /// Mime type of the file, eg. `text/html` or `image/webp`.
    pub mime_type: String,
    /// Whether `data` is base64 encoded.
    pub base64_encoded: bool,
}
impl FileRecord {
    /// Creates [self] from raw file content, picking text or base64
    /// representation with [codec::encode_file].
    pub fn from_content(
        content: Vec<u8>,
        mime_type: String,
    ) -> Self {
        let (data, base64_encoded) = codec::encode_file(content);

        Self {
            data,
            mime_type,
            base64_encoded,
        }
    }

    /// Recovers raw file content.
    pub fn content(&self) -> Result<Vec<u8>, CodecError> {
        codec::decode_file(&self.data, self.base64_encoded)
    }

    /// Returns copy of [self] with `data` truncated to `length` characters,
    /// followed by `...`. Used to build diagnostic listings.
    pub fn preview(
        &self,
        length: usize,
    ) -> Self {
        let data = match self.data.char_indices().nth(length) {
            Some((index, _)) => format!("{}...", &self.data[..index]),
            None => format!("{}...", self.data),
        };

        Self {
            data,
            mime_type: self.mime_type.clone(),
            base64_encoded: self.base64_encoded,
        }
    }
}
