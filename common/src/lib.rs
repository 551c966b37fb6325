//! Common crate, containing types shared between
//! [web-static-bundle](https://crates.io/crates/web-static-bundle) (the
//! extractor) and
//! [web-static-bundle-packer](https://crates.io/crates/web-static-bundle-packer).
//!
//! The root type of this crate is [global_context::GlobalContext]. It holds a
//! [file_tree::FileTree] (an ordered map) of [file_record::FileRecord]
//! distinguished by [tree_path::TreePath] (a custom type for relative posix
//! path), the path of the entry document and the named runtime scripts.
//!
//! `GlobalContext` is serialized to json, compressed with [codec::compress] and
//! embedded into a single html document, called `bundle`. Extraction performs
//! the reverse with [codec::decompress].

#![warn(missing_docs)]

pub mod codec;
pub mod file_record;
pub mod file_tree;
pub mod global_context;
pub mod logging;
pub mod tree_path;

#[doc(hidden)]
pub use log;

/// Name of the `window` property the compressed context is assigned to in a
/// `bundle`.
pub const GLOBAL_CONTEXT_VARIABLE: &str = "globalContext";
/// Name of the constant holding packer version in a `bundle`.
pub const VERSION_CONSTANT: &str = "web_static_bundle_version";
/// Minimal length of base64 run recognized as compressed context when looking
/// through a `bundle`.
pub const BLOB_MINIMUM_LENGTH: usize = 128;

/// File name of the diagnostic manifest written next to extracted files.
pub const MANIFEST_FILE_NAME: &str = "file_tree.json";
/// Number of characters of [file_record::FileRecord::data] kept in the
/// manifest.
pub const MANIFEST_PREVIEW_LENGTH: usize = 100;
