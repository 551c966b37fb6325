//! web-static-bundle is the "extractor" part of the
//! [web-static-bundle](https://github.com/peku33/web-static-bundle) project.
//!
//! A `bundle` is a single html document produced by
//! [web-static-bundle-packer](https://crates.io/crates/web-static-bundle-packer),
//! carrying the whole packed directory as a compressed
//! [common::global_context::GlobalContext]. This crate finds it inside the
//! document ([bundle::locate_blob]), decodes it ([bundle::decode_context])
//! and writes the packed files back to the filesystem
//! ([extractor::extract]).
//!
//! # Examples
//! ```no_run
//! # use anyhow::Error;
//! # use std::path::Path;
//! # use web_static_bundle::extractor::extract;
//! #
//! # fn main() -> Result<(), Error> {
//! let file_tree = extract(
//!     Path::new("SELF_CONTAINED_index.html"),
//!     Path::new("recovered"),
//!     log::logger(),
//! )?;
//! println!("restored {} files", file_tree.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub use web_static_bundle_common as common;

pub mod bundle;
pub mod extractor;

pub use extractor::ExtractError;
