//! web-static-bundle-packer is the "builder" part of the
//! [web-static-bundle](https://github.com/peku33/web-static-bundle) project.
//!
//! The goal of the packer is to take a html document together with the whole
//! directory it lives in (stylesheets, scripts, images, fonts, other
//! documents) and produce a single, self contained html file (called
//! `bundle`). The `bundle` can be opened in any modern browser straight from
//! the filesystem or sent as an email attachment, with links between packed
//! documents still working.
//!
//! The way back (recovering files from a `bundle`) is implemented by
//! [web-static-bundle](https://crates.io/crates/web-static-bundle) (the
//! extractor part).
//!
//! This crate can be used in two ways:
//! - As a standalone application, installed with `cargo install`.
//! - As a library, imported to your project, if you need more control over
//!   what gets packed.
//!
//! # Using as a standalone application
//!
//! `web-static-bundle-packer` provides up to date documentation with `$
//! web-static-bundle-packer --help`. Application is built around subcommands:
//! - `embed [OPTIONS] <INPUT_PATH>` packs `INPUT_PATH` (the entry document)
//!   and all files next to it into `SELF_CONTAINED_<entry name>`.
//! - `extract <INPUT_PATH> [OUTPUT_DIRECTORY]` restores files from a
//!   `bundle`.
//!
//! ### Examples
//! Let's say you have a `docs` directory containing sphinx generated
//! documentation:
//! ```text
//! docs
//! |   index.html
//! |   search.html
//! +---_static
//! |       basic.css
//! |       pygments.css
//! |       doctools.js
//! \---_images
//!         logo.png
//! ```
//! By running:
//! ```text
//! $ web-static-bundle-packer embed ./docs/index.html
//! ```
//! a new file `docs/SELF_CONTAINED_index.html` will be created, containing
//! all the files, starting with `index.html` displayed.
//!
//! # Using as a library
//! The simplest way is to call [embed::embed], which does the whole job. For
//! more control, the stages can be called separately:
//! - Build a [common::file_tree::FileTree], either with [directory::build_tree]
//!   or manually with [tree::Builder] from [entry::Entry] (file + path)
//!   objects.
//! - Serialize and compress it together with runtime scripts
//!   ([assets::BootstrapAssets]) with [context::assemble].
//! - Render the final html with [document::render].
//!
//! For more examples browse through modules of this crate.

#![allow(clippy::new_without_default)]
#![warn(missing_docs)]

pub use web_static_bundle_common as common;

pub mod assets;
pub mod context;
pub mod css;
pub mod directory;
pub mod document;
pub mod embed;
pub mod entry;
pub mod file;
pub mod mime;
pub mod tree;
pub mod tree_path;

/// Version of this packer, written into every `bundle`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
