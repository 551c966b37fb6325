#![doc(hidden)]

use anyhow::{Context, Error};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;
use walkdir::WalkDir;
use web_static_bundle_common::logging::MemoryLogger;
use web_static_bundle_packer::embed::{EmbedOptions, embed};

// smallest valid png (1x1, transparent)
pub const LOGO_PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x00\x00\x00\x01\x00\x00\x00\x01\x08\x06\x00\x00\x00\x1f\x15\xc4\x89\x00\x00\x00\rIDATx\x9cc\x00\x01\x00\x00\x05\x00\x01\r\n-\xb4\x00\x00\x00\x00IEND\xaeB`\x82";
// not an utf-8, no known signature
pub const OBJECTS_INV: &[u8] = b"\x00\x9f\x92\x96\xff\xfe# Sphinx inventory\x00\x01";

// writes small sphinx like site into a fresh temporary directory
//
// site
// |   index.html
// |   about.html
// |   objects.inv
// +---_static
// |       basic.css      (imports fonts.css, references logo.png)
// |       fonts.css
// |       doctools.js
// \---_images
//         logo.png
pub fn sample_site() -> Result<TempDir, Error> {
    let root = TempDir::new()?;

    let files: [(&str, &[u8]); 8] = [
        (
            "index.html",
            b"<!DOCTYPE html><html><head><link rel=\"stylesheet\" href=\"_static/basic.css\"><script src=\"_static/doctools.js\"></script></head><body><a href=\"about.html\">About</a><img src=\"_images/logo.png\"></body></html>",
        ),
        (
            "about.html",
            "<html><body><p>za\u{017c}\u{00f3}\u{0142}\u{0107} g\u{0119}\u{015b}l\u{0105} ja\u{017a}\u{0144}</p></body></html>".as_bytes(),
        ),
        ("objects.inv", OBJECTS_INV),
        (
            "_static/basic.css",
            b"@import \"fonts.css\";\nbody { background: url('../_images/logo.png?v=1') no-repeat; }\n",
        ),
        ("_static/fonts.css", b"h1 { font-family: serif; }\n"),
        ("_static/doctools.js", b"window.documentation = {};\n"),
        ("_images/logo.png", LOGO_PNG),
        ("_images/.hidden", b"hidden files are packed too"),
    ];
    for (path, content) in files {
        let path = root.path().join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| path.display().to_string())?;
    }

    Ok(root)
}

// embeds index.html of `site` with default options
pub fn embed_site(site: &Path) -> Result<PathBuf, Error> {
    embed(
        &site.join("index.html"),
        &EmbedOptions::default(),
        &MemoryLogger::new(),
    )
}

// reads all files under `directory` keyed by their relative posix path
pub fn read_directory(directory: &Path) -> Result<BTreeMap<String, Vec<u8>>, Error> {
    let mut files = BTreeMap::new();
    for entry in WalkDir::new(directory) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(directory)?
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        files.insert(relative_path, fs::read(entry.path())?);
    }

    Ok(files)
}
