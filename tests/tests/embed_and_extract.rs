use std::fs;
use tempfile::TempDir;
use test_case::test_case;
use web_static_bundle::{bundle, extractor::extract};
use web_static_bundle_common::{MANIFEST_FILE_NAME, logging::MemoryLogger};
use web_static_bundle_packer::embed::{EmbedOptions, embed};
use web_static_bundle_tests::{embed_site, read_directory, sample_site};

#[test]
fn extract_restores_embedded_files() {
    let site = sample_site().unwrap();
    let bundle_path = embed_site(site.path()).unwrap();
    let output = TempDir::new().unwrap();

    extract(&bundle_path, output.path(), &MemoryLogger::new()).unwrap();

    let mut original = read_directory(site.path()).unwrap();
    let mut extracted = read_directory(output.path()).unwrap();
    assert!(extracted.remove(MANIFEST_FILE_NAME).is_some());
    assert!(original.remove("SELF_CONTAINED_index.html").is_some());

    // stylesheets are rewritten, everything else must be byte exact
    assert_eq!(
        original.keys().collect::<Vec<_>>(),
        extracted.keys().collect::<Vec<_>>()
    );
    for (path, content) in &original {
        if path.ends_with(".css") {
            continue;
        }
        assert_eq!(content, &extracted[path], "{path} differs");
    }
}

#[test]
fn embed_twice_does_not_pack_previous_bundle() {
    let site = sample_site().unwrap();
    let first = embed_site(site.path()).unwrap();
    let first_document = fs::read_to_string(&first).unwrap();
    let second = embed_site(site.path()).unwrap();
    let second_document = fs::read_to_string(&second).unwrap();

    assert_eq!(first, second);
    // output is deterministic, so nothing new got in
    assert_eq!(first_document, second_document);
}

#[test]
fn embed_with_custom_exclude_pattern_skips_matching_files() {
    let site = sample_site().unwrap();
    let bundle_path = embed(
        &site.path().join("index.html"),
        &EmbedOptions {
            output_path: Some(site.path().join("packed.html")),
            exclude_pattern: Some("*.inv".to_owned()),
            ..EmbedOptions::default()
        },
        &MemoryLogger::new(),
    )
    .unwrap();

    let document = fs::read_to_string(bundle_path).unwrap();
    let global_context = bundle::decode_context(bundle::locate_blob(&document).unwrap()).unwrap();
    assert!(!global_context.file_tree.contains_key("objects.inv"));
    assert!(global_context.file_tree.contains_key("index.html"));
}

#[test_case("index.html", "text/html", false; "html")]
#[test_case("about.html", "text/html", false; "multibyte html")]
#[test_case("_static/doctools.js", "text/javascript", false; "script")]
#[test_case("_images/logo.png", "image/png", true; "png")]
#[test_case("objects.inv", "application/octet-stream", true; "unknown binary")]
fn embedded_file_tree_has_expected_records(
    tree_path: &str,
    mime_type: &str,
    base64_encoded: bool,
) {
    let site = sample_site().unwrap();
    let bundle_path = embed_site(site.path()).unwrap();

    let document = fs::read_to_string(bundle_path).unwrap();
    let global_context = bundle::decode_context(bundle::locate_blob(&document).unwrap()).unwrap();
    assert_eq!(global_context.current_path, "index.html");

    let file_record = &global_context.file_tree[tree_path];
    assert_eq!(file_record.mime_type, mime_type);
    assert_eq!(file_record.base64_encoded, base64_encoded);
}

#[test]
fn manifest_lists_every_file_with_preview() {
    let site = sample_site().unwrap();
    let bundle_path = embed_site(site.path()).unwrap();
    let output = TempDir::new().unwrap();

    let file_tree = extract(&bundle_path, output.path(), &MemoryLogger::new()).unwrap();

    let manifest = fs::read_to_string(output.path().join(MANIFEST_FILE_NAME)).unwrap();
    for tree_path in file_tree.keys() {
        assert!(manifest.contains(&format!("\"{tree_path}\"")));
    }
    assert!(manifest.contains("\"mimeType\""));
    assert!(manifest.contains("..."));
}
