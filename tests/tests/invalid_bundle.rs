use std::fs;
use tempfile::TempDir;
use test_case::test_case;
use web_static_bundle::{ExtractError, extractor::extract};
use web_static_bundle_common::logging::MemoryLogger;

#[test_case("<!DOCTYPE html><html><body><h1>Just a page</h1></body></html>"; "plain page")]
#[test_case("<script>window.globalContext = \"QUJD\"</script>"; "short blob")]
#[test_case("window.globalContext = \"QUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJDQUJD\""; "outside of script")]
fn extract_reports_missing_blob(document: &str) {
    let root = TempDir::new().unwrap();
    let bundle_path = root.path().join("page.html");
    fs::write(&bundle_path, document).unwrap();
    let output = root.path().join("out");

    let error = extract(&bundle_path, &output, &MemoryLogger::new()).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<ExtractError>(),
        Some(ExtractError::BlobNotFound { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn extract_reports_missing_file() {
    let root = TempDir::new().unwrap();

    let error = extract(
        &root.path().join("missing.html"),
        root.path(),
        &MemoryLogger::new(),
    )
    .unwrap_err();

    assert!(error.downcast_ref::<ExtractError>().is_none());
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}
