use std::fs;
use web_static_bundle::bundle;
use web_static_bundle_common::codec;
use web_static_bundle_tests::{LOGO_PNG, embed_site, sample_site};

#[test]
fn stylesheet_resources_are_embedded() {
    let site = sample_site().unwrap();
    let bundle_path = embed_site(site.path()).unwrap();

    let document = fs::read_to_string(bundle_path).unwrap();
    let global_context = bundle::decode_context(bundle::locate_blob(&document).unwrap()).unwrap();
    let basic_css = &global_context.file_tree["_static/basic.css"];
    assert_eq!(basic_css.mime_type, "text/css");
    assert!(!basic_css.base64_encoded);

    // image referenced with query string
    assert!(basic_css.data.contains(&format!(
        "url(\"data:image/png;charset=utf-8;base64,{}\")",
        codec::base64_encode(LOGO_PNG)
    )));

    // imported stylesheet
    assert!(basic_css.data.contains(&format!(
        "@import url(\"data:text/css;charset=utf-8;base64,{}\");",
        codec::base64_encode(b"h1 { font-family: serif; }\n")
    )));
    assert!(!basic_css.data.contains("fonts.css"));
    assert!(!basic_css.data.contains("logo.png"));
}

#[test]
fn imported_stylesheet_is_still_packed_as_is() {
    let site = sample_site().unwrap();
    let bundle_path = embed_site(site.path()).unwrap();

    let document = fs::read_to_string(bundle_path).unwrap();
    let global_context = bundle::decode_context(bundle::locate_blob(&document).unwrap()).unwrap();
    assert_eq!(
        global_context.file_tree["_static/fonts.css"].data,
        "h1 { font-family: serif; }\n"
    );
}
