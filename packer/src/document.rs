//! Document helpers. Contains [render], producing the final `bundle` html.

use crate::common::{GLOBAL_CONTEXT_VARIABLE, VERSION_CONSTANT};

/// Renders `bundle` document.
///
/// The document consists of `style` block, `body` shell, a constant holding
/// `version`, `compressed_context` assigned to `window.globalContext`, the
/// `bootstrap` script and a trailing comment with runtime `license`. Nothing
/// here is escaped: `compressed_context` is base64 (thus safe inside a quoted
/// js string), everything else is trusted input.
///
/// # Examples
///
/// ```
/// # use web_static_bundle_packer::document::render;
/// #
/// let document = render("body {}", "<iframe></iframe>", "start();", "MIT", "0.1.0", "eJwDAAAAAAE=");
/// assert!(document.contains("<script>window.globalContext = \"eJwDAAAAAAE=\"</script>"));
/// ```
pub fn render(
    style: &str,
    body: &str,
    bootstrap: &str,
    license: &str,
    version: &str,
    compressed_context: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<!--
This document has been prepared using web-static-bundle {version}.
All linked files are embedded below. To recover them run:
`web-static-bundle-packer extract <this file> <output directory>`
-->
<html>
<head><meta charset="utf-8"><style>{style}</style></head>
<body>{body}
<script>const {VERSION_CONSTANT} = "{version}"</script>
<script>window.{GLOBAL_CONTEXT_VARIABLE} = "{compressed_context}"</script>
<script>{bootstrap}</script>
</body><!-- {license} --></html>
"#
    )
}
