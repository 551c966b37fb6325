//! Bootstrap assets helpers. Contains [BootstrapAssets], verbatim sources of
//! browser side runtime shipped inside every `bundle`.

use std::collections::BTreeMap;

/// Name of the runtime script rendering documents from the file tree.
pub const MAIN: &str = "main";
/// Name of the runtime script with shared helpers.
pub const COMMON: &str = "common";
/// Name of the script injected as the first child of `<head>` of every
/// rendered document.
pub const INJECT_PRE: &str = "inject_pre";
/// Name of the script injected as the last child of `<body>` of every rendered
/// document.
pub const INJECT_POST: &str = "inject_post";

/// Sources of browser side runtime. Packer treats them as opaque text.
///
/// `style`, `body` and `bootstrap` are rendered into the `bundle` document
/// directly, as nothing is able to decompress them yet. `utils` are stored
/// (compressed) in the global context and started by `bootstrap`.
#[derive(Clone, Debug)]
pub struct BootstrapAssets {
    /// Contents of document `<style>` block.
    pub style: String,
    /// Contents of document `<body>`, before scripts.
    pub body: String,
    /// First stage script, decompressing global context.
    pub bootstrap: String,
    /// Remaining runtime scripts by their name.
    pub utils: BTreeMap<String, String>,
    /// License of the runtime, shipped with every `bundle`.
    pub license: String,
}
impl BootstrapAssets {
    /// Creates [self] from assets compiled into this crate.
    pub fn bundled() -> Self {
        let utils = [
            (MAIN, include_str!("../assets/main.js")),
            (COMMON, include_str!("../assets/common.js")),
            (INJECT_PRE, include_str!("../assets/inject_pre.js")),
            (INJECT_POST, include_str!("../assets/inject_post.js")),
        ]
        .into_iter()
        .map(|(name, source)| (name.to_owned(), source.to_owned()))
        .collect::<BTreeMap<_, _>>();

        Self {
            style: include_str!("../assets/init.css").to_owned(),
            body: include_str!("../assets/init.html").to_owned(),
            bootstrap: include_str!("../assets/bootstrap.js").to_owned(),
            utils,
            license: include_str!("../assets/LICENSE").to_owned(),
        }
    }

    /// Returns [self] with caller supplied scripts added to injected scripts
    /// and `sourceURL` trailer appended to every script.
    ///
    /// `prepend_script` is put before [INJECT_PRE], `append_script` after
    /// [INJECT_POST].
    pub fn with_scripts(
        mut self,
        prepend_script: &str,
        append_script: &str,
    ) -> Self {
        if let Some(inject_pre) = self.utils.get_mut(INJECT_PRE) {
            inject_pre.insert_str(0, prepend_script);
        }
        if let Some(inject_post) = self.utils.get_mut(INJECT_POST) {
            inject_post.push_str(append_script);
        }

        for (name, source) in self.utils.iter_mut() {
            source.push_str(&source_url_trailer(name));
        }
        self.bootstrap.push_str(&source_url_trailer("bootstrap"));

        self
    }
}
impl Default for BootstrapAssets {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Lets browser developer tools show script under a readable name.
fn source_url_trailer(name: &str) -> String {
    format!("\n\n//# sourceURL={name}.js")
}
