//! Tree path contains custom type for representing path inside a `bundle`.

use serde::{Deserialize, Serialize};
use std::{
    borrow::Borrow,
    fmt,
    ops::Deref,
    path::{Component, Path},
};

/// [TreePath] represents path of a file inside a virtual file tree, relative to
/// the packed directory, eg. `css/style.css`.
///
/// Custom type is used to enforce some rules, eg. posix separators, no leading
/// "/", no `.` or `..` components. It's also what browser side runtime uses to
/// resolve requests, so it's serialized as plain string.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[serde(transparent)]
pub struct TreePath {
    inner: String,
}
impl TreePath {
    /// Construct path from string representation. Refer to [self] for details.
    /// Providing invalid path won't result in catastrophic failure, but such
    /// will be rejected during extraction.
    pub fn from_string(inner: String) -> Self {
        Self { inner }
    }

    /// Iterates over path components, eg. `["css", "style.css"]`.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/')
    }

    /// Whether path consists of normal components only, so it can be safely
    /// joined to a directory.
    ///
    /// Every component must be a single [Component::Normal] on the current
    /// platform, so backslash separators and drive prefixes (`C:`) are rejected
    /// as well.
    pub fn is_normal(&self) -> bool {
        !self.inner.is_empty() && self.components().all(is_normal_component)
    }
}

// to allow searching in BTreeMap directly by str
impl Deref for TreePath {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl Borrow<str> for TreePath {
    fn borrow(&self) -> &str {
        self.inner.as_str()
    }
}
impl fmt::Display for TreePath {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

fn is_normal_component(component: &str) -> bool {
    if component.contains('\\') {
        return false;
    }

    let mut components = Path::new(component).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(normal)), None) if normal == component
    )
}
