//! Trusted HTML output.

use serde::Serialize;

/// A fragment of HTML that is trusted to be inserted verbatim.
///
/// Produced by field and fieldset rendering. Templates embed it without
/// escaping, so only construct one from markup you generated yourself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wraps already-rendered HTML.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Markup with no content.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Markup {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
