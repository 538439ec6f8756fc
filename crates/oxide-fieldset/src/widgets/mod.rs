//! Widgets render the single input element inside a field.

mod bootstrap;

pub use bootstrap::{BootstrapCheckbox, BootstrapSelect, BootstrapTextInput, BootstrapTextarea};

use std::collections::BTreeMap;

/// Extra HTML attributes applied to a widget's input element.
///
/// Kept sorted so that rendering the same attributes always yields the
/// same attribute order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
    attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Renders every attribute except `skip` as ` key="value"` pairs.
    ///
    /// The leading space is included so the result can be appended directly
    /// after a tag name.
    pub fn to_html_except(&self, skip: &[&str]) -> String {
        self.attrs
            .iter()
            .filter(|(k, _)| !skip.contains(&k.as_str()))
            .map(|(k, v)| format!(r#" {}="{}""#, html_escape(k), html_escape(v)))
            .collect()
    }

    /// Renders all attributes.
    pub fn to_html(&self) -> String {
        self.to_html_except(&[])
    }
}

/// Trait for widgets that render an HTML input.
pub trait Widget: Send + Sync {
    /// Renders the widget as HTML.
    ///
    /// # Arguments
    /// * `name` - The field name (used for the name attribute)
    /// * `value` - The current value (if any)
    /// * `attrs` - Additional HTML attributes
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

    /// Returns the HTML input type.
    fn input_type(&self) -> &str {
        "text"
    }
}

/// A hidden input. Fields using it render without label or wrapper.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        format!(
            r#"<input type="hidden" name="{}"{value_attr}{}>"#,
            html_escape(name),
            attrs.to_html_except(&["type", "name", "value"])
        )
    }

    fn input_type(&self) -> &str {
        "hidden"
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Element id for a field, honouring an explicit `id` attribute.
pub(crate) fn element_id(name: &str, attrs: &WidgetAttrs) -> String {
    attrs
        .get("id")
        .map_or_else(|| format!("id_{name}"), str::to_string)
}

/// Joins a widget's base class with any extra `class` attribute.
pub(crate) fn element_class(base: &str, attrs: &WidgetAttrs) -> String {
    match attrs.get("class") {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_input() {
        let html = HiddenInput.render("next", Some("/home"), &WidgetAttrs::new());
        assert_eq!(html, r#"<input type="hidden" name="next" value="/home">"#);
    }

    #[test]
    fn test_attrs_are_sorted_and_escaped() {
        let attrs = WidgetAttrs::new()
            .with("placeholder", "\"quoted\"")
            .with("autocomplete", "off");
        assert_eq!(
            attrs.to_html(),
            r#" autocomplete="off" placeholder="&quot;quoted&quot;""#
        );
    }

    #[test]
    fn test_attrs_skip() {
        let attrs = WidgetAttrs::new().with("id", "x").with("maxlength", "10");
        assert_eq!(attrs.to_html_except(&["id"]), r#" maxlength="10""#);
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("it's"), "it&#x27;s");
    }

    #[test]
    fn test_element_id_and_class() {
        let attrs = WidgetAttrs::new().with("id", "custom").with("class", "wide");
        assert_eq!(element_id("email", &attrs), "custom");
        assert_eq!(element_id("email", &WidgetAttrs::new()), "id_email");
        assert_eq!(element_class("form-control", &attrs), "form-control wide");
    }
}
