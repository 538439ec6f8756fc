//! Bootstrap 5 input widgets.

use super::{element_class, element_id, html_escape, Widget, WidgetAttrs};

/// Attributes each widget writes itself and never copies from `attrs`.
const OWNED_ATTRS: &[&str] = &["type", "class", "id", "name", "value"];

/// Bootstrap 5 `<input>` widget (text, email, password, number, url).
#[derive(Debug, Clone)]
pub struct BootstrapTextInput {
    input_type: String,
    placeholder: Option<String>,
}

impl Default for BootstrapTextInput {
    fn default() -> Self {
        Self::with_type("text")
    }
}

impl BootstrapTextInput {
    /// Creates a text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input of an arbitrary HTML type.
    pub fn with_type(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
            placeholder: None,
        }
    }

    /// Creates an email input.
    pub fn email() -> Self {
        Self::with_type("email")
    }

    /// Creates a password input. Submitted values are not echoed back.
    pub fn password() -> Self {
        Self::with_type("password")
    }

    /// Creates a number input.
    pub fn number() -> Self {
        Self::with_type("number")
    }

    /// Creates a URL input.
    pub fn url() -> Self {
        Self::with_type("url")
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for BootstrapTextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let mut html = format!(
            r#"<input type="{}" class="{}" id="{}" name="{}""#,
            html_escape(&self.input_type),
            html_escape(&element_class("form-control", attrs)),
            html_escape(&element_id(name, attrs)),
            html_escape(name),
        );
        // Password values are never echoed back into the page.
        if let Some(v) = value.filter(|_| self.input_type != "password") {
            html.push_str(&format!(r#" value="{}""#, html_escape(v)));
        }
        if let Some(p) = &self.placeholder {
            html.push_str(&format!(r#" placeholder="{}""#, html_escape(p)));
        }
        html.push_str(&attrs.to_html_except(OWNED_ATTRS));
        html.push('>');
        html
    }

    fn input_type(&self) -> &str {
        &self.input_type
    }
}

/// Bootstrap 5 `<textarea>` widget.
#[derive(Debug, Clone)]
pub struct BootstrapTextarea {
    rows: usize,
}

impl Default for BootstrapTextarea {
    fn default() -> Self {
        Self { rows: 4 }
    }
}

impl BootstrapTextarea {
    /// Creates a textarea with the given number of rows.
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }
}

impl Widget for BootstrapTextarea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        format!(
            r#"<textarea class="{}" id="{}" name="{}" rows="{}"{}>{}</textarea>"#,
            html_escape(&element_class("form-control", attrs)),
            html_escape(&element_id(name, attrs)),
            html_escape(name),
            self.rows,
            attrs.to_html_except(&["class", "id", "name", "rows"]),
            value.map(html_escape).unwrap_or_default(),
        )
    }

    fn input_type(&self) -> &str {
        "textarea"
    }
}

/// Bootstrap 5 `<select>` widget.
#[derive(Debug, Clone)]
pub struct BootstrapSelect {
    choices: Vec<(String, String)>,
    blank_label: Option<String>,
}

impl BootstrapSelect {
    /// Creates a select over `(value, label)` choices with a blank first option.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            blank_label: Some("---------".to_string()),
        }
    }

    /// Drops the blank option.
    #[must_use]
    pub fn no_blank(mut self) -> Self {
        self.blank_label = None;
        self
    }

    /// Sets the label of the blank option, enabling it if it was dropped.
    #[must_use]
    pub fn blank_label(mut self, label: impl Into<String>) -> Self {
        self.blank_label = Some(label.into());
        self
    }
}

impl Widget for BootstrapSelect {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let mut options = String::new();
        if let Some(blank) = &self.blank_label {
            options.push_str(&format!(
                r#"<option value="">{}</option>"#,
                html_escape(blank)
            ));
        }
        for (opt_value, label) in &self.choices {
            let selected = if value == Some(opt_value.as_str()) {
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                html_escape(opt_value),
                html_escape(label)
            ));
        }

        format!(
            r#"<select class="{}" id="{}" name="{}"{}>{options}</select>"#,
            html_escape(&element_class("form-select", attrs)),
            html_escape(&element_id(name, attrs)),
            html_escape(name),
            attrs.to_html_except(OWNED_ATTRS),
        )
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

/// Bootstrap 5 checkbox, optionally styled as a switch.
#[derive(Debug, Clone, Default)]
pub struct BootstrapCheckbox {
    label: Option<String>,
    is_switch: bool,
}

impl BootstrapCheckbox {
    /// Creates a plain checkbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a checkbox styled as a Bootstrap switch.
    pub fn switch() -> Self {
        Self {
            is_switch: true,
            ..Self::default()
        }
    }

    /// Sets the inline label shown next to the box.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Widget for BootstrapCheckbox {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let id = html_escape(&element_id(name, attrs));
        let checked = if matches!(value, Some("true" | "on" | "1")) {
            " checked"
        } else {
            ""
        };
        let wrapper = if self.is_switch {
            "form-check form-switch"
        } else {
            "form-check"
        };
        let label = self
            .label
            .as_ref()
            .map(|l| {
                format!(
                    r#"<label class="form-check-label" for="{id}">{}</label>"#,
                    html_escape(l)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<div class="{wrapper}"><input class="{}" type="checkbox" id="{id}" name="{}" value="true"{checked}{}>{label}</div>"#,
            html_escape(&element_class("form-check-input", attrs)),
            html_escape(name),
            attrs.to_html_except(OWNED_ATTRS),
        )
    }

    fn input_type(&self) -> &str {
        "checkbox"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input() {
        let widget = BootstrapTextInput::new().placeholder("Enter name");
        let html = widget.render("username", Some("ada"), &WidgetAttrs::new());
        assert_eq!(
            html,
            r#"<input type="text" class="form-control" id="id_username" name="username" value="ada" placeholder="Enter name">"#
        );
    }

    #[test]
    fn test_password_value_not_rendered() {
        let html = BootstrapTextInput::password().render("pw", Some("secret"), &WidgetAttrs::new());
        assert!(html.contains(r#"type="password""#));
        assert!(!html.contains("secret"));
    }

    #[test]
    fn test_extra_attrs_and_class() {
        let attrs = WidgetAttrs::new()
            .with("class", "is-large")
            .with("required", "required");
        let html = BootstrapTextInput::email().render("email", None, &attrs);
        assert!(html.contains(r#"class="form-control is-large""#));
        assert!(html.contains(r#" required="required""#));
    }

    #[test]
    fn test_textarea_escapes_content() {
        let html = BootstrapTextarea::new(6).render("bio", Some("<hi>"), &WidgetAttrs::new());
        assert!(html.contains(r#"rows="6""#));
        assert!(html.contains("&lt;hi&gt;</textarea>"));
    }

    #[test]
    fn test_select_marks_selected() {
        let widget = BootstrapSelect::new(vec![("1", "One"), ("2", "Two")]);
        let html = widget.render("n", Some("2"), &WidgetAttrs::new());
        assert!(html.contains(r#"<option value="">---------</option>"#));
        assert!(html.contains(r#"<option value="2" selected>Two</option>"#));
        assert!(!html.contains(r#"value="1" selected"#));
    }

    #[test]
    fn test_select_without_blank() {
        let html = BootstrapSelect::new(vec![("a", "A")])
            .no_blank()
            .render("x", None, &WidgetAttrs::new());
        assert!(!html.contains(r#"value="""#));
    }

    #[test]
    fn test_checkbox_switch() {
        let html = BootstrapCheckbox::switch()
            .label("Enabled")
            .render("on", Some("true"), &WidgetAttrs::new());
        assert!(html.contains("form-check form-switch"));
        assert!(html.contains(" checked"));
        assert!(html.contains(r#"<label class="form-check-label" for="id_on">Enabled</label>"#));
    }
}
