//! Text field constructors.

use super::FormField;
use crate::widgets::{BootstrapTextInput, BootstrapTextarea};

fn required_if(field: FormField, required: bool) -> FormField {
    if required {
        field.required()
    } else {
        field
    }
}

/// Single-line text input limited to `max_length` characters.
pub fn char_field(name: &str, label: &str, max_length: usize, required: bool) -> FormField {
    let field = FormField::new(name, label, BootstrapTextInput::new())
        .attr("maxlength", max_length.to_string());
    required_if(field, required)
}

/// Multi-line textarea.
pub fn text_field(name: &str, label: &str, rows: usize, required: bool) -> FormField {
    required_if(
        FormField::new(name, label, BootstrapTextarea::new(rows)),
        required,
    )
}

pub fn email_field(name: &str, label: &str, required: bool) -> FormField {
    required_if(
        FormField::new(name, label, BootstrapTextInput::email()),
        required,
    )
}

/// Password input. Always required; `min_length` becomes the `minlength` attribute.
pub fn password_field(name: &str, label: &str, min_length: Option<usize>) -> FormField {
    let field = FormField::new(name, label, BootstrapTextInput::password()).required();
    match min_length {
        Some(min) => field.attr("minlength", min.to_string()),
        None => field,
    }
}

pub fn url_field(name: &str, label: &str, required: bool) -> FormField {
    let field = FormField::new(name, label, BootstrapTextInput::url().placeholder("https://"));
    required_if(field, required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;

    #[test]
    fn test_char_field() {
        let field = char_field("username", "Username", 150, true);
        assert_eq!(field.name(), "username");
        assert!(field.required);
        assert_eq!(field.attrs.get("maxlength"), Some("150"));
    }

    #[test]
    fn test_text_field_renders_textarea() {
        let field = text_field("bio", "Bio", 3, false);
        assert!(field.render().as_str().contains(r#"rows="3""#));
    }

    #[test]
    fn test_password_field() {
        let field = password_field("password", "Password", Some(8));
        assert!(field.required);
        assert_eq!(field.attrs.get("minlength"), Some("8"));
        assert_eq!(field.widget.input_type(), "password");
    }

    #[test]
    fn test_url_field_placeholder() {
        let field = url_field("site", "Website", false);
        assert!(field.render().as_str().contains(r#"placeholder="https://""#));
    }
}
