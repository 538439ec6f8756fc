//! Checkbox field constructors.

use super::FormField;
use crate::widgets::BootstrapCheckbox;

pub fn boolean_field(name: &str, label: &str) -> FormField {
    FormField::new(name, label, BootstrapCheckbox::new().label(label))
}

/// Checkbox rendered either as a plain box or as a switch.
pub fn checkbox_field(name: &str, label: &str, is_switch: bool) -> FormField {
    let widget = if is_switch {
        BootstrapCheckbox::switch()
    } else {
        BootstrapCheckbox::new()
    };
    FormField::new(name, label, widget.label(label))
}
