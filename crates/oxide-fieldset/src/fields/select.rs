//! Choice field constructor.

use super::FormField;
use crate::widgets::BootstrapSelect;

/// Dropdown over `(value, label)` choices.
pub fn choice_field(
    name: &str,
    label: &str,
    choices: Vec<(&str, &str)>,
    required: bool,
) -> FormField {
    let field = FormField::new(name, label, BootstrapSelect::new(choices));
    if required {
        field.required()
    } else {
        field
    }
}
