//! Hidden field constructor.

use super::FormField;
use crate::widgets::HiddenInput;

/// Hidden input carrying `value`. Renders without label or wrapper.
pub fn hidden_field(name: &str, value: &str) -> FormField {
    FormField::new(name, "", HiddenInput).initial(value)
}
