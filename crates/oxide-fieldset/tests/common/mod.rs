#![allow(dead_code)]

use oxide_fieldset::{Field, FieldSet, Markup};

/// Field with fixed markup, for checking exactly what a fieldset embeds.
#[derive(Debug, Clone)]
pub struct StubField {
    name: String,
    html: String,
}

impl StubField {
    pub fn new(name: &str, html: &str) -> Self {
        Self {
            name: name.to_string(),
            html: html.to_string(),
        }
    }
}

impl Field for StubField {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> Markup {
        Markup::new(self.html.clone())
    }
}

pub fn stub(name: &str) -> Box<dyn Field> {
    StubField::new(name, &format!(r#"<input name="{name}">"#)).boxed()
}

/// Fieldset `f1` holding stubs `x` then `y`.
pub fn xy_fieldset() -> FieldSet {
    FieldSet::new("f1", vec![stub("x"), stub("y")])
}

pub fn field_ptr(field: &dyn Field) -> *const () {
    field as *const dyn Field as *const ()
}
