//! Form fields: the [`Field`] capability and its Bootstrap implementation.

mod checkbox;
mod hidden;
mod select;
mod text;

pub use checkbox::{boolean_field, checkbox_field};
pub use hidden::hidden_field;
pub use select::choice_field;
pub use text::{char_field, email_field, password_field, text_field, url_field};

use ironhtml::html;
use ironhtml_elements::Div;

use crate::markup::Markup;
use crate::widgets::{element_id, Widget, WidgetAttrs};

/// Anything a fieldset can hold: named, and able to render itself.
pub trait Field: Send + Sync {
    /// The field name. Unique within a fieldset.
    fn name(&self) -> &str;

    /// Renders the field as trusted HTML.
    fn render(&self) -> Markup;

    /// Whether this is the empty sentinel returned for lookup misses.
    fn is_empty(&self) -> bool {
        self.name().is_empty()
    }

    /// Boxes the field for storage in a [`FieldSet`](crate::FieldSet).
    fn boxed(self) -> Box<dyn Field>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// Returned by [`FieldSet::field`](crate::FieldSet::field) when no field
/// has the requested name. Has an empty name and renders nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyField;

pub(crate) static EMPTY_FIELD: EmptyField = EmptyField;

impl Field for EmptyField {
    fn name(&self) -> &str {
        ""
    }

    fn render(&self) -> Markup {
        Markup::empty()
    }
}

/// A labelled form field backed by a [`Widget`].
pub struct FormField {
    /// Field name.
    pub name: String,
    /// Field label.
    pub label: String,
    /// Whether the field is required.
    pub required: bool,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Help text.
    pub help_text: Option<String>,
    /// Initial value.
    pub initial: Option<String>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
    /// Whether the field is disabled.
    pub disabled: bool,
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("input_type", &self.widget.input_type())
            .field("help_text", &self.help_text)
            .field("initial", &self.initial)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl FormField {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        widget: impl Widget + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            widget: Box::new(widget),
            help_text: None,
            initial: None,
            attrs: WidgetAttrs::new(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Sets an attribute on the rendered input element.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl Field for FormField {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> Markup {
        let id = element_id(&self.name, &self.attrs);

        let mut attrs = self.attrs.clone();
        attrs.set("id", &id);
        if self.disabled {
            attrs.set("disabled", "disabled");
        }
        if self.required {
            attrs.set("required", "required");
        }

        let widget_html = self
            .widget
            .render(&self.name, self.initial.as_deref(), &attrs);

        match self.widget.input_type() {
            "hidden" => return Markup::new(widget_html),
            // Checkboxes carry their own inline label.
            "checkbox" => {
                return Markup::new(html! { div.class("mb-3") }.raw(&widget_html).render())
            }
            _ => {}
        }

        let label_text = if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        };
        let label_el = html! {
            label.for_(#id).class("form-label") { #label_text }
        };

        let help_text = self.help_text.clone();

        let html = html! { div.class("mb-3") }
            .raw(label_el.render())
            .raw(&widget_html)
            .when(help_text.is_some(), |d| {
                d.child::<Div, _>(|h| {
                    h.class("form-text")
                        .text(help_text.as_deref().unwrap_or(""))
                })
            })
            .render();

        Markup::new(html)
    }
}
