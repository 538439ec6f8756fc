//! # oxide-fieldset
//!
//! Programmatic `<fieldset>` markup with Bootstrap 5 fields.
//!
//! This crate provides:
//! - [`FieldSet`], a named and ordered group of fields with classes,
//!   boolean attributes, inline styles and extra attributes
//! - Field and widget types for common inputs
//! - Cached Liquid templates that turn a fieldset into HTML
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_fieldset::fields::{char_field, email_field};
//! use oxide_fieldset::{Field, FieldSet};
//!
//! let mut contact = FieldSet::new(
//!     "contact",
//!     vec![
//!         char_field("name", "Name", 100, true).boxed(),
//!         email_field("email", "Email", true).boxed(),
//!     ],
//! );
//! contact
//!     .set_id("contact")
//!     .add_class("border")
//!     .add_css("padding", "1rem");
//!
//! let html = contact.render().unwrap();
//! assert!(html.as_str().starts_with(r#"<fieldset id="contact" class="border""#));
//! assert!(html.as_str().contains(r#"name="email""#));
//! ```
//!
//! ## Looking Up Fields
//!
//! Missing names return an empty sentinel rather than an error:
//!
//! ```rust
//! use oxide_fieldset::fields::char_field;
//! use oxide_fieldset::{Field, FieldSet};
//!
//! let fieldset = FieldSet::new("f1", Vec::new()).with_field(char_field("x", "X", 10, false));
//! assert_eq!(fieldset.field("x").name(), "x");
//! assert!(fieldset.field("nonexistent").is_empty());
//! ```
//!
//! ## Templates
//!
//! [`FieldSet::render`] uses the process-wide registry. Install it once at
//! startup to load overrides and to surface template errors early:
//!
//! ```rust,no_run
//! use oxide_fieldset::templates::{self, TemplateConfig};
//!
//! templates::init(&TemplateConfig::from_env()).expect("templates");
//! ```
//!
//! [`FieldSet::render_with`] accepts any
//! [`TemplateResolver`](templates::TemplateResolver) instead.

mod error;
mod fieldset;
pub mod fields;
mod markup;
pub mod templates;
pub mod widgets;

pub use error::{FormError, Result};
pub use fields::{EmptyField, Field, FormField};
pub use fieldset::FieldSet;
pub use markup::Markup;
