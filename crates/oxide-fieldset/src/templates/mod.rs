//! Template resolution for fieldset rendering.
//!
//! Templates are Liquid sources parsed once into a [`TemplateRegistry`].
//! A process-wide registry is installed with [`init`] at startup (so a
//! missing or malformed template is reported before the first page is
//! served) and read with [`global`].
//!
//! ```rust
//! use oxide_fieldset::templates::{TemplateContext, TemplateRegistry, TemplateResolver};
//!
//! let mut registry = TemplateRegistry::builtin().unwrap();
//! registry
//!     .register("fieldset", "<fieldset id=\"{{ id }}\"></fieldset>")
//!     .unwrap();
//!
//! let context = TemplateContext {
//!     id: "billing".to_string(),
//!     ..TemplateContext::default()
//! };
//! let html = registry.render("fieldset", &context).unwrap();
//! assert_eq!(html, r#"<fieldset id="billing"></fieldset>"#);
//! ```

mod config;
mod registry;

pub use config::TemplateConfig;
pub use registry::TemplateRegistry;

use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::error::{FormError, Result};

/// Name of the template used by [`FieldSet::render`](crate::FieldSet::render).
pub const FIELDSET_TEMPLATE: &str = "fieldset";

/// Bundled templates, registered by [`TemplateRegistry::builtin`].
pub(crate) const BUILTIN_TEMPLATES: &[(&str, &str)] =
    &[(FIELDSET_TEMPLATE, include_str!("../../templates/fieldset.html"))];

/// Turns a named template plus a data context into markup text.
pub trait TemplateResolver {
    fn render(&self, name: &str, context: &TemplateContext) -> Result<String>;
}

impl<T: TemplateResolver + ?Sized> TemplateResolver for &T {
    fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        (**self).render(name, context)
    }
}

/// A `key="value"` pair exposed to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Data handed to the `fieldset` template.
///
/// Collections are already in render order: fields in insertion order,
/// everything else sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    /// Rendered markup of each child field.
    pub fields: Vec<String>,
    /// CSS classes.
    pub classes: Vec<String>,
    /// Boolean attributes such as `disabled`.
    pub tags: Vec<String>,
    /// Inline style declarations.
    pub css: Vec<Attribute>,
    /// Element id; empty when unset.
    pub id: String,
    /// Arbitrary extra attributes.
    pub params: Vec<Attribute>,
}

static GLOBAL: OnceLock<TemplateRegistry> = OnceLock::new();

/// Builds the registry described by `config` and installs it process-wide.
///
/// Fails if a template cannot be read or parsed, or if a registry is
/// already installed (including the built-in fallback installed by an
/// earlier [`global`] call).
pub fn init(config: &TemplateConfig) -> Result<&'static TemplateRegistry> {
    let registry = TemplateRegistry::from_config(config)?;
    GLOBAL
        .set(registry)
        .map_err(|_| FormError::AlreadyInitialized)?;
    debug!(template_dir = ?config.template_dir, "installed global template registry");
    global()
}

/// Returns the process-wide registry, installing the built-in templates
/// on first use if [`init`] was never called.
pub fn global() -> Result<&'static TemplateRegistry> {
    if let Some(registry) = GLOBAL.get() {
        return Ok(registry);
    }
    let registry = TemplateRegistry::builtin()?;
    Ok(GLOBAL.get_or_init(|| {
        debug!("installed built-in template registry");
        registry
    }))
}
