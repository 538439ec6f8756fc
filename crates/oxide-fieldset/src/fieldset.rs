//! Named groups of fields rendered as a `<fieldset>`.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{trace, warn};

use crate::error::Result;
use crate::fields::{Field, EMPTY_FIELD};
use crate::markup::Markup;
use crate::templates::{self, Attribute, TemplateContext, TemplateResolver, FIELDSET_TEMPLATE};

const DISABLED: &str = "disabled";

/// A named, ordered collection of fields plus the attributes of the
/// `<fieldset>` element wrapping them.
///
/// Every mutator returns `&mut Self` so calls can be chained:
///
/// ```rust
/// use oxide_fieldset::FieldSet;
///
/// let mut fieldset = FieldSet::new("address", Vec::new());
/// fieldset.add_class("card").set_id("address").disable();
/// assert!(fieldset.is_disabled());
/// ```
pub struct FieldSet {
    name: String,
    id: String,
    classes: BTreeSet<String>,
    tags: BTreeSet<String>,
    css: BTreeMap<String, String>,
    params: BTreeMap<String, String>,
    fields: Vec<Box<dyn Field>>,
    field_index: HashMap<String, usize>,
}

impl std::fmt::Debug for FieldSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let field_names: Vec<&str> = self.fields.iter().map(|field| field.name()).collect();
        f.debug_struct("FieldSet")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("classes", &self.classes)
            .field("tags", &self.tags)
            .field("css", &self.css)
            .field("params", &self.params)
            .field("fields", &field_names)
            .finish()
    }
}

impl FieldSet {
    /// Creates a fieldset holding `fields` in the given order.
    ///
    /// Field names should be unique. If two fields share a name both are
    /// kept and rendered, but lookup by name finds the later one.
    pub fn new(name: impl Into<String>, fields: Vec<Box<dyn Field>>) -> Self {
        let mut fieldset = Self {
            name: name.into(),
            id: String::new(),
            classes: BTreeSet::new(),
            tags: BTreeSet::new(),
            css: BTreeMap::new(),
            params: BTreeMap::new(),
            fields: Vec::with_capacity(fields.len()),
            field_index: HashMap::with_capacity(fields.len()),
        };
        for field in fields {
            fieldset.insert(field);
        }
        fieldset
    }

    /// Builder-style variant of [`FieldSet::push_field`].
    #[must_use]
    pub fn with_field(mut self, field: impl Field + 'static) -> Self {
        self.insert(Box::new(field));
        self
    }

    /// Appends a field and makes it reachable through [`FieldSet::field`].
    pub fn push_field(&mut self, field: impl Field + 'static) -> &mut Self {
        self.insert(Box::new(field));
        self
    }

    fn insert(&mut self, field: Box<dyn Field>) {
        let index = self.fields.len();
        if let Some(shadowed) = self.field_index.insert(field.name().to_string(), index) {
            warn!(
                fieldset = %self.name,
                field = field.name(),
                shadowed,
                "duplicate field name, lookup now returns the later field"
            );
        }
        self.fields.push(field);
    }

    /// The name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field called `name`, or the empty sentinel (whose
    /// [`Field::is_empty`] is true) when there is none.
    pub fn field(&self, name: &str) -> &dyn Field {
        match self.get(name) {
            Some(field) => field,
            None => {
                trace!(fieldset = %self.name, field = name, "field lookup miss");
                &EMPTY_FIELD
            }
        }
    }

    /// Returns the field called `name`, if any.
    pub fn get(&self, name: &str) -> Option<&dyn Field> {
        self.field_index
            .get(name)
            .map(|&index| self.fields[index].as_ref())
    }

    /// Fields in render order.
    pub fn fields(&self) -> &[Box<dyn Field>] {
        &self.fields
    }

    /// Number of fields, duplicates included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the fieldset holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The element id; empty when unset.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sets the element id. An empty id renders no `id` attribute.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = id.into();
        self
    }

    /// CSS classes, sorted.
    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    /// Whether `class` is set.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Adds a CSS class. Adding a class twice keeps one copy.
    pub fn add_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.classes.insert(class.into());
        self
    }

    /// Removes `class`. Nothing happens if it was not present.
    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        self.classes.remove(class);
        self
    }

    /// Boolean attributes, sorted.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Whether `tag` is set.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Adds a no-value attribute such as `disabled`.
    ///
    /// Tags that are not valid attribute names are kept here but left out
    /// of the rendered markup.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.insert(tag.into());
        self
    }

    /// Removes `tag`. Nothing happens if it was not present.
    pub fn remove_tag(&mut self, tag: &str) -> &mut Self {
        self.tags.remove(tag);
        self
    }

    /// Adds the `disabled` tag.
    pub fn disable(&mut self) -> &mut Self {
        self.add_tag(DISABLED)
    }

    /// Removes the `disabled` tag.
    pub fn enable(&mut self) -> &mut Self {
        self.remove_tag(DISABLED)
    }

    /// Whether the `disabled` tag is set.
    pub fn is_disabled(&self) -> bool {
        self.has_tag(DISABLED)
    }

    /// Inline style properties, sorted by property name.
    pub fn css(&self) -> &BTreeMap<String, String> {
        &self.css
    }

    /// Sets an inline style property, replacing any previous value.
    ///
    /// When rendered, properties with an invalid name are dropped and `;`,
    /// `{` and `}` are removed from values.
    pub fn add_css(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.css.insert(key.into(), value.into());
        self
    }

    /// Removes a style property. Nothing happens if it was not set.
    pub fn remove_css(&mut self, key: &str) -> &mut Self {
        self.css.remove(key);
        self
    }

    /// Extra attributes, sorted by name.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Sets an arbitrary `key="value"` attribute, replacing any previous value.
    ///
    /// Keys that are not valid attribute names are left out of the
    /// rendered markup.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Snapshot of the current state as template data. Each field is
    /// rendered here.
    ///
    /// Tags and param keys that are not valid attribute names are skipped,
    /// as are css properties with an invalid name. Css values lose any
    /// `;`, `{` or `}` so a value cannot start another rule.
    pub fn context(&self) -> TemplateContext {
        let tags = self
            .tags
            .iter()
            .filter(|tag| self.accept("tag", tag, is_attribute_name))
            .cloned()
            .collect();
        let css = self
            .css
            .iter()
            .filter(|(key, _)| self.accept("css property", key, is_css_property))
            .map(|(key, value)| Attribute::new(key.as_str(), strip_css_delimiters(value)))
            .collect();
        let params = self
            .params
            .iter()
            .filter(|(key, _)| self.accept("param", key, is_attribute_name))
            .map(|(key, value)| Attribute::new(key.as_str(), value.as_str()))
            .collect();

        TemplateContext {
            fields: self
                .fields
                .iter()
                .map(|field| field.render().into_string())
                .collect(),
            classes: self.classes.iter().cloned().collect(),
            tags,
            css,
            id: self.id.clone(),
            params,
        }
    }

    fn accept(&self, kind: &str, name: &str, valid: fn(&str) -> bool) -> bool {
        let ok = valid(name);
        if !ok {
            warn!(fieldset = %self.name, kind, name, "skipping invalid attribute name");
        }
        ok
    }

    /// Renders through the process-wide template registry.
    pub fn render(&self) -> Result<Markup> {
        self.render_with(templates::global()?)
    }

    /// Renders the `fieldset` template of `resolver`.
    pub fn render_with(&self, resolver: impl TemplateResolver) -> Result<Markup> {
        trace!(fieldset = %self.name, fields = self.fields.len(), "rendering fieldset");
        resolver
            .render(FIELDSET_TEMPLATE, &self.context())
            .map(Markup::from)
    }
}

/// Attribute names limited to `[A-Za-z0-9_:.-]`.
fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-'))
}

fn is_css_property(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn strip_css_delimiters(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, ';' | '{' | '}')).collect()
}
