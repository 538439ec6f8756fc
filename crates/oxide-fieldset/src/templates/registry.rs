//! Cache of parsed Liquid templates.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use super::{TemplateConfig, TemplateContext, TemplateResolver, BUILTIN_TEMPLATES};
use crate::error::{FormError, Result};

/// Named templates, each parsed once when registered.
pub struct TemplateRegistry {
    parser: liquid::Parser,
    templates: HashMap<String, liquid::Template>,
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &self.names())
            .finish_non_exhaustive()
    }
}

impl TemplateRegistry {
    /// Creates a registry with no templates.
    pub fn empty() -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| FormError::template("<parser>", e))?;
        Ok(Self {
            parser,
            templates: HashMap::new(),
        })
    }

    /// Creates a registry holding the bundled templates.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::empty()?;
        for (name, source) in BUILTIN_TEMPLATES {
            registry.register(*name, source)?;
        }
        Ok(registry)
    }

    /// Bundled templates, overridden by any found in `config.template_dir`.
    pub fn from_config(config: &TemplateConfig) -> Result<Self> {
        let mut registry = Self::builtin()?;
        if let Some(dir) = &config.template_dir {
            registry.load_dir(dir)?;
        }
        Ok(registry)
    }

    /// Parses `source` and stores it under `name`, replacing any previous
    /// template of that name. On a parse error the registry is unchanged.
    pub fn register(&mut self, name: impl Into<String>, source: &str) -> Result<&mut Self> {
        let name = name.into();
        let template = self
            .parser
            .parse(source)
            .map_err(|e| FormError::template(&name, e))?;
        if self.templates.insert(name.clone(), template).is_some() {
            debug!(template = %name, "replaced template");
        } else {
            debug!(template = %name, "registered template");
        }
        Ok(self)
    }

    /// Registers every `*.html` file in `dir` under its file stem, in path
    /// order. Returns how many templates were loaded.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| FormError::TemplateIo { path, source }
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err(dir))? {
            let path = entry.map_err(io_err(dir))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "html") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut loaded = 0;
        for path in &paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!(path = %path.display(), "skipping template with non UTF-8 name");
                continue;
            };
            let source = fs::read_to_string(path).map_err(io_err(path))?;
            self.register(name, &source)?;
            loaded += 1;
        }
        debug!(dir = %dir.display(), loaded, "loaded template directory");
        Ok(loaded)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered template names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl TemplateResolver for TemplateRegistry {
    fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| FormError::TemplateNotFound(name.to_string()))?;
        let globals = liquid::to_object(context).map_err(|e| FormError::template(name, e))?;
        trace!(template = name, fields = context.fields.len(), "rendering template");
        template
            .render(&globals)
            .map_err(|e| FormError::template(name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{Attribute, FIELDSET_TEMPLATE};

    fn render_fieldset(context: &TemplateContext) -> String {
        TemplateRegistry::builtin()
            .unwrap()
            .render(FIELDSET_TEMPLATE, context)
            .unwrap()
    }

    #[test]
    fn test_builtin_empty_fieldset() {
        assert_eq!(
            render_fieldset(&TemplateContext::default()),
            "<fieldset>\n</fieldset>"
        );
    }

    #[test]
    fn test_builtin_fieldset_attributes() {
        let context = TemplateContext {
            fields: vec!["<input name=\"a\">".to_string(), "<input name=\"b\">".to_string()],
            classes: vec!["card".to_string(), "row".to_string()],
            tags: vec!["disabled".to_string()],
            css: vec![Attribute::new("color", "red"), Attribute::new("margin", "0")],
            id: "shipping".to_string(),
            params: vec![Attribute::new("data-step", "2")],
        };
        assert_eq!(
            render_fieldset(&context),
            "<fieldset id=\"shipping\" class=\"card row\" style=\"color: red; margin: 0;\" disabled data-step=\"2\">\n\
             <input name=\"a\">\n\
             <input name=\"b\">\n\
             </fieldset>"
        );
    }

    #[test]
    fn test_builtin_escapes_attribute_values() {
        let context = TemplateContext {
            id: "a\"b".to_string(),
            params: vec![Attribute::new("title", "<x>")],
            ..TemplateContext::default()
        };
        let html = render_fieldset(&context);
        assert!(html.contains(r#"id="a&quot;b""#));
        assert!(html.contains(r#"title="&lt;x&gt;""#));
    }

    #[test]
    fn test_unknown_template() {
        let registry = TemplateRegistry::empty().unwrap();
        let err = registry
            .render("fieldset", &TemplateContext::default())
            .unwrap_err();
        assert!(matches!(err, FormError::TemplateNotFound(name) if name == "fieldset"));
    }

    #[test]
    fn test_malformed_template_is_rejected() {
        let mut registry = TemplateRegistry::builtin().unwrap();
        let err = registry
            .register("fieldset", "{% for field in fields %}")
            .unwrap_err();
        assert!(matches!(err, FormError::Template { ref name, .. } if name == "fieldset"));
        // The previous template survives a failed replacement.
        assert!(registry
            .render("fieldset", &TemplateContext::default())
            .is_ok());
    }

    #[test]
    fn test_register_overrides() {
        let mut registry = TemplateRegistry::builtin().unwrap();
        registry.register("fieldset", "{{ id }}").unwrap();
        let context = TemplateContext {
            id: "x".to_string(),
            ..TemplateContext::default()
        };
        assert_eq!(registry.render("fieldset", &context).unwrap(), "x");
        assert_eq!(registry.names(), vec!["fieldset"]);
    }
}
