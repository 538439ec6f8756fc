//! Where templates come from.

use std::path::PathBuf;

use serde::Deserialize;

/// Template location settings.
///
/// With no `template_dir` only the bundled templates are used. Files in
/// the directory override bundled templates of the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `<name>.html` Liquid templates.
    pub template_dir: Option<PathBuf>,
}

impl TemplateConfig {
    /// Environment variable read by [`TemplateConfig::from_env`].
    pub const TEMPLATE_DIR_ENV: &'static str = "OXIDE_FIELDSET_TEMPLATE_DIR";

    pub fn with_template_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: Some(dir.into()),
        }
    }

    /// Reads `OXIDE_FIELDSET_TEMPLATE_DIR`; unset or empty means bundled
    /// templates only.
    pub fn from_env() -> Self {
        Self {
            template_dir: std::env::var_os(Self::TEMPLATE_DIR_ENV)
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        }
    }
}
