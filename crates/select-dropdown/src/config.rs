//! Dropdown configuration.
//!
//! [`SelectConfig`] is the full external configuration of a dropdown, the
//! equivalent of the props a parent passes on every render. It can be built
//! in code with the `with_*` methods or loaded from TOML or JSON.
//!
//! # Example
//!
//! ```
//! use select_dropdown::SelectConfig;
//!
//! let config = SelectConfig::from_toml_str(r#"
//!     name = "timespan"
//!     defaultValue = "month"
//!
//!     [options]
//!     day = "Day"
//!     month = "Month"
//!     year = "Year"
//! "#).unwrap();
//!
//! assert_eq!(config.default_value.as_deref(), Some("month"));
//! ```

use serde::{Deserialize, Serialize};
use select_dropdown_core::logging::targets;

use crate::error::Result;
use crate::options::{Child, OptionSource, OptionsSpec};

/// External configuration of a dropdown.
///
/// Every field is optional. Presence of `value` puts the widget in
/// controlled mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Instance id; assigned once and never changed afterwards.
    pub id: Option<String>,
    /// Name of the mirrored hidden form field.
    pub name: Option<String>,
    /// Text shown when there is no selection.
    pub placeholder: Option<String>,
    /// Controlled value.
    pub value: Option<String>,
    /// Fallback when `value` is absent or not an option. Not validated.
    #[serde(alias = "defaultValue")]
    pub default_value: Option<String>,
    /// Explicit options; takes precedence over `children`.
    pub options: Option<OptionsSpec>,
    /// Declarative `option`/`optgroup` children.
    pub children: Vec<Child>,
    /// Keep groups that end up without options.
    #[serde(alias = "allowEmptyGroups")]
    pub allow_empty_groups: bool,
}

impl SelectConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        tracing::debug!(target: targets::CONFIG, format = "toml", "loaded select configuration");
        Ok(config)
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        tracing::debug!(target: targets::CONFIG, format = "json", "loaded select configuration");
        Ok(config)
    }

    /// Resolve which option input applies.
    ///
    /// Explicit `options` win; `children` are then ignored entirely.
    pub fn option_source(&self) -> OptionSource<'_> {
        match &self.options {
            Some(options) => {
                if !self.children.is_empty() {
                    tracing::trace!(
                        target: targets::CONFIG,
                        children = self.children.len(),
                        "explicit options supplied; ignoring children"
                    );
                }
                options.as_source()
            }
            None if !self.children.is_empty() => OptionSource::Declarative(&self.children),
            None => OptionSource::Empty,
        }
    }

    /// Whether this configuration controls the value.
    pub fn is_controlled(&self) -> bool {
        self.value.is_some()
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the id using builder pattern.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the form field name using builder pattern.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the controlled value using builder pattern.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the default value using builder pattern.
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set explicit options using builder pattern.
    pub fn with_options(mut self, options: impl Into<OptionsSpec>) -> Self {
        self.options = Some(options.into());
        self
    }

    /// Set declarative children using builder pattern.
    pub fn with_children(mut self, children: Vec<Child>) -> Self {
        self.children = children;
        self
    }

    /// Allow empty groups using builder pattern.
    pub fn with_allow_empty_groups(mut self, allow: bool) -> Self {
        self.allow_empty_groups = allow;
        self
    }
}
