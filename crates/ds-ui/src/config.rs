//! Serializable theme settings
//!
//! [`ThemeConfig`] is the persisted form of a [`Theme`]: variant, density and
//! accessibility policy. Resolver overrides are code, not data, so they are
//! supplied separately through [`ThemeConfig::into_theme_with`].

use crate::styles::ComponentStyles;
use crate::theme::{AccessibilityPolicy, Density, Theme, ThemeVariant};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading theme settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Malformed JSON
    #[error("Invalid theme configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Unrecognized theme variant name
    #[error("Unknown theme variant: {0}")]
    UnknownVariant(String),

    /// Unrecognized density name
    #[error("Unknown density: {0}")]
    UnknownDensity(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Persisted theme settings
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// Light or dark appearance
    pub variant: ThemeVariant,
    /// Spacing density
    pub density: Density,
    /// Accessibility overrides
    pub accessibility: AccessibilityPolicy,
}

impl ThemeConfig {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(
            variant = %config.variant,
            density = %config.density,
            "Loaded theme configuration"
        );
        Ok(config)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build a theme with the built-in resolvers
    pub fn into_theme(self) -> Theme {
        self.into_theme_with(ComponentStyles::default())
    }

    /// Build a theme with the given resolver registry
    pub fn into_theme_with(self, styles: ComponentStyles) -> Theme {
        Theme::new(self.variant, self.density, self.accessibility, styles)
    }
}

impl From<&Theme> for ThemeConfig {
    fn from(theme: &Theme) -> Self {
        Self {
            variant: theme.variant(),
            density: theme.density(),
            accessibility: *theme.accessibility(),
        }
    }
}
