//! Text field resolution

use crate::theme::{Color, Theme};
use crate::tokens::{border, duration, opacity, radius, sizing};
use crate::typography::{Font, TextRole};
use serde::{Deserialize, Serialize};

use super::DEFAULT_RESOLVER_ID;

/// Interaction state of a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldState {
    /// Idle
    #[default]
    Normal,
    /// Being edited
    Focused,
    /// Not interactive
    Disabled,
    /// Visible but not editable
    ReadOnly,
}

/// Validation outcome shown by a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldValidation {
    /// Not validated
    #[default]
    None,
    /// Input accepted
    Valid,
    /// Input accepted with a warning
    Warning,
    /// Input rejected
    Error,
}

/// Resolved text field attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Fill color
    pub background: Color,
    /// Input text color
    pub text_color: Color,
    /// Placeholder text color
    pub placeholder_color: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Helper / validation message color
    pub helper_text_color: Color,
    /// Height
    pub height: f32,
    /// Corner radius
    pub corner_radius: f32,
    /// Horizontal padding
    pub horizontal_padding: f32,
    /// Input font
    pub font: Font,
    /// Opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Draw an icon next to the validation message
    pub shows_validation_icon: bool,
    /// State transition duration in seconds
    pub animation_duration: f32,
}

/// Resolves text field specs
#[cfg_attr(test, mockall::automock)]
pub trait FieldResolver: Send + Sync {
    /// Resolver identifier, for introspection
    fn id(&self) -> &'static str;

    /// Resolve a text field
    fn resolve(&self, theme: &Theme, state: FieldState, validation: FieldValidation) -> FieldSpec;
}

/// Built-in text field resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFieldResolver;

impl FieldResolver for DefaultFieldResolver {
    fn id(&self) -> &'static str {
        DEFAULT_RESOLVER_ID
    }

    fn resolve(&self, theme: &Theme, state: FieldState, validation: FieldValidation) -> FieldSpec {
        let palette = theme.palette();
        let focused = state == FieldState::Focused;

        let validation_color = match validation {
            FieldValidation::None => None,
            FieldValidation::Valid => Some(&palette.success),
            FieldValidation::Warning => Some(&palette.warning),
            FieldValidation::Error => Some(&palette.destructive),
        };

        let border_color = match validation_color {
            Some(color) => color.clone(),
            None if focused => palette.accent.clone(),
            None => palette.border.clone(),
        };

        let (background, text_color) = match state {
            FieldState::ReadOnly => (palette.fill.clone(), palette.text_secondary.clone()),
            FieldState::Normal | FieldState::Focused | FieldState::Disabled => {
                (palette.surface.clone(), palette.text_primary.clone())
            }
        };

        let shows_validation_icon = match validation {
            FieldValidation::None => false,
            FieldValidation::Error => true,
            FieldValidation::Valid | FieldValidation::Warning => {
                theme.accessibility().differentiate_without_color
            }
        };

        FieldSpec {
            background,
            text_color,
            placeholder_color: palette.text_tertiary.clone(),
            border_width: theme.border_width(if focused { border::MEDIUM } else { border::THIN }),
            border_color,
            helper_text_color: validation_color.unwrap_or(&palette.text_secondary).clone(),
            height: theme.scaled(sizing::field::HEIGHT),
            corner_radius: radius::MD,
            horizontal_padding: theme.scaled(sizing::field::PADDING_X),
            font: theme.font(TextRole::Body),
            opacity: if state == FieldState::Disabled {
                opacity::DISABLED_FIELD
            } else {
                opacity::ENABLED
            },
            shows_validation_icon,
            animation_duration: theme.animation_duration(duration::FAST),
        }
    }
}
