//! List row resolution
//!
//! Accessory size, spacing and padding follow density only. Capabilities
//! contribute the tap target floor on `min_height` and decide whether a hover
//! highlight can appear at all.

use crate::theme::{with_alpha, Color, Theme, TRANSPARENT};
use crate::tokens::{duration, opacity, radius, sizing, spacing};
use crate::typography::{Font, TextRole};
use ds_platform::Capabilities;
use serde::{Deserialize, Serialize};

use super::DEFAULT_RESOLVER_ID;

/// Visual style of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListRowStyle {
    /// Edge-to-edge rows with separators
    #[default]
    Plain,
    /// Rows grouped on a rounded inset surface
    Inset,
    /// Navigation sidebar rows
    Sidebar,
}

/// Interaction state of a list row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListRowState {
    /// Idle
    #[default]
    Normal,
    /// Pointer is over the row
    Hovered,
    /// Being pressed
    Pressed,
    /// Currently selected
    Selected,
    /// Not interactive
    Disabled,
}

/// Resolved list row attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRowSpec {
    /// Row fill
    pub background: Color,
    /// Title color
    pub title_color: Color,
    /// Subtitle color
    pub subtitle_color: Color,
    /// Trailing accessory color
    pub accessory_color: Color,
    /// Title font
    pub title_font: Font,
    /// Subtitle font
    pub subtitle_font: Font,
    /// Corner radius of the highlight / row surface
    pub corner_radius: f32,
    /// Draw a separator below the row
    pub shows_separator: bool,
    /// Minimum row height
    pub min_height: f32,
    /// Horizontal padding
    pub horizontal_padding: f32,
    /// Vertical padding
    pub vertical_padding: f32,
    /// Gap between leading icon, text and accessory
    pub spacing: f32,
    /// Trailing accessory size
    pub accessory_size: f32,
    /// Opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Highlight transition duration in seconds
    pub animation_duration: f32,
}

/// Resolves list row specs
pub trait ListRowResolver: Send + Sync {
    /// Resolver identifier, for introspection
    fn id(&self) -> &'static str;

    /// Resolve a list row
    fn resolve(
        &self,
        theme: &Theme,
        style: ListRowStyle,
        state: ListRowState,
        capabilities: &Capabilities,
    ) -> ListRowSpec;
}

/// Built-in list row resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultListRowResolver;

impl ListRowResolver for DefaultListRowResolver {
    fn id(&self) -> &'static str {
        DEFAULT_RESOLVER_ID
    }

    fn resolve(
        &self,
        theme: &Theme,
        style: ListRowStyle,
        state: ListRowState,
        capabilities: &Capabilities,
    ) -> ListRowSpec {
        let palette = theme.palette();

        let (base_background, corner_radius, shows_separator) = match style {
            ListRowStyle::Plain => (palette.background.clone(), radius::NONE, true),
            ListRowStyle::Inset => (palette.surface.clone(), radius::MD, true),
            ListRowStyle::Sidebar => (TRANSPARENT.to_string(), radius::XS, false),
        };

        let background = match state {
            ListRowState::Hovered if capabilities.supports_hover => palette.fill.clone(),
            ListRowState::Pressed => palette.fill_pressed.clone(),
            ListRowState::Selected => with_alpha(&palette.accent, opacity::SELECTION_TINT),
            ListRowState::Normal | ListRowState::Hovered | ListRowState::Disabled => {
                base_background
            }
        };

        let title_color = if state == ListRowState::Selected {
            palette.accent.clone()
        } else {
            palette.text_primary.clone()
        };

        ListRowSpec {
            background,
            title_color,
            subtitle_color: palette.text_secondary.clone(),
            accessory_color: palette.text_tertiary.clone(),
            title_font: theme.font(TextRole::Body),
            subtitle_font: theme.font(TextRole::Footnote),
            corner_radius,
            shows_separator,
            min_height: theme
                .scaled(sizing::row::MIN_HEIGHT)
                .max(capabilities.minimum_tap_target_size),
            horizontal_padding: theme.scaled(spacing::LG),
            vertical_padding: theme.scaled(spacing::ROW_VERTICAL),
            spacing: theme.scaled(spacing::MD),
            accessory_size: theme.scaled(sizing::row::ACCESSORY),
            opacity: if state == ListRowState::Disabled {
                opacity::DISABLED
            } else {
                opacity::ENABLED
            },
            animation_duration: theme.animation_duration(duration::HIGHLIGHT),
        }
    }
}
