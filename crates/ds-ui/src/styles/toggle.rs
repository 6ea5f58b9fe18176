//! Toggle (switch) resolution

use crate::theme::{Color, Theme};
use crate::tokens::{border, duration, opacity, sizing};
use serde::{Deserialize, Serialize};

use super::DEFAULT_RESOLVER_ID;

/// Interaction state of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleState {
    /// Idle
    #[default]
    Normal,
    /// Being pressed or dragged
    Pressed,
    /// Has keyboard focus
    Focused,
    /// Not interactive
    Disabled,
}

/// Resolved toggle attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSpec {
    /// Track fill
    pub track_color: Color,
    /// Thumb fill
    pub thumb_color: Color,
    /// Track outline, if drawn
    pub border_color: Option<Color>,
    /// Track outline width
    pub border_width: f32,
    /// Track width
    pub track_width: f32,
    /// Track height
    pub track_height: f32,
    /// Thumb diameter
    pub thumb_diameter: f32,
    /// Horizontal thumb stretch factor
    pub thumb_stretch: f32,
    /// Focus ring width, zero when not focused
    pub focus_ring_width: f32,
    /// Draw I/O glyphs on the track
    pub shows_state_labels: bool,
    /// Opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Thumb travel duration in seconds
    pub animation_duration: f32,
}

/// Resolves toggle specs
#[cfg_attr(test, mockall::automock)]
pub trait ToggleResolver: Send + Sync {
    /// Resolver identifier, for introspection
    fn id(&self) -> &'static str;

    /// Resolve a toggle
    fn resolve(&self, theme: &Theme, is_on: bool, state: ToggleState) -> ToggleSpec;
}

/// Built-in toggle resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultToggleResolver;

impl ToggleResolver for DefaultToggleResolver {
    fn id(&self) -> &'static str {
        DEFAULT_RESOLVER_ID
    }

    fn resolve(&self, theme: &Theme, is_on: bool, state: ToggleState) -> ToggleSpec {
        let palette = theme.palette();
        let accessibility = theme.accessibility();

        let border_width = theme.border_width(border::NONE);
        let border_color = (border_width > 0.0).then(|| palette.border_strong.clone());

        ToggleSpec {
            track_color: if is_on {
                palette.accent.clone()
            } else {
                palette.toggle_track_off.clone()
            },
            thumb_color: palette.thumb.clone(),
            border_color,
            border_width,
            track_width: sizing::toggle::TRACK_WIDTH,
            track_height: sizing::toggle::TRACK_HEIGHT,
            thumb_diameter: sizing::toggle::THUMB_DIAMETER,
            thumb_stretch: if state == ToggleState::Pressed && !accessibility.reduce_motion {
                sizing::toggle::PRESSED_THUMB_STRETCH
            } else {
                1.0
            },
            focus_ring_width: if state == ToggleState::Focused {
                sizing::FOCUS_RING
            } else {
                0.0
            },
            shows_state_labels: accessibility.differentiate_without_color,
            opacity: if state == ToggleState::Disabled {
                opacity::DISABLED
            } else {
                opacity::ENABLED
            },
            animation_duration: theme.animation_duration(duration::NORMAL),
        }
    }
}
