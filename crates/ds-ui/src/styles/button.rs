//! Button resolution

use crate::theme::{Color, Palette, Theme, TRANSPARENT};
use crate::tokens::{border, duration, opacity, radius, sizing};
use crate::typography::{font_weight, Font, TextRole};
use serde::{Deserialize, Serialize};

use super::DEFAULT_RESOLVER_ID;

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled with the accent color
    #[default]
    Primary,
    /// Filled with a neutral color
    Secondary,
    /// Accent border, no fill
    Outline,
    /// Filled with the destructive color
    Destructive,
    /// Text only
    Ghost,
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small button (32pt)
    Small,
    /// Medium button (44pt)
    #[default]
    Medium,
    /// Large button (52pt)
    Large,
}

/// Interaction state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonState {
    /// Idle
    #[default]
    Normal,
    /// Pointer is over the button
    Hovered,
    /// Being pressed
    Pressed,
    /// Has keyboard focus
    Focused,
    /// Not interactive
    Disabled,
}

/// Resolved button attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSpec {
    /// Fill color
    pub background: Color,
    /// Label and icon color
    pub foreground: Color,
    /// Border color, if a border is drawn
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: f32,
    /// Height
    pub height: f32,
    /// Corner radius
    pub corner_radius: f32,
    /// Horizontal padding
    pub horizontal_padding: f32,
    /// Gap between icon and label
    pub icon_spacing: f32,
    /// Label font
    pub font: Font,
    /// Opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Focus ring width, zero when not focused
    pub focus_ring_width: f32,
    /// Scale applied to the whole button
    pub pressed_scale: f32,
    /// State transition duration in seconds
    pub animation_duration: f32,
}

/// Resolves button specs
#[cfg_attr(test, mockall::automock)]
pub trait ButtonResolver: Send + Sync {
    /// Resolver identifier, for introspection
    fn id(&self) -> &'static str;

    /// Resolve a button
    fn resolve(
        &self,
        theme: &Theme,
        variant: ButtonVariant,
        size: ButtonSize,
        state: ButtonState,
    ) -> ButtonSpec;
}

/// Built-in button resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultButtonResolver;

struct SizeMetrics {
    height: f32,
    corner_radius: f32,
    horizontal_padding: f32,
    icon_spacing: f32,
    role: TextRole,
}

fn size_metrics(size: ButtonSize) -> SizeMetrics {
    match size {
        ButtonSize::Small => SizeMetrics {
            height: sizing::button::SM_HEIGHT,
            corner_radius: radius::SM,
            horizontal_padding: sizing::button::SM_PADDING_X,
            icon_spacing: sizing::button::SM_ICON_SPACING,
            role: TextRole::Footnote,
        },
        ButtonSize::Medium => SizeMetrics {
            height: sizing::button::MD_HEIGHT,
            corner_radius: radius::MD,
            horizontal_padding: sizing::button::MD_PADDING_X,
            icon_spacing: sizing::button::MD_ICON_SPACING,
            role: TextRole::Subheadline,
        },
        ButtonSize::Large => SizeMetrics {
            height: sizing::button::LG_HEIGHT,
            corner_radius: radius::LG,
            horizontal_padding: sizing::button::LG_PADDING_X,
            icon_spacing: sizing::button::LG_ICON_SPACING,
            role: TextRole::Headline,
        },
    }
}

/// (background, foreground, outline color)
fn colors(
    palette: &Palette,
    variant: ButtonVariant,
    state: ButtonState,
) -> (Color, Color, Option<Color>) {
    let active = matches!(state, ButtonState::Hovered | ButtonState::Pressed);

    match variant {
        ButtonVariant::Primary => {
            let background = match state {
                ButtonState::Hovered => &palette.accent_hover,
                ButtonState::Pressed => &palette.accent_pressed,
                ButtonState::Normal | ButtonState::Focused | ButtonState::Disabled => {
                    &palette.accent
                }
            };
            (background.clone(), palette.on_accent.clone(), None)
        }
        ButtonVariant::Secondary => {
            let background = if active { &palette.fill_pressed } else { &palette.fill };
            (background.clone(), palette.text_primary.clone(), None)
        }
        ButtonVariant::Outline => {
            let background = if active { palette.fill.clone() } else { TRANSPARENT.to_string() };
            (background, palette.accent.clone(), Some(palette.accent.clone()))
        }
        ButtonVariant::Destructive => {
            let background = if active {
                &palette.destructive_pressed
            } else {
                &palette.destructive
            };
            (background.clone(), palette.on_accent.clone(), None)
        }
        ButtonVariant::Ghost => {
            let background = if active { palette.fill.clone() } else { TRANSPARENT.to_string() };
            (background, palette.accent.clone(), None)
        }
    }
}

impl ButtonResolver for DefaultButtonResolver {
    fn id(&self) -> &'static str {
        DEFAULT_RESOLVER_ID
    }

    fn resolve(
        &self,
        theme: &Theme,
        variant: ButtonVariant,
        size: ButtonSize,
        state: ButtonState,
    ) -> ButtonSpec {
        let palette = theme.palette();
        let metrics = size_metrics(size);
        let (background, foreground, outline) = colors(&palette, variant, state);

        let base_border = if outline.is_some() { border::THIN } else { border::NONE };
        let border_width = theme.border_width(base_border);
        let border_color = match outline {
            Some(color) => Some(color),
            None if border_width > 0.0 => Some(palette.border_strong.clone()),
            None => None,
        };

        let reduce_motion = theme.accessibility().reduce_motion;
        let pressed_scale = if state == ButtonState::Pressed && !reduce_motion {
            sizing::button::PRESSED_SCALE
        } else {
            1.0
        };

        ButtonSpec {
            background,
            foreground,
            border_color,
            border_width,
            height: theme.scaled(metrics.height),
            corner_radius: metrics.corner_radius,
            horizontal_padding: theme.scaled(metrics.horizontal_padding),
            icon_spacing: theme.scaled(metrics.icon_spacing),
            font: theme.font(metrics.role).with_min_weight(font_weight::SEMI_BOLD),
            opacity: if state == ButtonState::Disabled {
                opacity::DISABLED
            } else {
                opacity::ENABLED
            },
            focus_ring_width: if state == ButtonState::Focused {
                sizing::FOCUS_RING
            } else {
                0.0
            },
            pressed_scale,
            animation_duration: theme.animation_duration(duration::FAST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{AccessibilityPolicy, Density};

    const VARIANTS: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Destructive,
        ButtonVariant::Ghost,
    ];
    const SIZES: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    fn resolve(
        theme: &Theme,
        variant: ButtonVariant,
        size: ButtonSize,
        state: ButtonState,
    ) -> ButtonSpec {
        DefaultButtonResolver.resolve(theme, variant, size, state)
    }

    fn medium(theme: &Theme, variant: ButtonVariant, state: ButtonState) -> ButtonSpec {
        resolve(theme, variant, ButtonSize::Medium, state)
    }

    #[test]
    fn test_primary_medium_normal_light() {
        let spec = medium(&Theme::light(), ButtonVariant::Primary, ButtonState::Normal);

        assert_eq!(spec.height, 44.0);
        assert_eq!(spec.corner_radius, 10.0);
        assert_eq!(spec.background, "#007AFF");
        assert_eq!(spec.foreground, "#FFFFFF");
        assert_eq!(spec.border_color, None);
        assert_eq!(spec.border_width, 0.0);
        assert_eq!(spec.opacity, 1.0);
        assert_eq!(spec.font.size, 15.0);
        assert_eq!(spec.font.weight, font_weight::SEMI_BOLD);
        assert_eq!(spec.animation_duration, 0.15);
    }

    #[test]
    fn test_size_table() {
        let theme = Theme::light();
        let small = resolve(&theme, ButtonVariant::Primary, ButtonSize::Small, ButtonState::Normal);
        let large = resolve(&theme, ButtonVariant::Primary, ButtonSize::Large, ButtonState::Normal);

        assert_eq!(
            (small.height, small.corner_radius, small.horizontal_padding),
            (32.0, 8.0, 12.0)
        );
        assert_eq!(
            (large.height, large.corner_radius, large.horizontal_padding),
            (52.0, 12.0, 20.0)
        );
        assert_eq!(small.font.size, 13.0);
        assert_eq!(large.font.size, 17.0);
    }

    #[test]
    fn test_disabled_keeps_metrics_and_forces_opacity() {
        let theme = Theme::light();
        for variant in VARIANTS {
            for size in SIZES {
                let normal = resolve(&theme, variant, size, ButtonState::Normal);
                let disabled = resolve(&theme, variant, size, ButtonState::Disabled);

                assert_eq!(disabled.opacity, 0.5);
                assert_eq!(disabled.height, normal.height);
                assert_eq!(disabled.corner_radius, normal.corner_radius);
                assert_eq!(disabled.background, normal.background);
            }
        }
    }

    #[test]
    fn test_primary_background_per_state() {
        let theme = Theme::light();
        let expected = [
            (ButtonState::Normal, "#007AFF"),
            (ButtonState::Hovered, "#1A87FF"),
            (ButtonState::Pressed, "#0062CC"),
            (ButtonState::Focused, "#007AFF"),
            (ButtonState::Disabled, "#007AFF"),
        ];
        for (state, background) in expected {
            let spec = medium(&theme, ButtonVariant::Primary, state);
            assert_eq!(spec.background, background, "{:?}", state);
        }
    }

    #[test]
    fn test_pressed_and_hovered_colors() {
        let theme = Theme::light();
        let pressed = medium(&theme, ButtonVariant::Primary, ButtonState::Pressed);
        let hovered = medium(&theme, ButtonVariant::Primary, ButtonState::Hovered);

        assert_eq!(pressed.background, "#0062CC");
        assert_eq!(pressed.pressed_scale, 0.97);
        assert_eq!(hovered.background, "#1A87FF");
        assert_eq!(hovered.pressed_scale, 1.0);

        let ghost = medium(&theme, ButtonVariant::Ghost, ButtonState::Normal);
        assert_eq!(ghost.background, TRANSPARENT);
        let ghost_pressed = medium(&theme, ButtonVariant::Ghost, ButtonState::Pressed);
        assert_eq!(ghost_pressed.background, "#E5E5EA");
    }

    #[test]
    fn test_outline_has_accent_border() {
        let spec = medium(&Theme::light(), ButtonVariant::Outline, ButtonState::Normal);
        assert_eq!(spec.border_color.as_deref(), Some("#007AFF"));
        assert_eq!(spec.border_width, 1.0);
        assert_eq!(spec.background, TRANSPARENT);
    }

    #[test]
    fn test_focus_ring_only_when_focused() {
        let theme = Theme::light();
        let size = ButtonSize::Small;
        let focused = resolve(&theme, ButtonVariant::Secondary, size, ButtonState::Focused);
        let normal = resolve(&theme, ButtonVariant::Secondary, size, ButtonState::Normal);
        assert_eq!(focused.focus_ring_width, 2.0);
        assert_eq!(normal.focus_ring_width, 0.0);
        assert_eq!(focused.background, normal.background);
    }

    #[test]
    fn test_density_scales_height_not_radius() {
        let theme = Theme::light().with_density(Density::Compact);
        let spec = medium(&theme, ButtonVariant::Primary, ButtonState::Normal);
        assert_eq!(spec.height, 44.0 * 0.85);
        assert_eq!(spec.corner_radius, 10.0);
    }

    #[test]
    fn test_reduce_motion() {
        let theme = Theme::light().with_accessibility(AccessibilityPolicy {
            reduce_motion: true,
            ..Default::default()
        });
        let spec = medium(&theme, ButtonVariant::Primary, ButtonState::Pressed);
        assert_eq!(spec.animation_duration, 0.0);
        assert_eq!(spec.pressed_scale, 1.0);
    }

    #[test]
    fn test_increased_contrast_adds_border() {
        let theme = Theme::light().with_accessibility(AccessibilityPolicy {
            increased_contrast: true,
            ..Default::default()
        });
        let primary = medium(&theme, ButtonVariant::Primary, ButtonState::Normal);
        assert_eq!(primary.border_width, 1.0);
        assert_eq!(primary.border_color.as_deref(), Some("#3C3C43"));
        assert_eq!(primary.background, "#0040DD");

        let outline = medium(&theme, ButtonVariant::Outline, ButtonState::Normal);
        assert_eq!(outline.border_width, 2.0);
        assert_eq!(outline.border_color.as_deref(), Some("#0040DD"));
    }

    #[test]
    fn test_dark_theme_colors() {
        let theme = Theme::dark();
        let spec = resolve(
            &theme,
            ButtonVariant::Destructive,
            ButtonSize::Large,
            ButtonState::Normal,
        );
        assert_eq!(spec.background, "#FF453A");
        assert_eq!(spec.foreground, "#FFFFFF");
    }
}
