//! Card resolution

use crate::theme::{with_alpha, Color, Theme, ThemeVariant};
use crate::tokens::{border, opacity, radius, spacing, Shadow};
use serde::{Deserialize, Serialize};

use super::DEFAULT_RESOLVER_ID;

/// How far a card floats above its background
///
/// Variants are ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardElevation {
    /// Outlined, no shadow
    #[default]
    Flat,
    /// Slight shadow
    Raised,
    /// Floating content
    Elevated,
    /// Popovers and sheets above other content
    Overlay,
}

impl CardElevation {
    /// Every elevation, lowest first
    pub const ALL: [CardElevation; 4] = [
        CardElevation::Flat,
        CardElevation::Raised,
        CardElevation::Elevated,
        CardElevation::Overlay,
    ];
}

/// Resolved card attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSpec {
    /// Fill color
    pub background: Color,
    /// Fill opacity; below 1.0 when a glass material is used
    pub background_opacity: f32,
    /// Outline color
    pub border_color: Color,
    /// Outline width
    pub border_width: f32,
    /// Corner radius
    pub corner_radius: f32,
    /// Content padding
    pub padding: f32,
    /// Drop shadow
    pub shadow: Shadow,
    /// Render with a translucent blurred material
    pub uses_glass: bool,
}

/// Resolves card specs
#[cfg_attr(test, mockall::automock)]
pub trait CardResolver: Send + Sync {
    /// Resolver identifier, for introspection
    fn id(&self) -> &'static str;

    /// Resolve a card
    fn resolve(&self, theme: &Theme, elevation: CardElevation) -> CardSpec;
}

/// Built-in card resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCardResolver;

/// (offset y, blur, light alpha, dark alpha)
fn shadow_metrics(elevation: CardElevation) -> Option<(f32, f32, f32, f32)> {
    match elevation {
        CardElevation::Flat => None,
        CardElevation::Raised => Some((1.0, 3.0, 0.12, 0.30)),
        CardElevation::Elevated => Some((4.0, 12.0, 0.16, 0.40)),
        CardElevation::Overlay => Some((8.0, 24.0, 0.24, 0.50)),
    }
}

impl CardResolver for DefaultCardResolver {
    fn id(&self) -> &'static str {
        DEFAULT_RESOLVER_ID
    }

    fn resolve(&self, theme: &Theme, elevation: CardElevation) -> CardSpec {
        let palette = theme.palette();

        let (corner_radius, base_border) = match elevation {
            CardElevation::Flat => (radius::LG, border::THIN),
            CardElevation::Raised => (radius::LG, border::NONE),
            CardElevation::Elevated => (radius::XL, border::NONE),
            CardElevation::Overlay => (radius::XXL, border::NONE),
        };

        let shadow = match shadow_metrics(elevation) {
            Some((offset_y, blur, light_alpha, dark_alpha)) => {
                let alpha = match theme.variant() {
                    ThemeVariant::Light => light_alpha,
                    ThemeVariant::Dark => dark_alpha,
                };
                Shadow::new(0.0, offset_y, blur, with_alpha(&palette.shadow, alpha))
            }
            None => Shadow::none(),
        };

        let uses_glass = elevation >= CardElevation::Elevated && theme.supports_translucency();

        CardSpec {
            background: match elevation {
                CardElevation::Flat => palette.surface.clone(),
                CardElevation::Raised | CardElevation::Elevated | CardElevation::Overlay => {
                    palette.surface_elevated.clone()
                }
            },
            background_opacity: if uses_glass { opacity::GLASS } else { opacity::ENABLED },
            border_color: palette.border.clone(),
            border_width: theme.border_width(base_border),
            corner_radius,
            padding: theme.scaled(spacing::LG),
            shadow,
            uses_glass,
        }
    }
}
