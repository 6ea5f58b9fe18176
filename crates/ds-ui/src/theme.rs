//! Theme composition for the Lumen design system
//!
//! A [`Theme`] bundles a light/dark variant, a density preset, the user's
//! accessibility policy and the registry of component resolvers. It is an
//! immutable value: "changing" a theme means building a new one with the
//! `with_*` methods, and existing copies are never affected.
//!
//! Everything a resolver needs from the theme is derived on demand from those
//! four inputs ([`Theme::palette`], [`Theme::scaled`],
//! [`Theme::animation_duration`], [`Theme::border_width`], [`Theme::font`]),
//! so the derived values can never drift out of sync with the settings.
//!
//! # Usage
//!
//! ```rust
//! use ds_ui::theme::{Density, Theme, ThemeVariant};
//! use ds_ui::styles::{ButtonSize, ButtonState, ButtonVariant};
//!
//! let theme = Theme::dark().with_density(Density::Compact);
//! let spec =
//!     theme.resolve_button(ButtonVariant::Primary, ButtonSize::Medium, ButtonState::Normal);
//! assert_eq!(spec.background, theme.palette().accent);
//! ```

use crate::config::ConfigError;
use crate::styles::{
    ButtonResolver, ButtonSize, ButtonSpec, ButtonState, ButtonVariant, CardElevation,
    CardResolver, CardSpec, ComponentStyles, FieldResolver, FieldSpec, FieldState,
    FieldValidation, FormRowLayoutMode, FormRowResolver, FormRowSpec, ListRowResolver,
    ListRowSpec, ListRowState, ListRowStyle, ToggleResolver, ToggleSpec, ToggleState,
};
use crate::tokens::border;
use crate::typography::{Font, TextRole};
use ds_platform::Capabilities;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Fully transparent color
pub const TRANSPARENT: &str = "transparent";

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Apply an alpha channel to a hex color, producing `#RRGGBBAA`
///
/// Colors that are not hex strings are returned unchanged.
pub fn with_alpha(hex: &str, alpha: f32) -> Color {
    match parse_hex_color(hex) {
        Some((r, g, b)) => {
            let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("{}{:02X}", rgb_to_hex(r, g, b), a)
        }
        None => hex.to_string(),
    }
}

// =============================================================================
// Theme Variant
// =============================================================================

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

impl ThemeVariant {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.color_scheme())
    }
}

impl std::str::FromStr for ThemeVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeVariant::Light),
            "dark" => Ok(ThemeVariant::Dark),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

// =============================================================================
// Density
// =============================================================================

/// Spacing density preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    /// Tighter spacing (0.85x)
    Compact,
    /// Standard spacing (1.0x)
    #[default]
    Regular,
    /// Roomier spacing (1.2x)
    Spacious,
}

impl Density {
    /// Multiplier applied to spacing and metric tokens
    pub fn scale(&self) -> f32 {
        match self {
            Density::Compact => 0.85,
            Density::Regular => 1.0,
            Density::Spacious => 1.2,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Density::Compact => "compact",
            Density::Regular => "regular",
            Density::Spacious => "spacious",
        }
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Density {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Density::Compact),
            "regular" => Ok(Density::Regular),
            "spacious" => Ok(Density::Spacious),
            _ => Err(ConfigError::UnknownDensity(s.to_string())),
        }
    }
}

// =============================================================================
// Accessibility
// =============================================================================

/// User preferred text size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DynamicTypeSize {
    /// Extra small
    XSmall,
    /// Small
    Small,
    /// Medium
    Medium,
    /// Large (system default)
    #[default]
    Large,
    /// Extra large
    XLarge,
    /// 2x large
    XxLarge,
    /// 3x large
    XxxLarge,
    /// Accessibility size 1
    Accessibility1,
    /// Accessibility size 2
    Accessibility2,
    /// Accessibility size 3
    Accessibility3,
    /// Accessibility size 4
    Accessibility4,
    /// Accessibility size 5
    Accessibility5,
}

impl DynamicTypeSize {
    /// Font size multiplier relative to `Large`
    pub fn scale(&self) -> f32 {
        match self {
            DynamicTypeSize::XSmall => 0.82,
            DynamicTypeSize::Small => 0.88,
            DynamicTypeSize::Medium => 0.94,
            DynamicTypeSize::Large => 1.0,
            DynamicTypeSize::XLarge => 1.12,
            DynamicTypeSize::XxLarge => 1.24,
            DynamicTypeSize::XxxLarge => 1.35,
            DynamicTypeSize::Accessibility1 => 1.64,
            DynamicTypeSize::Accessibility2 => 1.95,
            DynamicTypeSize::Accessibility3 => 2.35,
            DynamicTypeSize::Accessibility4 => 2.76,
            DynamicTypeSize::Accessibility5 => 3.12,
        }
    }

    /// Whether this is one of the enlarged accessibility sizes
    pub fn is_accessibility_size(&self) -> bool {
        matches!(
            self,
            DynamicTypeSize::Accessibility1
                | DynamicTypeSize::Accessibility2
                | DynamicTypeSize::Accessibility3
                | DynamicTypeSize::Accessibility4
                | DynamicTypeSize::Accessibility5
        )
    }
}

/// User level accessibility overrides
///
/// Supplied by the host environment; the design system never derives these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityPolicy {
    /// Disable non-essential animation
    pub reduce_motion: bool,
    /// Prefer stronger borders and colors
    pub increased_contrast: bool,
    /// Replace translucent materials with opaque ones
    pub reduce_transparency: bool,
    /// Do not rely on color alone to convey state
    pub differentiate_without_color: bool,
    /// Preferred text size
    pub dynamic_type_size: DynamicTypeSize,
    /// Use heavier font weights
    pub bold_text: bool,
}

// =============================================================================
// Palette
// =============================================================================

/// Semantic colors for a variant and contrast setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Window background
    pub background: Color,
    /// Grouped content background
    pub surface: Color,
    /// Raised surfaces (cards, popovers)
    pub surface_elevated: Color,
    /// Primary text
    pub text_primary: Color,
    /// Secondary text
    pub text_secondary: Color,
    /// Placeholders and accessories
    pub text_tertiary: Color,
    /// Brand accent (tint)
    pub accent: Color,
    /// Accent under a hovering pointer
    pub accent_hover: Color,
    /// Accent while pressed
    pub accent_pressed: Color,
    /// Content drawn on top of the accent
    pub on_accent: Color,
    /// Neutral control fill
    pub fill: Color,
    /// Neutral control fill while pressed
    pub fill_pressed: Color,
    /// Default border
    pub border: Color,
    /// Strong border
    pub border_strong: Color,
    /// List separators
    pub separator: Color,
    /// Destructive actions and errors
    pub destructive: Color,
    /// Destructive action while pressed
    pub destructive_pressed: Color,
    /// Success and valid input
    pub success: Color,
    /// Warnings
    pub warning: Color,
    /// Toggle track in the off position
    pub toggle_track_off: Color,
    /// Toggle thumb
    pub thumb: Color,
    /// Base shadow color (alpha applied per use)
    pub shadow: Color,
}

impl Palette {
    /// Palette for the light variant
    pub fn light() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            surface: "#F2F2F7".to_string(),
            surface_elevated: "#FFFFFF".to_string(),
            text_primary: "#000000".to_string(),
            text_secondary: "#3C3C43".to_string(),
            text_tertiary: "#8E8E93".to_string(),
            accent: "#007AFF".to_string(),
            accent_hover: "#1A87FF".to_string(),
            accent_pressed: "#0062CC".to_string(),
            on_accent: "#FFFFFF".to_string(),
            fill: "#E5E5EA".to_string(),
            fill_pressed: "#D1D1D6".to_string(),
            border: "#C6C6C8".to_string(),
            border_strong: "#8E8E93".to_string(),
            separator: "#E5E5EA".to_string(),
            destructive: "#FF3B30".to_string(),
            destructive_pressed: "#D70015".to_string(),
            success: "#34C759".to_string(),
            warning: "#FF9500".to_string(),
            toggle_track_off: "#E9E9EB".to_string(),
            thumb: "#FFFFFF".to_string(),
            shadow: "#000000".to_string(),
        }
    }

    /// Palette for the dark variant
    pub fn dark() -> Self {
        Self {
            background: "#000000".to_string(),
            surface: "#1C1C1E".to_string(),
            surface_elevated: "#2C2C2E".to_string(),
            text_primary: "#FFFFFF".to_string(),
            text_secondary: "#EBEBF5".to_string(),
            text_tertiary: "#8E8E93".to_string(),
            accent: "#0A84FF".to_string(),
            accent_hover: "#409CFF".to_string(),
            accent_pressed: "#0060DF".to_string(),
            on_accent: "#FFFFFF".to_string(),
            fill: "#3A3A3C".to_string(),
            fill_pressed: "#48484A".to_string(),
            border: "#38383A".to_string(),
            border_strong: "#8E8E93".to_string(),
            separator: "#38383A".to_string(),
            destructive: "#FF453A".to_string(),
            destructive_pressed: "#D70015".to_string(),
            success: "#30D158".to_string(),
            warning: "#FF9F0A".to_string(),
            toggle_track_off: "#39393D".to_string(),
            thumb: "#FFFFFF".to_string(),
            shadow: "#000000".to_string(),
        }
    }

    /// Palette for a variant, with or without increased contrast
    pub fn resolve(variant: ThemeVariant, increased_contrast: bool) -> Self {
        let base = match variant {
            ThemeVariant::Light => Self::light(),
            ThemeVariant::Dark => Self::dark(),
        };
        if increased_contrast {
            base.with_increased_contrast(variant)
        } else {
            base
        }
    }

    fn with_increased_contrast(self, variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Light => Self {
                text_secondary: "#1C1C1E".to_string(),
                text_tertiary: "#48484A".to_string(),
                accent: "#0040DD".to_string(),
                accent_hover: "#0036BD".to_string(),
                accent_pressed: "#002EA3".to_string(),
                border: "#8E8E93".to_string(),
                border_strong: "#3C3C43".to_string(),
                separator: "#8E8E93".to_string(),
                destructive: "#D70015".to_string(),
                destructive_pressed: "#A50011".to_string(),
                success: "#248A3D".to_string(),
                warning: "#C93400".to_string(),
                ..self
            },
            ThemeVariant::Dark => Self {
                text_secondary: "#FFFFFF".to_string(),
                text_tertiary: "#AEAEB2".to_string(),
                accent: "#409CFF".to_string(),
                accent_hover: "#6AB4FF".to_string(),
                accent_pressed: "#0A84FF".to_string(),
                on_accent: "#000000".to_string(),
                border: "#8E8E93".to_string(),
                border_strong: "#EBEBF5".to_string(),
                separator: "#8E8E93".to_string(),
                destructive: "#FF6961".to_string(),
                destructive_pressed: "#FF453A".to_string(),
                success: "#30DB5B".to_string(),
                warning: "#FFB340".to_string(),
                ..self
            },
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Immutable theme value
///
/// Two themes never share mutable state; clones are cheap because the
/// resolver registry is reference counted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Theme {
    variant: ThemeVariant,
    density: Density,
    accessibility: AccessibilityPolicy,
    styles: ComponentStyles,
}

impl Theme {
    /// Create a theme from all of its parts
    pub fn new(
        variant: ThemeVariant,
        density: Density,
        accessibility: AccessibilityPolicy,
        styles: ComponentStyles,
    ) -> Self {
        Self {
            variant,
            density,
            accessibility,
            styles,
        }
    }

    /// Default light theme
    pub fn light() -> Self {
        Self::default()
    }

    /// Default dark theme
    pub fn dark() -> Self {
        Self::default().with_variant(ThemeVariant::Dark)
    }

    /// Copy of this theme with another variant
    pub fn with_variant(mut self, variant: ThemeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Copy of this theme with another density
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Copy of this theme with another accessibility policy
    pub fn with_accessibility(mut self, accessibility: AccessibilityPolicy) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Copy of this theme with another resolver registry
    pub fn with_styles(mut self, styles: ComponentStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Light or dark variant
    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Density preset
    pub fn density(&self) -> Density {
        self.density
    }

    /// Accessibility policy
    pub fn accessibility(&self) -> &AccessibilityPolicy {
        &self.accessibility
    }

    /// Component resolver registry
    pub fn styles(&self) -> &ComponentStyles {
        &self.styles
    }

    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.variant == ThemeVariant::Dark
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Semantic colors for this theme
    pub fn palette(&self) -> Palette {
        Palette::resolve(self.variant, self.accessibility.increased_contrast)
    }

    /// Scale a spacing or metric token by the density
    pub fn scaled(&self, value: f32) -> f32 {
        value * self.density.scale()
    }

    /// Animation duration in seconds, zero when motion is reduced
    pub fn animation_duration(&self, base: f32) -> f32 {
        if self.accessibility.reduce_motion {
            0.0
        } else {
            base
        }
    }

    /// Border width, widened when increased contrast is on
    pub fn border_width(&self, base: f32) -> f32 {
        if self.accessibility.increased_contrast {
            base + border::CONTRAST_BOOST
        } else {
            base
        }
    }

    /// Whether translucent materials may be used
    pub fn supports_translucency(&self) -> bool {
        !self.accessibility.reduce_transparency && !self.accessibility.increased_contrast
    }

    /// Font for a text role with accessibility applied
    pub fn font(&self, role: TextRole) -> Font {
        Font::for_role(role, &self.accessibility)
    }

    // -------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------

    /// Resolve a button through the registered button resolver
    pub fn resolve_button(
        &self,
        variant: ButtonVariant,
        size: ButtonSize,
        state: ButtonState,
    ) -> ButtonSpec {
        self.styles.button().resolve(self, variant, size, state)
    }

    /// Resolve a text field through the registered field resolver
    pub fn resolve_field(&self, state: FieldState, validation: FieldValidation) -> FieldSpec {
        self.styles.field().resolve(self, state, validation)
    }

    /// Resolve a toggle through the registered toggle resolver
    pub fn resolve_toggle(&self, is_on: bool, state: ToggleState) -> ToggleSpec {
        self.styles.toggle().resolve(self, is_on, state)
    }

    /// Resolve a card through the registered card resolver
    pub fn resolve_card(&self, elevation: CardElevation) -> CardSpec {
        self.styles.card().resolve(self, elevation)
    }

    /// Resolve a form row through the registered form row resolver
    pub fn resolve_form_row(
        &self,
        layout_mode: FormRowLayoutMode,
        capabilities: &Capabilities,
    ) -> FormRowSpec {
        self.styles.form_row().resolve(self, layout_mode, capabilities)
    }

    /// Resolve a list row through the registered list row resolver
    pub fn resolve_list_row(
        &self,
        style: ListRowStyle,
        state: ListRowState,
        capabilities: &Capabilities,
    ) -> ListRowSpec {
        self.styles.list_row().resolve(self, style, state, capabilities)
    }
}
