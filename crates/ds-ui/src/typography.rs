//! Typography for the Lumen design system
//!
//! Text roles carry a base size and weight. The user's dynamic type size and
//! bold text setting are applied when a [`Font`] is resolved, so every spec
//! that embeds a font already reflects accessibility preferences.

use crate::theme::AccessibilityPolicy;
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Weights & Line Heights
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Regular (400)
    pub const REGULAR: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
    /// Heavy (800)
    pub const HEAVY: u16 = 800;

    /// Next heavier weight, used for the bold text accessibility setting
    pub fn bolder(weight: u16) -> u16 {
        match weight {
            w if w < SEMI_BOLD => SEMI_BOLD,
            w if w < BOLD => BOLD,
            _ => HEAVY,
        }
    }
}

/// Line height multipliers
pub mod line_height {
    /// Tight (1.2)
    pub const TIGHT: f32 = 1.2;
    /// Normal (1.3)
    pub const NORMAL: f32 = 1.3;
}

// =============================================================================
// Text Roles
// =============================================================================

/// Semantic text roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextRole {
    /// Screen titles (34pt)
    LargeTitle,
    /// Section titles (28pt)
    Title,
    /// Emphasized body text (17pt semibold)
    Headline,
    /// Body text (17pt)
    #[default]
    Body,
    /// Callouts (16pt)
    Callout,
    /// Secondary labels (15pt)
    Subheadline,
    /// Footnotes and small labels (13pt)
    Footnote,
    /// Captions (12pt)
    Caption,
}

impl TextRole {
    /// Base point size at the default dynamic type size
    pub fn base_size(&self) -> f32 {
        match self {
            TextRole::LargeTitle => 34.0,
            TextRole::Title => 28.0,
            TextRole::Headline => 17.0,
            TextRole::Body => 17.0,
            TextRole::Callout => 16.0,
            TextRole::Subheadline => 15.0,
            TextRole::Footnote => 13.0,
            TextRole::Caption => 12.0,
        }
    }

    /// Base weight without bold text
    pub fn base_weight(&self) -> u16 {
        match self {
            TextRole::Headline => font_weight::SEMI_BOLD,
            TextRole::LargeTitle
            | TextRole::Title
            | TextRole::Body
            | TextRole::Callout
            | TextRole::Subheadline
            | TextRole::Footnote
            | TextRole::Caption => font_weight::REGULAR,
        }
    }

    fn line_height(&self) -> f32 {
        match self {
            TextRole::LargeTitle | TextRole::Title => line_height::TIGHT,
            TextRole::Headline
            | TextRole::Body
            | TextRole::Callout
            | TextRole::Subheadline
            | TextRole::Footnote
            | TextRole::Caption => line_height::NORMAL,
        }
    }
}

// =============================================================================
// Font
// =============================================================================

/// A resolved font descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    /// Point size
    pub size: f32,
    /// Weight (400 - 800)
    pub weight: u16,
    /// Line height multiplier
    pub line_height: f32,
}

impl Font {
    /// Create a new font
    pub fn new(size: f32, weight: u16) -> Self {
        Self {
            size,
            weight,
            line_height: line_height::NORMAL,
        }
    }

    /// Resolve a text role against accessibility preferences
    pub fn for_role(role: TextRole, accessibility: &AccessibilityPolicy) -> Self {
        let weight = if accessibility.bold_text {
            font_weight::bolder(role.base_weight())
        } else {
            role.base_weight()
        };

        Self {
            size: role.base_size() * accessibility.dynamic_type_size.scale(),
            weight,
            line_height: role.line_height(),
        }
    }

    /// Raise the weight to at least `min`
    pub fn with_min_weight(mut self, min: u16) -> Self {
        self.weight = self.weight.max(min);
        self
    }

    /// Calculate the line height in points
    pub fn line_height_pt(&self) -> f32 {
        self.size * self.line_height
    }
}
