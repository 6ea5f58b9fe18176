//! Design tokens for the Lumen design system
//!
//! Base values for spacing, sizing, radii, borders, opacity and motion.
//! Resolvers read these and then apply theme adjustments (density scaling,
//! accessibility overrides); nothing here depends on the theme.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in points, before density scaling
pub mod spacing {
    /// 6pt - Small
    pub const SM: f32 = 6.0;
    /// 8pt - Medium-small
    pub const MS: f32 = 8.0;
    /// 10pt
    pub const ROW_VERTICAL: f32 = 10.0;
    /// 12pt - Medium
    pub const MD: f32 = 12.0;
    /// 16pt - Large
    pub const LG: f32 = 16.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Button sizes
    pub mod button {
        /// Small button height (32pt)
        pub const SM_HEIGHT: f32 = 32.0;
        /// Medium button height (44pt)
        pub const MD_HEIGHT: f32 = 44.0;
        /// Large button height (52pt)
        pub const LG_HEIGHT: f32 = 52.0;
        /// Small button padding x (12pt)
        pub const SM_PADDING_X: f32 = 12.0;
        /// Medium button padding x (16pt)
        pub const MD_PADDING_X: f32 = 16.0;
        /// Large button padding x (20pt)
        pub const LG_PADDING_X: f32 = 20.0;
        /// Small icon spacing (4pt)
        pub const SM_ICON_SPACING: f32 = 4.0;
        /// Medium icon spacing (6pt)
        pub const MD_ICON_SPACING: f32 = 6.0;
        /// Large icon spacing (8pt)
        pub const LG_ICON_SPACING: f32 = 8.0;
        /// Scale applied while pressed
        pub const PRESSED_SCALE: f32 = 0.97;
    }

    /// Text field sizes
    pub mod field {
        /// Field height (44pt)
        pub const HEIGHT: f32 = 44.0;
        /// Field padding x (12pt)
        pub const PADDING_X: f32 = 12.0;
    }

    /// Toggle sizes (not density scaled)
    pub mod toggle {
        /// Track width (51pt)
        pub const TRACK_WIDTH: f32 = 51.0;
        /// Track height (31pt)
        pub const TRACK_HEIGHT: f32 = 31.0;
        /// Thumb diameter (27pt)
        pub const THUMB_DIAMETER: f32 = 27.0;
        /// Horizontal thumb stretch while pressed
        pub const PRESSED_THUMB_STRETCH: f32 = 1.15;
    }

    /// Row sizes shared by lists and forms
    pub mod row {
        /// Minimum row height before the tap target floor (44pt)
        pub const MIN_HEIGHT: f32 = 44.0;
        /// Trailing accessory (chevron, checkmark) size (20pt)
        pub const ACCESSORY: f32 = 20.0;
        /// Label column width in two-column forms (160pt)
        pub const LABEL_COLUMN_WIDTH: f32 = 160.0;
    }

    /// Focus ring width (2pt)
    pub const FOCUS_RING: f32 = 2.0;
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Corner radius tokens
pub mod radius {
    /// No radius (0pt)
    pub const NONE: f32 = 0.0;
    /// Extra small radius (6pt)
    pub const XS: f32 = 6.0;
    /// Small radius (8pt)
    pub const SM: f32 = 8.0;
    /// Medium radius (10pt)
    pub const MD: f32 = 10.0;
    /// Large radius (12pt)
    pub const LG: f32 = 12.0;
    /// Extra large radius (16pt)
    pub const XL: f32 = 16.0;
    /// 2x large radius (20pt)
    pub const XXL: f32 = 20.0;
}

// =============================================================================
// Border Width Tokens
// =============================================================================

/// Border width tokens
pub mod border {
    /// No border (0pt)
    pub const NONE: f32 = 0.0;
    /// Thin border (1pt)
    pub const THIN: f32 = 1.0;
    /// Medium border (2pt)
    pub const MEDIUM: f32 = 2.0;
    /// Extra width added when increased contrast is on
    pub const CONTRAST_BOOST: f32 = 1.0;
}

// =============================================================================
// Opacity Tokens
// =============================================================================

/// Opacity tokens
pub mod opacity {
    /// Fully opaque
    pub const ENABLED: f32 = 1.0;
    /// Disabled buttons, toggles and rows
    pub const DISABLED: f32 = 0.5;
    /// Disabled text fields
    pub const DISABLED_FIELD: f32 = 0.6;
    /// Translucent card material
    pub const GLASS: f32 = 0.8;
    /// Selected row tint
    pub const SELECTION_TINT: f32 = 0.16;
}

// =============================================================================
// Animation Tokens
// =============================================================================

/// Animation durations in seconds
pub mod duration {
    /// Row highlight (0.1s)
    pub const HIGHLIGHT: f32 = 0.1;
    /// Fast (0.15s)
    pub const FAST: f32 = 0.15;
    /// Normal (0.25s)
    pub const NORMAL: f32 = 0.25;
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Drop shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Shadow color (with alpha)
    pub color: String,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: impl Into<String>) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color: color.into(),
        }
    }

    /// No shadow
    pub fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, "transparent")
    }

    /// Whether this shadow draws anything
    pub fn is_visible(&self) -> bool {
        self.blur > 0.0 || self.offset_x != 0.0 || self.offset_y != 0.0
    }
}
