//! Platform capability model
//!
//! [`Capabilities`] is a plain record derived from a [`Platform`] by a total,
//! deterministic function. Views consult it to pick interaction patterns
//! (hover highlights, inline pickers, tap target floors) without branching on
//! the platform tag themselves.

use crate::platform::Platform;
use serde::{Deserialize, Serialize};

// =============================================================================
// Preference Enums
// =============================================================================

/// How a form row arranges its label and control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormRowLayout {
    /// Label and control share one line
    Inline,
    /// Labels in a trailing-aligned column, controls in a second column
    TwoColumn,
    /// Label above the control
    Stacked,
}

/// How pickers present their options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PickerPresentation {
    /// Pop-up menu anchored to the control
    Menu,
    /// Options rendered inline in the form
    Inline,
    /// Scrolling wheel
    Wheel,
    /// Options pushed as a separate screen
    Navigation,
}

/// How text fields are edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextFieldMode {
    /// Edited in place
    Inline,
    /// Edited in a dedicated input screen
    Modal,
}

// =============================================================================
// Capabilities
// =============================================================================

/// What a rendering target supports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    /// Platform this record was derived from
    pub platform: Platform,
    /// Pointer hover is available
    pub supports_hover: bool,
    /// Keyboard focus rings are drawn
    pub supports_focus_ring: bool,
    /// Text can be edited in place
    pub supports_inline_text_editing: bool,
    /// Pickers can be shown inline
    pub supports_inline_pickers: bool,
    /// Transient toast notifications are available
    pub supports_toasts: bool,
    /// Touch targets should be generous
    pub prefers_large_tap_targets: bool,
    /// Default form row arrangement
    pub preferred_form_row_layout: FormRowLayout,
    /// Default picker presentation
    pub preferred_picker_presentation: PickerPresentation,
    /// Default text field editing mode
    pub preferred_text_field_mode: TextFieldMode,
    /// Smallest interactive size in points
    pub minimum_tap_target_size: f32,
}

/// Get the capabilities of a platform
pub fn capabilities_for(platform: Platform) -> Capabilities {
    match platform {
        Platform::Phone => Capabilities {
            platform,
            supports_hover: false,
            supports_focus_ring: false,
            supports_inline_text_editing: true,
            supports_inline_pickers: true,
            supports_toasts: true,
            prefers_large_tap_targets: true,
            preferred_form_row_layout: FormRowLayout::Inline,
            preferred_picker_presentation: PickerPresentation::Menu,
            preferred_text_field_mode: TextFieldMode::Inline,
            minimum_tap_target_size: 44.0,
        },
        Platform::Desktop => Capabilities {
            platform,
            supports_hover: true,
            supports_focus_ring: true,
            supports_inline_text_editing: true,
            supports_inline_pickers: true,
            supports_toasts: true,
            prefers_large_tap_targets: false,
            preferred_form_row_layout: FormRowLayout::TwoColumn,
            preferred_picker_presentation: PickerPresentation::Menu,
            preferred_text_field_mode: TextFieldMode::Inline,
            minimum_tap_target_size: 28.0,
        },
        Platform::Wearable => Capabilities {
            platform,
            supports_hover: false,
            supports_focus_ring: false,
            supports_inline_text_editing: false,
            supports_inline_pickers: false,
            supports_toasts: false,
            prefers_large_tap_targets: true,
            preferred_form_row_layout: FormRowLayout::Stacked,
            preferred_picker_presentation: PickerPresentation::Navigation,
            preferred_text_field_mode: TextFieldMode::Modal,
            minimum_tap_target_size: 38.0,
        },
    }
}

impl Capabilities {
    /// Get the capabilities of a platform
    pub fn for_platform(platform: Platform) -> Self {
        capabilities_for(platform)
    }

    /// Capabilities of the detected platform
    ///
    /// Stable for the life of the process, see [`Platform::detect`].
    pub fn current() -> Self {
        capabilities_for(Platform::detect())
    }

    /// Whether a pointer can hover over controls
    pub fn supports_pointer_interaction(&self) -> bool {
        self.supports_hover
    }

    /// Whether choices must be presented on pushed screens
    pub fn requires_navigation_patterns(&self) -> bool {
        !self.supports_inline_pickers
            && self.preferred_picker_presentation == PickerPresentation::Navigation
    }

    /// Whether the screen is small enough to need condensed layouts
    pub fn is_compact_screen(&self) -> bool {
        self.platform == Platform::Wearable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Capability Matrix Tests
    // ==========================================================================

    #[test]
    fn test_phone_capabilities() {
        let caps = capabilities_for(Platform::Phone);
        assert_eq!(caps.platform, Platform::Phone);
        assert!(!caps.supports_hover);
        assert!(!caps.supports_focus_ring);
        assert!(caps.supports_inline_text_editing);
        assert!(caps.supports_inline_pickers);
        assert!(caps.supports_toasts);
        assert!(caps.prefers_large_tap_targets);
        assert_eq!(caps.preferred_form_row_layout, FormRowLayout::Inline);
        assert_eq!(caps.preferred_picker_presentation, PickerPresentation::Menu);
        assert_eq!(caps.preferred_text_field_mode, TextFieldMode::Inline);
        assert_eq!(caps.minimum_tap_target_size, 44.0);
    }

    #[test]
    fn test_desktop_capabilities() {
        let caps = capabilities_for(Platform::Desktop);
        assert!(caps.supports_hover);
        assert!(caps.supports_focus_ring);
        assert!(!caps.prefers_large_tap_targets);
        assert_eq!(caps.preferred_form_row_layout, FormRowLayout::TwoColumn);
        assert_eq!(caps.minimum_tap_target_size, 28.0);
    }

    #[test]
    fn test_wearable_capabilities() {
        let caps = capabilities_for(Platform::Wearable);
        assert!(!caps.supports_hover);
        assert!(!caps.supports_inline_text_editing);
        assert!(!caps.supports_inline_pickers);
        assert!(!caps.supports_toasts);
        assert_eq!(caps.preferred_form_row_layout, FormRowLayout::Stacked);
        assert_eq!(caps.preferred_picker_presentation, PickerPresentation::Navigation);
        assert_eq!(caps.preferred_text_field_mode, TextFieldMode::Modal);
        assert_eq!(caps.minimum_tap_target_size, 38.0);
    }

    #[test]
    fn test_capabilities_are_constant_per_platform() {
        for platform in Platform::ALL {
            assert_eq!(capabilities_for(platform), capabilities_for(platform));
            assert_eq!(Capabilities::for_platform(platform), capabilities_for(platform));
            assert!(capabilities_for(platform).minimum_tap_target_size > 0.0);
        }
    }

    #[test]
    fn test_current_matches_detected_platform() {
        let caps = Capabilities::current();
        assert_eq!(caps.platform, Platform::detect());
        assert_eq!(caps, capabilities_for(caps.platform));
        assert_eq!(Capabilities::current(), caps);
    }

    // ==========================================================================
    // Derived Query Tests
    // ==========================================================================

    #[test]
    fn test_supports_pointer_interaction() {
        assert!(!capabilities_for(Platform::Phone).supports_pointer_interaction());
        assert!(capabilities_for(Platform::Desktop).supports_pointer_interaction());
        assert!(!capabilities_for(Platform::Wearable).supports_pointer_interaction());
    }

    #[test]
    fn test_requires_navigation_patterns() {
        assert!(!capabilities_for(Platform::Phone).requires_navigation_patterns());
        assert!(!capabilities_for(Platform::Desktop).requires_navigation_patterns());
        assert!(capabilities_for(Platform::Wearable).requires_navigation_patterns());
    }

    #[test]
    fn test_is_compact_screen() {
        assert!(!capabilities_for(Platform::Phone).is_compact_screen());
        assert!(!capabilities_for(Platform::Desktop).is_compact_screen());
        assert!(capabilities_for(Platform::Wearable).is_compact_screen());
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_capabilities_serialization() {
        let caps = capabilities_for(Platform::Desktop);
        let json = serde_json::to_value(caps).unwrap();

        assert_eq!(json["platform"], "desktop");
        assert_eq!(json["preferredFormRowLayout"], "twoColumn");
        assert_eq!(json["supportsHover"], true);

        let back: Capabilities = serde_json::from_value(json).unwrap();
        assert_eq!(back, caps);
    }
}
