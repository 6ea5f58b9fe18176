//! Form row resolution
//!
//! A form row pairs a label with a control. Its arrangement either follows
//! the platform's preferred layout ([`FormRowLayoutMode::Auto`]) or is pinned
//! by the caller ([`FormRowLayoutMode::Fixed`]); a pinned layout is never
//! overridden by capabilities.

use crate::theme::{Color, Theme};
use crate::tokens::{sizing, spacing};
use crate::typography::{Font, TextRole};
use ds_platform::{Capabilities, FormRowLayout};
use serde::{Deserialize, Serialize};

use super::DEFAULT_RESOLVER_ID;

/// Requested form row layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode", content = "layout")]
pub enum FormRowLayoutMode {
    /// Use the platform's preferred layout
    #[default]
    Auto,
    /// Always use the given layout
    Fixed(FormRowLayout),
}

impl FormRowLayoutMode {
    /// Layout this mode selects for the given capabilities
    pub fn resolve(&self, capabilities: &Capabilities) -> FormRowLayout {
        match self {
            FormRowLayoutMode::Auto => capabilities.preferred_form_row_layout,
            FormRowLayoutMode::Fixed(layout) => *layout,
        }
    }
}

/// Horizontal alignment of a form label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAlignment {
    /// Aligned to the leading edge
    Leading,
    /// Aligned to the trailing edge
    Trailing,
}

/// Resolved form row attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRowSpec {
    /// Layout actually used
    pub resolved_layout: FormRowLayout,
    /// Fixed label column width (two-column layout only)
    pub label_width: Option<f32>,
    /// Gap between label and control
    pub label_spacing: f32,
    /// Label alignment
    pub label_alignment: LabelAlignment,
    /// Label font
    pub label_font: Font,
    /// Label color
    pub label_color: Color,
    /// Minimum row height
    pub min_height: f32,
    /// Horizontal padding
    pub horizontal_padding: f32,
    /// Vertical padding
    pub vertical_padding: f32,
}

/// Resolves form row specs
pub trait FormRowResolver: Send + Sync {
    /// Resolver identifier, for introspection
    fn id(&self) -> &'static str;

    /// Resolve a form row
    fn resolve(
        &self,
        theme: &Theme,
        layout_mode: FormRowLayoutMode,
        capabilities: &Capabilities,
    ) -> FormRowSpec;
}

/// Built-in form row resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormRowResolver;

impl FormRowResolver for DefaultFormRowResolver {
    fn id(&self) -> &'static str {
        DEFAULT_RESOLVER_ID
    }

    fn resolve(
        &self,
        theme: &Theme,
        layout_mode: FormRowLayoutMode,
        capabilities: &Capabilities,
    ) -> FormRowSpec {
        let palette = theme.palette();
        let resolved_layout = layout_mode.resolve(capabilities);

        let (label_spacing, label_width, label_alignment, label_role, label_color) =
            match resolved_layout {
                FormRowLayout::Inline => (
                    spacing::MD,
                    None,
                    LabelAlignment::Leading,
                    TextRole::Body,
                    &palette.text_primary,
                ),
                FormRowLayout::TwoColumn => (
                    spacing::LG,
                    Some(sizing::row::LABEL_COLUMN_WIDTH),
                    LabelAlignment::Trailing,
                    TextRole::Body,
                    &palette.text_secondary,
                ),
                FormRowLayout::Stacked => (
                    spacing::SM,
                    None,
                    LabelAlignment::Leading,
                    TextRole::Subheadline,
                    &palette.text_secondary,
                ),
            };

        FormRowSpec {
            resolved_layout,
            label_width: label_width.map(|w| theme.scaled(w)),
            label_spacing: theme.scaled(label_spacing),
            label_alignment,
            label_font: theme.font(label_role),
            label_color: label_color.clone(),
            min_height: theme
                .scaled(sizing::row::MIN_HEIGHT)
                .max(capabilities.minimum_tap_target_size),
            horizontal_padding: theme.scaled(spacing::LG),
            vertical_padding: theme.scaled(spacing::MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Density;
    use ds_platform::{capabilities_for, Platform};

    const LAYOUTS: [FormRowLayout; 3] = [
        FormRowLayout::Inline,
        FormRowLayout::TwoColumn,
        FormRowLayout::Stacked,
    ];

    #[test]
    fn test_auto_follows_capabilities() {
        let theme = Theme::light();
        let expected = [
            (Platform::Phone, FormRowLayout::Inline),
            (Platform::Desktop, FormRowLayout::TwoColumn),
            (Platform::Wearable, FormRowLayout::Stacked),
        ];
        for (platform, layout) in expected {
            let caps = capabilities_for(platform);
            let spec = DefaultFormRowResolver.resolve(&theme, FormRowLayoutMode::Auto, &caps);
            assert_eq!(spec.resolved_layout, layout, "{}", platform);
        }
    }

    #[test]
    fn test_fixed_layout_wins_over_capabilities() {
        let theme = Theme::light();
        for layout in LAYOUTS {
            for platform in Platform::ALL {
                let caps = capabilities_for(platform);
                let spec =
                    DefaultFormRowResolver.resolve(&theme, FormRowLayoutMode::Fixed(layout), &caps);
                assert_eq!(spec.resolved_layout, layout);
            }
        }
    }

    #[test]
    fn test_two_column_metrics() {
        let caps = capabilities_for(Platform::Desktop);
        let spec = DefaultFormRowResolver.resolve(&Theme::light(), FormRowLayoutMode::Auto, &caps);

        assert_eq!(spec.label_width, Some(160.0));
        assert_eq!(spec.label_alignment, LabelAlignment::Trailing);
        assert_eq!(spec.label_spacing, 16.0);
        assert_eq!(spec.label_color, "#3C3C43");
    }

    #[test]
    fn test_stacked_metrics() {
        let caps = capabilities_for(Platform::Wearable);
        let spec = DefaultFormRowResolver.resolve(&Theme::light(), FormRowLayoutMode::Auto, &caps);

        assert_eq!(spec.label_width, None);
        assert_eq!(spec.label_spacing, 6.0);
        assert_eq!(spec.label_font.size, 15.0);
    }

    #[test]
    fn test_min_height_floored_by_tap_target() {
        let theme = Theme::light().with_density(Density::Compact);

        let phone = capabilities_for(Platform::Phone);
        let spec = DefaultFormRowResolver.resolve(&theme, FormRowLayoutMode::Auto, &phone);
        assert_eq!(spec.min_height, 44.0);

        let desktop = capabilities_for(Platform::Desktop);
        let spec = DefaultFormRowResolver.resolve(&theme, FormRowLayoutMode::Auto, &desktop);
        assert_eq!(spec.min_height, 44.0 * 0.85);
    }

    #[test]
    fn test_layout_mode_serialization() {
        let fixed = FormRowLayoutMode::Fixed(FormRowLayout::Stacked);
        let json = serde_json::to_string(&fixed).unwrap();
        assert_eq!(json, r#"{"mode":"fixed","layout":"stacked"}"#);

        let auto: FormRowLayoutMode = serde_json::from_str(r#"{"mode":"auto"}"#).unwrap();
        assert_eq!(auto, FormRowLayoutMode::Auto);
    }
}
