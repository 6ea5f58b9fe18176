//! Style resolution for the Lumen design system
//!
//! This crate turns a [`Theme`] plus a component request into a concrete,
//! immutable spec that a renderer can draw without further decisions.
//!
//! # Design System
//!
//! A theme is made of four parts:
//! - [`ThemeVariant`] - light or dark appearance
//! - [`Density`] - spacing preset applied to padding and heights
//! - [`AccessibilityPolicy`] - user overrides supplied by the host
//! - [`ComponentStyles`] - one resolver per component kind
//!
//! Six component kinds are supported: buttons, text fields, toggles, cards,
//! form rows and list rows. Form rows and list rows also take the platform
//! [`Capabilities`](ds_platform::Capabilities).
//!
//! # Modules
//!
//! - [`theme`] - Theme, palette, density and accessibility policy
//! - [`tokens`] - Design tokens (spacing, sizing, radius, durations)
//! - [`typography`] - Text roles and fonts
//! - [`styles`] - Resolver traits, default resolvers and spec types
//! - [`config`] - Serializable theme settings
//!
//! # Example
//!
//! ```rust
//! use ds_platform::{capabilities_for, FormRowLayout, Platform};
//! use ds_ui::styles::{ButtonSize, ButtonState, ButtonVariant, FormRowLayoutMode};
//! use ds_ui::theme::Theme;
//!
//! let theme = Theme::light();
//! let button =
//!     theme.resolve_button(ButtonVariant::Primary, ButtonSize::Medium, ButtonState::Normal);
//! assert_eq!(button.height, 44.0);
//! assert_eq!(button.background, "#007AFF");
//!
//! let caps = capabilities_for(Platform::Wearable);
//! let row = theme.resolve_form_row(FormRowLayoutMode::Auto, &caps);
//! assert_eq!(row.resolved_layout, FormRowLayout::Stacked);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod styles;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use config::{ConfigError, ThemeConfig};

pub use styles::{
    ButtonResolver, ButtonSize, ButtonSpec, ButtonState, ButtonVariant, CardElevation,
    CardResolver, CardSpec, ComponentKind, ComponentStyles, FieldResolver, FieldSpec, FieldState,
    FieldValidation, FormRowLayoutMode, FormRowResolver, FormRowSpec, LabelAlignment,
    ListRowResolver, ListRowSpec, ListRowState, ListRowStyle, ToggleResolver, ToggleSpec,
    ToggleState,
};

pub use theme::{
    AccessibilityPolicy, Color, Density, DynamicTypeSize, Palette, Theme, ThemeVariant,
};

pub use tokens::Shadow;

pub use typography::{Font, TextRole};
