//! Platform detection and capability model for the Lumen design system
//!
//! This crate answers one question for the styling layer: what does the
//! current rendering target support? A [`Platform`] tag is determined once at
//! process start (or forced for simulation), and [`capabilities_for`] maps it
//! to a fixed [`Capabilities`] record.
//!
//! # Example
//!
//! ```rust
//! use ds_platform::{capabilities_for, FormRowLayout, Platform};
//!
//! let caps = capabilities_for(Platform::Desktop);
//! assert!(caps.supports_pointer_interaction());
//! assert_eq!(caps.preferred_form_row_layout, FormRowLayout::TwoColumn);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capabilities;
pub mod platform;

pub use capabilities::{
    capabilities_for, Capabilities, FormRowLayout, PickerPresentation, TextFieldMode,
};
pub use platform::{Platform, PlatformError, PLATFORM_ENV_VAR};
