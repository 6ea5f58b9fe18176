//! Lumen design system
//!
//! Umbrella crate over the two layers of the design system:
//! - [`platform`] - platform detection and the capability matrix
//! - [`ui`] - theme, tokens, resolver registry and component specs
//!
//! # Example
//!
//! ```rust
//! use lumen_design::platform::{Capabilities, Platform};
//! use lumen_design::ui::{ListRowState, ListRowStyle, Theme};
//!
//! let caps = Capabilities::for_platform(Platform::Phone);
//! let row = Theme::dark().resolve_list_row(ListRowStyle::Inset, ListRowState::Normal, &caps);
//! assert!(row.min_height >= caps.minimum_tap_target_size);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use ds_platform as platform;
pub use ds_ui as ui;
