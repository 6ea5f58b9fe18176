//! Platform tags and runtime detection
//!
//! The platform is decided once, from the build target, and can be forced
//! through the `DS_PLATFORM` environment variable to simulate another form
//! factor (for example, rendering wearable layouts on a desktop machine).

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Environment variable that overrides the detected platform
pub const PLATFORM_ENV_VAR: &str = "DS_PLATFORM";

/// Errors produced when parsing platform tags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The tag does not name any known platform
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
}

/// Rendering target form factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Handheld touch device
    Phone,
    /// Pointer and keyboard driven desktop
    Desktop,
    /// Wrist-worn device with a very small screen
    Wearable,
}

impl Platform {
    /// Every platform tag, in declaration order
    pub const ALL: [Platform; 3] = [Platform::Phone, Platform::Desktop, Platform::Wearable];

    /// Get the lowercase tag for this platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Phone => "phone",
            Platform::Desktop => "desktop",
            Platform::Wearable => "wearable",
        }
    }

    /// Platform implied by the compilation target
    pub fn compiled() -> Self {
        if cfg!(target_os = "watchos") {
            Platform::Wearable
        } else if cfg!(any(target_os = "ios", target_os = "android")) {
            Platform::Phone
        } else {
            Platform::Desktop
        }
    }

    /// Detect the platform for this process
    ///
    /// Reads [`PLATFORM_ENV_VAR`] on the first call and falls back to
    /// [`Platform::compiled`]. The result is cached; later changes to the
    /// environment have no effect. Use [`Platform::detect_from`] to simulate
    /// another platform.
    pub fn detect() -> Self {
        static DETECTED: OnceLock<Platform> = OnceLock::new();
        *DETECTED.get_or_init(|| {
            let value = std::env::var(PLATFORM_ENV_VAR).ok();
            Self::detect_from(value.as_deref())
        })
    }

    /// Resolve the platform from an optional override value
    ///
    /// An unparseable override is logged and ignored.
    pub fn detect_from(override_value: Option<&str>) -> Self {
        let compiled = Self::compiled();

        let Some(raw) = override_value.map(str::trim).filter(|v| !v.is_empty()) else {
            tracing::debug!(platform = %compiled, "Using compiled platform");
            return compiled;
        };

        match raw.parse::<Platform>() {
            Ok(platform) => {
                tracing::debug!(
                    platform = %platform,
                    "Platform overridden by {}",
                    PLATFORM_ENV_VAR
                );
                platform
            }
            Err(e) => {
                tracing::warn!("Ignoring {} override: {}", PLATFORM_ENV_VAR, e);
                compiled
            }
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "phone" | "mobile" => Ok(Platform::Phone),
            "desktop" | "mac" => Ok(Platform::Desktop),
            "wearable" | "watch" => Ok(Platform::Wearable),
            _ => Err(PlatformError::UnknownPlatform(s.to_string())),
        }
    }
}
