#![forbid(unsafe_code)]

//! Resolver configuration.
//!
//! Only the fallback and breakpoint classification are tunable. The curated
//! table is fixed so that every host renders 2..=8 items identically.
//!
//! ```
//! use gridplace::ResolverConfig;
//!
//! let config: ResolverConfig =
//!     serde_json::from_str(r#"{ "desktop_column_cap": 4 }"#).unwrap();
//! assert_eq!(config.desktop_column_cap, 4);
//! assert_eq!(config.mobile_fallback_columns, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::breakpoint::Breakpoints;
use crate::error::{LayoutError, Result};

/// Tunables for [`crate::GridPlacementResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum desktop column count for uncurated counts.
    pub desktop_column_cap: u32,
    /// Mobile column count for uncurated counts of two or more.
    pub mobile_fallback_columns: u32,
    /// Width thresholds used by `resolve_for_width`.
    pub breakpoints: Breakpoints,
}

impl ResolverConfig {
    pub const DEFAULT_DESKTOP_COLUMN_CAP: u32 = 6;
    pub const DEFAULT_MOBILE_FALLBACK_COLUMNS: u32 = 2;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            desktop_column_cap: Self::DEFAULT_DESKTOP_COLUMN_CAP,
            mobile_fallback_columns: Self::DEFAULT_MOBILE_FALLBACK_COLUMNS,
            breakpoints: Breakpoints::DEFAULT,
        }
    }

    #[must_use]
    pub const fn desktop_column_cap(mut self, cap: u32) -> Self {
        self.desktop_column_cap = cap;
        self
    }

    #[must_use]
    pub const fn mobile_fallback_columns(mut self, columns: u32) -> Self {
        self.mobile_fallback_columns = columns;
        self
    }

    #[must_use]
    pub const fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Reject values that would produce a zero-width fallback grid.
    pub fn validate(&self) -> Result<()> {
        if self.desktop_column_cap == 0 {
            return Err(LayoutError::config("desktop_column_cap must be at least 1"));
        }
        if self.mobile_fallback_columns == 0 {
            return Err(LayoutError::config(
                "mobile_fallback_columns must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.desktop_column_cap, 6);
        assert_eq!(config.mobile_fallback_columns, 2);
        assert_eq!(config.breakpoints.desktop_min_width, 768);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_caps_are_rejected() {
        let err = ResolverConfig::new()
            .desktop_column_cap(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig { .. }));

        let err = ResolverConfig::new()
            .mobile_fallback_columns(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig { .. }));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{ "breakpoints": { "desktop_min_width": 1024 } }"#).unwrap();
        assert_eq!(config.breakpoints.desktop_min_width, 1024);
        assert_eq!(config.desktop_column_cap, 6);
    }

    #[test]
    fn serde_roundtrip() {
        let config = ResolverConfig::new()
            .desktop_column_cap(4)
            .breakpoints(Breakpoints::new(900));
        let json = serde_json::to_string(&config).unwrap();
        let back: ResolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
