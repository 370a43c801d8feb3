#![forbid(unsafe_code)]

//! Responsive tiers and viewport-width classification.
//!
//! Placement is laid out for two tiers only. A viewport at or above
//! [`Breakpoints::desktop_min_width`] uses the desktop rules; anything
//! narrower uses the mobile rules. Intermediate "tablet" widths are not laid
//! out separately: they fall through to desktop once the minimum is reached.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// A named responsive tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Narrow viewports (below the desktop minimum width).
    Mobile = 0,
    /// Wide viewports.
    Desktop = 1,
}

impl Breakpoint {
    /// All tiers, smallest first.
    pub const ALL: [Breakpoint; 2] = [Breakpoint::Mobile, Breakpoint::Desktop];

    /// The canonical lowercase tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("mobile") {
            Ok(Self::Mobile)
        } else if tag.eq_ignore_ascii_case("desktop") {
            Ok(Self::Desktop)
        } else {
            Err(LayoutError::invalid(format!(
                "unknown breakpoint {s:?}, expected \"mobile\" or \"desktop\""
            )))
        }
    }
}

/// Width thresholds (CSS pixels) separating the tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Minimum viewport width at which the desktop tier applies.
    pub desktop_min_width: u32,
}

impl Breakpoints {
    /// The `md` threshold of the utility-class convention the layouts were
    /// designed against.
    pub const DEFAULT: Self = Self {
        desktop_min_width: 768,
    };

    #[must_use]
    pub const fn new(desktop_min_width: u32) -> Self {
        Self { desktop_min_width }
    }

    /// Classify a viewport width into a tier.
    #[must_use]
    pub const fn classify(&self, width: u32) -> Breakpoint {
        if width >= self.desktop_min_width {
            Breakpoint::Desktop
        } else {
            Breakpoint::Mobile
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tags() {
        assert_eq!("mobile".parse::<Breakpoint>(), Ok(Breakpoint::Mobile));
        assert_eq!("desktop".parse::<Breakpoint>(), Ok(Breakpoint::Desktop));
        assert_eq!(" Desktop ".parse::<Breakpoint>(), Ok(Breakpoint::Desktop));
        assert_eq!("MOBILE".parse::<Breakpoint>(), Ok(Breakpoint::Mobile));
    }

    #[test]
    fn parse_unknown_tag_is_invalid_input() {
        for tag in ["tablet", "", "md", "wide"] {
            let err = tag.parse::<Breakpoint>().unwrap_err();
            assert!(err.is_invalid_input(), "{tag:?} should be rejected");
        }
    }

    #[test]
    fn display_matches_tag() {
        for bp in Breakpoint::ALL {
            assert_eq!(bp.to_string().parse::<Breakpoint>(), Ok(bp));
        }
    }

    #[test]
    fn classify_at_threshold() {
        let bps = Breakpoints::default();
        assert_eq!(bps.classify(0), Breakpoint::Mobile);
        assert_eq!(bps.classify(767), Breakpoint::Mobile);
        assert_eq!(bps.classify(768), Breakpoint::Desktop);
        // Tablet-sized viewports use desktop rules.
        assert_eq!(bps.classify(1024), Breakpoint::Desktop);
    }

    #[test]
    fn custom_threshold() {
        let bps = Breakpoints::new(1000);
        assert_eq!(bps.classify(999), Breakpoint::Mobile);
        assert_eq!(bps.classify(1000), Breakpoint::Desktop);
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Breakpoint::Desktop).unwrap();
        assert_eq!(json, "\"desktop\"");
        let bp: Breakpoint = serde_json::from_str("\"mobile\"").unwrap();
        assert_eq!(bp, Breakpoint::Mobile);
    }
}
