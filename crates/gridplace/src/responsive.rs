#![forbid(unsafe_code)]

//! A value per [`Breakpoint`], with desktop inheriting from mobile.
//!
//! # Usage
//!
//! ```
//! use gridplace::{Breakpoint, Responsive};
//!
//! let columns = Responsive::new(2).at(Breakpoint::Desktop, 4);
//! assert_eq!(columns.resolve(Breakpoint::Mobile), &2);
//! assert_eq!(columns.resolve(Breakpoint::Desktop), &4);
//!
//! let gap = Responsive::new(6);
//! assert_eq!(gap.resolve(Breakpoint::Desktop), &6); // inherited
//! ```
//!
//! # Invariants
//!
//! 1. `Mobile` always has a value (set via `new()`).
//! 2. A missing `Desktop` value inherits the `Mobile` value.
//! 3. `resolve()` never fails.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Breakpoint;

/// A breakpoint-aware value with inheritance from the smaller tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsive<T> {
    mobile: T,
    desktop: Option<T>,
}

impl<T: Clone> Responsive<T> {
    /// Create a responsive value; both tiers use `base` until overridden.
    #[must_use]
    pub fn new(base: T) -> Self {
        Self {
            mobile: base,
            desktop: None,
        }
    }

    /// Set the value for a tier (builder pattern).
    #[must_use]
    pub fn at(mut self, bp: Breakpoint, value: T) -> Self {
        self.set(bp, value);
        self
    }

    /// Set the value for a tier (mutating).
    pub fn set(&mut self, bp: Breakpoint, value: T) {
        match bp {
            Breakpoint::Mobile => self.mobile = value,
            Breakpoint::Desktop => self.desktop = Some(value),
        }
    }

    /// Drop the desktop override. Clearing `Mobile` is a no-op.
    pub fn clear(&mut self, bp: Breakpoint) {
        if bp == Breakpoint::Desktop {
            self.desktop = None;
        }
    }

    #[must_use]
    pub fn resolve(&self, bp: Breakpoint) -> &T {
        match bp {
            Breakpoint::Mobile => &self.mobile,
            Breakpoint::Desktop => self.desktop.as_ref().unwrap_or(&self.mobile),
        }
    }

    #[must_use]
    pub fn resolve_cloned(&self, bp: Breakpoint) -> T {
        self.resolve(bp).clone()
    }

    /// Whether a tier carries its own (non-inherited) value.
    #[must_use]
    pub fn has_explicit(&self, bp: Breakpoint) -> bool {
        match bp {
            Breakpoint::Mobile => true,
            Breakpoint::Desktop => self.desktop.is_some(),
        }
    }

    /// Explicitly set tiers and their values, smallest first.
    pub fn explicit_values(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        std::iter::once((Breakpoint::Mobile, &self.mobile))
            .chain(self.desktop.as_ref().map(|v| (Breakpoint::Desktop, v)))
    }

    #[must_use]
    pub fn map<U: Clone>(&self, f: impl Fn(&T) -> U) -> Responsive<U> {
        Responsive {
            mobile: f(&self.mobile),
            desktop: self.desktop.as_ref().map(f),
        }
    }
}

impl<T: Clone + Default> Default for Responsive<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Display> fmt::Display for Responsive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Responsive(")?;
        let mut first = true;
        for (bp, val) in self.explicit_values() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{bp}={val}")?;
            first = false;
        }
        write!(f, ")")
    }
}
