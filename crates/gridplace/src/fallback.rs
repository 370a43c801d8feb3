#![forbid(unsafe_code)]

//! Layouts for counts without a curated table entry (0, 1 and above 8).
//!
//! The fallback only sizes the container; placement is left to auto-flow.
//! It is total over every count and never fails.

use crate::config::ResolverConfig;
use crate::descriptor::{ContainerShape, ItemCount, LayoutDescriptor};
use crate::Breakpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPolicy {
    desktop_column_cap: u32,
    mobile_columns: u32,
}

impl FallbackPolicy {
    #[must_use]
    pub const fn new(desktop_column_cap: u32, mobile_columns: u32) -> Self {
        Self {
            desktop_column_cap,
            mobile_columns,
        }
    }

    #[must_use]
    pub const fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.desktop_column_cap, config.mobile_fallback_columns)
    }

    /// Column count for `count` items at `bp`. Always at least 1.
    #[must_use]
    pub fn columns(&self, count: ItemCount, bp: Breakpoint) -> u32 {
        let n = saturating_u32(count.get());
        let columns = match bp {
            Breakpoint::Mobile if n >= 2 => self.mobile_columns,
            Breakpoint::Mobile => 1,
            Breakpoint::Desktop => n.min(self.desktop_column_cap),
        };
        columns.max(1)
    }

    #[must_use]
    pub fn shape(&self, count: ItemCount, bp: Breakpoint) -> ContainerShape {
        let columns = self.columns(count, bp);
        let rows = count.get().div_ceil(columns as usize);
        ContainerShape::new(columns, saturating_u32(rows).max(1))
    }

    #[must_use]
    pub fn layout(&self, count: ItemCount, bp: Breakpoint) -> LayoutDescriptor {
        LayoutDescriptor::auto_flow(self.shape(count, bp))
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::from_config(&ResolverConfig::default())
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
