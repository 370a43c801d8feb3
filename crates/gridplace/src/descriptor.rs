#![forbid(unsafe_code)]

//! Layout descriptor types.
//!
//! A [`LayoutDescriptor`] is the whole answer for one `(count, breakpoint)`
//! pair: the grid dimensions plus, for curated counts, one explicit
//! [`PlacementSpan`] per item in caller order. An empty placement list means
//! the grid's implicit row-major auto-flow places the items.
//!
//! Coordinates are 1-based grid lines, matching how a renderer would emit
//! `grid-column-start` / `grid-row-start`. Rows always span one track.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{LayoutError, Result};
use crate::table::{CURATED_MAX, CURATED_MIN};

/// Number of items a layout is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCount(usize);

impl ItemCount {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Whether the count has a hand-designed table entry.
    #[must_use]
    pub const fn is_curated(self) -> bool {
        self.0 >= CURATED_MIN && self.0 <= CURATED_MAX
    }

    /// Cap the count at the largest curated count.
    ///
    /// For callers that only ever show as many items as there are curated
    /// layouts for; resolution never truncates on its own.
    #[must_use]
    pub const fn clamp_curated(self) -> Self {
        if self.0 > CURATED_MAX {
            Self(CURATED_MAX)
        } else {
            self
        }
    }
}

impl From<usize> for ItemCount {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for ItemCount {
    type Error = LayoutError;

    fn try_from(count: i64) -> Result<Self> {
        usize::try_from(count).map(Self).map_err(|_| {
            LayoutError::invalid(format!("item count must be non-negative, got {count}"))
        })
    }
}

impl fmt::Display for ItemCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grid dimensions. Both fields are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerShape {
    pub columns: u32,
    pub rows: u32,
}

impl ContainerShape {
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }
}

/// Where one item sits. The row span is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementSpan {
    pub column_start: u32,
    pub column_span: u32,
    pub row_start: u32,
}

impl PlacementSpan {
    #[must_use]
    pub const fn new(column_start: u32, column_span: u32, row_start: u32) -> Self {
        Self {
            column_start,
            column_span,
            row_start,
        }
    }

    /// Last column covered (inclusive).
    #[must_use]
    pub const fn column_last(&self) -> u32 {
        self.column_start
            .saturating_add(self.column_span)
            .saturating_sub(1)
    }

    /// Covered `(column, row)` cells, left to right.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.column_span)
            .map(move |offset| (self.column_start.saturating_add(offset), self.row_start))
    }
}

/// A problem found by [`LayoutDescriptor::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutViolation {
    #[error("shape {columns}x{rows} has an empty dimension")]
    EmptyShape { columns: u32, rows: u32 },

    #[error("item {item} has a zero column span or a zero start line")]
    Degenerate { item: usize },

    #[error("item {item} covers cell ({column}, {row}) outside the grid")]
    OutOfBounds { item: usize, column: u32, row: u32 },

    #[error("items {first} and {second} both cover cell ({column}, {row})")]
    Overlap {
        first: usize,
        second: usize,
        column: u32,
        row: u32,
    },
}

/// Container shape plus per-item placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    pub shape: ContainerShape,
    pub placements: Vec<PlacementSpan>,
}

impl LayoutDescriptor {
    #[must_use]
    pub fn new(shape: ContainerShape, placements: Vec<PlacementSpan>) -> Self {
        Self { shape, placements }
    }

    /// A descriptor that leaves placement to the grid's auto-flow.
    #[must_use]
    pub fn auto_flow(shape: ContainerShape) -> Self {
        Self {
            shape,
            placements: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_auto_flow(&self) -> bool {
        self.placements.is_empty()
    }

    /// Every covered cell as `(item_index, column, row)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, u32, u32)> + '_ {
        self.placements
            .iter()
            .enumerate()
            .flat_map(|(item, span)| span.cells().map(move |(c, r)| (item, c, r)))
    }

    /// Check containment, span sanity and overlap. Empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<LayoutViolation> {
        let mut violations = Vec::new();
        let ContainerShape { columns, rows } = self.shape;
        if columns == 0 || rows == 0 {
            violations.push(LayoutViolation::EmptyShape { columns, rows });
        }

        let mut occupied: FxHashMap<(u32, u32), usize> = FxHashMap::default();
        for (item, span) in self.placements.iter().enumerate() {
            if span.column_span == 0 || span.column_start == 0 || span.row_start == 0 {
                violations.push(LayoutViolation::Degenerate { item });
                continue;
            }
            for (column, row) in span.cells() {
                if column > columns || row > rows {
                    violations.push(LayoutViolation::OutOfBounds { item, column, row });
                }
                if let Some(&first) = occupied.get(&(column, row)) {
                    violations.push(LayoutViolation::Overlap {
                        first,
                        second: item,
                        column,
                        row,
                    });
                } else {
                    occupied.insert((column, row), item);
                }
            }
        }
        violations
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn item_glyph(item: usize) -> char {
    u32::try_from(item + 1)
        .ok()
        .and_then(|n| char::from_digit(n, 36))
        .unwrap_or('#')
}

/// Renders an occupancy map: one line per row, one glyph per column.
/// Items are numbered from `1` (then `a`..`z`), `.` marks an empty cell and
/// `*` a cell claimed twice. Auto-flow descriptors render as a one-line
/// summary since no cell is assigned up front.
impl fmt::Display for LayoutDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ContainerShape { columns, rows } = self.shape;
        if self.is_auto_flow() {
            return write!(f, "{columns}x{rows} auto-flow");
        }

        let mut grid: FxHashMap<(u32, u32), char> = FxHashMap::default();
        for (item, column, row) in self.cells() {
            grid.entry((column, row))
                .and_modify(|glyph| *glyph = '*')
                .or_insert_with(|| item_glyph(item));
        }

        for row in 1..=rows {
            if row > 1 {
                writeln!(f)?;
            }
            for column in 1..=columns {
                let glyph = grid.get(&(column, row)).copied().unwrap_or('.');
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}
