#![forbid(unsafe_code)]

//! Curated placement table for 2 through 8 items.
//!
//! Mobile layouts use a four-column track so a lone trailing item can span
//! columns 2..3 and sit centred under the pair above it. Desktop layouts for
//! five and seven items double the column count and give every item a span
//! of two, so the shorter second row can be offset by one track and centre
//! under the first.
//!
//! The table is a `static`; lookups hand out shared references and
//! [`PlacementEntry::to_descriptor`] makes the owned copy callers receive.

use crate::descriptor::{ContainerShape, ItemCount, LayoutDescriptor, PlacementSpan};
use crate::Breakpoint;

/// Smallest count with a curated layout.
pub const CURATED_MIN: usize = 2;
/// Largest count with a curated layout.
pub const CURATED_MAX: usize = 8;

/// One `(count, breakpoint)` cell of the table.
#[derive(Debug, PartialEq, Eq)]
pub struct PlacementEntry {
    shape: ContainerShape,
    placements: &'static [PlacementSpan],
}

impl PlacementEntry {
    #[must_use]
    pub const fn shape(&self) -> ContainerShape {
        self.shape
    }

    #[must_use]
    pub const fn placements(&self) -> &'static [PlacementSpan] {
        self.placements
    }

    /// An owned descriptor; mutating it never touches the table.
    #[must_use]
    pub fn to_descriptor(&self) -> LayoutDescriptor {
        LayoutDescriptor::new(self.shape, self.placements.to_vec())
    }
}

#[derive(Debug)]
struct CuratedLayout {
    mobile: PlacementEntry,
    desktop: PlacementEntry,
}

// Struct literals keep the slices promotable to `'static`.
macro_rules! at {
    ($column_start:expr, $column_span:expr, $row_start:expr) => {
        PlacementSpan {
            column_start: $column_start,
            column_span: $column_span,
            row_start: $row_start,
        }
    };
}

const fn entry(columns: u32, rows: u32, placements: &'static [PlacementSpan]) -> PlacementEntry {
    PlacementEntry {
        shape: ContainerShape::new(columns, rows),
        placements,
    }
}

// Index 0 holds the layouts for CURATED_MIN items.
static PLACEMENT_TABLE: [CuratedLayout; CURATED_MAX - CURATED_MIN + 1] = [
    // 2
    CuratedLayout {
        mobile: entry(2, 1, &[at!(1, 1, 1), at!(2, 1, 1)]),
        desktop: entry(2, 1, &[at!(1, 1, 1), at!(2, 1, 1)]),
    },
    // 3
    CuratedLayout {
        mobile: entry(4, 2, &[at!(1, 2, 1), at!(3, 2, 1), at!(2, 2, 2)]),
        desktop: entry(3, 1, &[at!(1, 1, 1), at!(2, 1, 1), at!(3, 1, 1)]),
    },
    // 4
    CuratedLayout {
        mobile: entry(
            4,
            2,
            &[at!(1, 2, 1), at!(3, 2, 1), at!(1, 2, 2), at!(3, 2, 2)],
        ),
        desktop: entry(
            4,
            1,
            &[at!(1, 1, 1), at!(2, 1, 1), at!(3, 1, 1), at!(4, 1, 1)],
        ),
    },
    // 5
    CuratedLayout {
        mobile: entry(
            4,
            3,
            &[
                at!(1, 2, 1),
                at!(3, 2, 1),
                at!(1, 2, 2),
                at!(3, 2, 2),
                at!(2, 2, 3),
            ],
        ),
        desktop: entry(
            6,
            2,
            &[
                at!(1, 2, 1),
                at!(3, 2, 1),
                at!(5, 2, 1),
                at!(2, 2, 2),
                at!(4, 2, 2),
            ],
        ),
    },
    // 6
    CuratedLayout {
        mobile: entry(
            4,
            3,
            &[
                at!(1, 2, 1),
                at!(3, 2, 1),
                at!(1, 2, 2),
                at!(3, 2, 2),
                at!(1, 2, 3),
                at!(3, 2, 3),
            ],
        ),
        desktop: entry(
            3,
            2,
            &[
                at!(1, 1, 1),
                at!(2, 1, 1),
                at!(3, 1, 1),
                at!(1, 1, 2),
                at!(2, 1, 2),
                at!(3, 1, 2),
            ],
        ),
    },
    // 7
    CuratedLayout {
        mobile: entry(
            4,
            4,
            &[
                at!(1, 2, 1),
                at!(3, 2, 1),
                at!(1, 2, 2),
                at!(3, 2, 2),
                at!(1, 2, 3),
                at!(3, 2, 3),
                at!(2, 2, 4),
            ],
        ),
        desktop: entry(
            8,
            2,
            &[
                at!(1, 2, 1),
                at!(3, 2, 1),
                at!(5, 2, 1),
                at!(7, 2, 1),
                at!(2, 2, 2),
                at!(4, 2, 2),
                at!(6, 2, 2),
            ],
        ),
    },
    // 8
    CuratedLayout {
        mobile: entry(
            4,
            4,
            &[
                at!(1, 2, 1),
                at!(3, 2, 1),
                at!(1, 2, 2),
                at!(3, 2, 2),
                at!(1, 2, 3),
                at!(3, 2, 3),
                at!(1, 2, 4),
                at!(3, 2, 4),
            ],
        ),
        desktop: entry(
            4,
            2,
            &[
                at!(1, 1, 1),
                at!(2, 1, 1),
                at!(3, 1, 1),
                at!(4, 1, 1),
                at!(1, 1, 2),
                at!(2, 1, 2),
                at!(3, 1, 2),
                at!(4, 1, 2),
            ],
        ),
    },
];

/// The curated entry for `(count, bp)`, or `None` outside the curated range.
#[must_use]
pub fn lookup(count: ItemCount, bp: Breakpoint) -> Option<&'static PlacementEntry> {
    if !count.is_curated() {
        return None;
    }
    let layout = PLACEMENT_TABLE.get(count.get() - CURATED_MIN)?;
    Some(match bp {
        Breakpoint::Mobile => &layout.mobile,
        Breakpoint::Desktop => &layout.desktop,
    })
}

/// Every curated `(count, breakpoint, entry)`, smallest count first.
pub fn entries() -> impl Iterator<Item = (ItemCount, Breakpoint, &'static PlacementEntry)> {
    PLACEMENT_TABLE
        .iter()
        .enumerate()
        .flat_map(|(offset, layout)| {
            let count = ItemCount::new(CURATED_MIN + offset);
            [
                (count, Breakpoint::Mobile, &layout.mobile),
                (count, Breakpoint::Desktop, &layout.desktop),
            ]
        })
}
