#![forbid(unsafe_code)]

//! Deterministic responsive grid placement.
//!
//! Given how many items a section shows and which breakpoint is active,
//! [`resolve`] returns a [`LayoutDescriptor`]: the grid's column and row
//! count, plus where each item goes. Counts 2 through 8 use hand-designed
//! layouts in which odd rows are centred; other counts get a plain grid and
//! are left to auto-flow.
//!
//! ```
//! use gridplace::{resolve, Breakpoint, ContainerShape};
//!
//! let layout = resolve(5_usize, Breakpoint::Desktop);
//! assert_eq!(layout.shape, ContainerShape::new(6, 2));
//! assert_eq!(layout.to_string(), "112233\n.4455.");
//! ```
//!
//! Turning a descriptor into markup or styles is up to the caller.

pub mod breakpoint;
pub mod cache;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod fallback;
pub mod resolver;
pub mod responsive;
pub mod table;

pub use breakpoint::{Breakpoint, Breakpoints};
pub use cache::{CachedResolver, PlacementCache, PlacementCacheKey, PlacementCacheStats};
pub use config::ResolverConfig;
pub use descriptor::{ContainerShape, ItemCount, LayoutDescriptor, LayoutViolation, PlacementSpan};
pub use error::{LayoutError, Result};
pub use fallback::FallbackPolicy;
pub use resolver::{GridPlacementResolver, resolve, resolve_raw};
pub use responsive::Responsive;
pub use table::{CURATED_MAX, CURATED_MIN};
