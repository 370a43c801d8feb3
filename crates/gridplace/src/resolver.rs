#![forbid(unsafe_code)]

//! The public entry point: `(count, breakpoint)` to [`LayoutDescriptor`].
//!
//! # Invariants
//!
//! 1. Counts 2..=8 come verbatim from the curated table.
//! 2. Every other count goes through [`FallbackPolicy`], never the table.
//! 3. Curated results carry exactly `count` placements; fallback results
//!    carry none.
//! 4. Each call returns a fresh value. The resolver holds no mutable state, so
//!    it is `Send + Sync` and safe to share.
//!
//! # Failure Modes
//!
//! Typed calls cannot fail. [`GridPlacementResolver::resolve_raw`] rejects a
//! negative count or an unknown breakpoint tag with
//! [`LayoutError::InvalidInput`].

use crate::breakpoint::Breakpoint;
use crate::config::ResolverConfig;
use crate::descriptor::{ItemCount, LayoutDescriptor};
use crate::error::{LayoutError, Result};
use crate::fallback::FallbackPolicy;
use crate::responsive::Responsive;
use crate::table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacementResolver {
    config: ResolverConfig,
    fallback: FallbackPolicy,
}

impl GridPlacementResolver {
    /// A resolver with the stock configuration.
    pub const DEFAULT: Self = Self {
        config: ResolverConfig::new(),
        fallback: FallbackPolicy::new(
            ResolverConfig::DEFAULT_DESKTOP_COLUMN_CAP,
            ResolverConfig::DEFAULT_MOBILE_FALLBACK_COLUMNS,
        ),
    };

    pub fn new(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fallback: FallbackPolicy::from_config(&config),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    #[must_use]
    pub fn resolve(&self, count: impl Into<ItemCount>, bp: Breakpoint) -> LayoutDescriptor {
        let count = count.into();
        match table::lookup(count, bp) {
            Some(entry) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(count = count.get(), breakpoint = %bp, "curated layout");
                entry.to_descriptor()
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(count = count.get(), breakpoint = %bp, "fallback layout");
                self.fallback.layout(count, bp)
            }
        }
    }

    /// Resolve untyped input, e.g. values read from a template or a request.
    pub fn resolve_raw(&self, count: i64, breakpoint: &str) -> Result<LayoutDescriptor> {
        let parsed = ItemCount::try_from(count).and_then(|count| {
            let bp = breakpoint.parse::<Breakpoint>()?;
            Ok((count, bp))
        });
        match parsed {
            Ok((count, bp)) => Ok(self.resolve(count, bp)),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(count, breakpoint, error = %err, "rejected layout request");
                Err(err)
            }
        }
    }

    /// Both tiers at once. The desktop slot is always explicit.
    #[must_use]
    pub fn resolve_responsive(&self, count: impl Into<ItemCount>) -> Responsive<LayoutDescriptor> {
        let count = count.into();
        Responsive::new(self.resolve(count, Breakpoint::Mobile))
            .at(Breakpoint::Desktop, self.resolve(count, Breakpoint::Desktop))
    }

    /// Resolve for a concrete viewport width using the configured thresholds.
    #[must_use]
    pub fn resolve_for_width(&self, count: impl Into<ItemCount>, width: u32) -> LayoutDescriptor {
        self.resolve(count, self.config.breakpoints.classify(width))
    }
}

impl Default for GridPlacementResolver {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resolve with the stock configuration.
#[must_use]
pub fn resolve(count: impl Into<ItemCount>, bp: Breakpoint) -> LayoutDescriptor {
    GridPlacementResolver::DEFAULT.resolve(count, bp)
}

/// [`GridPlacementResolver::resolve_raw`] with the stock configuration.
pub fn resolve_raw(count: i64, breakpoint: &str) -> Result<LayoutDescriptor> {
    GridPlacementResolver::DEFAULT.resolve_raw(count, breakpoint)
}

// Compile-time check: resolvers can be shared across threads.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GridPlacementResolver>();
    assert_send_sync::<LayoutError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoints;
    use crate::descriptor::{ContainerShape, PlacementSpan};

    #[test]
    fn curated_count_uses_table() {
        let layout = resolve(4_usize, Breakpoint::Desktop);
        assert_eq!(layout.shape, ContainerShape::new(4, 1));
        let starts: Vec<u32> = layout.placements.iter().map(|p| p.column_start).collect();
        assert_eq!(starts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn uncurated_count_uses_fallback() {
        let layout = resolve(1_usize, Breakpoint::Desktop);
        assert_eq!(layout, LayoutDescriptor::auto_flow(ContainerShape::new(1, 1)));
    }

    #[test]
    fn raw_rejects_negative_count() {
        let err = resolve_raw(-1, "mobile").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn raw_rejects_unknown_breakpoint() {
        let err = resolve_raw(3, "tablet").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn raw_matches_typed() {
        assert_eq!(
            resolve_raw(5, "desktop").unwrap(),
            resolve(5_usize, Breakpoint::Desktop)
        );
    }

    #[test]
    fn responsive_holds_both_tiers() {
        let layouts = GridPlacementResolver::default().resolve_responsive(3_usize);
        assert!(layouts.has_explicit(Breakpoint::Desktop));
        assert_eq!(
            layouts.resolve(Breakpoint::Mobile).shape,
            ContainerShape::new(4, 2)
        );
        assert_eq!(
            layouts.resolve(Breakpoint::Desktop).shape,
            ContainerShape::new(3, 1)
        );
    }

    #[test]
    fn width_selects_tier() {
        let resolver = GridPlacementResolver::default();
        assert_eq!(
            resolver.resolve_for_width(3_usize, 375),
            resolve(3_usize, Breakpoint::Mobile)
        );
        assert_eq!(
            resolver.resolve_for_width(3_usize, 1280),
            resolve(3_usize, Breakpoint::Desktop)
        );
    }

    #[test]
    fn config_changes_fallback_only() {
        let config = ResolverConfig::new()
            .desktop_column_cap(4)
            .breakpoints(Breakpoints::new(1024));
        let resolver = GridPlacementResolver::new(config).unwrap();
        assert_eq!(
            resolver.resolve(12_usize, Breakpoint::Desktop).shape,
            ContainerShape::new(4, 3)
        );
        assert_eq!(
            resolver.resolve(7_usize, Breakpoint::Desktop),
            resolve(7_usize, Breakpoint::Desktop)
        );
        assert_eq!(
            resolver.resolve_for_width(2_usize, 800),
            resolve(2_usize, Breakpoint::Mobile)
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = GridPlacementResolver::new(ResolverConfig::new().desktop_column_cap(0));
        assert!(matches!(err, Err(LayoutError::InvalidConfig { .. })));
    }

    #[test]
    fn returned_layout_is_owned() {
        let mut first = resolve(5_usize, Breakpoint::Mobile);
        first.placements[0] = PlacementSpan::new(9, 9, 9);
        first.placements.pop();
        let second = resolve(5_usize, Breakpoint::Mobile);
        assert_eq!(second.placements.len(), 5);
        assert_eq!(second.placements[0], PlacementSpan::new(1, 2, 1));
    }

    #[test]
    fn default_const_matches_default_config() {
        assert_eq!(
            GridPlacementResolver::DEFAULT,
            GridPlacementResolver::new(ResolverConfig::default()).unwrap()
        );
    }

    #[cfg(feature = "tracing")]
    mod tracing_events {
        use super::*;
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::layer::SubscriberExt;

        #[derive(Clone, Default)]
        struct LevelCapture(Arc<Mutex<Vec<(tracing::Level, String)>>>);

        struct MessageVisitor<'a>(&'a mut String);

        impl tracing::field::Visit for MessageVisitor<'_> {
            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    *self.0 = format!("{value:?}");
                }
            }
        }

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LevelCapture {
            fn on_event(
                &self,
                event: &tracing::Event<'_>,
                _ctx: tracing_subscriber::layer::Context<'_, S>,
            ) {
                let mut message = String::new();
                event.record(&mut MessageVisitor(&mut message));
                self.0
                    .lock()
                    .unwrap()
                    .push((*event.metadata().level(), message));
            }
        }

        fn capture(f: impl FnOnce()) -> Vec<(tracing::Level, String)> {
            let layer = LevelCapture::default();
            let events = Arc::clone(&layer.0);
            let subscriber = tracing_subscriber::registry().with(layer);
            tracing::subscriber::with_default(subscriber, f);
            let captured = events.lock().unwrap().clone();
            captured
        }

        #[test]
        fn fallback_logs_at_debug() {
            let events = capture(|| {
                let _ = resolve(12_usize, Breakpoint::Desktop);
            });
            assert_eq!(
                events,
                vec![(tracing::Level::DEBUG, "fallback layout".to_string())]
            );
        }

        #[test]
        fn rejected_input_logs_warning() {
            let events = capture(|| {
                let _ = resolve_raw(-3, "mobile");
            });
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].0, tracing::Level::WARN);
        }
    }
}
