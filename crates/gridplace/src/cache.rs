#![forbid(unsafe_code)]

//! Memoization of resolved layouts.
//!
//! Resolution is a pure function of `(count, breakpoint)`, so results can be
//! cached without any invalidation. [`PlacementCache`] is safe to share
//! between threads: lookups take a shared lock, inserts an exclusive one.
//! Eviction or a cold cache only costs recomputation; results are identical.
//!
//! # Usage
//!
//! ```
//! use gridplace::{Breakpoint, CachedResolver};
//!
//! let resolver = CachedResolver::new(64);
//! let a = resolver.resolve(5_usize, Breakpoint::Desktop);
//! let b = resolver.resolve(5_usize, Breakpoint::Desktop);
//! assert_eq!(a, b);
//! assert_eq!(resolver.cache().stats().hits, 1);
//! ```
//!
//! # Cache Eviction
//!
//! When at capacity the least frequently accessed entry is evicted.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::breakpoint::Breakpoint;
use crate::descriptor::{ItemCount, LayoutDescriptor};
use crate::resolver::GridPlacementResolver;

/// Key for cache lookups.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PlacementCacheKey {
    pub count: ItemCount,
    pub breakpoint: Breakpoint,
}

impl PlacementCacheKey {
    #[must_use]
    pub const fn new(count: ItemCount, breakpoint: Breakpoint) -> Self {
        Self { count, breakpoint }
    }
}

#[derive(Debug)]
struct CachedEntry {
    layout: LayoutDescriptor,
    access_count: AtomicU32,
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementCacheStats {
    /// Number of entries currently in the cache.
    pub entries: usize,
    /// Total cache hits since creation or last reset.
    pub hits: u64,
    /// Total cache misses since creation or last reset.
    pub misses: u64,
    /// Hit rate as a fraction (0.0 to 1.0).
    pub hit_rate: f64,
}

/// Thread-safe bounded memo of [`LayoutDescriptor`]s.
#[derive(Debug)]
pub struct PlacementCache {
    entries: RwLock<FxHashMap<PlacementCacheKey, CachedEntry>>,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PlacementCache {
    /// Create a cache holding at most `max_entries` layouts. A capacity of
    /// zero disables storage; every lookup recomputes.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(FxHashMap::with_capacity_and_hasher(
                max_entries,
                Default::default(),
            )),
            max_entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return a clone of the cached layout, or compute, store and return it.
    pub fn get_or_compute<F>(&self, key: PlacementCacheKey, compute: F) -> LayoutDescriptor
    where
        F: FnOnce() -> LayoutDescriptor,
    {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = entries.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                entry.access_count.fetch_add(1, Ordering::Relaxed);
                return entry.layout.clone();
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let layout = compute();
        if self.max_entries == 0 {
            return layout;
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have filled the slot while we computed.
        if !entries.contains_key(&key) {
            if entries.len() >= self.max_entries {
                Self::evict_lfu(&mut entries);
            }
            entries.insert(
                key,
                CachedEntry {
                    layout: layout.clone(),
                    access_count: AtomicU32::new(1),
                },
            );
        }
        layout
    }

    fn evict_lfu(entries: &mut FxHashMap<PlacementCacheKey, CachedEntry>) {
        let victim = entries
            .iter()
            .min_by_key(|(key, entry)| {
                (
                    entry.access_count.load(Ordering::Relaxed),
                    key.count,
                    key.breakpoint,
                )
            })
            .map(|(key, _)| *key);
        if let Some(key) = victim {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                count = key.count.get(),
                breakpoint = %key.breakpoint,
                "evicting cached layout"
            );
            entries.remove(&key);
        }
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Reset hit/miss counters.
    pub fn reset_stats(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    #[must_use]
    pub fn stats(&self) -> PlacementCacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        PlacementCacheStats {
            entries: self.len(),
            hits,
            misses,
            hit_rate: if total > 0 {
                hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }
}

impl Default for PlacementCache {
    /// Room for every curated entry plus a few fallback counts.
    fn default() -> Self {
        Self::new(32)
    }
}

/// A [`GridPlacementResolver`] fronted by a [`PlacementCache`].
#[derive(Debug, Default)]
pub struct CachedResolver {
    resolver: GridPlacementResolver,
    cache: PlacementCache,
}

impl CachedResolver {
    /// Stock resolver with a cache of `max_entries`.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self::with_resolver(GridPlacementResolver::default(), max_entries)
    }

    #[must_use]
    pub fn with_resolver(resolver: GridPlacementResolver, max_entries: usize) -> Self {
        Self {
            resolver,
            cache: PlacementCache::new(max_entries),
        }
    }

    #[must_use]
    pub fn resolve(&self, count: impl Into<ItemCount>, bp: Breakpoint) -> LayoutDescriptor {
        let count = count.into();
        self.cache
            .get_or_compute(PlacementCacheKey::new(count, bp), || {
                self.resolver.resolve(count, bp)
            })
    }

    #[must_use]
    pub fn resolver(&self) -> &GridPlacementResolver {
        &self.resolver
    }

    #[must_use]
    pub fn cache(&self) -> &PlacementCache {
        &self.cache
    }
}
