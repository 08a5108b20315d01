//! The per-node measurement cache (spec §4.4).
//!
//! Keyed on `(available-width, width-mode, available-height, height-mode)`. A bounded
//! `ArrayVec` with FIFO eviction, exactly as spec §4.4 describes ("typical bound 16 ...
//! possibly evicting oldest") — the reference crate instead uses a small fixed set of slots
//! indexed by which dimensions are known, which is faster but harder to justify against the
//! spec's literal wording; this crate follows the spec text and notes the divergence in
//! DESIGN.md.

use arrayvec::ArrayVec;

use crate::geometry::Size;
use crate::style::AvailableSpace;
use crate::tree::{RunMode, SizeAndBaselines};

/// Default bound on the number of measurement entries kept per node.
pub const CACHE_CAPACITY: usize = 16;

#[derive(Copy, Clone, Debug)]
struct CacheEntry {
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    content: SizeAndBaselines,
}

/// Per-node measurement cache. One node = one `Cache`.
#[derive(Clone, Debug, Default)]
pub struct Cache {
    /// The entry (if any) whose result was used to assign this node's *final* layout, as opposed
    /// to one of the possibly many speculative measurements a parent took while forming lines /
    /// resolving flex. Spec §4.4: "One entry is distinguished as the 'layout' cache."
    final_layout_entry: Option<CacheEntry>,
    /// Bounded set of "just measuring" entries.
    measure_entries: ArrayVec<CacheEntry, CACHE_CAPACITY>,
}

impl Cache {
    /// A fresh, empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached result for the given inputs. `known_dimensions` entries that are `Some`
    /// must match exactly (a node whose width is pinned by the parent cannot reuse a measurement
    /// taken with an unpinned width); `available_space` must match by `PartialEq` on the whole
    /// enum (so `Definite(100.0)` only matches another `Definite(100.0)`, never `MinContent`).
    pub fn get(
        &self,
        known_dimensions: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        run_mode: RunMode,
    ) -> Option<SizeAndBaselines> {
        if run_mode == RunMode::PerformLayout {
            if let Some(entry) = &self.final_layout_entry {
                if Self::inputs_compatible(entry, known_dimensions, available_space) {
                    return Some(entry.content);
                }
            }
        }

        self.measure_entries
            .iter()
            .find(|entry| Self::inputs_compatible(entry, known_dimensions, available_space))
            .map(|entry| entry.content)
    }

    fn inputs_compatible(
        entry: &CacheEntry,
        known_dimensions: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
    ) -> bool {
        let dimensions_compatible = |known: Option<f32>, cached: Option<f32>, avail: AvailableSpace, cached_avail: AvailableSpace| {
            match known {
                Some(known) => Some(known) == cached,
                None => cached.is_none() && avail == cached_avail,
            }
        };
        dimensions_compatible(
            known_dimensions.width,
            entry.known_dimensions.width,
            available_space.width,
            entry.available_space.width,
        ) && dimensions_compatible(
            known_dimensions.height,
            entry.known_dimensions.height,
            available_space.height,
            entry.available_space.height,
        )
    }

    /// Insert a freshly computed result, evicting the oldest measure entry if the bounded set is
    /// full (spec §4.4).
    pub fn store(
        &mut self,
        known_dimensions: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        run_mode: RunMode,
        content: SizeAndBaselines,
    ) {
        let entry = CacheEntry { known_dimensions, available_space, content };

        if run_mode == RunMode::PerformLayout {
            self.final_layout_entry = Some(entry);
            return;
        }

        if self.measure_entries.is_full() {
            self.measure_entries.remove(0);
        }
        self.measure_entries.push(entry);
    }

    /// Drop every cached entry. Called whenever a node's style or children change, and
    /// propagated to every ancestor (spec §4.4: "invalidation ... propagates ... upward").
    pub fn clear(&mut self) {
        self.final_layout_entry = None;
        self.measure_entries.clear();
    }
}
