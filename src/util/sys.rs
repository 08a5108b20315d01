//! Collection-type indirection and small numeric helpers used throughout the compute layer.
//!
//! Mirrors the reference crate's `util::sys` module, which picks between `std` and `alloc`
//! collection types behind its own `std` feature. This crate's `std` feature only toggles
//! `slotmap/std` today (see `Cargo.toml`) — the reference crate's `alloc`-only path depends on
//! unstable/nightly-only pieces this crate's dependency stack (`thiserror`, `log`) doesn't support
//! on stable without `std` either, so there is no `alloc`-only build to route to here yet. Kept as
//! its own module anyway, matching the reference crate's seam, so that boundary can move here
//! without touching call sites if the dependency stack grows `alloc` support later.

pub use std::{boxed::Box, vec, vec::Vec};

/// A `Vec` sized for the expected child/line count of a typical node. Plain alias today; kept
/// distinct from `Vec` so a future swap to a small-vector type only touches this file.
pub type ChildrenVec<T> = Vec<T>;

/// Create a new, empty `Vec` with the given capacity reserved.
pub fn new_vec_with_capacity<T>(capacity: usize) -> Vec<T> {
    Vec::with_capacity(capacity)
}

/// `f32::max`, but total-ordered: `NaN` never wins. Used instead of the method form because
/// `f32::max` already does this, but call sites read more consistently alongside `f32_min`.
#[inline(always)]
pub fn f32_max(a: f32, b: f32) -> f32 {
    a.max(b)
}

/// `f32::min`, `NaN`-safe.
#[inline(always)]
pub fn f32_min(a: f32, b: f32) -> f32 {
    a.min(b)
}

/// Absolute value.
#[inline(always)]
pub fn abs(a: f32) -> f32 {
    a.abs()
}

/// Round-half-away-from-zero to the nearest integer, matching the reference crate's rounding
/// behavior (used by the pixel-grid rounder, spec §4.10).
#[inline(always)]
pub fn round(value: f32) -> f32 {
    value.round()
}
