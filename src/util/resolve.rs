//! Small algebra over `Option<f32>` ("maybe a definite length") so that the compute layer never
//! has to write an explicit `match` every time it wants to add, clamp or compare two maybe-known
//! lengths. Spec §9: "All arithmetic on values goes through a small algebra ... that propagates
//! Undefined correctly; direct floating comparisons with Undefined are disallowed."

use crate::geometry::{Rect, Size};
use crate::style::{Dimension, LengthPercentage, LengthPercentageAuto};

/// Resolve a value (or pair of values) against a reference, producing `Option<f32>` where `None`
/// means "Undefined" (spec §4.1).
pub trait MaybeResolve<In, Out> {
    /// Resolve `self` against `reference`
    fn maybe_resolve(&self, reference: In) -> Out;
}

impl MaybeResolve<Option<f32>, Option<f32>> for Dimension {
    fn maybe_resolve(&self, reference: Option<f32>) -> Option<f32> {
        self.resolve_to_option(reference)
    }
}

impl MaybeResolve<Option<f32>, Option<f32>> for LengthPercentageAuto {
    fn maybe_resolve(&self, reference: Option<f32>) -> Option<f32> {
        match reference {
            Some(reference) => self.resolve_to_option(reference),
            None => match self {
                LengthPercentageAuto::Length(v) => Some(*v),
                _ => None,
            },
        }
    }
}

impl MaybeResolve<Option<f32>, Option<f32>> for LengthPercentage {
    fn maybe_resolve(&self, reference: Option<f32>) -> Option<f32> {
        match (*self, reference) {
            (LengthPercentage::Length(v), _) => Some(v),
            (LengthPercentage::Percent(p), Some(reference)) => Some(p * reference),
            (LengthPercentage::Percent(_), None) => None,
        }
    }
}

impl<In: Copy, Out, T: MaybeResolve<In, Out>> MaybeResolve<Size<In>, Size<Out>> for Size<T> {
    fn maybe_resolve(&self, reference: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_resolve(reference.width), height: self.height.maybe_resolve(reference.height) }
    }
}

/// Resolve a `LengthPercentage` against an `Option<f32>` reference, always producing a definite
/// `f32` by treating an undefined reference as `0.0`. Used for padding/border/gap, which per
/// spec invariant 5 always resolve against the *width* of the containing block regardless of
/// axis — i.e. the reference is rarely actually undefined, but this guards the edge case
/// gracefully rather than propagating `None` into a context that needs a definite number.
pub trait ResolveOrZero<In> {
    /// Resolve against `reference`, falling back to `0.0` when undefined
    fn resolve_or_zero(&self, reference: In) -> f32;
}

impl ResolveOrZero<Option<f32>> for LengthPercentage {
    fn resolve_or_zero(&self, reference: Option<f32>) -> f32 {
        self.maybe_resolve(reference).unwrap_or(0.0)
    }
}

impl ResolveOrZero<Option<f32>> for LengthPercentageAuto {
    fn resolve_or_zero(&self, reference: Option<f32>) -> f32 {
        self.maybe_resolve(reference).unwrap_or(0.0)
    }
}

impl<T: ResolveOrZero<Option<f32>>> Rect<T> {
    /// Resolve all four edges against the given (possibly per-axis) reference, producing a
    /// `Rect<f32>`. `horizontal_reference` is used for left/right, `vertical_reference` for
    /// top/bottom, matching spec invariant 5 ("percentages ... resolve ... width for margin and
    /// padding regardless of axis").
    pub fn resolve_or_zero(&self, horizontal_reference: Option<f32>) -> Rect<f32> {
        Rect {
            left: self.left.resolve_or_zero(horizontal_reference),
            right: self.right.resolve_or_zero(horizontal_reference),
            top: self.top.resolve_or_zero(horizontal_reference),
            bottom: self.bottom.resolve_or_zero(horizontal_reference),
        }
    }
}

/// Arithmetic over `Option<f32>` that propagates `None` ("Undefined") the way spec §4.1 requires:
/// comparisons against `Undefined` are always `false`, and arithmetic involving `Undefined`
/// yields `Undefined` rather than panicking or silently treating it as zero.
pub trait MaybeMath<In, Out> {
    /// `self + other`, `None` if either side is `None`
    fn maybe_add(self, other: In) -> Out;
    /// `self - other`, `None` if either side is `None`
    fn maybe_sub(self, other: In) -> Out;
    /// `self.min(other)`, `None` if `self` is `None`; ignores a `None` `other`
    fn maybe_min(self, other: In) -> Out;
    /// `self.max(other)`, `None` if `self` is `None`; ignores a `None` `other`
    fn maybe_max(self, other: In) -> Out;
    /// Clamp `self` between optional `min`/`max`, ignoring bounds that are `None`. Spec invariant
    /// 7: "a contradictory clamp, min wins" — enforced by clamping with `max` first, then `min`.
    fn maybe_clamp(self, min: In, max: In) -> Out;
}

impl MaybeMath<Option<f32>, Option<f32>> for Option<f32> {
    fn maybe_add(self, other: Option<f32>) -> Option<f32> {
        match (self, other) {
            (Some(a), Some(b)) => Some(a + b),
            _ => None,
        }
    }

    fn maybe_sub(self, other: Option<f32>) -> Option<f32> {
        match (self, other) {
            (Some(a), Some(b)) => Some(a - b),
            _ => None,
        }
    }

    fn maybe_min(self, other: Option<f32>) -> Option<f32> {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.min(b)),
            _ => self,
        }
    }

    fn maybe_max(self, other: Option<f32>) -> Option<f32> {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => self,
        }
    }

    fn maybe_clamp(self, min: Option<f32>, max: Option<f32>) -> Option<f32> {
        let mut value = self;
        if let (Some(v), Some(max)) = (value, max) {
            value = Some(v.min(max));
        }
        if let (Some(v), Some(min)) = (value, min) {
            value = Some(v.max(min));
        }
        value
    }
}

/// The `f32`-valued counterpart of [`MaybeMath`], for when `self` is known definite but the
/// other operand may not be.
impl MaybeMath<Option<f32>, f32> for f32 {
    fn maybe_add(self, other: Option<f32>) -> f32 {
        self + other.unwrap_or(0.0)
    }

    fn maybe_sub(self, other: Option<f32>) -> f32 {
        self - other.unwrap_or(0.0)
    }

    fn maybe_min(self, other: Option<f32>) -> f32 {
        match other {
            Some(other) => self.min(other),
            None => self,
        }
    }

    fn maybe_max(self, other: Option<f32>) -> f32 {
        match other {
            Some(other) => self.max(other),
            None => self,
        }
    }

    fn maybe_clamp(self, min: Option<f32>, max: Option<f32>) -> f32 {
        let mut value = self;
        if let Some(max) = max {
            value = value.min(max);
        }
        if let Some(min) = min {
            value = value.max(min);
        }
        value
    }
}

impl<In: Copy, Out, T: MaybeMath<In, Out> + Copy> MaybeMath<Size<In>, Size<Out>> for Size<T> {
    fn maybe_add(self, other: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_add(other.width), height: self.height.maybe_add(other.height) }
    }
    fn maybe_sub(self, other: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_sub(other.width), height: self.height.maybe_sub(other.height) }
    }
    fn maybe_min(self, other: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_min(other.width), height: self.height.maybe_min(other.height) }
    }
    fn maybe_max(self, other: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_max(other.width), height: self.height.maybe_max(other.height) }
    }
    fn maybe_clamp(self, min: Size<In>, max: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_clamp(min.width, max.width), height: self.height.maybe_clamp(min.height, max.height) }
    }
}
