//! Length values: the value model described in spec §4.1.
//!
//! `NaN` is never allowed to persist in a `LengthPercentage*`/`Dimension` — every setter that
//! accepts a raw `f32` treats `NaN` as "clear this value" (spec §9, "NaN-as-sentinel") by mapping
//! it to `Auto`/`Undefined` before it ever reaches these enums. The enums themselves therefore
//! never need to special-case `NaN` in their own arithmetic.

/// A length that is either an absolute value or a percentage of some reference length.
/// Used for properties (like `width`/`height`/`padding`/`border`/`gap`) that cannot be `auto`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum LengthPercentage {
    /// An absolute length in the consumer's chosen unit (pixels, points, ...)
    Length(f32),
    /// A percentage of the containing block's size along the relevant axis (spec invariant 5)
    Percent(f32),
}

impl Default for LengthPercentage {
    fn default() -> Self {
        LengthPercentage::Length(0.0)
    }
}

impl LengthPercentage {
    /// Resolve this value against a reference length. Percentages always resolve against an
    /// absolute reference; there is no "undefined reference" case for this type (use
    /// [`LengthPercentageAuto`] or [`Dimension`] where the reference may be missing).
    #[inline]
    pub fn resolve(&self, reference: f32) -> f32 {
        match *self {
            LengthPercentage::Length(v) => v,
            LengthPercentage::Percent(p) => p * reference,
        }
    }
}

/// A length that is an absolute value, a percentage, or `auto`. Used for margins (spec invariant
/// 6) and for absolute-position insets.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum LengthPercentageAuto {
    /// An absolute length
    Length(f32),
    /// A percentage of the containing block's size along the relevant axis
    Percent(f32),
    /// The engine should compute this value (meaning varies by property, see call sites)
    Auto,
}

impl Default for LengthPercentageAuto {
    fn default() -> Self {
        LengthPercentageAuto::Auto
    }
}

impl From<LengthPercentage> for LengthPercentageAuto {
    fn from(value: LengthPercentage) -> Self {
        match value {
            LengthPercentage::Length(v) => LengthPercentageAuto::Length(v),
            LengthPercentage::Percent(p) => LengthPercentageAuto::Percent(p),
        }
    }
}

impl LengthPercentageAuto {
    /// `Some(resolved)` for `Length`/`Percent`, `None` for `Auto`.
    #[inline]
    pub fn resolve_to_option(&self, reference: f32) -> Option<f32> {
        match *self {
            LengthPercentageAuto::Length(v) => Some(v),
            LengthPercentageAuto::Percent(p) => Some(p * reference),
            LengthPercentageAuto::Auto => None,
        }
    }

    /// True if this value is `Auto`
    #[inline]
    pub fn is_auto(&self) -> bool {
        matches!(self, LengthPercentageAuto::Auto)
    }
}

/// A length that is an absolute value, a percentage, or `auto`. Used for `width`/`height` and
/// their min/max counterparts, and for `flex-basis`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Dimension {
    /// An absolute length
    Length(f32),
    /// A percentage of the containing block's size along the relevant axis
    Percent(f32),
    /// The dimension is not constrained by this property; fall through to content size
    Auto,
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Auto
    }
}

impl From<LengthPercentage> for Dimension {
    fn from(value: LengthPercentage) -> Self {
        match value {
            LengthPercentage::Length(v) => Dimension::Length(v),
            LengthPercentage::Percent(p) => Dimension::Percent(p),
        }
    }
}

impl From<LengthPercentageAuto> for Dimension {
    fn from(value: LengthPercentageAuto) -> Self {
        match value {
            LengthPercentageAuto::Length(v) => Dimension::Length(v),
            LengthPercentageAuto::Percent(p) => Dimension::Percent(p),
            LengthPercentageAuto::Auto => Dimension::Auto,
        }
    }
}

impl Dimension {
    /// `Some(resolved)` for `Length`/`Percent` when a reference is available, `None` for `Auto`
    /// or when the reference itself is undefined (percentage against an indefinite containing
    /// block resolves to `Undefined`, spec §4.1).
    #[inline]
    pub fn resolve_to_option(&self, reference: Option<f32>) -> Option<f32> {
        match (*self, reference) {
            (Dimension::Length(v), _) => Some(v),
            (Dimension::Percent(p), Some(reference)) => Some(p * reference),
            (Dimension::Percent(_), None) => None,
            (Dimension::Auto, _) => None,
        }
    }

    /// True if this value is `Auto`
    #[inline]
    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }
}

/// Describes how much space a node is allowed to take up, or that it should measure its content.
/// Spec §4.4: the `mode` half of every cache key.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum AvailableSpace {
    /// The amount of space available is exactly this value; the node should fit within it
    Definite(f32),
    /// The amount of space available is at most the content's min-content size
    MinContent,
    /// The amount of space available is at most the content's max-content size (i.e. unbounded)
    MaxContent,
}

impl Default for AvailableSpace {
    fn default() -> Self {
        AvailableSpace::MaxContent
    }
}

impl AvailableSpace {
    /// The definite value, if this is `Definite`
    #[inline]
    pub fn into_option(self) -> Option<f32> {
        match self {
            AvailableSpace::Definite(v) => Some(v),
            _ => None,
        }
    }

    /// Build an `AvailableSpace` from an optional definite length, defaulting to `MaxContent`
    /// when absent.
    pub fn from_option(value: Option<f32>) -> Self {
        match value {
            Some(v) => AvailableSpace::Definite(v),
            None => AvailableSpace::MaxContent,
        }
    }

    /// `true` if this is `AvailableSpace::Definite`
    pub fn is_definite(&self) -> bool {
        matches!(self, AvailableSpace::Definite(_))
    }

    /// Returns `self` if definite, else falls back to computing from `f`
    pub fn maybe_set(self, value: Option<f32>) -> Self {
        match value {
            Some(v) => AvailableSpace::Definite(v),
            None => self,
        }
    }
}

impl crate::geometry::Size<AvailableSpace> {
    /// Converts to a `Size<Option<f32>>`, losing the `MinContent`/`MaxContent` distinction
    pub fn into_options(self) -> crate::geometry::Size<Option<f32>> {
        crate::geometry::Size { width: self.width.into_option(), height: self.height.into_option() }
    }
}
