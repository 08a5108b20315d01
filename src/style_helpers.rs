//! Short constructor helpers for style values, so call sites read `length(10.)` / `percent(50.)` /
//! `auto()` instead of spelling out the enum variant every time.

use crate::style::{AvailableSpace, Dimension, LengthPercentage, LengthPercentageAuto};

/// A value that has a zero variant (e.g. `LengthPercentage::Length(0.0)`)
pub trait FlexureZero {
    /// The zero value for this type
    const ZERO: Self;
}

/// A value that has an auto variant
pub trait FlexureAuto {
    /// The auto value for this type
    const AUTO: Self;
}

/// A value that can be constructed from an absolute length
pub trait FromLength {
    /// Construct a value from an absolute length
    fn from_length<Input: Into<f32> + Copy>(value: Input) -> Self;
}

/// A value that can be constructed from a percentage
pub trait FromPercent {
    /// Construct a value from a percentage expressed as a fraction in `0.0..=1.0`
    fn from_percent<Input: Into<f32> + Copy>(percent: Input) -> Self;
}

/// Construct an absolute length value
pub fn length<T: FromLength, Input: Into<f32> + Copy>(value: Input) -> T {
    T::from_length(value)
}

/// Construct a percentage value. `percent(0.5)` means 50% of the containing block.
pub fn percent<T: FromPercent, Input: Into<f32> + Copy>(value: Input) -> T {
    T::from_percent(value)
}

/// Construct the zero value for a type
pub fn zero<T: FlexureZero>() -> T {
    T::ZERO
}

/// Construct the auto value for a type
pub fn auto<T: FlexureAuto>() -> T {
    T::AUTO
}

impl FlexureZero for LengthPercentage {
    const ZERO: Self = LengthPercentage::Length(0.0);
}
impl FromLength for LengthPercentage {
    fn from_length<Input: Into<f32> + Copy>(value: Input) -> Self {
        LengthPercentage::Length(value.into())
    }
}
impl FromPercent for LengthPercentage {
    fn from_percent<Input: Into<f32> + Copy>(value: Input) -> Self {
        LengthPercentage::Percent(value.into())
    }
}

impl FlexureZero for LengthPercentageAuto {
    const ZERO: Self = LengthPercentageAuto::Length(0.0);
}
impl FlexureAuto for LengthPercentageAuto {
    const AUTO: Self = LengthPercentageAuto::Auto;
}
impl FromLength for LengthPercentageAuto {
    fn from_length<Input: Into<f32> + Copy>(value: Input) -> Self {
        LengthPercentageAuto::Length(value.into())
    }
}
impl FromPercent for LengthPercentageAuto {
    fn from_percent<Input: Into<f32> + Copy>(value: Input) -> Self {
        LengthPercentageAuto::Percent(value.into())
    }
}

impl FlexureZero for Dimension {
    const ZERO: Self = Dimension::Length(0.0);
}
impl FlexureAuto for Dimension {
    const AUTO: Self = Dimension::Auto;
}
impl FromLength for Dimension {
    fn from_length<Input: Into<f32> + Copy>(value: Input) -> Self {
        Dimension::Length(value.into())
    }
}
impl FromPercent for Dimension {
    fn from_percent<Input: Into<f32> + Copy>(value: Input) -> Self {
        Dimension::Percent(value.into())
    }
}

/// Construct `AvailableSpace::Definite`
pub fn definite(value: f32) -> AvailableSpace {
    AvailableSpace::Definite(value)
}

/// A value that can stand in for "as much space as the content wants" (used as a convenience for
/// the root call: `calculate_layout(root, Size::MAX_CONTENT)`)
pub trait FlexureMaxContent {
    /// The max-content sentinel
    const MAX_CONTENT: Self;
}

/// A value that can stand in for "as little space as the content can take"
pub trait FlexureMinContent {
    /// The min-content sentinel
    const MIN_CONTENT: Self;
}

impl FlexureMaxContent for AvailableSpace {
    const MAX_CONTENT: Self = AvailableSpace::MaxContent;
}
impl FlexureMinContent for AvailableSpace {
    const MIN_CONTENT: Self = AvailableSpace::MinContent;
}

impl FlexureMaxContent for crate::geometry::Size<AvailableSpace> {
    const MAX_CONTENT: Self =
        crate::geometry::Size { width: AvailableSpace::MaxContent, height: AvailableSpace::MaxContent };
}
impl FlexureMinContent for crate::geometry::Size<AvailableSpace> {
    const MIN_CONTENT: Self =
        crate::geometry::Size { width: AvailableSpace::MinContent, height: AvailableSpace::MinContent };
}
