//! `justify-content`, `align-items`, `align-self`, `align-content`.

/// How children are distributed along the main axis of their container.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum JustifyContent {
    /// Pack children toward the main-start edge
    #[default]
    FlexStart,
    /// Pack children toward the main-end edge
    FlexEnd,
    /// Center children along the main axis
    Center,
    /// First child flush to main-start, last flush to main-end, remaining space distributed
    /// evenly *between* children
    SpaceBetween,
    /// Remaining space distributed evenly around each child (half-size gaps at the two ends)
    SpaceAround,
    /// Remaining space distributed evenly between and around children (equal-size gaps
    /// everywhere, including the two ends)
    SpaceEvenly,
}

/// How a single line's children are aligned on the cross axis, and the fallback for `align-self`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum AlignItems {
    /// Align children's cross-start edges with the line's cross-start edge
    #[default]
    FlexStart,
    /// Align children's cross-end edges with the line's cross-end edge
    FlexEnd,
    /// Center children on the cross axis
    Center,
    /// Align children's baselines
    Baseline,
    /// Grow children with an `auto` cross size to fill the line's cross extent
    Stretch,
}

/// Per-item override of the container's `align-items`. `Auto` defers to the parent's
/// `align-items` (spec §4.8: "falling back to `align-items`, falling back to `stretch`" — the
/// final fallback is encoded by `AlignItems::default()` being `Stretch`-adjacent via resolution,
/// see [`AlignSelf::resolve`]).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum AlignSelf {
    /// Defer to the parent container's `align-items`
    #[default]
    Auto,
    /// Align cross-start edge with the line's cross-start edge
    FlexStart,
    /// Align cross-end edge with the line's cross-end edge
    FlexEnd,
    /// Center on the cross axis
    Center,
    /// Align baseline
    Baseline,
    /// Grow to fill the line's cross extent if the item's cross size is `auto`
    Stretch,
}

impl AlignSelf {
    /// Resolve `Auto` against the parent's `align-items`; otherwise use the explicit override.
    pub fn resolve(self, parent_align_items: AlignItems) -> AlignItems {
        match self {
            AlignSelf::Auto => parent_align_items,
            AlignSelf::FlexStart => AlignItems::FlexStart,
            AlignSelf::FlexEnd => AlignItems::FlexEnd,
            AlignSelf::Center => AlignItems::Center,
            AlignSelf::Baseline => AlignItems::Baseline,
            AlignSelf::Stretch => AlignItems::Stretch,
        }
    }
}

/// How multiple lines are distributed along the cross axis of the container.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum AlignContent {
    /// Pack lines toward the cross-start edge
    #[default]
    FlexStart,
    /// Pack lines toward the cross-end edge
    FlexEnd,
    /// Center lines on the cross axis
    Center,
    /// Grow lines to fill the container's cross extent
    Stretch,
    /// First line flush to cross-start, last flush to cross-end, remaining space between lines
    SpaceBetween,
    /// Remaining space distributed evenly around each line
    SpaceAround,
    /// Remaining space distributed evenly between and around lines
    SpaceEvenly,
}
