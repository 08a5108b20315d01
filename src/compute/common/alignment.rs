//! Shared "distribute this much free space across these this many gaps" arithmetic, used by both
//! `justify-content` (main axis, within a line) and `align-content` (cross axis, across lines).
//! Keeping one implementation means the `space-between`/`space-around`/`space-evenly` math is
//! written and reasoned about exactly once.

use crate::style::{AlignContent, JustifyContent};

/// The alignment keywords both `justify-content` and `align-content` (minus `align-content`'s
/// `Stretch`, which changes *sizes* rather than *offsets* and is handled before this function is
/// reached) have in common.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum ContentDistribution {
    /// Pack toward the start edge
    Start,
    /// Pack toward the end edge
    End,
    /// Center within the free space
    Center,
    /// Equal space *between* items only
    SpaceBetween,
    /// Equal space around each item (half-size at the two ends)
    SpaceAround,
    /// Equal space everywhere, including the two ends
    SpaceEvenly,
}

impl From<JustifyContent> for ContentDistribution {
    fn from(value: JustifyContent) -> Self {
        match value {
            JustifyContent::FlexStart => ContentDistribution::Start,
            JustifyContent::FlexEnd => ContentDistribution::End,
            JustifyContent::Center => ContentDistribution::Center,
            JustifyContent::SpaceBetween => ContentDistribution::SpaceBetween,
            JustifyContent::SpaceAround => ContentDistribution::SpaceAround,
            JustifyContent::SpaceEvenly => ContentDistribution::SpaceEvenly,
        }
    }
}

/// `None` for `Stretch`, which the caller handles separately by growing lines rather than
/// shifting them.
impl From<AlignContent> for Option<ContentDistribution> {
    fn from(value: AlignContent) -> Self {
        match value {
            AlignContent::FlexStart => Some(ContentDistribution::Start),
            AlignContent::FlexEnd => Some(ContentDistribution::End),
            AlignContent::Center => Some(ContentDistribution::Center),
            AlignContent::Stretch => None,
            AlignContent::SpaceBetween => Some(ContentDistribution::SpaceBetween),
            AlignContent::SpaceAround => Some(ContentDistribution::SpaceAround),
            AlignContent::SpaceEvenly => Some(ContentDistribution::SpaceEvenly),
        }
    }
}

/// The offset to place before the first item, and the extra gap to add between each subsequent
/// pair of items, in order to realize a [`ContentDistribution`] over `free_space` distributed
/// across `num_items` items (already separated by `base_gap`).
#[derive(Copy, Clone, Debug)]
pub(crate) struct AlignmentOffsets {
    /// Offset from the container's start edge to the first item
    pub leading: f32,
    /// Total space between one item's trailing edge and the next item's leading edge
    pub between: f32,
}

/// Compute offsets for the given distribution. `free_space` may be negative (overflow); every
/// branch below propagates a negative value into `leading`/`between` rather than clamping it,
/// matching spec §8 property 1's explicit allowance for overflow to produce negative offsets.
pub(crate) fn compute_alignment_offset(
    free_space: f32,
    num_items: usize,
    base_gap: f32,
    distribution: ContentDistribution,
) -> AlignmentOffsets {
    if num_items == 0 {
        return AlignmentOffsets { leading: 0.0, between: base_gap };
    }

    match distribution {
        ContentDistribution::Start => AlignmentOffsets { leading: 0.0, between: base_gap },
        ContentDistribution::End => AlignmentOffsets { leading: free_space, between: base_gap },
        ContentDistribution::Center => AlignmentOffsets { leading: free_space / 2.0, between: base_gap },
        ContentDistribution::SpaceBetween => {
            if num_items <= 1 {
                AlignmentOffsets { leading: 0.0, between: base_gap }
            } else {
                AlignmentOffsets { leading: 0.0, between: base_gap + free_space / (num_items - 1) as f32 }
            }
        }
        ContentDistribution::SpaceAround => {
            let per_item = free_space / num_items as f32;
            AlignmentOffsets { leading: per_item / 2.0, between: base_gap + per_item }
        }
        ContentDistribution::SpaceEvenly => {
            let per_gap = free_space / (num_items + 1) as f32;
            AlignmentOffsets { leading: per_gap, between: base_gap + per_gap }
        }
    }
}
