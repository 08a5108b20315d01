//! The per-node style bag (spec §3 "Style", §4.2 "Style store").
//!
//! A `Style` is plain data — setting a field does not, by itself, mark anything dirty; the tree
//! layer (`crate::tree::FlexureTree`) does that when a setter is called through its API. This
//! separation mirrors the reference crate's `Style` vs `TaffyTree` split: the style type has no
//! idea it lives in a tree at all.

mod alignment;
mod core;
mod dimension;
mod flex;

pub use alignment::{AlignContent, AlignItems, AlignSelf, JustifyContent};
pub use core::{Direction, Display, Edge, Gutter, Overflow, Position};
pub use dimension::{AvailableSpace, Dimension, LengthPercentage, LengthPercentageAuto};
pub use flex::{FlexDirection, FlexWrap};

use crate::geometry::{AbsoluteAxis, Rect, Size};

/// The full set of style properties a node may carry (spec §3 "Style").
///
/// Edge-indexed properties (`margin`, `padding`, `border`, `inset`) are stored as a small
/// "maybe-set" table rather than a plain `Rect` so that the §4.2 resolution order (explicit
/// physical edge, then logical edge, then `all`, then default) can be implemented without forcing
/// every caller to pre-resolve it. See [`EdgeRect`].
#[derive(Clone, Debug)]
pub struct Style {
    /// `display`
    pub display: Display,
    /// `direction` (writing direction, used to resolve logical edges)
    pub direction: Direction,

    /// `flex-direction`
    pub flex_direction: FlexDirection,
    /// `flex-wrap`
    pub flex_wrap: FlexWrap,

    /// `position` (static/relative vs absolute)
    pub position: Position,
    /// `overflow`, tracked per physical axis (x = horizontal overflow, y = vertical overflow)
    pub overflow: Size<Overflow>,

    /// `flex-grow`
    pub flex_grow: f32,
    /// `flex-shrink`
    pub flex_shrink: f32,
    /// `flex-basis`
    pub flex_basis: Dimension,

    /// `justify-content`
    pub justify_content: Option<JustifyContent>,
    /// `align-items`
    pub align_items: Option<AlignItems>,
    /// `align-self`
    pub align_self: AlignSelf,
    /// `align-content`
    pub align_content: Option<AlignContent>,

    /// `width`/`height`
    pub size: Size<Dimension>,
    /// `min-width`/`min-height`
    pub min_size: Size<Dimension>,
    /// `max-width`/`max-height`
    pub max_size: Size<Dimension>,

    /// `margin` (logical/physical edges, `auto` allowed)
    margin: EdgeRect<LengthPercentageAuto>,
    /// `padding` (logical/physical edges, `auto` not allowed)
    padding: EdgeRect<LengthPercentage>,
    /// `border` (logical/physical edges, `auto` not allowed; `NaN` sets are ignored, spec §4.2)
    border: EdgeRect<LengthPercentage>,
    /// `inset`/`position` offsets for absolutely positioned nodes (`auto` allowed)
    inset: EdgeRect<LengthPercentageAuto>,

    /// `row-gap`/`column-gap`
    gap: GapSize<LengthPercentage>,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            display: Display::default(),
            direction: Direction::default(),
            flex_direction: FlexDirection::default(),
            flex_wrap: FlexWrap::default(),
            position: Position::default(),
            overflow: Size::splat(Overflow::default()),
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Dimension::Auto,
            justify_content: None,
            align_items: None,
            align_self: AlignSelf::default(),
            align_content: None,
            size: Size::splat(Dimension::Auto),
            min_size: Size::splat(Dimension::Auto),
            max_size: Size::splat(Dimension::Auto),
            margin: EdgeRect::default(),
            padding: EdgeRect::default(),
            border: EdgeRect::default(),
            inset: EdgeRect::default(),
            gap: GapSize::default(),
        }
    }
}

/// Which physical side is being resolved, for the purposes of §4.2's resolution order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum PhysicalSide {
    Left,
    Top,
    Right,
    Bottom,
}

impl PhysicalSide {
    /// The logical edge (start/end) that applies to this physical side under the given
    /// direction, restricted to edges along the writing/inline axis (left/right). Physical
    /// top/bottom never receive a logical override in this model, matching the reference crate
    /// and CSS itself (logical `start`/`end` here model *inline-start*/*inline-end*, not
    /// block-start/block-end).
    fn logical_source(self, direction: ResolvedDirection) -> Option<LogicalEdge> {
        match (self, direction) {
            (PhysicalSide::Left, ResolvedDirection::Ltr) => Some(LogicalEdge::Start),
            (PhysicalSide::Right, ResolvedDirection::Ltr) => Some(LogicalEdge::End),
            (PhysicalSide::Left, ResolvedDirection::Rtl) => Some(LogicalEdge::End),
            (PhysicalSide::Right, ResolvedDirection::Rtl) => Some(LogicalEdge::Start),
            (PhysicalSide::Top, _) | (PhysicalSide::Bottom, _) => None,
        }
    }
}

/// A direction with `Inherit` already resolved away.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ResolvedDirection {
    /// Left-to-right
    Ltr,
    /// Right-to-left
    Rtl,
}

impl ResolvedDirection {
    /// Resolve a node's own `direction` style against its parent's already-resolved direction.
    pub fn resolve(style_direction: Direction, parent: ResolvedDirection) -> ResolvedDirection {
        match style_direction {
            Direction::Inherit => parent,
            Direction::Ltr => ResolvedDirection::Ltr,
            Direction::Rtl => ResolvedDirection::Rtl,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum LogicalEdge {
    Start,
    End,
}

/// Storage for an edge-indexed style property, keeping the four physical values, the two logical
/// values, and the catch-all `all` value distinct so resolution order can be applied lazily at
/// read time (spec §4.2).
#[derive(Clone, Debug)]
struct EdgeRect<T> {
    left: Option<T>,
    right: Option<T>,
    top: Option<T>,
    bottom: Option<T>,
    start: Option<T>,
    end: Option<T>,
    all: Option<T>,
}

impl<T> Default for EdgeRect<T> {
    fn default() -> Self {
        EdgeRect { left: None, right: None, top: None, bottom: None, start: None, end: None, all: None }
    }
}

impl<T: Copy> EdgeRect<T> {
    fn get(&self, edge: Edge) -> Option<T> {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Start => self.start,
            Edge::End => self.end,
            Edge::All => self.all,
        }
    }

    fn set(&mut self, edge: Edge, value: Option<T>) {
        match edge {
            Edge::Left => self.left = value,
            Edge::Right => self.right = value,
            Edge::Top => self.top = value,
            Edge::Bottom => self.bottom = value,
            Edge::Start => self.start = value,
            Edge::End => self.end = value,
            Edge::All => self.all = value,
        }
    }

    /// Resolve a physical side following spec §4.2's order: explicit physical, then logical
    /// (if it applies to this side under `direction`), then `all`, then `default`.
    fn resolve_physical(&self, side: PhysicalSide, direction: ResolvedDirection, default: T) -> T {
        if let Some(v) = self.get(match side {
            PhysicalSide::Left => Edge::Left,
            PhysicalSide::Top => Edge::Top,
            PhysicalSide::Right => Edge::Right,
            PhysicalSide::Bottom => Edge::Bottom,
        }) {
            return v;
        }
        if let Some(logical) = side.logical_source(direction) {
            let v = match logical {
                LogicalEdge::Start => self.start,
                LogicalEdge::End => self.end,
            };
            if let Some(v) = v {
                return v;
            }
        }
        self.all.unwrap_or(default)
    }

    fn to_rect(&self, direction: ResolvedDirection, default: T) -> Rect<T> {
        Rect {
            left: self.resolve_physical(PhysicalSide::Left, direction, default),
            right: self.resolve_physical(PhysicalSide::Right, direction, default),
            top: self.resolve_physical(PhysicalSide::Top, direction, default),
            bottom: self.resolve_physical(PhysicalSide::Bottom, direction, default),
        }
    }
}

/// Storage for `row-gap`/`column-gap`, with the same `all`-as-fallback behavior as `EdgeRect`.
#[derive(Clone, Debug)]
struct GapSize<T> {
    row: Option<T>,
    column: Option<T>,
    all: Option<T>,
}

impl<T> Default for GapSize<T> {
    fn default() -> Self {
        GapSize { row: None, column: None, all: None }
    }
}

impl<T: Copy> GapSize<T> {
    fn get(&self, gutter: Gutter) -> Option<T> {
        match gutter {
            Gutter::Row => self.row,
            Gutter::Column => self.column,
            Gutter::All => self.all,
        }
    }

    fn set(&mut self, gutter: Gutter, value: Option<T>) {
        match gutter {
            Gutter::Row => self.row = value,
            Gutter::Column => self.column = value,
            Gutter::All => self.all = value,
        }
    }

    fn resolved(&self, default: T) -> Size<T> {
        Size {
            width: self.column.or(self.all).unwrap_or(default),
            height: self.row.or(self.all).unwrap_or(default),
        }
    }
}

impl Style {
    /// Resolve `margin` to a physical `Rect`, honoring the node's own `direction`.
    pub fn margin(&self, direction: ResolvedDirection) -> Rect<LengthPercentageAuto> {
        self.margin.to_rect(direction, LengthPercentageAuto::Length(0.0))
    }

    /// Resolve `padding` to a physical `Rect`.
    pub fn padding(&self, direction: ResolvedDirection) -> Rect<LengthPercentage> {
        self.padding.to_rect(direction, LengthPercentage::Length(0.0))
    }

    /// Resolve `border` to a physical `Rect`. `NaN` border sets are dropped at the setter (see
    /// [`Style::set_border`]), so every stored value here is already well-formed.
    pub fn border(&self, direction: ResolvedDirection) -> Rect<LengthPercentage> {
        self.border.to_rect(direction, LengthPercentage::Length(0.0))
    }

    /// Resolve absolute-position `inset` to a physical `Rect`. Unset edges resolve to
    /// `LengthPercentageAuto::Auto`, which the absolute-placement algorithm treats as "no
    /// constraint on this edge" (spec §4.1: position defaults to Undefined).
    pub fn inset(&self, direction: ResolvedDirection) -> Rect<LengthPercentageAuto> {
        self.inset.to_rect(direction, LengthPercentageAuto::Auto)
    }

    /// Resolve `row-gap`/`column-gap` to a `Size` (width = column gap, height = row gap).
    pub fn gap(&self) -> Size<LengthPercentage> {
        self.gap.resolved(LengthPercentage::Length(0.0))
    }

    /// Set a single margin edge. Passing `NaN` inside a `Length`/`Percent` variant is not
    /// possible at the type level for setters that go through [`crate::tree::FlexureTree`] (they
    /// sanitize first); this method assumes an already-sanitized value.
    pub fn set_margin(&mut self, edge: Edge, value: LengthPercentageAuto) {
        self.margin.set(edge, Some(value));
    }

    /// Set a single padding edge.
    pub fn set_padding(&mut self, edge: Edge, value: LengthPercentage) {
        self.padding.set(edge, Some(value));
    }

    /// Set a single border edge. A `NaN` input never reaches this method: `FlexureTree::set_border`
    /// intercepts it first and leaves the edge untouched, matching the fixture-observed behavior
    /// that `setBorder(EDGE_ALL, NaN)` is a no-op (spec §4.2).
    pub fn set_border(&mut self, edge: Edge, value: LengthPercentage) {
        self.border.set(edge, Some(value));
    }

    /// Set a single inset edge. `NaN` is sanitized to `Auto` ("clear this inset", spec §9) by the
    /// tree-layer setter before reaching here.
    pub fn set_inset(&mut self, edge: Edge, value: LengthPercentageAuto) {
        self.inset.set(edge, Some(value));
    }

    /// Set a single gap gutter.
    pub fn set_gap(&mut self, gutter: Gutter, value: LengthPercentage) {
        self.gap.set(gutter, Some(value));
    }
}

impl Size<Dimension> {
    /// Resolve both components against a (possibly undefined) containing-block size.
    pub fn maybe_resolve(&self, reference: Size<Option<f32>>) -> Size<Option<f32>> {
        Size { width: self.width.resolve_to_option(reference.width), height: self.height.resolve_to_option(reference.height) }
    }
}

/// Which physical axis a [`Style`] field should be read along, given a flex direction. Used
/// pervasively by the compute layer to go from "main size" to "width or height" and back.
pub(crate) fn axis_for(direction: FlexDirection, is_main: bool) -> AbsoluteAxis {
    let main = direction.main_axis();
    if is_main {
        main
    } else {
        main.other()
    }
}
