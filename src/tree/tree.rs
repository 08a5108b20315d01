//! [`FlexureTree`]: the built-in arena-backed node tree and the public setter/getter surface
//! (spec §6 "External Interfaces").

use slotmap::{DefaultKey, SlotMap, SparseSecondaryMap};

use crate::error::{FlexureError, FlexureResult};
use crate::geometry::{Point, Size};
use crate::style::{
    AvailableSpace, Direction, Display, Edge, Gutter, LengthPercentage, LengthPercentageAuto, Overflow, Style,
};
use crate::tree::cache::Cache;
use crate::tree::layout::{Layout, RunMode, SizeAndBaselines, SizingMode};
use crate::tree::node_id::NodeId;
use crate::tree::traits::LayoutTree;
use crate::tree::ResolvedDirection;
use crate::util::sys::{ChildrenVec, Vec};

/// A function (or closure) that measures the intrinsic size of a leaf node, given the
/// constraints its parent has placed on it (spec §3: "Measure callback").
///
/// `Raw` avoids a heap allocation for the common case of a plain `fn` pointer (e.g. a
/// fixed-size placeholder); `Boxed` supports arbitrary closures, typically one that captures a
/// text-shaping context.
pub enum MeasureFunc {
    /// A non-capturing function pointer
    Raw(fn(Size<Option<f32>>, Size<AvailableSpace>) -> Size<f32>),
    /// An arbitrary closure
    Boxed(Box<dyn FnMut(Size<Option<f32>>, Size<AvailableSpace>) -> Size<f32>>),
}

impl MeasureFunc {
    fn call(&mut self, known_dimensions: Size<Option<f32>>, available_space: Size<AvailableSpace>) -> Size<f32> {
        match self {
            MeasureFunc::Raw(f) => f(known_dimensions, available_space),
            MeasureFunc::Boxed(f) => f(known_dimensions, available_space),
        }
    }
}

/// A function that computes a leaf's baseline offset from its top edge, given its final size
/// (spec §3: "Baseline callback").
pub enum BaselineFunc {
    /// A non-capturing function pointer
    Raw(fn(Size<f32>) -> f32),
    /// An arbitrary closure
    Boxed(Box<dyn FnMut(Size<f32>) -> f32>),
}

impl BaselineFunc {
    fn call(&mut self, size: Size<f32>) -> f32 {
        match self {
            BaselineFunc::Raw(f) => f(size),
            BaselineFunc::Boxed(f) => f(size),
        }
    }
}

/// Per-node storage that isn't the style itself.
pub(crate) struct NodeData {
    pub(crate) style: Style,
    pub(crate) cache: Cache,
    pub(crate) unrounded_layout: Layout,
    pub(crate) final_layout: Layout,
    pub(crate) needs_measure: bool,
    pub(crate) has_baseline_func: bool,
}

impl NodeData {
    fn new(style: Style) -> Self {
        NodeData {
            style,
            cache: Cache::new(),
            unrounded_layout: Layout::default(),
            final_layout: Layout::default(),
            needs_measure: false,
            has_baseline_func: false,
        }
    }
}

/// Global layout configuration (spec §6's `calculateLayout` has no configuration surface beyond
/// rounding; this flag is the one knob the reference crate exposes for it).
#[derive(Copy, Clone, Debug)]
pub struct LayoutConfig {
    /// Whether [`FlexureTree::compute_layout`] should run the pixel-grid rounding pass
    /// (spec §4.10) after computing the float layout. Defaults to `true`.
    pub use_rounding: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig { use_rounding: true }
    }
}

/// A tree of styled nodes that can be laid out with the flexbox algorithm.
///
/// This is the engine's built-in [`LayoutTree`] implementation: an arena (`slotmap`) of
/// [`NodeData`], with three parallel maps (nodes, children, parents) kept in lockstep so that the
/// same [`NodeId`] indexes all three (spec §3 "Tree": "Parent/child relations, ordered children,
/// owner pointer").
pub struct FlexureTree {
    nodes: SlotMap<DefaultKey, NodeData>,
    children: SlotMap<DefaultKey, ChildrenVec<NodeId>>,
    parents: SlotMap<DefaultKey, Option<NodeId>>,
    measure_funcs: SparseSecondaryMap<DefaultKey, MeasureFunc>,
    baseline_funcs: SparseSecondaryMap<DefaultKey, BaselineFunc>,
    /// Global layout configuration
    pub config: LayoutConfig,
}

impl Default for FlexureTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FlexureTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Create an empty tree with capacity pre-reserved for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        FlexureTree {
            nodes: SlotMap::with_capacity(capacity),
            children: SlotMap::with_capacity(capacity),
            parents: SlotMap::with_capacity(capacity),
            measure_funcs: SparseSecondaryMap::new(),
            baseline_funcs: SparseSecondaryMap::new(),
            config: LayoutConfig::default(),
        }
    }

    /// Create a new leaf node (no children) with the given style. The node has no measure
    /// function; it measures as zero-sized until one is set or children are added.
    pub fn new_leaf(&mut self, style: Style) -> NodeId {
        let key = self.nodes.insert(NodeData::new(style));
        let _ = self.children.insert(Vec::new());
        let _ = self.parents.insert(None);
        key.into()
    }

    /// Create a new leaf node with a measure function attached.
    pub fn new_leaf_with_measure(&mut self, style: Style, measure: MeasureFunc) -> NodeId {
        let id = self.new_leaf(style);
        let key: DefaultKey = id.into();
        self.nodes[key].needs_measure = true;
        self.measure_funcs.insert(key, measure);
        id
    }

    /// Create a new node with the given style and children, in the given order.
    pub fn new_with_children(&mut self, style: Style, children: &[NodeId]) -> NodeId {
        let key = self.nodes.insert(NodeData::new(style));
        let _ = self.children.insert(children.to_vec());
        let _ = self.parents.insert(None);
        let id = NodeId::from(key);
        for &child in children {
            self.set_parent(child, Some(id));
        }
        id
    }

    fn key(&self, node: NodeId) -> DefaultKey {
        node.into()
    }

    fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) {
        let key = self.key(node);
        if let Some(slot) = self.parents.get_mut(key) {
            *slot = parent;
        }
    }

    /// The node's current parent, if any.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(self.key(node)).copied().flatten()
    }

    /// Insert `child` into `parent`'s children at `index`. If `child` currently has a parent
    /// (spec §4.3 / invariant 2), it is first removed from that parent's child list, and both the
    /// old and new parent (and their ancestors) are marked dirty.
    pub fn insert_child(&mut self, parent: NodeId, child: NodeId, index: usize) -> FlexureResult<()> {
        if self.nodes[self.key(parent)].needs_measure {
            return Err(FlexureError::NodeHasMeasureFunc(parent));
        }
        if let Some(old_parent) = self.parent(child) {
            self.remove_child_at_found_index(old_parent, child);
        }
        let parent_key = self.key(parent);
        let children = self.children.get_mut(parent_key).ok_or(FlexureError::InvalidNodeId(parent))?;
        let index = index.min(children.len());
        children.insert(index, child);
        self.set_parent(child, Some(parent));
        self.mark_dirty(parent);
        Ok(())
    }

    /// Append `child` to the end of `parent`'s children.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> FlexureResult<()> {
        let count = self.child_count(parent);
        self.insert_child(parent, child, count)
    }

    fn remove_child_at_found_index(&mut self, parent: NodeId, child: NodeId) {
        let parent_key = self.key(parent);
        if let Some(children) = self.children.get_mut(parent_key) {
            if let Some(pos) = children.iter().position(|&c| c == child) {
                children.remove(pos);
            }
        }
        self.mark_dirty(parent);
    }

    /// Detach `child` from `parent`. No-op if `child` is not currently a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> FlexureResult<()> {
        if !self.nodes.contains_key(self.key(parent)) {
            return Err(FlexureError::InvalidNodeId(parent));
        }
        self.remove_child_at_found_index(parent, child);
        self.set_parent(child, None);
        Ok(())
    }

    /// Remove the node at `index` from `parent`'s children and return it.
    pub fn remove_child_at_index(&mut self, parent: NodeId, index: usize) -> FlexureResult<NodeId> {
        let parent_key = self.key(parent);
        let child = {
            let children = self.children.get_mut(parent_key).ok_or(FlexureError::InvalidNodeId(parent))?;
            if index >= children.len() {
                return Err(FlexureError::ChildIndexOutOfBounds { parent, index, child_count: children.len() });
            }
            children.remove(index)
        };
        self.set_parent(child, None);
        self.mark_dirty(parent);
        Ok(child)
    }

    /// The number of children `node` currently has.
    pub fn child_count(&self, node: NodeId) -> usize {
        self.children.get(self.key(node)).map(|c| c.len()).unwrap_or(0)
    }

    /// The `index`-th child of `node`.
    pub fn get_child(&self, node: NodeId, index: usize) -> FlexureResult<NodeId> {
        let children = self.children.get(self.key(node)).ok_or(FlexureError::InvalidNodeId(node))?;
        children.get(index).copied().ok_or(FlexureError::ChildIndexOutOfBounds {
            parent: node,
            index,
            child_count: children.len(),
        })
    }

    /// Destroy `node`. Its children are detached (their parent becomes `None`) but are not
    /// themselves destroyed, matching spec §3's lifecycle note: "Destruction releases the node
    /// only — children are not transitively destroyed."
    pub fn remove(&mut self, node: NodeId) -> FlexureResult<()> {
        let key = self.key(node);
        if !self.nodes.contains_key(key) {
            return Err(FlexureError::InvalidNodeId(node));
        }
        if let Some(parent) = self.parent(node) {
            self.remove_child_at_found_index(parent, node);
        }
        if let Some(children) = self.children.get(key).cloned() {
            for child in children {
                self.set_parent(child, None);
            }
        }
        self.nodes.remove(key);
        self.children.remove(key);
        self.parents.remove(key);
        self.measure_funcs.remove(key);
        self.baseline_funcs.remove(key);
        Ok(())
    }

    /// Mark `node` and every ancestor dirty: clear their measurement caches so the next layout
    /// recomputes them (spec invariant 3, spec §4.4 "Cache invalidation").
    pub fn mark_dirty(&mut self, node: NodeId) {
        let mut current = Some(node);
        while let Some(n) = current {
            let key = self.key(n);
            if let Some(data) = self.nodes.get_mut(key) {
                data.cache.clear();
            } else {
                break;
            }
            current = self.parent(n);
        }
    }

    /// Read-only access to a node's style.
    pub fn style(&self, node: NodeId) -> FlexureResult<&Style> {
        self.nodes.get(self.key(node)).map(|d| &d.style).ok_or(FlexureError::InvalidNodeId(node))
    }

    /// Replace a node's entire style in one call, marking it (and ancestors) dirty.
    pub fn set_style(&mut self, node: NodeId, style: Style) -> FlexureResult<()> {
        let key = self.key(node);
        let data = self.nodes.get_mut(key).ok_or(FlexureError::InvalidNodeId(node))?;
        data.style = style;
        self.mark_dirty(node);
        Ok(())
    }

    /// Mutate a node's style in place via `f`, then mark it (and ancestors) dirty. This is the
    /// primitive every `set_*` convenience method below is built from.
    pub fn with_style_mut(&mut self, node: NodeId, f: impl FnOnce(&mut Style)) -> FlexureResult<()> {
        let key = self.key(node);
        let data = self.nodes.get_mut(key).ok_or(FlexureError::InvalidNodeId(node))?;
        f(&mut data.style);
        self.mark_dirty(node);
        Ok(())
    }

    /// Attach (or replace) a measure function on `node`. Fails if `node` currently has children
    /// (spec invariant 1).
    pub fn set_measure(&mut self, node: NodeId, measure: Option<MeasureFunc>) -> FlexureResult<()> {
        let key = self.key(node);
        if !self.nodes.contains_key(key) {
            return Err(FlexureError::InvalidNodeId(node));
        }
        if measure.is_some() && self.child_count(node) > 0 {
            return Err(FlexureError::NodeHasMeasureFunc(node));
        }
        match measure {
            Some(f) => {
                self.nodes[key].needs_measure = true;
                self.measure_funcs.insert(key, f);
            }
            None => {
                self.nodes[key].needs_measure = false;
                self.measure_funcs.remove(key);
            }
        }
        self.mark_dirty(node);
        Ok(())
    }

    /// Attach (or replace) a baseline function on `node`.
    pub fn set_baseline_func(&mut self, node: NodeId, baseline: Option<BaselineFunc>) -> FlexureResult<()> {
        let key = self.key(node);
        if !self.nodes.contains_key(key) {
            return Err(FlexureError::InvalidNodeId(node));
        }
        match baseline {
            Some(f) => {
                self.nodes[key].has_baseline_func = true;
                self.baseline_funcs.insert(key, f);
            }
            None => {
                self.nodes[key].has_baseline_func = false;
                self.baseline_funcs.remove(key);
            }
        }
        self.mark_dirty(node);
        Ok(())
    }

    /// The node's final (rounded, if rounding is enabled) layout, after a `compute_layout` call.
    pub fn layout(&self, node: NodeId) -> FlexureResult<&Layout> {
        self.nodes.get(self.key(node)).map(|d| &d.final_layout).ok_or(FlexureError::InvalidNodeId(node))
    }

    /// `getComputedLeft`
    pub fn computed_left(&self, node: NodeId) -> FlexureResult<f32> {
        self.layout(node).map(|l| l.location.x)
    }
    /// `getComputedTop`
    pub fn computed_top(&self, node: NodeId) -> FlexureResult<f32> {
        self.layout(node).map(|l| l.location.y)
    }
    /// `getComputedWidth`
    pub fn computed_width(&self, node: NodeId) -> FlexureResult<f32> {
        self.layout(node).map(|l| l.size.width)
    }
    /// `getComputedHeight`
    pub fn computed_height(&self, node: NodeId) -> FlexureResult<f32> {
        self.layout(node).map(|l| l.size.height)
    }

    /// Run the layout algorithm for the whole subtree rooted at `node` (spec §4.11 "Driver").
    ///
    /// `available_width`/`available_height` may be `None` (spec: "Undefined permitted"); a `NaN`
    /// passed in by a caller that models "unset" as `NaN` should be converted to `None` before
    /// calling this (the sanitization spec §9 calls for happens at the FFI/setter boundary, not
    /// here, since this method takes `Option<f32>` rather than raw `f32`).
    pub fn compute_layout(
        &mut self,
        node: NodeId,
        available_width: Option<f32>,
        available_height: Option<f32>,
    ) -> FlexureResult<()> {
        if !self.nodes.contains_key(self.key(node)) {
            return Err(FlexureError::InvalidNodeId(node));
        }

        let available_space = Size {
            width: AvailableSpace::from_option(available_width),
            height: AvailableSpace::from_option(available_height),
        };

        let size_and_baselines = crate::compute::perform_node_layout(
            self,
            node,
            Size { width: None, height: None },
            available_space.into_options(),
            available_space,
            SizingMode::InherentSize,
        );

        *self.unrounded_layout_mut(node) = Layout { order: 0, size: size_and_baselines.size, ..Layout::default() };
        self.unrounded_layout_mut(node).location = Point::ZERO;

        if self.config.use_rounding {
            crate::compute::round_layout(self, node, 0.0, 0.0);
        } else {
            self.copy_unrounded_to_final(node);
        }

        Ok(())
    }

    fn copy_unrounded_to_final(&mut self, node: NodeId) {
        let key = self.key(node);
        self.nodes[key].final_layout = self.nodes[key].unrounded_layout;
        for i in 0..self.child_count(node) {
            let child = self.get_child(node, i).unwrap();
            self.copy_unrounded_to_final(child);
        }
    }
}

impl LayoutTree for FlexureTree {
    fn style(&self, node: NodeId) -> &Style {
        &self.nodes[self.key(node)].style
    }

    fn resolved_direction(&self, node: NodeId) -> ResolvedDirection {
        let own = self.nodes[self.key(node)].style.direction;
        let parent_resolved =
            self.parent(node).map(|p| self.resolved_direction(p)).unwrap_or(ResolvedDirection::Ltr);
        match own {
            Direction::Inherit => parent_resolved,
            Direction::Ltr => ResolvedDirection::Ltr,
            Direction::Rtl => ResolvedDirection::Rtl,
        }
    }

    fn child_count(&self, node: NodeId) -> usize {
        FlexureTree::child_count(self, node)
    }

    fn child(&self, node: NodeId, index: usize) -> NodeId {
        self.children[self.key(node)][index]
    }

    fn children(&self, node: NodeId) -> ChildrenVec<NodeId> {
        self.children.get(self.key(node)).cloned().unwrap_or_default()
    }

    fn unrounded_layout_mut(&mut self, node: NodeId) -> &mut Layout {
        &mut self.nodes[self.key(node)].unrounded_layout
    }

    fn unrounded_layout(&self, node: NodeId) -> &Layout {
        &self.nodes[self.key(node)].unrounded_layout
    }

    fn final_layout_mut(&mut self, node: NodeId) -> &mut Layout {
        &mut self.nodes[self.key(node)].final_layout
    }

    fn cache_mut(&mut self, node: NodeId) -> &mut Cache {
        &mut self.nodes[self.key(node)].cache
    }

    fn measure_node(
        &mut self,
        node: NodeId,
        known_dimensions: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
    ) -> Option<Size<f32>> {
        let key = self.key(node);
        if !self.nodes[key].needs_measure {
            return None;
        }
        self.measure_funcs.get_mut(key).map(|f| f.call(known_dimensions, available_space))
    }

    fn measure_baseline(&mut self, node: NodeId, size: Size<f32>) -> Option<f32> {
        let key = self.key(node);
        if !self.nodes[key].has_baseline_func {
            return None;
        }
        self.baseline_funcs.get_mut(key).map(|f| f.call(size))
    }
}

/// Convenience setters mirroring spec §6's illustrative API. These are thin wrappers over
/// [`FlexureTree::with_style_mut`]; a host that wants a different ergonomic surface (builder,
/// `serde`-deserialized `Style`, ...) can ignore them entirely and call `with_style_mut`/
/// `set_style` directly.
impl FlexureTree {
    /// `setDisplay`
    pub fn set_display(&mut self, node: NodeId, display: Display) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.display = display)
    }
    /// `setOverflow` (applies to both axes)
    pub fn set_overflow(&mut self, node: NodeId, overflow: Overflow) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.overflow = Size::splat(overflow))
    }
    /// `setDirection`
    pub fn set_direction(&mut self, node: NodeId, direction: Direction) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.direction = direction)
    }
    /// `setFlexGrow`
    pub fn set_flex_grow(&mut self, node: NodeId, grow: f32) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.flex_grow = grow.max(0.0))
    }
    /// `setFlexShrink`
    pub fn set_flex_shrink(&mut self, node: NodeId, shrink: f32) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.flex_shrink = shrink.max(0.0))
    }
    /// `setFlexBasis`
    pub fn set_flex_basis(&mut self, node: NodeId, basis: crate::style::Dimension) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.flex_basis = basis)
    }
    /// `setWidth`/`setHeight` (set both in one call; use `with_style_mut` for one axis at a time)
    pub fn set_size(&mut self, node: NodeId, size: Size<crate::style::Dimension>) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.size = size)
    }
    /// `setMinWidth`/`setMinHeight`
    pub fn set_min_size(&mut self, node: NodeId, size: Size<crate::style::Dimension>) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.min_size = size)
    }
    /// `setMaxWidth`/`setMaxHeight`
    pub fn set_max_size(&mut self, node: NodeId, size: Size<crate::style::Dimension>) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.max_size = size)
    }
    /// `setMargin(edge, v)`. Passing `f32::NAN` clears the edge back to `Auto` (spec §9).
    pub fn set_margin(&mut self, node: NodeId, edge: Edge, value: LengthPercentageAuto) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.set_margin(edge, sanitize_auto(value)))
    }
    /// `setPadding(edge, v)`
    pub fn set_padding(&mut self, node: NodeId, edge: Edge, value: LengthPercentage) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.set_padding(edge, sanitize_len(value)))
    }
    /// `setBorder(edge, v)`. A `NaN` length is a no-op (spec §4.2 / §9), not a clear-to-zero.
    pub fn set_border(&mut self, node: NodeId, edge: Edge, value: LengthPercentage) -> FlexureResult<()> {
        if let LengthPercentage::Length(v) = value {
            if v.is_nan() {
                return Ok(());
            }
        }
        self.with_style_mut(node, |s| s.set_border(edge, value))
    }
    /// `setPosition(edge, v)` (absolute-position inset). A `NaN` clears the edge to `Auto`.
    pub fn set_inset(&mut self, node: NodeId, edge: Edge, value: LengthPercentageAuto) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.set_inset(edge, sanitize_auto(value)))
    }
    /// `setGap(gutter, v)`
    pub fn set_gap(&mut self, node: NodeId, gutter: Gutter, value: LengthPercentage) -> FlexureResult<()> {
        self.with_style_mut(node, |s| s.set_gap(gutter, sanitize_len(value)))
    }
}

/// `NaN` inside a `Length` variant means "unset" (spec §9); map it to `Auto` before storing.
fn sanitize_auto(value: LengthPercentageAuto) -> LengthPercentageAuto {
    match value {
        LengthPercentageAuto::Length(v) if v.is_nan() => LengthPercentageAuto::Auto,
        LengthPercentageAuto::Percent(v) if v.is_nan() => LengthPercentageAuto::Auto,
        other => other,
    }
}

/// `NaN` inside a `Length` variant for a property that has no `Auto` state falls back to zero,
/// which is the default for margin/padding/border/gap (spec §4.2 resolution order's final step).
fn sanitize_len(value: LengthPercentage) -> LengthPercentage {
    match value {
        LengthPercentage::Length(v) if v.is_nan() => LengthPercentage::Length(0.0),
        LengthPercentage::Percent(v) if v.is_nan() => LengthPercentage::Length(0.0),
        other => other,
    }
}
