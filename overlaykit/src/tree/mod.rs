//! The control arena and everything that walks it.

mod hierarchy;
mod layout;
mod paint;
mod update;

use slotmap::SlotMap;

use crate::config::TreeConfig;
use crate::control::{Control, ControlId, ControlNode, InteractionState, NodeKind};
use crate::error::TreeError;
use crate::layout::{Grid, GridPlacement, LayoutPhase, Point, Rect, Size, Track};
use crate::types::{
    Edges, HorizontalAlignment, HoverPolicy, LayoutStrategy, Style, VerticalAlignment,
};

/// Structural change notifications, collected until drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    ChildAdded { parent: ControlId, child: ControlId },
    ChildRemoved { parent: ControlId, child: ControlId },
}

/// Owns every control. Parents refer to children and children to parents by
/// [`ControlId`], so there are no owning cycles; removing a control from its
/// container releases it and its whole subtree.
pub struct ControlTree {
    nodes: SlotMap<ControlId, ControlNode>,
    config: TreeConfig,
    notifications: Vec<TreeEvent>,
    pointer: Point,
    arranged: bool,
}

impl Default for ControlTree {
    fn default() -> Self {
        Self::with_config(TreeConfig::default())
    }
}

impl ControlTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            config,
            notifications: Vec::new(),
            pointer: Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
            arranged: false,
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Take ownership of a control. It has no parent until added to a container.
    pub fn insert(&mut self, control: Control) -> ControlId {
        let id = self
            .nodes
            .insert(ControlNode::new(control, self.config.hover_policy));
        log::trace!("[tree] inserted {:?}", id);
        id
    }

    /// Insert a control and append it to `parent` in one step.
    pub fn add(&mut self, parent: ControlId, control: Control) -> Result<ControlId, TreeError> {
        let id = self.insert(control);
        if let Err(err) = self.add_child(parent, id) {
            self.nodes.remove(id);
            return Err(err);
        }
        Ok(id)
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn drain_notifications(&mut self) -> Vec<TreeEvent> {
        std::mem::take(&mut self.notifications)
    }

    pub(crate) fn node(&self, id: ControlId) -> Result<&ControlNode, TreeError> {
        self.nodes.get(id).ok_or(TreeError::Released(id))
    }

    pub(crate) fn node_mut(&mut self, id: ControlId) -> Result<&mut ControlNode, TreeError> {
        self.nodes.get_mut(id).ok_or(TreeError::Released(id))
    }

    // Queries

    pub fn parent(&self, id: ControlId) -> Result<Option<ControlId>, TreeError> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: ControlId) -> Result<&[ControlId], TreeError> {
        Ok(&self.node(id)?.children)
    }

    /// Parent-relative bounds.
    pub fn bounds(&self, id: ControlId) -> Result<Rect, TreeError> {
        Ok(self.node(id)?.bounds)
    }

    /// Size from the most recent measure pass.
    pub fn desired_size(&self, id: ControlId) -> Result<Size, TreeError> {
        Ok(self.node(id)?.desired)
    }

    pub fn is_visible(&self, id: ControlId) -> Result<bool, TreeError> {
        Ok(self.node(id)?.visible)
    }

    pub fn is_enabled(&self, id: ControlId) -> Result<bool, TreeError> {
        Ok(self.node(id)?.enabled)
    }

    pub fn is_focusable(&self, id: ControlId) -> Result<bool, TreeError> {
        Ok(self.node(id)?.focusable)
    }

    pub fn interaction(&self, id: ControlId) -> Result<InteractionState, TreeError> {
        Ok(self.node(id)?.interaction())
    }

    pub fn style(&self, id: ControlId) -> Result<&Style, TreeError> {
        Ok(&self.node(id)?.style)
    }

    pub fn placement(&self, id: ControlId) -> Result<GridPlacement, TreeError> {
        Ok(self.node(id)?.placement)
    }

    pub fn hover_policy(&self, id: ControlId) -> Result<HoverPolicy, TreeError> {
        Ok(self.node(id)?.hover_policy)
    }

    pub fn grid(&self, id: ControlId) -> Result<&Grid, TreeError> {
        match &self.node(id)?.kind {
            NodeKind::Grid(grid) => Ok(grid),
            _ => Err(TreeError::NotAGrid(id)),
        }
    }

    pub fn layout_phase(&self, id: ControlId) -> Result<LayoutPhase, TreeError> {
        Ok(self.grid(id)?.phase())
    }

    /// Position in root coordinates, composed up the parent chain.
    pub fn absolute_position(&self, id: ControlId) -> Result<Point, TreeError> {
        let mut node = self.node(id)?;
        let mut position = node.bounds.origin();
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            position = position.offset(node.bounds.origin());
        }
        Ok(position)
    }

    pub fn absolute_bounds(&self, id: ControlId) -> Result<Rect, TreeError> {
        let size = self.node(id)?.bounds.size();
        Ok(Rect::from_origin_size(self.absolute_position(id)?, size))
    }

    /// Absolute origin of `id`'s parent, or zero for a root.
    pub(crate) fn parent_origin(&self, id: ControlId) -> Point {
        self.nodes
            .get(id)
            .and_then(|node| node.parent)
            .and_then(|parent| self.absolute_position(parent).ok())
            .unwrap_or(Point::ZERO)
    }

    // Setters

    pub fn set_position(&mut self, id: ControlId, x: f32, y: f32) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        node.bounds.x = x;
        node.bounds.y = y;
        self.parent_changed(id);
        Ok(())
    }

    /// Set the declared size. Invalidates any grid above the control.
    pub fn set_size(&mut self, id: ControlId, width: f32, height: f32) -> Result<(), TreeError> {
        let size = Size::new(width.max(0.0), height.max(0.0));
        let node = self.node_mut(id)?;
        node.preferred = size;
        node.desired = size;
        node.bounds.width = size.width;
        node.bounds.height = size.height;
        self.invalidate_from(id);
        self.parent_changed(id);
        Ok(())
    }

    pub fn set_bounds(&mut self, id: ControlId, bounds: Rect) -> Result<(), TreeError> {
        self.set_position(id, bounds.x, bounds.y)?;
        self.set_size(id, bounds.width, bounds.height)
    }

    pub fn set_visible(&mut self, id: ControlId, visible: bool) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        if node.visible != visible {
            node.visible = visible;
            self.invalidate_from(id);
            self.parent_changed(id);
        }
        Ok(())
    }

    pub fn set_enabled(&mut self, id: ControlId, enabled: bool) -> Result<(), TreeError> {
        self.node_mut(id)?.enabled = enabled;
        Ok(())
    }

    pub fn set_focusable(&mut self, id: ControlId, focusable: bool) -> Result<(), TreeError> {
        self.node_mut(id)?.focusable = focusable;
        Ok(())
    }

    pub fn set_style(&mut self, id: ControlId, style: Style) -> Result<(), TreeError> {
        self.node_mut(id)?.style = style;
        Ok(())
    }

    pub fn set_hover_policy(&mut self, id: ControlId, policy: HoverPolicy) -> Result<(), TreeError> {
        self.node_mut(id)?.hover_policy = policy;
        Ok(())
    }

    pub fn set_margin(&mut self, id: ControlId, margin: Edges) -> Result<(), TreeError> {
        self.node_mut(id)?.margin = margin;
        self.invalidate_from(id);
        self.parent_changed(id);
        Ok(())
    }

    pub fn set_padding(&mut self, id: ControlId, padding: Edges) -> Result<(), TreeError> {
        self.node_mut(id)?.padding = padding;
        self.structure_changed(id);
        Ok(())
    }

    pub fn set_alignment(
        &mut self,
        id: ControlId,
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
    ) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        node.horizontal = horizontal;
        node.vertical = vertical;
        self.invalidate_from(id);
        Ok(())
    }

    pub fn set_layout_strategy(
        &mut self,
        id: ControlId,
        strategy: LayoutStrategy,
    ) -> Result<(), TreeError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Container(layout) => layout.strategy = strategy,
            _ => return Err(TreeError::NotAContainer(id)),
        }
        self.structure_changed(id);
        Ok(())
    }

    pub fn set_auto_size(&mut self, id: ControlId, auto_size: bool) -> Result<(), TreeError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Container(layout) => layout.auto_size = auto_size,
            _ => return Err(TreeError::NotAContainer(id)),
        }
        self.structure_changed(id);
        Ok(())
    }

    /// Move a child to another cell. A grid parent grows to fit it.
    pub fn set_placement(
        &mut self,
        id: ControlId,
        placement: GridPlacement,
    ) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        node.placement = placement.span(placement.column_span, placement.row_span);
        let parent = node.parent;
        if let Some(parent) = parent {
            self.structure_changed(parent);
        }
        Ok(())
    }

    pub fn set_columns(
        &mut self,
        id: ControlId,
        columns: impl IntoIterator<Item = Track>,
    ) -> Result<(), TreeError> {
        let fill = self.config.expansion_track;
        self.node_mut(id)?
            .grid_mut()
            .ok_or(TreeError::NotAGrid(id))?
            .set_columns(columns, fill);
        self.structure_changed(id);
        Ok(())
    }

    pub fn set_rows(
        &mut self,
        id: ControlId,
        rows: impl IntoIterator<Item = Track>,
    ) -> Result<(), TreeError> {
        let fill = self.config.expansion_track;
        self.node_mut(id)?
            .grid_mut()
            .ok_or(TreeError::NotAGrid(id))?
            .set_rows(rows, fill);
        self.structure_changed(id);
        Ok(())
    }

    /// True when `ancestor` is a proper ancestor of `descendant`.
    pub fn is_ancestor(&self, ancestor: ControlId, descendant: ControlId) -> bool {
        let mut current = self.nodes.get(descendant).and_then(|node| node.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id).and_then(|node| node.parent);
        }
        false
    }

    /// Every control below `id`, parents before children.
    pub(crate) fn descendants(&self, id: ControlId) -> Vec<ControlId> {
        let mut out = Vec::new();
        let mut stack: Vec<ControlId> = self
            .nodes
            .get(id)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(node) = self.nodes.get(next) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    fn parent_changed(&mut self, id: ControlId) {
        if let Some(parent) = self.nodes.get(id).and_then(|node| node.parent) {
            self.structure_changed(parent);
        }
    }
}
