//! Measure/arrange passes and container layout strategies.

use super::ControlTree;
use crate::control::{ContainerLayout, ControlId, NodeKind};
use crate::error::TreeError;
use crate::layout::{GridChild, GridPlacement, Point, Rect, Size};
use crate::types::{Direction, LayoutStrategy};

#[derive(Clone, Copy)]
enum Pass {
    Leaf,
    Container(ContainerLayout),
    Grid,
}

impl ControlTree {
    /// Lay out the subtree under `root`: a measure pass computing desired sizes
    /// bottom-up, then an arrange pass assigning bounds top-down. Everything is
    /// recomputed; running it twice without changes gives the same result.
    pub fn layout(&mut self, root: ControlId) -> Result<(), TreeError> {
        let available = self.node(root)?.bounds.size();
        let desired = self.measure(root, available);
        self.arrange(root);
        self.arranged = true;
        log::debug!(
            "[layout] {:?} laid out in {:?}, desired {:?}",
            root,
            available,
            desired
        );
        Ok(())
    }

    fn pass(&self, id: ControlId) -> Pass {
        match &self.nodes[id].kind {
            NodeKind::Leaf => Pass::Leaf,
            NodeKind::Container(layout) => Pass::Container(*layout),
            NodeKind::Grid(_) => Pass::Grid,
        }
    }

    fn visible_children(&self, id: ControlId) -> Vec<ControlId> {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .filter(|child| self.nodes[*child].visible)
            .collect()
    }

    fn measure(&mut self, id: ControlId, available: Size) -> Size {
        let padding = self.nodes[id].padding;
        let preferred = self.nodes[id].preferred;

        let desired = match self.pass(id) {
            Pass::Leaf => self.nodes[id]
                .widget
                .measure(available)
                .unwrap_or(preferred),

            Pass::Container(layout) => {
                let inner = preferred.deflate(padding);
                for child in self.visible_children(id) {
                    self.measure(child, inner);
                }
                if layout.auto_size {
                    let spacing = self.spacing_of(layout);
                    let slots = self.container_slots(id, layout, spacing);
                    self.slots_extent(id, &slots, spacing)
                } else {
                    preferred
                }
            }

            Pass::Grid => {
                let content = available.deflate(padding);
                let children = self.visible_children(id);
                for child in &children {
                    self.measure(*child, content);
                }
                let infos = self.grid_children(&children);
                match self.nodes[id].grid_mut() {
                    Some(grid) => grid.measure(&infos, available, padding),
                    None => preferred,
                }
            }
        };

        self.nodes[id].desired = desired;
        desired
    }

    fn arrange(&mut self, id: ControlId) {
        match self.pass(id) {
            Pass::Leaf => return,

            Pass::Container(_) => {
                self.apply_container_layout(id);
            }

            Pass::Grid => {
                let children = self.visible_children(id);
                let infos = self.grid_children(&children);
                let node = &mut self.nodes[id];
                let size = node.bounds.size();
                let padding = node.padding;
                let rects = match node.grid_mut() {
                    Some(grid) => grid.arrange(&infos, size, padding),
                    None => Vec::new(),
                };
                for (child, rect) in children.into_iter().zip(rects) {
                    self.nodes[child].bounds = rect;
                }
            }
        }

        for child in self.visible_children(id) {
            self.arrange(child);
        }
    }

    fn grid_children(&self, children: &[ControlId]) -> Vec<GridChild> {
        children
            .iter()
            .map(|child| {
                let node = &self.nodes[*child];
                GridChild {
                    placement: node.placement,
                    desired: node.desired,
                    margin: node.margin,
                    horizontal: node.horizontal,
                    vertical: node.vertical,
                }
            })
            .collect()
    }

    fn spacing_of(&self, layout: ContainerLayout) -> f32 {
        layout.spacing.unwrap_or(self.config.spacing)
    }

    /// React to a child being added, removed, moved or resized: grow grid
    /// tracks to cover every placement, mark grid layouts stale up the chain
    /// and rerun the container's own strategy.
    pub(crate) fn structure_changed(&mut self, id: ControlId) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let placements: Vec<GridPlacement> = node
            .children
            .iter()
            .filter_map(|child| self.nodes.get(*child).map(|n| n.placement))
            .collect();

        let fill = self.config.expansion_track;
        if let Some(grid) = self.nodes[id].grid_mut() {
            for placement in placements {
                grid.ensure_cell(placement, fill);
            }
        }

        self.invalidate_from(id);

        if self.apply_container_layout(id) {
            if let Some(parent) = self.nodes[id].parent {
                self.structure_changed(parent);
            }
        }
    }

    /// Mark every grid from `id` up to the root as needing layout.
    pub(crate) fn invalidate_from(&mut self, id: ControlId) {
        let mut current = Some(id);
        while let Some(next) = current {
            let Some(node) = self.nodes.get_mut(next) else {
                break;
            };
            if let Some(grid) = node.grid_mut() {
                grid.invalidate();
            }
            current = node.parent;
        }
    }

    /// Run a plain container's stack strategy and auto-size pass.
    /// Returns true if the container's desired size changed.
    ///
    /// An auto-sized container only resizes its own bounds when its parent is
    /// not a grid; inside a grid the cell decides.
    fn apply_container_layout(&mut self, id: ControlId) -> bool {
        let NodeKind::Container(layout) = self.nodes[id].kind else {
            return false;
        };
        let spacing = self.spacing_of(layout);
        let slots = self.container_slots(id, layout, spacing);

        if let LayoutStrategy::Stack(_) = layout.strategy {
            for (child, rect) in &slots {
                self.nodes[*child].bounds = *rect;
            }
        }

        if !layout.auto_size {
            return false;
        }

        let extent = self.slots_extent(id, &slots, spacing);
        let in_grid = self.nodes[id]
            .parent
            .is_some_and(|parent| matches!(self.nodes[parent].kind, NodeKind::Grid(_)));
        let node = &mut self.nodes[id];
        let changed = node.desired != extent;
        node.desired = extent;
        if !in_grid {
            node.bounds.width = extent.width;
            node.bounds.height = extent.height;
        }
        if changed {
            log::debug!("[layout] auto-sized {:?} to {:?}", id, extent);
        }
        changed
    }

    /// Where each visible child of a plain container sits, from desired sizes
    /// only. Stacked children are walked along the direction; manual children
    /// keep their position, and their bounds size unless they size themselves.
    fn container_slots(
        &self,
        id: ControlId,
        layout: ContainerLayout,
        spacing: f32,
    ) -> Vec<(ControlId, Rect)> {
        let padding = self.nodes[id].padding;
        let children = self.visible_children(id);

        let LayoutStrategy::Stack(direction) = layout.strategy else {
            return children
                .into_iter()
                .map(|child| {
                    let node = &self.nodes[child];
                    let size = if node.kind.is_auto_sized() {
                        node.desired
                    } else {
                        node.bounds.size()
                    };
                    (child, Rect::from_origin_size(node.bounds.origin(), size))
                })
                .collect();
        };

        let mut offset = match direction {
            Direction::Row => padding.left,
            Direction::Column => padding.top,
        };
        children
            .into_iter()
            .map(|child| {
                let node = &self.nodes[child];
                let margin = node.margin;
                let size = node.desired;
                let origin = match direction {
                    Direction::Row => {
                        let origin = Point::new(offset + margin.left, padding.top + margin.top);
                        offset += margin.left + size.width + margin.right + spacing;
                        origin
                    }
                    Direction::Column => {
                        let origin = Point::new(padding.left + margin.left, offset + margin.top);
                        offset += margin.top + size.height + margin.bottom + spacing;
                        origin
                    }
                };
                (child, Rect::from_origin_size(origin, size))
            })
            .collect()
    }

    /// Bounding box of the slots' far edges (margins included) plus
    /// `spacing`, or just the padding when there are none.
    fn slots_extent(&self, id: ControlId, slots: &[(ControlId, Rect)], spacing: f32) -> Size {
        if slots.is_empty() {
            let padding = self.nodes[id].padding;
            return Size::new(padding.horizontal_total(), padding.vertical_total());
        }

        let mut extent = Size::ZERO;
        for (child, rect) in slots {
            let margin = self.nodes[*child].margin;
            extent.width = extent.width.max(rect.right() + margin.right.max(0.0));
            extent.height = extent.height.max(rect.bottom() + margin.bottom.max(0.0));
        }
        Size::new(extent.width + spacing, extent.height + spacing)
    }
}
