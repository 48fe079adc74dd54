use super::ControlTree;
use crate::control::{ControlId, PaintContext};
use crate::error::TreeError;
use crate::focus::Arbiter;
use crate::layout::Point;
use crate::render::Painter;

impl ControlTree {
    /// Paint the subtree under `root`, containers before their children and
    /// children in insertion order, so later siblings draw on top.
    pub fn paint(
        &self,
        root: ControlId,
        arbiter: &Arbiter,
        painter: &mut dyn Painter,
    ) -> Result<(), TreeError> {
        self.node(root)?;
        if !self.arranged {
            log::warn!("[paint] painting {:?} before any layout pass", root);
        }
        self.paint_node(root, self.parent_origin(root), arbiter.focused(), painter);
        Ok(())
    }

    fn paint_node(
        &self,
        id: ControlId,
        parent_origin: Point,
        focused: Option<ControlId>,
        painter: &mut dyn Painter,
    ) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if !node.visible {
            return;
        }

        let bounds = node.bounds.offset(parent_origin);
        let cx = PaintContext {
            id,
            bounds,
            style: &node.style,
            state: node.interaction(),
            focused: focused == Some(id),
            enabled: node.enabled,
        };
        node.widget.paint(&cx, painter);

        for child in &node.children {
            self.paint_node(*child, bounds.origin(), focused, painter);
        }
    }

    /// Visible controls under `root` in the order they are painted.
    pub fn paint_order(&self, root: ControlId) -> Vec<ControlId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if !node.visible {
                continue;
            }
            order.push(id);
            stack.extend(node.children.iter().rev().copied());
        }
        order
    }
}
