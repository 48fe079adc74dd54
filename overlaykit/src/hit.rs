use crate::control::ControlId;
use crate::layout::Point;
use crate::tree::ControlTree;

/// Find the deepest visible control containing the point under `root`.
/// Children are checked back-to-front so the most recently added one wins.
/// Returns the container itself when no child matches, or None if the point
/// is outside `root` altogether.
pub fn hit_test(tree: &ControlTree, root: ControlId, point: Point) -> Option<ControlId> {
    hit_test_control(tree, root, tree.parent_origin(root), point, &|_: ControlId| true)
}

/// Find the deepest focusable control containing the point.
pub fn hit_test_focusable(tree: &ControlTree, root: ControlId, point: Point) -> Option<ControlId> {
    hit_test_control(tree, root, tree.parent_origin(root), point, &|id: ControlId| {
        tree.is_focusable(id).unwrap_or(false)
    })
}

fn hit_test_control(
    tree: &ControlTree,
    id: ControlId,
    parent_origin: Point,
    point: Point,
    accept: &dyn Fn(ControlId) -> bool,
) -> Option<ControlId> {
    let node = tree.node(id).ok()?;
    if !node.visible {
        return None;
    }

    let bounds = node.bounds.offset(parent_origin);
    if !node.widget.contains(bounds, point) {
        return None;
    }

    // Check children in reverse order (last added = on top)
    for child in node.children.iter().rev() {
        if let Some(hit) = hit_test_control(tree, *child, bounds.origin(), point, accept) {
            return Some(hit);
        }
    }

    if accept(id) {
        Some(id)
    } else {
        None
    }
}
