use super::{ControlTree, TreeEvent};
use crate::control::ControlId;
use crate::error::TreeError;

impl ControlTree {
    /// Append `child` to `parent`, taking it away from any previous owner.
    pub fn add_child(&mut self, parent: ControlId, child: ControlId) -> Result<(), TreeError> {
        self.check_attach(parent, child)?;
        let len = self.node(parent)?.children.len();
        self.attach(parent, len, child);
        Ok(())
    }

    /// Insert `child` at `index` (`index == len` appends).
    pub fn insert_child(
        &mut self,
        parent: ControlId,
        index: usize,
        child: ControlId,
    ) -> Result<(), TreeError> {
        self.check_attach(parent, child)?;
        let len = self.node(parent)?.children.len();
        if index > len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }
        self.attach(parent, index, child);
        Ok(())
    }

    /// Remove `child` from `parent` and release it with its subtree.
    pub fn remove_child(&mut self, parent: ControlId, child: ControlId) -> Result<(), TreeError> {
        self.node(child)?;
        let index = self
            .node(parent)?
            .children
            .iter()
            .position(|id| *id == child)
            .ok_or(TreeError::NotAChild { parent, child })?;
        self.remove_child_at(parent, index)?;
        Ok(())
    }

    /// Remove the child at `index` and release it. Returns the released id,
    /// which is stale from here on.
    pub fn remove_child_at(
        &mut self,
        parent: ControlId,
        index: usize,
    ) -> Result<ControlId, TreeError> {
        let node = self.node_mut(parent)?;
        let len = node.children.len();
        if index >= len {
            return Err(TreeError::IndexOutOfRange { index, len });
        }
        let child = node.children.remove(index);
        log::debug!("[tree] removed {:?} from {:?}", child, parent);
        self.notifications
            .push(TreeEvent::ChildRemoved { parent, child });
        self.release(child);
        self.structure_changed(parent);
        Ok(child)
    }

    /// Release a control and its subtree, detaching it from its owner first.
    pub fn destroy(&mut self, id: ControlId) -> Result<(), TreeError> {
        self.node(id)?;
        self.detach(id);
        self.release(id);
        Ok(())
    }

    fn check_attach(&self, parent: ControlId, child: ControlId) -> Result<(), TreeError> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;
        if !parent_node.kind.hosts_children() {
            return Err(TreeError::NotAContainer(parent));
        }
        if child_node.parent == Some(parent) {
            return Err(TreeError::AlreadyChild { parent, child });
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(TreeError::WouldCreateCycle { parent, child });
        }
        Ok(())
    }

    fn attach(&mut self, parent: ControlId, index: usize, child: ControlId) {
        self.detach(child);
        self.nodes[parent].children.insert(index, child);
        self.nodes[child].parent = Some(parent);
        log::debug!("[tree] added {:?} to {:?} at {}", child, parent, index);
        self.notifications
            .push(TreeEvent::ChildAdded { parent, child });
        self.structure_changed(parent);
    }

    /// Unhook `child` from its owner without releasing it.
    fn detach(&mut self, child: ControlId) {
        let Some(parent) = self.nodes.get(child).and_then(|node| node.parent) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|id| *id != child);
        }
        self.nodes[child].parent = None;
        log::debug!("[tree] detached {:?} from {:?}", child, parent);
        self.notifications
            .push(TreeEvent::ChildRemoved { parent, child });
        self.structure_changed(parent);
    }

    fn release(&mut self, id: ControlId) {
        let mut doomed = self.descendants(id);
        doomed.push(id);
        for id in doomed {
            self.nodes.remove(id);
        }
    }
}
