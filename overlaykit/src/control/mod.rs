mod node;
mod widget;

pub use node::{Control, ContainerLayout, InteractionState, NodeKind};
pub use widget::{EventContext, PaintContext, Panel, Widget};

pub(crate) use node::ControlNode;

slotmap::new_key_type! {
    /// Handle to a control owned by a [`ControlTree`](crate::ControlTree).
    pub struct ControlId;
}
