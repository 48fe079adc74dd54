//! Error types for tree operations and numeric configuration.

use thiserror::Error;

use crate::control::ControlId;

/// Why a structural or state operation on the control tree was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The id belongs to a control that has been removed from the tree.
    #[error("control {0:?} has been released")]
    Released(ControlId),

    /// The control cannot host children.
    #[error("control {0:?} is not a container")]
    NotAContainer(ControlId),

    /// The control is not a grid.
    #[error("control {0:?} is not a grid")]
    NotAGrid(ControlId),

    #[error("control {child:?} is already a child of {parent:?}")]
    AlreadyChild { parent: ControlId, child: ControlId },

    /// Adding the child would make a control its own ancestor.
    #[error("adding {child:?} to {parent:?} would create a cycle")]
    WouldCreateCycle { parent: ControlId, child: ControlId },

    #[error("control {child:?} is not a child of {parent:?}")]
    NotAChild { parent: ControlId, child: ControlId },

    #[error("index {index} out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("control {0:?} is not focusable")]
    NotFocusable(ControlId),
}

/// Invalid numeric configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange { min: f32, max: f32 },
}
