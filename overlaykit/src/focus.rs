//! Focus ownership and click arbitration.

use crate::control::ControlId;

/// A focus transfer: who lost it and who has it now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    pub previous: Option<ControlId>,
    pub current: Option<ControlId>,
}

/// Per-root arbitration context: at most one focused control plus the click
/// candidates registered during the current tick. It also remembers whether
/// the button was down last tick, so presses are edge-detected per root.
///
/// Pass one `Arbiter` to every update of the same UI root. Independent roots
/// use independent arbiters.
#[derive(Debug, Default)]
pub struct Arbiter {
    focused: Option<ControlId>,
    candidates: Vec<ControlId>,
    pointer_was_down: bool,
}

impl Arbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused control.
    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }

    pub fn is_focused(&self, id: ControlId) -> bool {
        self.focused == Some(id)
    }

    pub fn candidates(&self) -> &[ControlId] {
        &self.candidates
    }

    /// Register a click candidate for this tick. Registering twice is a no-op.
    pub fn register(&mut self, id: ControlId) {
        if !self.candidates.contains(&id) {
            self.candidates.push(id);
        }
    }

    /// Pick the click winner: the last registered candidate that is focusable.
    /// The candidate set is cleared whatever the outcome.
    pub fn arbitrate(&mut self, is_focusable: impl Fn(ControlId) -> bool) -> Option<ControlId> {
        let winner = self
            .candidates
            .iter()
            .rev()
            .copied()
            .find(|id| is_focusable(*id));
        log::debug!(
            "[focus] arbitrating {} candidate(s), winner={:?}",
            self.candidates.len(),
            winner
        );
        self.candidates.clear();
        winner
    }

    /// Move focus. Returns `None` when `target` already holds it.
    pub fn set_focus(&mut self, target: Option<ControlId>) -> Option<FocusChange> {
        if self.focused == target {
            return None;
        }
        let previous = std::mem::replace(&mut self.focused, target);
        log::debug!("[focus] Changing focus from {:?} to {:?}", previous, target);
        Some(FocusChange {
            previous,
            current: target,
        })
    }

    /// Clear focus.
    /// Returns the control that held it, if any.
    pub fn blur(&mut self) -> Option<ControlId> {
        self.set_focus(None).and_then(|change| change.previous)
    }

    /// Record this tick's button state. True on the up-to-down edge.
    pub(crate) fn track_pointer(&mut self, down: bool) -> bool {
        let edge = down && !self.pointer_was_down;
        self.pointer_was_down = down;
        edge
    }

    /// Drop references to controls that no longer exist. No hooks fire.
    pub(crate) fn retain(&mut self, alive: impl Fn(ControlId) -> bool) {
        if let Some(id) = self.focused {
            if !alive(id) {
                log::debug!("[focus] dropping released control {:?}", id);
                self.focused = None;
            }
        }
        self.candidates.retain(|id| alive(*id));
    }
}
