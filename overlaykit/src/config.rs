//! Tree-wide configuration.

use crate::layout::Track;
use crate::types::HoverPolicy;

/// Defaults applied by a [`ControlTree`](crate::ControlTree).
#[derive(Debug, Clone, PartialEq)]
pub struct TreeConfig {
    /// Hover policy given to controls that don't set their own.
    pub hover_policy: HoverPolicy,

    /// Track appended when a grid grows to fit a child placement.
    pub expansion_track: Track,

    /// Spacing for stacked and auto-sized containers that don't set their own.
    pub spacing: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            hover_policy: HoverPolicy::Track,
            expansion_track: Track::AUTO,
            spacing: 0.0,
        }
    }
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover_policy(mut self, policy: HoverPolicy) -> Self {
        self.hover_policy = policy;
        self
    }

    pub fn expansion_track(mut self, track: Track) -> Self {
        self.expansion_track = track;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }
}
