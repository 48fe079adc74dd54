mod grid;
mod rect;
mod track;

pub use grid::{arrange_in_cell, Grid, GridChild, GridPlacement, LayoutPhase};
pub use rect::{Point, Rect, Size};
pub use track::{prefix_positions, resolve_tracks, AutoRequest, Track};
