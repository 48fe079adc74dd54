//! Grid layout: row/column tracks, cell placement and alignment.

use super::track::{prefix_positions, resolve_tracks, AutoRequest, Track};
use super::{Point, Rect, Size};
use crate::types::{Edges, HorizontalAlignment, VerticalAlignment};

/// Where a child sits in its grid. Spans are at least one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPlacement {
    pub column: usize,
    pub row: usize,
    pub column_span: usize,
    pub row_span: usize,
}

impl Default for GridPlacement {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl GridPlacement {
    pub const fn new(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            column_span: 1,
            row_span: 1,
        }
    }

    pub fn span(mut self, column_span: usize, row_span: usize) -> Self {
        self.column_span = column_span.max(1);
        self.row_span = row_span.max(1);
        self
    }

    /// Column count needed for this placement to resolve to a real cell.
    pub fn required_columns(&self) -> usize {
        self.column.saturating_add(self.column_span.max(1))
    }

    pub fn required_rows(&self) -> usize {
        self.row.saturating_add(self.row_span.max(1))
    }

    /// Pull indices and spans into `columns` x `rows`.
    pub fn clamped(&self, columns: usize, rows: usize) -> Self {
        let (column, column_span) = clamp_axis(self.column, self.column_span, columns);
        let (row, row_span) = clamp_axis(self.row, self.row_span, rows);
        Self {
            column,
            row,
            column_span,
            row_span,
        }
    }
}

fn clamp_axis(index: usize, span: usize, count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 1);
    }
    let index = index.min(count - 1);
    let span = span.max(1).min(count - index);
    (index, span)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPhase {
    #[default]
    Invalidated,
    Measured,
    Arranged,
}

/// What the grid needs to know about one child.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridChild {
    pub placement: GridPlacement,
    pub desired: Size,
    pub margin: Edges,
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

#[derive(Debug, Clone, Default)]
pub struct Grid {
    columns: Vec<Track>,
    rows: Vec<Track>,
    // High-water marks from placements; track lists never drop below these.
    column_floor: usize,
    row_floor: usize,
    column_sizes: Vec<f32>,
    row_sizes: Vec<f32>,
    column_positions: Vec<f32>,
    row_positions: Vec<f32>,
    phase: LayoutPhase,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Track>) -> Self {
        self.set_columns(columns, Track::AUTO);
        self
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Track>) -> Self {
        self.set_rows(rows, Track::AUTO);
        self
    }

    /// Build from the track mini-language, e.g. `Grid::parse("50, *, 2*", "Auto")`.
    pub fn parse(columns: &str, rows: &str) -> Self {
        Self::new()
            .with_columns(Track::parse_list(columns))
            .with_rows(Track::parse_list(rows))
    }

    pub fn columns(&self) -> &[Track] {
        &self.columns
    }

    pub fn rows(&self) -> &[Track] {
        &self.rows
    }

    pub fn column_sizes(&self) -> &[f32] {
        &self.column_sizes
    }

    pub fn row_sizes(&self) -> &[f32] {
        &self.row_sizes
    }

    /// Column start positions, one more entry than there are columns.
    pub fn column_positions(&self) -> &[f32] {
        &self.column_positions
    }

    pub fn row_positions(&self) -> &[f32] {
        &self.row_positions
    }

    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    pub fn invalidate(&mut self) {
        self.phase = LayoutPhase::Invalidated;
    }

    /// Replace the column definitions. Columns still needed by placed children
    /// are kept by padding with `fill`.
    pub fn set_columns(&mut self, columns: impl IntoIterator<Item = Track>, fill: Track) {
        self.columns = columns.into_iter().collect();
        pad(&mut self.columns, self.column_floor, fill);
        self.invalidate();
    }

    pub fn set_rows(&mut self, rows: impl IntoIterator<Item = Track>, fill: Track) {
        self.rows = rows.into_iter().collect();
        pad(&mut self.rows, self.row_floor, fill);
        self.invalidate();
    }

    /// Grow the track lists so `placement` lands on a real cell.
    /// Returns true if any track was added.
    pub fn ensure_cell(&mut self, placement: GridPlacement, fill: Track) -> bool {
        self.column_floor = self.column_floor.max(placement.required_columns());
        self.row_floor = self.row_floor.max(placement.required_rows());
        let grew_columns = pad(&mut self.columns, self.column_floor, fill);
        let grew_rows = pad(&mut self.rows, self.row_floor, fill);
        if grew_columns || grew_rows {
            log::debug!(
                "[grid] expanded to {} columns x {} rows for {:?}",
                self.columns.len(),
                self.rows.len(),
                placement
            );
            self.invalidate();
        }
        grew_columns || grew_rows
    }

    /// Resolve tracks against `available` and report the grid's desired size.
    /// With no tracks or no children the grid wants only its padding.
    pub fn measure(&mut self, children: &[GridChild], available: Size, padding: Edges) -> Size {
        let padding_size = Size::new(padding.horizontal_total(), padding.vertical_total());
        if children.is_empty() || (self.columns.is_empty() && self.rows.is_empty()) {
            self.resolve(&[], Size::ZERO, padding);
            self.phase = LayoutPhase::Measured;
            return padding_size;
        }

        self.resolve(children, available.deflate(padding), padding);
        self.phase = LayoutPhase::Measured;

        Size::new(
            self.column_sizes.iter().sum::<f32>() + padding_size.width,
            self.row_sizes.iter().sum::<f32>() + padding_size.height,
        )
    }

    /// Resolve tracks for the final `size` and return each child's rectangle,
    /// relative to the grid's own origin, in the order given.
    pub fn arrange(&mut self, children: &[GridChild], size: Size, padding: Edges) -> Vec<Rect> {
        self.resolve(children, size.deflate(padding), padding);
        self.phase = LayoutPhase::Arranged;

        children
            .iter()
            .map(|child| {
                let cell = self.cell_rect(child.placement);
                arrange_in_cell(
                    cell,
                    child.margin,
                    child.desired,
                    child.horizontal,
                    child.vertical,
                )
            })
            .collect()
    }

    /// The rectangle covered by the (clamped) spanned tracks.
    pub fn cell_rect(&self, placement: GridPlacement) -> Rect {
        let placement = placement.clamped(self.columns.len(), self.rows.len());
        let (x, right) = span_bounds(
            &self.column_positions,
            placement.column,
            placement.column_span,
        );
        let (y, bottom) = span_bounds(&self.row_positions, placement.row, placement.row_span);
        Rect::new(x, y, (right - x).max(0.0), (bottom - y).max(0.0))
    }

    fn resolve(&mut self, children: &[GridChild], content: Size, padding: Edges) {
        let mut column_requests = Vec::with_capacity(children.len());
        let mut row_requests = Vec::with_capacity(children.len());
        for child in children {
            let placement = child.placement.clamped(self.columns.len(), self.rows.len());
            column_requests.push(AutoRequest {
                start: placement.column,
                span: placement.column_span,
                length: child.desired.width.max(0.0) + child.margin.horizontal_total(),
            });
            row_requests.push(AutoRequest {
                start: placement.row,
                span: placement.row_span,
                length: child.desired.height.max(0.0) + child.margin.vertical_total(),
            });
        }

        self.column_sizes = resolve_tracks(&self.columns, &column_requests, content.width);
        self.row_sizes = resolve_tracks(&self.rows, &row_requests, content.height);

        let origin = Point::new(padding.left.max(0.0), padding.top.max(0.0));
        self.column_positions = prefix_positions(&self.column_sizes, origin.x);
        self.row_positions = prefix_positions(&self.row_sizes, origin.y);
    }
}

fn pad(tracks: &mut Vec<Track>, count: usize, fill: Track) -> bool {
    if tracks.len() >= count {
        return false;
    }
    tracks.resize(count, fill);
    true
}

fn span_bounds(positions: &[f32], start: usize, span: usize) -> (f32, f32) {
    let first = positions.first().copied().unwrap_or(0.0);
    let last = positions.last().copied().unwrap_or(first);
    let from = positions.get(start).copied().unwrap_or(last);
    let to = positions.get(start + span).copied().unwrap_or(last);
    (from, to)
}

/// Place a child of `desired` size in `cell`: margins are taken off first,
/// Stretch fills what is left, the other alignments keep the desired size
/// (capped to the space) and anchor to an edge or the centre.
pub fn arrange_in_cell(
    cell: Rect,
    margin: Edges,
    desired: Size,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) -> Rect {
    let slot = cell.shrink(margin);

    let width = match horizontal {
        HorizontalAlignment::Stretch => slot.width,
        _ => desired.width.max(0.0).min(slot.width),
    };
    let x = match horizontal {
        HorizontalAlignment::Left | HorizontalAlignment::Stretch => slot.x,
        HorizontalAlignment::Center => slot.x + (slot.width - width) / 2.0,
        HorizontalAlignment::Right => slot.right() - width,
    };

    let height = match vertical {
        VerticalAlignment::Stretch => slot.height,
        _ => desired.height.max(0.0).min(slot.height),
    };
    let y = match vertical {
        VerticalAlignment::Top | VerticalAlignment::Stretch => slot.y,
        VerticalAlignment::Center => slot.y + (slot.height - height) / 2.0,
        VerticalAlignment::Bottom => slot.bottom() - height,
    };

    Rect::new(x, y, width, height)
}
