//! Row and column track definitions and the two-pass sizing solver.

use std::convert::Infallible;
use std::str::FromStr;

/// A grid row or column definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    /// Sized to the largest child starting in it, never below the given minimum.
    Auto(f32),
    /// Fixed length.
    Pixel(f32),
    /// Weighted share of whatever the Auto and Pixel tracks leave over.
    Star(f32),
}

impl Default for Track {
    fn default() -> Self {
        Self::AUTO
    }
}

impl Track {
    pub const AUTO: Self = Self::Auto(0.0);

    pub fn auto() -> Self {
        Self::AUTO
    }

    pub fn auto_min(min: f32) -> Self {
        Self::Auto(min.max(0.0))
    }

    pub fn pixel(value: f32) -> Self {
        Self::Pixel(value.max(0.0))
    }

    pub fn star(weight: f32) -> Self {
        Self::Star(weight.max(0.0))
    }

    /// Parse one track: `auto` (any case), `<n>`, `<n>*` or `*`.
    /// Anything else is treated as `Auto`.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("auto") {
            return Self::AUTO;
        }

        if let Some(weight) = input.strip_suffix('*') {
            let weight = weight.trim();
            if weight.is_empty() {
                return Self::star(1.0);
            }
            return parse_number(weight).map_or(Self::AUTO, Self::star);
        }

        parse_number(input).map_or(Self::AUTO, Self::pixel)
    }

    /// Parse a comma separated list such as `"Auto, 50, *, 2*"`.
    pub fn parse_list(input: &str) -> Vec<Self> {
        if input.trim().is_empty() {
            return Vec::new();
        }
        input.split(',').map(Self::parse).collect()
    }

    pub fn is_star(&self) -> bool {
        matches!(self, Self::Star(_))
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto(_))
    }
}

impl FromStr for Track {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn parse_number(input: &str) -> Option<f32> {
    input.parse::<f32>().ok().filter(|v| v.is_finite())
}

/// A child's demand on the Auto tracks it spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoRequest {
    pub start: usize,
    pub span: usize,
    /// Desired length including margins.
    pub length: f32,
}

/// Resolve track lengths against `available`.
///
/// Pixel tracks take their value and Auto tracks the larger of their minimum
/// and the requests landing on them. A request spanning several Auto tracks is
/// split equally between them; Pixel and Star tracks in the span get nothing.
/// Star tracks then divide what is left by weight. Leftover space with no Star
/// track to absorb it stays unused.
pub fn resolve_tracks(tracks: &[Track], requests: &[AutoRequest], available: f32) -> Vec<f32> {
    let mut sizes: Vec<f32> = tracks
        .iter()
        .map(|track| match *track {
            Track::Pixel(value) => value.max(0.0),
            Track::Auto(min) => min.max(0.0),
            Track::Star(_) => 0.0,
        })
        .collect();

    for request in requests {
        let start = request.start.min(tracks.len());
        let end = request.start.saturating_add(request.span.max(1)).min(tracks.len());
        let auto_tracks: Vec<usize> = (start..end).filter(|&i| tracks[i].is_auto()).collect();
        if auto_tracks.is_empty() {
            continue;
        }

        let share = request.length.max(0.0) / auto_tracks.len() as f32;
        for i in auto_tracks {
            sizes[i] = sizes[i].max(share);
        }
    }

    let used: f32 = sizes.iter().sum();
    let available = if available.is_nan() { 0.0 } else { available };
    let remaining = (available - used).max(0.0);

    let total_weight: f32 = tracks
        .iter()
        .map(|track| match *track {
            Track::Star(weight) => weight.max(0.0),
            _ => 0.0,
        })
        .sum();

    if total_weight > 0.0 && remaining.is_finite() {
        for (size, track) in sizes.iter_mut().zip(tracks) {
            if let Track::Star(weight) = *track {
                *size = weight.max(0.0) * remaining / total_weight;
            }
        }
    }

    sizes
}

/// Track start positions: `sizes.len() + 1` running sums from `origin`.
pub fn prefix_positions(sizes: &[f32], origin: f32) -> Vec<f32> {
    let mut positions = Vec::with_capacity(sizes.len() + 1);
    let mut offset = origin;
    positions.push(offset);
    for size in sizes {
        offset += size;
        positions.push(offset);
    }
    positions
}
