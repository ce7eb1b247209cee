//! Mapping items onto the fractional timeline axis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{TimeSpan, TimelineItem};

/// Smallest width a bar may have, as a fraction of the span.
///
/// Keeps zero-duration items visible and clickable.
pub const MIN_VISIBLE_FRACTION: f64 = 0.01;

/// Horizontal placement of an item, as fractions of the whole span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Offset of the bar's left edge, in `[0, 1]`
    pub left: f64,
    /// Width of the bar, in `(0, 1]`
    pub width: f64,
}

impl Position {
    /// A bar filling the whole axis.
    pub const FULL: Position = Position {
        left: 0.0,
        width: 1.0,
    };

    /// Offset of the bar's right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Convert to a `[start, end)` column range within `total` columns.
    ///
    /// At least one column is covered whenever `total > 0`.
    pub fn to_columns(&self, total: u16) -> (u16, u16) {
        if total == 0 {
            return (0, 0);
        }
        let scale = f64::from(total);
        let start = ((self.left * scale).round() as u16).min(total - 1);
        let end = ((self.right() * scale).round() as u16)
            .min(total)
            .max(start + 1);
        (start, end)
    }
}

/// Compute the placement of an item within a span.
///
/// Positions are clamped to the axis here so callers can draw them as-is:
/// parts of an item outside the span are cut off, and a bar widened to the
/// minimum visible width near the right edge is shifted left to fit.
pub fn compute_position(item: &TimelineItem, span: &TimeSpan) -> Position {
    let total = span.days();
    if total <= 0 {
        return Position::FULL;
    }
    let total = total as f64;

    let start = days_from(span.min, item.start_date) / total;
    let end = days_from(span.min, item.effective_end()) / total;

    let left = start.clamp(0.0, 1.0);
    let raw_width = if (0.0..=1.0).contains(&start) && (0.0..=1.0).contains(&end) {
        item.duration_days() as f64 / total
    } else {
        end.clamp(0.0, 1.0) - left
    };
    let width = raw_width.max(MIN_VISIBLE_FRACTION).min(1.0);

    let left = if left + width > 1.0 { 1.0 - width } else { left };
    Position { left, width }
}

/// Axis fraction of a single date, such as a "today" line.
///
/// Returns `None` when the date lies outside the span or the span is a
/// single point.
pub fn marker_fraction(date: NaiveDate, span: &TimeSpan) -> Option<f64> {
    if span.is_degenerate() || !span.contains(date) {
        return None;
    }
    Some(days_from(span.min, date) / span.days() as f64)
}

fn days_from(origin: NaiveDate, date: NaiveDate) -> f64 {
    date.signed_duration_since(origin).num_days() as f64
}
