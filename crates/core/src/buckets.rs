//! Axis bucket generation.
//!
//! Walks a span one zoom unit at a time and labels each step. Calendar
//! units (month, quarter, year) are added to the span start rather than to
//! the previous bucket, so a month that clamps (Jan 31 -> Feb 29) does not
//! shift every later bucket.

use chrono::{Datelike, Days, Months, NaiveDate};
use tracing::trace;

use crate::models::{Bucket, TimeSpan, ZoomLevel};

/// Generate the ordered buckets for a span at a zoom level.
///
/// A single-point span yields exactly one bucket anchored at its date.
/// Otherwise buckets start at `span.min` and continue while their start is
/// on or before `span.max`.
pub fn generate_buckets(span: &TimeSpan, zoom: ZoomLevel) -> Vec<Bucket> {
    if span.is_degenerate() {
        return vec![make_bucket(span.min, zoom)];
    }

    let mut buckets = Vec::new();
    let mut step = 0u32;

    while let Some(cursor) = advance(span.min, zoom, step) {
        if cursor > span.max {
            break;
        }
        buckets.push(make_bucket(cursor, zoom));
        step += 1;
    }

    trace!(
        zoom = zoom.as_str(),
        count = buckets.len(),
        "generated buckets"
    );
    buckets
}

/// Date `steps` zoom units after `anchor`, or `None` past the calendar range.
///
/// Month arithmetic clamps to the last day of shorter months.
pub fn advance(anchor: NaiveDate, zoom: ZoomLevel, steps: u32) -> Option<NaiveDate> {
    match zoom {
        ZoomLevel::Day => anchor.checked_add_days(Days::new(u64::from(steps))),
        ZoomLevel::Week => anchor.checked_add_days(Days::new(7 * u64::from(steps))),
        ZoomLevel::Month => anchor.checked_add_months(Months::new(steps)),
        ZoomLevel::Quarter => anchor.checked_add_months(Months::new(steps.checked_mul(3)?)),
        ZoomLevel::Year => anchor.checked_add_months(Months::new(steps.checked_mul(12)?)),
    }
}

/// Format the label for a bucket starting at `date`.
pub fn format_label(date: NaiveDate, zoom: ZoomLevel) -> String {
    match zoom {
        ZoomLevel::Day | ZoomLevel::Week => format!("{}/{}", date.day(), date.month()),
        ZoomLevel::Month => date.format("%b %y").to_string(),
        ZoomLevel::Quarter => format!("Q{} {}", quarter_of(date), date.year()),
        ZoomLevel::Year => format!("{:04}", date.year()),
    }
}

/// Calendar quarter (1-4) containing a date.
pub fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

fn make_bucket(start: NaiveDate, zoom: ZoomLevel) -> Bucket {
    Bucket {
        label: format_label(start, zoom),
        start,
    }
}
