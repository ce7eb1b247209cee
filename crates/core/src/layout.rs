//! Timeline assembly.
//!
//! Combines span detection, bucket generation, positioning, and grouping
//! into one value that a renderer can draw directly. Every call derives a
//! fresh result from its inputs.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::buckets::generate_buckets;
use crate::grouping::{GroupBy, SortKey, group_and_sort};
use crate::models::{Bucket, TimeSpan, TimelineItem, ZoomLevel};
use crate::position::{Position, compute_position, marker_fraction};

/// Options controlling a layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Zoom level; `None` picks one from the span length
    pub zoom: Option<ZoomLevel>,
    /// Field used to group rows
    pub group_by: GroupBy,
    /// Ordering within each group
    pub sort_by: SortKey,
}

impl LayoutOptions {
    /// Default options: automatic zoom, no grouping, sorted by start date
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed zoom level
    pub fn with_zoom(mut self, zoom: ZoomLevel) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Group rows by a field
    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = group_by;
        self
    }

    /// Order rows within each group
    pub fn sort_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }
}

/// One item with its computed placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowLayout {
    pub item: TimelineItem,
    pub position: Position,
}

/// A labeled section of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupLayout {
    pub label: String,
    pub rows: Vec<RowLayout>,
}

/// Complete layout of a set of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    /// Date range covered by the axis
    pub span: TimeSpan,
    /// Zoom level the buckets were generated at
    pub zoom: ZoomLevel,
    /// Axis ticks; empty when there are no items
    pub buckets: Vec<Bucket>,
    /// Rows grouped for display
    pub groups: Vec<GroupLayout>,
    /// Axis fraction of `today`, when it falls inside the span
    pub today_marker: Option<f64>,
}

impl Timeline {
    /// Lay out `items` according to `options`.
    ///
    /// An empty item set produces a single-point span at `today` with no
    /// buckets and no groups.
    pub fn build(items: &[TimelineItem], options: &LayoutOptions, today: NaiveDate) -> Self {
        let Some(span) = TimeSpan::covering(items) else {
            debug!("no items to lay out");
            return Self {
                span: TimeSpan::degenerate(today),
                zoom: options.zoom.unwrap_or(ZoomLevel::Day),
                buckets: Vec::new(),
                groups: Vec::new(),
                today_marker: None,
            };
        };

        let zoom = options
            .zoom
            .unwrap_or_else(|| ZoomLevel::auto_for_span(&span));
        let buckets = generate_buckets(&span, zoom);

        let groups = group_and_sort(items, options.group_by, options.sort_by)
            .into_iter()
            .map(|(label, members)| GroupLayout {
                label,
                rows: members
                    .into_iter()
                    .map(|item| {
                        let position = compute_position(&item, &span);
                        RowLayout { item, position }
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        debug!(
            items = items.len(),
            min = %span.min,
            max = %span.max,
            zoom = zoom.as_str(),
            buckets = buckets.len(),
            groups = groups.len(),
            "built timeline"
        );

        Self {
            span,
            zoom,
            buckets,
            groups,
            today_marker: marker_fraction(today, &span),
        }
    }

    /// Number of rows across all groups.
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Find the row for an item id.
    pub fn row(&self, id: &str) -> Option<&RowLayout> {
        self.groups
            .iter()
            .flat_map(|g| g.rows.iter())
            .find(|r| r.item.id == id)
    }
}
