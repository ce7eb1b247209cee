//! Data models for the timeline layout engine
//!
//! Defines the items laid out on a Gantt axis, the span covering them,
//! zoom levels, and the buckets that label the axis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time granularity at which the axis is bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomLevel {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl ZoomLevel {
    /// All zoom levels from finest to coarsest.
    pub const ALL: [ZoomLevel; 5] = [
        ZoomLevel::Day,
        ZoomLevel::Week,
        ZoomLevel::Month,
        ZoomLevel::Quarter,
        ZoomLevel::Year,
    ];

    /// Returns the string representation used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoomLevel::Day => "day",
            ZoomLevel::Week => "week",
            ZoomLevel::Month => "month",
            ZoomLevel::Quarter => "quarter",
            ZoomLevel::Year => "year",
        }
    }

    /// Parse a zoom level from its string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "day" => Some(ZoomLevel::Day),
            "week" => Some(ZoomLevel::Week),
            "month" => Some(ZoomLevel::Month),
            "quarter" => Some(ZoomLevel::Quarter),
            "year" => Some(ZoomLevel::Year),
            _ => None,
        }
    }

    /// Nominal width of one unit in pixels.
    ///
    /// Only a rendering hint; positions are computed as fractions of the span.
    pub fn unit_width_px(&self) -> u32 {
        match self {
            ZoomLevel::Day => 40,
            ZoomLevel::Week => 80,
            ZoomLevel::Month => 120,
            ZoomLevel::Quarter => 180,
            ZoomLevel::Year => 240,
        }
    }

    /// Pick a zoom level that keeps the bucket count readable for a span.
    pub fn auto_for_span(span: &TimeSpan) -> Self {
        let days = span.days();
        if days < 14 {
            ZoomLevel::Day
        } else if days < 90 {
            ZoomLevel::Week
        } else if days < 365 {
            ZoomLevel::Month
        } else if days < 3 * 365 {
            ZoomLevel::Quarter
        } else {
            ZoomLevel::Year
        }
    }
}

impl std::fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One schedulable entity (task or project) laid out on the Gantt axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Unique identifier within a collection
    pub id: String,

    /// Display label
    pub label: String,

    /// First day of the item
    pub start_date: NaiveDate,

    /// Last day of the item (due date)
    pub end_date: NaiveDate,

    /// Owning project, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Assigned person, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Workflow status such as "To Do" or "In Progress"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Priority such as "High"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl TimelineItem {
    /// Create an item with no grouping attributes
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            start_date,
            end_date,
            project: None,
            assignee: None,
            status: None,
            priority: None,
        }
    }

    /// Set the project
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// End date with an inverted range clamped to the start date.
    pub fn effective_end(&self) -> NaiveDate {
        self.end_date.max(self.start_date)
    }

    /// Duration in whole days; zero for inverted ranges.
    pub fn duration_days(&self) -> i64 {
        self.effective_end()
            .signed_duration_since(self.start_date)
            .num_days()
    }
}

/// The overall date range covering a set of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl TimeSpan {
    /// Create a span, swapping the bounds if they are given in reverse.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// A single-point span, used when there is nothing to lay out.
    pub fn degenerate(at: NaiveDate) -> Self {
        Self { min: at, max: at }
    }

    /// Span from the earliest start to the latest (clamped) end.
    ///
    /// Returns `None` for an empty item set.
    pub fn covering(items: &[TimelineItem]) -> Option<Self> {
        let min = items.iter().map(|i| i.start_date).min()?;
        let max = items.iter().map(TimelineItem::effective_end).max()?;
        Some(Self { min, max })
    }

    /// Length of the span in days.
    pub fn days(&self) -> i64 {
        self.max.signed_duration_since(self.min).num_days()
    }

    /// Whether the span is a single point.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Whether a date lies inside the span (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}

/// One labeled tick on the timeline axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Label formatted for the zoom level
    pub label: String,
    /// First day of the unit this bucket represents
    pub start: NaiveDate,
}

// Layout runs inside render paths that may live on any thread
static_assertions::assert_impl_all!(TimelineItem: Send, Sync);
static_assertions::assert_impl_all!(TimeSpan: Send, Sync, Copy);
static_assertions::assert_impl_all!(Bucket: Send, Sync);
