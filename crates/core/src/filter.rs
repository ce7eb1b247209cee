//! Item filtering ahead of layout
//!
//! Provides a builder-pattern ItemFilter mirroring the search box and
//! select filters of the Gantt view.

use chrono::NaiveDate;

use crate::models::TimelineItem;

/// Filter criteria for timeline items
///
/// All criteria use OR semantics within the same type (several statuses
/// means "match any of these statuses") and AND semantics across types.
/// Field comparisons ignore case, including non-ASCII letters. An item without a value for a
/// field never matches a criterion on that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Case-insensitive substring searched in label and id
    pub search: Option<String>,
    /// Filter by statuses (OR semantics)
    pub statuses: Vec<String>,
    /// Filter by priorities (OR semantics)
    pub priorities: Vec<String>,
    /// Filter by assignees (OR semantics)
    pub assignees: Vec<String>,
    /// Filter by projects (OR semantics)
    pub projects: Vec<String>,
    /// Keep only items overlapping this inclusive window
    pub window: Option<(NaiveDate, NaiveDate)>,
}

impl ItemFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Add a status to filter by
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.statuses.push(status.into());
        self
    }

    /// Add multiple statuses to filter by
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = String>) -> Self {
        self.statuses.extend(statuses);
        self
    }

    /// Add a priority to filter by
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priorities.push(priority.into());
        self
    }

    /// Add an assignee to filter by
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignees.push(assignee.into());
        self
    }

    /// Add a project to filter by
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.projects.push(project.into());
        self
    }

    /// Keep only items overlapping `[from, to]`
    pub fn within(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.window = Some((from.min(to), from.max(to)));
        self
    }

    /// Whether no criteria are set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check whether a single item passes the filter
    pub fn matches(&self, item: &TimelineItem) -> bool {
        if let Some(ref search) = self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty()
                && !item.label.to_lowercase().contains(&needle)
                && !item.id.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some((from, to)) = self.window
            && (item.start_date > to || item.effective_end() < from)
        {
            return false;
        }

        matches_any(&self.statuses, item.status.as_deref())
            && matches_any(&self.priorities, item.priority.as_deref())
            && matches_any(&self.assignees, item.assignee.as_deref())
            && matches_any(&self.projects, item.project.as_deref())
    }

    /// Apply the filter, preserving input order
    pub fn apply(&self, items: &[TimelineItem]) -> Vec<TimelineItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

fn matches_any(wanted: &[String], value: Option<&str>) -> bool {
    if wanted.is_empty() {
        return true;
    }
    match value {
        Some(value) => {
            let value = value.to_lowercase();
            wanted.iter().any(|w| w.to_lowercase() == value)
        }
        None => false,
    }
}
