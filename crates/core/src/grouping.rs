//! Grouping and sorting of timeline items into display sections.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::TimelineItem;

/// Label of the single group produced by [`GroupBy::None`].
pub const ALL_ITEMS_LABEL: &str = "All Items";

/// Field used to partition items into rows or sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    #[default]
    None,
    Project,
    Assignee,
    Status,
    Priority,
}

impl GroupBy {
    /// Returns the string representation used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::None => "none",
            GroupBy::Project => "project",
            GroupBy::Assignee => "assignee",
            GroupBy::Status => "status",
            GroupBy::Priority => "priority",
        }
    }

    /// Parse a group key from its string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(GroupBy::None),
            "project" => Some(GroupBy::Project),
            "assignee" => Some(GroupBy::Assignee),
            "status" => Some(GroupBy::Status),
            "priority" => Some(GroupBy::Priority),
            _ => None,
        }
    }

    /// Label used for items that have no value for this field.
    pub fn fallback_label(&self) -> &'static str {
        match self {
            GroupBy::None => ALL_ITEMS_LABEL,
            GroupBy::Project => "No Project",
            GroupBy::Assignee => "Unassigned",
            GroupBy::Status => "No Status",
            GroupBy::Priority => "No Priority",
        }
    }

    /// Group label for an item.
    pub fn label_for<'a>(&self, item: &'a TimelineItem) -> &'a str {
        let value = match self {
            GroupBy::None => return ALL_ITEMS_LABEL,
            GroupBy::Project => item.project.as_deref(),
            GroupBy::Assignee => item.assignee.as_deref(),
            GroupBy::Status => item.status.as_deref(),
            GroupBy::Priority => item.priority.as_deref(),
        };
        value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(self.fallback_label())
    }
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordering applied to items within a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    StartDate,
    EndDate,
    Label,
}

impl SortKey {
    /// Returns the string representation used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::StartDate => "start",
            SortKey::EndDate => "end",
            SortKey::Label => "label",
        }
    }

    /// Parse a sort key from its string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "start" => Some(SortKey::StartDate),
            "end" => Some(SortKey::EndDate),
            "label" => Some(SortKey::Label),
            _ => None,
        }
    }

    /// Compare two items, ascending.
    pub fn compare(&self, a: &TimelineItem, b: &TimelineItem) -> Ordering {
        match self {
            SortKey::StartDate => a.start_date.cmp(&b.start_date),
            SortKey::EndDate => a.effective_end().cmp(&b.effective_end()),
            SortKey::Label => a.label.cmp(&b.label),
        }
    }
}

/// Partition items into groups and order each group.
///
/// Groups appear in the order their label is first seen in `items`. Items
/// within a group are sorted with a stable sort, so ties keep their input
/// order. [`GroupBy::None`] always yields exactly one group.
pub fn group_and_sort(
    items: &[TimelineItem],
    group_by: GroupBy,
    sort_by: SortKey,
) -> IndexMap<String, Vec<TimelineItem>> {
    let mut groups: IndexMap<String, Vec<TimelineItem>> = IndexMap::new();

    if group_by == GroupBy::None {
        groups.insert(ALL_ITEMS_LABEL.to_string(), items.to_vec());
    } else {
        for item in items {
            groups
                .entry(group_by.label_for(item).to_string())
                .or_default()
                .push(item.clone());
        }
    }

    for members in groups.values_mut() {
        members.sort_by(|a, b| sort_by.compare(a, b));
    }

    groups
}
