//! Loading timeline items from JSON.
//!
//! Dates are validated item by item: an item with an unparseable date is
//! rejected and reported, and the remaining items are still returned.

use std::path::Path;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{LayoutError, LayoutResult};
use crate::models::TimelineItem;

/// Items accepted from an input document, plus the ones that were rejected.
#[derive(Debug, Default)]
pub struct ParsedItems {
    pub items: Vec<TimelineItem>,
    pub rejected: Vec<LayoutError>,
}

/// Row shape of the input document, before date validation.
#[derive(Debug, Deserialize)]
struct RawItem {
    id: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default, alias = "startDate")]
    start_date: Value,
    #[serde(default, alias = "endDate", alias = "dueDate")]
    end_date: Value,
    #[serde(default)]
    project: Option<String>,
    #[serde(default)]
    assignee: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    priority: Option<String>,
}

impl RawItem {
    fn into_item(self) -> LayoutResult<TimelineItem> {
        let start_date = parse_date(&self.id, "start_date", &self.start_date)?;
        let end_date = parse_date(&self.id, "end_date", &self.end_date)?;
        let label = self.label.unwrap_or_else(|| self.id.clone());

        Ok(TimelineItem {
            id: self.id,
            label,
            start_date,
            end_date,
            project: self.project,
            assignee: self.assignee,
            status: self.status,
            priority: self.priority,
        })
    }
}

/// Parse a calendar date as `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep the date as written, ignoring the offset.
pub fn parse_date_str(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Missing, null, and non-string dates are invalid like malformed strings.
fn parse_date(item_id: &str, field: &'static str, value: &Value) -> LayoutResult<NaiveDate> {
    let parsed = match value {
        Value::String(s) => parse_date_str(s),
        _ => None,
    };
    parsed.ok_or_else(|| LayoutError::InvalidDate {
        item_id: item_id.to_string(),
        field,
        value: match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    })
}

/// Parse a JSON array of items.
///
/// # Errors
///
/// Returns `LayoutError::Json` if the document is not an array of item
/// objects. Items with invalid dates are collected in `rejected` instead.
pub fn parse_items(json: &str) -> LayoutResult<ParsedItems> {
    let raw: Vec<RawItem> = serde_json::from_str(json)?;
    let mut parsed = ParsedItems::default();

    for row in raw {
        match row.into_item() {
            Ok(item) => parsed.items.push(item),
            Err(err) => {
                warn!("Skipping item: {}", err);
                parsed.rejected.push(err);
            }
        }
    }

    debug!(
        accepted = parsed.items.len(),
        rejected = parsed.rejected.len(),
        "parsed items"
    );
    Ok(parsed)
}

/// Read and parse an items file.
///
/// # Errors
///
/// Returns `LayoutError::Io` if the file cannot be read, or
/// `LayoutError::Json` if its content is malformed.
pub fn load_items(path: &Path) -> LayoutResult<ParsedItems> {
    debug!("Loading items from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| LayoutError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_items(&content)
}
