//! CLI commands for Ganttline
//!
//! This module contains all subcommand implementations for the gtl CLI,
//! plus the view and filter options they share.

pub mod buckets;
pub mod chart;
pub mod layout;

pub use buckets::BucketsCommand;
pub use chart::ChartCommand;
pub use layout::LayoutCommand;

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use ganttline_core::{
    GroupBy, ItemFilter, LayoutError, LayoutOptions, LayoutResult, SortKey, TimelineItem,
    ZoomLevel, parse_date_str,
};

/// Inputs every command works on
#[derive(Debug, Clone)]
pub struct Context {
    /// Items loaded from the items file
    pub items: Vec<TimelineItem>,
    /// Date used for the today marker and for empty timelines
    pub today: NaiveDate,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the axis buckets for the current items
    Buckets(BucketsCommand),
    /// Show computed positions per group
    Layout(LayoutCommand),
    /// Draw a text Gantt chart
    Chart(ChartCommand),
}

impl Command {
    /// Execute the command against the loaded items.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError` if the command options are invalid or the
    /// output cannot be produced.
    pub fn execute(&self, ctx: &Context) -> LayoutResult<String> {
        match self {
            Command::Buckets(cmd) => cmd.execute(ctx),
            Command::Layout(cmd) => cmd.execute(ctx),
            Command::Chart(cmd) => cmd.execute(ctx),
        }
    }
}

/// Zoom, grouping, and ordering options
#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// Zoom level: day, week, month, quarter, year (picked from the span if omitted)
    #[arg(short, long, value_parser = parse_zoom)]
    pub zoom: Option<ZoomLevel>,

    /// Group rows by: none, project, assignee, status, priority
    #[arg(short, long, value_parser = parse_group, default_value = "none")]
    pub group: GroupBy,

    /// Order rows within a group by: start, end, label
    #[arg(long, value_parser = parse_sort, default_value = "start")]
    pub sort: SortKey,
}

impl ViewArgs {
    /// Convert the arguments into layout options
    pub fn options(&self) -> LayoutOptions {
        let options = LayoutOptions::new().group_by(self.group).sort_by(self.sort);
        match self.zoom {
            Some(zoom) => options.with_zoom(zoom),
            None => options,
        }
    }
}

/// Filters applied before layout
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Search text in label and id (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status (can be specified multiple times)
    #[arg(short, long = "status")]
    pub statuses: Vec<String>,

    /// Filter by priority (can be specified multiple times)
    #[arg(short, long = "priority")]
    pub priorities: Vec<String>,

    /// Filter by assignee (can be specified multiple times)
    #[arg(short, long = "assignee")]
    pub assignees: Vec<String>,

    /// Filter by project (can be specified multiple times)
    #[arg(long = "project")]
    pub projects: Vec<String>,

    /// Keep items ending on or after this date
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Keep items starting on or before this date
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,
}

impl FilterArgs {
    /// Build an ItemFilter from the command options.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ValidationError` if the search query is blank.
    pub fn build_filter(&self) -> LayoutResult<ItemFilter> {
        let mut filter = ItemFilter::new();

        if let Some(ref search) = self.search {
            if search.trim().is_empty() {
                return Err(LayoutError::ValidationError {
                    message: "Search query cannot be empty".to_string(),
                });
            }
            filter = filter.with_search(search);
        }

        filter = filter.with_statuses(self.statuses.iter().cloned());
        for priority in &self.priorities {
            filter = filter.with_priority(priority);
        }
        for assignee in &self.assignees {
            filter = filter.with_assignee(assignee);
        }
        for project in &self.projects {
            filter = filter.with_project(project);
        }

        match (self.from, self.to) {
            (None, None) => {}
            (from, to) => {
                filter = filter.within(
                    from.unwrap_or(NaiveDate::MIN),
                    to.unwrap_or(NaiveDate::MAX),
                );
            }
        }

        Ok(filter)
    }

    /// Apply the filters to the context's items
    pub fn select(&self, ctx: &Context) -> LayoutResult<Vec<TimelineItem>> {
        Ok(self.build_filter()?.apply(&ctx.items))
    }
}

/// Parse a zoom level string into a ZoomLevel enum
fn parse_zoom(s: &str) -> Result<ZoomLevel, String> {
    ZoomLevel::parse(&s.to_lowercase()).ok_or_else(|| {
        format!(
            "invalid zoom '{}'. Valid values: day, week, month, quarter, year",
            s
        )
    })
}

/// Parse a group key string into a GroupBy enum
fn parse_group(s: &str) -> Result<GroupBy, String> {
    GroupBy::parse(&s.to_lowercase()).ok_or_else(|| {
        format!(
            "invalid group '{}'. Valid values: none, project, assignee, status, priority",
            s
        )
    })
}

/// Parse a sort key string into a SortKey enum
fn parse_sort(s: &str) -> Result<SortKey, String> {
    SortKey::parse(&s.to_lowercase())
        .ok_or_else(|| format!("invalid sort '{}'. Valid values: start, end, label", s))
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_date_str(s).ok_or_else(|| format!("invalid date '{}'. Expected YYYY-MM-DD", s))
}
