//! Layout command for displaying computed positions
//!
//! Implements the `gtl layout` command, printing each item's axis offset
//! and width per group, as a table or as JSON.

use clap::Args;
use ganttline_core::{LayoutResult, Timeline};
use tracing::debug;

use super::{Context, FilterArgs, ViewArgs};
use crate::output::format_layout_table;

/// Show the computed layout of the (filtered) items
#[derive(Debug, Args)]
pub struct LayoutCommand {
    #[command(flatten)]
    pub view: ViewArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print the full layout as JSON
    #[arg(long)]
    pub json: bool,
}

impl LayoutCommand {
    /// Execute the layout command.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ValidationError` for an empty search query, or
    /// `LayoutError::Json` if JSON output fails.
    pub fn execute(&self, ctx: &Context) -> LayoutResult<String> {
        let items = self.filter.select(ctx)?;
        debug!("Laying out {} of {} items", items.len(), ctx.items.len());

        let timeline = Timeline::build(&items, &self.view.options(), ctx.today);

        if self.json {
            return Ok(serde_json::to_string_pretty(&timeline)?);
        }
        Ok(format_layout_table(&timeline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ganttline_core::{GroupBy, SortKey, TimelineItem, ZoomLevel};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ctx() -> Context {
        Context {
            items: vec![
                TimelineItem::new("A", "Alpha", date(2024, 2, 1), date(2024, 2, 10))
                    .with_status("To Do"),
                TimelineItem::new("B", "Beta", date(2024, 2, 5), date(2024, 2, 20))
                    .with_status("In Progress"),
            ],
            today: date(2024, 2, 12),
        }
    }

    fn layout_cmd(group: GroupBy, json: bool) -> LayoutCommand {
        LayoutCommand {
            view: ViewArgs {
                zoom: Some(ZoomLevel::Week),
                group,
                sort: SortKey::StartDate,
            },
            filter: FilterArgs::default(),
            json,
        }
    }

    #[test]
    fn test_layout_table_shows_fractions() {
        let output = layout_cmd(GroupBy::None, false).execute(&ctx()).unwrap();
        assert!(output.contains("All Items (2)"));
        assert!(output.contains("0.474"), "width of A missing:\n{}", output);
        assert!(output.contains("0.211"), "left of B missing:\n{}", output);
        assert!(output.contains("0.789"), "width of B missing:\n{}", output);
    }

    #[test]
    fn test_layout_table_grouped() {
        let output = layout_cmd(GroupBy::Status, false).execute(&ctx()).unwrap();
        let todo = output.find("To Do (1)").unwrap();
        let in_progress = output.find("In Progress (1)").unwrap();
        assert!(todo < in_progress);
    }

    #[test]
    fn test_layout_json() {
        let output = layout_cmd(GroupBy::None, true).execute(&ctx()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["zoom"], "week");
        assert_eq!(value["buckets"].as_array().unwrap().len(), 3);
        assert_eq!(value["groups"][0]["rows"][1]["item"]["id"], "B");
    }

    #[test]
    fn test_layout_empty_selection() {
        let mut cmd = layout_cmd(GroupBy::None, false);
        cmd.filter.assignees = vec!["Nobody".to_string()];
        assert_eq!(cmd.execute(&ctx()).unwrap(), "No items to display.");
    }
}
