//! Chart command for drawing a text Gantt chart
//!
//! Implements the `gtl chart` command.

use clap::Args;
use ganttline_core::{LayoutError, LayoutResult, Timeline};

use super::{Context, FilterArgs, ViewArgs};
use crate::output::{MIN_CHART_WIDTH, format_chart};

/// Draw the (filtered) items as a text Gantt chart
#[derive(Debug, Args)]
pub struct ChartCommand {
    #[command(flatten)]
    pub view: ViewArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Total chart width in columns, labels included
    #[arg(short, long, default_value_t = 100)]
    pub width: u16,
}

impl ChartCommand {
    /// Execute the chart command.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ValidationError` for an empty search query or
    /// a width too small to draw bars in.
    pub fn execute(&self, ctx: &Context) -> LayoutResult<String> {
        if self.width < MIN_CHART_WIDTH {
            return Err(LayoutError::ValidationError {
                message: format!("Chart width must be at least {} columns", MIN_CHART_WIDTH),
            });
        }

        let items = self.filter.select(ctx)?;
        let timeline = Timeline::build(&items, &self.view.options(), ctx.today);
        Ok(format_chart(&timeline, self.width))
    }
}
