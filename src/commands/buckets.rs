//! Buckets command for listing axis ticks
//!
//! Implements the `gtl buckets` command.

use clap::Args;
use ganttline_core::{LayoutResult, TimeSpan, ZoomLevel, generate_buckets};
use tracing::debug;

use super::{Context, FilterArgs, parse_zoom};
use crate::output::format_bucket_table;

/// List the axis buckets covering the (filtered) items
#[derive(Debug, Args)]
pub struct BucketsCommand {
    /// Zoom level: day, week, month, quarter, year (picked from the span if omitted)
    #[arg(short, long, value_parser = parse_zoom)]
    pub zoom: Option<ZoomLevel>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

impl BucketsCommand {
    /// Execute the buckets command.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ValidationError` for an empty search query.
    pub fn execute(&self, ctx: &Context) -> LayoutResult<String> {
        let items = self.filter.select(ctx)?;

        let Some(span) = TimeSpan::covering(&items) else {
            return Ok("No items to display.".to_string());
        };

        let zoom = self.zoom.unwrap_or_else(|| ZoomLevel::auto_for_span(&span));
        debug!("Listing {} buckets for {} items", zoom, items.len());

        let buckets = generate_buckets(&span, zoom);
        Ok(format_bucket_table(&span, zoom, &buckets))
    }
}
