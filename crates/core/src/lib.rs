//! Timeline layout engine for Ganttline
//!
//! Maps dated items onto a fractional horizontal axis, generates labeled
//! axis buckets at a chosen zoom level, and groups items into display
//! sections. Every operation is a pure function of its inputs.

pub mod buckets;
pub mod error;
pub mod filter;
pub mod grouping;
pub mod input;
pub mod layout;
pub mod models;
pub mod position;

pub use buckets::generate_buckets;
pub use error::{LayoutError, LayoutResult};
pub use filter::ItemFilter;
pub use grouping::{ALL_ITEMS_LABEL, GroupBy, SortKey, group_and_sort};
pub use input::{ParsedItems, load_items, parse_date_str, parse_items};
pub use layout::{GroupLayout, LayoutOptions, RowLayout, Timeline};
pub use models::{Bucket, TimeSpan, TimelineItem, ZoomLevel};
pub use position::{MIN_VISIBLE_FRACTION, Position, compute_position, marker_fraction};

static_assertions::assert_impl_all!(Timeline: Send, Sync);
static_assertions::assert_impl_all!(LayoutError: Send, Sync);
