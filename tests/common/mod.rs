//! Test infrastructure for integration tests
//!
//! Provides isolated items files and command builder helpers.
//! Each test gets its own temp directory to ensure no shared state.

use std::path::PathBuf;

use chrono::NaiveDate;
use ganttline::commands::{
    BucketsCommand, ChartCommand, Context, FilterArgs, LayoutCommand, ViewArgs,
};
use ganttline_core::{GroupBy, SortKey, ZoomLevel, load_items};

/// Items used by most tests: two overlapping tasks, one milestone, and
/// one entry with an impossible date.
pub const SAMPLE_ITEMS: &str = r#"[
    {
        "id": "API-1",
        "label": "Design API",
        "start_date": "2024-02-01",
        "end_date": "2024-02-10",
        "project": "Backend",
        "assignee": "Ada",
        "status": "Done",
        "priority": "high"
    },
    {
        "id": "API-2",
        "label": "Implement API",
        "startDate": "2024-02-05",
        "endDate": "2024-02-20",
        "project": "Backend",
        "status": "In Progress"
    },
    {
        "id": "REL",
        "label": "Release",
        "start_date": "2024-02-20",
        "end_date": "2024-02-20",
        "project": "Ops",
        "assignee": "Grace",
        "status": "To Do"
    },
    {
        "id": "BAD",
        "label": "Bad dates",
        "start_date": "2024-02-30",
        "end_date": "2024-03-02"
    }
]"#;

/// Test context containing an items file in an isolated temp directory
pub struct TestContext {
    pub temp_dir: PathBuf,
    pub items_path: PathBuf,
}

impl TestContext {
    /// Create a new test context with the given items document.
    ///
    /// Each call creates a uniquely named temp directory using process ID,
    /// thread ID, and nanosecond timestamp to guarantee isolation.
    pub fn with_items(json: &str) -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "gtl-integration-test-{}-{:?}-{}",
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&temp_dir).unwrap();

        let items_path = temp_dir.join("items.json");
        std::fs::write(&items_path, json).unwrap();

        Self {
            temp_dir,
            items_path,
        }
    }

    /// Create a context with the sample items.
    pub fn new() -> Self {
        Self::with_items(SAMPLE_ITEMS)
    }

    /// Load the items file into a command context for the given day.
    pub fn context(&self, today: NaiveDate) -> Context {
        let parsed = load_items(&self.items_path).unwrap();
        Context {
            items: parsed.items,
            today,
        }
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Auto-cleanup on drop
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

// =============================================================================
// Command Builder Helpers
// =============================================================================

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn view(zoom: Option<ZoomLevel>, group: GroupBy, sort: SortKey) -> ViewArgs {
    ViewArgs { zoom, group, sort }
}

pub fn buckets_cmd(zoom: Option<ZoomLevel>) -> BucketsCommand {
    BucketsCommand {
        zoom,
        filter: FilterArgs::default(),
    }
}

pub fn layout_cmd(view: ViewArgs, filter: FilterArgs) -> LayoutCommand {
    LayoutCommand {
        view,
        filter,
        json: true,
    }
}

pub fn chart_cmd(view: ViewArgs, width: u16) -> ChartCommand {
    ChartCommand {
        view,
        filter: FilterArgs::default(),
        width,
    }
}
