//! End-to-end integration tests for the Ganttline CLI
//!
//! This test suite loads items files from isolated temp directories and
//! runs them through the CLI command interface.
//!
//! Tests are organized into modules:
//! - `loading` - Items file parsing and rejection of invalid dates
//! - `buckets` - Axis bucket listing
//! - `layout` - Positions, grouping, and filters
//! - `chart` - Text chart rendering
//! - `error_cases` - Error handling tests

mod common;

use common::*;
use ganttline::commands::{FilterArgs, LayoutCommand, ViewArgs};
use ganttline_core::{GroupBy, LayoutError, SortKey, ZoomLevel, load_items};

fn layout_json(ctx: &TestContext, view: ViewArgs, filter: FilterArgs) -> serde_json::Value {
    let output = layout_cmd(view, filter)
        .execute(&ctx.context(date(2024, 2, 12)))
        .unwrap();
    serde_json::from_str(&output).unwrap()
}

fn row_ids(group: &serde_json::Value) -> Vec<String> {
    group["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["item"]["id"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// LOADING TESTS
// =============================================================================

mod loading {
    use super::*;

    #[test]
    fn test_load_rejects_only_invalid_items() {
        let ctx = TestContext::new();
        let parsed = load_items(&ctx.items_path).unwrap();

        let ids: Vec<&str> = parsed.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["API-1", "API-2", "REL"]);
        assert_eq!(parsed.rejected.len(), 1);
        assert!(matches!(
            &parsed.rejected[0],
            LayoutError::InvalidDate { item_id, field: "start_date", .. } if item_id == "BAD"
        ));
    }

    #[test]
    fn test_load_accepts_camel_case_dates() {
        let ctx = TestContext::new();
        let parsed = load_items(&ctx.items_path).unwrap();
        let api2 = parsed.items.iter().find(|i| i.id == "API-2").unwrap();
        assert_eq!(api2.start_date, date(2024, 2, 5));
        assert_eq!(api2.end_date, date(2024, 2, 20));
    }
}

// =============================================================================
// BUCKETS TESTS
// =============================================================================

mod buckets {
    use super::*;

    #[test]
    fn test_buckets_auto_zoom_picks_week() {
        let ctx = TestContext::new();
        let output = buckets_cmd(None)
            .execute(&ctx.context(date(2024, 2, 12)))
            .unwrap();

        assert!(output.contains("zoom: week, 3 buckets"), "got:\n{}", output);
        assert!(output.contains("2024-02-15"));
    }

    #[test]
    fn test_buckets_month_zoom() {
        let ctx = TestContext::new();
        let output = buckets_cmd(Some(ZoomLevel::Month))
            .execute(&ctx.context(date(2024, 2, 12)))
            .unwrap();

        assert!(output.contains("1 buckets"), "got:\n{}", output);
        assert!(output.contains("Feb 24"));
    }
}

// =============================================================================
// LAYOUT TESTS
// =============================================================================

mod layout {
    use super::*;

    #[test]
    fn test_layout_positions() {
        let ctx = TestContext::new();
        let value = layout_json(
            &ctx,
            view(Some(ZoomLevel::Week), GroupBy::None, SortKey::StartDate),
            FilterArgs::default(),
        );

        let group = &value["groups"][0];
        assert_eq!(group["label"], "All Items");
        assert_eq!(row_ids(group), vec!["API-1", "API-2", "REL"]);

        let first = &group["rows"][0]["position"];
        assert_eq!(first["left"].as_f64().unwrap(), 0.0);
        assert!((first["width"].as_f64().unwrap() - 9.0 / 19.0).abs() < 1e-9);

        // A milestone on the last day keeps a visible sliver inside the axis
        let milestone = &group["rows"][2]["position"];
        assert!((milestone["left"].as_f64().unwrap() - 0.99).abs() < 1e-9);
        assert!((milestone["width"].as_f64().unwrap() - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_layout_today_marker() {
        let ctx = TestContext::new();
        let value = layout_json(
            &ctx,
            view(None, GroupBy::None, SortKey::StartDate),
            FilterArgs::default(),
        );
        let marker = value["today_marker"].as_f64().unwrap();
        assert!((marker - 11.0 / 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_layout_group_by_project() {
        let ctx = TestContext::new();
        let value = layout_json(
            &ctx,
            view(None, GroupBy::Project, SortKey::StartDate),
            FilterArgs::default(),
        );

        let groups = value["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0]["label"], "Backend");
        assert_eq!(row_ids(&groups[0]), vec!["API-1", "API-2"]);
        assert_eq!(groups[1]["label"], "Ops");
    }

    #[test]
    fn test_layout_group_by_assignee_uses_fallback() {
        let ctx = TestContext::new();
        let value = layout_json(
            &ctx,
            view(None, GroupBy::Assignee, SortKey::StartDate),
            FilterArgs::default(),
        );

        let labels: Vec<&str> = value["groups"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["Ada", "Unassigned", "Grace"]);
    }

    #[test]
    fn test_layout_sort_by_end_date() {
        let ctx = TestContext::new();
        let value = layout_json(
            &ctx,
            view(None, GroupBy::Project, SortKey::EndDate),
            FilterArgs::default(),
        );
        assert_eq!(row_ids(&value["groups"][0]), vec!["API-1", "API-2"]);
    }

    #[test]
    fn test_layout_filter_by_status() {
        let ctx = TestContext::new();
        let value = layout_json(
            &ctx,
            view(None, GroupBy::None, SortKey::StartDate),
            FilterArgs {
                statuses: vec!["done".to_string()],
                ..Default::default()
            },
        );

        assert_eq!(row_ids(&value["groups"][0]), vec!["API-1"]);
        // Span shrinks to the remaining item
        assert_eq!(value["span"]["max"], "2024-02-10");
    }

    #[test]
    fn test_layout_filter_by_window() {
        let ctx = TestContext::new();
        let value = layout_json(
            &ctx,
            view(None, GroupBy::None, SortKey::StartDate),
            FilterArgs {
                from: Some(date(2024, 2, 15)),
                ..Default::default()
            },
        );
        assert_eq!(row_ids(&value["groups"][0]), vec!["API-2", "REL"]);
    }

    #[test]
    fn test_layout_search() {
        let ctx = TestContext::new();
        let value = layout_json(
            &ctx,
            view(None, GroupBy::None, SortKey::StartDate),
            FilterArgs {
                search: Some("implement".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(row_ids(&value["groups"][0]), vec!["API-2"]);
    }

    #[test]
    fn test_layout_empty_file() {
        let ctx = TestContext::with_items("[]");
        let output = LayoutCommand {
            view: view(None, GroupBy::None, SortKey::StartDate),
            filter: FilterArgs::default(),
            json: false,
        }
        .execute(&ctx.context(date(2024, 2, 12)))
        .unwrap();
        assert_eq!(output, "No items to display.");
    }
}

// =============================================================================
// CHART TESTS
// =============================================================================

mod chart {
    use super::*;

    #[test]
    fn test_chart_grouped_by_project() {
        let ctx = TestContext::new();
        let output = chart_cmd(view(None, GroupBy::Project, SortKey::StartDate), 80)
            .execute(&ctx.context(date(2024, 2, 12)))
            .unwrap();

        let backend = output.find("Backend (2)").unwrap();
        let ops = output.find("Ops (1)").unwrap();
        assert!(backend < ops);

        let bar_lines: Vec<&str> = output.lines().filter(|l| l.contains('\u{2588}')).collect();
        assert_eq!(bar_lines.len(), 3);
        assert!(bar_lines[2].starts_with("REL Release"));
        assert!(bar_lines[2].ends_with('\u{2588}'));
    }

    #[test]
    fn test_chart_lines_fit_width() {
        let ctx = TestContext::new();
        let output = chart_cmd(view(None, GroupBy::None, SortKey::StartDate), 50)
            .execute(&ctx.context(date(2024, 2, 12)))
            .unwrap();

        for line in output.lines() {
            assert!(line.chars().count() < 50, "line too wide: {:?}", line);
        }
    }
}

// =============================================================================
// ERROR CASES
// =============================================================================

mod error_cases {
    use super::*;

    #[test]
    fn test_malformed_document() {
        let ctx = TestContext::with_items("{\"id\": \"not an array\"}");
        let result = load_items(&ctx.items_path);
        assert!(matches!(result, Err(LayoutError::Json(_))));
    }

    #[test]
    fn test_blank_search_rejected() {
        let ctx = TestContext::new();
        let result = layout_cmd(
            view(None, GroupBy::None, SortKey::StartDate),
            FilterArgs {
                search: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .execute(&ctx.context(date(2024, 2, 12)));

        match result {
            Err(LayoutError::ValidationError { message }) => {
                assert_eq!(message, "Search query cannot be empty");
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }
}
