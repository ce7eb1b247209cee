//! Runtime configuration for the gtl binary
//!
//! Settings are resolved with the priority command line flag, then
//! environment variable, then a default.

use std::path::PathBuf;
use std::process::Command;

use chrono::{Local, NaiveDate};
use ganttline_core::{LayoutError, LayoutResult, parse_date_str};

/// Environment variable naming the items file
pub const GTL_ITEMS_ENV: &str = "GTL_ITEMS";

/// Environment variable overriding today's date
pub const GTL_TODAY_ENV: &str = "GTL_TODAY";

/// Default items path relative to project root or current working directory
pub const DEFAULT_ITEMS_PATH: &str = ".gtl/items.json";

/// Get the items path from command line, environment variable, or default.
///
/// Priority:
/// 1. Command line --items argument
/// 2. GTL_ITEMS environment variable (if non-empty)
/// 3. Default path (<project root>/.gtl/items.json)
pub fn resolve_items_path(cli_items: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_items {
        return path;
    }

    if let Ok(env_path) = std::env::var(GTL_ITEMS_ENV)
        && !env_path.is_empty()
    {
        return PathBuf::from(env_path);
    }

    default_items_path()
}

/// Get the date treated as "today".
///
/// Priority:
/// 1. Command line --today argument
/// 2. GTL_TODAY environment variable (if non-empty)
/// 3. The local calendar date
///
/// # Errors
///
/// Returns `LayoutError::ValidationError` if GTL_TODAY is set to
/// something that is not a date.
pub fn resolve_today(cli_today: Option<NaiveDate>) -> LayoutResult<NaiveDate> {
    if let Some(today) = cli_today {
        return Ok(today);
    }

    if let Ok(value) = std::env::var(GTL_TODAY_ENV)
        && !value.is_empty()
    {
        return parse_date_str(&value).ok_or_else(|| LayoutError::ValidationError {
            message: format!("{} must be a date (YYYY-MM-DD), got '{}'", GTL_TODAY_ENV, value),
        });
    }

    Ok(Local::now().date_naive())
}

/// Default items path based on the project root.
///
/// Falls back to a path relative to the current working directory when
/// not inside a git repository.
pub fn default_items_path() -> PathBuf {
    let base_path = find_project_root().unwrap_or_else(|| PathBuf::from("."));
    base_path.join(DEFAULT_ITEMS_PATH)
}

/// Find the project root by running `git rev-parse --show-toplevel`.
///
/// Returns `None` if not in a git repository or the command fails.
pub fn find_project_root() -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;

    if output.status.success() {
        let path_str = String::from_utf8(output.stdout).ok()?;
        Some(PathBuf::from(path_str.trim()))
    } else {
        None
    }
}
