use std::path::PathBuf;
use thiserror::Error;

/// Error types for loading and validating timeline items
#[derive(Error, Debug)]
pub enum LayoutError {
    /// An item carries a date that is not a valid calendar date
    #[error("Item '{item_id}' has an invalid {field}: '{value}'")]
    InvalidDate {
        item_id: String,
        field: &'static str,
        value: String,
    },

    /// Malformed items document, or a layout that could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reading an items file
    #[error("Failed to read items file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error for invalid input or validation failure
    #[error("{message}")]
    ValidationError { message: String },
}

impl LayoutError {
    /// Get the full error message including a hint where one applies.
    ///
    /// This is useful for displaying detailed error information to users.
    pub fn full_message(&self) -> String {
        match self {
            LayoutError::InvalidDate { .. } => {
                format!("{} (expected YYYY-MM-DD)", self)
            }
            LayoutError::Io { path, .. } => format!(
                "{} (set --items or GTL_ITEMS to point at a different file; tried {})",
                self,
                path.display()
            ),
            other => other.to_string(),
        }
    }
}

/// Result type alias for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
