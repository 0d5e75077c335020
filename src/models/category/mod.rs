//! Block categories for the palette.
//!
//! Categories group blocks by kind (Lesson, Break, etc.) and carry the
//! default color and default duration a freshly dropped block of that kind
//! receives.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A predefined block kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCategory {
    /// Display name of the category (must be unique).
    pub name: String,
    /// Hex color code for blocks of this kind (e.g., "#3B82F6").
    pub color: String,
    /// Default number of intervals a new block of this kind spans.
    pub default_intervals: u32,
}

impl BlockCategory {
    /// Create a new category.
    pub fn new(name: impl Into<String>, color: impl Into<String>, default_intervals: u32) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            default_intervals,
        }
    }

    /// Validate the category data.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if !is_valid_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor);
        }
        if self.default_intervals == 0 {
            return Err(CategoryValidationError::ZeroDuration);
        }
        Ok(())
    }
}

/// Validation errors for [`BlockCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CategoryValidationError {
    #[error("category name cannot be empty")]
    EmptyName,
    #[error("invalid color format (use hex like #FF0000)")]
    InvalidColor,
    #[error("category default duration must be at least one interval")]
    ZeroDuration,
}

/// Check if a string is a valid hex color code.
fn is_valid_hex_color(color: &str) -> bool {
    let color = color.trim();
    if !color.starts_with('#') {
        return false;
    }
    let hex = &color[1..];
    matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Default categories that ship with the planner palette.
pub fn default_categories() -> Vec<BlockCategory> {
    vec![
        BlockCategory::new("Lesson", "#3B82F6", 4),
        BlockCategory::new("Revision", "#8B5CF6", 4),
        BlockCategory::new("Homework", "#F59E0B", 4),
        BlockCategory::new("Break", "#10B981", 2),
        BlockCategory::new("Exam", "#DC2626", 8),
    ]
}
