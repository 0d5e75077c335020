//! Block and slot-entry models for the daily schedule.
//!
//! A block occupies a contiguous run of fixed-width intervals. It is stored
//! once at its first interval (a start entry); every later interval of the
//! run holds a continuation entry pointing back at the start.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A scheduled item occupying a contiguous run of intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Predefined kind driving default color and duration, absent for
    /// free-form items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// User-editable display text.
    pub label: String,
    /// Number of intervals the block spans.
    pub duration_intervals: u32,
}

impl Block {
    /// Create a free-form block.
    pub fn new(label: impl Into<String>, duration_intervals: u32) -> Self {
        Self {
            category: None,
            label: label.into(),
            duration_intervals,
        }
    }

    /// Create a block belonging to a category.
    pub fn with_category(
        category: impl Into<String>,
        label: impl Into<String>,
        duration_intervals: u32,
    ) -> Self {
        Self {
            category: Some(category.into()),
            label: label.into(),
            duration_intervals,
        }
    }

    /// Validate the block data.
    pub fn validate(&self) -> Result<(), BlockValidationError> {
        if self.duration_intervals == 0 {
            return Err(BlockValidationError::ZeroDuration);
        }
        Ok(())
    }

    /// Exclusive end interval of the run starting at `start_interval`.
    pub fn end_interval(&self, start_interval: i32) -> i32 {
        start_interval + self.duration_intervals as i32
    }
}

/// Validation errors for [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockValidationError {
    #[error("block must span at least one interval")]
    ZeroDuration,
}

/// An incoming palette item: a block payload without a position.
///
/// The placement engine assigns the position and derives the duration from
/// the category and label, so the palette never dictates either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem {
    pub category: Option<String>,
    pub label: String,
}

impl PaletteItem {
    pub fn new(category: Option<&str>, label: impl Into<String>) -> Self {
        Self {
            category: category.map(str::to_owned),
            label: label.into(),
        }
    }
}

/// The value stored at one interval index of a day schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotEntry {
    /// A full block, stored at its first interval.
    Start(Block),
    /// A back-reference to the interval holding the start entry this slot
    /// belongs to.
    Continuation { original_interval: i32 },
}

impl SlotEntry {
    /// Returns the block if this is a start entry.
    pub fn as_start(&self) -> Option<&Block> {
        match self {
            SlotEntry::Start(block) => Some(block),
            SlotEntry::Continuation { .. } => None,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, SlotEntry::Start(_))
    }

    pub fn is_continuation(&self) -> bool {
        matches!(self, SlotEntry::Continuation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block() {
        let block = Block::new("Maths homework", 4);
        assert_eq!(block.label, "Maths homework");
        assert_eq!(block.duration_intervals, 4);
        assert!(block.category.is_none());
    }

    #[test]
    fn test_with_category() {
        let block = Block::with_category("Lesson", "Physics", 4);
        assert_eq!(block.category, Some("Lesson".to_string()));
        assert_eq!(block.label, "Physics");
    }

    #[test]
    fn test_validate_ok() {
        assert!(Block::new("Reading", 1).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_duration() {
        let block = Block::new("Reading", 0);
        assert_eq!(block.validate(), Err(BlockValidationError::ZeroDuration));
    }

    #[test]
    fn test_end_interval_exclusive() {
        let block = Block::new("Reading", 4);
        assert_eq!(block.end_interval(36), 40);
    }

    #[test]
    fn test_slot_entry_accessors() {
        let start = SlotEntry::Start(Block::new("Reading", 2));
        assert!(start.is_start());
        assert!(!start.is_continuation());
        assert_eq!(start.as_start().unwrap().label, "Reading");

        let cont = SlotEntry::Continuation {
            original_interval: 36,
        };
        assert!(cont.is_continuation());
        assert!(cont.as_start().is_none());
    }

    #[test]
    fn test_slot_entry_serde_tagged() {
        let start = SlotEntry::Start(Block::with_category("Lesson", "Physics", 4));
        let json = serde_json::to_string(&start).unwrap();
        assert!(json.contains("\"kind\":\"start\""));
        assert_eq!(serde_json::from_str::<SlotEntry>(&json).unwrap(), start);

        let cont = SlotEntry::Continuation {
            original_interval: 36,
        };
        let json = serde_json::to_string(&cont).unwrap();
        assert!(json.contains("\"kind\":\"continuation\""));
        assert_eq!(serde_json::from_str::<SlotEntry>(&json).unwrap(), cont);
    }

    #[test]
    fn test_block_serde_skips_absent_category() {
        let json = serde_json::to_string(&Block::new("Reading", 2)).unwrap();
        assert!(!json.contains("category"));
    }
}
