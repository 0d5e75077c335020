// Test fixtures - reusable test data
// Shared dates and palette items for the integration suite

use chrono::NaiveDate;
use studyblocks::models::block::PaletteItem;

/// Initialize logging for test runs.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Monday, Mar 9 2026
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    /// Returns Tuesday, Mar 10 2026
    pub fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }
}

/// Sample palette items for testing
pub mod items {
    use super::*;

    pub fn physics_lesson() -> PaletteItem {
        PaletteItem::new(Some("Lesson"), "Physics")
    }

    pub fn coffee_break() -> PaletteItem {
        PaletteItem::new(Some("Break"), "Coffee")
    }

    pub fn carry_over_essay() -> PaletteItem {
        PaletteItem::new(None, ">> finish essay")
    }
}
