//! Duration resolver: the single source of truth for how many intervals a
//! block spans.
//!
//! Duration is re-derived from the block's current content on every
//! placement and relabel, never cached, so a label edit can grow or shrink
//! a block without the stored span drifting out of sync.

use crate::models::category::{default_categories, BlockCategory};
use crate::models::settings::GridSettings;

/// Resolves a block's interval count from its category and label.
#[derive(Debug, Clone)]
pub struct DurationResolver {
    settings: GridSettings,
    categories: Vec<BlockCategory>,
}

impl DurationResolver {
    /// Create a resolver over the default category palette.
    pub fn new(settings: GridSettings) -> Self {
        Self::with_categories(settings, default_categories())
    }

    /// Create a resolver over a custom category palette.
    pub fn with_categories(settings: GridSettings, categories: Vec<BlockCategory>) -> Self {
        Self {
            settings,
            categories,
        }
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Resolve the duration for a block with the given category and label.
    ///
    /// Precedence: carry-over marker, then category default, then the
    /// global default. An unknown category name falls back to the global
    /// default; placement never fails on palette data the engine does not
    /// control.
    pub fn resolve(&self, category: Option<&str>, label: &str) -> u32 {
        if self.is_carry_over(label) {
            return self.settings.carry_over_intervals;
        }
        if let Some(name) = category {
            if let Some(cat) = self.categories.iter().find(|c| c.name == name) {
                return cat.default_intervals;
            }
        }
        self.settings.default_intervals
    }

    /// Whether a label carries the reserved carry-over prefix.
    pub fn is_carry_over(&self, label: &str) -> bool {
        label
            .trim_start()
            .starts_with(&self.settings.carry_over_marker)
    }
}
