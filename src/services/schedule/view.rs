//! Render adapter for the day view.
//!
//! Answers, for each interval of the visible window, what the view should
//! do with the cell: draw a block spanning `span` slots, skip a covered
//! cell, or draw an empty drop target. Continuations with a dangling
//! back-reference are presented as free rather than surfaced as a fault.

use crate::models::block::{Block, SlotEntry};
use crate::models::schedule::DaySchedule;
use crate::services::grid::IntervalGrid;

/// What one visible interval holds.
#[derive(Debug, Clone, PartialEq)]
pub enum DaySlot {
    /// No entry; renders as a drop target.
    Free { interval: i32 },
    /// A block begins here and spans `span` slots downward.
    Starts {
        interval: i32,
        block: Block,
        span: u32,
    },
    /// Covered by the block starting at `original_interval`; renders
    /// nothing.
    Covered {
        interval: i32,
        original_interval: i32,
    },
}

/// Build the visible window's slot list for one day.
pub fn day_layout(day: &DaySchedule, grid: &IntervalGrid) -> Vec<DaySlot> {
    grid.visible_intervals()
        .map(|interval| match day.entry(interval) {
            Some(SlotEntry::Start(block)) => DaySlot::Starts {
                interval,
                block: block.clone(),
                span: block.duration_intervals,
            },
            Some(SlotEntry::Continuation { .. }) => match day.occupant_of(interval) {
                Some((original_interval, _)) => DaySlot::Covered {
                    interval,
                    original_interval,
                },
                None => DaySlot::Free { interval },
            },
            None => DaySlot::Free { interval },
        })
        .collect()
}
