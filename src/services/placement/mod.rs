//! Placement engine: the overlap-resolution and write path for one day
//! schedule.
//!
//! All writes to a [`DaySchedule`] happen here (or through the edit
//! session, which delegates here). Every operation runs to completion
//! before the next is accepted and leaves the day's occupancy invariants
//! intact: start runs never overlap, and a removed run takes all of its
//! continuations with it.

use log::debug;

use crate::models::block::{Block, PaletteItem, SlotEntry};
use crate::models::schedule::DaySchedule;
use crate::services::duration::DurationResolver;

/// One-shot signal that a freshly placed block should clear its label and
/// grab text input.
///
/// Returned alongside a placement and consumed exactly once by the caller
/// (see [`EditSession::from_grab`]); it is never written into the stored
/// entry, so a re-render cannot re-trigger the edit grab.
///
/// [`EditSession::from_grab`]: crate::services::edit::EditSession::from_grab
#[derive(Debug, PartialEq, Eq)]
pub struct EditGrab {
    start_interval: i32,
}

impl EditGrab {
    pub(crate) fn new(start_interval: i32) -> Self {
        Self { start_interval }
    }

    /// Interval of the start entry the grab belongs to.
    pub fn start_interval(&self) -> i32 {
        self.start_interval
    }
}

/// Result of a successful placement.
#[derive(Debug)]
#[must_use = "a placement carries the one-shot edit grab"]
pub struct Placement {
    pub start_interval: i32,
    pub duration_intervals: u32,
    /// Blocks evicted because their run intersected the target range,
    /// with their former start intervals.
    pub evicted: Vec<(i32, Block)>,
    /// One-shot "start editing" signal for the new block.
    pub edit: EditGrab,
}

/// Result of a clear request.
#[derive(Debug, Clone, PartialEq)]
pub enum ClearOutcome {
    /// A start entry and its continuations were removed.
    Removed { start_interval: i32, block: Block },
    /// Nothing to do: the interval was absent or held a continuation.
    Noop,
}

/// Result of a move request.
#[derive(Debug)]
pub enum MoveOutcome {
    Moved(Placement),
    /// No start entry at the source interval.
    Noop,
}

/// Result of a relabel request.
#[derive(Debug, Clone, PartialEq)]
pub enum RelabelOutcome {
    /// Duration class unchanged; the start entry was overwritten in place.
    Updated {
        start_interval: i32,
        duration_intervals: u32,
    },
    /// Duration class changed; the old run was removed and the block
    /// re-placed at the same start with the new span.
    Resized {
        start_interval: i32,
        old_duration: u32,
        new_duration: u32,
        evicted: Vec<(i32, Block)>,
    },
    /// No start entry at the interval.
    Noop,
}

/// Engine applying drop, clear, move, and relabel operations to a day.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    resolver: DurationResolver,
}

impl PlacementEngine {
    pub fn new(resolver: DurationResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &DurationResolver {
        &self.resolver
    }

    /// Remove the block starting at `start_interval` together with its
    /// continuations.
    ///
    /// Clearing must be requested at a block's start interval: an absent
    /// slot or a continuation is a silent no-op, not a fault.
    pub fn clear(&self, day: &mut DaySchedule, start_interval: i32) -> ClearOutcome {
        let Some(block) = day.start_at(start_interval).cloned() else {
            return ClearOutcome::Noop;
        };
        day.remove(start_interval);

        // Walk forward over the continuations referencing this start. The
        // walk also sweeps up fragments of a run whose persisted span
        // drifted from its content.
        let mut interval = start_interval + 1;
        while matches!(
            day.entry(interval),
            Some(SlotEntry::Continuation { original_interval }) if *original_interval == start_interval
        ) {
            day.remove(interval);
            interval += 1;
        }

        debug!(
            "cleared '{}' at interval {} ({} slots freed)",
            block.label,
            start_interval,
            interval - start_interval
        );
        ClearOutcome::Removed {
            start_interval,
            block,
        }
    }

    /// Place an incoming palette item at `start_interval`.
    ///
    /// The duration is resolved from the item's content; every existing
    /// block whose run intersects the target range is evicted whole
    /// (last-write-wins, no merge). A target range extending past the
    /// visible window is accepted; the window bound is presentational.
    pub fn place(&self, day: &mut DaySchedule, start_interval: i32, item: &PaletteItem) -> Placement {
        let (duration_intervals, evicted) = self.place_run(
            day,
            start_interval,
            item.category.clone(),
            item.label.clone(),
        );
        Placement {
            start_interval,
            duration_intervals,
            evicted,
            edit: EditGrab::new(start_interval),
        }
    }

    /// Move the block starting at `from` so that it starts at `to`.
    ///
    /// Expressed as clear + place on the same local map, so the persistence
    /// boundary sees a single replacement with no intermediate state.
    pub fn move_block(&self, day: &mut DaySchedule, from: i32, to: i32) -> MoveOutcome {
        match self.clear(day, from) {
            ClearOutcome::Noop => MoveOutcome::Noop,
            ClearOutcome::Removed { block, .. } => {
                let item = PaletteItem {
                    category: block.category,
                    label: block.label,
                };
                MoveOutcome::Moved(self.place(day, to, &item))
            }
        }
    }

    /// Apply a committed label to the block starting at `start_interval`.
    ///
    /// The duration is re-resolved from the new label. If it matches the
    /// stored span the start entry is overwritten in place; otherwise the
    /// old run is removed (using the old span) and the block re-placed at
    /// the same start, which prevents stale continuations when a block
    /// grows or shrinks.
    pub fn relabel(
        &self,
        day: &mut DaySchedule,
        start_interval: i32,
        new_label: &str,
    ) -> RelabelOutcome {
        let Some(current) = day.start_at(start_interval).cloned() else {
            return RelabelOutcome::Noop;
        };

        let new_duration = self
            .resolver
            .resolve(current.category.as_deref(), new_label);
        if new_duration == current.duration_intervals {
            day.insert_start(
                start_interval,
                Block {
                    label: new_label.to_string(),
                    ..current
                },
            );
            return RelabelOutcome::Updated {
                start_interval,
                duration_intervals: new_duration,
            };
        }

        let old_duration = current.duration_intervals;
        self.clear(day, start_interval);
        let (_, evicted) =
            self.place_run(day, start_interval, current.category, new_label.to_string());
        debug!(
            "resized block at interval {}: {} -> {} intervals",
            start_interval, old_duration, new_duration
        );
        RelabelOutcome::Resized {
            start_interval,
            old_duration,
            new_duration,
            evicted,
        }
    }

    /// Shared write path: resolve the duration, evict intersecting runs,
    /// write the start entry and its continuations.
    fn place_run(
        &self,
        day: &mut DaySchedule,
        start_interval: i32,
        category: Option<String>,
        label: String,
    ) -> (u32, Vec<(i32, Block)>) {
        let duration = self.resolver.resolve(category.as_deref(), &label);
        let evicted = self.evict_overlapping(day, start_interval, duration);

        let block = Block {
            category,
            label,
            duration_intervals: duration,
        };
        let end = block.end_interval(start_interval);
        day.insert_start(start_interval, block);
        for interval in start_interval + 1..end {
            day.insert_continuation(interval, start_interval);
        }

        debug!(
            "placed block at interval {} spanning {} intervals ({} evicted)",
            start_interval,
            duration,
            evicted.len()
        );
        (duration, evicted)
    }

    /// Evict every block whose run intersects `[start, start + duration)`.
    ///
    /// Only start entries are scanned; a drop landing on a continuation
    /// cell is thereby redirected to the start entry that owns it.
    fn evict_overlapping(
        &self,
        day: &mut DaySchedule,
        start_interval: i32,
        duration: u32,
    ) -> Vec<(i32, Block)> {
        let end = start_interval + duration as i32;
        let overlapping: Vec<i32> = day
            .starts()
            .filter(|(existing_start, block)| {
                let existing_end = block.end_interval(*existing_start);
                start_interval.max(*existing_start) < end.min(existing_end)
            })
            .map(|(existing_start, _)| existing_start)
            .collect();

        let mut evicted = Vec::new();
        for existing_start in overlapping {
            if let ClearOutcome::Removed { block, .. } = self.clear(day, existing_start) {
                evicted.push((existing_start, block));
            }
        }
        evicted
    }
}
