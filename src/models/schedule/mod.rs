//! Day schedule: the sparse interval → slot-entry map for one calendar date.
//!
//! The map owns the occupancy invariants: start entries never overlap, and
//! every continuation points back at the start entry whose run covers it.
//! Only the placement engine writes entries; everything else reads through
//! the lookup methods, which tolerate dangling continuations left behind by
//! external edits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::block::{Block, SlotEntry};

/// The complete interval → entry mapping for one calendar date.
///
/// Created lazily (empty) the first time a date is scheduled against. A day
/// is persisted and replaced as a whole document, never patched per slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySchedule {
    entries: BTreeMap<i32, SlotEntry>,
}

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of occupied intervals (starts and continuations).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The raw entry at an interval, if any.
    pub fn entry(&self, interval: i32) -> Option<&SlotEntry> {
        self.entries.get(&interval)
    }

    /// The block that begins exactly at this interval, if any.
    ///
    /// This is the view-layer query: a `Some` answer means "render a cell of
    /// `duration_intervals` height here"; continuation intervals answer
    /// `None` and render nothing.
    pub fn start_at(&self, interval: i32) -> Option<&Block> {
        self.entries.get(&interval).and_then(SlotEntry::as_start)
    }

    /// The block occupying this interval, with its start interval.
    ///
    /// Resolves continuations back to their start entry. A continuation
    /// whose back-reference no longer resolves to a covering start entry is
    /// treated as free rather than propagated as a fault.
    pub fn occupant_of(&self, interval: i32) -> Option<(i32, &Block)> {
        match self.entries.get(&interval)? {
            SlotEntry::Start(block) => Some((interval, block)),
            SlotEntry::Continuation { original_interval } => {
                let block = self.start_at(*original_interval)?;
                if *original_interval < interval && block.end_interval(*original_interval) > interval
                {
                    Some((*original_interval, block))
                } else {
                    None
                }
            }
        }
    }

    /// Iterate over every start entry in ascending interval order.
    pub fn starts(&self) -> impl Iterator<Item = (i32, &Block)> {
        self.entries
            .iter()
            .filter_map(|(interval, entry)| entry.as_start().map(|block| (*interval, block)))
    }

    // Writers below are reserved for the placement engine.

    pub(crate) fn insert_start(&mut self, interval: i32, block: Block) {
        self.entries.insert(interval, SlotEntry::Start(block));
    }

    pub(crate) fn insert_continuation(&mut self, interval: i32, original_interval: i32) {
        self.entries
            .insert(interval, SlotEntry::Continuation { original_interval });
    }

    pub(crate) fn remove(&mut self, interval: i32) -> Option<SlotEntry> {
        self.entries.remove(&interval)
    }

    /// Verify the structural invariants; used by tests and debug assertions.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        for (&interval, entry) in &self.entries {
            match entry {
                SlotEntry::Start(block) => {
                    if block.duration_intervals == 0 {
                        return Err(IntegrityError::ZeroDurationStart { at: interval });
                    }
                    for covered in interval + 1..block.end_interval(interval) {
                        match self.entries.get(&covered) {
                            Some(SlotEntry::Continuation { original_interval })
                                if *original_interval == interval => {}
                            Some(SlotEntry::Start(_)) => {
                                return Err(IntegrityError::OverlappingStarts {
                                    first: interval,
                                    second: covered,
                                });
                            }
                            _ => {
                                return Err(IntegrityError::MissingContinuation {
                                    start: interval,
                                    at: covered,
                                });
                            }
                        }
                    }
                }
                SlotEntry::Continuation { original_interval } => {
                    if *original_interval >= interval {
                        return Err(IntegrityError::ForwardReference {
                            at: interval,
                            original: *original_interval,
                        });
                    }
                    match self.start_at(*original_interval) {
                        Some(block) if block.end_interval(*original_interval) > interval => {}
                        _ => {
                            return Err(IntegrityError::DanglingContinuation {
                                at: interval,
                                original: *original_interval,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Structural invariant violations detected by [`DaySchedule::check_integrity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("start entry at interval {at} spans zero intervals")]
    ZeroDurationStart { at: i32 },
    #[error("start entries at intervals {first} and {second} overlap")]
    OverlappingStarts { first: i32, second: i32 },
    #[error("run starting at interval {start} has no continuation at interval {at}")]
    MissingContinuation { start: i32, at: i32 },
    #[error("continuation at interval {at} references {original}, which is not behind it")]
    ForwardReference { at: i32, original: i32 },
    #[error("continuation at interval {at} references {original}, which does not cover it")]
    DanglingContinuation { at: i32, original: i32 },
}
