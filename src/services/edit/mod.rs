//! Edit session protocol: the state machine governing a block that is
//! accepting text input.
//!
//! States: `Idle → PendingFirstEdit → Editing → Idle`. A freshly placed
//! block enters `PendingFirstEdit` by consuming the one-shot [`EditGrab`]
//! its placement returned; the view acknowledges the grab to move into
//! `Editing` (clearing the displayed label for fresh entry). Because the
//! grab is a by-value token rather than a persisted flag, no follow-up
//! store write is needed to retire it and a re-render cannot re-enter the
//! edit state.

use crate::models::schedule::DaySchedule;
use crate::services::placement::{EditGrab, PlacementEngine, RelabelOutcome};

/// Where a block stands in the edit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// Block displays its stored label; no pending write.
    Idle,
    /// Freshly placed; waiting for the view to acknowledge the grab.
    PendingFirstEdit,
    /// Accepting text input.
    Editing,
}

/// An edit session for the block starting at one interval.
#[derive(Debug)]
pub struct EditSession {
    start_interval: i32,
    state: EditState,
}

impl EditSession {
    /// Consume a placement's one-shot grab, entering `PendingFirstEdit`.
    pub fn from_grab(grab: EditGrab) -> Self {
        Self {
            start_interval: grab.start_interval(),
            state: EditState::PendingFirstEdit,
        }
    }

    /// Start editing an existing block directly (e.g. double activation),
    /// entering `Editing` without going through `PendingFirstEdit`.
    pub fn begin(start_interval: i32) -> Self {
        Self {
            start_interval,
            state: EditState::Editing,
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn start_interval(&self) -> i32 {
        self.start_interval
    }

    /// Acknowledge a pending first edit, transitioning to `Editing`.
    ///
    /// Returns true when the view should clear the displayed label for
    /// fresh entry. Acknowledging in any other state changes nothing.
    pub fn acknowledge(&mut self) -> bool {
        if self.state == EditState::PendingFirstEdit {
            self.state = EditState::Editing;
            true
        } else {
            false
        }
    }

    /// Commit the entered text, exiting to `Idle`.
    ///
    /// The text is routed through the engine's relabel path, so a duration
    /// class change takes the grow/shrink route and an unchanged duration
    /// updates the label in place. Committing straight out of
    /// `PendingFirstEdit` is allowed; the session ends `Idle` either way.
    pub fn commit(
        &mut self,
        day: &mut DaySchedule,
        engine: &PlacementEngine,
        text: &str,
    ) -> RelabelOutcome {
        self.state = EditState::Idle;
        engine.relabel(day, self.start_interval, text)
    }

    /// Abandon the session without writing; the stored label is untouched.
    pub fn cancel(&mut self) {
        self.state = EditState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::block::PaletteItem;
    use crate::models::settings::GridSettings;
    use crate::services::duration::DurationResolver;

    fn engine() -> PlacementEngine {
        PlacementEngine::new(DurationResolver::new(GridSettings::default()))
    }

    #[test]
    fn test_fresh_placement_enters_pending_first_edit() {
        let engine = engine();
        let mut day = DaySchedule::new();
        let placement = engine.place(&mut day, 36, &PaletteItem::new(Some("Lesson"), "Physics"));

        let mut session = EditSession::from_grab(placement.edit);
        assert_eq!(session.state(), EditState::PendingFirstEdit);
        assert_eq!(session.start_interval(), 36);

        // First acknowledge clears the label and starts editing
        assert!(session.acknowledge());
        assert_eq!(session.state(), EditState::Editing);

        // The grab is one-shot: acknowledging again changes nothing
        assert!(!session.acknowledge());
        assert_eq!(session.state(), EditState::Editing);
    }

    #[test]
    fn test_commit_updates_label_in_place() {
        let engine = engine();
        let mut day = DaySchedule::new();
        let placement = engine.place(&mut day, 36, &PaletteItem::new(Some("Lesson"), ""));

        let mut session = EditSession::from_grab(placement.edit);
        session.acknowledge();
        let outcome = session.commit(&mut day, &engine, "Physics notes");

        assert_eq!(
            outcome,
            RelabelOutcome::Updated {
                start_interval: 36,
                duration_intervals: 4
            }
        );
        assert_eq!(session.state(), EditState::Idle);
        assert_eq!(day.start_at(36).unwrap().label, "Physics notes");
    }

    #[test]
    fn test_commit_with_carry_over_takes_resize_path() {
        let engine = engine();
        let mut day = DaySchedule::new();
        let placement = engine.place(&mut day, 36, &PaletteItem::new(None, ""));

        let mut session = EditSession::from_grab(placement.edit);
        session.acknowledge();
        let outcome = session.commit(&mut day, &engine, ">> finish coursework");

        assert!(matches!(
            outcome,
            RelabelOutcome::Resized {
                old_duration: 4,
                new_duration: 9,
                ..
            }
        ));
        assert_eq!(day.start_at(36).unwrap().duration_intervals, 9);
        assert!(day.check_integrity().is_ok());
    }

    #[test]
    fn test_commit_straight_from_pending_first_edit() {
        let engine = engine();
        let mut day = DaySchedule::new();
        let placement = engine.place(&mut day, 36, &PaletteItem::new(None, ""));

        // Focus lost before the view acknowledged; the session still
        // retires cleanly.
        let mut session = EditSession::from_grab(placement.edit);
        let outcome = session.commit(&mut day, &engine, "quick note");
        assert!(matches!(outcome, RelabelOutcome::Updated { .. }));
        assert_eq!(session.state(), EditState::Idle);
    }

    #[test]
    fn test_begin_edits_existing_block_directly() {
        let engine = engine();
        let mut day = DaySchedule::new();
        let _ = engine.place(&mut day, 40, &PaletteItem::new(Some("Break"), "Coffee"));

        let mut session = EditSession::begin(40);
        assert_eq!(session.state(), EditState::Editing);
        // Direct begin never came from a grab, so there is nothing to acknowledge
        assert!(!session.acknowledge());

        let outcome = session.commit(&mut day, &engine, "Long coffee");
        assert!(matches!(outcome, RelabelOutcome::Updated { .. }));
        assert_eq!(day.start_at(40).unwrap().label, "Long coffee");
    }

    #[test]
    fn test_cancel_leaves_stored_label_untouched() {
        let engine = engine();
        let mut day = DaySchedule::new();
        let _ = engine.place(&mut day, 36, &PaletteItem::new(Some("Lesson"), "Physics"));

        let mut session = EditSession::begin(36);
        session.cancel();
        assert_eq!(session.state(), EditState::Idle);
        assert_eq!(day.start_at(36).unwrap().label, "Physics");
    }

    #[test]
    fn test_commit_on_vanished_block_is_noop() {
        let engine = engine();
        let mut day = DaySchedule::new();
        let _ = engine.place(&mut day, 36, &PaletteItem::new(Some("Lesson"), "Physics"));

        let mut session = EditSession::begin(36);
        // The block is evicted while the session is open
        let _ = engine.place(&mut day, 36, &PaletteItem::new(Some("Exam"), "Mock"));
        let _ = engine.clear(&mut day, 36);

        let outcome = session.commit(&mut day, &engine, "orphan text");
        assert_eq!(outcome, RelabelOutcome::Noop);
        assert_eq!(session.state(), EditState::Idle);
    }
}
