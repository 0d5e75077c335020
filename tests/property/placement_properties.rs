// Property-based tests for the placement engine
// Random operation sequences must never break the day's occupancy
// invariants: disjoint start runs and resolvable continuations.

use proptest::prelude::*;

use studyblocks::models::block::PaletteItem;
use studyblocks::models::schedule::DaySchedule;
use studyblocks::models::settings::GridSettings;
use studyblocks::services::duration::DurationResolver;
use studyblocks::services::placement::{ClearOutcome, PlacementEngine};

const CATEGORIES: [&str; 5] = ["Lesson", "Revision", "Homework", "Break", "Exam"];

#[derive(Debug, Clone)]
enum Op {
    Place {
        start: i32,
        category: Option<usize>,
        carry_over: bool,
    },
    Clear {
        start: i32,
    },
    Move {
        from: i32,
        to: i32,
    },
    Relabel {
        start: i32,
        carry_over: bool,
    },
}

fn interval() -> impl Strategy<Value = i32> {
    // Straddles the visible window [36, 76) on both sides
    30..90i32
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (interval(), prop::option::of(0..CATEGORIES.len()), any::<bool>()).prop_map(
            |(start, category, carry_over)| Op::Place {
                start,
                category,
                carry_over,
            }
        ),
        interval().prop_map(|start| Op::Clear { start }),
        (interval(), interval()).prop_map(|(from, to)| Op::Move { from, to }),
        (interval(), any::<bool>()).prop_map(|(start, carry_over)| Op::Relabel {
            start,
            carry_over,
        }),
    ]
}

fn apply(engine: &PlacementEngine, day: &mut DaySchedule, op: &Op) {
    match op {
        Op::Place {
            start,
            category,
            carry_over,
        } => {
            let label = if *carry_over { ">> task" } else { "task" };
            let item = PaletteItem::new(category.map(|i| CATEGORIES[i]), label);
            let _ = engine.place(day, *start, &item);
        }
        Op::Clear { start } => {
            let _ = engine.clear(day, *start);
        }
        Op::Move { from, to } => {
            let _ = engine.move_block(day, *from, *to);
        }
        Op::Relabel { start, carry_over } => {
            let label = if *carry_over { ">> edited" } else { "edited" };
            let _ = engine.relabel(day, *start, label);
        }
    }
}

proptest! {
    /// After every operation of a random sequence, the day must satisfy
    /// continuation integrity and the start runs must partition the
    /// occupied intervals.
    #[test]
    fn prop_invariants_hold_under_random_ops(
        ops in prop::collection::vec(op_strategy(), 0..40)
    ) {
        let engine = PlacementEngine::new(DurationResolver::new(GridSettings::default()));
        let mut day = DaySchedule::new();

        for op in &ops {
            apply(&engine, &mut day, op);
            prop_assert!(day.check_integrity().is_ok(), "after {:?}: {:?}", op, day);

            // Partition: every occupied interval belongs to exactly one run
            let covered: usize = day
                .starts()
                .map(|(_, block)| block.duration_intervals as usize)
                .sum();
            prop_assert_eq!(covered, day.len());
        }
    }

    /// Clearing a start interval twice is the same as clearing it once, and
    /// clearing continuations or free slots never changes the day.
    #[test]
    fn prop_clear_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 0..20),
        target in 30..90i32,
    ) {
        let engine = PlacementEngine::new(DurationResolver::new(GridSettings::default()));
        let mut day = DaySchedule::new();
        for op in &ops {
            apply(&engine, &mut day, op);
        }

        let _ = engine.clear(&mut day, target);
        let after_first = day.clone();
        let second = engine.clear(&mut day, target);
        prop_assert_eq!(second, ClearOutcome::Noop);
        prop_assert_eq!(&day, &after_first);
    }

    /// Placing at any interval leaves that interval holding the new block,
    /// regardless of what the day held before.
    #[test]
    fn prop_place_wins_at_target(
        ops in prop::collection::vec(op_strategy(), 0..20),
        start in 30..90i32,
    ) {
        let engine = PlacementEngine::new(DurationResolver::new(GridSettings::default()));
        let mut day = DaySchedule::new();
        for op in &ops {
            apply(&engine, &mut day, op);
        }

        let item = PaletteItem::new(None, "winner");
        let placement = engine.place(&mut day, start, &item);
        prop_assert_eq!(placement.start_interval, start);
        prop_assert_eq!(day.start_at(start).map(|b| b.label.as_str()), Some("winner"));
    }
}
