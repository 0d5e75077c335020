//! Schedule store service entry point.
//!
//! The surface the planner front end calls. Each operation mutates the
//! local day map and then issues exactly one acknowledged save, so
//! composite operations like move (clear + place) reach the store as a
//! single replacement. The next local mutation always starts from the
//! most recent local state, never from a remote echo; on a save failure
//! the local state is kept and the error is surfaced to the caller.

use std::collections::HashMap;

use anyhow::Result;
use chrono::NaiveDate;
use log::warn;
use rusqlite::Connection;

use crate::models::block::PaletteItem;
use crate::models::schedule::DaySchedule;
use crate::models::settings::GridSettings;
use crate::services::duration::DurationResolver;
use crate::services::edit::EditSession;
use crate::services::grid::IntervalGrid;
use crate::services::placement::{
    ClearOutcome, MoveOutcome, Placement, PlacementEngine, RelabelOutcome,
};

pub mod repository;
pub mod view;

use repository::ScheduleRepository;
use view::DaySlot;

/// Service for managing day schedules stored in SQLite.
pub struct ScheduleService<'a> {
    repo: ScheduleRepository<'a>,
    engine: PlacementEngine,
    grid: IntervalGrid,
    days: HashMap<NaiveDate, DaySchedule>,
}

impl<'a> ScheduleService<'a> {
    /// Create a new ScheduleService over a database connection.
    pub fn new(conn: &'a Connection, settings: GridSettings) -> Self {
        Self {
            repo: ScheduleRepository::new(conn),
            engine: PlacementEngine::new(DurationResolver::new(settings.clone())),
            grid: IntervalGrid::new(settings),
            days: HashMap::new(),
        }
    }

    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    pub fn grid(&self) -> &IntervalGrid {
        &self.grid
    }

    /// Current local schedule for a date, loading it lazily.
    pub fn day(&mut self, date: NaiveDate) -> Result<&DaySchedule> {
        self.ensure_loaded(date)?;
        Ok(self.days.entry(date).or_default())
    }

    /// Drop a palette item onto a day at `start_interval`.
    pub fn drop_block(
        &mut self,
        date: NaiveDate,
        start_interval: i32,
        item: &PaletteItem,
    ) -> Result<Placement> {
        self.ensure_loaded(date)?;
        let day = self.days.entry(date).or_default();
        let placement = self.engine.place(day, start_interval, item);
        self.save(date)?;
        Ok(placement)
    }

    /// Clear the block starting at `start_interval`, if any.
    pub fn clear_block(&mut self, date: NaiveDate, start_interval: i32) -> Result<ClearOutcome> {
        self.ensure_loaded(date)?;
        let day = self.days.entry(date).or_default();
        let outcome = self.engine.clear(day, start_interval);
        if matches!(outcome, ClearOutcome::Removed { .. }) {
            self.save(date)?;
        }
        Ok(outcome)
    }

    /// Move the block starting at `from` so that it starts at `to`.
    ///
    /// Both halves of the move land in one saved document.
    pub fn move_block(&mut self, date: NaiveDate, from: i32, to: i32) -> Result<MoveOutcome> {
        self.ensure_loaded(date)?;
        let day = self.days.entry(date).or_default();
        let outcome = self.engine.move_block(day, from, to);
        if matches!(outcome, MoveOutcome::Moved(_)) {
            self.save(date)?;
        }
        Ok(outcome)
    }

    /// Commit an edit session's text against a day.
    pub fn commit_label(
        &mut self,
        date: NaiveDate,
        session: &mut EditSession,
        text: &str,
    ) -> Result<RelabelOutcome> {
        self.ensure_loaded(date)?;
        let day = self.days.entry(date).or_default();
        let outcome = session.commit(day, &self.engine, text);
        if outcome != RelabelOutcome::Noop {
            self.save(date)?;
        }
        Ok(outcome)
    }

    /// Slot list of the visible window for rendering one day.
    pub fn day_layout(&mut self, date: NaiveDate) -> Result<Vec<DaySlot>> {
        self.ensure_loaded(date)?;
        let day = self.days.entry(date).or_default();
        Ok(view::day_layout(day, &self.grid))
    }

    fn ensure_loaded(&mut self, date: NaiveDate) -> Result<()> {
        if !self.days.contains_key(&date) {
            let day = self.repo.load_day(date)?;
            self.days.insert(date, day);
        }
        Ok(())
    }

    /// Persist the local day map. Local state is not rolled back on
    /// failure; the caller surfaces the error to the user and a retry
    /// re-issues the same replacement.
    fn save(&mut self, date: NaiveDate) -> Result<()> {
        let day = self.days.entry(date).or_default();
        if let Err(e) = self.repo.save_day(date, day) {
            warn!("schedule save failed for {}: {:#}", date, e);
            return Err(e);
        }
        Ok(())
    }
}
