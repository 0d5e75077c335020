//! Day-schedule persistence.
//!
//! One row per scheduled date. A save replaces the whole day document, so
//! composite operations (move, resize) reach the store as a single
//! replacement and an observer only ever sees the map before or after a
//! write, never partially updated. Writes are synchronous and
//! acknowledged through the returned `Result`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::models::schedule::DaySchedule;
use crate::utils::date::{date_key, parse_date_key};

/// Repository for whole-day schedule documents.
pub struct ScheduleRepository<'a> {
    conn: &'a Connection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Load the schedule for a date, or an empty one if none is stored.
    ///
    /// Structural corruption from an external edit is not rejected here;
    /// the schedule's lookup methods ignore dangling continuations when
    /// resolving occupancy.
    pub fn load_day(&self, date: NaiveDate) -> Result<DaySchedule> {
        let result = self.conn.query_row(
            "SELECT entries FROM day_schedules WHERE date_key = ?",
            [date_key(date)],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(json) => serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse stored schedule for {}", date_key(date))),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(DaySchedule::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the stored schedule for a date with `day`.
    pub fn save_day(&self, date: NaiveDate, day: &DaySchedule) -> Result<()> {
        let json = serde_json::to_string(day).context("Failed to serialize day schedule")?;
        self.conn
            .execute(
                "INSERT INTO day_schedules (date_key, entries, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(date_key) DO UPDATE
                 SET entries = excluded.entries, updated_at = CURRENT_TIMESTAMP",
                params![date_key(date), json],
            )
            .with_context(|| format!("Failed to save schedule for {}", date_key(date)))?;

        log::debug!(
            "saved schedule for {} ({} occupied slots)",
            date_key(date),
            day.len()
        );
        Ok(())
    }

    /// Delete the stored schedule for a date.
    pub fn delete_day(&self, date: NaiveDate) -> Result<()> {
        self.conn
            .execute(
                "DELETE FROM day_schedules WHERE date_key = ?",
                [date_key(date)],
            )
            .with_context(|| format!("Failed to delete schedule for {}", date_key(date)))?;
        Ok(())
    }

    /// Every date with a stored schedule, ascending.
    ///
    /// Used by the month view to mark days that have blocks.
    pub fn scheduled_dates(&self) -> Result<Vec<NaiveDate>> {
        let mut stmt = self
            .conn
            .prepare("SELECT date_key FROM day_schedules ORDER BY date_key ASC")?;

        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(keys.iter().filter_map(|key| parse_date_key(key)).collect())
    }
}
