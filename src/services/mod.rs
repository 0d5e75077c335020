// Service module exports

pub mod database;
pub mod duration;
pub mod edit;
pub mod grid;
pub mod placement;
pub mod schedule;
