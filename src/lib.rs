// Studyblocks Library
// Exports the schedule-engine modules for the planner front end

pub mod models;
pub mod services;
pub mod utils;
