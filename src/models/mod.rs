// Module exports for models

pub mod block;
pub mod category;
pub mod schedule;
pub mod settings;
