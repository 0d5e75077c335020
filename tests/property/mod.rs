// Property-based test modules

pub mod placement_properties;
