// Service module exports

pub mod config;
pub mod events;
pub mod festival;
pub mod grid;
pub mod layout;
pub mod lunar;
pub mod placement;
pub mod workday;
