// Module exports for models

pub mod calendar_day;
pub mod event;
pub mod placement;
pub mod settings;
