// Calendar layout library
// Month grid, event lanes and popover placement for a month view

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{CalendarError, CalendarResult};
pub use models::calendar_day::DateCell;
pub use models::event::{RenderEvent, SourceEvent};
pub use models::placement::{Placement, PopoverPlacement, RangePlacement};
pub use models::settings::{Settings, WeekStart};
pub use services::grid::{build_grid, GridBuilder, MonthGrid};
pub use services::layout::{layout_month, DayLanes, MonthLayout};
pub use services::placement::{place_for, place_for_range};
