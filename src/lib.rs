pub mod calendar;
pub mod config;
pub mod easter;
pub mod error;
pub mod events;
pub mod grid;
pub mod holidays;

pub use calendar::{build_calendar, build_month, Calendar, Day, Month, MonthValue, Week};
pub use easter::{easter_sunday, holy_week};
pub use events::{parse_event_text, scan_events, EventLine, EventSpec, ParsedEvents};
pub use holidays::{sample_holiday_list, sample_holidays, Holiday};
