use chrono::{Datelike, NaiveDate};
use itertools::Itertools;

use crate::calendar::{Day, MonthValue, Week};
use crate::events::EventSpec;

const COLUMNS: u32 = 7;
const ROWS: u32 = 6;
const CELLS: u32 = COLUMNS * ROWS;

/// Gregorian leap years repeat with the weekdays every 400 years
/// (146097 days, exactly 20871 weeks).
const GREGORIAN_CYCLE: i64 = 400;

/// Maps any year onto the year in 2000..2400 with the same calendar, so
/// that chrono never sees a year outside its supported range.
pub(crate) fn equivalent_year(year: i32) -> i32 {
    (2000 + i64::from(year).rem_euclid(GREGORIAN_CYCLE)) as i32
}

pub(crate) fn first_of_month(year: i32, month: MonthValue) -> NaiveDate {
    // Day one of any month in 2000..2400 is always representable.
    NaiveDate::from_ymd_opt(equivalent_year(year), month.num(), 1).unwrap_or(NaiveDate::MIN)
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_of_month(year: i32, month: MonthValue) -> u32 {
    let first = first_of_month(year, month);
    let next = if month == MonthValue::December {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), month.num() + 1, 1)
    };

    next.map_or(31, |next| next.signed_duration_since(first).num_days() as u32)
}

/// Lays out `month` as six Sunday-first weeks.
///
/// The month starts in the first row unless day one is a Sunday, in which
/// case the whole month moves down one row and the first row is filled with
/// the end of the previous month. Cells past the month's end count up from
/// one.
pub fn month_grid(year: i32, month: MonthValue, events: &[EventSpec]) -> [Week; 6] {
    let first = first_of_month(year, month);
    let first_weekday = first.weekday().num_days_from_sunday();
    let days_in_month = days_of_month(year, month);
    // December is 31 days long in every year, so January can look up its
    // predecessor within the same year.
    let days_in_prev = days_of_month(year, month.pred());

    let leading = if first_weekday == 0 { COLUMNS } else { first_weekday };

    let cell = |index: u32| -> Day {
        if index < leading {
            Day {
                date: days_in_prev - (leading - 1 - index),
                event: String::new(),
                day_of_week: index % COLUMNS,
                this_month: false,
            }
        } else if index - leading < days_in_month {
            let offset = index - leading;
            Day {
                date: offset + 1,
                event: annotate(events, month, offset + 1),
                day_of_week: (first_weekday + offset) % COLUMNS,
                this_month: true,
            }
        } else {
            let offset = index - leading - days_in_month;
            Day {
                date: offset + 1,
                event: String::new(),
                day_of_week: (first_weekday + days_in_month + offset) % COLUMNS,
                this_month: false,
            }
        }
    };

    debug_assert!(leading + days_in_month <= CELLS);

    std::array::from_fn(|row| {
        Week(std::array::from_fn(|col| {
            cell(row as u32 * COLUMNS + col as u32)
        }))
    })
}

/// Collects every event placed on `date` of `month`, in input order.
pub fn annotate(events: &[EventSpec], month: MonthValue, date: u32) -> String {
    events
        .iter()
        .filter(|spec| spec.month == month.ord() && spec.date == date)
        .map(|spec| spec.event.as_str())
        .join("; ")
}
