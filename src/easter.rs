use chrono::{Datelike, Duration, NaiveDate};

use crate::grid::equivalent_year;
use crate::holidays::Holiday;

/// Easter Sunday of the Gregorian `year` as one-based `(month, day)`,
/// computed with the Meeus/Jones/Butcher algorithm.
pub fn easter_sunday(year: i32) -> (u32, u32) {
    let year = i64::from(year);

    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;

    let n = h + l - 7 * m + 114;

    ((n / 31) as u32, (n % 31 + 1) as u32)
}

/// The date `days` before `month`/`day` of `year`, rolling over month and
/// year boundaries.
pub fn days_before(year: i32, month: u32, day: u32, days: i64) -> (u32, u32) {
    let shifted = NaiveDate::from_ymd_opt(equivalent_year(year), month, day)
        .and_then(|date| date.checked_sub_signed(Duration::days(days)));

    match shifted {
        Some(date) => (date.month(), date.day()),
        None => {
            log::warn!(
                "Cannot move {}-{}-{} back by {} days, keeping the date",
                year,
                month,
                day,
                days
            );
            (month, day)
        }
    }
}

/// Maundy Thursday and Good Friday of `year`.
pub fn holy_week(year: i32) -> [Holiday; 2] {
    let (month, day) = easter_sunday(year);

    let (thu_month, thu_day) = days_before(year, month, day, 3);
    let (fri_month, fri_day) = days_before(year, month, day, 2);

    [
        Holiday::new(thu_month, thu_day, "Maundy Thursday"),
        Holiday::new(fri_month, fri_day, "Good Friday"),
    ]
}
