use serde::Serialize;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

use crate::events::EventSpec;
use crate::grid;

/// One cell of a month grid. Cells outside the month carry the date of the
/// adjacent month and never carry events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub date: u32,
    pub event: String,
    pub day_of_week: u32,
    pub this_month: bool,
}

/// Seven days, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Week(pub [Day; 7]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Month {
    pub name: &'static str,
    pub number: u32,
    pub weeks: [Week; 6],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calendar {
    pub year: i32,
    pub months: [Month; 12],
}

#[derive(Debug, Clone, Copy)]
pub enum MonthValue {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

#[derive(Debug)]
pub struct NotAMonthError {}

/// Builds the full year: twelve month grids in calendar order, each
/// annotated with the matching entries of `events`.
pub fn build_calendar(year: i32, events: &[EventSpec]) -> Calendar {
    Calendar {
        year,
        months: MonthValue::ALL.map(|month| build_month(year, month, events)),
    }
}

pub fn build_month(year: i32, month: MonthValue, events: &[EventSpec]) -> Month {
    Month {
        name: month.name(),
        number: month.ord(),
        weeks: grid::month_grid(year, month, events),
    }
}

impl Week {
    pub fn days(&self) -> &[Day; 7] {
        &self.0
    }
}

impl std::ops::Index<usize> for Week {
    type Output = Day;

    fn index(&self, index: usize) -> &Day {
        &self.0[index]
    }
}

impl Month {
    /// All 42 cells, row by row.
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.weeks.iter().flat_map(|week| week.0.iter())
    }

    pub fn days_in_month(&self) -> usize {
        self.days().filter(|day| day.this_month).count()
    }

    pub fn day(&self, date: u32) -> Option<&Day> {
        self.days().find(|day| day.this_month && day.date == date)
    }
}

impl Calendar {
    pub fn month(&self, month: MonthValue) -> &Month {
        &self.months[month.ord() as usize]
    }
}

impl MonthValue {
    pub const ALL: [MonthValue; 12] = [
        MonthValue::January,
        MonthValue::February,
        MonthValue::March,
        MonthValue::April,
        MonthValue::May,
        MonthValue::June,
        MonthValue::July,
        MonthValue::August,
        MonthValue::September,
        MonthValue::October,
        MonthValue::November,
        MonthValue::December,
    ];

    /// Zero-based index, January = 0.
    pub fn ord(&self) -> u32 {
        match *self {
            MonthValue::January => 0,
            MonthValue::February => 1,
            MonthValue::March => 2,
            MonthValue::April => 3,
            MonthValue::May => 4,
            MonthValue::June => 5,
            MonthValue::July => 6,
            MonthValue::August => 7,
            MonthValue::September => 8,
            MonthValue::October => 9,
            MonthValue::November => 10,
            MonthValue::December => 11,
        }
    }

    pub fn num(&self) -> u32 {
        self.ord() + 1
    }

    pub fn name(&self) -> &'static str {
        match *self {
            MonthValue::January => "January",
            MonthValue::February => "February",
            MonthValue::March => "March",
            MonthValue::April => "April",
            MonthValue::May => "May",
            MonthValue::June => "June",
            MonthValue::July => "July",
            MonthValue::August => "August",
            MonthValue::September => "September",
            MonthValue::October => "October",
            MonthValue::November => "November",
            MonthValue::December => "December",
        }
    }

    pub fn abbrev(&self) -> &'static str {
        &self.name()[..3]
    }

    pub fn from_ord(ord: u32) -> Option<Self> {
        Self::ALL.get(ord as usize).copied()
    }

    pub fn pred(&self) -> Self {
        Self::ALL[((self.ord() + 11) % 12) as usize]
    }
}

impl PartialOrd for MonthValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MonthValue {
    fn eq(&self, other: &Self) -> bool {
        self.ord() == other.ord()
    }
}

impl Eq for MonthValue {}

impl Ord for MonthValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ord().cmp(&other.ord())
    }
}

impl fmt::Display for MonthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u32> for MonthValue {
    type Error = NotAMonthError;

    /// Converts a one-based month number.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        value
            .checked_sub(1)
            .and_then(Self::from_ord)
            .ok_or(NotAMonthError {})
    }
}

impl fmt::Display for NotAMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value could not be converted to a month")
    }
}

impl Error for NotAMonthError {}
