use derive_more::Constructor;
use itertools::Itertools;
use std::convert::TryFrom;
use std::fmt;

use crate::calendar::MonthValue;
use crate::easter;

/// A named date with a one-based month.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Holiday {
    pub month: u32,
    pub day: u32,
    pub name: &'static str,
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbrev = MonthValue::try_from(self.month)
            .map(|month| month.abbrev())
            .unwrap_or("???");
        write!(f, "{} {}: {}", abbrev, self.day, self.name)
    }
}

/// The sample holidays of `year` in declaration order. The `+` and `*`
/// suffixes are part of the names.
pub fn sample_holiday_list(year: i32) -> Vec<Holiday> {
    let [maundy_thursday, good_friday] = easter::holy_week(year);

    vec![
        Holiday::new(1, 1, "New Year"),
        Holiday::new(2, 14, "Valentine's Day+"),
        Holiday::new(3, 17, "St. Patrick's Day"),
        Holiday::new(4, 1, "April Fool's Day"),
        maundy_thursday,
        good_friday,
        Holiday::new(10, 31, "Halloween"),
        Holiday::new(12, 24, "Christmas Eve"),
        Holiday::new(12, 25, "Christmas*"),
        Holiday::new(12, 31, "New Year's Eve"),
    ]
}

/// Renders [`sample_holiday_list`] in the event text format, one
/// `Mmm d: Name` per line.
pub fn sample_holidays(year: i32) -> String {
    sample_holiday_list(year).iter().join("\n")
}
