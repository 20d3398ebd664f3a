use derive_more::Constructor;
use nom::{
    bytes::complete::{take_while1, take_while_m_n},
    character::complete::{char, satisfy},
    combinator::map_res,
    sequence::tuple,
    IResult,
};
use phf::phf_map;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::calendar::MonthValue;

/// Parsed event text, keyed by `"{year}-{month0}-{day}"`.
pub type ParsedEvents = BTreeMap<String, Vec<String>>;

static MONTH_ABBREVIATIONS: phf::Map<&'static str, MonthValue> = phf_map! {
    "Jan" => MonthValue::January,
    "Feb" => MonthValue::February,
    "Mar" => MonthValue::March,
    "Apr" => MonthValue::April,
    "May" => MonthValue::May,
    "Jun" => MonthValue::June,
    "Jul" => MonthValue::July,
    "Aug" => MonthValue::August,
    "Sep" => MonthValue::September,
    "Oct" => MonthValue::October,
    "Nov" => MonthValue::November,
    "Dec" => MonthValue::December,
};

/// A request to place `event` on `date` of the zero-based `month`.
///
/// Entries that name no existing day are accepted and simply never match.
#[derive(Debug, Clone, PartialEq, Eq, Constructor, Deserialize)]
pub struct EventSpec {
    pub month: u32,
    pub date: u32,
    pub event: String,
}

/// One `Mmm d: description` occurrence found in event text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLine {
    pub month: MonthValue,
    pub day: u32,
    pub description: String,
}

impl EventLine {
    pub fn key(&self, year: i32) -> String {
        format!("{}-{}-{}", year, self.month.ord(), self.day)
    }
}

impl From<EventLine> for EventSpec {
    fn from(line: EventLine) -> Self {
        EventSpec::new(line.month.ord(), line.day, line.description)
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// The `\s` class of ECMAScript patterns: Unicode `White_Space` without
/// U+0085, plus the byte order mark U+FEFF.
fn is_pattern_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn whitespace(input: &str) -> IResult<&str, char> {
    satisfy(is_pattern_whitespace)(input)
}

/// `[A-Za-z]{3}\s[0-9]{1,2}:\s.+`
fn event_line(input: &str) -> IResult<&str, (&str, u32, &str)> {
    let (input, (abbrev, _, day, _, _, description)) = tuple((
        take_while_m_n(3, 3, |c: char| c.is_ascii_alphabetic()),
        whitespace,
        map_res(take_while_m_n(1, 2, |c: char| c.is_ascii_digit()), |s: &str| {
            s.parse::<u32>()
        }),
        char(':'),
        whitespace,
        take_while1(|c: char| !is_line_terminator(c)),
    ))(input)?;

    Ok((input, (abbrev, day, description)))
}

/// Iterator over every event found in a text.
///
/// The pattern may start anywhere, not only at the beginning of a line.
/// After a match the scan resumes behind it, otherwise one character
/// further. Matches with an unknown month abbreviation are dropped.
#[derive(Debug, Clone)]
pub struct EventLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for EventLines<'a> {
    type Item = EventLine;

    fn next(&mut self) -> Option<EventLine> {
        while !self.rest.is_empty() {
            match event_line(self.rest) {
                Ok((rest, (abbrev, day, description))) => {
                    self.rest = rest;
                    match MONTH_ABBREVIATIONS.get(abbrev) {
                        Some(month) => {
                            return Some(EventLine {
                                month: *month,
                                day,
                                description: description.trim().to_owned(),
                            })
                        }
                        None => log::debug!("Skipping event with unknown month '{}'", abbrev),
                    }
                }
                Err(_) => {
                    let mut chars = self.rest.chars();
                    chars.next();
                    self.rest = chars.as_str();
                }
            }
        }

        None
    }
}

pub fn scan_events(text: &str) -> EventLines<'_> {
    EventLines { rest: text }
}

/// Groups all events of `text` by date key for `year`.
pub fn parse_event_text(text: &str, year: i32) -> ParsedEvents {
    let mut parsed = ParsedEvents::new();

    for line in scan_events(text) {
        parsed
            .entry(line.key(year))
            .or_insert_with(Vec::new)
            .push(line.description);
    }

    parsed
}
