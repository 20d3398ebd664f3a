use gridcal::{
    build_calendar, parse_event_text, sample_holidays, scan_events, EventSpec, MonthValue,
};

fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[test]
fn every_year_has_twelve_six_week_months() {
    for year in [-10_000, 1, 1582, 1900, 2000, 2023, 2024, 2100, 9999, 1_000_000] {
        let calendar = build_calendar(year, &[]);

        assert_eq!(calendar.year, year);
        assert_eq!(calendar.months.len(), 12);
        for month in calendar.months.iter() {
            assert_eq!(month.weeks.len(), 6);
            assert_eq!(month.days().count(), 42);
        }
        let cells: usize = calendar.months.iter().map(|month| month.days().count()).sum();
        assert_eq!(cells, 12 * 42);
    }
}

#[test]
fn february_length_follows_leap_rule() {
    for year in 1890..=2410 {
        let calendar = build_calendar(year, &[]);
        let expected = if is_leap(year) { 29 } else { 28 };

        assert_eq!(
            calendar.month(MonthValue::February).days_in_month(),
            expected,
            "year {}",
            year
        );
    }
}

#[test]
fn january_2024_grid_anchoring() {
    let calendar = build_calendar(2024, &[]);
    let january = &calendar.months[0];

    assert_eq!(january.name, "January");
    assert_eq!(january.weeks[0][0].date, 31);
    assert!(!january.weeks[0][0].this_month);
    assert_eq!(january.weeks[0][1].date, 1);
    assert!(january.weeks[0][1].this_month);
}

#[test]
fn same_day_events_are_joined() {
    let events = vec![
        EventSpec::new(0, 1, "A".to_owned()),
        EventSpec::new(0, 1, "B".to_owned()),
    ];
    let calendar = build_calendar(2024, &events);

    assert_eq!(calendar.months[0].day(1).unwrap().event, "A; B");
}

#[test]
fn parser_contract() {
    let parsed = parse_event_text("Jan 1: New Year", 2024);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed["2024-0-1"], vec!["New Year".to_owned()]);

    let parsed = parse_event_text("Jan 1: X\nInvalid line\nFeb 29: Y", 2024);
    assert_eq!(parsed.len(), 2);
}

#[test]
fn holy_week_in_sample_holidays() {
    let holidays = sample_holidays(2024);
    assert!(holidays.contains("Jan 1: New Year"));
    assert!(holidays.contains("Mar 28: Maundy Thursday"));
    assert!(holidays.contains("Mar 29: Good Friday"));

    let holidays = sample_holidays(2023);
    assert!(holidays.contains("Apr 6: Maundy Thursday"));
    assert!(holidays.contains("Apr 7: Good Friday"));
}

#[test]
fn building_twice_gives_equal_calendars() {
    let events = vec![EventSpec::new(6, 4, "Picnic".to_owned())];

    assert_eq!(build_calendar(2031, &events), build_calendar(2031, &events));
}

#[test]
fn calendars_repeat_every_four_hundred_years() {
    let a = build_calendar(2024, &[]);
    let b = build_calendar(2424, &[]);

    assert_eq!(a.months, b.months);
}

#[test]
fn sample_holidays_feed_the_calendar() {
    let specs: Vec<EventSpec> = scan_events(&sample_holidays(2024))
        .map(EventSpec::from)
        .collect();
    let calendar = build_calendar(2024, &specs);

    assert_eq!(
        calendar.month(MonthValue::March).day(28).unwrap().event,
        "Maundy Thursday"
    );
    assert_eq!(
        calendar.month(MonthValue::December).day(25).unwrap().event,
        "Christmas*"
    );
    assert_eq!(calendar.month(MonthValue::July).day(4).unwrap().event, "");
}

#[test]
fn years_build_independently_across_threads() {
    let handles: Vec<_> = (2020..2028)
        .map(|year| std::thread::spawn(move || build_calendar(year, &[])))
        .collect();

    for (handle, year) in handles.into_iter().zip(2020..2028) {
        assert_eq!(handle.join().unwrap(), build_calendar(year, &[]));
    }
}
