use jiff::Zoned;
use jiff::civil::date;
use peace_core::models::schedule::{Frequency, ScheduleRule};
use peace_insights::error::InsightError;
use peace_insights::schedule::{next_occurrence, validate_rule};

fn rule(frequency: Frequency) -> ScheduleRule {
    ScheduleRule {
        frequency,
        hour: 9,
        minute: 30,
        day_of_week: None,
        day_of_month: None,
    }
}

fn zoned(s: &str) -> Zoned {
    s.parse().unwrap()
}

fn next(rule: &ScheduleRule, now: &str) -> String {
    next_occurrence(rule, &zoned(now)).unwrap().to_string()
}

// 2026-07-15 is a Wednesday.

#[test]
fn daily_fires_today_when_still_ahead() {
    assert_eq!(
        next(&rule(Frequency::Daily), "2026-07-15T08:00:00+00:00[UTC]"),
        "2026-07-15T09:30:00+00:00[UTC]"
    );
}

#[test]
fn daily_rolls_to_tomorrow_at_or_after_the_time() {
    let daily = rule(Frequency::Daily);
    assert_eq!(
        next(&daily, "2026-07-15T09:30:00+00:00[UTC]"),
        "2026-07-16T09:30:00+00:00[UTC]"
    );
    assert_eq!(
        next(&daily, "2026-07-31T22:00:00+00:00[UTC]"),
        "2026-08-01T09:30:00+00:00[UTC]"
    );
}

#[test]
fn weekly_finds_the_next_weekday() {
    let friday = ScheduleRule {
        day_of_week: Some(5),
        ..rule(Frequency::Weekly)
    };
    assert_eq!(
        next(&friday, "2026-07-15T12:00:00+00:00[UTC]"),
        "2026-07-17T09:30:00+00:00[UTC]"
    );
}

#[test]
fn weekly_and_biweekly_roll_over_when_passed() {
    let wednesday = ScheduleRule {
        day_of_week: Some(3),
        ..rule(Frequency::Weekly)
    };
    assert_eq!(
        next(&wednesday, "2026-07-15T08:00:00+00:00[UTC]"),
        "2026-07-15T09:30:00+00:00[UTC]"
    );
    assert_eq!(
        next(&wednesday, "2026-07-15T10:00:00+00:00[UTC]"),
        "2026-07-22T09:30:00+00:00[UTC]"
    );

    let biweekly = ScheduleRule {
        frequency: Frequency::Biweekly,
        ..wednesday
    };
    assert_eq!(
        next(&biweekly, "2026-07-15T10:00:00+00:00[UTC]"),
        "2026-07-29T09:30:00+00:00[UTC]"
    );
}

#[test]
fn monthly_clamps_to_short_months() {
    let end_of_month = ScheduleRule {
        day_of_month: Some(31),
        ..rule(Frequency::Monthly)
    };
    assert_eq!(
        next(&end_of_month, "2026-02-10T12:00:00+00:00[UTC]"),
        "2026-02-28T09:30:00+00:00[UTC]"
    );
    assert_eq!(
        next(&end_of_month, "2026-04-30T10:00:00+00:00[UTC]"),
        "2026-05-31T09:30:00+00:00[UTC]"
    );
    assert_eq!(
        next(&end_of_month, "2026-05-31T10:00:00+00:00[UTC]"),
        "2026-06-30T09:30:00+00:00[UTC]"
    );
}

#[test]
fn monthly_rolls_over_the_year() {
    let fifth = ScheduleRule {
        day_of_month: Some(5),
        ..rule(Frequency::Monthly)
    };
    assert_eq!(
        next(&fifth, "2026-12-06T00:00:00+00:00[UTC]"),
        "2027-01-05T09:30:00+00:00[UTC]"
    );
}

#[test]
fn keeps_the_callers_offset() {
    let daily = rule(Frequency::Daily);
    let now = zoned("2026-07-15T10:00:00+09:00[+09:00]");
    let fired = next_occurrence(&daily, &now).unwrap();
    assert_eq!(fired.offset(), now.offset());
    assert_eq!(fired.datetime(), date(2026, 7, 16).at(9, 30, 0, 0));
}

#[test]
fn rejects_out_of_range_fields() {
    let cases = [
        ScheduleRule { hour: 24, ..rule(Frequency::Daily) },
        ScheduleRule { minute: 60, ..rule(Frequency::Daily) },
        ScheduleRule { day_of_week: Some(7), ..rule(Frequency::Weekly) },
        ScheduleRule { day_of_month: Some(0), ..rule(Frequency::Monthly) },
        ScheduleRule { day_of_month: Some(32), ..rule(Frequency::Monthly) },
        rule(Frequency::Weekly),
        rule(Frequency::Biweekly),
        rule(Frequency::Monthly),
    ];
    for case in cases {
        assert!(
            matches!(validate_rule(&case), Err(InsightError::InvalidSchedule(_))),
            "{case:?}"
        );
    }
}
