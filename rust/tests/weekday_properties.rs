use crate::scheduling::{dates_of_weekday, nd, Cal, DateRoll};
use chrono::prelude::*;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[test]
fn dates_of_weekday_ascending_same_weekday_four_or_five() {
    for year in 1990..=2040 {
        for month in 1..=12 {
            for weekday in WEEKDAYS {
                let dates = dates_of_weekday(year, month, weekday);
                assert!(dates.len() == 4 || dates.len() == 5, "{year}-{month} {weekday}");
                assert!(dates.windows(2).all(|w| w[0] < w[1]));
                assert!(dates.iter().all(|d| d.weekday() == weekday && d.month() == month));
            }
        }
    }
}

#[test]
fn dates_of_weekday_cover_month() {
    // every day of a month belongs to exactly one weekday list
    let total: usize = WEEKDAYS
        .iter()
        .map(|w| dates_of_weekday(2024, 2, *w).len())
        .sum();
    assert_eq!(total, 29);
}

#[test]
fn prev_of_next_working_day_round_trips() {
    let cal = Cal::default();
    let start = nd(2020, 1, 1);
    for date in start.iter_days().take(800).filter(|d| cal.is_bus_day(d)) {
        assert_eq!(cal.prev_bus_day(&cal.next_bus_day(&date)), date);
        assert_eq!(cal.next_bus_day(&cal.prev_bus_day(&date)), date);
    }
}

#[test]
fn next_working_day_never_weekend_or_holiday() {
    let cal = Cal::with_holidays(vec![nd(2021, 1, 26), nd(2021, 3, 11), nd(2021, 3, 29)]);
    for date in nd(2021, 1, 1).iter_days().take(120) {
        let next = cal.next_bus_day(&date);
        let prev = cal.prev_bus_day(&date);
        assert!(next > date && prev < date);
        assert!(cal.is_bus_day(&next) && cal.is_bus_day(&prev));
    }
}
