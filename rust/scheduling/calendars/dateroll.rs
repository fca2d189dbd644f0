use chrono::prelude::*;
use chrono::Days;

/// Simple date adjustment defining working days, holidays and rolling.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a working day, i.e. part of the working week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDate) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Return the `date`, if a working day, or get the next working date after `date`.
    fn roll_forward_bus_day(&self, date: &NaiveDate) -> NaiveDate {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date + Days::new(1);
        }
        new_date
    }

    /// Return the `date`, if a working day, or get the working day preceding `date`.
    fn roll_backward_bus_day(&self, date: &NaiveDate) -> NaiveDate {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date - Days::new(1);
        }
        new_date
    }

    /// Return the first working day strictly after `date`, whether or not `date` is itself one.
    fn next_bus_day(&self, date: &NaiveDate) -> NaiveDate {
        self.roll_forward_bus_day(&(*date + Days::new(1)))
    }

    /// Return the last working day strictly before `date`, whether or not `date` is itself one.
    fn prev_bus_day(&self, date: &NaiveDate) -> NaiveDate {
        self.roll_backward_bus_day(&(*date - Days::new(1)))
    }

    /// Return a vector of working dates between a start and end, inclusive.
    ///
    /// Non-working `start` and `end` are rolled inward; an empty vector is returned when no
    /// working day lies in the interval.
    fn bus_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        let mut vec = Vec::new();
        let mut sample_date = self.roll_forward_bus_day(start);
        while sample_date <= *end {
            vec.push(sample_date);
            sample_date = self.next_bus_day(&sample_date);
        }
        vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{nd, Cal};

    fn fixture_hol_cal() -> Cal {
        let hols = vec![nd(2015, 9, 5), nd(2015, 9, 7)]; // Saturday and Monday
        Cal::new(hols, vec![5, 6])
    }

    #[test]
    fn test_roll_forward_bus_day() {
        let cal = fixture_hol_cal();
        assert_eq!(cal.roll_forward_bus_day(&nd(2015, 9, 7)), nd(2015, 9, 8));
        assert_eq!(cal.roll_forward_bus_day(&nd(2015, 9, 5)), nd(2015, 9, 8));
        assert_eq!(cal.roll_forward_bus_day(&nd(2015, 9, 4)), nd(2015, 9, 4));
    }

    #[test]
    fn test_roll_backward_bus_day() {
        let cal = fixture_hol_cal();
        assert_eq!(cal.roll_backward_bus_day(&nd(2015, 9, 7)), nd(2015, 9, 4));
        assert_eq!(cal.roll_backward_bus_day(&nd(2015, 9, 4)), nd(2015, 9, 4));
    }

    #[test]
    fn test_next_bus_day() {
        let cal = fixture_hol_cal();
        // Friday -> skips weekend and Monday holiday
        assert_eq!(cal.next_bus_day(&nd(2015, 9, 4)), nd(2015, 9, 8));
        // Sunday -> skips Monday holiday
        assert_eq!(cal.next_bus_day(&nd(2015, 9, 6)), nd(2015, 9, 8));
        // Tuesday -> Wednesday
        assert_eq!(cal.next_bus_day(&nd(2015, 9, 8)), nd(2015, 9, 9));
    }

    #[test]
    fn test_prev_bus_day() {
        let cal = fixture_hol_cal();
        assert_eq!(cal.prev_bus_day(&nd(2015, 9, 8)), nd(2015, 9, 4));
        assert_eq!(cal.prev_bus_day(&nd(2015, 9, 5)), nd(2015, 9, 4));
        assert_eq!(cal.prev_bus_day(&nd(2015, 9, 10)), nd(2015, 9, 9));
    }

    #[test]
    fn test_next_bus_day_year_rollover() {
        let cal = Cal::new(vec![], vec![5, 6]);
        // Friday 31st Dec 2021 -> Monday 3rd Jan 2022
        assert_eq!(cal.next_bus_day(&nd(2021, 12, 31)), nd(2022, 1, 3));
        assert_eq!(cal.prev_bus_day(&nd(2022, 1, 3)), nd(2021, 12, 31));
    }

    #[test]
    fn test_is_business_day() {
        let cal = fixture_hol_cal();
        assert!(!cal.is_bus_day(&nd(2015, 9, 7))); // Monday in Hol list
        assert!(cal.is_bus_day(&nd(2015, 9, 10))); // Thursday
        assert!(!cal.is_bus_day(&nd(2024, 1, 6))); // Saturday
    }

    #[test]
    fn test_bus_date_range() {
        let cal = fixture_hol_cal();
        let result = cal.bus_date_range(&nd(2015, 9, 4), &nd(2015, 9, 9));
        assert_eq!(result, vec![nd(2015, 9, 4), nd(2015, 9, 8), nd(2015, 9, 9)]);

        let result = cal.bus_date_range(&nd(2015, 9, 5), &nd(2015, 9, 7));
        assert!(result.is_empty());
    }
}
