//! Working-day counting.
//!
//! A working day is any Monday to Friday. No holiday calendar is consulted,
//! so public holidays falling on a weekday still count.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns the number of weekdays (Monday-Friday) in a calendar month.
///
/// Returns 0 for a month outside 1-12.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::working_days_in_month;
///
/// assert_eq!(working_days_in_month(1, 2024), 23);
/// assert_eq!(working_days_in_month(2, 2024), 21); // leap year
/// assert_eq!(working_days_in_month(13, 2024), 0);
/// ```
pub fn working_days_in_month(month: u32, year: i32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_january_2024_has_23_working_days() {
        // Starts Monday, 31 days
        assert_eq!(working_days_in_month(1, 2024), 23);
    }

    #[test]
    fn test_february_leap_year() {
        // 2024-02-01 is Thursday, 29 days
        assert_eq!(working_days_in_month(2, 2024), 21);
    }

    #[test]
    fn test_february_non_leap_year() {
        // 2023-02-01 is Wednesday, 28 days
        assert_eq!(working_days_in_month(2, 2023), 20);
    }

    #[test]
    fn test_february_2021_exactly_four_weeks() {
        // 2021-02-01 is Monday, 28 days: exactly 4 full weeks
        assert_eq!(working_days_in_month(2, 2021), 20);
    }

    #[test]
    fn test_century_non_leap_year() {
        // 1900-02-01 is Thursday, 28 days
        assert_eq!(working_days_in_month(2, 1900), 20);
    }

    #[test]
    fn test_march_2024() {
        // 2024-03-01 is Friday, 31 days
        assert_eq!(working_days_in_month(3, 2024), 21);
    }

    #[test]
    fn test_december_crosses_no_year_boundary() {
        // 2024-12-01 is Sunday, 31 days
        assert_eq!(working_days_in_month(12, 2024), 22);
    }

    #[test]
    fn test_invalid_month_returns_zero() {
        assert_eq!(working_days_in_month(0, 2024), 0);
        assert_eq!(working_days_in_month(13, 2024), 0);
    }

    #[test]
    fn test_every_month_has_20_to_23_working_days() {
        for year in [2019, 2020, 2023, 2024, 2100] {
            for month in 1..=12 {
                let days = working_days_in_month(month, year);
                assert!(
                    (20..=23).contains(&days),
                    "{}-{} has {} working days",
                    year,
                    month,
                    days
                );
            }
        }
    }
}
