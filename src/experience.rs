use chrono::{Datelike, NaiveDate};

/// Year and month a career count starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub year: i32,
    /// 1-based month (September = 9)
    pub month: u32,
}

/// Start of the coaching career: September 2009.
pub const COACHING_START: Anchor = Anchor {
    year: 2009,
    month: 9,
};

/// How a year count is shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearsDisplay {
    /// "15"
    Bare,
    /// "15+"
    OpenEnded,
}

/// Whole years between `anchor` and `today`.
///
/// The count goes up on the first day of the anchor month each year. Dates
/// before the anchor count as zero.
pub fn years_of_experience(anchor: Anchor, today: NaiveDate) -> u32 {
    let mut years = today.year() - anchor.year;
    if today.month() < anchor.month {
        years -= 1;
    }
    years.max(0) as u32
}

/// Years since `COACHING_START`.
pub fn coaching_years(today: NaiveDate) -> u32 {
    years_of_experience(COACHING_START, today)
}

pub fn format_years(years: u32, display: YearsDisplay) -> String {
    match display {
        YearsDisplay::Bare => years.to_string(),
        YearsDisplay::OpenEnded => format!("{}+", years),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_before_anchor_month() {
        assert_eq!(coaching_years(date(2024, 8, 31)), 14);
    }

    #[test]
    fn test_first_day_of_anchor_month() {
        assert_eq!(coaching_years(date(2024, 9, 1)), 15);
    }

    #[test]
    fn test_later_in_year() {
        assert_eq!(coaching_years(date(2024, 12, 31)), 15);
        assert_eq!(coaching_years(date(2025, 1, 1)), 15);
    }

    #[test]
    fn test_anchor_itself_is_zero() {
        assert_eq!(coaching_years(date(2009, 9, 1)), 0);
    }

    #[test]
    fn test_before_anchor_saturates_at_zero() {
        assert_eq!(coaching_years(date(2009, 8, 31)), 0);
        assert_eq!(coaching_years(date(1999, 1, 1)), 0);
    }

    #[test]
    fn test_custom_anchor() {
        let anchor = Anchor {
            year: 2020,
            month: 1,
        };
        assert_eq!(years_of_experience(anchor, date(2023, 1, 1)), 3);
        assert_eq!(years_of_experience(anchor, date(2022, 12, 31)), 2);
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(15, YearsDisplay::Bare), "15");
        assert_eq!(format_years(15, YearsDisplay::OpenEnded), "15+");
    }

    proptest! {
        #[test]
        fn prop_monotonic_in_date(start in 0i64..20_000, step in 0i64..2_000) {
            let base = date(2000, 1, 1);
            let earlier = base + chrono::Duration::days(start);
            let later = earlier + chrono::Duration::days(step);
            prop_assert!(coaching_years(earlier) <= coaching_years(later));
        }

        #[test]
        fn prop_increments_at_anchor_month(year in 2010i32..2100) {
            let before = coaching_years(date(year, 8, 31));
            let after = coaching_years(date(year, 9, 1));
            prop_assert_eq!(after, before + 1);
        }
    }
}
