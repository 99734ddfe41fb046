use chrono::{Datelike, NaiveDate, Weekday};

/// Holidays observed as off-peak all day long.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Holiday {
    #[display("New Year's Day")]
    NewYearsDay,

    /// Last Monday of May.
    #[display("Memorial Day")]
    MemorialDay,

    #[display("Independence Day")]
    IndependenceDay,

    /// First Monday of September.
    #[display("Labor Day")]
    LaborDay,

    /// Fourth Thursday of November.
    ///
    /// Earlier client versions treated every Thursday in November as a holiday,
    /// this one only matches the actual Thanksgiving Day.
    Thanksgiving,

    /// Observed on the 24th of December.
    Christmas,
}

impl Holiday {
    const DAYS_IN_MAY: u32 = 31;

    pub fn of(date: NaiveDate) -> Option<Self> {
        let weekday = date.weekday();
        match (date.month(), date.day()) {
            (1, 1) => Some(Self::NewYearsDay),
            (5, day) if weekday == Weekday::Mon && day > Self::DAYS_IN_MAY - 7 => {
                Some(Self::MemorialDay)
            }
            (7, 4) => Some(Self::IndependenceDay),
            (9, day) if weekday == Weekday::Mon && day <= 7 => Some(Self::LaborDay),
            (11, 22..=28) if weekday == Weekday::Thu => Some(Self::Thanksgiving),
            (12, 24) => Some(Self::Christmas),
            _ => None,
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(year: i32, month: u32, day: u32) -> Option<Holiday> {
        Holiday::of(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn test_fixed_dates() {
        assert_eq!(holiday(2020, 1, 1), Some(Holiday::NewYearsDay));
        assert_eq!(holiday(2019, 7, 4), Some(Holiday::IndependenceDay));
        assert_eq!(holiday(2020, 12, 24), Some(Holiday::Christmas));
        assert_eq!(holiday(2020, 12, 25), None);
        assert_eq!(holiday(2020, 7, 3), None);
    }

    #[test]
    fn test_memorial_day() {
        assert_eq!(holiday(2021, 5, 31), Some(Holiday::MemorialDay));
        assert_eq!(holiday(2020, 5, 25), Some(Holiday::MemorialDay));
        assert_eq!(holiday(2020, 5, 18), None);
        assert_eq!(holiday(2021, 5, 24), None);
    }

    #[test]
    fn test_labor_day() {
        assert_eq!(holiday(2020, 9, 7), Some(Holiday::LaborDay));
        assert_eq!(holiday(2021, 9, 6), Some(Holiday::LaborDay));
        assert_eq!(holiday(2020, 9, 14), None);
    }

    #[test]
    fn test_thanksgiving() {
        assert_eq!(holiday(2020, 11, 26), Some(Holiday::Thanksgiving));
        assert_eq!(holiday(2019, 11, 28), Some(Holiday::Thanksgiving));
        assert_eq!(holiday(2021, 11, 25), Some(Holiday::Thanksgiving));
        assert_eq!(holiday(2020, 11, 5), None);
        assert_eq!(holiday(2020, 11, 19), None);
        assert_eq!(holiday(2020, 11, 27), None);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(NaiveDate::from_ymd_opt(2020, 6, 27).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2020, 6, 28).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2020, 6, 29).unwrap()));
    }
}
