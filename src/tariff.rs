//! SRP time-of-use price plan.
//!
//! Every predicate here is a pure function of the timestamp, and all the boundaries are derived
//! from the timestamp's own year.

mod holiday;
mod season;
mod timestamp;

use chrono::{NaiveDateTime, Timelike};

pub use self::{
    holiday::{Holiday, is_weekend},
    season::{Rates, Season},
    timestamp::{RateError, parse_timestamp},
};
use crate::quantity::rate::KilowattHourRate;

/// Billing rate applicable to a single hour.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rate {
    pub value: KilowattHourRate,
    pub is_peak: bool,
}

/// Resolve the rate for the local civil time.
pub fn resolve(at: NaiveDateTime) -> Rate {
    let date = at.date();
    let season = Season::of(date);
    let is_peak =
        season.is_peak_hour(at.hour()) && Holiday::of(date).is_none() && !is_weekend(date);
    let rates = season.rates();
    Rate { value: if is_peak { rates.peak } else { rates.off_peak }, is_peak }
}

/// Parse the timestamp and resolve its rate.
pub fn resolve_rate(input: Option<&str>) -> Result<Rate, RateError> {
    parse_timestamp(input).map(resolve)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Days, NaiveDate};

    use super::*;
    use crate::prelude::*;

    fn assert_rate(input: &str, value: f64, is_peak: bool) -> Result {
        let rate = resolve_rate(Some(input))?;
        assert_eq!(rate, Rate { value: KilowattHourRate(value), is_peak }, "{input}");
        Ok(())
    }

    #[test]
    fn test_winter() -> Result {
        assert_rate("2020-01-24T01:00:00", 0.0691, false)?;
        assert_rate("2020-01-24T05:00:00", 0.0951, true)?;
        assert_rate("2020-01-24T08:59:59", 0.0951, true)?;
        assert_rate("2020-01-24T09:00:00", 0.0691, false)?;
        assert_rate("2020-01-24T17:00:00", 0.0951, true)?;
        assert_rate("2020-01-24T21:00:00", 0.0691, false)?;
        Ok(())
    }

    #[test]
    fn test_summer() -> Result {
        assert_rate("2020-06-24T01:00:00", 0.0727, false)?;
        assert_rate("2020-06-24T15:00:00", 0.2094, true)?;
        assert_rate("2020-05-01T14:00:00", 0.2094, true)?;
        assert_rate("2020-10-30T19:00:00", 0.2094, true)?;
        assert_rate("2020-06-24T20:00:00", 0.0727, false)?;
        Ok(())
    }

    #[test]
    fn test_peak_summer() -> Result {
        assert_rate("2020-07-24T01:00:00", 0.0730, false)?;
        assert_rate("2020-07-24T15:00:00", 0.2409, true)?;
        assert_rate("2020-08-31T19:00:00", 0.2409, true)?;
        Ok(())
    }

    #[test]
    fn test_season_boundaries() -> Result {
        // Friday, 30 April 2021 is still winter, Monday 1 November 2021 is winter again.
        assert_rate("2021-04-30T15:00:00", 0.0691, false)?;
        assert_rate("2021-11-01T15:00:00", 0.0691, false)?;
        // Thursday, 1 July 2021 and Tuesday, 31 August 2021 are peak summer.
        assert_rate("2021-07-01T00:00:00", 0.0730, false)?;
        assert_rate("2021-08-31T23:59:59", 0.0730, false)?;
        // Wednesday, 1 September 2021 is back to regular summer.
        assert_rate("2021-09-01T15:00:00", 0.2094, true)?;
        Ok(())
    }

    #[test]
    fn test_weekends() -> Result {
        assert_rate("2020-02-08T6:00:00", 0.0691, false)?;
        assert_rate("2020-06-27T15:00:00", 0.0727, false)?;
        assert_rate("2020-07-18T15:00:00", 0.0730, false)?;
        Ok(())
    }

    #[test]
    fn test_holidays() -> Result {
        assert_rate("2020-01-01T06:00:00", 0.0691, false)?;
        assert_rate("2021-05-31T16:00:00", 0.0727, false)?;
        assert_rate("2019-07-04T16:00:00", 0.0730, false)?;
        assert_rate("2020-09-07T16:00:00", 0.0727, false)?;
        assert_rate("2020-11-26T17:00:00", 0.0691, false)?;
        assert_rate("2020-12-24T17:00:00", 0.0691, false)?;
        Ok(())
    }

    /// Only the fourth Thursday of November is Thanksgiving; the others are regular weekdays.
    #[test]
    fn test_other_november_thursdays_are_regular() -> Result {
        assert_rate("2020-11-19T17:00:00", 0.0951, true)?;
        assert_rate("2020-11-05T06:00:00", 0.0951, true)?;
        Ok(())
    }

    /// Christmas Day itself is a regular weekday, only the 24th is observed.
    #[test]
    fn test_christmas_day_is_regular() -> Result {
        assert_rate("2020-12-25T17:00:00", 0.0951, true)
    }

    #[test]
    fn test_peak_summer_afternoons() {
        let mut date = NaiveDate::from_ymd_opt(2020, 7, 1).unwrap();
        while date.month() <= 8 {
            for hour in 14..20 {
                let rate = resolve(date.and_hms_opt(hour, 30, 0).unwrap());
                if is_weekend(date) || Holiday::of(date).is_some() {
                    assert_eq!(rate, Rate { value: KilowattHourRate(0.0730), is_peak: false });
                } else {
                    assert_eq!(rate, Rate { value: KilowattHourRate(0.2409), is_peak: true });
                }
            }
            date = date + Days::new(1);
        }
    }

    #[test]
    fn test_winter_mornings() {
        let mut date = NaiveDate::from_ymd_opt(2021, 1, 2).unwrap();
        while date.month() <= 2 {
            let rate = resolve(date.and_hms_opt(6, 0, 0).unwrap());
            if is_weekend(date) {
                assert_eq!(rate, Rate { value: KilowattHourRate(0.0691), is_peak: false });
            } else {
                assert_eq!(rate, Rate { value: KilowattHourRate(0.0951), is_peak: true });
            }
            date = date + Days::new(1);
        }
    }

    #[test]
    fn test_missing_timestamp() {
        assert!(matches!(resolve_rate(None), Err(RateError::MissingTimestamp)));
    }

    #[test]
    fn test_invalid_timestamp() {
        assert!(matches!(resolve_rate(Some("not-a-date")), Err(RateError::Parse { .. })));
        assert!(matches!(resolve_rate(Some("badvalue")), Err(RateError::Parse { .. })));
    }
}
