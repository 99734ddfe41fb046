use chrono::{Datelike, NaiveDate};

use crate::quantity::rate::KilowattHourRate;

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Season {
    /// November through April.
    Winter,

    /// May, June, September and October.
    Summer,

    /// July and August.
    #[display("Peak summer")]
    PeakSummer,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rates {
    pub peak: KilowattHourRate,
    pub off_peak: KilowattHourRate,
}

impl Season {
    /// Peak summer is matched first, it is carved out of the summer months.
    pub fn of(date: NaiveDate) -> Self {
        match date.month() {
            7 | 8 => Self::PeakSummer,
            5..=10 => Self::Summer,
            _ => Self::Winter,
        }
    }

    pub const fn rates(self) -> Rates {
        match self {
            Self::Winter => {
                Rates { peak: KilowattHourRate(0.0951), off_peak: KilowattHourRate(0.0691) }
            }
            Self::Summer => {
                Rates { peak: KilowattHourRate(0.2094), off_peak: KilowattHourRate(0.0727) }
            }
            Self::PeakSummer => {
                Rates { peak: KilowattHourRate(0.2409), off_peak: KilowattHourRate(0.0730) }
            }
        }
    }

    /// Check whether the hour starts within the season's on-peak window.
    pub const fn is_peak_hour(self, hour: u32) -> bool {
        match self {
            Self::Summer | Self::PeakSummer => matches!(hour, 14..20),
            Self::Winter => matches!(hour, 5..9 | 17..21),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of() {
        let season = |month| Season::of(NaiveDate::from_ymd_opt(2020, month, 15).unwrap());
        assert_eq!(season(1), Season::Winter);
        assert_eq!(season(4), Season::Winter);
        assert_eq!(season(5), Season::Summer);
        assert_eq!(season(6), Season::Summer);
        assert_eq!(season(7), Season::PeakSummer);
        assert_eq!(season(8), Season::PeakSummer);
        assert_eq!(season(9), Season::Summer);
        assert_eq!(season(10), Season::Summer);
        assert_eq!(season(11), Season::Winter);
        assert_eq!(season(12), Season::Winter);
    }

    #[test]
    fn test_peak_hours() {
        let hours = |season: Season| {
            (0..24).filter(|hour| season.is_peak_hour(*hour)).collect::<Vec<_>>()
        };
        assert_eq!(hours(Season::Summer), [14, 15, 16, 17, 18, 19]);
        assert_eq!(hours(Season::PeakSummer), [14, 15, 16, 17, 18, 19]);
        assert_eq!(hours(Season::Winter), [5, 6, 7, 8, 17, 18, 19, 20]);
    }
}
