use chrono::NaiveDateTime;

use crate::{
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
    tariff::{self, Rate},
};

/// Energy and its cost in a single billing tier.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, derive_more::Add)]
pub struct Tier {
    pub energy: KilowattHours,
    pub cost: Cost,
}

/// Hourly usage record, normalized from whatever payload shape the portal has returned.
#[must_use]
#[derive(Copy, Clone, Debug, bon::Builder)]
pub struct UsageRecord {
    pub at: NaiveDateTime,

    #[builder(default)]
    pub on_peak: Tier,

    #[builder(default)]
    pub off_peak: Tier,

    #[builder(default)]
    pub shoulder: Tier,

    #[builder(default)]
    pub super_off_peak: Tier,

    #[builder(default)]
    pub total: Tier,
}

impl UsageRecord {
    pub fn tier_sum(&self) -> Tier {
        self.on_peak + self.off_peak + self.shoulder + self.super_off_peak
    }
}

/// Validated usage query period.
///
/// Only constructed via [`Period::try_new`], so the client never sees a reversed or future one.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Period {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Period {
    pub fn try_new(start: NaiveDateTime, end: NaiveDateTime, now: NaiveDateTime) -> Result<Self> {
        ensure!(start <= end, "start `{start}` can not be greater than end `{end}`");
        ensure!(start <= now, "start `{start}` can not be greater than now");
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Billing {
    /// Take the totals as reported by the portal.
    Flat,

    /// Price the usage with the time-of-use plan.
    TimeOfUse,
}

impl Billing {
    pub const fn from_time_of_use_flag(is_time_of_use: bool) -> Self {
        if is_time_of_use { Self::TimeOfUse } else { Self::Flat }
    }

    /// Convert the records into the usage, preserving their order.
    pub fn aggregate(self, records: impl IntoIterator<Item = UsageRecord>) -> Vec<Usage> {
        records.into_iter().map(|record| self.apply(&record)).collect()
    }

    fn apply(self, record: &UsageRecord) -> Usage {
        match self {
            Self::Flat => {
                // Some meters report only the per-tier breakdown.
                let total = if record.total.energy == KilowattHours::ZERO {
                    record.tier_sum()
                } else {
                    record.total
                };
                Usage { at: record.at, energy: total.energy, cost: total.cost, rate: None }
            }
            Self::TimeOfUse => {
                let rate = tariff::resolve(record.at);
                let energy =
                    if rate.is_peak { record.on_peak.energy } else { record.off_peak.energy };
                let cost = (energy * rate.value).round_to_cents();
                Usage { at: record.at, energy, cost, rate: Some(rate) }
            }
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Usage {
    pub at: NaiveDateTime,
    pub energy: KilowattHours,
    pub cost: Cost,

    /// Applied rate, only known for the time-of-use billing.
    pub rate: Option<Rate>,
}

impl Usage {
    pub fn pretty_date(&self) -> String {
        self.at.format("%m/%d/%Y").to_string()
    }

    pub fn pretty_time(&self) -> String {
        self.at.format("%I:%M %p").to_string()
    }

    pub fn iso_time(&self) -> String {
        self.at.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// Flatten into `(date, time, ISO timestamp, kWh, cost)`.
    pub fn to_tuple(&self) -> (String, String, String, f64, f64) {
        (self.pretty_date(), self.pretty_time(), self.iso_time(), self.energy.0, self.cost.0)
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Default)]
pub struct UsageSummary {
    pub energy: KilowattHours,
    pub cost: Cost,
}

impl<'a> FromIterator<&'a Usage> for UsageSummary {
    fn from_iter<T: IntoIterator<Item = &'a Usage>>(iter: T) -> Self {
        iter.into_iter().fold(Self::default(), |mut summary, usage| {
            summary.energy += usage.energy;
            summary.cost += usage.cost;
            summary
        })
    }
}
