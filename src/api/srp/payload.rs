//! Usage payload shapes served by the portal over the years.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_with::serde_as;

use crate::{
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
    tariff::parse_timestamp,
    usage::{Tier, UsageRecord},
};

/// Payload that can be normalized into usage records.
///
/// A single malformed record fails the whole payload.
pub trait Payload {
    fn into_records(self) -> Result<Vec<UsageRecord>>;
}

/// `usage/hourlydetail` response.
#[must_use]
#[derive(Deserialize)]
pub struct HourlyUsageList {
    #[serde(rename = "hourlyUsageList")]
    pub hourly_usage_list: Vec<HourlyUsage>,
}

#[must_use]
#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyUsage {
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub on_peak_kwh: KilowattHours,

    #[serde(default)]
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub off_peak_kwh: KilowattHours,

    #[serde(default)]
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub shoulder_kwh: KilowattHours,

    #[serde(default)]
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub super_off_peak_kwh: KilowattHours,

    #[serde(default)]
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub total_kwh: KilowattHours,

    #[serde(default)]
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub on_peak_cost: Cost,

    #[serde(default)]
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub off_peak_cost: Cost,

    #[serde(default)]
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub shoulder_cost: Cost,

    #[serde(default)]
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub super_off_peak_cost: Cost,

    #[serde(default)]
    #[serde_as(as = "serde_with::DefaultOnNull")]
    pub total_cost: Cost,
}

impl TryFrom<HourlyUsage> for UsageRecord {
    type Error = Error;

    fn try_from(usage: HourlyUsage) -> Result<Self> {
        Ok(Self {
            at: parse_timestamp(usage.date.as_deref())?,
            on_peak: Tier { energy: usage.on_peak_kwh, cost: usage.on_peak_cost },
            off_peak: Tier { energy: usage.off_peak_kwh, cost: usage.off_peak_cost },
            shoulder: Tier { energy: usage.shoulder_kwh, cost: usage.shoulder_cost },
            super_off_peak: Tier {
                energy: usage.super_off_peak_kwh,
                cost: usage.super_off_peak_cost,
            },
            total: Tier { energy: usage.total_kwh, cost: usage.total_cost },
        })
    }
}

impl Payload for HourlyUsageList {
    fn into_records(self) -> Result<Vec<UsageRecord>> {
        self.hourly_usage_list
            .into_iter()
            .enumerate()
            .map(|(index, usage)| {
                UsageRecord::try_from(usage).with_context(|| format!("invalid usage record #{index}"))
            })
            .collect()
    }
}

/// Legacy «Export to Excel» comma-separated report, totals only.
#[must_use]
pub struct Export(pub String);

/// `date,time,kWh,cost` line, for example: `10/09/2019,12:00 AM,0.4,$0.08`.
#[derive(Deserialize)]
struct ExportLine(String, String, f64, String);

impl TryFrom<ExportLine> for UsageRecord {
    type Error = Error;

    fn try_from(ExportLine(date, time, energy, cost): ExportLine) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&date, "%m/%d/%Y")
            .with_context(|| format!("invalid date `{date}`"))?;
        let time = NaiveTime::parse_from_str(&time, "%I:%M %p")
            .with_context(|| format!("invalid time `{time}`"))?;
        let cost = cost
            .replace('$', "")
            .parse::<f64>()
            .with_context(|| format!("invalid cost `{cost}`"))?;
        Ok(Self::builder()
            .at(date.and_time(time))
            .total(Tier { energy: KilowattHours(energy), cost: Cost(cost) })
            .build())
    }
}

impl Payload for Export {
    fn into_records(self) -> Result<Vec<UsageRecord>> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(self.0.as_bytes())
            .deserialize::<ExportLine>()
            .enumerate()
            .map(|(index, line)| {
                line.map_err(Error::from)
                    .and_then(UsageRecord::try_from)
                    .with_context(|| format!("invalid export line #{index}"))
            })
            .collect()
    }
}
