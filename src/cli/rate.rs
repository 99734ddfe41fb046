use chrono::{Local, NaiveTime, TimeDelta};
use clap::Parser;
use itertools::Itertools;
use srpenergy::{prelude::*, tariff::parse_timestamp};

use crate::tables::build_rate_table;

#[derive(Parser)]
pub struct RateArgs {
    /// Local time, for example: `2020-07-24T15:00:00`. Defaults to now.
    pub timestamp: Option<String>,

    /// Resolve every hour of the day.
    #[clap(long)]
    pub hourly: bool,
}

impl RateArgs {
    pub fn run(self) -> Result {
        let at = match self.timestamp {
            Some(input) => parse_timestamp(Some(&input))?,
            None => Local::now().naive_local(),
        };
        debug!(%at, hourly = self.hourly, "resolving…");
        let hours = if self.hourly {
            let midnight = at.date().and_time(NaiveTime::MIN);
            (0..24).map(|hour| midnight + TimeDelta::hours(hour)).collect_vec()
        } else {
            vec![at]
        };
        println!("{}", build_rate_table(&hours));
        Ok(())
    }
}
