mod connection;
mod rate;
mod replay;
mod usage;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use srpenergy::{
    tariff::{RateError, parse_timestamp},
    usage::Billing,
};

pub use self::{
    connection::ConnectionArgs,
    rate::RateArgs,
    replay::ReplayArgs,
    usage::UsageArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve the time-of-use rate.
    #[clap(name = "rate")]
    Rate(RateArgs),

    /// Check the account credentials.
    #[clap(name = "validate")]
    Validate(Box<ConnectionArgs>),

    /// Fetch the hourly usage from the portal.
    #[clap(name = "usage")]
    Usage(Box<UsageArgs>),

    /// Aggregate a saved hourly usage response or a legacy CSV export.
    #[clap(name = "replay")]
    Replay(ReplayArgs),
}

#[derive(Copy, Clone, Parser)]
pub struct BillingArgs {
    /// Price the usage with the time-of-use plan instead of taking the reported totals.
    #[clap(long = "time-of-use", env = "SRP_TIME_OF_USE")]
    pub is_time_of_use: bool,
}

impl BillingArgs {
    pub const fn billing(self) -> Billing {
        Billing::from_time_of_use_flag(self.is_time_of_use)
    }
}

fn parse_timestamp_arg(value: &str) -> Result<NaiveDateTime, RateError> {
    parse_timestamp(Some(value))
}
