use chrono::{Local, NaiveDateTime};
use clap::Parser;
use srpenergy::{prelude::*, usage::Period};

use crate::{
    cli::{BillingArgs, ConnectionArgs, parse_timestamp_arg},
    tables::build_usage_table,
};

#[derive(Parser)]
pub struct UsageArgs {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    /// Beginning of the period, for example: `2020-06-24`.
    #[clap(long, value_parser = parse_timestamp_arg)]
    pub start: NaiveDateTime,

    /// End of the period, inclusive.
    #[clap(long, value_parser = parse_timestamp_arg)]
    pub end: NaiveDateTime,

    #[clap(flatten)]
    pub billing: BillingArgs,
}

impl UsageArgs {
    #[instrument(skip_all, fields(start = %self.start, end = %self.end))]
    pub fn run(self) -> Result {
        let period = Period::try_new(self.start, self.end, Local::now().naive_local())?;
        let billing = self.billing.billing();
        let usage = self.connection.new_client()?.usage(&period, billing)?;
        println!("{}", build_usage_table(&usage));
        Ok(())
    }
}
