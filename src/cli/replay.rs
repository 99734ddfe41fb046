use std::{fs, path::PathBuf};

use clap::Parser;
use srpenergy::{
    api::srp::payload::{Export, HourlyUsageList, Payload},
    prelude::*,
    usage::Billing,
};

use crate::{cli::BillingArgs, tables::build_usage_table};

#[derive(Parser)]
pub struct ReplayArgs {
    /// Saved `usage/hourlydetail` JSON response, or a `.csv` export.
    pub path: PathBuf,

    #[clap(flatten)]
    pub billing: BillingArgs,
}

impl ReplayArgs {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn run(self) -> Result {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read `{}`", self.path.display()))?;
        let billing = self.billing.billing();
        let is_export =
            self.path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));
        let records = if is_export {
            ensure!(
                billing == Billing::Flat,
                "the export only carries the totals, the time-of-use billing needs the tiers"
            );
            Export(contents).into_records()?
        } else {
            serde_json::from_str::<HourlyUsageList>(&contents)
                .context("failed to deserialize the hourly usage")?
                .into_records()?
        };
        info!(n_records = records.len(), ?billing, "replaying…");
        println!("{}", build_usage_table(&billing.aggregate(records)));
        Ok(())
    }
}
