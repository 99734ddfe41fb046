use clap::Parser;
use srpenergy::{
    api::{Client, Credentials, session::new_agent, srp::BASE_URL},
    prelude::*,
};
use ureq::Agent;

#[derive(Parser)]
pub struct ConnectionArgs {
    /// Billing account number.
    #[clap(long = "account-id", env = "SRP_ACCOUNT_ID")]
    pub account_id: String,

    #[clap(long = "username", env = "SRP_USER_NAME")]
    pub username: String,

    #[clap(long = "password", env = "SRP_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[clap(long = "base-url", env = "SRP_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// HTTP timeout for the entire call.
    #[clap(long = "timeout", env = "SRP_TIMEOUT", default_value = "10s")]
    pub timeout: humantime::Duration,
}

impl ConnectionArgs {
    pub fn new_client(&self) -> Result<Client<Agent>> {
        let credentials =
            Credentials::try_new(&self.account_id, &self.username, &self.password)?;
        debug!(account_id = credentials.account_id(), base_url = %self.base_url, "connecting…");
        Ok(Client::builder()
            .session(new_agent(self.timeout.into()))
            .credentials(credentials)
            .base_url(&self.base_url)
            .build())
    }

    /// Exit with an error when the credentials are rejected.
    #[instrument(skip_all, fields(account_id = %self.account_id))]
    pub fn validate(&self) -> Result {
        ensure!(self.new_client()?.validate(), "the credentials are rejected");
        println!("The credentials are valid.");
        Ok(())
    }
}
