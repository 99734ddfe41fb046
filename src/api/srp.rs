//! [SRP My Account](https://myaccount.srpnet.com) client.

pub mod payload;

use serde::{Deserialize, Serialize};

use self::payload::{HourlyUsageList, Payload};
use crate::{
    api::session::Session,
    prelude::*,
    usage::{Billing, Period, Usage},
};

pub const BASE_URL: &str = "https://myaccount.srpnet.com/myaccountapi/api/";

const LOGIN_SUCCESSFUL: &str = "Log in successful.";

pub struct Credentials {
    account_id: String,
    username: String,
    password: String,
}

impl Credentials {
    pub fn try_new(
        account_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let (account_id, username, password) =
            (account_id.into(), username.into(), password.into());
        ensure!(!account_id.trim().is_empty(), "account id must not be blank");
        ensure!(
            account_id.chars().all(|char| char.is_ascii_digit()),
            "account should only contain numbers"
        );
        ensure!(!username.trim().is_empty(), "username must not be blank");
        ensure!(!password.trim().is_empty(), "password must not be blank");
        Ok(Self { account_id, username, password })
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

#[derive(bon::Builder)]
pub struct Client<S> {
    session: S,
    credentials: Credentials,

    #[builder(into, default = BASE_URL.to_owned())]
    base_url: String,
}

impl<S: Session> Client<S> {
    /// Check the credentials by logging in.
    #[instrument(skip_all, fields(account_id = %self.credentials.account_id))]
    pub fn validate(&self) -> bool {
        match self.log_in() {
            Ok(()) => {
                info!("logged in");
                true
            }
            Err(error) => {
                warn!("failed to log in: {error:#}");
                false
            }
        }
    }

    /// Fetch the hourly usage within the period.
    #[instrument(
        skip_all,
        fields(
            account_id = %self.credentials.account_id,
            start = %period.start(),
            end = %period.end(),
        ),
    )]
    pub fn usage(&self, period: &Period, billing: Billing) -> Result<Vec<Usage>> {
        self.log_in()?;
        let xsrf_token = self.get_xsrf_token()?;
        let records = self.get_hourly_usage(period, &xsrf_token)?.into_records()?;
        info!(n_records = records.len(), ?billing, "fetched");
        Ok(billing.aggregate(records))
    }

    fn log_in(&self) -> Result {
        #[derive(Deserialize)]
        struct LoginResponse {
            message: String,
        }

        let body = self.session.post_form(
            &self.url("login/authorize"),
            &[
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ],
        )?;
        let response: LoginResponse =
            serde_json::from_str(&body).context("failed to deserialize the login response")?;
        ensure!(response.message == LOGIN_SUCCESSFUL, "login is rejected: {}", response.message);
        Ok(())
    }

    fn get_xsrf_token(&self) -> Result<String> {
        #[derive(Deserialize)]
        struct AntiForgeryToken {
            #[serde(rename = "xsrfToken")]
            xsrf_token: String,
        }

        let body = self.session.get(&self.url("login/antiforgerytoken"), &[])?;
        let token: AntiForgeryToken = serde_json::from_str(&body)
            .context("failed to deserialize the anti-forgery token response")?;
        Ok(token.xsrf_token)
    }

    fn get_hourly_usage(&self, period: &Period, xsrf_token: &str) -> Result<HourlyUsageList> {
        #[derive(Serialize)]
        struct HourlyDetailQuery<'a> {
            #[serde(rename = "billaccount")]
            account_id: &'a str,

            #[serde(rename = "beginDate")]
            begin_date: String,

            #[serde(rename = "endDate")]
            end_date: String,
        }

        let query = serde_qs::to_string(&HourlyDetailQuery {
            account_id: &self.credentials.account_id,
            begin_date: period.start().format("%m-%d-%Y").to_string(),
            end_date: period.end().format("%m-%d-%Y").to_string(),
        })?;
        let body = self.session.get(
            &format!("{}?{query}", self.url("usage/hourlydetail")),
            &[("x-xsrf-token", xsrf_token)],
        )?;
        serde_json::from_str(&body).context("failed to deserialize the hourly usage")
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}
