use std::time::Duration;

use ureq::Agent;

use crate::prelude::*;

/// Stateful HTTP session, cookies are kept between the calls.
pub trait Session {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String>;

    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String>;
}

/// Build a default agent with a cookie store.
pub fn new_agent(timeout: Duration) -> Agent {
    Agent::config_builder().timeout_global(Some(timeout)).build().into()
}

impl Session for Agent {
    #[instrument(skip_all, level = Level::DEBUG, fields(url = url))]
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String> {
        let mut request = Self::get(self, url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let body = request
            .call()
            .with_context(|| format!("failed to call `{url}`"))?
            .body_mut()
            .read_to_string()
            .with_context(|| format!("failed to read the response from `{url}`"))?;
        debug!(len = body.len(), "received");
        Ok(body)
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(url = url))]
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String> {
        let body = self
            .post(url)
            .send_form(form.iter().copied())
            .with_context(|| format!("failed to call `{url}`"))?
            .body_mut()
            .read_to_string()
            .with_context(|| format!("failed to read the response from `{url}`"))?;
        debug!(len = body.len(), "received");
        Ok(body)
    }
}
