use std::time::Duration;

use crate::config::Args;

// app's shared state, read-only after startup
pub struct AppState {
    pub client: reqwest::Client,
    pub upstream_url: String,
    pub upstream_timeout: Duration, // bound on a single outbound call
}

impl AppState {
    pub fn new(client: reqwest::Client, upstream_url: String, upstream_timeout: Duration) -> Self {
        Self {
            client,
            upstream_url,
            upstream_timeout,
        }
    }

    // redirects are not followed: a 3xx is an upstream status like any other
    pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
    }

    pub fn from_args(args: &Args) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            Self::build_client()?,
            args.upstream_url.clone(),
            args.upstream_timeout(),
        ))
    }
}
