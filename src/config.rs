use clap::Parser;
use std::time::Duration;

// Hosted OceanGPT inference endpoint
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://shahidhustles--oceangpt-7b-app-api-endpoint.modal.run";

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "oceangpt-relay")]
#[command(about = "HTTP relay in front of the hosted OceanGPT model")]
pub struct Args {
    // Address to bind
    #[arg(long, env = "RELAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, env = "RELAY_PORT", default_value_t = 8001)]
    pub port: u16,

    // Inference endpoint every prompt is forwarded to
    #[arg(short, long, env = "RELAY_UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    // Upstream timeout in seconds, long enough to ride out a cold start
    #[arg(short = 't', long, env = "RELAY_UPSTREAM_TIMEOUT", default_value_t = 300)]
    pub upstream_timeout: u64,
}

impl Args {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
