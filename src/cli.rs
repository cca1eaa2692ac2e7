use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

use crate::model::Config;

#[derive(Debug, Parser)]
#[command(author, version, about = "Deadline-bound numbers aggregation service", long_about = None)]
pub struct Cli {
    /// Address to listen on
    #[arg(short = 'l', long = "listen", default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,

    /// Per-request collection budget in milliseconds. Bounds how long sources
    /// are waited for, not total response latency; cancellation propagation
    /// and response serialization add a little on top.
    #[arg(long = "budget", default_value_t = 500)]
    pub budget_ms: u64,
}

impl Cli {
    pub fn into_config(self) -> anyhow::Result<Config> {
        if self.budget_ms == 0 {
            anyhow::bail!("budget must be greater than zero");
        }

        Ok(Config {
            listen: self.listen,
            budget: Duration::from_millis(self.budget_ms),
        })
    }
}
