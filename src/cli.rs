use std::time::Duration;

use clap::Parser;

use crate::source::{HttpSource, MockSource, SnapshotSource};

/// Terminal dashboard for a fixed set of e-commerce metrics.
///
/// Acquires one metrics snapshot per session, either from the built-in
/// simulated dataset or from a single HTTP GET, and renders it as five
/// chart panels plus a summary block.
#[derive(Parser, Debug)]
#[command(name = "shopdash")]
#[command(version, about)]
pub struct Cli {
    /// Fetch the snapshot from this URL instead of using mock data
    #[arg(long = "url", value_name = "URL", conflicts_with = "mock")]
    pub url: Option<String>,

    /// Use the built-in mock snapshot (default when --url is absent)
    #[arg(long = "mock")]
    pub mock: bool,

    /// Delivery delay for the mock snapshot, in milliseconds
    #[arg(long = "delay-ms", value_name = "MS", default_value_t = 1000)]
    pub delay_ms: u64,

    /// Log filter written to shopdash.log: trace, debug, info, warn, error
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Builds the data source selected by the flags.
    pub fn source(&self) -> Box<dyn SnapshotSource> {
        match &self.url {
            Some(url) => Box::new(HttpSource::new(url.clone())),
            None => Box::new(MockSource::new(Duration::from_millis(self.delay_ms))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mock_source() {
        let cli = Cli::parse_from(["shopdash"]);
        assert!(cli.url.is_none());
        assert_eq!(cli.delay_ms, 1000);
        assert_eq!(cli.source().describe(), "mock data after 1000ms");
    }

    #[test]
    fn url_selects_http_source() {
        let cli = Cli::parse_from(["shopdash", "--url", "http://localhost:5000/api/metrics"]);
        assert_eq!(
            cli.source().describe(),
            "GET http://localhost:5000/api/metrics"
        );
    }

    #[test]
    fn url_and_mock_conflict() {
        let result = Cli::try_parse_from(["shopdash", "--mock", "--url", "http://x"]);
        assert!(result.is_err());
    }
}
