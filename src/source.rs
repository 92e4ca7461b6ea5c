//! Snapshot acquisition.
//!
//! One interface, two implementations: a mock that delivers the fixed
//! dataset after a configurable delay, and an HTTP client that issues a
//! single GET against a configured endpoint. The app acquires exactly one
//! snapshot per session.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::snapshot::MetricsSnapshot;

#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Human-readable description for the startup log line.
    fn describe(&self) -> String;

    /// Acquires the metrics snapshot. Called once per view session.
    async fn acquire(&self) -> Result<MetricsSnapshot>;
}

/// Simulated data source: fixed payload after a fixed delay, never fails.
pub struct MockSource {
    delay: Duration,
}

impl MockSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SnapshotSource for MockSource {
    fn describe(&self) -> String {
        format!("mock data after {}ms", self.delay.as_millis())
    }

    async fn acquire(&self) -> Result<MetricsSnapshot> {
        tokio::time::sleep(self.delay).await;
        debug!("mock snapshot ready");
        Ok(MetricsSnapshot::mock())
    }
}

/// Networked data source: one GET, JSON body decoded into the snapshot.
/// No retry, no auth; failures surface as `SourceError` to the caller.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SnapshotSource for HttpSource {
    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }

    async fn acquire(&self) -> Result<MetricsSnapshot> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let snapshot = serde_json::from_str(&body)?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;

    #[tokio::test(start_paused = true)]
    async fn mock_source_delivers_fixed_snapshot_after_delay() {
        let source = MockSource::new(Duration::from_millis(1000));
        let start = tokio::time::Instant::now();
        let snapshot = source.acquire().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));

        assert_eq!(snapshot.total_sales, 1200);
        assert_eq!(snapshot.total_revenue, 45000.0);
        let months = snapshot.monthly_sales.unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].month, "January");
        assert_eq!(months[0].sales, 100.0);
        assert_eq!(months[11].month, "December");
        assert_eq!(months[11].sales, 150.0);
    }

    #[test]
    fn malformed_body_maps_to_decode_error() {
        let result = serde_json::from_str::<MetricsSnapshot>("<!doctype html>")
            .map_err(SourceError::from);
        assert!(matches!(result, Err(SourceError::Decode(_))));
    }

    #[test]
    fn source_descriptions() {
        assert_eq!(
            MockSource::new(Duration::from_millis(1000)).describe(),
            "mock data after 1000ms"
        );
        assert_eq!(
            HttpSource::new("http://localhost:5000/api/metrics".to_string()).describe(),
            "GET http://localhost:5000/api/metrics"
        );
    }
}
