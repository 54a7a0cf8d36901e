//! Monetr client implementation.

use crate::batch::{group_by_project, BATCH_SIZE};
use crate::config::{Config, MonetrBuilder};
use crate::kpi::KpiConfig;
use crate::transport::HttpTransport;
use crate::types::{
    BatchSummary, BlockOutcome, DataPoint, ItemOutcome, ItemStatus, KeyedDataPoint, KeyedSummary,
    RealtimeValue,
};
use crate::Error;
use tracing::{error, info, warn};

/// Monetr KPI reporting client.
///
/// Configuration is immutable after construction; build a new client to
/// change it. All reporting methods absorb transport failures and surface
/// them through their return values rather than errors.
///
/// # Example
///
/// ```rust,no_run
/// use monetr::{DataPoint, Environment, Monetr};
///
/// #[tokio::main]
/// async fn main() -> Result<(), monetr::Error> {
///     let client = Monetr::builder("tok_xxx")
///         .environment(Environment::Staging)
///         .organization("acme")
///         .build()?;
///
///     let summary = client
///         .report_batch(vec![DataPoint::new("proj_1", 12, 4, 99.5, 1706400000000)])
///         .await;
///     assert!(summary.all_succeeded());
///     Ok(())
/// }
/// ```
pub struct Monetr {
    config: Config,
    transport: HttpTransport,
}

impl Monetr {
    /// Create a new builder with the given SDK token.
    pub fn builder(token: impl Into<String>) -> MonetrBuilder {
        MonetrBuilder::new(token)
    }

    /// Create a new client from config.
    pub(crate) fn from_config(config: Config) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Report a single value to the realtime endpoint.
    ///
    /// Returns `false` on any failure; the cause is logged, never raised.
    pub async fn report(&self, kpi_id: u64, dimension_id: u64, value: f64, date: i64) -> bool {
        let body = RealtimeValue { value, date };

        match self.transport.send_realtime(kpi_id, dimension_id, &body).await {
            Ok(()) => true,
            Err(e) => {
                error!(kpi_id, dimension_id, error = %e, "realtime report failed");
                false
            }
        }
    }

    /// Report a batch of data points to the bulk endpoint.
    ///
    /// Points are grouped by project in first-seen order, then submitted in
    /// blocks of at most [`BATCH_SIZE`]. A failed block never stops
    /// submission of the remaining blocks. When the client was built with
    /// `create_new_dimensions(true)`, every submitted point is tagged with
    /// `create = true`.
    pub async fn report_batch(&self, data: Vec<DataPoint>) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for (project_id, mut group) in group_by_project(data) {
            if self.config.create_new_dimensions() {
                for point in &mut group {
                    point.create = Some(true);
                }
            }

            for block in group.chunks(BATCH_SIZE) {
                let error = match self.transport.send_block(block).await {
                    Ok(()) => None,
                    Err(e) => {
                        error!(
                            project_id = %project_id,
                            len = block.len(),
                            error = %e,
                            "bulk report block failed"
                        );
                        Some(e.to_string())
                    }
                };

                summary.blocks.push(BlockOutcome {
                    project_id: project_id.clone(),
                    len: block.len(),
                    error,
                });
            }
        }

        if summary.all_succeeded() {
            info!(blocks = summary.block_count(), "batch reporting completed");
        } else {
            error!("failed to report one or more data blocks");
        }

        summary
    }

    /// Report keyed data points to the realtime endpoint, one call per point.
    ///
    /// Each `"kpi.dimension"` key is resolved case-insensitively against
    /// `kpi_config`. A point whose key does not resolve is skipped and
    /// recorded as [`ItemStatus::InvalidKey`]; a transport failure is
    /// recorded as [`ItemStatus::Failed`]. Neither stops the remaining
    /// points from being processed.
    pub async fn report_keyed(
        &self,
        points: Vec<KeyedDataPoint>,
        kpi_config: &KpiConfig,
    ) -> KeyedSummary {
        let mut summary = KeyedSummary::default();

        for point in points {
            let status = match kpi_config.resolve(&point.key) {
                Ok((kpi_id, dimension_id)) => {
                    let body = RealtimeValue {
                        value: point.value,
                        date: point.date,
                    };

                    match self.transport.send_realtime(kpi_id, dimension_id, &body).await {
                        Ok(()) => ItemStatus::Sent,
                        Err(e) => {
                            error!(key = %point.key, error = %e, "realtime report failed");
                            ItemStatus::Failed(e.to_string())
                        }
                    }
                }
                Err(e) => {
                    warn!(key = %point.key, error = %e, "skipping point with unresolvable key");
                    ItemStatus::InvalidKey(e.to_string())
                }
            };

            summary.items.push(ItemOutcome {
                key: point.key,
                status,
            });
        }

        summary
    }
}

impl MonetrBuilder {
    /// Build the Monetr client.
    pub fn build(self) -> Result<Monetr, Error> {
        let config = self.build_config()?;
        Monetr::from_config(config)
    }
}
