//! Data point types, wire serialization, and report outcomes.

use serde::Serialize;

/// A single KPI observation for bulk reporting.
///
/// Serialized verbatim as one element of the bulk report payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub project_id: String,
    pub kpi_id: u64,
    pub dimension_id: u64,
    pub value: f64,
    /// Milliseconds since the Unix epoch.
    pub date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<bool>,
}

impl DataPoint {
    /// Create a data point for the given project, KPI and dimension.
    pub fn new(
        project_id: impl Into<String>,
        kpi_id: u64,
        dimension_id: u64,
        value: f64,
        date: i64,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            kpi_id,
            dimension_id,
            value,
            date,
            create: None,
        }
    }
}

/// A KPI observation addressed by a `"kpi.dimension"` string key.
///
/// Resolved against a [`crate::KpiConfig`] before submission; never sent
/// on the wire in this form.
#[derive(Debug, Clone)]
pub struct KeyedDataPoint {
    pub key: String,
    pub value: f64,
    /// Milliseconds since the Unix epoch.
    pub date: i64,
}

impl KeyedDataPoint {
    /// Create a keyed data point.
    pub fn new(key: impl Into<String>, value: f64, date: i64) -> Self {
        Self {
            key: key.into(),
            value,
            date,
        }
    }
}

/// Body of a realtime report request.
#[derive(Debug, Clone, Serialize)]
pub struct RealtimeValue {
    pub value: f64,
    pub date: i64,
}

/// Result of submitting one block of a batch.
#[derive(Debug, Clone)]
pub struct BlockOutcome {
    /// Project the block belongs to.
    pub project_id: String,
    /// Number of data points in the block.
    pub len: usize,
    /// `None` on success, the failure description otherwise.
    pub error: Option<String>,
}

impl BlockOutcome {
    /// Whether this block was accepted.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-block outcomes of a [`crate::Monetr::report_batch`] call.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub blocks: Vec<BlockOutcome>,
}

impl BatchSummary {
    /// Whether every block was accepted.
    pub fn all_succeeded(&self) -> bool {
        self.blocks.iter().all(BlockOutcome::succeeded)
    }

    /// Number of blocks submitted.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

/// Result of submitting one keyed data point.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemStatus {
    /// The point was resolved and accepted.
    Sent,
    /// The key did not resolve to a KPI/dimension pair; the point was skipped.
    InvalidKey(String),
    /// The point was resolved but the submission failed.
    Failed(String),
}

/// Outcome of one entry in a [`crate::Monetr::report_keyed`] call.
#[derive(Debug, Clone)]
pub struct ItemOutcome {
    pub key: String,
    pub status: ItemStatus,
}

/// Per-item outcomes of a [`crate::Monetr::report_keyed`] call.
#[derive(Debug, Clone, Default)]
pub struct KeyedSummary {
    pub items: Vec<ItemOutcome>,
}

impl KeyedSummary {
    /// Whether every entry was resolved and accepted.
    pub fn all_succeeded(&self) -> bool {
        self.items.iter().all(|i| i.status == ItemStatus::Sent)
    }
}
