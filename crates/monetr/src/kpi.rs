//! KPI configuration and `"kpi.dimension"` key resolution.

use std::collections::HashMap;

/// Numeric API identifiers for one KPI and its dimensions.
#[derive(Debug, Clone)]
pub struct KpiEntry {
    /// KPI identifier.
    pub kpi: u64,
    /// Dimension name to dimension identifier.
    pub dimensions: HashMap<String, u64>,
}

/// Why a `"kpi.dimension"` key failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// The key has no `.` separator.
    #[error("key {0:?} is not of the form \"kpi.dimension\"")]
    Malformed(String),

    /// No KPI with this name is configured.
    #[error("unknown KPI {0:?}")]
    UnknownKpi(String),

    /// The KPI is known but has no dimension with this name.
    #[error("unknown dimension {dimension:?} for KPI {kpi:?}")]
    UnknownDimension { kpi: String, dimension: String },
}

/// Mapping from KPI and dimension names to their numeric API identifiers.
///
/// All lookups are case-insensitive: keys are lowercased on construction,
/// and `"kpi.dimension"` keys are lowercased before resolution.
///
/// # Example
///
/// ```rust
/// use monetr::KpiConfig;
///
/// let config = KpiConfig::new()
///     .kpi("Revenue", 12, [("US", 4), ("EU", 5)])
///     .kpi("Signups", 7, [("Organic", 1)]);
///
/// assert_eq!(config.resolve("revenue.us").unwrap(), (12, 4));
/// assert_eq!(config.resolve("SIGNUPS.ORGANIC").unwrap(), (7, 1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KpiConfig {
    entries: HashMap<String, KpiEntry>,
}

impl KpiConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a KPI with its dimensions.
    pub fn kpi<N, D>(mut self, name: impl Into<String>, id: u64, dimensions: D) -> Self
    where
        N: Into<String>,
        D: IntoIterator<Item = (N, u64)>,
    {
        let dimensions = dimensions
            .into_iter()
            .map(|(name, id)| (name.into().to_lowercase(), id))
            .collect();

        self.entries
            .insert(name.into().to_lowercase(), KpiEntry { kpi: id, dimensions });
        self
    }

    /// Build a configuration from caller-supplied entries.
    ///
    /// Keys of arbitrary case are accepted; the input is not modified.
    pub fn from_entries(entries: &HashMap<String, KpiEntry>) -> Self {
        let entries = entries
            .iter()
            .map(|(name, entry)| {
                let dimensions = entry
                    .dimensions
                    .iter()
                    .map(|(dim, id)| (dim.to_lowercase(), *id))
                    .collect();
                (
                    name.to_lowercase(),
                    KpiEntry {
                        kpi: entry.kpi,
                        dimensions,
                    },
                )
            })
            .collect();

        Self { entries }
    }

    /// Resolve a `"kpi.dimension"` key to `(kpi_id, dimension_id)`.
    ///
    /// The key is split on the first `.`; both halves are matched
    /// case-insensitively.
    pub fn resolve(&self, key: &str) -> Result<(u64, u64), KeyError> {
        let (kpi, dimension) = key
            .split_once('.')
            .ok_or_else(|| KeyError::Malformed(key.to_string()))?;

        let kpi = kpi.to_lowercase();
        let dimension = dimension.to_lowercase();

        let entry = self
            .entries
            .get(&kpi)
            .ok_or_else(|| KeyError::UnknownKpi(kpi.clone()))?;

        let dimension_id =
            entry
                .dimensions
                .get(&dimension)
                .ok_or_else(|| KeyError::UnknownDimension {
                    kpi: kpi.clone(),
                    dimension,
                })?;

        Ok((entry.kpi, *dimension_id))
    }

    /// Number of configured KPIs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no KPIs are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KpiConfig {
        KpiConfig::new()
            .kpi("Revenue", 12, [("US", 4), ("EU", 5)])
            .kpi("signups", 7, [("organic", 1), ("Paid", 2)])
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let config = sample();

        assert_eq!(config.resolve("Revenue.US").unwrap(), (12, 4));
        assert_eq!(config.resolve("revenue.us").unwrap(), (12, 4));
        assert_eq!(config.resolve("REVENUE.eu").unwrap(), (12, 5));
        assert_eq!(config.resolve("signups.PAID").unwrap(), (7, 2));
    }

    #[test]
    fn test_resolve_unknown_kpi() {
        let config = sample();

        assert_eq!(
            config.resolve("churn.us"),
            Err(KeyError::UnknownKpi("churn".into()))
        );
    }

    #[test]
    fn test_resolve_unknown_dimension() {
        let config = sample();

        assert_eq!(
            config.resolve("revenue.mars"),
            Err(KeyError::UnknownDimension {
                kpi: "revenue".into(),
                dimension: "mars".into(),
            })
        );
    }

    #[test]
    fn test_resolve_malformed_key() {
        let config = sample();

        assert_eq!(
            config.resolve("revenue"),
            Err(KeyError::Malformed("revenue".into()))
        );
    }

    #[test]
    fn test_resolve_splits_on_first_dot() {
        let config = KpiConfig::new().kpi("latency", 3, [("p99.9", 8)]);

        assert_eq!(config.resolve("latency.p99.9").unwrap(), (3, 8));
    }

    #[test]
    fn test_from_entries_normalizes_without_mutating_input() {
        let mut entries = HashMap::new();
        entries.insert(
            "Revenue".to_string(),
            KpiEntry {
                kpi: 12,
                dimensions: HashMap::from([("US".to_string(), 4)]),
            },
        );

        let config = KpiConfig::from_entries(&entries);

        assert_eq!(config.resolve("revenue.us").unwrap(), (12, 4));
        // Caller's map still has the original casing.
        assert!(entries.contains_key("Revenue"));
        assert!(entries["Revenue"].dimensions.contains_key("US"));
    }

    #[test]
    fn test_len_and_is_empty() {
        assert!(KpiConfig::new().is_empty());
        assert_eq!(sample().len(), 2);
    }
}
