//! Error types.

use thiserror::Error;

/// Failure reported by a location or attribute catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not answer the query.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    /// A CSV source could not be parsed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// A catalog file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A record parsed but holds unusable values.
    #[error("invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}

/// Invalid tour parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("origin coordinates must be finite")]
    NonFiniteOrigin,
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("budget must be a non-negative number, got {0}")]
    InvalidBudget(f64),
}

/// Failure of a tour construction or reporting call.
///
/// A failed catalog query aborts the whole construction; it is never
/// treated as "no candidates".
#[derive(Debug, Error)]
pub enum TourError {
    #[error("catalog query failed: {0}")]
    Query(#[from] CatalogError),
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error("route construction exceeded its deadline after {elapsed_ms} ms")]
    DeadlineExceeded { elapsed_ms: u128 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_wraps_catalog_error() {
        let err: TourError = CatalogError::Unavailable("connection refused".into()).into();
        assert!(matches!(err, TourError::Query(CatalogError::Unavailable(_))));
        assert_eq!(
            err.to_string(),
            "catalog query failed: catalog unavailable: connection refused"
        );
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: TourError = ConfigError::InvalidBudget(-1.0).into();
        assert_eq!(err.to_string(), "budget must be a non-negative number, got -1");
    }
}
