//! Tour construction parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Coordinates;

/// Parameters of one tour construction.
///
/// # Examples
///
/// ```
/// use u_tour::config::TourConfig;
///
/// let cfg = TourConfig::from_json(
///     r#"{ "origin": { "latitude": 51.742503, "longitude": 19.432956 }, "budget_km": 2000.0 }"#,
/// ).unwrap();
/// assert_eq!(cfg.budget_km, 2000.0);
/// assert!(cfg.deadline().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourConfig {
    /// Point the tour starts and ends at.
    pub origin: Coordinates,
    /// Maximum total distance, in kilometers.
    pub budget_km: f64,
    /// Optional wall-clock limit for the whole construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
}

impl TourConfig {
    /// Creates a config without a deadline.
    pub fn new(origin: Coordinates, budget_km: f64) -> Self {
        Self {
            origin,
            budget_km,
            deadline_ms: None,
        }
    }

    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks origin and budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_origin(self.origin)?;
        validate_budget(self.budget_km)
    }

    /// Deadline as a [`Duration`], if set.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

pub(crate) fn validate_origin(origin: Coordinates) -> Result<(), ConfigError> {
    let (lat, lon) = (origin.latitude(), origin.longitude());
    if !lat.is_finite() || !lon.is_finite() {
        return Err(ConfigError::NonFiniteOrigin);
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(ConfigError::LatitudeOutOfRange(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(ConfigError::LongitudeOutOfRange(lon));
    }
    Ok(())
}

/// An infinite budget is accepted and means "unbounded".
pub(crate) fn validate_budget(budget: f64) -> Result<(), ConfigError> {
    if budget.is_nan() || budget < 0.0 {
        return Err(ConfigError::InvalidBudget(budget));
    }
    Ok(())
}
