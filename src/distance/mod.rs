//! Great-circle distance between latitude/longitude pairs.
//!
//! All distances are in kilometers.

mod geodesic;

pub use geodesic::{great_circle_km, KM_PER_DEGREE};
