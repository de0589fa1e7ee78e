//! Insertion candidate type.

use super::Location;

/// A location evaluated against one gap of a route.
///
/// `left_distance` is the distance to the gap's left anchor and
/// `right_distance` the distance to its right anchor.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Candidate, Location};
///
/// let c = Candidate::new(Location::new(1, 0.0, 1.0), 111.111, 55.5555);
/// assert!((c.combined_distance() - 166.6665).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The location that would be inserted.
    pub location: Location,
    /// Distance to the left anchor of the gap.
    pub left_distance: f64,
    /// Distance to the right anchor of the gap.
    pub right_distance: f64,
}

impl Candidate {
    /// Creates a candidate from a location and its two anchor distances.
    pub fn new(location: Location, left_distance: f64, right_distance: f64) -> Self {
        Self {
            location,
            left_distance,
            right_distance,
        }
    }

    /// Sum of the distances to both anchors.
    pub fn combined_distance(&self) -> f64 {
        self.left_distance + self.right_distance
    }
}
