//! Coordinates and location types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::great_circle_km;

/// Identifier of a location in the backing catalog.
pub type LocationId = u32;

/// Name carried by the two origin sentinels that open and close a route.
pub const ORIGIN_NAME: &str = "Initial";

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_tour::models::Coordinates;
///
/// let lodz = Coordinates::new(51.742503, 19.432956);
/// assert_eq!(lodz.latitude(), 51.742503);
/// assert!(lodz.distance_to(&lodz).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair. No range validation is performed here.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if both components are finite and inside the valid
    /// latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        great_circle_km(*self, *other)
    }
}

/// A point of interest that can be placed on a route.
///
/// Only the identifier and coordinates take part in route construction;
/// `name` and `place` are descriptive.
///
/// Two locations are equal when their identifiers match **or** their names
/// match. A location without an identifier (such as an origin sentinel) can
/// therefore only equal another location by name. The relation is not
/// transitive, so `Location` deliberately does not implement `Eq` or `Hash`;
/// collections keyed by location use [`LocationId`].
///
/// # Examples
///
/// ```
/// use u_tour::models::Location;
///
/// let a = Location::new(307, 49.968, 20.610).with_name("Browar Okocim");
/// let b = Location::new(307, 0.0, 0.0);
/// let c = Location::new(999, 1.0, 1.0).with_name("Browar Okocim");
/// assert_eq!(a, b); // same id
/// assert_eq!(a, c); // same name
/// assert_ne!(b, c);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    id: Option<LocationId>,
    coordinates: Coordinates,
    name: Option<String>,
    place: Option<String>,
}

impl Location {
    /// Creates a catalog location with the given identifier.
    pub fn new(id: LocationId, latitude: f64, longitude: f64) -> Self {
        Self {
            id: Some(id),
            coordinates: Coordinates::new(latitude, longitude),
            name: None,
            place: None,
        }
    }

    /// Creates an origin sentinel: no identifier, named [`ORIGIN_NAME`].
    pub fn origin(coordinates: Coordinates) -> Self {
        Self {
            id: None,
            coordinates,
            name: Some(ORIGIN_NAME.to_string()),
            place: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the place (city, region) the location belongs to.
    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Catalog identifier, `None` for sentinels.
    pub fn id(&self) -> Option<LocationId> {
        self.id
    }

    /// Position of this location.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Place, if any.
    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    /// `true` when both locations carry the same identifier.
    pub fn ids_match(&self, other: &Location) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }

    /// `true` when both locations carry the same name.
    pub fn names_match(&self, other: &Location) -> bool {
        matches!((&self.name, &other.name), (Some(a), Some(b)) if a == b)
    }

    /// Great-circle distance to another location, in kilometers.
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.coordinates.distance_to(&other.coordinates)
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.ids_match(other) || self.names_match(other)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}",
            self.name.as_deref().unwrap_or("-"),
            self.place.as_deref().unwrap_or("-")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_accessors() {
        let c = Coordinates::new(51.742503, 19.432956);
        assert_eq!(c.latitude(), 51.742503);
        assert_eq!(c.longitude(), 19.432956);
    }

    #[test]
    fn test_coordinates_validity() {
        assert!(Coordinates::new(0.0, 0.0).is_valid());
        assert!(Coordinates::new(-90.0, 180.0).is_valid());
        assert!(!Coordinates::new(90.1, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -180.5).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_location_new() {
        let l = Location::new(1391, 36.151, -86.782)
            .with_name("Yazoo Brewing")
            .with_place("Nashville");
        assert_eq!(l.id(), Some(1391));
        assert_eq!(l.name(), Some("Yazoo Brewing"));
        assert_eq!(l.place(), Some("Nashville"));
        assert_eq!(l.coordinates(), Coordinates::new(36.151, -86.782));
    }

    #[test]
    fn test_origin_sentinel() {
        let o = Location::origin(Coordinates::new(1.0, 2.0));
        assert_eq!(o.id(), None);
        assert_eq!(o.name(), Some(ORIGIN_NAME));
        assert_eq!(o, Location::origin(Coordinates::new(1.0, 2.0)));
    }

    #[test]
    fn test_equality_by_id() {
        let a = Location::new(5, 0.0, 0.0).with_name("A");
        let b = Location::new(5, 1.0, 1.0).with_name("B");
        assert!(a.ids_match(&b));
        assert!(!a.names_match(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_by_name() {
        let a = Location::new(5, 0.0, 0.0).with_name("Same");
        let b = Location::new(6, 1.0, 1.0).with_name("Same");
        assert!(!a.ids_match(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_fields_never_match() {
        let origin = Location::origin(Coordinates::new(0.0, 0.0));
        let unnamed = Location::new(1, 0.0, 0.0);
        let other_unnamed = Location::new(2, 0.0, 0.0);
        assert_ne!(origin, unnamed);
        assert_ne!(unnamed, other_unnamed);
    }

    #[test]
    fn test_display() {
        let l = Location::new(1, 0.0, 0.0).with_name("Watney Brewery");
        assert_eq!(l.to_string(), "Watney Brewery | -");
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Location::new(1, 35.6197, -78.8085);
        let b = Location::new(2, 44.1004, -70.2148);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }
}
