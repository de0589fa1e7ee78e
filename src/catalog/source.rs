//! Catalog capability traits.

use std::collections::BTreeSet;

use crate::error::CatalogError;
use crate::models::{AttributeRecord, Candidate, Coordinates, Location, LocationId};

/// Distance-ranked queries over the locations of a catalog.
///
/// Implementations own their session to the backing store; the route
/// builder borrows one for the duration of a construction and issues its
/// queries sequentially. Result ordering is part of the contract.
///
/// # Examples
///
/// ```
/// use u_tour::catalog::LocationSource;
/// use u_tour::error::CatalogError;
/// use u_tour::models::{Candidate, Coordinates, Location};
///
/// struct Empty;
///
/// impl LocationSource for Empty {
///     fn find_within_radius(
///         &self,
///         _origin: Coordinates,
///         _radius: f64,
///     ) -> Result<Vec<(Location, f64)>, CatalogError> {
///         Ok(vec![])
///     }
///     fn find_between_within_combined(
///         &self,
///         _left: Coordinates,
///         _right: Coordinates,
///         _max_combined: f64,
///     ) -> Result<Vec<Candidate>, CatalogError> {
///         Ok(vec![])
///     }
/// }
///
/// let found = Empty.find_within_radius(Coordinates::new(0.0, 0.0), 10.0).unwrap();
/// assert!(found.is_empty());
/// ```
pub trait LocationSource {
    /// All locations within `radius` km of `origin`, each with its distance
    /// to `origin`, ascending by that distance.
    fn find_within_radius(
        &self,
        origin: Coordinates,
        radius: f64,
    ) -> Result<Vec<(Location, f64)>, CatalogError>;

    /// All locations whose distances to `left` and `right` sum to at most
    /// `max_combined` km, ascending by that sum.
    ///
    /// When `left == right` this degenerates to a radius query around that
    /// point: both distances of every candidate are equal.
    fn find_between_within_combined(
        &self,
        left: Coordinates,
        right: Coordinates,
        max_combined: f64,
    ) -> Result<Vec<Candidate>, CatalogError>;
}

/// Lookup of the attribute records offered at a set of locations.
pub trait AttributeCatalog {
    /// Records offered at any of `ids`, distinct by
    /// [`AttributeRecord::natural_key`], ordered by location id and then
    /// record name.
    fn lookup_attributes_for(
        &self,
        ids: &BTreeSet<LocationId>,
    ) -> Result<Vec<AttributeRecord>, CatalogError>;
}
