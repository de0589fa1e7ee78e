//! In-memory catalog.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use log::trace;
use serde::Deserialize;

use super::{AttributeCatalog, LocationSource};
use crate::error::CatalogError;
use crate::models::{AttributeRecord, Candidate, Coordinates, Location, LocationId};

/// An attribute offered at a location, as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttributeEntry {
    /// Location offering the record.
    pub location_id: LocationId,
    pub name: Option<String>,
    pub category: Option<String>,
    pub style: Option<String>,
}

impl AttributeEntry {
    /// Creates an entry with only a name.
    pub fn new(location_id: LocationId, name: impl Into<String>) -> Self {
        Self {
            location_id,
            name: Some(name.into()),
            category: None,
            style: None,
        }
    }
}

/// A catalog held entirely in memory.
///
/// Queries scan every location and compute great-circle distances on the
/// fly. Results are ordered ascending by distance, with ties broken by
/// ascending identifier, so repeated queries are deterministic.
///
/// # Examples
///
/// ```
/// use u_tour::catalog::{InMemoryCatalog, LocationSource};
/// use u_tour::models::{Coordinates, Location};
///
/// let catalog = InMemoryCatalog::new(vec![
///     Location::new(1, 0.0, 1.0),
///     Location::new(2, 0.0, 3.0),
/// ]);
/// let near = catalog
///     .find_within_radius(Coordinates::new(0.0, 0.0), 200.0)
///     .unwrap();
/// assert_eq!(near.len(), 1);
/// assert_eq!(near[0].0.id(), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    locations: Vec<Location>,
    attributes: Vec<AttributeEntry>,
}

impl InMemoryCatalog {
    /// Creates a catalog over the given locations, with no attributes.
    pub fn new(locations: Vec<Location>) -> Self {
        Self {
            locations,
            attributes: Vec::new(),
        }
    }

    /// Adds attribute entries.
    pub fn with_attributes(mut self, entries: impl IntoIterator<Item = AttributeEntry>) -> Self {
        self.attributes.extend(entries);
        self
    }

    /// Adds a single location.
    pub fn push_location(&mut self, location: Location) {
        self.locations.push(location);
    }

    /// Adds a single attribute entry.
    pub fn push_attribute(&mut self, entry: AttributeEntry) {
        self.attributes.push(entry);
    }

    /// All stored locations, in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of stored locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the catalog holds no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    fn location_name(&self, id: LocationId) -> Option<String> {
        self.locations
            .iter()
            .find(|l| l.id() == Some(id))
            .and_then(|l| l.name().map(str::to_string))
    }
}

fn by_distance_then_id(a: (f64, &Location), b: (f64, &Location)) -> Ordering {
    a.0.total_cmp(&b.0).then_with(|| a.1.id().cmp(&b.1.id()))
}

impl LocationSource for InMemoryCatalog {
    fn find_within_radius(
        &self,
        origin: Coordinates,
        radius: f64,
    ) -> Result<Vec<(Location, f64)>, CatalogError> {
        let mut found: Vec<(Location, f64)> = self
            .locations
            .iter()
            .map(|l| (l, origin.distance_to(&l.coordinates())))
            .filter(|&(_, d)| d <= radius)
            .map(|(l, d)| (l.clone(), d))
            .collect();
        found.sort_by(|a, b| by_distance_then_id((a.1, &a.0), (b.1, &b.0)));
        trace!("radius query r={radius} returned {} locations", found.len());
        Ok(found)
    }

    fn find_between_within_combined(
        &self,
        left: Coordinates,
        right: Coordinates,
        max_combined: f64,
    ) -> Result<Vec<Candidate>, CatalogError> {
        let mut found: Vec<Candidate> = self
            .locations
            .iter()
            .map(|l| {
                let coords = l.coordinates();
                (l, left.distance_to(&coords), right.distance_to(&coords))
            })
            .filter(|&(_, dl, dr)| dl + dr <= max_combined)
            .map(|(l, dl, dr)| Candidate::new(l.clone(), dl, dr))
            .collect();
        found.sort_by(|a, b| {
            by_distance_then_id(
                (a.combined_distance(), &a.location),
                (b.combined_distance(), &b.location),
            )
        });
        Ok(found)
    }
}

impl AttributeCatalog for InMemoryCatalog {
    fn lookup_attributes_for(
        &self,
        ids: &BTreeSet<LocationId>,
    ) -> Result<Vec<AttributeRecord>, CatalogError> {
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for entry in self.attributes.iter().filter(|e| ids.contains(&e.location_id)) {
            let record = AttributeRecord::from_parts(
                entry.name.clone(),
                self.location_name(entry.location_id),
                entry.category.clone(),
                entry.style.clone(),
            );
            let key = (
                record.name().map(str::to_string),
                record.location_name().map(str::to_string),
            );
            if seen.insert(key) {
                records.push((entry.location_id, record));
            }
        }

        // stable, so the first of equal keys stays first
        records.sort_by(|(a_id, a), (b_id, b)| {
            a_id.cmp(b_id).then_with(|| a.name().cmp(&b.name()))
        });
        Ok(records.into_iter().map(|(_, record)| record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equator_catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            Location::new(3, 0.0, -1.0).with_name("West"),
            Location::new(1, 0.0, 1.0).with_name("East"),
            Location::new(2, 0.0, 2.0).with_name("Far East"),
        ])
    }

    #[test]
    fn test_radius_query_sorted_and_bounded() {
        let c = equator_catalog();
        let found = c
            .find_within_radius(Coordinates::new(0.0, 0.0), 150.0)
            .expect("in-memory");
        let ids: Vec<_> = found.iter().map(|(l, _)| l.id()).collect();
        // East and West tie at 111.111 km; lower id first
        assert_eq!(ids, vec![Some(1), Some(3)]);
        assert!((found[0].1 - 111.111).abs() < 1e-6);
    }

    #[test]
    fn test_radius_query_unbounded() {
        let c = equator_catalog();
        let found = c
            .find_within_radius(Coordinates::new(0.0, 0.0), f64::INFINITY)
            .expect("in-memory");
        assert_eq!(found.len(), 3);
        assert_eq!(found[2].0.id(), Some(2));
    }

    #[test]
    fn test_combined_query_degenerate_anchors() {
        let c = equator_catalog();
        let origin = Coordinates::new(0.0, 0.0);
        let found = c
            .find_between_within_combined(origin, origin, f64::MAX)
            .expect("in-memory");
        assert_eq!(found.len(), 3);
        for cand in &found {
            assert_eq!(cand.left_distance, cand.right_distance);
        }
    }

    #[test]
    fn test_combined_query_ordering() {
        let c = equator_catalog();
        let found = c
            .find_between_within_combined(
                Coordinates::new(0.0, 0.0),
                Coordinates::new(0.0, 1.0),
                400.0,
            )
            .expect("in-memory");
        // East: 111.1 + 0; Far East: 222.2 + 111.1; West: 111.1 + 222.2
        let ids: Vec<_> = found.iter().map(|c| c.location.id()).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
        assert!(found
            .windows(2)
            .all(|w| w[0].combined_distance() <= w[1].combined_distance()));
    }

    #[test]
    fn test_combined_query_bound() {
        let c = equator_catalog();
        let found = c
            .find_between_within_combined(
                Coordinates::new(0.0, 0.0),
                Coordinates::new(0.0, 1.0),
                200.0,
            )
            .expect("in-memory");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_widely_separated_anchors() {
        let c = InMemoryCatalog::new(vec![
            Location::new(1390, 45.78609848, -108.4980011).with_name("Yellowstone Valley Brewing"),
            Location::new(1391, 36.15100098, -86.78209686).with_name("Yazoo Brewing"),
        ]);
        let found = c
            .find_between_within_combined(
                Coordinates::new(35.61970139, -78.8085022),
                Coordinates::new(44.10039902, -70.21479797),
                f64::MAX,
            )
            .expect("in-memory");
        assert_eq!(found[0].location.id(), Some(1391));
        assert!(found[0].combined_distance() < found[1].combined_distance());
    }

    #[test]
    fn test_attribute_lookup_distinct() {
        let c = equator_catalog().with_attributes(vec![
            AttributeEntry::new(1, "Pils"),
            AttributeEntry::new(1, "Pils"),
            AttributeEntry::new(1, "Porter"),
            AttributeEntry::new(2, "Pils"),
            AttributeEntry::new(3, "Stout"),
        ]);
        let ids: BTreeSet<LocationId> = [1, 2].into_iter().collect();
        let records = c.lookup_attributes_for(&ids).expect("in-memory");
        let shown: Vec<String> = records.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            shown,
            vec![
                "Pils | East | - | -",
                "Porter | East | - | -",
                "Pils | Far East | - | -",
            ]
        );
    }

    #[test]
    fn test_attribute_lookup_ordered_by_location_then_name() {
        let c = equator_catalog().with_attributes(vec![
            AttributeEntry::new(2, "Zed"),
            AttributeEntry::new(1, "Porter"),
            AttributeEntry::new(1, "Pils"),
        ]);
        let ids: BTreeSet<LocationId> = [1, 2].into_iter().collect();
        let records = c.lookup_attributes_for(&ids).expect("in-memory");
        let shown: Vec<String> = records.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            shown,
            vec![
                "Pils | East | - | -",
                "Porter | East | - | -",
                "Zed | Far East | - | -",
            ]
        );
    }

    #[test]
    fn test_attribute_lookup_empty_ids() {
        let c = equator_catalog().with_attributes(vec![AttributeEntry::new(1, "Pils")]);
        let records = c.lookup_attributes_for(&BTreeSet::new()).expect("in-memory");
        assert!(records.is_empty());
    }

    #[test]
    fn test_push_and_len() {
        let mut c = InMemoryCatalog::default();
        assert!(c.is_empty());
        c.push_location(Location::new(1, 0.0, 0.0));
        c.push_attribute(AttributeEntry::new(1, "Lager"));
        assert_eq!(c.len(), 1);
        assert_eq!(c.locations()[0].id(), Some(1));
    }
}
