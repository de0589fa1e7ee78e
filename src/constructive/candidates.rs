//! Per-gap candidate selection.

use std::collections::HashMap;

use log::trace;

use crate::catalog::LocationSource;
use crate::error::CatalogError;
use crate::models::{Candidate, Coordinates, Location, LocationId, Route, RouteNode};

/// Locations not yet placed on the route, keyed by identifier.
pub type AvailableSet = HashMap<LocationId, Location>;

/// Builds an [`AvailableSet`] from seed locations.
///
/// Locations without an identifier cannot be tracked and are skipped.
pub fn copy_to_available(locations: impl IntoIterator<Item = Location>) -> AvailableSet {
    locations
        .into_iter()
        .filter_map(|l| l.id().map(|id| (id, l)))
        .collect()
}

/// Distance-ranked oracle over a [`LocationSource`], restricted to a maximum
/// combined distance.
///
/// # Examples
///
/// ```
/// use u_tour::catalog::InMemoryCatalog;
/// use u_tour::constructive::{copy_to_available, CandidateFinder};
/// use u_tour::models::{Coordinates, Location, Route};
///
/// let catalog = InMemoryCatalog::new(vec![
///     Location::new(1, 0.0, 1.0),
///     Location::new(2, 0.0, 0.5),
/// ]);
/// let route = Route::new(Coordinates::new(0.0, 0.0));
/// let available = copy_to_available(vec![Location::new(1, 0.0, 1.0)]);
///
/// let finder = CandidateFinder::new(&catalog, 500.0);
/// let proposals = finder.gap_candidates(&route, &available).unwrap();
/// // location 2 is closer but no longer available
/// assert_eq!(proposals[0].as_ref().and_then(|c| c.location.id()), Some(1));
/// ```
pub struct CandidateFinder<'a, S: ?Sized> {
    source: &'a S,
    max_combined: f64,
}

impl<'a, S: LocationSource + ?Sized> CandidateFinder<'a, S> {
    /// Creates a finder that only considers candidates whose combined
    /// distance is at most `max_combined`.
    pub fn new(source: &'a S, max_combined: f64) -> Self {
        Self {
            source,
            max_combined,
        }
    }

    /// Maximum combined distance considered.
    pub fn max_combined(&self) -> f64 {
        self.max_combined
    }

    /// All catalog locations between two anchors, ascending by combined
    /// distance.
    pub fn nearest_between(
        &self,
        left: Coordinates,
        right: Coordinates,
    ) -> Result<Vec<Candidate>, CatalogError> {
        self.source
            .find_between_within_combined(left, right, self.max_combined)
    }

    /// Cheapest candidate for the gap `left..right` that is still available.
    pub fn closest_available(
        &self,
        left: &RouteNode,
        right: &RouteNode,
        available: &AvailableSet,
    ) -> Result<Option<Candidate>, CatalogError> {
        let candidates = self.nearest_between(left.coordinates(), right.coordinates())?;
        Ok(candidates.into_iter().find(|c| {
            c.location
                .id()
                .is_some_and(|id| available.contains_key(&id))
        }))
    }

    /// One proposal per gap of `route`, `None` where a gap has no eligible
    /// candidate.
    pub fn gap_candidates(
        &self,
        route: &Route,
        available: &AvailableSet,
    ) -> Result<Vec<Option<Candidate>>, CatalogError> {
        (0..route.num_gaps())
            .map(|gap| -> Result<Option<Candidate>, CatalogError> {
                let (left, right) = route.gap(gap);
                let proposal = self.closest_available(left, right, available)?;
                trace!(
                    "gap {gap}: {:?}",
                    proposal
                        .as_ref()
                        .map(|c| (c.location.id(), c.combined_distance()))
                );
                Ok(proposal)
            })
            .collect()
    }
}

/// Index of the proposal with the smallest combined distance.
///
/// Scans left to right with a strict `<`, so among equal proposals the first
/// gap wins. Returns `None` if there is no usable proposal.
pub fn optimal_candidate_index(proposals: &[Option<Candidate>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, proposal) in proposals.iter().enumerate() {
        let Some(candidate) = proposal else {
            continue;
        };
        let d = candidate.combined_distance();
        if d.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, shortest)| d < shortest) {
            best = Some((i, d));
        }
    }

    best.map(|(i, _)| i)
}
