//! Budgeted cheapest-insertion tour construction.
//!
//! Grows an open loop around an origin: every round asks each gap of the
//! current route for its cheapest still-available location, takes the
//! globally cheapest proposal and splits that gap with it, as long as the
//! added distance fits the remaining budget.
//!
//! The pool of insertable locations is seeded once, from a radius query of
//! `budget` km around the origin. Locations outside that radius are never
//! considered later, even if the growing route passes close to them.
//!
//! # Complexity
//!
//! O(k · g) catalog queries for k insertions over routes of at most g gaps.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use log::{debug, info};

use super::candidates::{copy_to_available, optimal_candidate_index, AvailableSet, CandidateFinder};
use crate::catalog::{AttributeCatalog, LocationSource};
use crate::config::{validate_budget, validate_origin, TourConfig};
use crate::error::{CatalogError, TourError};
use crate::evaluation;
use crate::models::{AttributeRecord, Coordinates, Route};

/// Performs one insertion round.
///
/// Picks the cheapest gap proposal and inserts it if its insertion cost lies
/// in `[0, reserve]`, removing the location from `available`. Returns the
/// index of the inserted node, or `None` when nothing was inserted: no gap
/// has a candidate, the cheapest one does not fit `reserve`, or its cost is
/// negative (inconsistent distances).
pub fn insert_location<S: LocationSource + ?Sized>(
    finder: &CandidateFinder<'_, S>,
    route: &mut Route,
    available: &mut AvailableSet,
    reserve: f64,
) -> Result<Option<usize>, CatalogError> {
    let mut proposals = finder.gap_candidates(route, available)?;
    let best = optimal_candidate_index(&proposals)
        .and_then(|gap| proposals.swap_remove(gap).map(|candidate| (gap, candidate)));
    let Some((gap, candidate)) = best else {
        debug!("no gap has an available candidate");
        return Ok(None);
    };

    let cost = route.insertion_cost(gap, &candidate);
    if cost > reserve || cost < 0.0 {
        debug!(
            "stopping: cheapest insertion {:?} into gap {gap} costs {cost:.6} km, reserve {reserve:.6} km",
            candidate.location.id()
        );
        return Ok(None);
    }

    if let Some(id) = candidate.location.id() {
        available.remove(&id);
    }
    debug!(
        "inserting {} ({:?}) into gap {gap} for {cost:.6} km",
        candidate.location,
        candidate.location.id()
    );
    Ok(Some(route.insert(gap, candidate)))
}

/// Builds budgeted tours against a borrowed catalog.
///
/// # Examples
///
/// ```
/// use u_tour::catalog::InMemoryCatalog;
/// use u_tour::constructive::RouteBuilder;
/// use u_tour::models::{Coordinates, Location};
///
/// let catalog = InMemoryCatalog::new(vec![
///     Location::new(1, 0.0, 1.0).with_name("East"),
///     Location::new(2, 0.0, -0.5).with_name("West"),
///     Location::new(3, 0.0, 2.0).with_name("Far East"),
/// ]);
/// let builder = RouteBuilder::new(&catalog);
/// let route = builder.build_route(Coordinates::new(0.0, 0.0), 500.0).unwrap();
///
/// assert_eq!(route.visited_ids(), vec![1, 2]);
/// assert!(builder.route_distance(&route) <= 500.0);
/// ```
pub struct RouteBuilder<'a, S: ?Sized> {
    source: &'a S,
    deadline: Option<Duration>,
}

impl<'a, S: LocationSource + ?Sized> RouteBuilder<'a, S> {
    /// Creates a builder without a deadline.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            deadline: None,
        }
    }

    /// Fails construction with [`TourError::DeadlineExceeded`] once
    /// `deadline` has elapsed.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Creates a builder carrying the config's deadline.
    pub fn from_config(source: &'a S, config: &TourConfig) -> Self {
        Self {
            source,
            deadline: config.deadline(),
        }
    }

    /// Validates `config` and builds its tour.
    pub fn build(&self, config: &TourConfig) -> Result<Route, TourError> {
        config.validate()?;
        self.build_route(config.origin, config.budget_km)
    }

    /// Builds an open loop from `origin` whose total distance stays within
    /// `budget` km.
    ///
    /// Running out of candidates or budget ends construction normally; the
    /// degenerate `(origin, origin)` route is a valid result. Any failed
    /// catalog query aborts with [`TourError::Query`].
    pub fn build_route(&self, origin: Coordinates, budget: f64) -> Result<Route, TourError> {
        validate_origin(origin)?;
        validate_budget(budget)?;
        let started = Instant::now();

        let seed = self.source.find_within_radius(origin, budget)?;
        let mut available = copy_to_available(seed.into_iter().map(|(l, _)| l));
        let seeded = available.len();
        info!(
            "building route from ({}, {}) with budget {budget} km over {seeded} locations",
            origin.latitude(),
            origin.longitude()
        );

        let finder = CandidateFinder::new(self.source, budget);
        let mut route = Route::new(origin);

        while route.total_distance() < budget {
            if let Some(deadline) = self.deadline {
                let elapsed = started.elapsed();
                if elapsed >= deadline {
                    return Err(TourError::DeadlineExceeded {
                        elapsed_ms: elapsed.as_millis(),
                    });
                }
            }

            let reserve = budget - route.total_distance();
            if insert_location(&finder, &mut route, &mut available, reserve)?.is_none() {
                break;
            }
        }

        if route.total_distance() >= budget {
            debug!(
                "stopping: budget of {budget} km reached at {:.6} km",
                route.total_distance()
            );
        }

        info!(
            "route built: {} of {seeded} locations visited, {:.6} km",
            route.num_visits(),
            route.total_distance()
        );
        Ok(route)
    }

    /// Total distance of `route`, recomputed from its edges.
    pub fn route_distance(&self, route: &Route) -> f64 {
        evaluation::route_distance(route)
    }
}

impl<S: LocationSource + AttributeCatalog + ?Sized> RouteBuilder<'_, S> {
    /// Distinct attribute records offered along `route`.
    pub fn distinct_attributes_along_route(
        &self,
        route: &Route,
    ) -> Result<Vec<AttributeRecord>, TourError> {
        let ids: BTreeSet<_> = route.visited_ids().into_iter().collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.source.lookup_attributes_for(&ids)?)
    }
}
