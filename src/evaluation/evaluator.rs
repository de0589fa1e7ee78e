//! Route evaluator that recomputes distance and checks route invariants.

use std::collections::HashSet;

use crate::models::{Coordinates, LocationId, Route};

/// Sum of `right_distance` over every node except the last.
///
/// Recomputed from the stored edges, independently of the route's running
/// total.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Coordinates, Route};
/// use u_tour::evaluation::route_distance;
///
/// let route = Route::new(Coordinates::new(0.0, 0.0));
/// assert_eq!(route_distance(&route), 0.0);
/// ```
pub fn route_distance(route: &Route) -> f64 {
    let nodes = route.nodes();
    nodes[..nodes.len() - 1]
        .iter()
        .map(|n| n.right_distance())
        .sum()
}

/// A broken route invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A boundary node is not at the expected origin.
    OriginMismatch {
        /// Node index (first or last).
        index: usize,
    },
    /// Two adjacent nodes disagree on the length of their shared edge.
    SharedEdgeMismatch {
        /// Gap index.
        gap: usize,
        /// `right_distance` of the left node.
        right_distance: f64,
        /// `left_distance` of the right node.
        left_distance: f64,
    },
    /// Route distance is over the budget.
    BudgetExceeded { distance: f64, budget: f64 },
    /// A location identifier is visited more than once.
    DuplicateLocation { id: LocationId },
    /// Running total disagrees with the recomputed distance.
    TotalDrift { tracked: f64, summed: f64 },
}

/// A violated route invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub kind: ViolationType,
}

impl Violation {
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Checks a finished route against its origin and budget.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Coordinates, Route};
/// use u_tour::evaluation::RouteEvaluator;
///
/// let origin = Coordinates::new(51.742503, 19.432956);
/// let route = Route::new(origin);
/// let (distance, violations) = RouteEvaluator::new(origin, 2000.0).evaluate(&route);
/// assert_eq!(distance, 0.0);
/// assert!(violations.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RouteEvaluator {
    origin: Coordinates,
    budget: f64,
    tolerance: f64,
}

impl RouteEvaluator {
    /// Creates an evaluator with a tolerance of `1e-9` km.
    pub fn new(origin: Coordinates, budget: f64) -> Self {
        Self {
            origin,
            budget,
            tolerance: 1e-9,
        }
    }

    /// Sets the absolute tolerance for distance comparisons.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the recomputed route distance and every violation found.
    pub fn evaluate(&self, route: &Route) -> (f64, Vec<Violation>) {
        let mut violations = Vec::new();
        let nodes = route.nodes();
        let last = nodes.len() - 1;

        for index in [0, last] {
            if nodes[index].coordinates() != self.origin {
                violations.push(Violation::new(ViolationType::OriginMismatch { index }));
            }
        }

        for gap in 0..route.num_gaps() {
            let (left, right) = route.gap(gap);
            if left.right_distance() != right.left_distance() {
                violations.push(Violation::new(ViolationType::SharedEdgeMismatch {
                    gap,
                    right_distance: left.right_distance(),
                    left_distance: right.left_distance(),
                }));
            }
        }

        let mut seen = HashSet::new();
        for id in route.visited_ids() {
            if !seen.insert(id) {
                violations.push(Violation::new(ViolationType::DuplicateLocation { id }));
            }
        }

        let distance = route_distance(route);
        if distance > self.budget + self.tolerance {
            violations.push(Violation::new(ViolationType::BudgetExceeded {
                distance,
                budget: self.budget,
            }));
        }

        let tracked = route.total_distance();
        if (tracked - distance).abs() > self.tolerance * distance.max(1.0) {
            violations.push(Violation::new(ViolationType::TotalDrift {
                tracked,
                summed: distance,
            }));
        }

        (distance, violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, Location};

    fn origin() -> Coordinates {
        Coordinates::new(0.0, 0.0)
    }

    fn two_stop_route() -> Route {
        let mut r = Route::new(origin());
        r.insert(0, Candidate::new(Location::new(1, 0.0, 1.0), 10.0, 10.0));
        r.insert(1, Candidate::new(Location::new(2, 0.0, 2.0), 4.0, 7.0));
        r
    }

    #[test]
    fn test_route_distance_matches_total() {
        let r = two_stop_route();
        assert!((route_distance(&r) - 21.0).abs() < 1e-10);
        assert!((route_distance(&r) - r.total_distance()).abs() < 1e-10);
    }

    #[test]
    fn test_valid_route() {
        let (d, violations) = RouteEvaluator::new(origin(), 25.0).evaluate(&two_stop_route());
        assert!((d - 21.0).abs() < 1e-10);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_budget_exceeded() {
        let (_, violations) = RouteEvaluator::new(origin(), 20.0).evaluate(&two_stop_route());
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::BudgetExceeded { .. }
        ));
    }

    #[test]
    fn test_origin_mismatch() {
        let r = Route::new(Coordinates::new(1.0, 1.0));
        let (_, violations) = RouteEvaluator::new(origin(), 0.0).evaluate(&r);
        assert_eq!(
            violations,
            vec![
                Violation::new(ViolationType::OriginMismatch { index: 0 }),
                Violation::new(ViolationType::OriginMismatch { index: 1 }),
            ]
        );
    }

    #[test]
    fn test_duplicate_location() {
        let mut r = Route::new(origin());
        r.insert(0, Candidate::new(Location::new(7, 0.0, 1.0), 1.0, 1.0));
        r.insert(1, Candidate::new(Location::new(7, 0.0, 1.0), 0.0, 1.0));
        let (_, violations) = RouteEvaluator::new(origin(), 10.0).evaluate(&r);
        assert!(violations
            .iter()
            .any(|v| v.kind == ViolationType::DuplicateLocation { id: 7 }));
    }
}
