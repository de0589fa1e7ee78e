//! Route and route node types.

use std::fmt;

use super::{Candidate, Coordinates, Location, LocationId};

/// A location embedded in a route, with the lengths of its two edges.
///
/// `left_distance` is the edge to the previous node (0 for the first node)
/// and `right_distance` the edge to the next node (0 for the last node).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode {
    location: Location,
    left_distance: f64,
    right_distance: f64,
}

impl RouteNode {
    /// Creates a node with explicit edge lengths.
    pub fn new(location: Location, left_distance: f64, right_distance: f64) -> Self {
        Self {
            location,
            left_distance,
            right_distance,
        }
    }

    /// Creates an origin sentinel with both edges at zero.
    pub fn origin(coordinates: Coordinates) -> Self {
        Self::new(Location::origin(coordinates), 0.0, 0.0)
    }

    /// The embedded location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Shortcut for the embedded location's coordinates.
    pub fn coordinates(&self) -> Coordinates {
        self.location.coordinates()
    }

    /// Length of the edge to the previous node.
    pub fn left_distance(&self) -> f64 {
        self.left_distance
    }

    /// Length of the edge to the next node.
    pub fn right_distance(&self) -> f64 {
        self.right_distance
    }
}

impl From<Candidate> for RouteNode {
    fn from(candidate: Candidate) -> Self {
        Self::new(
            candidate.location,
            candidate.left_distance,
            candidate.right_distance,
        )
    }
}

impl fmt::Display for RouteNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.location, f)
    }
}

/// An open loop that leaves an origin and returns to it.
///
/// The first and last nodes are origin sentinels, so a route always has at
/// least two nodes. Adjacent nodes share their edge length
/// (`nodes[i].right_distance() == nodes[i + 1].left_distance()`), and the
/// total distance is maintained incrementally as locations are inserted.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Coordinates, Route};
///
/// let route = Route::new(Coordinates::new(51.742503, 19.432956));
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.num_gaps(), 1);
/// assert_eq!(route.num_visits(), 0);
/// assert_eq!(route.total_distance(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    nodes: Vec<RouteNode>,
    total_distance: f64,
}

impl Route {
    /// Creates the degenerate route `(origin, origin)`.
    pub fn new(origin: Coordinates) -> Self {
        Self {
            nodes: vec![RouteNode::origin(origin), RouteNode::origin(origin)],
            total_distance: 0.0,
        }
    }

    /// All nodes, sentinels included.
    pub fn nodes(&self) -> &[RouteNode] {
        &self.nodes
    }

    /// Number of nodes, sentinels included. Always at least 2.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a route holds its two sentinels at minimum.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of visited locations (sentinels excluded).
    pub fn num_visits(&self) -> usize {
        self.nodes.len() - 2
    }

    /// Number of gaps (adjacent node pairs).
    pub fn num_gaps(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The two anchors of gap `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.num_gaps()`.
    pub fn gap(&self, index: usize) -> (&RouteNode, &RouteNode) {
        (&self.nodes[index], &self.nodes[index + 1])
    }

    /// Length of the edge spanning gap `index`.
    pub fn edge_length(&self, index: usize) -> f64 {
        self.nodes[index].right_distance
    }

    /// Origin the route starts and ends at.
    pub fn origin(&self) -> Coordinates {
        self.nodes[0].coordinates()
    }

    /// Running total distance, updated on each insertion.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Net change in total distance if `candidate` were inserted into gap
    /// `index`.
    pub fn insertion_cost(&self, index: usize, candidate: &Candidate) -> f64 {
        candidate.combined_distance() - self.edge_length(index)
    }

    /// Identifiers of the visited locations, in route order.
    pub fn visited_ids(&self) -> Vec<LocationId> {
        self.interior().filter_map(|n| n.location.id()).collect()
    }

    /// Iterator over the visited nodes (sentinels excluded).
    pub fn interior(&self) -> impl Iterator<Item = &RouteNode> {
        self.nodes[1..self.nodes.len() - 1].iter()
    }

    /// Splits gap `index` by inserting `candidate` between its anchors.
    ///
    /// Updates the neighbors' shared edges and the running total. Returns the
    /// index of the new node. Budget checks are the caller's concern.
    pub(crate) fn insert(&mut self, index: usize, candidate: Candidate) -> usize {
        let cost = self.insertion_cost(index, &candidate);
        self.nodes[index].right_distance = candidate.left_distance;
        self.nodes[index + 1].left_distance = candidate.right_distance;
        self.nodes.insert(index + 1, RouteNode::from(candidate));
        self.total_distance += cost;
        index + 1
    }
}
