//! Constructive heuristic for budgeted open-loop tours.
//!
//! - [`CandidateFinder`] — per-gap cheapest available location, O(n log n) per query
//! - [`insert_location`] — one cheapest-insertion round under a distance reserve
//! - [`RouteBuilder`] — seeds the available set and runs insertion rounds until
//!   the budget or the candidates run out

mod candidates;
mod insertion;

pub use candidates::{copy_to_available, optimal_candidate_index, AvailableSet, CandidateFinder};
pub use insertion::{insert_location, RouteBuilder};
