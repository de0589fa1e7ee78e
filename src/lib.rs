//! # u-tour
//!
//! Budgeted tour construction around a geographic origin: locates points of
//! interest near the origin and assembles them into an open loop that starts
//! and ends there, without exceeding a distance budget.
//!
//! The route is grown by greedy cheapest insertion. This is a heuristic; it
//! does not search for the optimal tour.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinates, Location, Candidate, Route, AttributeRecord)
//! - [`distance`] — Great-circle distance formulas
//! - [`catalog`] — Storage capability traits and an in-memory, CSV-loadable catalog
//! - [`constructive`] — Candidate finder and route builder
//! - [`evaluation`] — Route distance and invariant checking
//! - [`config`] — Tour parameters
//! - [`error`] — Error types

pub mod catalog;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
