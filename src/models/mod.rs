//! Domain model types for budgeted tour construction.
//!
//! Provides the value types the route builder works with: coordinates and
//! catalog locations, insertion candidates, routes as ordered sequences of
//! nodes with shared edge lengths, and the attribute records reported for a
//! finished route.

mod attribute;
mod candidate;
mod location;
mod route;

pub use attribute::AttributeRecord;
pub use candidate::Candidate;
pub use location::{Coordinates, Location, LocationId, ORIGIN_NAME};
pub use route::{Route, RouteNode};
