//! Route distance and invariant checking.

mod evaluator;

pub use evaluator::{route_distance, RouteEvaluator, Violation, ViolationType};
