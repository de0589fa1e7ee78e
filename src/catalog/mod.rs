//! Storage capabilities consumed by the route builder.
//!
//! - [`LocationSource`] — radius and combined-distance queries over locations
//! - [`AttributeCatalog`] — attribute lookup for a set of visited locations
//! - [`InMemoryCatalog`] — an owned implementation of both, loadable from CSV

mod import;
mod memory;
mod source;

pub use import::{ATTRIBUTES_FILE, LOCATIONS_FILE};
pub use memory::{AttributeEntry, InMemoryCatalog};
pub use source::{AttributeCatalog, LocationSource};
