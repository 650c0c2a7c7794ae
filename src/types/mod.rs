//! All data types for the town graph library.

pub mod error;
pub mod road;
pub mod town;

pub use error::{GraphError, GraphResult};
pub use road::Road;
pub use town::Town;

/// Weight given to a road when none is specified.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Unit appended to every formatted path step unless configured otherwise.
pub const DEFAULT_DISTANCE_UNIT: &str = "mi";
