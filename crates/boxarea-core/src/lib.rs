//! Boxarea core
//!
//! Loads building boxes from delimited text and aggregates their area per
//! building.
//!
//! # Core Concepts
//!
//! - [`BoxRecord`]: immutable rectangle with id, corners and category
//! - [`building_id`]: building key extracted from a box id
//! - [`read_csv`]: file → `Vec<BoxRecord>`, all-or-nothing
//! - [`group_by_building`]: signed area per building for one category
//!
//! # Example
//!
//! ```rust,no_run
//! use boxarea_core::{group_by_building, read_csv};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let boxes = read_csv("data/boxes.csv")?;
//! let doors = group_by_building(&boxes, "Deur");
//!
//! for (building, area) in &doors {
//!     println!("{building}: {area:.3}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod aggregate;
pub mod building;
pub mod config;
pub mod error;
pub mod loader;
pub mod record;

pub use aggregate::{count_categories, group_by_building, group_by_building_with};
pub use building::{building_id, building_id_with};
pub use config::{HeaderMode, LoaderConfig};
pub use error::{ConfigError, LoadError, RecordError};
pub use loader::{parse_csv, read_csv, read_csv_with};
pub use record::BoxRecord;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for loading and grouping boxes
    pub use crate::aggregate::{count_categories, group_by_building};
    pub use crate::config::{HeaderMode, LoaderConfig};
    pub use crate::error::{LoadError, RecordError};
    pub use crate::loader::{read_csv, read_csv_with};
    pub use crate::record::BoxRecord;
}
