//! In-memory registry of transit stops and bus routes.
//!
//! The [`TransportCatalogue`] answers route statistics (stop counts, length,
//! curvature) and reverse lookups of the buses serving a stop.

pub mod catalogue;
pub mod config;
pub mod domain;
pub mod error;
pub mod geo;
pub mod input;
pub mod report;

pub use catalogue::TransportCatalogue;
pub use domain::{Bus, BusId, BusInfo, Curvature, Stop, StopId};
pub use error::{CatalogueError, LoadError};
pub use geo::{compute_distance, Coordinates};
