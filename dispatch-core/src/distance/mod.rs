//! Measure travel distance from zone anchors to an incident.
//!
//! The `DistanceProvider` trait abstracts the routing service that turns an
//! `(origin, destination)` pair of location labels into a walking distance in
//! metres. Providers may be slow or fail; callers treat every error as "no
//! route" for that pair rather than as a zero distance.
//!
//! [`DistanceTable`] is an in-memory provider backed by a fixed lookup table.

mod error;
mod provider;
mod table;

pub use error::DistanceError;
pub use provider::{DistanceProvider, checked_distance};
pub use table::{DistanceEntry, DistanceTable};
