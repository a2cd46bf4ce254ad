//! Core domain types for the campus dispatcher.
//!
//! The crate owns the data every other component shares: the zone layout,
//! the officer registry and its availability state, the equipment catalog,
//! historical records and the allocator that turns them into per-zone
//! quotas. It also defines the two collaborator boundaries the engine is
//! generic over: [`DistanceProvider`] for routing and [`LoadoutPlanner`] for
//! equipment selection.
//!
//! Nothing here performs I/O. Callers parse inputs and pass records in.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocation;
mod config;
pub mod distance;
mod equipment;
mod loadout;
mod officer;
mod records;
mod zone;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use allocation::{AllocationError, IncidentCounts, ZoneQuotas, allocate};
pub use config::{ConfigError, DEFAULT_CARRY_CAPACITY, DEFAULT_TOTAL_OFFICERS, DispatchConfig};
pub use distance::{DistanceEntry, DistanceError, DistanceProvider, DistanceTable, checked_distance};
pub use equipment::{EquipmentCatalog, EquipmentItem};
pub use loadout::{Loadout, LoadoutPlanner};
pub use officer::{Officer, OfficerId, OfficerRegistry, OfficerStatus, RegistryError};
pub use records::{EmergencyRecord, OfficerRecord};
pub use zone::{CAMPUS_ANCHORS, Zone, ZoneId, ZoneLayout, ZoneLayoutError};
