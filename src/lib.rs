//! Facade crate for the campus dispatcher.
//!
//! This crate re-exports the core domain types and exposes the knapsack
//! planner and the dispatch engine behind feature flags.

#![forbid(unsafe_code)]

pub use dispatch_core::{
    AllocationError, CAMPUS_ANCHORS, ConfigError, DispatchConfig, DistanceEntry, DistanceError,
    DistanceProvider, DistanceTable, EmergencyRecord, EquipmentCatalog, EquipmentItem,
    IncidentCounts, Loadout, LoadoutPlanner, Officer, OfficerId, OfficerRecord, OfficerRegistry,
    OfficerStatus, RegistryError, Zone, ZoneId, ZoneLayout, ZoneLayoutError, ZoneQuotas, allocate,
};

#[cfg(feature = "test-support")]
pub use dispatch_core::test_support;

#[cfg(feature = "knapsack")]
pub use dispatch_knapsack::KnapsackPlanner;

#[cfg(feature = "engine")]
pub use dispatch_engine::{DispatchEngine, DispatchError, DispatchResult, DispatchWarning, ZoneRanking};
