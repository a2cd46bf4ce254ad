//! Result and warning types produced by a dispatch.

use std::fmt;

use dispatch_core::{DistanceError, EquipmentItem, OfficerId, ZoneId};

/// Non-fatal conditions observed while handling a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchWarning {
    /// The emergency type has no catalog entry; no equipment was planned.
    UnknownEmergencyType {
        /// The type as supplied by the caller.
        emergency_type: String,
    },
    /// A zone was left out of the ranking because its distance lookup failed.
    ZoneExcluded {
        /// The excluded zone.
        zone: ZoneId,
        /// Why the lookup failed.
        error: DistanceError,
    },
}

impl fmt::Display for DispatchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEmergencyType { emergency_type } => {
                write!(f, "unknown emergency type '{emergency_type}', no equipment planned")
            }
            Self::ZoneExcluded { zone, error } => write!(f, "zone {zone} excluded: {error}"),
        }
    }
}

/// A completed deployment.
///
/// The officer named here has already been marked deployed in the engine's
/// registry.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchResult {
    /// Badge of the deployed officer.
    pub officer_id: OfficerId,
    /// Zone the officer was drawn from.
    pub zone: ZoneId,
    /// Distance from the zone anchor to the incident, in metres.
    pub distance_meters: f64,
    /// Equipment to carry, in catalog order.
    pub equipment: Vec<EquipmentItem>,
    /// Combined weight of `equipment`.
    pub total_weight: u64,
    /// Combined importance of `equipment`.
    pub total_importance: u64,
    /// Conditions worth surfacing to the operator.
    pub warnings: Vec<DispatchWarning>,
}
