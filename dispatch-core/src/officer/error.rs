use thiserror::Error;

use crate::ZoneId;

/// Errors from [`crate::OfficerRegistry`] construction and updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No officer carries the requested badge.
    #[error("no officer with id '{id}'")]
    NotFound {
        /// The requested badge.
        id: String,
    },
    /// Two roster entries share a badge.
    #[error("officer id '{id}' appears more than once in the roster")]
    DuplicateOfficer {
        /// The repeated badge.
        id: String,
    },
    /// A roster entry or quota referenced a zone outside the layout.
    #[error("officer '{id}' is assigned to zone {zone}, which is not in the layout")]
    UnknownZone {
        /// Badge of the affected officer.
        id: String,
        /// The unrecognised zone.
        zone: ZoneId,
    },
    /// The roster does not match the allocated quotas.
    #[error("roster lists {roster} officers but quotas allocate {quota_total}")]
    RosterSizeMismatch {
        /// Officers on the roster.
        roster: usize,
        /// Sum of zone quotas.
        quota_total: u64,
    },
}
