//! Pre-parsed input records handed to the core by ingestion collaborators.

use crate::ZoneId;

/// A historical emergency, reduced to the zone it occurred in.
///
/// Records are consumed once at start-up to build
/// [`IncidentCounts`](crate::IncidentCounts) and are not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmergencyRecord {
    /// Zone in which the emergency happened.
    pub zone: ZoneId,
}

impl EmergencyRecord {
    /// Construct a record for `zone`.
    #[must_use]
    pub const fn new(zone: ZoneId) -> Self {
        Self { zone }
    }
}

/// A roster entry assigning a badge to a zone.
///
/// # Examples
/// ```
/// use dispatch_core::{OfficerRecord, ZoneId};
///
/// let record = OfficerRecord::new("B-101", ZoneId::new(0));
/// assert_eq!(record.id, "B-101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfficerRecord {
    /// Unique badge identifier.
    pub id: String,
    /// Zone the officer patrols.
    pub zone: ZoneId,
}

impl OfficerRecord {
    /// Construct a roster entry.
    #[must_use]
    pub fn new(id: impl Into<String>, zone: ZoneId) -> Self {
        Self {
            id: id.into(),
            zone,
        }
    }
}
