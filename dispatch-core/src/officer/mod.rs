//! Officers and the registry that owns them.
//!
//! The [`OfficerRegistry`] is the single authoritative store of officers,
//! partitioned by zone. Callers observe officers through shared references
//! and change availability only through registry methods.

mod error;
mod registry;

use std::borrow::Borrow;
use std::fmt;

pub use error::RegistryError;
pub use registry::OfficerRegistry;

use crate::ZoneId;

/// Unique badge identifier of an officer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct OfficerId(String);

impl OfficerId {
    /// Wrap a badge identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OfficerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for OfficerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for OfficerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OfficerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether an officer can take a new call.
///
/// There is no third state: an officer is either available or deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OfficerStatus {
    /// Ready to be dispatched.
    Available,
    /// Out on a call.
    Deployed,
}

/// An officer assigned to a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Officer {
    id: OfficerId,
    zone: ZoneId,
    status: OfficerStatus,
}

impl Officer {
    pub(crate) const fn new(id: OfficerId, zone: ZoneId) -> Self {
        Self {
            id,
            zone,
            status: OfficerStatus::Available,
        }
    }

    /// Badge identifier.
    #[must_use]
    pub const fn id(&self) -> &OfficerId {
        &self.id
    }

    /// Zone the officer is assigned to.
    #[must_use]
    pub const fn zone(&self) -> ZoneId {
        self.zone
    }

    /// Current availability.
    #[must_use]
    pub const fn status(&self) -> OfficerStatus {
        self.status
    }

    /// Report whether the officer can take a new call.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.status, OfficerStatus::Available)
    }

    pub(crate) const fn set_status(&mut self, status: OfficerStatus) {
        self.status = status;
    }
}
