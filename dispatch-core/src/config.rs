//! Dispatcher configuration passed explicitly into constructors.

use thiserror::Error;

use crate::{CAMPUS_ANCHORS, ZoneId, ZoneLayout, ZoneLayoutError};

/// Carry capacity used when none is configured.
pub const DEFAULT_CARRY_CAPACITY: u32 = 15;

/// Headcount used when none is configured.
pub const DEFAULT_TOTAL_OFFICERS: u32 = 25;

/// Errors returned by [`DispatchConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Officers could never carry anything.
    #[error("carry capacity must be greater than zero")]
    ZeroCapacity,
    /// The configured anchors do not form a valid layout.
    #[error("invalid zone layout")]
    Layout(#[source] ZoneLayoutError),
    /// The registry holds officers in a zone the configured layout lacks.
    #[error("officers are registered in zone {zone}, which is not in the configured layout")]
    OfficerOutsideLayout {
        /// The first such zone.
        zone: ZoneId,
    },
}

impl From<ZoneLayoutError> for ConfigError {
    fn from(err: ZoneLayoutError) -> Self {
        Self::Layout(err)
    }
}

/// Tunables shared by allocation and dispatch.
///
/// Missing fields fall back to the campus defaults when deserialised.
///
/// # Examples
/// ```
/// use dispatch_core::DispatchConfig;
///
/// # fn main() -> Result<(), dispatch_core::ConfigError> {
/// let config = DispatchConfig::default();
/// let layout = config.validate()?;
/// assert_eq!(layout.len(), 4);
/// assert_eq!(config.carry_capacity, 15);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DispatchConfig {
    /// Maximum total equipment weight one officer carries.
    pub carry_capacity: u32,
    /// Officers to distribute across zones when allocating quotas.
    pub total_officers: u32,
    /// Anchor label for each zone, in zone id order.
    pub zone_anchors: Vec<String>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            carry_capacity: DEFAULT_CARRY_CAPACITY,
            total_officers: DEFAULT_TOTAL_OFFICERS,
            zone_anchors: CAMPUS_ANCHORS.iter().map(|&anchor| anchor.to_owned()).collect(),
        }
    }
}

impl DispatchConfig {
    /// Check the configuration and return the zone layout it describes.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroCapacity`] for a zero carry capacity and
    /// [`ConfigError::Layout`] when the anchors are invalid.
    pub fn validate(&self) -> Result<ZoneLayout, ConfigError> {
        if self.carry_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        self.zone_layout()
    }

    /// Build the zone layout from the configured anchors.
    ///
    /// # Errors
    /// Returns [`ConfigError::Layout`] when the anchors are invalid.
    pub fn zone_layout(&self) -> Result<ZoneLayout, ConfigError> {
        Ok(ZoneLayout::new(self.zone_anchors.iter().map(String::as_str))?)
    }
}
