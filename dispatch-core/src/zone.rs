//! Zones partition the campus into a fixed set of response sectors.
//!
//! A [`ZoneLayout`] is a closed enumeration: zone identifiers are assigned
//! densely from `0` in anchor order when the layout is built and never change
//! afterwards. Each zone carries an anchor label that is used as the origin of
//! distance queries.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// Anchor locations for the default four-zone campus layout.
pub const CAMPUS_ANCHORS: [&str; 4] = [
    "Curry Student Center",
    "Snell Library",
    "Marino Recreation Center",
    "Columbus Place",
];

/// Identifier of a zone within a [`ZoneLayout`].
///
/// # Examples
/// ```
/// use dispatch_core::ZoneId;
///
/// let zone = ZoneId::new(2);
/// assert_eq!(zone.get(), 2);
/// assert_eq!(zone.to_string(), "2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ZoneId(u8);

impl ZoneId {
    /// Wrap a raw zone number.
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Return the raw zone number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for ZoneId {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single response sector and the anchor used to measure distance from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    id: ZoneId,
    anchor: String,
}

impl Zone {
    /// Identifier of the zone.
    #[must_use]
    pub const fn id(&self) -> ZoneId {
        self.id
    }

    /// Canonical anchor location label.
    #[must_use]
    pub fn anchor(&self) -> &str {
        &self.anchor
    }
}

/// Errors returned by [`ZoneLayout::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneLayoutError {
    /// No anchors were supplied.
    #[error("a zone layout needs at least one zone")]
    Empty,
    /// More anchors were supplied than zone identifiers can address.
    #[error("a zone layout supports at most 256 zones, got {count}")]
    TooManyZones {
        /// Number of anchors supplied.
        count: usize,
    },
    /// An anchor label was empty or whitespace.
    #[error("zone {zone} has a blank anchor")]
    BlankAnchor {
        /// Zone whose anchor was blank.
        zone: ZoneId,
    },
    /// Two zones share an anchor label.
    #[error("anchor '{anchor}' is used by more than one zone")]
    DuplicateAnchor {
        /// The repeated anchor label.
        anchor: String,
    },
}

/// The fixed set of zones served by a dispatcher.
///
/// # Examples
/// ```
/// use dispatch_core::{ZoneId, ZoneLayout};
///
/// # fn main() -> Result<(), dispatch_core::ZoneLayoutError> {
/// let layout = ZoneLayout::new(["North Gate", "South Gate"])?;
/// assert_eq!(layout.len(), 2);
/// assert_eq!(layout.get(ZoneId::new(1)).map(|z| z.anchor()), Some("South Gate"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneLayout {
    zones: Vec<Zone>,
}

impl ZoneLayout {
    /// Build a layout, assigning ids `0..n` in anchor order.
    ///
    /// # Errors
    /// Returns [`ZoneLayoutError`] when the anchors are empty, blank,
    /// duplicated, or too numerous.
    pub fn new<I, S>(anchors: I) -> Result<Self, ZoneLayoutError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = anchors.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ZoneLayoutError::Empty);
        }
        if labels.len() > usize::from(u8::MAX) + 1 {
            return Err(ZoneLayoutError::TooManyZones {
                count: labels.len(),
            });
        }

        let mut seen = HashSet::with_capacity(labels.len());
        let mut zones = Vec::with_capacity(labels.len());
        for (raw, anchor) in (0_u8..=u8::MAX).zip(labels) {
            let id = ZoneId(raw);
            let trimmed = anchor.trim();
            if trimmed.is_empty() {
                return Err(ZoneLayoutError::BlankAnchor { zone: id });
            }
            if !seen.insert(trimmed.to_owned()) {
                return Err(ZoneLayoutError::DuplicateAnchor {
                    anchor: trimmed.to_owned(),
                });
            }
            zones.push(Zone {
                id,
                anchor: trimmed.to_owned(),
            });
        }
        Ok(Self { zones })
    }

    /// The default four-zone campus layout built from [`CAMPUS_ANCHORS`].
    #[must_use]
    pub fn campus() -> Self {
        let zones = (0_u8..)
            .zip(CAMPUS_ANCHORS)
            .map(|(raw, anchor)| Zone {
                id: ZoneId(raw),
                anchor: anchor.to_owned(),
            })
            .collect();
        Self { zones }
    }

    /// Number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Always `false` for a constructed layout; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Look up a zone by id.
    #[must_use]
    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(usize::from(id.get()))
    }

    /// Report whether `id` belongs to this layout.
    #[must_use]
    pub fn contains(&self, id: ZoneId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate zones in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    /// Iterate zone ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.zones.iter().map(Zone::id)
    }
}

impl Default for ZoneLayout {
    fn default() -> Self {
        Self::campus()
    }
}
