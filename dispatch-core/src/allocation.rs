//! Distribute a fixed officer headcount across zones by historical load.
//!
//! Every zone is guaranteed one officer. The surplus is handed out one officer
//! at a time to the zone with the lowest ratio of officers to historical
//! incidents; zones without recorded incidents only keep their baseline
//! officer. Ratios are compared exactly, as fractions, by cross-multiplying in
//! `u64`, so `1/3` and `2/6` tie while `1/3` and `1/2` do not. Ties go to the
//! lowest zone id.
//!
//! When no zone has any recorded incidents the surplus is dealt out
//! round-robin starting from the first zone, so the quotas always account
//! for the whole headcount.

use std::collections::BTreeMap;

use log::{debug, info};
use thiserror::Error;

use crate::{EmergencyRecord, ZoneId, ZoneLayout};

/// Errors returned while counting incidents or allocating officers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// The headcount cannot give every zone its baseline officer.
    #[error("{officers} officers cannot cover {zones} zones")]
    InsufficientOfficers {
        /// Officers available for allocation.
        officers: u32,
        /// Zones that each need one officer.
        zones: usize,
    },
    /// A record referenced a zone outside the layout.
    #[error("zone {zone} is not part of the layout")]
    UnknownZone {
        /// The unrecognised zone.
        zone: ZoneId,
    },
}

/// Historical incident totals per zone.
///
/// Every zone of the layout has an entry, zero when no history mentions it.
///
/// # Examples
/// ```
/// use dispatch_core::{EmergencyRecord, IncidentCounts, ZoneId, ZoneLayout};
///
/// # fn main() -> Result<(), dispatch_core::AllocationError> {
/// let layout = ZoneLayout::campus();
/// let history = [
///     EmergencyRecord::new(ZoneId::new(1)),
///     EmergencyRecord::new(ZoneId::new(1)),
/// ];
/// let counts = IncidentCounts::from_records(&layout, &history)?;
/// assert_eq!(counts.get(ZoneId::new(1)), 2);
/// assert_eq!(counts.get(ZoneId::new(0)), 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IncidentCounts {
    counts: BTreeMap<ZoneId, u32>,
}

impl IncidentCounts {
    /// Tally historical records per zone.
    ///
    /// # Errors
    /// Returns [`AllocationError::UnknownZone`] when a record names a zone
    /// outside `layout`.
    pub fn from_records<'a, I>(layout: &ZoneLayout, records: I) -> Result<Self, AllocationError>
    where
        I: IntoIterator<Item = &'a EmergencyRecord>,
    {
        Self::from_counts(layout, records.into_iter().map(|record| (record.zone, 1)))
    }

    /// Build counts from `(zone, incidents)` pairs; repeated zones accumulate.
    ///
    /// # Errors
    /// Returns [`AllocationError::UnknownZone`] when a pair names a zone
    /// outside `layout`.
    pub fn from_counts<I>(layout: &ZoneLayout, pairs: I) -> Result<Self, AllocationError>
    where
        I: IntoIterator<Item = (ZoneId, u32)>,
    {
        let mut counts: BTreeMap<ZoneId, u32> = layout.ids().map(|zone| (zone, 0)).collect();
        for (zone, incidents) in pairs {
            let slot = counts
                .get_mut(&zone)
                .ok_or(AllocationError::UnknownZone { zone })?;
            *slot = slot.saturating_add(incidents);
        }
        Ok(Self { counts })
    }

    /// Incidents recorded for `zone`; zero for unknown zones.
    #[must_use]
    pub fn get(&self, zone: ZoneId) -> u32 {
        self.counts.get(&zone).copied().unwrap_or_default()
    }

    /// Iterate `(zone, incidents)` in ascending zone order.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, u32)> + '_ {
        self.counts.iter().map(|(&zone, &incidents)| (zone, incidents))
    }

    /// Number of zones covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Report whether no zones are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all incidents.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&n| u64::from(n)).sum()
    }
}

/// Officers assigned to each zone after allocation.
///
/// Quotas are fixed once produced; there is no re-balancing when officers
/// return to duty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ZoneQuotas {
    quotas: BTreeMap<ZoneId, u32>,
}

impl ZoneQuotas {
    /// Officers assigned to `zone`; zero for unknown zones.
    #[must_use]
    pub fn get(&self, zone: ZoneId) -> u32 {
        self.quotas.get(&zone).copied().unwrap_or_default()
    }

    /// Iterate `(zone, quota)` in ascending zone order.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, u32)> + '_ {
        self.quotas.iter().map(|(&zone, &quota)| (zone, quota))
    }

    /// Number of zones covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotas.len()
    }

    /// Report whether no zones are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotas.is_empty()
    }

    /// Sum of all quotas.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.quotas.values().map(|&n| u64::from(n)).sum()
    }
}

/// Distribute `total_officers` across the zones in `counts`.
///
/// # Errors
/// Returns [`AllocationError::InsufficientOfficers`] when `total_officers` is
/// smaller than the number of zones.
///
/// # Examples
/// ```
/// use dispatch_core::{IncidentCounts, ZoneId, ZoneLayout, allocate};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let layout = ZoneLayout::new(["A", "B"])?;
/// let counts = IncidentCounts::from_counts(&layout, [(ZoneId::new(0), 3), (ZoneId::new(1), 1)])?;
/// let quotas = allocate(&counts, 6)?;
/// assert_eq!(quotas.get(ZoneId::new(0)), 4);
/// assert_eq!(quotas.get(ZoneId::new(1)), 2);
/// # Ok(())
/// # }
/// ```
pub fn allocate(counts: &IncidentCounts, total_officers: u32) -> Result<ZoneQuotas, AllocationError> {
    let zones = counts.len();
    let baseline = u32::try_from(zones)
        .ok()
        .filter(|&needed| needed <= total_officers)
        .ok_or(AllocationError::InsufficientOfficers {
            officers: total_officers,
            zones,
        })?;

    let mut quotas: BTreeMap<ZoneId, u32> = counts.iter().map(|(zone, _)| (zone, 1)).collect();
    let mut remaining = total_officers - baseline;

    while remaining > 0 {
        let Some(zone) = neediest_zone(counts, &quotas) else {
            break;
        };
        if let Some(quota) = quotas.get_mut(&zone) {
            *quota += 1;
            debug!("allocated officer {} to zone {zone}", *quota);
        }
        remaining -= 1;
    }

    if remaining > 0 {
        info!("no incident history; spreading {remaining} surplus officers round-robin");
        deal_round_robin(&mut quotas, remaining);
    }

    Ok(ZoneQuotas { quotas })
}

/// Zone with the lowest officers-per-incident ratio among zones with history.
fn neediest_zone(counts: &IncidentCounts, quotas: &BTreeMap<ZoneId, u32>) -> Option<ZoneId> {
    let mut best: Option<(ZoneId, u64, u64)> = None;
    for (zone, incidents) in counts.iter().filter(|&(_, incidents)| incidents > 0) {
        let allocated = u64::from(quotas.get(&zone).copied().unwrap_or_default());
        let incidents_wide = u64::from(incidents);
        let better = best.is_none_or(|(_, best_allocated, best_incidents)| {
            allocated * best_incidents < best_allocated * incidents_wide
        });
        if better {
            best = Some((zone, allocated, incidents_wide));
        }
    }
    best.map(|(zone, _, _)| zone)
}

fn deal_round_robin(quotas: &mut BTreeMap<ZoneId, u32>, surplus: u32) {
    let zones: Vec<ZoneId> = quotas.keys().copied().collect();
    let mut cursor = zones.iter().cycle();
    for _ in 0..surplus {
        if let Some(zone) = cursor.next()
            && let Some(quota) = quotas.get_mut(zone)
        {
            *quota += 1;
        }
    }
}
