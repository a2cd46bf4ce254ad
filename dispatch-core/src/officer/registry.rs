//! Zone-partitioned officer storage with availability tracking.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use super::{Officer, OfficerId, OfficerStatus, RegistryError};
use crate::{OfficerRecord, ZoneId, ZoneLayout, ZoneQuotas};

/// Position of an officer inside the per-zone storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    zone: ZoneId,
    position: usize,
}

/// All officers, partitioned by zone in load order.
///
/// The per-zone lists are the only copy of each officer. The id index stores
/// positions into those lists, so lookups by badge and scans by zone always
/// observe the same state.
///
/// # Examples
/// ```
/// use dispatch_core::{OfficerRecord, OfficerRegistry, ZoneId, ZoneLayout};
///
/// # fn main() -> Result<(), dispatch_core::RegistryError> {
/// let layout = ZoneLayout::campus();
/// let mut registry = OfficerRegistry::load(
///     &layout,
///     [
///         OfficerRecord::new("B-1", ZoneId::new(0)),
///         OfficerRecord::new("B-2", ZoneId::new(0)),
///     ],
/// )?;
/// registry.mark_deployed("B-1")?;
/// let available: Vec<&str> = registry
///     .available_in_zone(ZoneId::new(0))
///     .map(|officer| officer.id().as_str())
///     .collect();
/// assert_eq!(available, ["B-2"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct OfficerRegistry {
    zones: BTreeMap<ZoneId, Vec<Officer>>,
    index: HashMap<OfficerId, Slot>,
}

impl OfficerRegistry {
    fn empty(layout: &ZoneLayout) -> Self {
        Self {
            zones: layout.ids().map(|zone| (zone, Vec::new())).collect(),
            index: HashMap::new(),
        }
    }

    /// Load officers from roster records, preserving record order per zone.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateOfficer`] when a badge repeats and
    /// [`RegistryError::UnknownZone`] when a record names a zone outside
    /// `layout`.
    pub fn load<I>(layout: &ZoneLayout, records: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = OfficerRecord>,
    {
        let mut registry = Self::empty(layout);
        for record in records {
            registry.insert(OfficerId::from(record.id), record.zone)?;
        }
        debug!(
            "loaded {} officers across {} zones",
            registry.len(),
            registry.zones.len()
        );
        Ok(registry)
    }

    /// Assign a roster of badges to zones according to allocated quotas.
    ///
    /// Badges are handed out in roster order, filling zones in ascending id
    /// order: the first `quota(0)` badges go to zone 0, the next `quota(1)` to
    /// zone 1, and so on.
    ///
    /// # Errors
    /// Returns [`RegistryError::RosterSizeMismatch`] when the roster length
    /// differs from the quota total, plus the errors of [`Self::load`].
    pub fn from_quotas<I, T>(
        layout: &ZoneLayout,
        roster: I,
        quotas: &ZoneQuotas,
    ) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OfficerId>,
    {
        let badges: Vec<OfficerId> = roster.into_iter().map(Into::into).collect();
        let roster_len = u64::try_from(badges.len()).unwrap_or(u64::MAX);
        if roster_len != quotas.total() {
            return Err(RegistryError::RosterSizeMismatch {
                roster: badges.len(),
                quota_total: quotas.total(),
            });
        }

        let mut registry = Self::empty(layout);
        let mut badges_iter = badges.into_iter();
        for (zone, quota) in quotas.iter() {
            for badge in badges_iter.by_ref().take(usize::try_from(quota).unwrap_or(usize::MAX)) {
                registry.insert(badge, zone)?;
            }
        }
        Ok(registry)
    }

    fn insert(&mut self, id: OfficerId, zone: ZoneId) -> Result<(), RegistryError> {
        if self.index.contains_key(&id) {
            return Err(RegistryError::DuplicateOfficer {
                id: id.as_str().to_owned(),
            });
        }
        let Some(officers) = self.zones.get_mut(&zone) else {
            return Err(RegistryError::UnknownZone {
                id: id.as_str().to_owned(),
                zone,
            });
        };
        let slot = Slot {
            zone,
            position: officers.len(),
        };
        officers.push(Officer::new(id.clone(), zone));
        self.index.insert(id, slot);
        Ok(())
    }

    /// Look up an officer by badge.
    #[must_use]
    pub fn officer(&self, id: &str) -> Option<&Officer> {
        let slot = self.index.get(id)?;
        self.zones.get(&slot.zone)?.get(slot.position)
    }

    fn officer_mut(&mut self, id: &str) -> Result<&mut Officer, RegistryError> {
        self.index
            .get(id)
            .copied()
            .and_then(|slot| self.zones.get_mut(&slot.zone)?.get_mut(slot.position))
            .ok_or_else(|| RegistryError::NotFound { id: id.to_owned() })
    }

    /// Officers in `zone` that can take a call, in load order.
    pub fn available_in_zone(&self, zone: ZoneId) -> impl Iterator<Item = &Officer> + '_ {
        self.officers_in_zone(zone)
            .iter()
            .filter(|officer| officer.is_available())
    }

    /// Every officer in `zone`, in load order.
    #[must_use]
    pub fn officers_in_zone(&self, zone: ZoneId) -> &[Officer] {
        self.zones.get(&zone).map(Vec::as_slice).unwrap_or_default()
    }

    /// Mark an officer as out on a call.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] for an unknown badge.
    pub fn mark_deployed(&mut self, id: &str) -> Result<(), RegistryError> {
        self.set_status(id, OfficerStatus::Deployed)
    }

    /// Return an officer to service.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] for an unknown badge.
    pub fn mark_available(&mut self, id: &str) -> Result<(), RegistryError> {
        self.set_status(id, OfficerStatus::Available)
    }

    fn set_status(&mut self, id: &str, status: OfficerStatus) -> Result<(), RegistryError> {
        let officer = self.officer_mut(id)?;
        officer.set_status(status);
        debug!("officer {id} is now {status:?}");
        Ok(())
    }

    /// Deploy the first available officer in `zone` and return them.
    ///
    /// Finding and marking happen under one exclusive borrow, so an officer
    /// can never be claimed twice.
    pub fn claim_first_available(&mut self, zone: ZoneId) -> Option<&Officer> {
        let officer = self
            .zones
            .get_mut(&zone)?
            .iter_mut()
            .find(|officer| officer.is_available())?;
        officer.set_status(OfficerStatus::Deployed);
        Some(officer)
    }

    /// Total number of officers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Report whether the registry holds no officers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of officers currently available across all zones.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.zones
            .values()
            .flatten()
            .filter(|officer| officer.is_available())
            .count()
    }

    /// Zones holding at least one officer, in ascending order.
    pub fn staffed_zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.zones
            .iter()
            .filter(|(_, officers)| !officers.is_empty())
            .map(|(&zone, _)| zone)
    }

    /// Number of officers assigned to `zone`, deployed or not.
    #[must_use]
    pub fn zone_headcount(&self, zone: ZoneId) -> usize {
        self.officers_in_zone(zone).len()
    }
}
