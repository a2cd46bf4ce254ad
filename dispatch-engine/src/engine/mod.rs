//! `DispatchEngine` implementation.

use dispatch_core::{
    ConfigError, DispatchConfig, DistanceProvider, EquipmentCatalog, Loadout, LoadoutPlanner,
    OfficerId, OfficerRegistry, RegistryError, ZoneId, ZoneLayout,
};
use log::{debug, info, warn};

use crate::ranking::{ZoneRanking, rank_zones};
use crate::{DispatchError, DispatchResult, DispatchWarning};

/// Stages a single dispatch moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    RankingZones,
    SelectingOfficer,
    Deployed,
    Exhausted,
}

/// Assigns officers to incidents and plans their equipment.
///
/// The engine owns the officer registry for the lifetime of a run. Dispatch
/// takes `&mut self`, so choosing an officer and marking them deployed can
/// never interleave with another dispatch.
///
/// # Examples
/// ```
/// use dispatch_core::{
///     DispatchConfig, DistanceTable, EquipmentCatalog, OfficerRecord, OfficerRegistry, ZoneId,
/// };
/// use dispatch_engine::DispatchEngine;
/// use dispatch_knapsack::KnapsackPlanner;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DispatchConfig {
///     zone_anchors: vec!["A".to_owned(), "B".to_owned()],
///     ..DispatchConfig::default()
/// };
/// let layout = config.validate()?;
/// let registry = OfficerRegistry::load(&layout, [OfficerRecord::new("O1", ZoneId::new(1))])?;
/// let distances = DistanceTable::new()
///     .with_route("A", "Quad", 500.0)
///     .with_route("B", "Quad", 100.0);
/// let mut engine = DispatchEngine::new(
///     config,
///     registry,
///     EquipmentCatalog::campus(),
///     distances,
///     KnapsackPlanner,
/// )?;
///
/// let result = engine.dispatch("Quad", "fire alarm")?;
/// assert_eq!(result.officer_id.as_str(), "O1");
/// assert_eq!(result.zone, ZoneId::new(1));
/// assert!(result.total_weight <= 15);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DispatchEngine<P, L>
where
    P: DistanceProvider,
    L: LoadoutPlanner,
{
    config: DispatchConfig,
    layout: ZoneLayout,
    registry: OfficerRegistry,
    catalog: EquipmentCatalog,
    distance_provider: P,
    planner: L,
}

impl<P, L> DispatchEngine<P, L>
where
    P: DistanceProvider,
    L: LoadoutPlanner,
{
    /// Construct an engine after validating `config`.
    ///
    /// The zone layout is derived from `config.zone_anchors`; `registry`
    /// should have been built against the same layout.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration is invalid, and
    /// [`ConfigError::OfficerOutsideLayout`] when `registry` holds officers
    /// in a zone the derived layout does not contain.
    pub fn new(
        config: DispatchConfig,
        registry: OfficerRegistry,
        catalog: EquipmentCatalog,
        distance_provider: P,
        planner: L,
    ) -> Result<Self, ConfigError> {
        let layout = config.validate()?;
        if let Some(zone) = registry.staffed_zones().find(|&zone| !layout.contains(zone)) {
            return Err(ConfigError::OfficerOutsideLayout { zone });
        }
        debug!(
            "dispatch engine ready: {} zones, {} officers, carry capacity {}",
            layout.len(),
            registry.len(),
            config.carry_capacity
        );
        Ok(Self {
            config,
            layout,
            registry,
            catalog,
            distance_provider,
            planner,
        })
    }

    /// Deploy the nearest available officer to `location` and plan their
    /// equipment for `emergency_type`.
    ///
    /// Zones are ranked by distance from their anchor to `location`; within
    /// a zone officers are considered in registry order. An emergency type
    /// missing from the catalog still deploys an officer, with no equipment
    /// and a [`DispatchWarning::UnknownEmergencyType`].
    ///
    /// # Errors
    /// Returns [`DispatchError::EmptyLocation`] for a blank location, before
    /// any distance is queried, and [`DispatchError::NoOfficersAvailable`]
    /// when no ranked zone has an available officer.
    pub fn dispatch(
        &mut self,
        location: &str,
        emergency_type: &str,
    ) -> Result<DispatchResult, DispatchError> {
        let destination = location.trim();
        if destination.is_empty() {
            return Err(DispatchError::EmptyLocation);
        }

        trace_phase(destination, Phase::RankingZones);
        let ranking = self.rank_zones(destination);
        let mut warnings: Vec<DispatchWarning> = ranking
            .excluded()
            .iter()
            .map(|excluded| DispatchWarning::ZoneExcluded {
                zone: excluded.zone,
                error: excluded.error.clone(),
            })
            .collect();

        trace_phase(destination, Phase::SelectingOfficer);
        let Some((officer_id, zone, distance_meters)) = self.claim_nearest(&ranking) else {
            trace_phase(destination, Phase::Exhausted);
            return Err(DispatchError::NoOfficersAvailable {
                excluded_zones: ranking.excluded_zones().collect(),
            });
        };
        trace_phase(destination, Phase::Deployed);

        let capacity = self.config.carry_capacity;
        let loadout = self.catalog.items_for(emergency_type).map_or_else(
            || {
                warn!("no equipment catalogued for emergency type '{emergency_type}'");
                warnings.push(DispatchWarning::UnknownEmergencyType {
                    emergency_type: emergency_type.to_owned(),
                });
                Loadout::empty()
            },
            |items| self.planner.plan(items, capacity),
        );

        info!(
            "deployed officer {officer_id} from zone {zone} to '{destination}' ({distance_meters} m) carrying {} items",
            loadout.items().len()
        );
        Ok(DispatchResult {
            officer_id,
            zone,
            distance_meters,
            total_weight: loadout.total_weight(),
            total_importance: loadout.total_importance(),
            equipment: loadout.into_items(),
            warnings,
        })
    }

    /// Claim the first available officer in the nearest ranked zone that has one.
    fn claim_nearest(&mut self, ranking: &ZoneRanking) -> Option<(OfficerId, ZoneId, f64)> {
        ranking.ranked().iter().find_map(|candidate| {
            self.registry
                .claim_first_available(candidate.zone)
                .map(|officer| (officer.id().clone(), candidate.zone, candidate.distance_meters))
        })
    }

    /// Rank this engine's zones by distance to `location`.
    ///
    /// Does not touch officer state.
    pub fn rank_zones(&self, location: &str) -> ZoneRanking {
        rank_zones(&self.layout, &self.distance_provider, location.trim())
    }

    /// Return a deployed officer to service.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] for an unknown badge.
    pub fn return_to_service(&mut self, officer_id: &str) -> Result<(), RegistryError> {
        self.registry.mark_available(officer_id)?;
        info!("officer {officer_id} returned to service");
        Ok(())
    }

    /// The officer registry.
    #[must_use]
    pub const fn registry(&self) -> &OfficerRegistry {
        &self.registry
    }

    /// The zone layout derived from the configuration.
    #[must_use]
    pub const fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    /// The equipment catalog.
    #[must_use]
    pub const fn catalog(&self) -> &EquipmentCatalog {
        &self.catalog
    }

    /// The configuration the engine was built with.
    #[must_use]
    pub const fn config(&self) -> &DispatchConfig {
        &self.config
    }
}

fn trace_phase(location: &str, phase: Phase) {
    debug!("dispatch to '{location}': {phase:?}");
}

#[cfg(test)]
mod tests;
