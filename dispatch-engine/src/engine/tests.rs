//! Tests for the `DispatchEngine`.

use super::*;
use dispatch_core::test_support::{FailingDistanceProvider, UniformDistanceProvider, roster};
use dispatch_core::{DistanceError, DistanceTable, EquipmentItem};
use dispatch_knapsack::KnapsackPlanner;
use rstest::{fixture, rstest};

type TableEngine = DispatchEngine<DistanceTable, KnapsackPlanner>;

fn two_zone_config() -> DispatchConfig {
    DispatchConfig {
        zone_anchors: vec!["A".to_owned(), "B".to_owned()],
        ..DispatchConfig::default()
    }
}

fn engine_with<P: DistanceProvider>(
    provider: P,
    officers: &[(&str, u8)],
) -> DispatchEngine<P, KnapsackPlanner> {
    let config = two_zone_config();
    let layout = config.zone_layout().expect("valid layout");
    let registry = OfficerRegistry::load(&layout, roster(officers)).expect("valid roster");
    DispatchEngine::new(
        config,
        registry,
        EquipmentCatalog::campus(),
        provider,
        KnapsackPlanner,
    )
    .expect("valid engine")
}

#[fixture]
fn distances() -> DistanceTable {
    DistanceTable::new()
        .with_route("A", "Quad", 500.0)
        .with_route("B", "Quad", 100.0)
}

#[fixture]
fn engine(distances: DistanceTable) -> TableEngine {
    engine_with(distances, &[("O1", 0), ("O2", 1), ("O3", 1)])
}

#[rstest]
fn nearest_zone_supplies_the_officer(distances: DistanceTable) {
    let mut engine = engine_with(distances, &[("O1", 1)]);
    let result = engine.dispatch("Quad", "theft").expect("officer available");
    assert_eq!(result.officer_id.as_str(), "O1");
    assert_eq!(result.zone, ZoneId::new(1));
    assert_eq!(result.distance_meters, 100.0);
    assert!(result.warnings.is_empty());
}

#[rstest]
fn officers_within_a_zone_are_taken_in_registry_order(mut engine: TableEngine) {
    let first = engine.dispatch("Quad", "theft").expect("first dispatch");
    let second = engine.dispatch("Quad", "theft").expect("second dispatch");
    assert_eq!(first.officer_id.as_str(), "O2");
    assert_eq!(second.officer_id.as_str(), "O3");
}

#[rstest]
fn exhausted_zones_fall_through_to_the_next_nearest(mut engine: TableEngine) {
    engine.dispatch("Quad", "theft").expect("O2");
    engine.dispatch("Quad", "theft").expect("O3");
    let third = engine.dispatch("Quad", "theft").expect("O1");
    assert_eq!(third.officer_id.as_str(), "O1");
    assert_eq!(third.zone, ZoneId::new(0));
    assert_eq!(third.distance_meters, 500.0);
}

#[rstest]
fn deployment_is_recorded_in_the_registry(mut engine: TableEngine) {
    let result = engine.dispatch("Quad", "theft").expect("dispatch");
    let officer = engine
        .registry()
        .officer(result.officer_id.as_str())
        .expect("deployed officer is registered");
    assert!(!officer.is_available());
}

#[rstest]
fn exhaustion_is_an_error(distances: DistanceTable) {
    let mut engine = engine_with(distances, &[("O1", 0)]);
    engine.dispatch("Quad", "theft").expect("O1");
    let err = engine.dispatch("Quad", "theft").expect_err("nobody left");
    assert_eq!(
        err,
        DispatchError::NoOfficersAvailable {
            excluded_zones: Vec::new()
        }
    );
}

#[rstest]
fn returned_officers_can_be_dispatched_again(distances: DistanceTable) {
    let mut engine = engine_with(distances, &[("O1", 0)]);
    engine.dispatch("Quad", "theft").expect("O1");
    engine.return_to_service("O1").expect("known officer");
    assert!(engine.dispatch("Quad", "theft").is_ok());
    assert!(matches!(
        engine.return_to_service("ghost"),
        Err(RegistryError::NotFound { .. })
    ));
}

#[rstest]
fn unknown_emergency_type_still_deploys(mut engine: TableEngine) {
    let result = engine.dispatch("Quad", "unknown_type").expect("officer available");
    assert!(result.equipment.is_empty());
    assert_eq!(result.total_importance, 0);
    assert_eq!(
        result.warnings,
        [DispatchWarning::UnknownEmergencyType {
            emergency_type: "unknown_type".to_owned()
        }]
    );
}

#[rstest]
fn known_emergency_type_gets_an_optimal_loadout() {
    let catalog = EquipmentCatalog::new().with_entry(
        "fire alarm",
        vec![
            EquipmentItem::new("taser", 2, 0),
            EquipmentItem::new("fire extinguisher", 5, 6),
            EquipmentItem::new("fire axe", 8, 5),
        ],
    );
    let config = two_zone_config();
    let layout = config.zone_layout().expect("valid layout");
    let registry = OfficerRegistry::load(&layout, roster(&[("O1", 0)])).expect("roster");
    let mut engine = DispatchEngine::new(
        config,
        registry,
        catalog,
        UniformDistanceProvider(10.0),
        KnapsackPlanner,
    )
    .expect("valid engine");

    let result = engine.dispatch("Quad", "Fire Alarm").expect("dispatch");
    let names: Vec<&str> = result.equipment.iter().map(EquipmentItem::name).collect();
    assert_eq!(names, ["fire extinguisher", "fire axe"]);
    assert_eq!(result.total_importance, 11);
    assert_eq!(result.total_weight, 13);
}

#[rstest]
fn distance_failures_exclude_zones_with_a_warning() {
    let provider = FailingDistanceProvider::new(UniformDistanceProvider(10.0)).failing_for("A");
    let mut engine = engine_with(provider, &[("O1", 0), ("O2", 1)]);
    let result = engine.dispatch("Quad", "theft").expect("zone 1 reachable");
    assert_eq!(result.officer_id.as_str(), "O2");
    assert!(matches!(
        result.warnings.as_slice(),
        [DispatchWarning::ZoneExcluded {
            error: DistanceError::Timeout { .. },
            ..
        }]
    ));
}

#[rstest]
fn unreachable_officers_are_reported_with_their_zones() {
    let provider = FailingDistanceProvider::new(UniformDistanceProvider(10.0)).failing_for("A");
    let mut engine = engine_with(provider, &[("O1", 0)]);
    let err = engine.dispatch("Quad", "theft").expect_err("only officer unreachable");
    assert_eq!(
        err,
        DispatchError::NoOfficersAvailable {
            excluded_zones: vec![ZoneId::new(0)]
        }
    );
    assert_eq!(engine.registry().available_count(), 1);
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_locations_are_rejected_without_deploying(mut engine: TableEngine, #[case] location: &str) {
    assert_eq!(
        engine.dispatch(location, "theft"),
        Err(DispatchError::EmptyLocation)
    );
    assert_eq!(engine.registry().available_count(), 3);
}

#[rstest]
fn invalid_configuration_is_rejected() {
    let config = DispatchConfig {
        carry_capacity: 0,
        ..two_zone_config()
    };
    let layout = two_zone_config().zone_layout().expect("valid layout");
    let registry = OfficerRegistry::load(&layout, Vec::new()).expect("empty roster");
    let err = DispatchEngine::new(
        config,
        registry,
        EquipmentCatalog::campus(),
        UniformDistanceProvider(1.0),
        KnapsackPlanner,
    )
    .expect_err("zero capacity");
    assert_eq!(err, ConfigError::ZeroCapacity);
}

#[rstest]
fn registries_from_another_layout_are_rejected() {
    let campus = ZoneLayout::campus();
    let registry =
        OfficerRegistry::load(&campus, roster(&[("O1", 0), ("O4", 3)])).expect("campus roster");
    let err = DispatchEngine::new(
        two_zone_config(),
        registry,
        EquipmentCatalog::campus(),
        UniformDistanceProvider(1.0),
        KnapsackPlanner,
    )
    .expect_err("zone 3 is outside the two-zone layout");
    assert_eq!(
        err,
        ConfigError::OfficerOutsideLayout {
            zone: ZoneId::new(3)
        }
    );
}
