//! Behavioural tests for `DispatchEngine`.

use std::cell::RefCell;

use dispatch_core::{
    DispatchConfig, DistanceTable, EquipmentCatalog, EquipmentItem, OfficerRecord,
    OfficerRegistry, ZoneId,
};
use dispatch_engine::{DispatchEngine, DispatchError, DispatchResult, DispatchWarning};
use dispatch_knapsack::KnapsackPlanner;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const QUAD: &str = "Centennial Quad";

#[derive(Default)]
struct World {
    distances: RefCell<DistanceTable>,
    roster: RefCell<Vec<OfficerRecord>>,
    catalog: RefCell<Option<EquipmentCatalog>>,
    engine: RefCell<Option<DispatchEngine<DistanceTable, KnapsackPlanner>>>,
    outcome: RefCell<Option<Result<DispatchResult, DispatchError>>>,
}

impl World {
    fn dispatch(&self, emergency_type: &str) {
        let mut engine_cell = self.engine.borrow_mut();
        let engine = engine_cell.get_or_insert_with(|| self.build_engine());
        *self.outcome.borrow_mut() = Some(engine.dispatch(QUAD, emergency_type));
    }

    fn build_engine(&self) -> DispatchEngine<DistanceTable, KnapsackPlanner> {
        let config = DispatchConfig {
            zone_anchors: vec!["A".to_owned(), "B".to_owned()],
            ..DispatchConfig::default()
        };
        let layout = config.zone_layout().expect("valid layout");
        let registry =
            OfficerRegistry::load(&layout, self.roster.borrow().clone()).expect("valid roster");
        let catalog = self
            .catalog
            .borrow()
            .clone()
            .unwrap_or_else(EquipmentCatalog::campus);
        DispatchEngine::new(
            config,
            registry,
            catalog,
            self.distances.borrow().clone(),
            KnapsackPlanner,
        )
        .expect("valid engine")
    }

    fn result(&self) -> DispatchResult {
        self.outcome
            .borrow()
            .clone()
            .expect("a dispatch was attempted")
            .expect("dispatch succeeded")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("zone 0 at 500 metres and zone 1 at 100 metres from the quad")]
fn given_two_routes(world: &World) {
    *world.distances.borrow_mut() = DistanceTable::new()
        .with_route("A", QUAD, 500.0)
        .with_route("B", QUAD, 100.0);
}

#[given("only zone 0 has a route to the quad at 500 metres")]
fn given_one_route(world: &World) {
    *world.distances.borrow_mut() = DistanceTable::new().with_route("A", QUAD, 500.0);
}

#[given("officer O1 patrols zone 1")]
fn given_o1_zone1(world: &World) {
    world
        .roster
        .borrow_mut()
        .push(OfficerRecord::new("O1", ZoneId::new(1)));
}

#[given("officer O1 patrols zone 0")]
fn given_o1_zone0(world: &World) {
    world
        .roster
        .borrow_mut()
        .push(OfficerRecord::new("O1", ZoneId::new(0)));
}

#[given("officer O2 patrols zone 1")]
fn given_o2_zone1(world: &World) {
    world
        .roster
        .borrow_mut()
        .push(OfficerRecord::new("O2", ZoneId::new(1)));
}

#[given("a fire alarm catalog of taser, fire extinguisher and fire axe")]
fn given_fire_catalog(world: &World) {
    let catalog = EquipmentCatalog::new().with_entry(
        "fire alarm",
        vec![
            EquipmentItem::new("taser", 2, 0),
            EquipmentItem::new("fire extinguisher", 5, 6),
            EquipmentItem::new("fire axe", 8, 5),
        ],
    );
    *world.catalog.borrow_mut() = Some(catalog);
}

#[when("a fire alarm at the quad is dispatched")]
fn when_fire_alarm(world: &World) {
    world.dispatch("fire alarm");
}

#[when("a second fire alarm at the quad is dispatched")]
fn when_second_fire_alarm(world: &World) {
    world.dispatch("fire alarm");
}

#[when("an unknown_type emergency at the quad is dispatched")]
fn when_unknown_type(world: &World) {
    world.dispatch("unknown_type");
}

#[then("officer O1 from zone 1 responds at 100 metres")]
fn then_o1_zone1(world: &World) {
    let result = world.result();
    assert_eq!(result.officer_id.as_str(), "O1");
    assert_eq!(result.zone, ZoneId::new(1));
    assert_eq!(result.distance_meters, 100.0);
}

#[then("officer O1 from zone 0 responds at 500 metres")]
fn then_o1_zone0(world: &World) {
    let result = world.result();
    assert_eq!(result.officer_id.as_str(), "O1");
    assert_eq!(result.zone, ZoneId::new(0));
    assert_eq!(result.distance_meters, 500.0);
}

#[then("the officer carries the fire extinguisher and fire axe")]
fn then_fire_kit(world: &World) {
    let result = world.result();
    let names: Vec<&str> = result.equipment.iter().map(EquipmentItem::name).collect();
    assert_eq!(names, ["fire extinguisher", "fire axe"]);
}

#[then("the loadout weighs 13 with importance 11")]
fn then_totals(world: &World) {
    let result = world.result();
    assert_eq!(result.total_weight, 13);
    assert_eq!(result.total_importance, 11);
}

#[then("no officers are available")]
fn then_exhausted(world: &World) {
    let outcome = world.outcome.borrow();
    assert_eq!(
        outcome.as_ref().and_then(|result| result.as_ref().err()),
        Some(&DispatchError::NoOfficersAvailable {
            excluded_zones: Vec::new()
        })
    );
}

#[then("the dispatch warns about an unknown emergency type")]
fn then_unknown_warning(world: &World) {
    let result = world.result();
    assert!(result.warnings.iter().any(|warning| matches!(
        warning,
        DispatchWarning::UnknownEmergencyType { emergency_type } if emergency_type == "unknown_type"
    )));
}

#[then("the officer carries no equipment")]
fn then_no_equipment(world: &World) {
    assert!(world.result().equipment.is_empty());
}

#[then("the dispatch warns that zone 1 was excluded")]
fn then_zone_excluded(world: &World) {
    let result = world.result();
    assert!(result.warnings.iter().any(|warning| matches!(
        warning,
        DispatchWarning::ZoneExcluded { zone, .. } if *zone == ZoneId::new(1)
    )));
}

#[scenario(path = "tests/features/dispatch.feature", index = 0)]
fn nearest_zone_responds(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/dispatch.feature", index = 1)]
fn fire_alarm_loadout(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/dispatch.feature", index = 2)]
fn exhaustion(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/dispatch.feature", index = 3)]
fn unknown_emergency_type(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/dispatch.feature", index = 4)]
fn unreachable_zones_are_skipped(world: World) {
    let _ = world;
}
