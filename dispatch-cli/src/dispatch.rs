//! Dispatch command implementation.

use camino::Utf8PathBuf;
use clap::Parser;
use dispatch_core::{
    DEFAULT_CARRY_CAPACITY, DispatchConfig, DistanceProvider, DistanceTable, EmergencyRecord,
    EquipmentCatalog, EquipmentItem, IncidentCounts, OfficerId, OfficerRegistry, ZoneId, allocate,
};
use dispatch_engine::{DispatchEngine, DispatchResult};
use dispatch_knapsack::KnapsackPlanner;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::json::{load_json, write_line};
use crate::{
    ARG_CARRY_CAPACITY, ARG_DISTANCES, ARG_HISTORY, ARG_INCIDENTS, ARG_OFFICERS, ARG_ROSTER,
    CliError, ENV_DISPATCH_DISTANCES, ENV_DISPATCH_HISTORY, ENV_DISPATCH_INCIDENTS,
    ENV_DISPATCH_ROSTER,
};

/// CLI arguments for the `dispatch` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Answer a batch of incidents in order. Officers from the \
                 roster are assigned to zones by allocating the headcount \
                 against incident history; each incident then receives the \
                 first free officer from the nearest reachable zone, with an \
                 equipment loadout planned for its emergency type.",
    about = "Dispatch officers to a batch of incidents"
)]
#[ortho_config(prefix = "CAMPUS_DISPATCH")]
pub(crate) struct DispatchArgs {
    /// JSON array of incidents, each `{"location": .., "emergency_type": ..}`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) incidents_path: Option<Utf8PathBuf>,
    /// JSON array of past emergencies, each `{"zone": <id>}`.
    #[arg(long = ARG_HISTORY, value_name = "path")]
    #[serde(default)]
    pub(crate) history: Option<Utf8PathBuf>,
    /// JSON array of officer badges, assigned to zones in order.
    #[arg(long = ARG_ROSTER, value_name = "path")]
    #[serde(default)]
    pub(crate) roster: Option<Utf8PathBuf>,
    /// JSON array of `{"origin", "destination", "meters"}` routes.
    #[arg(long = ARG_DISTANCES, value_name = "path")]
    #[serde(default)]
    pub(crate) distances: Option<Utf8PathBuf>,
    /// Headcount to allocate; must match the roster (defaults to its length).
    #[arg(long = ARG_OFFICERS, value_name = "count")]
    #[serde(default)]
    pub(crate) officers: Option<u32>,
    /// Maximum equipment weight per officer (defaults to 15).
    #[arg(long = ARG_CARRY_CAPACITY, value_name = "weight")]
    #[serde(default)]
    pub(crate) carry_capacity: Option<u32>,
}

impl DispatchArgs {
    pub(crate) fn into_config(self) -> Result<DispatchRunConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DispatchRunConfig::try_from(merged)
    }
}

/// Resolved `dispatch` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DispatchRunConfig {
    /// Path to the incident batch.
    pub(crate) incidents_path: Utf8PathBuf,
    /// Path to the incident history.
    pub(crate) history: Utf8PathBuf,
    /// Path to the officer roster.
    pub(crate) roster: Utf8PathBuf,
    /// Path to the distance table.
    pub(crate) distances: Utf8PathBuf,
    /// Explicit headcount, if any.
    pub(crate) officers: Option<u32>,
    /// Carry capacity handed to the planner.
    pub(crate) carry_capacity: u32,
}

impl TryFrom<DispatchArgs> for DispatchRunConfig {
    type Error = CliError;

    fn try_from(args: DispatchArgs) -> Result<Self, Self::Error> {
        let incidents_path = args.incidents_path.ok_or(CliError::MissingArgument {
            field: ARG_INCIDENTS,
            env: ENV_DISPATCH_INCIDENTS,
        })?;
        let history = args.history.ok_or(CliError::MissingArgument {
            field: ARG_HISTORY,
            env: ENV_DISPATCH_HISTORY,
        })?;
        let roster = args.roster.ok_or(CliError::MissingArgument {
            field: ARG_ROSTER,
            env: ENV_DISPATCH_ROSTER,
        })?;
        let distances = args.distances.ok_or(CliError::MissingArgument {
            field: ARG_DISTANCES,
            env: ENV_DISPATCH_DISTANCES,
        })?;
        Ok(Self {
            incidents_path,
            history,
            roster,
            distances,
            officers: args.officers,
            carry_capacity: args.carry_capacity.unwrap_or(DEFAULT_CARRY_CAPACITY),
        })
    }
}

/// A single emergency to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Incident {
    pub(crate) location: String,
    pub(crate) emergency_type: String,
}

/// Per-incident output line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum IncidentOutcome<'a> {
    Deployed {
        location: &'a str,
        emergency_type: &'a str,
        officer_id: OfficerId,
        zone: ZoneId,
        distance_meters: f64,
        equipment: Vec<EquipmentItem>,
        total_weight: u64,
        total_importance: u64,
        warnings: Vec<String>,
    },
    Failed {
        location: &'a str,
        emergency_type: &'a str,
        error: String,
    },
}

impl<'a> IncidentOutcome<'a> {
    fn deployed(incident: &'a Incident, result: DispatchResult) -> Self {
        Self::Deployed {
            location: &incident.location,
            emergency_type: &incident.emergency_type,
            officer_id: result.officer_id,
            zone: result.zone,
            distance_meters: result.distance_meters,
            equipment: result.equipment,
            total_weight: result.total_weight,
            total_importance: result.total_importance,
            warnings: result.warnings.iter().map(ToString::to_string).collect(),
        }
    }

    fn failed(incident: &'a Incident, error: &dyn std::error::Error) -> Self {
        Self::Failed {
            location: &incident.location,
            emergency_type: &incident.emergency_type,
            error: error.to_string(),
        }
    }
}

/// Builds the distance provider for the current dispatch invocation.
pub(super) trait DistanceSource {
    fn build(&self, config: &DispatchRunConfig) -> Result<Box<dyn DistanceProvider>, CliError>;
}

/// Loads the distance table named by `--distances`.
pub(super) struct TableDistanceSource;

impl DistanceSource for TableDistanceSource {
    fn build(&self, config: &DispatchRunConfig) -> Result<Box<dyn DistanceProvider>, CliError> {
        let table: DistanceTable = load_json(&config.distances, ARG_DISTANCES)?;
        debug!("loaded {} routes from {}", table.len(), config.distances);
        Ok(Box::new(table))
    }
}

type CliEngine = DispatchEngine<Box<dyn DistanceProvider>, KnapsackPlanner>;

pub(super) fn run_dispatch_with(
    args: DispatchArgs,
    source: &dyn DistanceSource,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_dispatch(&config, source, writer)
}

pub(crate) fn execute_dispatch(
    config: &DispatchRunConfig,
    source: &dyn DistanceSource,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let incidents: Vec<Incident> = load_json(&config.incidents_path, ARG_INCIDENTS)?;
    let mut engine = build_engine(config, source)?;

    let mut deployed = 0_usize;
    for incident in &incidents {
        let outcome = match engine.dispatch(&incident.location, &incident.emergency_type) {
            Ok(result) => {
                deployed = deployed.saturating_add(1);
                IncidentOutcome::deployed(incident, result)
            }
            Err(err) => IncidentOutcome::failed(incident, &err),
        };
        write_line(writer, &outcome)?;
    }
    info!("answered {deployed} of {} incidents", incidents.len());
    Ok(())
}

pub(crate) fn build_engine(
    config: &DispatchRunConfig,
    source: &dyn DistanceSource,
) -> Result<CliEngine, CliError> {
    let history: Vec<EmergencyRecord> = load_json(&config.history, ARG_HISTORY)?;
    let roster: Vec<String> = load_json(&config.roster, ARG_ROSTER)?;
    let dispatch_config = DispatchConfig {
        carry_capacity: config.carry_capacity,
        total_officers: config
            .officers
            .unwrap_or_else(|| u32::try_from(roster.len()).unwrap_or(u32::MAX)),
        ..DispatchConfig::default()
    };
    let layout = dispatch_config.validate()?;

    let counts = IncidentCounts::from_records(&layout, &history)?;
    let quotas = allocate(&counts, dispatch_config.total_officers)?;
    let registry = OfficerRegistry::from_quotas(&layout, roster, &quotas)?;
    let provider = source.build(config)?;

    Ok(DispatchEngine::new(
        dispatch_config,
        registry,
        EquipmentCatalog::campus(),
        provider,
        KnapsackPlanner,
    )?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DispatchRunConfig, CliError> {
    let merged = DispatchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DispatchRunConfig::try_from(merged)
}
