//! Allocate command implementation.

use camino::Utf8PathBuf;
use clap::Parser;
use dispatch_core::{
    DispatchConfig, EmergencyRecord, IncidentCounts, ZoneId, ZoneLayout, ZoneQuotas, allocate,
};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::json::{load_json, write_pretty};
use crate::{ARG_HISTORY, ARG_OFFICERS, CliError, ENV_ALLOCATE_HISTORY};

/// CLI arguments for the `allocate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Distribute a fixed officer headcount across the campus zones. \
                 Every zone receives one officer; the rest go to the zones \
                 with the fewest officers per historical incident.",
    about = "Allocate officers to zones from incident history"
)]
#[ortho_config(prefix = "CAMPUS_DISPATCH")]
pub(crate) struct AllocateArgs {
    /// JSON array of past emergencies, each `{"zone": <id>}`.
    #[arg(long = ARG_HISTORY, value_name = "path")]
    #[serde(default)]
    pub(crate) history: Option<Utf8PathBuf>,
    /// Officers to distribute (defaults to 25).
    #[arg(long = ARG_OFFICERS, value_name = "count")]
    #[serde(default)]
    pub(crate) officers: Option<u32>,
}

impl AllocateArgs {
    pub(crate) fn into_config(self) -> Result<AllocateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AllocateConfig::try_from(merged)
    }
}

/// Resolved `allocate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AllocateConfig {
    /// Path to the incident history.
    pub(crate) history: Utf8PathBuf,
    /// Officers to distribute.
    pub(crate) officers: u32,
}

impl TryFrom<AllocateArgs> for AllocateConfig {
    type Error = CliError;

    fn try_from(args: AllocateArgs) -> Result<Self, Self::Error> {
        let history = args.history.ok_or(CliError::MissingArgument {
            field: ARG_HISTORY,
            env: ENV_ALLOCATE_HISTORY,
        })?;
        Ok(Self {
            history,
            officers: args
                .officers
                .unwrap_or_else(|| DispatchConfig::default().total_officers),
        })
    }
}

/// One zone's share of the headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ZoneAllocation {
    pub(crate) zone: ZoneId,
    pub(crate) anchor: String,
    pub(crate) incidents: u32,
    pub(crate) officers: u32,
}

/// Output of the `allocate` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct AllocationReport {
    pub(crate) total_officers: u32,
    pub(crate) zones: Vec<ZoneAllocation>,
}

impl AllocationReport {
    fn new(layout: &ZoneLayout, counts: &IncidentCounts, quotas: &ZoneQuotas) -> Self {
        let zones = layout
            .iter()
            .map(|zone| ZoneAllocation {
                zone: zone.id(),
                anchor: zone.anchor().to_owned(),
                incidents: counts.get(zone.id()),
                officers: quotas.get(zone.id()),
            })
            .collect();
        Self {
            total_officers: u32::try_from(quotas.total()).unwrap_or(u32::MAX),
            zones,
        }
    }
}

pub(super) fn run_allocate_with(args: AllocateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_allocate(&config, &ZoneLayout::campus())?;
    write_pretty(writer, &report)
}

pub(crate) fn execute_allocate(
    config: &AllocateConfig,
    layout: &ZoneLayout,
) -> Result<AllocationReport, CliError> {
    let history: Vec<EmergencyRecord> = load_json(&config.history, ARG_HISTORY)?;
    debug!("loaded {} historical emergencies from {}", history.len(), config.history);
    let counts = IncidentCounts::from_records(layout, &history)?;
    let quotas = allocate(&counts, config.officers)?;
    Ok(AllocationReport::new(layout, &counts, &quotas))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AllocateConfig, CliError> {
    let merged = AllocateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AllocateConfig::try_from(merged)
}
