//! Test helpers for laying out CLI input files in a temporary workspace.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::dispatch::DispatchRunConfig;

pub(super) const INCIDENT_LOCATION: &str = "Ell Hall";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory holding the JSON inputs of one test.
#[derive(Debug)]
pub(super) struct InputFiles {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl InputFiles {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_json(&self, name: &str, value: &Value) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
        write_utf8(&path, &payload);
        path
    }

    /// Three incidents in zone 1 and one route per campus anchor to the incident.
    pub(super) fn write_campus_inputs(&self) {
        self.write_json(
            "history.json",
            &json!([{ "zone": 1 }, { "zone": 1 }, { "zone": 1 }]),
        );
        self.write_json(
            "roster.json",
            &json!(["B-1", "B-2", "B-3", "B-4", "B-5"]),
        );
        self.write_json(
            "distances.json",
            &json!([
                { "origin": "Curry Student Center", "destination": INCIDENT_LOCATION, "meters": 300.0 },
                { "origin": "Snell Library", "destination": INCIDENT_LOCATION, "meters": 100.0 },
                { "origin": "Marino Recreation Center", "destination": INCIDENT_LOCATION, "meters": 500.0 },
                { "origin": "Columbus Place", "destination": INCIDENT_LOCATION, "meters": 700.0 },
            ]),
        );
    }

    pub(super) fn write_incidents(&self, emergency_types: &[&str]) {
        let incidents: Vec<Value> = emergency_types
            .iter()
            .map(|emergency_type| {
                json!({ "location": INCIDENT_LOCATION, "emergency_type": emergency_type })
            })
            .collect();
        self.write_json("incidents.json", &Value::Array(incidents));
    }

    pub(super) fn dispatch_config(&self) -> DispatchRunConfig {
        DispatchRunConfig {
            incidents_path: self.path("incidents.json"),
            history: self.path("history.json"),
            roster: self.path("roster.json"),
            distances: self.path("distances.json"),
            officers: None,
            carry_capacity: 15,
        }
    }
}

/// Parse JSON Lines output into values.
pub(super) fn output_lines(stdout: &[u8]) -> Vec<Value> {
    let text = std::str::from_utf8(stdout).expect("stdout utf-8");
    text.lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect()
}
