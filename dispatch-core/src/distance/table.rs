//! In-memory distance lookup table.

use std::collections::BTreeMap;

use super::{DistanceError, DistanceProvider};

/// One row of a serialised [`DistanceTable`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceEntry {
    /// Origin label, usually a zone anchor.
    pub origin: String,
    /// Destination label, usually an incident location.
    pub destination: String,
    /// Walking distance in metres.
    pub meters: f64,
}

/// Fixed `(origin, destination)` distance lookup.
///
/// Routes are directional: a lookup from `origin` to `destination` only finds
/// entries recorded in that direction. Missing pairs yield
/// [`DistanceError::NoRoute`]. Serialises as a list of [`DistanceEntry`]
/// rows; a later row for the same pair replaces an earlier one.
///
/// # Examples
/// ```
/// use dispatch_core::{DistanceProvider, DistanceTable};
///
/// let table = DistanceTable::new()
///     .with_route("Snell Library", "Ell Hall", 240.0)
///     .with_route("Columbus Place", "Ell Hall", 910.0);
/// assert_eq!(table.distance("Snell Library", "Ell Hall"), Ok(240.0));
/// assert!(table.distance("Ell Hall", "Snell Library").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<DistanceEntry>", into = "Vec<DistanceEntry>")
)]
pub struct DistanceTable {
    routes: BTreeMap<String, BTreeMap<String, f64>>,
}

impl DistanceTable {
    /// Construct an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a route and return the table.
    #[must_use]
    pub fn with_route(
        mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        meters: f64,
    ) -> Self {
        self.insert(origin, destination, meters);
        self
    }

    /// Record or replace a route.
    pub fn insert(&mut self, origin: impl Into<String>, destination: impl Into<String>, meters: f64) {
        self.routes
            .entry(origin.into())
            .or_default()
            .insert(destination.into(), meters);
    }

    /// Number of recorded routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.values().map(BTreeMap::len).sum()
    }

    /// Report whether no routes are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<DistanceEntry> for DistanceTable {
    fn from_iter<I: IntoIterator<Item = DistanceEntry>>(entries: I) -> Self {
        entries.into_iter().fold(Self::new(), |table, entry| {
            table.with_route(entry.origin, entry.destination, entry.meters)
        })
    }
}

impl From<Vec<DistanceEntry>> for DistanceTable {
    fn from(entries: Vec<DistanceEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<DistanceTable> for Vec<DistanceEntry> {
    fn from(table: DistanceTable) -> Self {
        table
            .routes
            .into_iter()
            .flat_map(|(origin, destinations)| {
                destinations
                    .into_iter()
                    .map(move |(destination, meters)| DistanceEntry {
                        origin: origin.clone(),
                        destination,
                        meters,
                    })
            })
            .collect()
    }
}

impl DistanceProvider for DistanceTable {
    fn distance(&self, origin: &str, destination: &str) -> Result<f64, DistanceError> {
        self.routes
            .get(origin)
            .and_then(|destinations| destinations.get(destination))
            .copied()
            .ok_or_else(|| DistanceError::NoRoute {
                origin: origin.to_owned(),
                destination: destination.to_owned(),
            })
    }
}
