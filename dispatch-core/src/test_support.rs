//! Deterministic collaborators and record builders for unit and behaviour
//! tests.

use std::collections::HashSet;

use crate::{DistanceError, DistanceProvider, EmergencyRecord, OfficerRecord, ZoneId};

/// `DistanceProvider` returning the same distance for every pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformDistanceProvider(pub f64);

impl DistanceProvider for UniformDistanceProvider {
    fn distance(&self, _origin: &str, _destination: &str) -> Result<f64, DistanceError> {
        Ok(self.0)
    }
}

/// `DistanceProvider` that fails for selected origins and delegates the
/// rest.
///
/// Failures are reported as [`DistanceError::Timeout`], mimicking a routing
/// service that stops answering for part of the campus.
#[derive(Debug, Clone)]
pub struct FailingDistanceProvider<P> {
    inner: P,
    failing: HashSet<String>,
    fail_all: bool,
}

impl<P> FailingDistanceProvider<P> {
    /// Wrap `inner` without any failures configured.
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            failing: HashSet::new(),
            fail_all: false,
        }
    }

    /// Fail every query whose origin is `origin`.
    #[must_use]
    pub fn failing_for(mut self, origin: impl Into<String>) -> Self {
        self.failing.insert(origin.into());
        self
    }

    /// Fail every query.
    #[must_use]
    pub fn failing_everywhere(mut self) -> Self {
        self.fail_all = true;
        self
    }
}

impl<P: DistanceProvider> DistanceProvider for FailingDistanceProvider<P> {
    fn distance(&self, origin: &str, destination: &str) -> Result<f64, DistanceError> {
        if self.fail_all || self.failing.contains(origin) {
            return Err(DistanceError::Timeout {
                origin: origin.to_owned(),
                destination: destination.to_owned(),
                timeout_secs: 5,
            });
        }
        self.inner.distance(origin, destination)
    }
}

/// Expand `(zone, count)` pairs into emergency history.
///
/// # Examples
/// ```
/// use dispatch_core::test_support::history;
///
/// assert_eq!(history(&[(0, 2), (3, 1)]).len(), 3);
/// ```
#[must_use]
pub fn history(counts: &[(u8, usize)]) -> Vec<EmergencyRecord> {
    counts
        .iter()
        .flat_map(|&(zone, count)| std::iter::repeat_n(EmergencyRecord::new(ZoneId::new(zone)), count))
        .collect()
}

/// Build roster records from `(badge, zone)` pairs.
#[must_use]
pub fn roster(entries: &[(&str, u8)]) -> Vec<OfficerRecord> {
    entries
        .iter()
        .map(|&(badge, zone)| OfficerRecord::new(badge, ZoneId::new(zone)))
        .collect()
}
