use dispatch_core::ZoneId;
use thiserror::Error;

/// Errors returned by [`crate::DispatchEngine::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The incident location was empty or whitespace.
    #[error("incident location must not be blank")]
    EmptyLocation,
    /// Every reachable zone is fully deployed, or no zone was reachable.
    ///
    /// `excluded_zones` lists zones skipped because their distance could not
    /// be determined; an officer may still be free there.
    #[error("no officers available (zones without a distance: {excluded_zones:?})")]
    NoOfficersAvailable {
        /// Zones excluded from ranking by distance failures.
        excluded_zones: Vec<ZoneId>,
    },
}
