use thiserror::Error;

/// Errors from [`crate::distance::DistanceProvider::distance`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// The provider knows no route between the two locations.
    #[error("no route from '{origin}' to '{destination}'")]
    NoRoute {
        /// Origin label.
        origin: String,
        /// Destination label.
        destination: String,
    },
    /// The lookup did not finish within the provider's time limit.
    #[error("distance lookup from '{origin}' to '{destination}' timed out after {timeout_secs}s")]
    Timeout {
        /// Origin label.
        origin: String,
        /// Destination label.
        destination: String,
        /// Time limit that elapsed.
        timeout_secs: u64,
    },
    /// The routing service reported a failure.
    #[error("distance service error: {message}")]
    Service {
        /// Message reported by the service.
        message: String,
    },
    /// The provider returned a negative or non-finite distance.
    #[error("invalid distance {meters} from '{origin}' to '{destination}'")]
    InvalidDistance {
        /// Origin label.
        origin: String,
        /// Destination label.
        destination: String,
        /// Offending value in metres.
        meters: f64,
    },
}
