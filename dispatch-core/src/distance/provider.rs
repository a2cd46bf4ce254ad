//! Distance provider trait and result validation.

use super::error::DistanceError;

/// Look up the travel distance between two location labels.
///
/// Implementations return the distance in metres. Any failure, including a
/// timeout inside the implementation, is reported as an error; callers must
/// not substitute a default distance.
///
/// # Examples
///
/// ```rust
/// use dispatch_core::distance::{DistanceError, DistanceProvider};
///
/// struct Crow;
///
/// impl DistanceProvider for Crow {
///     fn distance(&self, origin: &str, destination: &str) -> Result<f64, DistanceError> {
///         if origin == destination {
///             return Ok(0.0);
///         }
///         Err(DistanceError::NoRoute {
///             origin: origin.to_owned(),
///             destination: destination.to_owned(),
///         })
///     }
/// }
///
/// assert_eq!(Crow.distance("Ell Hall", "Ell Hall"), Ok(0.0));
/// assert!(Crow.distance("Ell Hall", "Snell Library").is_err());
/// ```
pub trait DistanceProvider {
    /// Return the distance in metres from `origin` to `destination`.
    ///
    /// # Errors
    /// Returns [`DistanceError`] when no usable distance is available.
    fn distance(&self, origin: &str, destination: &str) -> Result<f64, DistanceError>;
}

impl<P> DistanceProvider for &P
where
    P: DistanceProvider + ?Sized,
{
    fn distance(&self, origin: &str, destination: &str) -> Result<f64, DistanceError> {
        (**self).distance(origin, destination)
    }
}

impl<P> DistanceProvider for Box<P>
where
    P: DistanceProvider + ?Sized,
{
    fn distance(&self, origin: &str, destination: &str) -> Result<f64, DistanceError> {
        (**self).distance(origin, destination)
    }
}

/// Query `provider` and reject negative or non-finite distances.
///
/// # Errors
/// Propagates provider errors and returns
/// [`DistanceError::InvalidDistance`] for unusable values.
pub fn checked_distance<P>(provider: &P, origin: &str, destination: &str) -> Result<f64, DistanceError>
where
    P: DistanceProvider + ?Sized,
{
    let meters = provider.distance(origin, destination)?;
    if meters.is_finite() && meters >= 0.0 {
        Ok(meters)
    } else {
        Err(DistanceError::InvalidDistance {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            meters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Constant(f64);

    impl DistanceProvider for Constant {
        fn distance(&self, _origin: &str, _destination: &str) -> Result<f64, DistanceError> {
            Ok(self.0)
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(250.5)]
    fn valid_distances_pass_through(#[case] meters: f64) {
        assert_eq!(checked_distance(&Constant(meters), "A", "B"), Ok(meters));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn unusable_distances_are_rejected(#[case] meters: f64) {
        let err = checked_distance(&Constant(meters), "A", "B").expect_err("invalid distance");
        assert!(matches!(err, DistanceError::InvalidDistance { .. }));
    }

    #[rstest]
    fn references_and_boxes_delegate_to_the_provider() {
        let provider = Constant(42.0);
        let by_ref: &dyn DistanceProvider = &provider;
        assert_eq!(by_ref.distance("A", "B"), Ok(42.0));
        let boxed: Box<dyn DistanceProvider> = Box::new(Constant(7.0));
        assert_eq!(boxed.distance("A", "B"), Ok(7.0));
    }
}
