//! Relaxation solver configuration.

use num_traits::Float;

/// Configuration for the Gauss-Seidel relaxation used by the 2D filler.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use gridfill_core::fill::RelaxationConfig;
///
/// // Use default configuration
/// let config: RelaxationConfig<f64> = RelaxationConfig::default();
/// assert!(config.tolerance <= 1e-5);
/// assert!(config.max_iterations >= 50);
///
/// // Custom configuration
/// let custom = RelaxationConfig {
///     tolerance: 1e-8,
///     max_iterations: 400,
///     over_relaxation: 1.2,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxationConfig<T: Float> {
    /// Convergence tolerance.
    ///
    /// A sweep converges when the root-mean-square of the relative cell
    /// updates falls below this value.
    pub tolerance: T,

    /// Iteration budget for one relaxation attempt.
    ///
    /// If the sweep has not converged within this budget, the filler
    /// escalates the budget internally and keeps iterating; the caller
    /// never sees a non-convergence failure.
    pub max_iterations: usize,

    /// Successive over-relaxation factor, in the open interval (0, 2).
    ///
    /// `1.0` is plain Gauss-Seidel; values above `1.0` accelerate
    /// convergence on smooth problems.
    pub over_relaxation: T,
}

impl<T: Float> Default for RelaxationConfig<T> {
    /// Create a default configuration with sensible values.
    ///
    /// Default values:
    /// - `tolerance`: 1e-5
    /// - `max_iterations`: 100
    /// - `over_relaxation`: 1.0
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-5).unwrap(),
            max_iterations: 100,
            over_relaxation: T::one(),
        }
    }
}

impl<T: Float> RelaxationConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `max_iterations` - Iteration budget (must be > 0)
    /// * `over_relaxation` - SOR factor (must be in (0, 2))
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0`, `max_iterations == 0`, or
    /// `over_relaxation` is outside `(0, 2)`.
    ///
    /// # Example
    ///
    /// ```
    /// use gridfill_core::fill::RelaxationConfig;
    ///
    /// let config = RelaxationConfig::new(1e-8, 400, 1.2);
    /// assert_eq!(config.max_iterations, 400);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize, over_relaxation: T) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        assert!(
            over_relaxation > T::zero() && over_relaxation < T::from(2.0).unwrap(),
            "over_relaxation must be in (0, 2)"
        );
        Self {
            tolerance,
            max_iterations,
            over_relaxation,
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses tighter tolerance (1e-9) and a larger budget (1000) for
    /// cases requiring more than display precision.
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-9).unwrap(),
            max_iterations: 1000,
            over_relaxation: T::one(),
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Uses relaxed tolerance (1e-3) and a small budget (50) for cases
    /// where speed matters more than precision.
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-3).unwrap(),
            max_iterations: 50,
            over_relaxation: T::one(),
        }
    }
}
