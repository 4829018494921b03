//! Validated stage parameters.
//!
//! A pipeline stage is described by three scalars: the number of subtasks
//! `k`, the processing rate `θ_L`, and the indeterminacy factor `I_N`.
//! [`StageParameters`] validates all three at construction so that the moment
//! functions in [`crate::moments`] operate on an already-constrained domain
//! and never fail.
//!
//! # Parameter domains
//!
//! | Parameter | Domain | Meaning |
//! |-----------|--------|---------|
//! | `k` | `>= 1` | Subtasks a stage must complete |
//! | `θ_L` | `>= 0`, finite | Subtasks completed per second |
//! | `I_N` | `[0, 1)`, finite | Fraction of unquantified disruption |
//!
//! A zero rate is a valid input meaning "stage cannot process" (both models
//! report zero moments for it), not an error. `I_N` values approaching 1
//! drive the effective rate toward zero; `I_N == 1` itself is rejected.

use thiserror::Error;

/// Rejected out-of-domain parameter.
///
/// Each variant carries the offending value for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    /// `k` must be at least 1: a stage with no subtasks has no processing
    /// time to model.
    #[error("subtask count must be at least 1, got {0}")]
    SubtaskCount(u32),

    /// `θ_L` must be finite and non-negative.
    #[error("processing rate must be finite and non-negative, got {0}")]
    ProcessingRate(f64),

    /// `I_N` must be finite and in `[0, 1)`.
    #[error("indeterminacy must be finite and in [0, 1), got {0}")]
    Indeterminacy(f64),
}

/// Immutable, validated parameter set for one evaluation.
///
/// Constructed fresh per computation request; carries no hidden state and
/// does not outlive a single evaluation.
///
/// # Examples
///
/// ```
/// use u_queueing::params::StageParameters;
///
/// let params = StageParameters::new(3, 3.0, 0.2).unwrap();
/// assert_eq!(params.subtasks(), 3);
///
/// // Error: indeterminacy of 1 would zero out the effective rate bound
/// assert!(StageParameters::new(3, 3.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageParameters {
    k: u32,
    theta_l: f64,
    i_n: f64,
}

impl StageParameters {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if:
    /// - `k == 0`
    /// - `theta_l` is negative or non-finite
    /// - `i_n` is outside `[0, 1)` or non-finite
    ///
    /// # Examples
    ///
    /// ```
    /// use u_queueing::params::{ParameterError, StageParameters};
    ///
    /// assert!(StageParameters::new(2, 1.0, 0.0).is_ok());
    /// assert!(StageParameters::new(2, 0.0, 0.0).is_ok()); // zero rate is valid
    ///
    /// assert_eq!(
    ///     StageParameters::new(0, 1.0, 0.0),
    ///     Err(ParameterError::SubtaskCount(0))
    /// );
    /// assert_eq!(
    ///     StageParameters::new(2, -1.0, 0.0),
    ///     Err(ParameterError::ProcessingRate(-1.0))
    /// );
    /// assert_eq!(
    ///     StageParameters::new(2, 1.0, -0.1),
    ///     Err(ParameterError::Indeterminacy(-0.1))
    /// );
    /// ```
    pub fn new(k: u32, theta_l: f64, i_n: f64) -> Result<Self, ParameterError> {
        if k == 0 {
            return Err(ParameterError::SubtaskCount(k));
        }
        if !theta_l.is_finite() || theta_l < 0.0 {
            return Err(ParameterError::ProcessingRate(theta_l));
        }
        if !i_n.is_finite() || !(0.0..1.0).contains(&i_n) {
            return Err(ParameterError::Indeterminacy(i_n));
        }
        Ok(Self { k, theta_l, i_n })
    }

    /// Number of subtasks `k` the stage must complete.
    pub fn subtasks(&self) -> u32 {
        self.k
    }

    /// Processing rate `θ_L` in subtasks per second.
    pub fn rate(&self) -> f64 {
        self.theta_l
    }

    /// Indeterminacy factor `I_N`.
    pub fn indeterminacy(&self) -> f64 {
        self.i_n
    }
}
