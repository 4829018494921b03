//! Neutrosophic moment computation.
//!
//! Extends the classical Erlang approximation with an indeterminacy factor
//! `I_N ∈ [0, 1)` representing unquantified variability (disruptions,
//! measurement vagueness). The effective rate becomes `θ_L(1 + I_N)`:
//!
//! ```text
//! μ_N  = k / (θ_L (1 + I_N))
//! σ²_N = k / (θ_L² (1 + I_N)²)
//! ```
//!
//! At `I_N == 0` both moments reduce to the classical values exactly; for
//! `I_N > 0` they are strictly attenuated.
//!
//! # References
//!
//! - Smarandache, F. (1998). *Neutrosophy: Neutrosophic Probability, Set,
//!   and Logic*. American Research Press.
//! - Zeina, M.B. (2020). "Erlang Service Queueing Model with Neutrosophic
//!   Parameters", *International Journal of Neutrosophic Science* 6(2).

use crate::params::{ParameterError, StageParameters};

use super::{round4, Moments, ProcessingModel};

/// Indeterminacy-scaled queueing model.
///
/// Holds the validated indeterminacy factor; the stage work (`k`, `θ_L`) is
/// supplied per call, mirroring [`super::ClassicalModel`].
///
/// # Examples
///
/// ```
/// use u_queueing::moments::NeutrosophicModel;
///
/// let model = NeutrosophicModel::new(0.2).unwrap();
/// let m = model.moments(3, 3.0);
/// assert_eq!(m.mean, 0.8333);     // 3 / (3 · 1.2)
/// assert_eq!(m.variance, 0.2315); // 3 / (9 · 1.44)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutrosophicModel {
    i_n: f64,
}

impl NeutrosophicModel {
    /// Creates a model with the given indeterminacy factor.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Indeterminacy`] if `i_n` is non-finite or
    /// outside `[0, 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_queueing::moments::NeutrosophicModel;
    ///
    /// assert!(NeutrosophicModel::new(0.0).is_ok());
    /// assert!(NeutrosophicModel::new(0.99).is_ok());
    /// assert!(NeutrosophicModel::new(1.0).is_err());
    /// assert!(NeutrosophicModel::new(-0.1).is_err());
    /// ```
    pub fn new(i_n: f64) -> Result<Self, ParameterError> {
        if !i_n.is_finite() || !(0.0..1.0).contains(&i_n) {
            return Err(ParameterError::Indeterminacy(i_n));
        }
        Ok(Self { i_n })
    }

    /// Builds a model from an already-validated parameter set.
    ///
    /// Infallible: [`StageParameters`] guarantees its indeterminacy is in
    /// domain.
    pub fn from_params(params: &StageParameters) -> Self {
        Self {
            i_n: params.indeterminacy(),
        }
    }

    /// The indeterminacy factor `I_N`.
    pub fn indeterminacy(&self) -> f64 {
        self.i_n
    }

    /// Computes `μ_N` and `σ²_N`, rounded to 4 decimal digits.
    ///
    /// The zero-rate guard mirrors the classical model: `θ_L == 0` yields
    /// [`Moments::ZERO`] for any indeterminacy.
    pub fn moments(&self, k: u32, theta_l: f64) -> Moments {
        if theta_l == 0.0 {
            return Moments::ZERO;
        }
        let k = f64::from(k);
        let effective = theta_l * (1.0 + self.i_n);
        Moments {
            mean: round4(k / effective),
            variance: round4(k / (effective * effective)),
        }
    }
}

impl ProcessingModel for NeutrosophicModel {
    fn moments(&self, k: u32, theta_l: f64) -> Moments {
        NeutrosophicModel::moments(self, k, theta_l)
    }
}
