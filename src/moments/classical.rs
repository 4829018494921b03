//! Classical fixed-rate moment computation.
//!
//! Models a stage's processing time as the sum of `k` independent
//! exponential service phases at a deterministic rate `θ_L` — an Erlang
//! distribution with mean `k/θ_L` and variance `k/θ_L²`.
//!
//! # Reference
//!
//! Kleinrock, L. (1975). *Queueing Systems, Volume 1: Theory*, §2.4. Wiley.

use super::{round4, Moments, ProcessingModel};

/// Deterministic-rate queueing approximation.
///
/// Stateless; the rate is supplied per call rather than held by the model.
///
/// # Examples
///
/// ```
/// use u_queueing::moments::ClassicalModel;
///
/// let m = ClassicalModel.moments(3, 3.0);
/// assert_eq!(m.mean, 1.0);
/// assert_eq!(m.variance, 0.3333);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicalModel;

impl ClassicalModel {
    /// Computes `μ = k/θ_L` and `σ² = k/θ_L²`, rounded to 4 decimal digits.
    ///
    /// A zero rate yields [`Moments::ZERO`]: the stage is treated as unable
    /// to process rather than as a division error. Negative or non-finite
    /// rates are outside the contract; constrain inputs through
    /// [`crate::params::StageParameters`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_queueing::moments::{ClassicalModel, Moments};
    ///
    /// assert_eq!(ClassicalModel.moments(2, 1.0).mean, 2.0);
    /// assert_eq!(ClassicalModel.moments(4, 0.0), Moments::ZERO);
    /// ```
    pub fn moments(&self, k: u32, theta_l: f64) -> Moments {
        if theta_l == 0.0 {
            return Moments::ZERO;
        }
        let k = f64::from(k);
        Moments {
            mean: round4(k / theta_l),
            variance: round4(k / (theta_l * theta_l)),
        }
    }
}

impl ProcessingModel for ClassicalModel {
    fn moments(&self, k: u32, theta_l: f64) -> Moments {
        ClassicalModel::moments(self, k, theta_l)
    }
}
