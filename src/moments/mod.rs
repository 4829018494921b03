//! Processing-time moment computation.
//!
//! Two models of a stage's processing time, both pure and deterministic:
//!
//! - [`ClassicalModel`] — fixed-rate Erlang approximation,
//!   `μ = k/θ_L`, `σ² = k/θ_L²`
//! - [`NeutrosophicModel`] — effective rate scaled by `(1 + I_N)`,
//!   `μ_N = k/(θ_L(1+I_N))`, `σ²_N = k/(θ_L²(1+I_N)²)`
//!
//! Both implement [`ProcessingModel`], the seam the comparison builder works
//! through. At `I_N == 0` the neutrosophic model collapses onto the classical
//! one exactly; for `I_N > 0` it attenuates both moments, since the scaled
//! rate sits in the denominator.
//!
//! # Rounding policy
//!
//! Every reported moment is rounded to 4 decimal digits with [`round4`]
//! (round half away from zero, via [`f64::round`]) so tabulated values from
//! the two models compare exactly.
//!
//! # References
//!
//! - Zeina, M.B. (2020). "Erlang Service Queueing Model with Neutrosophic
//!   Parameters", *International Journal of Neutrosophic Science* 6(2).
//! - Kleinrock, L. (1975). *Queueing Systems, Volume 1: Theory*. Wiley.

mod classical;
mod neutrosophic;

pub use classical::ClassicalModel;
pub use neutrosophic::NeutrosophicModel;

/// Mean and variance of a stage's processing time, in seconds and seconds².
///
/// Immutable value type produced by either model for one stage. Both fields
/// are rounded to 4 decimal digits (see [`round4`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moments {
    /// Expected processing time `μ`.
    pub mean: f64,
    /// Processing-time variance `σ²`.
    pub variance: f64,
}

impl Moments {
    /// The moments of a stage that cannot process (`θ_L == 0`).
    pub const ZERO: Moments = Moments {
        mean: 0.0,
        variance: 0.0,
    };
}

/// A model mapping stage work (`k`, `θ_L`) to processing-time moments.
///
/// Implementors are pure: no side effects, no shared state, and total over
/// the constrained input domain (`k >= 1`, `θ_L >= 0` finite). Callers are
/// responsible for excluding out-of-domain scalars, normally by going through
/// [`crate::params::StageParameters`].
pub trait ProcessingModel {
    /// Computes the processing-time moments for `k` subtasks at rate `theta_l`.
    ///
    /// A zero rate yields [`Moments::ZERO`] rather than a division error: a
    /// stage with no throughput is treated as "cannot process", not as an
    /// invalid input.
    fn moments(&self, k: u32, theta_l: f64) -> Moments;
}

/// Rounds to 4 decimal digits, half away from zero.
///
/// This is the fixed output precision of every reported moment. Half-away
/// (the [`f64::round`] rule) was chosen over banker's rounding; exact
/// half-way cases do not arise for the rational inputs this crate handles,
/// so the two rules agree on all tabulated values.
///
/// # Examples
///
/// ```
/// use u_queueing::moments::round4;
///
/// assert_eq!(round4(0.833333), 0.8333);
/// assert_eq!(round4(0.23148148), 0.2315);
/// assert_eq!(round4(2.0), 2.0);
/// ```
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round4_truncates_below_half() {
        assert!((round4(1.234_54) - 1.2345).abs() < 1e-12);
    }

    #[test]
    fn round4_rounds_up_above_half() {
        assert!((round4(1.234_56) - 1.2346).abs() < 1e-12);
    }

    #[test]
    fn round4_is_identity_on_rounded_values() {
        for &v in &[0.0, 0.8333, 1.0, 2.0, 0.2315] {
            assert_eq!(round4(v), v);
        }
    }

    #[test]
    fn zero_moments_constant() {
        assert_eq!(Moments::ZERO.mean, 0.0);
        assert_eq!(Moments::ZERO.variance, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn moments_serialize_round_trip() {
        let m = Moments {
            mean: 0.8333,
            variance: 0.2315,
        };
        let json = serde_json::to_string(&m).unwrap();
        let back: Moments = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
