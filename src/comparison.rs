//! Per-stage model comparison.
//!
//! Evaluates both processing models over an ordered sequence of pipeline
//! stages and pairs the results with each stage label. The four fixed
//! pipeline stages are enumerated by [`Stage`]; arbitrary labels are also
//! accepted for ad-hoc comparisons.
//!
//! Every row is computed independently from immutable inputs — no state is
//! shared between rows, so output order always matches label order.
//!
//! The uniform path ([`compare_stages`], [`compare_pipeline`]) applies one
//! parameter set to every stage. [`StageComparison`] is the extension point
//! for differentiated stages: it carries default parameters plus per-stage
//! overrides.

use std::fmt;

use crate::moments::{ClassicalModel, Moments, NeutrosophicModel};
use crate::params::StageParameters;

/// One of the four fixed pipeline phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Goods arrive and are checked in.
    Receiving,
    /// Items are routed to their handling lanes.
    Sorting,
    /// Items are picked, packed, or otherwise worked.
    Processing,
    /// Finished items leave the facility.
    Shipping,
}

impl Stage {
    /// The fixed pipeline order: Receiving, Sorting, Processing, Shipping.
    pub const PIPELINE: [Stage; 4] = [
        Stage::Receiving,
        Stage::Sorting,
        Stage::Processing,
        Stage::Shipping,
    ];

    /// Stage name as displayed in tables and charts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Receiving => "Receiving",
            Stage::Sorting => "Sorting",
            Stage::Processing => "Processing",
            Stage::Shipping => "Shipping",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Stage {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Both models' moments for one stage.
///
/// Rows are addressable by label and keep the order they were built in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageComparisonRow {
    /// Stage label.
    pub stage: String,
    /// Moments under the classical model.
    pub classical: Moments,
    /// Moments under the neutrosophic model.
    pub neutrosophic: Moments,
}

fn evaluate(label: &str, params: &StageParameters) -> StageComparisonRow {
    let classical = ClassicalModel.moments(params.subtasks(), params.rate());
    let neutrosophic =
        NeutrosophicModel::from_params(params).moments(params.subtasks(), params.rate());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        stage = label,
        classical_mean = classical.mean,
        neutrosophic_mean = neutrosophic.mean,
        "evaluated stage"
    );

    StageComparisonRow {
        stage: label.to_owned(),
        classical,
        neutrosophic,
    }
}

/// Evaluates both models once per label, with one shared parameter set.
///
/// Returns one row per label, in input order.
///
/// # Examples
///
/// ```
/// use u_queueing::comparison::compare_stages;
/// use u_queueing::params::StageParameters;
///
/// let params = StageParameters::new(3, 3.0, 0.2).unwrap();
/// let rows = compare_stages(&["A", "B"], &params);
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].stage, "A");
/// assert_eq!(rows[1].stage, "B");
/// assert_eq!(rows[0].classical, rows[1].classical);
/// ```
pub fn compare_stages<L: AsRef<str>>(
    labels: &[L],
    params: &StageParameters,
) -> Vec<StageComparisonRow> {
    labels
        .iter()
        .map(|label| evaluate(label.as_ref(), params))
        .collect()
}

/// Evaluates both models over the four fixed pipeline stages.
///
/// Equivalent to [`compare_stages`] with [`Stage::PIPELINE`].
///
/// # Examples
///
/// ```
/// use u_queueing::comparison::compare_pipeline;
/// use u_queueing::params::StageParameters;
///
/// let params = StageParameters::new(3, 3.0, 0.2).unwrap();
/// let rows = compare_pipeline(&params);
///
/// assert_eq!(rows.len(), 4);
/// assert_eq!(rows[0].stage, "Receiving");
/// assert_eq!(rows[3].stage, "Shipping");
/// ```
pub fn compare_pipeline(params: &StageParameters) -> Vec<StageComparisonRow> {
    compare_stages(&Stage::PIPELINE, params)
}

/// Comparison builder with per-stage parameter overrides.
///
/// Carries a default parameter set; stages added with [`stage`](Self::stage)
/// use it, while [`stage_with`](Self::stage_with) differentiates a stage with
/// its own parameters.
///
/// # Examples
///
/// ```
/// use u_queueing::comparison::StageComparison;
/// use u_queueing::params::StageParameters;
///
/// let defaults = StageParameters::new(3, 3.0, 0.2).unwrap();
/// let slow_dock = StageParameters::new(3, 1.0, 0.2).unwrap();
///
/// let rows = StageComparison::new(defaults)
///     .stage("Receiving")
///     .stage_with("Sorting", slow_dock)
///     .build();
///
/// assert_eq!(rows.len(), 2);
/// assert!(rows[1].classical.mean > rows[0].classical.mean);
/// ```
#[derive(Debug, Clone)]
pub struct StageComparison {
    defaults: StageParameters,
    stages: Vec<(String, Option<StageParameters>)>,
}

impl StageComparison {
    /// Creates a builder with the given default parameters and no stages.
    pub fn new(defaults: StageParameters) -> Self {
        Self {
            defaults,
            stages: Vec::new(),
        }
    }

    /// Appends a stage using the default parameters.
    pub fn stage(mut self, label: impl Into<String>) -> Self {
        self.stages.push((label.into(), None));
        self
    }

    /// Appends a stage with its own parameter set.
    pub fn stage_with(mut self, label: impl Into<String>, params: StageParameters) -> Self {
        self.stages.push((label.into(), Some(params)));
        self
    }

    /// Appends the four fixed pipeline stages, all on the defaults.
    pub fn pipeline(mut self) -> Self {
        for stage in Stage::PIPELINE {
            self.stages.push((stage.as_str().to_owned(), None));
        }
        self
    }

    /// Evaluates every stage in insertion order.
    pub fn build(self) -> Vec<StageComparisonRow> {
        self.stages
            .iter()
            .map(|(label, params)| evaluate(label, params.as_ref().unwrap_or(&self.defaults)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> StageParameters {
        StageParameters::new(3, 3.0, 0.2).unwrap()
    }

    // -----------------------------------------------------------------------
    // Uniform comparison
    // -----------------------------------------------------------------------

    #[test]
    fn rows_match_label_order_and_count() {
        let rows = compare_stages(&["A", "B"], &params());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].stage, "A");
        assert_eq!(rows[1].stage, "B");
    }

    #[test]
    fn shared_parameters_give_identical_rows() {
        let rows = compare_pipeline(&params());
        for row in &rows[1..] {
            assert_eq!(row.classical, rows[0].classical);
            assert_eq!(row.neutrosophic, rows[0].neutrosophic);
        }
    }

    #[test]
    fn pipeline_order_is_fixed() {
        let rows = compare_pipeline(&params());
        let labels: Vec<&str> = rows.iter().map(|r| r.stage.as_str()).collect();
        assert_eq!(labels, ["Receiving", "Sorting", "Processing", "Shipping"]);
    }

    #[test]
    fn empty_label_sequence_gives_no_rows() {
        let rows = compare_stages::<&str>(&[], &params());
        assert!(rows.is_empty());
    }

    #[test]
    fn rows_carry_expected_moments() {
        let rows = compare_pipeline(&params());
        assert_eq!(rows[0].classical.mean, 1.0);
        assert_eq!(rows[0].classical.variance, 0.3333);
        assert_eq!(rows[0].neutrosophic.mean, 0.8333);
        assert_eq!(rows[0].neutrosophic.variance, 0.2315);
    }

    // -----------------------------------------------------------------------
    // Stage enum
    // -----------------------------------------------------------------------

    #[test]
    fn stage_display_matches_as_str() {
        for stage in Stage::PIPELINE {
            assert_eq!(stage.to_string(), stage.as_str());
        }
    }

    // -----------------------------------------------------------------------
    // Per-stage overrides
    // -----------------------------------------------------------------------

    #[test]
    fn builder_defaults_match_uniform_path() {
        let built = StageComparison::new(params()).pipeline().build();
        let uniform = compare_pipeline(&params());
        assert_eq!(built, uniform);
    }

    #[test]
    fn builder_override_differentiates_one_stage() {
        let slow = StageParameters::new(3, 1.0, 0.2).unwrap();
        let rows = StageComparison::new(params())
            .stage("Receiving")
            .stage_with("Sorting", slow)
            .stage("Processing")
            .build();

        assert_eq!(rows[0].classical, rows[2].classical);
        assert_eq!(rows[1].classical.mean, 3.0);
        assert!(rows[1].classical.mean > rows[0].classical.mean);
    }

    #[test]
    fn builder_preserves_insertion_order() {
        let rows = StageComparison::new(params())
            .stage("Z")
            .stage("A")
            .build();
        assert_eq!(rows[0].stage, "Z");
        assert_eq!(rows[1].stage, "A");
    }
}
