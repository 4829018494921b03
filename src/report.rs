//! Text rendering of a stage comparison.
//!
//! [`ComparisonReport`] derives the two presentation artifacts from an
//! ordered row sequence:
//!
//! - an aligned table (`Stage, Classical Mean, Neutrosophic Mean,
//!   Classical Variance, Neutrosophic Variance`) via [`fmt::Display`]
//! - a grouped horizontal bar chart of the two means per stage via
//!   [`ComparisonReport::bar_chart`]
//!
//! Rendering is pure string assembly; the report never recomputes moments.

use std::fmt;

use crate::comparison::StageComparisonRow;

const HEADERS: [&str; 5] = [
    "Stage",
    "Classical Mean",
    "Neutrosophic Mean",
    "Classical Variance",
    "Neutrosophic Variance",
];

/// A renderable stage comparison.
///
/// # Examples
///
/// ```
/// use u_queueing::comparison::compare_pipeline;
/// use u_queueing::params::StageParameters;
/// use u_queueing::report::ComparisonReport;
///
/// let params = StageParameters::new(3, 3.0, 0.2).unwrap();
/// let report = ComparisonReport::new(compare_pipeline(&params));
///
/// let table = report.to_string();
/// assert!(table.contains("Receiving"));
/// assert!(table.contains("0.8333"));
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    rows: Vec<StageComparisonRow>,
}

impl ComparisonReport {
    /// Wraps an ordered row sequence for rendering.
    pub fn new(rows: Vec<StageComparisonRow>) -> Self {
        Self { rows }
    }

    /// The underlying rows, in display order.
    pub fn rows(&self) -> &[StageComparisonRow] {
        &self.rows
    }

    /// Renders a grouped horizontal bar chart of the two means per stage.
    ///
    /// Each stage gets two adjacent bars, classical above neutrosophic,
    /// scaled so the largest mean spans `width` cells. Stages with zero
    /// means render empty bars.
    ///
    /// ```text
    /// Receiving  classical    |######## 1.0000
    ///            neutrosophic |###### 0.8333
    /// ```
    pub fn bar_chart(&self, width: usize) -> String {
        let max_mean = self
            .rows
            .iter()
            .flat_map(|r| [r.classical.mean, r.neutrosophic.mean])
            .fold(0.0_f64, f64::max);

        let label_width = self
            .rows
            .iter()
            .map(|r| r.stage.len())
            .max()
            .unwrap_or(0);

        let bar = |mean: f64| -> String {
            if max_mean <= 0.0 {
                return String::new();
            }
            let cells = ((mean / max_mean) * width as f64).round() as usize;
            "█".repeat(cells)
        };

        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&format!(
                "{:<label_width$} classical    |{} {:.4}\n",
                row.stage,
                bar(row.classical.mean),
                row.classical.mean,
            ));
            out.push_str(&format!(
                "{:<label_width$} neutrosophic |{} {:.4}\n",
                "",
                bar(row.neutrosophic.mean),
                row.neutrosophic.mean,
            ));
        }
        out
    }
}

impl fmt::Display for ComparisonReport {
    /// Renders the aligned comparison table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .rows
            .iter()
            .map(|r| r.stage.len())
            .chain([HEADERS[0].len()])
            .max()
            .unwrap_or(0);

        writeln!(
            f,
            "{:<label_width$}  {:>14}  {:>17}  {:>18}  {:>21}",
            HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4],
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<label_width$}  {:>14.4}  {:>17.4}  {:>18.4}  {:>21.4}",
                row.stage,
                row.classical.mean,
                row.neutrosophic.mean,
                row.classical.variance,
                row.neutrosophic.variance,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{compare_pipeline, compare_stages};
    use crate::params::StageParameters;

    fn report() -> ComparisonReport {
        let params = StageParameters::new(3, 3.0, 0.2).unwrap();
        ComparisonReport::new(compare_pipeline(&params))
    }

    // -----------------------------------------------------------------------
    // Table
    // -----------------------------------------------------------------------

    #[test]
    fn table_contains_all_stages_and_headers() {
        let table = report().to_string();
        for name in ["Receiving", "Sorting", "Processing", "Shipping"] {
            assert!(table.contains(name), "missing stage {name}");
        }
        for header in HEADERS {
            assert!(table.contains(header), "missing header {header}");
        }
    }

    #[test]
    fn table_contains_rounded_values() {
        let table = report().to_string();
        assert!(table.contains("1.0000"));
        assert!(table.contains("0.8333"));
        assert!(table.contains("0.3333"));
        assert!(table.contains("0.2315"));
    }

    #[test]
    fn table_has_header_plus_one_line_per_row() {
        let table = report().to_string();
        assert_eq!(table.lines().count(), 5);
    }

    #[test]
    fn empty_report_renders_header_only() {
        let report = ComparisonReport::new(Vec::new());
        let table = report.to_string();
        assert_eq!(table.lines().count(), 1);
        assert!(table.contains("Stage"));
    }

    // -----------------------------------------------------------------------
    // Bar chart
    // -----------------------------------------------------------------------

    #[test]
    fn chart_has_two_bars_per_stage() {
        let chart = report().bar_chart(30);
        assert_eq!(chart.lines().count(), 8);
        assert_eq!(chart.matches("classical").count(), 4);
        assert_eq!(chart.matches("neutrosophic").count(), 4);
    }

    #[test]
    fn classical_bar_is_longer_under_positive_indeterminacy() {
        let chart = report().bar_chart(30);
        let lines: Vec<&str> = chart.lines().collect();
        let blocks = |line: &str| line.matches('█').count();
        assert!(blocks(lines[0]) > blocks(lines[1]));
    }

    #[test]
    fn largest_mean_spans_requested_width() {
        let chart = report().bar_chart(30);
        let first = chart.lines().next().unwrap();
        assert_eq!(first.matches('█').count(), 30);
    }

    #[test]
    fn zero_rate_renders_empty_bars() {
        let params = StageParameters::new(3, 0.0, 0.2).unwrap();
        let report = ComparisonReport::new(compare_stages(&["A"], &params));
        let chart = report.bar_chart(30);
        assert!(!chart.contains('█'));
        assert!(chart.contains("0.0000"));
    }

    #[test]
    fn equal_means_give_equal_bars_at_zero_indeterminacy() {
        let params = StageParameters::new(2, 1.0, 0.0).unwrap();
        let report = ComparisonReport::new(compare_stages(&["A"], &params));
        let chart = report.bar_chart(20);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(
            lines[0].matches('█').count(),
            lines[1].matches('█').count()
        );
    }
}
