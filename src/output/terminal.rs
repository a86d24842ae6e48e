//! Terminal output formatting with colors and aligned columns.

use colored::Colorize;

use crate::result::{AccuracyReport, TimingReport};

const ALGORITHM_WIDTH: usize = 20;

/// Format a [`TimingReport`] for human-readable terminal output.
///
/// One row per algorithm with its computed variance and wall-clock
/// statistics; the fastest row is highlighted.
pub fn format_timing(report: &TimingReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(78);

    output.push_str("variance-lab\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Dataset: {}\n", report.dataset));
    output.push_str(&format!("  Samples: {}\n", report.samples));
    output.push_str(&format!("  Runs:    {} per algorithm\n", report.runs));
    output.push('\n');

    output.push_str(&format!(
        "  {:<width$} {:>22} {:>10} {:>10} {:>10}\n",
        "algorithm",
        "variance",
        "mean ms",
        "min ms",
        "max ms",
        width = ALGORITHM_WIDTH
    ));

    let fastest = report.fastest().map(|entry| entry.algorithm);
    for entry in &report.entries {
        let row = format!(
            "  {:<width$} {:>22.15e} {:>10.3} {:>10.3} {:>10.3}",
            entry.algorithm.name(),
            entry.value,
            entry.timing.mean_ms(),
            entry.timing.min_ns as f64 / 1.0e6,
            entry.timing.max_ns as f64 / 1.0e6,
            width = ALGORITHM_WIDTH
        );
        if Some(entry.algorithm) == fastest {
            output.push_str(&format!("{}\n", row.green().bold()));
        } else {
            output.push_str(&row);
            output.push('\n');
        }
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');
    output.push_str("Note: Identical variance columns do not imply identical accuracy; compare\nagainst the exact reference with an accuracy report.\n");

    output
}

/// Format an [`AccuracyReport`] for human-readable terminal output.
///
/// One row per algorithm with its deviation from the exact rational
/// reference, colored by how many digits survived.
pub fn format_accuracy(report: &AccuracyReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(78);

    output.push_str("variance-lab \u{00b7} accuracy\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Dataset:   {}\n", report.dataset));
    output.push_str(&format!("  Samples:   {}\n", report.samples));
    output.push_str(&format!("  Reference: {:.15e} (exact, correctly rounded)\n", report.reference));
    output.push('\n');

    output.push_str(&format!(
        "  {:<width$} {:>22} {:>12} {:>12}\n",
        "algorithm",
        "variance",
        "abs error",
        "rel error",
        width = ALGORITHM_WIDTH
    ));

    for row in &report.rows {
        let line = format!(
            "  {:<width$} {:>22.15e} {:>12.3e} {:>12.3e}",
            row.algorithm.name(),
            row.value,
            row.abs_error,
            row.rel_error,
            width = ALGORITHM_WIDTH
        );
        output.push_str(&format_by_error(&line, row.rel_error));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');
    output.push_str("Note: Relative error is measured against arbitrary-precision rational\narithmetic; the reference itself is exact.\n");

    output
}

/// Color a finished row by its relative error.
///
/// The padding must already be applied; coloring afterwards keeps the
/// escape codes outside the width calculation.
fn format_by_error(row: &str, rel_error: f64) -> String {
    if rel_error < 1.0e-12 {
        row.green().to_string()
    } else if rel_error < 1.0e-7 {
        row.to_string()
    } else {
        row.yellow().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{AccuracyRow, AlgorithmTiming, Timing};
    use crate::{Dataset, VarianceAlgorithm};

    fn make_timing_report() -> TimingReport {
        let entry = |algorithm, mean_ns: f64| AlgorithmTiming {
            algorithm,
            value: 833.25,
            timing: Timing {
                runs: 10,
                mean_ns,
                min_ns: mean_ns as u64 - 100,
                max_ns: mean_ns as u64 + 100,
            },
        };
        TimingReport {
            dataset: Dataset::LargeOffset,
            samples: 1 << 20,
            runs: 10,
            entries: vec![
                entry(VarianceAlgorithm::Naive, 1_200_000.0),
                entry(VarianceAlgorithm::TwoPass, 2_500_000.0),
            ],
        }
    }

    fn make_accuracy_report() -> AccuracyReport {
        let row = |algorithm, abs_error: f64| AccuracyRow {
            algorithm,
            value: 833.25 + abs_error,
            abs_error,
            rel_error: abs_error / 833.25,
        };
        AccuracyReport {
            dataset: Dataset::LargeOffset,
            samples: 1 << 20,
            reference: 833.25,
            rows: vec![
                row(VarianceAlgorithm::Naive, 0.125),
                row(VarianceAlgorithm::TwoPass, 1.0e-10),
            ],
        }
    }

    #[test]
    fn test_timing_report_lists_every_algorithm() {
        let output = format_timing(&make_timing_report());
        assert!(output.contains("variance-lab"));
        assert!(output.contains("Dataset: large_offset"));
        assert!(output.contains("naive"));
        assert!(output.contains("twopass"));
        assert!(output.contains("Runs:    10 per algorithm"));
    }

    #[test]
    fn test_accuracy_report_shows_reference_and_errors() {
        let output = format_accuracy(&make_accuracy_report());
        assert!(output.contains("accuracy"));
        assert!(output.contains("Reference"));
        assert!(output.contains("naive"));
        assert!(output.contains("1.250e-1"));
    }

    #[test]
    fn test_rows_align_regardless_of_color() {
        // Colors wrap the padded row, so stripped rows must share one
        // column layout.
        let output = format_timing(&make_timing_report());
        let columns: Vec<usize> = output
            .lines()
            .filter(|line| line.contains("naive") || line.contains("twopass"))
            .map(|line| strip_ansi(line).find("8.3325").unwrap_or(usize::MAX))
            .collect();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0], columns[1]);
    }

    fn strip_ansi(line: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in line.chars() {
            match c {
                '\u{1b}' => in_escape = true,
                'm' if in_escape => in_escape = false,
                c if !in_escape => out.push(c),
                _ => {}
            }
        }
        out
    }
}
