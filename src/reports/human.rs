//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{CompareReport, ReportGenerator, ReportOutcome, TraceReport};
use crate::constants::layout::NULL_LABEL;
use crate::error::CycleStepperError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }

    fn write_trace(&self, output: &mut String, report: &TraceReport) -> Result<(), CycleStepperError> {
        writeln!(
            output,
            "\n{} {} trace of {}\n",
            style("🐢").cyan(),
            style(report.algorithm).bold(),
            describe_list(&report.values, report.cycle_index)
        )?;

        if report.steps.is_empty() {
            writeln!(
                output,
                "{} The list is empty, so no steps were recorded.",
                style("ℹ").blue()
            )?;
            return Ok(());
        }

        let rows: Vec<(usize, String, String)> = report
            .steps
            .iter()
            .map(|step| {
                (
                    step.step,
                    cell(report, step.slow_index),
                    cell(report, step.fast_index),
                )
            })
            .collect();

        let slow_width = rows
            .iter()
            .map(|(_, slow, _)| slow.chars().count())
            .chain([report.labels.slow.len()])
            .max()
            .unwrap_or_default();

        writeln!(
            output,
            "  {:>4}  {:<slow_width$}  {}",
            style("step").dim(),
            style(report.labels.slow).red().bold(),
            style(report.labels.fast).green().bold(),
        )?;
        for (step, slow, fast) in &rows {
            writeln!(output, "  {step:>4}  {slow:<slow_width$}  {fast}")?;
        }
        writeln!(output)?;

        let step_count = report.steps.len();
        match report.outcome {
            ReportOutcome::CycleFound {
                meeting_index,
                entry_index,
                cycle_length,
            } => {
                writeln!(
                    output,
                    "{} Cycle found after {} {}: the pointers met at {}",
                    style("🔄").yellow(),
                    style(step_count).yellow().bold(),
                    pluralize("step", step_count),
                    style(cell(report, Some(meeting_index))).bold()
                )?;
                writeln!(
                    output,
                    "  {} Cycle entry: {}",
                    style("→").dim(),
                    style(cell(report, Some(entry_index))).bold()
                )?;
                writeln!(
                    output,
                    "  {} Cycle length: {} {}",
                    style("→").dim(),
                    style(cycle_length).bold(),
                    pluralize("node", cycle_length)
                )?;
            }
            ReportOutcome::NoCycle => {
                writeln!(
                    output,
                    "{} No cycle: the {} pointer ran off the end after {} {}",
                    style("✅").green().bold(),
                    report.labels.fast,
                    style(step_count).green().bold(),
                    pluralize("step", step_count)
                )?;
            }
            ReportOutcome::Empty => {}
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &TraceReport) -> Result<String, CycleStepperError> {
        let mut output = String::new();
        self.write_trace(&mut output, report)?;
        Ok(output)
    }

    fn generate_comparison(&self, report: &CompareReport) -> Result<String, CycleStepperError> {
        let mut output = String::new();

        for trace in report.reports() {
            self.write_trace(&mut output, trace)?;
        }

        writeln!(output)?;
        for trace in report.reports() {
            let verdict = match trace.meeting_index() {
                Some(index) => format!("met at {}", cell(trace, Some(index))),
                None => "no meeting".to_string(),
            };
            writeln!(
                output,
                "  {} {:<6} {:>3} {}, {}",
                style("•").dim(),
                trace.algorithm,
                trace.steps.len(),
                pluralize("step", trace.steps.len()),
                verdict
            )?;
        }

        if report.agree {
            writeln!(
                output,
                "\n{} Both algorithms agree on whether the list has a cycle.",
                style("✓").green()
            )?;
        } else {
            writeln!(
                output,
                "\n{} The algorithms disagree on whether the list has a cycle.",
                style("❌").red().bold()
            )?;
        }

        Ok(output)
    }
}

fn describe_list(values: &[i64], cycle_index: Option<usize>) -> String {
    if values.is_empty() {
        return "an empty list".to_string();
    }

    let items = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    match cycle_index {
        Some(index) => format!("[{items}] (tail → index {index})"),
        None => format!("[{items}] (no cycle)"),
    }
}

/// `index (value)`, or the null label for the slot past the end
fn cell(report: &TraceReport, index: Option<usize>) -> String {
    match index {
        Some(index) => match report.value_at(index) {
            Some(value) => format!("{index} ({value})"),
            None => NULL_LABEL.to_string(),
        },
        None => "?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Algorithm, ListInput};

    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).into_owned()
    }

    #[test]
    fn test_human_report_with_cycle() {
        let input = ListInput::new(vec![3, 2, 0, -4], 1).unwrap();
        let report = TraceReport::new(&input, Algorithm::Floyd);

        let output = plain(&HumanReportGenerator::new().generate_report(&report).unwrap());

        assert!(output.contains("floyd trace of [3, 2, 0, -4] (tail → index 1)"));
        assert!(output.contains("     2  2 (0)  2 (0)"));
        assert!(output.contains("Cycle found after 3 steps: the pointers met at 2 (0)"));
        assert!(output.contains("Cycle entry: 1 (2)"));
        assert!(output.contains("Cycle length: 3 nodes"));
    }

    #[test]
    fn test_human_report_without_cycle() {
        let input = ListInput::new(vec![1, 2, 3], -1).unwrap();
        let report = TraceReport::new(&input, Algorithm::Brent);

        let output = plain(&HumanReportGenerator::new().generate_report(&report).unwrap());

        assert!(output.contains("tortoise"));
        assert!(output.contains("None"));
        assert!(output.contains("No cycle: the hare pointer ran off the end after 3 steps"));
    }

    #[test]
    fn test_human_report_empty_list() {
        let input = ListInput::new(Vec::new(), -1).unwrap();
        let report = TraceReport::new(&input, Algorithm::Floyd);

        let output = plain(&HumanReportGenerator::new().generate_report(&report).unwrap());

        assert!(output.contains("an empty list"));
        assert!(output.contains("no steps were recorded"));
    }

    #[test]
    fn test_human_comparison() {
        let input = ListInput::new(vec![3, 2, 0, -4], 1).unwrap();
        let report = CompareReport::new(&input);

        let output = plain(
            &HumanReportGenerator::new()
                .generate_comparison(&report)
                .unwrap(),
        );

        assert!(output.contains("floyd    3 steps, met at 2 (0)"));
        assert!(output.contains("brent    6 steps, met at 3 (-4)"));
        assert!(output.contains("Both algorithms agree"));
    }
}
