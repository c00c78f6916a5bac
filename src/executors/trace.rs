//! Trace command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use crate::cli::OutputFormat;
use crate::config::TraceConfig;
use crate::executors::{CommandExecutor, write_report};
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator, TraceReport};

pub struct TraceExecutor;

impl CommandExecutor for TraceExecutor {
    type Config = TraceConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Tracing {} over {} {}...",
            style("🐢").cyan(),
            style(config.algorithm).bold(),
            config.list.len(),
            crate::utils::string::pluralize("node", config.list.len())
        );

        let report = TraceReport::new(&config.list, config.algorithm);
        info!(
            algorithm = %config.algorithm,
            steps = report.steps.len(),
            has_cycle = report.has_cycle(),
            "trace complete"
        );

        let rendered = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&report),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&report),
        }
        .into_diagnostic()
        .wrap_err("Failed to generate report")?;

        write_report(&rendered, config.output.as_deref())
    }
}
