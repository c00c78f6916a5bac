//! Compare command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::config::CompareConfig;
use crate::executors::{CommandExecutor, write_report};
use crate::reports::{CompareReport, HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct CompareExecutor;

impl CommandExecutor for CompareExecutor {
    type Config = CompareConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Comparing floyd and brent over {} nodes...",
            style("⚖").cyan(),
            config.list.len()
        );

        let report = CompareReport::new(&config.list);
        if report.agree {
            info!(
                floyd_steps = report.floyd.steps.len(),
                brent_steps = report.brent.steps.len(),
                "algorithms agree"
            );
        } else {
            warn!(values = ?config.list.values(), "algorithms disagree on cycle presence");
        }

        let rendered = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_comparison(&report),
            OutputFormat::Json => JsonReportGenerator::new().generate_comparison(&report),
        }
        .into_diagnostic()
        .wrap_err("Failed to generate comparison report")?;

        write_report(&rendered, config.output.as_deref())
    }
}
