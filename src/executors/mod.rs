//! Command executors that handle the actual logic for each command

pub mod compare;
pub mod play;
pub mod trace;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Write a finished report to `output`, or to stdout when none is given
fn write_report(report: &str, output: Option<&Path>) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(output_path) = output {
        Box::new(BufWriter::new(
            File::create(output_path)
                .into_diagnostic()
                .wrap_err_with(|| {
                    format!("Failed to create output file '{}'", output_path.display())
                })?,
        ))
    } else {
        Box::new(io::stdout())
    };

    writeln!(writer, "{report}")
        .and_then(|()| writer.flush())
        .into_diagnostic()
        .wrap_err("Failed to write report")?;

    if let Some(output_path) = output {
        eprintln!(
            "{} Report written to {}",
            style("✓").green(),
            style(output_path.display()).bold()
        );
    }

    Ok(())
}
