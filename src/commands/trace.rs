//! Trace command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TraceConfig;
use crate::error::CycleStepperError;

impl FromCommand for TraceConfig {
    fn from_command(command: Commands) -> Result<Self, CycleStepperError> {
        match command {
            Commands::Trace {
                list,
                algorithm,
                format,
                output,
            } => TraceConfig::builder()
                .with_list(list.resolve()?)
                .with_algorithm(algorithm.algorithm)
                .with_format(format.format)
                .with_output(output)
                .build(),
            _ => Err(CycleStepperError::ConfigurationError {
                message: "Invalid command type for TraceConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TraceConfig);

/// Execute the trace command
pub fn execute_trace_command(command: Commands) -> Result<()> {
    let config =
        TraceConfig::from_command(command).wrap_err("Failed to parse trace command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::trace::TraceExecutor;
    TraceExecutor::execute(config)
}
