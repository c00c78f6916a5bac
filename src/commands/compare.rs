//! Compare command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CompareConfig;
use crate::error::CycleStepperError;

impl FromCommand for CompareConfig {
    fn from_command(command: Commands) -> Result<Self, CycleStepperError> {
        match command {
            Commands::Compare {
                list,
                format,
                output,
            } => CompareConfig::builder()
                .with_list(list.resolve()?)
                .with_format(format.format)
                .with_output(output)
                .build(),
            _ => Err(CycleStepperError::ConfigurationError {
                message: "Invalid command type for CompareConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CompareConfig);

/// Execute the compare command
pub fn execute_compare_command(command: Commands) -> Result<()> {
    let config = CompareConfig::from_command(command)
        .wrap_err("Failed to parse compare command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::compare::CompareExecutor;
    CompareExecutor::execute(config)
}
