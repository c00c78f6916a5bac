//! Play command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::PlayConfig;
use crate::error::CycleStepperError;

impl FromCommand for PlayConfig {
    fn from_command(command: Commands) -> Result<Self, CycleStepperError> {
        match command {
            Commands::Play {
                list,
                algorithm,
                speed,
                follow,
                headless,
                no_color,
            } => PlayConfig::builder()
                .with_list(list.resolve()?)
                .with_algorithm(algorithm.algorithm)
                .with_speed(speed)
                .with_follow(follow)
                .with_headless(headless)
                .with_colored(!no_color)
                .build(),
            _ => Err(CycleStepperError::ConfigurationError {
                message: "Invalid command type for PlayConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(PlayConfig);

/// Execute the play command
pub fn execute_play_command(command: Commands) -> Result<()> {
    let config =
        PlayConfig::from_command(command).wrap_err("Failed to parse play command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::play::PlayExecutor;
    PlayExecutor::execute(config)
}
