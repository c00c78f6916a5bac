//! Common functionality shared across commands

use clap::Args;

use crate::constants::input::NO_CYCLE;
use crate::core::{Algorithm, ListInput};
use crate::error::CycleStepperError;
use crate::input::{random_list_with_seed, sample_list};

/// Where the list under test comes from
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Values of the linked list, in order
    #[arg(
        value_name = "VALUE",
        allow_negative_numbers = true,
        conflicts_with_all = ["sample", "random"]
    )]
    pub values: Vec<i64>,

    /// Index the last node links back to (-1 for no cycle)
    #[arg(
        short,
        long,
        default_value_t = NO_CYCLE,
        allow_negative_numbers = true,
        env = "CYCLE_STEPPER_CYCLE"
    )]
    pub cycle: i64,

    /// Use the sample list [3, 2, 0, -4] with a cycle at index 1
    #[arg(long, conflicts_with = "random")]
    pub sample: bool,

    /// Generate a random list with a random cycle index
    #[arg(long)]
    pub random: bool,

    /// Seed for --random
    #[arg(long, requires = "random", env = "CYCLE_STEPPER_SEED")]
    pub seed: Option<u64>,
}

impl ListArgs {
    /// Turn the arguments into a validated list.
    ///
    /// `--sample` and `--random` carry their own cycle index, so `--cycle`
    /// only applies to explicit values.
    pub fn resolve(&self) -> Result<ListInput, CycleStepperError> {
        if self.sample {
            sample_list()
        } else if self.random {
            random_list_with_seed(self.seed)
        } else {
            ListInput::new(self.values.clone(), self.cycle)
        }
    }
}

/// Algorithm selection
#[derive(Args, Debug, Clone)]
pub struct AlgorithmArgs {
    /// Cycle detection algorithm to trace
    #[arg(
        short,
        long,
        value_enum,
        default_value = "floyd",
        env = "CYCLE_STEPPER_ALGORITHM"
    )]
    pub algorithm: Algorithm,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "CYCLE_STEPPER_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, CycleStepperError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, CycleStepperError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::CycleStepperError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(name: &str) -> CycleStepperError {
    CycleStepperError::ConfigurationError {
        message: format!("Missing required field: {name}"),
    }
}
