//! Command implementations for the cycle-stepper CLI
//!
//! - trace: record and report one algorithm's pointer positions
//! - compare: run Floyd and Brent on the same list
//! - play: step through a trace in the terminal

pub mod compare;
pub mod play;
pub mod trace;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Trace { .. } => trace::execute_trace_command(command),
        Commands::Compare { .. } => compare::execute_compare_command(command),
        Commands::Play { .. } => play::execute_play_command(command),
    }
}
