use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{AlgorithmArgs, FormatArgs, ListArgs};
use crate::playback::{Pointer, SpeedTier};

#[derive(Parser)]
#[command(
    name = "cycle-stepper",
    about = "🐢 Step through Floyd's and Brent's cycle detection on linked lists",
    long_about = "cycle-stepper builds a singly linked list (optionally ending in a cycle), runs a \
                  two-pointer cycle detection algorithm over it while recording every pointer \
                  position, and lets you replay that trace step by step in the terminal.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record every pointer pair an algorithm visits
    ///
    /// Builds the list, runs the chosen algorithm and prints the recorded
    /// trace: one row per step with the positions of both pointers.
    #[command(
        long_about = "Run a cycle detection algorithm and print its trace. Each step lists the \
                      positions of the slow and fast pointers; a fast pointer that ran off the \
                      end of an acyclic list is shown at the synthetic index past the last node. \
                      When a cycle is found, the report also names the cycle entry and length."
    )]
    Trace {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        algorithm: AlgorithmArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "CYCLE_STEPPER_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Run Floyd and Brent on the same list and compare them
    ///
    /// Both algorithms must agree on whether the list has a cycle; their
    /// trace lengths and meeting points usually differ.
    Compare {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "CYCLE_STEPPER_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Step through a trace interactively
    ///
    /// Enter/Backspace step, f/s follow the fast/slow pointer, a/d/c jump the
    /// camera to the start/end/cycle, r resets, 1/2/3 pick a speed, arrow keys
    /// pan and q quits.
    #[command(
        long_about = "Open an interactive terminal view of the trace. Keys: Enter next step, \
                      Backspace previous step, f follow the fast pointer, s follow the slow \
                      pointer, a jump to the start, d jump to the end, c jump to the cycle, r \
                      restart, 1/2/3 slow/medium/fast speed, arrow keys pan, q or Esc quit. With \
                      --headless the auto-follow sequence is printed as text frames instead."
    )]
    Play {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        algorithm: AlgorithmArgs,

        /// Pan speed and auto-follow delay
        #[arg(
            long,
            value_enum,
            default_value = "medium",
            env = "CYCLE_STEPPER_SPEED"
        )]
        speed: SpeedTier,

        /// Start out following this pointer
        #[arg(long, value_enum, env = "CYCLE_STEPPER_FOLLOW")]
        follow: Option<Pointer>,

        /// Print frames to stdout instead of opening the interactive view
        #[arg(long, env = "CYCLE_STEPPER_HEADLESS")]
        headless: bool,

        /// Disable colored output
        #[arg(long, env = "CYCLE_STEPPER_NO_COLOR")]
        no_color: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
