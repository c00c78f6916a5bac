//! # Cycle Stepper - Step Through Linked-List Cycle Detection
//!
//! Cycle Stepper builds a singly linked list whose tail may link back to an
//! earlier node, runs Floyd's or Brent's two-pointer cycle detection over it
//! while recording every pointer position, and replays that recording one
//! step at a time.
//!
//! ## Main Components
//!
//! - **Chain**: arena-backed list construction, node-to-index mapping, the
//!   strip layout and a text renderer
//! - **Detector**: Floyd and Brent as pure functions from a chain to a
//!   [`Trace`](detector::Trace), plus cycle entry/length analysis
//! - **Playback**: the controller that owns the step index, camera, follow
//!   mode and speed, driven by discrete events and a per-frame tick
//! - **Reports**: human-readable and JSON renderings of a trace
//! - **Terminal**: the interactive crossterm front end and a headless printer
//!
//! ## Usage
//!
//! ### Example: Recording and Reporting a Trace
//!
//! ```
//! use cycle_stepper::core::{Algorithm, ListInput};
//! use cycle_stepper::reports::{JsonReportGenerator, ReportGenerator, TraceReport};
//!
//! # fn main() -> miette::Result<()> {
//! // The tail (-4) links back to index 1
//! let input = ListInput::new(vec![3, 2, 0, -4], 1)?;
//!
//! let report = TraceReport::new(&input, Algorithm::Floyd);
//! assert_eq!(report.steps.len(), 3);
//! assert_eq!(report.meeting_index(), Some(2));
//!
//! let json = JsonReportGenerator::new().generate_report(&report)?;
//! assert!(json.contains("\"cycle_found\""));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Driving Playback Without a Terminal
//!
//! ```
//! use std::time::Instant;
//!
//! use cycle_stepper::chain::StripRenderer;
//! use cycle_stepper::core::{Algorithm, ListInput};
//! use cycle_stepper::playback::{PlaybackController, PlaybackEvent, Pointer};
//!
//! # fn main() -> miette::Result<()> {
//! let input = ListInput::new(vec![1, 2, 3, 4, 5], -1)?;
//! let mut controller = PlaybackController::from_input(&input, Algorithm::Brent);
//!
//! // Step manually, then let auto-follow take over from the start
//! controller.apply(PlaybackEvent::Advance);
//! controller.apply(PlaybackEvent::ToggleFollow(Pointer::Fast));
//!
//! let mut now = Instant::now();
//! while controller.state().mode.is_following() {
//!     controller.tick(now);
//!     now += controller.state().speed.auto_delay();
//! }
//! assert!(controller.is_finished());
//!
//! let mut frame = Vec::new();
//! StripRenderer::new(80, 8).render(&controller.frame(), &mut frame)?;
//! assert!(String::from_utf8_lossy(&frame).contains("[None]"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Rejecting a Bad Cycle Index
//!
//! ```
//! use cycle_stepper::core::ListInput;
//! use cycle_stepper::error::CycleStepperError;
//!
//! let err = ListInput::new(vec![1, 2, 3], 3).unwrap_err();
//! assert!(matches!(err, CycleStepperError::InvalidCycleIndex { index: 3, len: 3 }));
//! ```

// Private modules
mod constants;
mod input;
mod utils;

// Public modules
pub mod chain;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod logging;
pub mod playback;
pub mod reports;
pub mod terminal;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    logging::init();

    let cli = Cli::parse();
    execute_command(cli.command)
}
