//! # Configuration Module
//!
//! One configuration struct per command, each assembled through a builder
//! whose [`ConfigBuilder::build`](crate::common::ConfigBuilder::build) checks
//! that every required field was set.
//!
//! - **TraceConfig**: list, algorithm and report destination for `trace`
//! - **CompareConfig**: list and report destination for `compare`
//! - **PlayConfig**: list, algorithm and playback options for `play`
//!
//! ## Example
//!
//! ```
//! use cycle_stepper::cli::OutputFormat;
//! use cycle_stepper::common::ConfigBuilder;
//! use cycle_stepper::config::TraceConfig;
//! use cycle_stepper::core::{Algorithm, ListInput};
//!
//! let config = TraceConfig::builder()
//!     .with_list(ListInput::new(vec![3, 2, 0, -4], 1).unwrap())
//!     .with_algorithm(Algorithm::Brent)
//!     .with_format(OutputFormat::Json)
//!     .with_output(None)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.algorithm, Algorithm::Brent);
//! ```

pub mod compare;
pub mod play;
pub mod trace;

pub use compare::CompareConfig;
pub use play::PlayConfig;
pub use trace::TraceConfig;
