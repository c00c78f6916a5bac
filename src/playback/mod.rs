//! # Playback Module
//!
//! A [`PlaybackController`] owns the step index into a recorded trace, the
//! camera position, the auto-follow mode and the speed tier. It is driven by
//! discrete [`PlaybackEvent`]s and by [`PlaybackController::tick`], which runs
//! once per frame and advances the trace while a follow mode is active.
//!
//! Auto-follow never sleeps: the controller stores the earliest instant the
//! next step may run and compares it against the clock passed to `tick`, so
//! pan and reset input stay responsive while a delay is pending.
//!
//! ## Example
//!
//! ```
//! use std::time::Instant;
//!
//! use cycle_stepper::core::{Algorithm, ListInput};
//! use cycle_stepper::playback::{PlaybackController, PlaybackEvent, Pointer};
//!
//! let input = ListInput::new(vec![3, 2, 0, -4], 1).unwrap();
//! let mut controller = PlaybackController::from_input(&input, Algorithm::Floyd);
//!
//! controller.apply(PlaybackEvent::Advance);
//! assert_eq!(controller.view().step_index, 1);
//!
//! // The first auto-follow step runs on the very next tick
//! controller.apply(PlaybackEvent::ToggleFollow(Pointer::Fast));
//! controller.tick(Instant::now());
//! assert_eq!(controller.view().step_index, 2);
//! assert!(controller.view().is_finished);
//! ```

mod controller;
mod types;

pub use controller::{PlaybackController, PlaybackState};
pub use types::{
    FollowMode, Frame, FrameRenderer, PanDirection, PlaybackEvent, Pointer, SpeedTier, ViewModel,
};
