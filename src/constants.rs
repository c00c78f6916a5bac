//! Configuration constants for cycle-stepper
//!
//! This module contains the tunables used throughout the application, grouped
//! by concern. Values that users commonly want to change are also exposed as
//! command-line options and environment variables.

use std::time::Duration;

/// Geometry of the rendered node strip, in logical pixels
pub mod layout {
    /// Radius of a rendered node
    pub const NODE_RADIUS: f32 = 30.0;

    /// Distance between adjacent node centres: one diameter plus a one-radius gap
    pub const PITCH: f32 = 3.0 * NODE_RADIUS;

    /// Offset between a focused anchor and the camera origin
    pub const CAMERA_LEAD_X: f32 = 2.0 * PITCH;
    pub const CAMERA_LEAD_Y: f32 = PITCH;

    /// Label drawn for the synthetic slot past the end of an acyclic list
    pub const NULL_LABEL: &str = "None";
}

/// Playback timing and speed tiers
pub mod playback {
    use super::*;

    /// Target frame rate of the interactive loop
    pub const TICKS_PER_SECOND: u32 = 45;

    /// Duration of one frame at the target rate
    pub const TICK_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64);

    /// How long an arrow key counts as held after its last press or repeat
    pub const PAN_HOLD: Duration = Duration::from_millis(150);

    /// (pan pixels per tick, auto-follow delay) per speed tier
    pub const SLOW: (f32, Duration) = (4.0, Duration::from_millis(2250));
    pub const MEDIUM: (f32, Duration) = (6.0, Duration::from_millis(750));
    pub const FAST: (f32, Duration) = (8.0, Duration::from_millis(250));
}

/// Built-in list sources
pub mod input {
    /// The sample list shown when `--sample` is passed
    pub const SAMPLE_VALUES: &[i64] = &[3, 2, 0, -4];

    /// Cycle index of the sample list
    pub const SAMPLE_CYCLE: i64 = 1;

    /// Sentinel cycle index meaning "no cycle"
    pub const NO_CYCLE: i64 = -1;

    /// Bounds for `--random`
    pub const RANDOM_MAX_LEN: usize = 20;
    pub const RANDOM_MAX_VALUE: i64 = 100;
}

/// Text canvas geometry used by the strip renderer
pub mod canvas {
    /// Logical pixels covered by one character column
    pub const PX_PER_COLUMN: f32 = 10.0;

    /// Logical pixels covered by one character row
    pub const PX_PER_ROW: f32 = 30.0;

    /// Canvas size used when the terminal size is unknown
    pub const DEFAULT_WIDTH: u16 = 80;
    pub const DEFAULT_HEIGHT: u16 = 12;
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}
