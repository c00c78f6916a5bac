//! Playback events, modes and the per-frame view model

use std::time::Duration;

use serde::Serialize;

use crate::chain::Layout;
use crate::constants::playback::{FAST, MEDIUM, SLOW};
use crate::core::{Point, PointerLabels};
use crate::error::CycleStepperError;

/// One of the two traversal pointers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Pointer {
    Slow,
    Fast,
}

/// Whether playback is driven by the user or follows a pointer on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowMode {
    #[default]
    Manual,
    AutoFollow(Pointer),
}

impl FollowMode {
    pub fn followed(self) -> Option<Pointer> {
        match self {
            FollowMode::Manual => None,
            FollowMode::AutoFollow(pointer) => Some(pointer),
        }
    }

    pub fn is_following(self) -> bool {
        self.followed().is_some()
    }
}

/// Preset pan speed and auto-follow delay pairs, from slowest to fastest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SpeedTier {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl SpeedTier {
    /// Camera movement per tick while a pan key is held, in pixels
    pub fn pan_speed(self) -> f32 {
        self.preset().0
    }

    /// Wait between auto-follow steps
    pub fn auto_delay(self) -> Duration {
        self.preset().1
    }

    fn preset(self) -> (f32, Duration) {
        match self {
            SpeedTier::Slow => SLOW,
            SpeedTier::Medium => MEDIUM,
            SpeedTier::Fast => FAST,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    pub const ALL: [PanDirection; 4] = [
        PanDirection::Left,
        PanDirection::Right,
        PanDirection::Up,
        PanDirection::Down,
    ];

    /// Camera displacement for one tick at `speed` pixels
    pub fn delta(self, speed: f32) -> Point {
        match self {
            PanDirection::Left => Point::new(-speed, 0.0),
            PanDirection::Right => Point::new(speed, 0.0),
            PanDirection::Up => Point::new(0.0, -speed),
            PanDirection::Down => Point::new(0.0, speed),
        }
    }
}

/// A discrete input to the playback controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    Advance,
    Retreat,
    ToggleFollow(Pointer),
    JumpStart,
    JumpEnd,
    JumpToCycle,
    Reset,
    SetSpeed(SpeedTier),
    /// Level-triggered: feed once per tick for as long as the direction is held
    Pan(PanDirection),
}

/// Everything a renderer needs to know about the current step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewModel {
    /// List position of the slow pointer; `None` only for an empty trace
    pub slow_index: Option<usize>,
    /// List position of the fast pointer; the past-the-end index when it is null
    pub fast_index: Option<usize>,
    pub camera_x: f32,
    pub camera_y: f32,
    pub step_index: usize,
    pub step_count: usize,
    pub is_finished: bool,
    pub follow: FollowMode,
    pub speed: SpeedTier,
}

impl ViewModel {
    pub fn camera(&self) -> Point {
        Point::new(self.camera_x, self.camera_y)
    }
}

/// A view model paired with the static layout it refers to
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub view: ViewModel,
    pub layout: &'a Layout,
    pub labels: PointerLabels,
}

/// Something that can present a frame: a terminal, a text sink, a window
pub trait FrameRenderer {
    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<(), CycleStepperError>;
}
