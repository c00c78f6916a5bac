//! Play command configuration

use crate::common::missing_field;
use crate::core::{Algorithm, ListInput};
use crate::playback::{Pointer, SpeedTier};

#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub list: ListInput,
    pub algorithm: Algorithm,
    pub speed: SpeedTier,
    /// Pointer to follow from the first frame, if any
    pub follow: Option<Pointer>,
    /// Print frames instead of taking over the terminal
    pub headless: bool,
    pub colored: bool,
}

impl PlayConfig {
    pub fn builder() -> PlayConfigBuilder {
        PlayConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct PlayConfigBuilder {
    list: Option<ListInput>,
    algorithm: Option<Algorithm>,
    speed: Option<SpeedTier>,
    follow: Option<Pointer>,
    headless: bool,
    colored: Option<bool>,
}

impl PlayConfigBuilder {
    pub fn with_list(mut self, list: ListInput) -> Self {
        self.list = Some(list);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn with_speed(mut self, speed: SpeedTier) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_follow(mut self, follow: Option<Pointer>) -> Self {
        self.follow = follow;
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = Some(colored);
        self
    }
}

impl crate::common::ConfigBuilder for PlayConfigBuilder {
    type Config = PlayConfig;

    fn build(self) -> Result<Self::Config, crate::error::CycleStepperError> {
        Ok(PlayConfig {
            list: self.list.ok_or_else(|| missing_field("list"))?,
            algorithm: self.algorithm.ok_or_else(|| missing_field("algorithm"))?,
            speed: self.speed.unwrap_or_default(),
            follow: self.follow,
            headless: self.headless,
            colored: self.colored.unwrap_or(true),
        })
    }
}
