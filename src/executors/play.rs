//! Play command executor

use std::io;

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use crate::config::PlayConfig;
use crate::executors::CommandExecutor;
use crate::playback::{PlaybackController, PlaybackEvent};
use crate::terminal::{HeadlessRenderer, TerminalFrontend};

pub struct PlayExecutor;

impl CommandExecutor for PlayExecutor {
    type Config = PlayConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut controller =
            PlaybackController::from_input(&config.list, config.algorithm).with_speed(config.speed);
        if let Some(pointer) = config.follow {
            controller.apply(PlaybackEvent::ToggleFollow(pointer));
        }

        info!(
            algorithm = %config.algorithm,
            steps = controller.trace().len(),
            headless = config.headless,
            "starting playback"
        );

        if config.headless {
            let stdout = io::stdout();
            let mut renderer = HeadlessRenderer::new(stdout.lock()).with_color(config.colored);
            renderer
                .play(&mut controller)
                .into_diagnostic()
                .wrap_err("Failed to render headless playback")
        } else {
            TerminalFrontend::new(config.colored)
                .run(&mut controller)
                .into_diagnostic()
                .wrap_err("Interactive playback failed")
        }
    }
}
