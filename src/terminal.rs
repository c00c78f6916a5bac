//! Terminal front ends for the playback controller
//!
//! [`TerminalFrontend`] takes over the terminal (raw mode, alternate screen),
//! translates key presses into [`PlaybackEvent`]s and redraws the strip at a
//! fixed tick rate. [`HeadlessRenderer`] drives auto-follow with a synthetic
//! clock and prints every frame, for pipes and CI logs.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use tracing::{debug, error};

use crate::chain::StripRenderer;
use crate::constants::playback::{PAN_HOLD, TICK_INTERVAL};
use crate::error::CycleStepperError;
use crate::playback::{
    Frame, FrameRenderer, PanDirection, PlaybackController, PlaybackEvent, Pointer, SpeedTier,
};

const KEY_HELP: &str = "enter/backspace step  f/s follow  a/d/c jump  r reset  1-3 speed  \
                        arrows pan  q quit";

/// What a key press means to the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Playback(PlaybackEvent),
    /// An arrow key; pans for as long as it stays held
    Hold(PanDirection),
    Quit,
    Ignore,
}

/// Translate a key press into a front-end action
pub fn map_key(key: &KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _)
        | (KeyCode::Char('q'), _)
        | (KeyCode::Char('Q'), _)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Enter, _) => KeyAction::Playback(PlaybackEvent::Advance),
        (KeyCode::Backspace, _) => KeyAction::Playback(PlaybackEvent::Retreat),
        (KeyCode::Char('f'), _) => KeyAction::Playback(PlaybackEvent::ToggleFollow(Pointer::Fast)),
        (KeyCode::Char('s'), _) => KeyAction::Playback(PlaybackEvent::ToggleFollow(Pointer::Slow)),
        (KeyCode::Char('a'), _) => KeyAction::Playback(PlaybackEvent::JumpStart),
        (KeyCode::Char('d'), _) => KeyAction::Playback(PlaybackEvent::JumpEnd),
        (KeyCode::Char('c'), _) => KeyAction::Playback(PlaybackEvent::JumpToCycle),
        (KeyCode::Char('r'), _) => KeyAction::Playback(PlaybackEvent::Reset),
        (KeyCode::Char('1'), _) => KeyAction::Playback(PlaybackEvent::SetSpeed(SpeedTier::Slow)),
        (KeyCode::Char('2'), _) => KeyAction::Playback(PlaybackEvent::SetSpeed(SpeedTier::Medium)),
        (KeyCode::Char('3'), _) => KeyAction::Playback(PlaybackEvent::SetSpeed(SpeedTier::Fast)),
        (KeyCode::Left, _) => KeyAction::Hold(PanDirection::Left),
        (KeyCode::Right, _) => KeyAction::Hold(PanDirection::Right),
        (KeyCode::Up, _) => KeyAction::Hold(PanDirection::Up),
        (KeyCode::Down, _) => KeyAction::Hold(PanDirection::Down),
        _ => KeyAction::Ignore,
    }
}

/// Arrow keys currently considered held.
///
/// Most terminals only report presses and auto-repeats, so a direction stays
/// held until `window` passes without another event for it, or until an
/// explicit release arrives.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    window: Duration,
    last_seen: HashMap<PanDirection, Instant>,
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new(PAN_HOLD)
    }
}

impl HeldKeys {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_seen: HashMap::new(),
        }
    }

    pub fn press(&mut self, direction: PanDirection, now: Instant) {
        self.last_seen.insert(direction, now);
    }

    pub fn release(&mut self, direction: PanDirection) {
        self.last_seen.remove(&direction);
    }

    /// Directions held at `now`, in a stable order; expired entries are dropped
    pub fn active(&mut self, now: Instant) -> Vec<PanDirection> {
        let window = self.window;
        self.last_seen
            .retain(|_, seen| now.saturating_duration_since(*seen) < window);

        PanDirection::ALL
            .into_iter()
            .filter(|direction| self.last_seen.contains_key(direction))
            .collect()
    }
}

/// Interactive crossterm front end
pub struct TerminalFrontend {
    out: io::Stdout,
    colored: bool,
}

impl TerminalFrontend {
    pub fn new(colored: bool) -> Self {
        Self {
            out: io::stdout(),
            colored,
        }
    }

    /// Take over the terminal and run until the user quits.
    ///
    /// The terminal is restored even when the loop fails.
    pub fn run(&mut self, controller: &mut PlaybackController) -> Result<(), CycleStepperError> {
        enable_raw_mode().map_err(CycleStepperError::terminal("enable raw mode"))?;
        if let Err(err) = execute!(self.out, EnterAlternateScreen, Hide) {
            if let Err(err) = disable_raw_mode() {
                error!(?err, "failed to disable raw mode");
            }
            return Err(CycleStepperError::terminal("enter the alternate screen")(err));
        }

        let result = self.event_loop(controller);

        if let Err(err) = execute!(self.out, Show, LeaveAlternateScreen) {
            error!(?err, "failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }

        result
    }

    fn event_loop(&mut self, controller: &mut PlaybackController) -> Result<(), CycleStepperError> {
        let mut held = HeldKeys::default();
        let mut dirty = true;

        loop {
            let now = Instant::now();
            for direction in held.active(now) {
                dirty |= controller.apply(PlaybackEvent::Pan(direction));
            }
            dirty |= controller.tick(now);

            if dirty {
                self.draw_frame(&controller.frame())?;
                dirty = false;
            }

            let deadline = now + TICK_INTERVAL;
            while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
                if !event::poll(timeout).map_err(CycleStepperError::terminal("poll for input"))? {
                    break;
                }

                match event::read().map_err(CycleStepperError::terminal("read input"))? {
                    Event::Key(key) => match (key.kind, map_key(&key)) {
                        (KeyEventKind::Release, KeyAction::Hold(direction)) => {
                            held.release(direction)
                        }
                        (KeyEventKind::Release, _) => {}
                        (_, KeyAction::Quit) => {
                            debug!("quit requested");
                            return Ok(());
                        }
                        (_, KeyAction::Hold(direction)) => held.press(direction, Instant::now()),
                        (KeyEventKind::Press, KeyAction::Playback(event)) => {
                            dirty |= controller.apply(event);
                        }
                        _ => {}
                    },
                    Event::Resize(..) => dirty = true,
                    _ => {}
                }
            }
        }
    }
}

impl FrameRenderer for TerminalFrontend {
    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<(), CycleStepperError> {
        let (width, height) =
            terminal::size().map_err(CycleStepperError::terminal("query the terminal size"))?;
        let lines = StripRenderer::new(width, height)
            .with_color(self.colored)
            .render_lines(frame);

        for (row, line) in lines.iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(
                self.out,
                MoveTo(0, row),
                Print(line),
                Clear(ClearType::UntilNewLine)
            )
            .map_err(CycleStepperError::terminal("draw a frame"))?;
        }
        queue!(self.out, MoveTo(0, 0), Print(KEY_HELP))
            .map_err(CycleStepperError::terminal("draw a frame"))?;

        self.out
            .flush()
            .map_err(CycleStepperError::terminal("flush a frame"))
    }
}

/// Prints successive frames as plain text
pub struct HeadlessRenderer<W: Write> {
    out: W,
    renderer: StripRenderer,
    colored: bool,
    frames: usize,
}

impl<W: Write> HeadlessRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            renderer: StripRenderer::default(),
            colored: false,
            frames: 0,
        }
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self.renderer = self.renderer.with_color(colored);
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.renderer = StripRenderer::new(width, height).with_color(self.colored);
        self
    }

    /// Number of frames written so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Play the auto-follow sequence to the end, writing every frame.
    ///
    /// Follows the fast pointer unless a follow mode is already active. The
    /// clock is synthetic: each tick lands exactly on the next due time, so
    /// nothing sleeps.
    pub fn play(&mut self, controller: &mut PlaybackController) -> Result<(), CycleStepperError> {
        if !controller.state().mode.is_following() {
            controller.apply(PlaybackEvent::ToggleFollow(Pointer::Fast));
        }

        self.draw_frame(&controller.frame())?;

        let mut now = Instant::now();
        while controller.state().mode.is_following() {
            if controller.tick(now) {
                self.draw_frame(&controller.frame())?;
            }
            now += controller.state().speed.auto_delay();
        }

        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> FrameRenderer for HeadlessRenderer<W> {
    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<(), CycleStepperError> {
        self.frames += 1;
        writeln!(self.out, "── frame {} ──", self.frames)?;
        self.renderer.render(frame, &mut self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Algorithm, ListInput};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_bindings() {
        let none = KeyModifiers::NONE;

        assert_eq!(
            map_key(&key(KeyCode::Enter, none)),
            KeyAction::Playback(PlaybackEvent::Advance)
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('f'), none)),
            KeyAction::Playback(PlaybackEvent::ToggleFollow(Pointer::Fast))
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('c'), none)),
            KeyAction::Playback(PlaybackEvent::JumpToCycle)
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('3'), none)),
            KeyAction::Playback(PlaybackEvent::SetSpeed(SpeedTier::Fast))
        );
        assert_eq!(
            map_key(&key(KeyCode::Up, none)),
            KeyAction::Hold(PanDirection::Up)
        );
        assert_eq!(map_key(&key(KeyCode::Char('x'), none)), KeyAction::Ignore);
    }

    #[test]
    fn test_held_keys_expire() {
        let start = Instant::now();
        let mut held = HeldKeys::new(Duration::from_millis(100));

        held.press(PanDirection::Right, start);
        held.press(PanDirection::Up, start + Duration::from_millis(50));

        assert_eq!(
            held.active(start + Duration::from_millis(80)),
            vec![PanDirection::Right, PanDirection::Up]
        );
        assert_eq!(
            held.active(start + Duration::from_millis(120)),
            vec![PanDirection::Up]
        );

        held.release(PanDirection::Up);
        assert!(held.active(start + Duration::from_millis(120)).is_empty());
    }

    #[test]
    fn test_headless_plays_to_the_end() {
        let input = ListInput::new(vec![3, 2, 0, -4], 1).unwrap();
        let mut controller = PlaybackController::from_input(&input, Algorithm::Floyd);
        let mut renderer = HeadlessRenderer::new(Vec::new()).with_size(60, 8);

        renderer.play(&mut controller).unwrap();

        // Initial frame, two advances, then the frame that drops follow mode
        assert_eq!(renderer.frames(), 4);
        assert!(controller.is_finished());
        assert!(!controller.state().mode.is_following());

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("── frame 1 ──"));
        assert!(text.contains("step 3/3  follow: off  speed: medium  [done]"));
    }

    #[test]
    fn test_headless_empty_list_draws_once() {
        let input = ListInput::new(Vec::new(), -1).unwrap();
        let mut controller = PlaybackController::from_input(&input, Algorithm::Brent);
        let mut renderer = HeadlessRenderer::new(Vec::new()).with_size(40, 6);

        renderer.play(&mut controller).unwrap();

        assert_eq!(renderer.frames(), 1);
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("empty list: nothing to trace"));
    }
}
