use std::time::Instant;

use tracing::debug;

use super::types::{
    FollowMode, Frame, PanDirection, PlaybackEvent, Pointer, SpeedTier, ViewModel,
};
use crate::chain::{Chain, IndexTable, Layout};
use crate::core::{Algorithm, ListInput, Point, PointerLabels};
use crate::detector::Trace;

/// Mutable playback state, owned exclusively by the controller
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub step: usize,
    pub camera: Point,
    pub mode: FollowMode,
    pub speed: SpeedTier,
    /// Earliest time the next auto-follow step may run; `None` runs it on the
    /// next tick
    pub next_advance_at: Option<Instant>,
}

impl PlaybackState {
    fn initial(speed: SpeedTier) -> Self {
        Self {
            step: 0,
            camera: Layout::start_camera(),
            mode: FollowMode::Manual,
            speed,
            next_advance_at: None,
        }
    }
}

/// Steps through a recorded trace and moves the camera over the layout
///
/// Inputs whose preconditions do not hold are ignored. An empty trace yields
/// a controller that never advances and always reports itself finished.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    trace: Trace,
    table: IndexTable,
    layout: Layout,
    labels: PointerLabels,
    state: PlaybackState,
}

impl PlaybackController {
    pub fn new(trace: Trace, table: IndexTable, layout: Layout) -> Self {
        let labels = trace.algorithm().pointer_labels();
        Self {
            trace,
            table,
            layout,
            labels,
            state: PlaybackState::initial(SpeedTier::default()),
        }
    }

    /// Build the chain, trace and layout for `input` and wrap them
    pub fn from_input(input: &ListInput, algorithm: Algorithm) -> Self {
        let chain = Chain::from(input);
        let trace = algorithm.trace(&chain);
        Self::new(trace, chain.index_table(), Layout::from(input))
    }

    pub fn with_speed(mut self, speed: SpeedTier) -> Self {
        self.state.speed = speed;
        self
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn last_step(&self) -> Option<usize> {
        self.trace.len().checked_sub(1)
    }

    pub fn is_finished(&self) -> bool {
        self.last_step().is_none_or(|last| self.state.step >= last)
    }

    /// Process one input event. Returns whether the state changed.
    pub fn apply(&mut self, event: PlaybackEvent) -> bool {
        let before = self.state.clone();

        match event {
            PlaybackEvent::Advance => self.advance(),
            PlaybackEvent::Retreat => self.retreat(),
            PlaybackEvent::ToggleFollow(pointer) => self.toggle_follow(pointer),
            PlaybackEvent::JumpStart => self.state.camera = Layout::start_camera(),
            PlaybackEvent::JumpEnd => self.jump_to_index(self.layout.last_node_index()),
            PlaybackEvent::JumpToCycle => self.jump_to_index(self.layout.cycle_target()),
            PlaybackEvent::Reset => self.reset(),
            PlaybackEvent::SetSpeed(speed) => self.state.speed = speed,
            PlaybackEvent::Pan(direction) => self.pan(direction),
        }

        let changed = self.state != before;
        if changed && !matches!(event, PlaybackEvent::Pan(_)) {
            debug!(?event, step = self.state.step, mode = ?self.state.mode, "playback event applied");
        }
        changed
    }

    /// Run the auto-follow schedule for the frame at `now`. Returns whether
    /// the state changed.
    ///
    /// The camera recentres on the followed pointer at the step just
    /// advanced to, not the one being left.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pointer) = self.state.mode.followed() else {
            return false;
        };

        if self.state.next_advance_at.is_some_and(|due| now < due) {
            return false;
        }

        if self.is_finished() {
            debug!(step = self.state.step, "auto-follow reached the end of the trace");
            self.state.mode = FollowMode::Manual;
            self.state.next_advance_at = None;
            return true;
        }

        self.state.step += 1;
        if let Some(anchor) = self
            .pointer_index(pointer)
            .and_then(|index| self.layout.anchor(index))
        {
            self.state.camera = Layout::camera_focus(anchor);
        }
        self.state.next_advance_at = Some(now + self.state.speed.auto_delay());
        true
    }

    pub fn view(&self) -> ViewModel {
        ViewModel {
            slow_index: self.pointer_index(Pointer::Slow),
            fast_index: self.pointer_index(Pointer::Fast),
            camera_x: self.state.camera.x,
            camera_y: self.state.camera.y,
            step_index: self.state.step,
            step_count: self.trace.len(),
            is_finished: self.is_finished(),
            follow: self.state.mode,
            speed: self.state.speed,
        }
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            view: self.view(),
            layout: &self.layout,
            labels: self.labels,
        }
    }

    fn pointer_index(&self, pointer: Pointer) -> Option<usize> {
        let pair = self.trace.get(self.state.step)?;
        match pointer {
            Pointer::Slow => self.table.index_of(pair.slow),
            Pointer::Fast => self.table.resolve(pair.fast),
        }
    }

    fn advance(&mut self) {
        if !self.state.mode.is_following() && !self.is_finished() {
            self.state.step += 1;
        }
    }

    fn retreat(&mut self) {
        if !self.state.mode.is_following() && self.state.step > 0 {
            self.state.step -= 1;
        }
    }

    fn toggle_follow(&mut self, pointer: Pointer) {
        if self.state.mode == FollowMode::AutoFollow(pointer) {
            self.state.mode = FollowMode::Manual;
            self.state.next_advance_at = None;
            return;
        }

        self.state.mode = FollowMode::Manual;
        self.state.next_advance_at = None;
        if self.is_finished() {
            return;
        }

        self.state.camera = Layout::start_camera();
        self.state.mode = FollowMode::AutoFollow(pointer);
    }

    fn jump_to_index(&mut self, index: Option<usize>) {
        if let Some(anchor) = index.and_then(|i| self.layout.anchor(i)) {
            self.state.camera = Layout::camera_focus(anchor);
        }
    }

    fn reset(&mut self) {
        self.state = PlaybackState::initial(self.state.speed);
    }

    fn pan(&mut self, direction: PanDirection) {
        self.state.camera = self.state.camera + direction.delta(self.state.speed.pan_speed());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::constants::layout::PITCH;

    fn controller(values: &[i64], cycle: i64, algorithm: Algorithm) -> PlaybackController {
        let input = ListInput::new(values.to_vec(), cycle).unwrap();
        PlaybackController::from_input(&input, algorithm)
    }

    #[test]
    fn test_advance_until_finished() {
        let mut c = controller(&[3, 2, 0, -4], 1, Algorithm::Floyd);
        let len = c.trace().len();

        for _ in 0..len - 1 {
            assert!(!c.is_finished());
            assert!(c.apply(PlaybackEvent::Advance));
        }
        assert!(c.is_finished());

        let before = c.state().clone();
        assert!(!c.apply(PlaybackEvent::Advance));
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn test_retreat_stops_at_zero() {
        let mut c = controller(&[1, 2, 3], -1, Algorithm::Brent);

        assert!(!c.apply(PlaybackEvent::Retreat));
        c.apply(PlaybackEvent::Advance);
        assert!(c.apply(PlaybackEvent::Retreat));
        assert_eq!(c.state().step, 0);
    }

    #[test]
    fn test_view_resolves_null_fast_pointer() {
        let c = controller(&[1], -1, Algorithm::Floyd);
        let view = c.view();

        assert_eq!(view.slow_index, Some(0));
        assert_eq!(view.fast_index, Some(1));
        assert!(view.is_finished);
    }

    #[test]
    fn test_jumps_move_camera_only() {
        let mut c = controller(&[3, 2, 0, -4], 1, Algorithm::Floyd);
        c.apply(PlaybackEvent::Advance);

        c.apply(PlaybackEvent::JumpEnd);
        assert_eq!(
            c.state().camera,
            Layout::camera_focus(Layout::position_of(3))
        );

        c.apply(PlaybackEvent::JumpToCycle);
        assert_eq!(
            c.state().camera,
            Layout::camera_focus(Layout::position_of(1))
        );

        c.apply(PlaybackEvent::JumpStart);
        assert_eq!(c.state().camera, Point::new(-PITCH, 0.0));
        assert_eq!(c.state().step, 1);
    }

    #[test]
    fn test_jump_to_cycle_without_cycle_is_noop() {
        let mut c = controller(&[1, 2, 3], -1, Algorithm::Floyd);

        assert!(!c.apply(PlaybackEvent::JumpToCycle));
    }

    #[test]
    fn test_follow_skips_first_delay_then_waits() {
        let mut c = controller(&[1, 2, 3, 4, 5, 6, 7, 8], -1, Algorithm::Brent);
        let t0 = Instant::now();

        c.apply(PlaybackEvent::ToggleFollow(Pointer::Fast));
        assert!(c.tick(t0));
        assert_eq!(c.state().step, 1);

        // Not yet due
        assert!(!c.tick(t0 + Duration::from_millis(100)));
        assert_eq!(c.state().step, 1);

        assert!(c.tick(t0 + SpeedTier::Medium.auto_delay()));
        assert_eq!(c.state().step, 2);
        let fast = c.view().fast_index.unwrap();
        assert_eq!(
            c.state().camera,
            Layout::camera_focus(Layout::position_of(fast))
        );
    }

    #[test]
    fn test_follow_recentres_on_new_step() {
        let mut c = controller(&[3, 2, 0, -4], 1, Algorithm::Floyd);
        c.apply(PlaybackEvent::ToggleFollow(Pointer::Fast));

        // Fast sits on index 1 at step 0 and index 3 at step 1
        assert!(c.tick(Instant::now()));
        assert_eq!(c.state().step, 1);
        assert_eq!(c.state().camera, Point::new(2.0 * PITCH, 0.0));
        assert_eq!(
            c.state().camera,
            Layout::camera_focus(Layout::position_of(3))
        );
    }

    #[test]
    fn test_follow_exits_at_end() {
        let mut c = controller(&[1, 2, 3, 4, 5, 6], -1, Algorithm::Floyd);
        let mut now = Instant::now();

        c.apply(PlaybackEvent::ToggleFollow(Pointer::Slow));
        assert!(c.state().mode.is_following());

        for _ in 0..10 {
            c.tick(now);
            now += SpeedTier::Medium.auto_delay();
        }

        assert_eq!(c.state().mode, FollowMode::Manual);
        assert_eq!(Some(c.state().step), c.last_step());
    }

    #[test]
    fn test_follow_blocks_manual_stepping_but_not_pan() {
        let mut c = controller(&[1, 2, 3, 4, 5], -1, Algorithm::Brent);
        c.apply(PlaybackEvent::ToggleFollow(Pointer::Fast));

        assert!(!c.apply(PlaybackEvent::Advance));
        assert!(!c.apply(PlaybackEvent::Retreat));

        let camera = c.state().camera;
        assert!(c.apply(PlaybackEvent::Pan(PanDirection::Down)));
        assert_eq!(c.state().camera, camera + Point::new(0.0, 6.0));
    }

    #[test]
    fn test_toggling_other_pointer_switches_mode() {
        let mut c = controller(&[1, 2, 3, 4, 5], -1, Algorithm::Floyd);

        c.apply(PlaybackEvent::ToggleFollow(Pointer::Fast));
        c.apply(PlaybackEvent::ToggleFollow(Pointer::Slow));
        assert_eq!(c.state().mode, FollowMode::AutoFollow(Pointer::Slow));

        c.apply(PlaybackEvent::ToggleFollow(Pointer::Slow));
        assert_eq!(c.state().mode, FollowMode::Manual);
    }

    #[test]
    fn test_follow_cannot_start_when_finished() {
        let mut c = controller(&[1], -1, Algorithm::Floyd);

        assert!(!c.apply(PlaybackEvent::ToggleFollow(Pointer::Fast)));
        assert_eq!(c.state().mode, FollowMode::Manual);
    }

    #[test]
    fn test_reset_clears_follow_and_keeps_speed() {
        let mut c = controller(&[1, 2, 3, 4, 5], -1, Algorithm::Floyd);
        c.apply(PlaybackEvent::SetSpeed(SpeedTier::Fast));
        c.apply(PlaybackEvent::ToggleFollow(Pointer::Fast));
        c.tick(Instant::now());
        c.apply(PlaybackEvent::Pan(PanDirection::Left));

        c.apply(PlaybackEvent::Reset);

        assert_eq!(c.state().step, 0);
        assert_eq!(c.state().camera, Layout::start_camera());
        assert_eq!(c.state().mode, FollowMode::Manual);
        assert_eq!(c.state().speed, SpeedTier::Fast);
    }

    #[test]
    fn test_empty_trace_is_always_finished() {
        let mut c = controller(&[], -1, Algorithm::Brent);

        assert!(c.is_finished());
        assert!(!c.apply(PlaybackEvent::Advance));
        assert!(!c.apply(PlaybackEvent::ToggleFollow(Pointer::Fast)));
        assert!(!c.tick(Instant::now()));

        let view = c.view();
        assert_eq!(view.slow_index, None);
        assert_eq!(view.fast_index, None);
        assert_eq!(view.step_count, 0);
        assert!(view.is_finished);
    }
}
