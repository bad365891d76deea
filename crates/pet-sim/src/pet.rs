//! The `Pet` agent context and its tick loop.

use std::sync::Arc;

use tracing::debug;

use pet_behavior::{
    AttachState, BehaviorState, BehaviorTuning, CookieState, DragState, FallState, FrameHandle,
    FrameLibrary, IdleState, PetBehavior, PlayState, StateKind, StateType, StepContext,
    ThunderShockState, detect_edge,
};
use pet_core::{PetConfig, PetRng, Point, Size, Tick, TickClock};
use pet_schedule::ReminderScheduler;

use crate::{NoopObserver, PetObserver};

// ── Pet ───────────────────────────────────────────────────────────────────────

/// One desktop pet: position, screen bounds and the single active state.
///
/// Each tick runs three phases in order:
///
/// 1. **Reminders**: `check_due` on the shared scheduler.  If anything
///    fired, the pet drops what it is doing and goes Idle (unless it is
///    already Idle or being dragged).
/// 2. **Advance**: the active state runs one tick against a
///    [`StepContext`] and may hand back a successor, which replaces it.
/// 3. **Edge check**: only while Idle, a pet close to a screen edge snaps
///    to it and attaches.
///
/// Ticks are driven from one thread; the pet itself needs no locking.
/// Create via [`PetBuilder`][crate::PetBuilder].
pub struct Pet {
    pub config: PetConfig,

    /// Counts ticks and maps them to nominal wall time.
    pub clock: TickClock,

    pub(crate) position:      Point,
    pub(crate) screen_bounds: Size,
    pub(crate) state:         BehaviorState,
    pub(crate) rng:           PetRng,
    pub(crate) frames:        FrameLibrary,
    pub(crate) tuning:        BehaviorTuning,
    pub(crate) reminders:     Option<Arc<ReminderScheduler>>,
}

impl Pet {
    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: PetObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_run_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: PetObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// One tick with no observer; what an interactive host's timer calls.
    pub fn update(&mut self) {
        self.step(&mut NoopObserver);
    }

    /// One tick, reporting to `observer`.
    pub fn step<O: PetObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: reminders ────────────────────────────────────────────
        let fired = self
            .reminders
            .as_ref()
            .map(|s| s.check_due())
            .unwrap_or_default();
        if !fired.is_empty() {
            for reminder in &fired {
                observer.on_reminder(now, reminder);
            }
            self.react_to_reminder(now, observer);
        }

        // ── Phase 2: advance the active state ─────────────────────────────
        let next = {
            let mut ctx = StepContext::new(
                now,
                &mut self.position,
                self.screen_bounds,
                &mut self.rng,
                &self.frames,
                &self.tuning,
            );
            self.state.advance(&mut ctx)
        };
        if let Some(next) = next {
            self.transition(now, next, observer);
        }

        // ── Phase 3: edge check, Idle only ────────────────────────────────
        if self.state.kind() == StateKind::Idle {
            if let Some(next) = self.try_attach() {
                self.transition(now, next, observer);
            }
        }

        observer.on_tick_end(now, self.state.kind());
        self.clock.advance();
    }

    // ── Host operations ───────────────────────────────────────────────────

    /// Pointer down on the pet.
    pub fn start_drag(&mut self) {
        let next = BehaviorState::Drag(DragState::new(&self.frames, &self.tuning));
        self.replace_state(next);
    }

    /// Move the pet with the pointer.  Ignored unless dragging.
    pub fn drag_to(&mut self, point: Point) -> bool {
        if self.state.kind() != StateKind::Drag {
            return false;
        }
        self.position = point;
        true
    }

    /// Pointer up.  Attaches if released near an edge, otherwise falls.
    /// Does nothing unless dragging.
    pub fn end_drag(&mut self) {
        if self.state.kind() != StateKind::Drag {
            return;
        }
        let next = match self.try_attach() {
            Some(attach) => attach,
            None => BehaviorState::Fall(FallState::new(&self.frames, &self.tuning)),
        };
        self.replace_state(next);
    }

    /// Force a fresh Idle activation from any state.
    pub fn set_idle(&mut self) {
        let next = self.fresh_idle();
        self.replace_state(next);
    }

    /// Start eating.  Returns `false` (and does nothing) while dragging.
    pub fn trigger_eating(&mut self) -> bool {
        if self.is_in_state::<DragState>() {
            return false;
        }
        let next = BehaviorState::Cookie(CookieState::new(&self.frames, &self.tuning, &mut self.rng));
        self.replace_state(next);
        true
    }

    /// Start playing.  Returns `false` (and does nothing) while dragging.
    pub fn trigger_playing(&mut self) -> bool {
        if self.is_in_state::<DragState>() {
            return false;
        }
        let next = BehaviorState::Play(PlayState::new(&self.frames, &self.tuning, &mut self.rng));
        self.replace_state(next);
        true
    }

    /// Start a thunder shock.  Returns `false` (and does nothing) while
    /// dragging.
    pub fn trigger_discharge(&mut self) -> bool {
        if self.is_in_state::<DragState>() {
            return false;
        }
        let next = BehaviorState::ThunderShock(ThunderShockState::new(
            &self.frames,
            &self.tuning,
            &mut self.rng,
        ));
        self.replace_state(next);
        true
    }

    /// Leave an edge early.  Returns `false` if not attached.
    pub fn detach_from_edge(&mut self) -> bool {
        if !self.is_in_state::<AttachState>() {
            return false;
        }
        self.set_idle();
        true
    }

    /// Install `state` as the active state.  `None` keeps the current one.
    pub fn set_state(&mut self, state: Option<BehaviorState>) {
        match state {
            Some(next) => self.replace_state(next),
            None => debug!(current = %self.state.kind(), "ignoring empty state change"),
        }
    }

    /// Move the pet.  An attached pet snaps back to its anchor on the next
    /// tick.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn is_in_state<T: StateType>(&self) -> bool {
        self.state.kind() == T::KIND
    }

    pub fn state(&self) -> &BehaviorState {
        &self.state
    }

    pub fn state_kind(&self) -> StateKind {
        self.state.kind()
    }

    pub fn state_name(&self) -> &'static str {
        self.state.kind().name()
    }

    /// Frame to draw now, or `None` when the active state has no frames.
    pub fn render_frame(&self) -> Option<FrameHandle> {
        self.state.render_frame()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn screen_bounds(&self) -> Size {
        self.screen_bounds
    }

    pub fn tuning(&self) -> &BehaviorTuning {
        &self.tuning
    }

    pub fn frames(&self) -> &FrameLibrary {
        &self.frames
    }

    pub fn reminders(&self) -> Option<&Arc<ReminderScheduler>> {
        self.reminders.as_ref()
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn react_to_reminder<O: PetObserver>(&mut self, now: Tick, observer: &mut O) {
        match self.state.kind() {
            StateKind::Idle | StateKind::Drag => {}
            _ => {
                let next = self.fresh_idle();
                self.transition(now, next, observer);
            }
        }
    }

    /// Snap to the nearest edge in range and build the matching Attach
    /// state.  Moves the pet only when an edge is hit.
    fn try_attach(&mut self) -> Option<BehaviorState> {
        let sprite = self
            .state
            .render_frame()
            .map_or(self.tuning.fallback_sprite, |f| f.size);
        let hit = detect_edge(
            self.position,
            sprite,
            self.screen_bounds,
            self.tuning.attach_distance,
        )?;
        self.position = hit.snapped;
        Some(BehaviorState::Attach(AttachState::new(
            hit.direction,
            &self.frames,
            &self.tuning,
            &mut self.rng,
        )))
    }

    fn fresh_idle(&mut self) -> BehaviorState {
        BehaviorState::Idle(IdleState::new(&self.frames, &self.tuning, &mut self.rng))
    }

    fn transition<O: PetObserver>(&mut self, now: Tick, next: BehaviorState, observer: &mut O) {
        let from = self.state.kind();
        let to = next.kind();
        self.state = next;
        debug!(tick = %now, %from, %to, "state transition");
        observer.on_transition(now, from, to);
    }

    /// Host-initiated replacement, outside the tick loop.
    fn replace_state(&mut self, next: BehaviorState) {
        let from = self.state.kind();
        let to = next.kind();
        self.state = next;
        debug!(tick = %self.clock.current_tick, %from, %to, "state set by host");
    }
}

impl std::fmt::Debug for Pet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pet")
            .field("tick", &self.clock.current_tick)
            .field("position", &self.position)
            .field("state", &self.state.kind())
            .finish_non_exhaustive()
    }
}
