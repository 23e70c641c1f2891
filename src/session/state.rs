use crate::engine::{Cell, Engine, Universe};
use super::StepTimer;

/// Builds a fresh engine of the given (height, width); reset goes through
/// this so the old instance is discarded wholesale.
pub type EngineFactory = Box<dyn Fn(u32, u32) -> Box<dyn Engine>>;

/// Run control state of the simulation loop
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Idle,
    Running,
}

/// Session owns the engine handle and every piece of mutable UI-facing state:
/// run control, frame interval, boundary mode, and the pending step deadline.
/// The frame loop is its sole caller, so mutation stays single-owner.
pub struct Session {
    engine: Box<dyn Engine>,
    factory: EngineFactory,
    height: u32,
    width: u32,
    interval_ms: f64,
    run_state: RunState,
    wrap: bool,
    timer: StepTimer,
    generation: u64,
}

impl Session {
    pub const DEFAULT_INTERVAL_MS: f64 = 60.0;

    /// Create a session backed by the default `Universe` engine
    pub fn new(height: u32, width: u32) -> Self {
        Self::with_factory(height, width, Box::new(|h, w| Box::new(Universe::new(h, w))))
    }

    /// Create a session with a caller-supplied engine factory
    pub fn with_factory(height: u32, width: u32, factory: EngineFactory) -> Self {
        Self {
            engine: factory(height, width),
            factory,
            height,
            width,
            interval_ms: Self::DEFAULT_INTERVAL_MS,
            run_state: RunState::Idle,
            wrap: false,
            timer: StepTimer::new(),
            generation: 0,
        }
    }

    /// Grid dimensions as (height, width); fixed for the session's lifetime
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    pub const fn run_state(&self) -> RunState {
        self.run_state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.run_state, RunState::Running)
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Change the frame interval. Takes effect on the next arming decision;
    /// an already-armed deadline is never moved.
    pub fn set_interval_ms(&mut self, interval_ms: f64) {
        self.interval_ms = interval_ms;
    }

    pub const fn wrap(&self) -> bool {
        self.wrap
    }

    /// Set the boundary mode and forward it to the engine
    pub fn set_wrap(&mut self, enabled: bool) {
        self.wrap = enabled;
        self.engine.set_wrap(enabled);
    }

    /// Start the loop. The first step fires one full interval from `now`.
    pub fn play(&mut self, now: f64) {
        if self.is_running() {
            return;
        }
        self.run_state = RunState::Running;
        self.timer.arm(now, self.interval_ms);
    }

    /// Stop the loop by cancelling the pending step
    pub fn pause(&mut self) {
        self.run_state = RunState::Idle;
        self.timer.cancel();
    }

    /// Discard the engine and build a fresh one of the same dimensions.
    /// Valid from either run state and always lands in `Idle`. The session's
    /// boundary mode survives the reset and is re-applied to the new engine.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.run_state = RunState::Idle;
        self.engine = (self.factory)(self.height, self.width);
        self.engine.set_wrap(self.wrap);
        self.generation = 0;
    }

    /// Re-seed the grid with a random population and stop the loop
    pub fn randomize(&mut self) {
        self.timer.cancel();
        self.run_state = RunState::Idle;
        self.engine.randomize();
        self.generation = 0;
    }

    /// Flip one cell through the engine; independent of the run/pause loop
    pub fn toggle_cell(&mut self, row: u32, col: u32) {
        self.engine.toggle_cell(row, col);
    }

    /// Map a pointer position over the canvas to grid coordinates by linear
    /// scaling. Positions outside the canvas map to `None`.
    pub fn pointer_to_cell(
        &self,
        x: f32,
        y: f32,
        canvas_width: f32,
        canvas_height: f32,
    ) -> Option<(u32, u32)> {
        if x < 0.0 || y < 0.0 || x >= canvas_width || y >= canvas_height {
            return None;
        }
        let row = (y * self.height as f32 / canvas_height) as u32;
        let col = (x * self.width as f32 / canvas_width) as u32;
        (row < self.height && col < self.width).then_some((row, col))
    }

    /// Advance the loop if a step is due. Returns whether a generation was
    /// stepped. The timer is re-armed only after the step completes, reading
    /// the interval current at that moment, so there is no overlap and no
    /// catch-up burst after a stall.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.is_running() || !self.timer.is_due(now) {
            return false;
        }
        self.engine.step();
        self.generation += 1;
        self.timer.arm(now, self.interval_ms);
        true
    }

    /// Read-only view of the engine's cell buffer
    pub fn cells(&self) -> &[Cell] {
        self.engine.cells()
    }

    /// State of one cell, read through the engine's buffer
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        self.engine.cells()[self.engine.index_of(row, col)]
    }

    pub fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }
}
