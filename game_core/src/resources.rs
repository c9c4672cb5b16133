use glam::Vec2;
use serde::Serialize;

use crate::components::{Goal, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Span of the current micro-step, or of the last frame once it ends
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Game score tracking; counters only ever go up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub left: u32,  // Player score
    pub right: u32, // Opponent score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub goal: Option<Goal>,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub resumed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.goal = None;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.resumed = false;
    }
}

/// Round lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RoundState {
    /// Simulation runs every frame
    #[default]
    InProgress,
    /// A point was just scored; frames are no-ops until a resume signal
    PausedBetweenRounds,
}

impl RoundState {
    pub fn is_paused(self) -> bool {
        self == RoundState::PausedBetweenRounds
    }
}

/// Everything the host supplies for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the last frame
    pub dt: f32,
    /// Pointer reading in arena coordinates, if the tracker produced one
    pub pointer: Option<Vec2>,
    /// Confirm input; only consulted while paused
    pub resume: bool,
}

impl FrameInput {
    pub fn tick(dt: f32) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    pub fn with_pointer(mut self, pointer: Option<Vec2>) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn with_resume(mut self) -> Self {
        self.resume = true;
        self
    }
}
