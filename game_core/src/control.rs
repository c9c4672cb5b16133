//! Paddle control strategies.
//!
//! A paddle's direction intent is chosen once per step by whichever
//! [`PaddleController`] is attached to it. Physics never looks at the
//! strategy, so new ones (replays, network peers) plug in without touching
//! movement or collision code.

use glam::Vec2;

use crate::components::Paddle;

/// What a controller may look at when steering
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    /// Pointer reading for this frame, already in arena coordinates
    pub pointer: Option<Vec2>,
}

/// Chooses a paddle's direction intent each step
pub trait PaddleController: Send + Sync {
    /// New intent (-1 up, 0 stop, 1 down), or `None` to hold the current one
    fn steer(&mut self, paddle: &Paddle, input: &ControlInput) -> Option<i8>;

    /// Called when the round resets
    fn reset(&mut self) {}

    /// Strategy name for logs
    fn name(&self) -> &str;
}

/// Controller component attached to each paddle entity
pub struct Controller(pub Box<dyn PaddleController>);

impl Controller {
    pub fn new(controller: impl PaddleController + 'static) -> Self {
        Self(Box::new(controller))
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Controller").field(&self.0.name()).finish()
    }
}

/// Predictive AI intent.
///
/// While the target closes on the paddle along X, extrapolate its line to the
/// paddle's X and aim there; otherwise follow the target's Y. Wall bounces
/// are not predicted. Stays put once the aim point lies within the paddle.
pub fn move_towards(paddle: &Paddle, target_pos: Vec2, target_vel: Vec2) -> i8 {
    let paddle_x = paddle.pos().x;
    let closing = (paddle_x - target_pos.x) * target_vel.x > 0.0;

    let mut aim = target_pos.y;
    if closing {
        let hit = (target_vel.y / target_vel.x) * (paddle_x - target_pos.x) + target_pos.y;
        if hit.is_finite() {
            aim = hit;
        }
    }

    let top = paddle.pos().y;
    if (top..=top + paddle.height).contains(&aim) {
        0
    } else if aim < paddle.center().y {
        -1
    } else {
        1
    }
}

/// Pointer-follow intent: `None` without a reading, stop within
/// `sensitivity` of the paddle centre, otherwise move toward the pointer
pub fn follow_finger(paddle: &Paddle, pointer: Option<Vec2>, sensitivity: f32) -> Option<i8> {
    let pointer = pointer?;
    let center = paddle.center().y;
    Some(if pointer.y < center - sensitivity {
        -1
    } else if pointer.y > center + sensitivity {
        1
    } else {
        0
    })
}

/// Tracks the ball with [`move_towards`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AiPredictive;

impl PaddleController for AiPredictive {
    fn steer(&mut self, paddle: &Paddle, input: &ControlInput) -> Option<i8> {
        Some(move_towards(paddle, input.ball_pos, input.ball_vel))
    }

    fn name(&self) -> &str {
        "ai"
    }
}

/// Follows the pointer with [`follow_finger`], holding the last intent on
/// frames without a reading
#[derive(Debug, Clone, Copy)]
pub struct HumanPointer {
    pub sensitivity: f32,
}

impl HumanPointer {
    pub fn new(sensitivity: f32) -> Self {
        Self { sensitivity }
    }
}

impl PaddleController for HumanPointer {
    fn steer(&mut self, paddle: &Paddle, input: &ControlInput) -> Option<i8> {
        follow_finger(paddle, input.pointer, self.sensitivity)
    }

    fn name(&self) -> &str {
        "pointer"
    }
}

/// Replays a fixed list of intents, one per step, then holds the last.
/// Restarts from the top every round.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    intents: Vec<i8>,
    cursor: usize,
}

impl Scripted {
    pub fn new(intents: Vec<i8>) -> Self {
        Self { intents, cursor: 0 }
    }

    /// Never steers; the paddle keeps its initial (stopped) intent
    pub fn idle() -> Self {
        Self::default()
    }
}

impl PaddleController for Scripted {
    fn steer(&mut self, _paddle: &Paddle, _input: &ControlInput) -> Option<i8> {
        let dir = self.intents.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(dir)
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
