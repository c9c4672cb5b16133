use glam::Vec2;
use hecs::World;
use serde::Serialize;

use crate::components::{Ball, Goal, Paddle, Side};
use crate::params::Rgb;
use crate::resources::{RoundState, Score};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleView {
    pub side: Side,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
}

/// Owned copy of everything a renderer draws for one frame.
///
/// Taken after the frame's physics finished, so a render thread can hold it
/// while the next frame is simulated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ball: Option<BallView>,
    /// Sorted left to right
    pub paddles: Vec<PaddleView>,
    pub score: Score,
    pub round: RoundState,
    /// Goal that paused the current break, if any
    pub last_goal: Option<Goal>,
    pub time: f32,
}

impl Snapshot {
    pub fn capture(
        world: &World,
        score: Score,
        round: RoundState,
        last_goal: Option<Goal>,
        time: f32,
    ) -> Self {
        let ball = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| BallView {
                pos: ball.pos(),
                radius: ball.radius,
                color: ball.color,
            });

        let mut paddles: Vec<PaddleView> = world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, p)| PaddleView {
                side: p.side,
                pos: p.pos(),
                width: p.width,
                height: p.height,
                color: p.color,
            })
            .collect();
        paddles.sort_by_key(|p| p.side == Side::Right);

        Self {
            ball,
            paddles,
            score,
            round,
            last_goal,
            time,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.round.is_paused()
    }

    pub fn paddle(&self, side: Side) -> Option<&PaddleView> {
        self.paddles.iter().find(|p| p.side == side)
    }

    /// "player - opponent"
    pub fn scoreline(&self) -> String {
        format!("{} - {}", self.score.left, self.score.right)
    }

    /// Headline for the between-rounds overlay
    pub fn headline(&self) -> Option<&'static str> {
        if !self.is_paused() {
            return None;
        }
        self.last_goal.map(|goal| match goal.scorer() {
            Side::Left => "Player scored",
            Side::Right => "Opponent scored",
        })
    }
}
