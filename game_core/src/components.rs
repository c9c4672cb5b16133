use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{non_negative, positive, ConfigError};
use crate::kinematics::{Body, Motion};
use crate::params::{Params, Rgb};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Goal line the ball crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    /// Ball left the arena through x = 0
    Left,
    /// Ball left the arena through x = width
    Right,
}

impl Goal {
    /// Side awarded the point: the one defending the other goal
    pub fn scorer(self) -> Side {
        match self {
            Goal::Left => Side::Right,
            Goal::Right => Side::Left,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub radius: f32,
    pub color: Rgb,
    pub motion: Motion,
    pub boost_decay: f32,
    pub body: Body,
}

impl Ball {
    pub fn new(radius: f32, pos: Vec2, vel: Vec2, motion: Motion) -> Result<Self, ConfigError> {
        positive("ball radius", radius)?;
        motion.validate()?;
        Ok(Self {
            radius,
            color: Params::BLUE,
            motion,
            boost_decay: Params::BOOST_DECAY,
            body: Body::new(pos, vel),
        })
    }

    pub fn from_config(config: &Config, pos: Vec2, vel: Vec2) -> Result<Self, ConfigError> {
        let mut ball = Self::new(config.ball_radius, pos, vel, config.ball_motion)?;
        ball.color = config.ball_color;
        ball.boost_decay = non_negative("boost_decay", config.boost_decay)?;
        Ok(ball)
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.body.vel
    }

    /// Integrate one step, including any boost left over from a paddle hit
    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt, &self.motion);
        self.body.glide(dt, self.boost_decay);
    }

    /// Goal line the ball has crossed, if any.
    ///
    /// A ball flush with a goal line (`x == radius` or `x == width - radius`)
    /// has not crossed it yet.
    pub fn check_scored(&self, width: f32) -> Option<Goal> {
        let x = self.body.pos.x;
        if x - self.radius < 0.0 {
            Some(Goal::Left)
        } else if x + self.radius > width {
            Some(Goal::Right)
        } else {
            None
        }
    }

    /// Serve again from `origin` with a freshly drawn velocity
    pub fn reset<R: Rng + ?Sized>(&mut self, origin: Vec2, rng: &mut R) {
        let (vel, acc) = self.motion.serve(rng);
        self.body = Body {
            pos: origin,
            vel,
            acc,
            boost: 0.0,
        };
    }
}

/// Paddle component - moves along Y only, `body.pos` is its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Boost granted when the paddle starts moving or reverses
    pub boost: f32,
    pub boost_decay: f32,
    pub color: Rgb,
    pub body: Body,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: f32, height: f32, speed: f32) -> Result<Self, ConfigError> {
        positive("paddle width", width)?;
        positive("paddle height", height)?;
        non_negative("paddle speed", speed)?;
        Ok(Self {
            side,
            width,
            height,
            speed,
            boost: 0.0,
            boost_decay: Params::BOOST_DECAY,
            color: Params::WHITE,
            body: Body::new(pos, Vec2::ZERO),
        })
    }

    pub fn from_config(config: &Config, side: Side) -> Result<Self, ConfigError> {
        let mut paddle = Self::new(
            side,
            config.paddle_origin(side),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
        )?;
        paddle.boost = non_negative("paddle_boost", config.paddle_boost)?;
        paddle.boost_decay = non_negative("boost_decay", config.boost_decay)?;
        paddle.color = config.paddle_color;
        Ok(paddle)
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn center(&self) -> Vec2 {
        self.body.pos + Vec2::new(self.width, self.height) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Move along Y at `dir * speed` plus whatever boost remains
    pub fn advance(&mut self, dir: i8, dt: f32) {
        self.body.vel = Vec2::new(0.0, f32::from(dir.signum()) * self.speed);
        self.body.integrate(dt, &Motion::Directional { speed: self.speed });
        self.body.glide(dt, self.boost_decay);
    }

    pub fn reset(&mut self, origin: Vec2) {
        self.body = Body::new(origin, Vec2::ZERO);
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
    /// Set when a wall turned the paddle around since the last command
    bounced: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moving(dir: i8) -> Self {
        Self {
            dir: dir.signum(),
            bounced: false,
        }
    }

    /// Replace the intent, returning true when the paddle starts moving or
    /// reverses. Asking again for the direction a wall just reversed is not
    /// a launch.
    pub fn set(&mut self, dir: i8) -> bool {
        let dir = dir.signum();
        let resumed_push = self.bounced && dir == -self.dir;
        let launched = dir != 0 && dir != self.dir && !resumed_push;
        self.dir = dir;
        self.bounced = false;
        launched
    }

    /// Turn around after hitting a wall
    pub fn bounce(&mut self) {
        self.dir = -self.dir;
        self.bounced = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn ball_at(x: f32) -> Ball {
        Ball::new(10.0, Vec2::new(x, 240.0), Vec2::ZERO, Motion::Directional { speed: 100.0 })
            .unwrap()
    }

    #[test]
    fn test_ball_flush_with_left_edge_has_not_scored() {
        assert_eq!(ball_at(10.0).check_scored(640.0), None);
    }

    #[test]
    fn test_ball_past_left_edge_scores() {
        let goal = ball_at(9.0).check_scored(640.0);
        assert_eq!(goal, Some(Goal::Left));
        assert_eq!(goal.map(Goal::scorer), Some(Side::Right));
    }

    #[test]
    fn test_ball_right_edge() {
        assert_eq!(ball_at(630.0).check_scored(640.0), None);
        assert_eq!(ball_at(631.0).check_scored(640.0), Some(Goal::Right));
        assert_eq!(Goal::Right.scorer(), Side::Left);
    }

    #[test]
    fn test_ball_rejects_bad_radius() {
        let motion = Motion::Directional { speed: 1.0 };
        assert!(Ball::new(0.0, Vec2::ZERO, Vec2::ZERO, motion).is_err());
        assert!(Ball::new(-3.0, Vec2::ZERO, Vec2::ZERO, motion).is_err());
        assert!(Ball::new(f32::NAN, Vec2::ZERO, Vec2::ZERO, motion).is_err());
    }

    #[test]
    fn test_ball_reset_recenters_and_clears_boost() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut ball = ball_at(5.0);
        ball.body.kick(10.0);
        ball.body.acc = Vec2::new(1.0, 1.0);

        ball.reset(Vec2::new(320.0, 240.0), &mut rng);

        assert_eq!(ball.pos(), Vec2::new(320.0, 240.0));
        assert_eq!(ball.vel().abs(), Vec2::splat(100.0));
        assert_eq!(ball.body.acc, Vec2::ZERO);
        assert_eq!(ball.body.boost, 0.0);
        assert_eq!(ball.radius, 10.0, "radius survives a reset");
    }

    #[test]
    fn test_ball_update_keeps_radius() {
        let mut ball = ball_at(100.0);
        ball.body.vel = Vec2::new(100.0, -50.0);
        ball.update(0.125);
        assert_eq!(ball.pos(), Vec2::new(112.5, 233.75));
        assert_eq!(ball.radius, 10.0);
    }

    #[test]
    fn test_paddle_moves_only_vertically() {
        let mut paddle = Paddle::new(Side::Left, Vec2::new(20.0, 100.0), 10.0, 100.0, 200.0).unwrap();
        paddle.advance(1, 0.5);
        assert_eq!(paddle.pos(), Vec2::new(20.0, 200.0));
        paddle.advance(-1, 0.25);
        assert_eq!(paddle.pos(), Vec2::new(20.0, 150.0));
        paddle.advance(0, 1.0);
        assert_eq!(paddle.pos(), Vec2::new(20.0, 150.0));
    }

    #[test]
    fn test_paddle_boost_adds_speed_then_fades() {
        let mut paddle = Paddle::new(Side::Right, Vec2::new(600.0, 100.0), 10.0, 100.0, 100.0).unwrap();
        paddle.boost_decay = 40.0;
        paddle.body.kick(20.0);

        paddle.advance(1, 0.25);

        assert_eq!(paddle.pos().y, 100.0 + 25.0 + 5.0);
        assert_eq!(paddle.body.boost, 10.0);
    }

    #[test]
    fn test_paddle_reset() {
        let mut paddle = Paddle::new(Side::Left, Vec2::new(20.0, 0.0), 10.0, 100.0, 200.0).unwrap();
        paddle.body.kick(5.0);
        paddle.advance(1, 0.1);
        paddle.reset(Vec2::new(20.0, 190.0));
        assert_eq!(paddle.body, Body::new(Vec2::new(20.0, 190.0), Vec2::ZERO));
    }

    #[test]
    fn test_paddle_center() {
        let paddle = Paddle::new(Side::Left, Vec2::new(20.0, 100.0), 10.0, 100.0, 0.0).unwrap();
        assert_eq!(paddle.center(), Vec2::new(25.0, 150.0));
    }

    #[test]
    fn test_intent_reports_launch() {
        let mut intent = PaddleIntent::new();
        assert!(intent.set(1), "start moving");
        assert!(!intent.set(1), "unchanged");
        assert!(intent.set(-5), "reverse, clamped to -1");
        assert_eq!(intent.dir, -1);
        assert!(!intent.set(0), "stopping is not a launch");
    }

    #[test]
    fn test_intent_launch_and_reverse() {
        let mut intent = PaddleIntent::new();
        assert!(intent.set(1), "start moving");
        assert!(!intent.set(1), "same direction");
        assert!(intent.set(-1), "reverse");
        assert!(!intent.set(0), "stopping is not a launch");
    }

    #[test]
    fn test_wall_bounce_is_not_a_launch() {
        let mut intent = PaddleIntent::moving(-1);
        intent.bounce();
        assert_eq!(intent.dir, 1);

        // Controller keeps pushing into the wall
        assert!(!intent.set(-1));
        assert_eq!(intent.dir, -1);

        // A genuine reversal afterwards still counts
        assert!(intent.set(1));
    }
}
