use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::error::{finite, non_negative, positive, ConfigError};
use crate::kinematics::Motion;
use crate::params::{Params, Rgb};

/// Game configuration, fixed for the lifetime of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between a paddle and its goal line
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    /// Extra speed a paddle gets when it starts moving or reverses
    pub paddle_boost: f32,
    pub ball_radius: f32,
    pub ball_motion: Motion,
    /// Extra speed injected into the ball on a paddle hit
    pub bounce_boost: f32,
    /// Linear fade rate of every boost, per second
    pub boost_decay: f32,
    /// Slack around paddle faces for the rectangular hit pre-check
    pub collision_buffer: f32,
    /// Gap left between an entity and the wall it was pushed off
    pub wall_margin: f32,
    pub finger_sensitivity: f32,
    pub fixed_dt: f32,
    pub max_dt: f32,
    pub ball_color: Rgb,
    pub paddle_color: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_arena(Params::ARENA_WIDTH, Params::ARENA_HEIGHT)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive entity sizes and speeds from the arena dimensions
    pub fn for_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            paddle_width: width * Params::PADDLE_WIDTH_RATIO,
            paddle_height: height * Params::PADDLE_HEIGHT_RATIO,
            paddle_margin: width * Params::PADDLE_MARGIN_RATIO,
            paddle_speed: height * Params::PADDLE_SPEED_RATIO,
            paddle_boost: Params::PADDLE_BOOST,
            ball_radius: width * Params::BALL_RADIUS_RATIO,
            ball_motion: Motion::Directional {
                speed: width * Params::BALL_SPEED_RATIO,
            },
            bounce_boost: Params::PADDLE_BOUNCE_BOOST,
            boost_decay: Params::BOOST_DECAY,
            collision_buffer: Params::COLLISION_BUFFER,
            wall_margin: Params::WALL_MARGIN,
            finger_sensitivity: Params::FINGER_SENSITIVITY,
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
            ball_color: Params::BLUE,
            paddle_color: Params::WHITE,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("fixed_dt", self.fixed_dt)?;
        positive("max_dt", self.max_dt)?;
        non_negative("paddle_margin", self.paddle_margin)?;
        non_negative("paddle_speed", self.paddle_speed)?;
        non_negative("paddle_boost", self.paddle_boost)?;
        non_negative("bounce_boost", self.bounce_boost)?;
        non_negative("boost_decay", self.boost_decay)?;
        non_negative("collision_buffer", self.collision_buffer)?;
        non_negative("wall_margin", self.wall_margin)?;
        non_negative("finger_sensitivity", self.finger_sensitivity)?;
        self.ball_motion.validate()?;

        // Every frame must split into a bounded number of micro-steps
        if self.fixed_dt < Params::MIN_FIXED_DT
            || self.fixed_dt > self.max_dt
            || self.max_dt / self.fixed_dt > Params::MAX_SUBSTEPS as f32
        {
            return Err(ConfigError::StepRange {
                fixed_dt: self.fixed_dt,
                max_dt: self.max_dt,
            });
        }

        if self.paddle_height + 2.0 * self.wall_margin > self.arena_height {
            return Err(ConfigError::PaddleTooLarge {
                height: self.paddle_height,
                arena_height: self.arena_height,
            });
        }
        // Both paddles must sit inside the arena without touching each other
        finite("paddle_x", self.paddle_x(Side::Right))?;
        if self.paddle_x(Side::Right) <= self.paddle_x(Side::Left) + self.paddle_width {
            return Err(ConfigError::NonPositive(
                "gap between paddles",
                self.paddle_x(Side::Right) - self.paddle_x(Side::Left) - self.paddle_width,
            ));
        }

        // A served ball must start clear of both walls and both paddle faces
        let lane = self.paddle_x(Side::Right) - self.paddle_x(Side::Left) - self.paddle_width;
        let room = (self.arena_height - 2.0 * self.wall_margin).min(lane);
        if 2.0 * self.ball_radius >= room {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
                room,
            });
        }
        Ok(())
    }

    /// Left edge X of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top-left corner a paddle starts each round at, vertically centred
    pub fn paddle_origin(&self, side: Side) -> Vec2 {
        Vec2::new(
            self.paddle_x(side),
            (self.arena_height - self.paddle_height) / 2.0,
        )
    }

    /// Ball serve position, the centre of the arena
    pub fn ball_origin(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }
}
