//! Shared motion primitives for the ball and paddles.
//!
//! Every body advances acceleration, then velocity, then position, so each
//! stage consumes the value the previous stage just produced.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{finite, non_negative, ConfigError};

/// Treat negative, NaN and infinite frame times as an empty frame
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// How acceleration fades toward zero in the clamped model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decay {
    /// `acc *= rate^dt`, rate in (0, 1]
    Exponential { rate: f32 },
    /// `acc -= sign(acc) * rate * dt`, stopping at zero
    Linear { rate: f32 },
}

impl Decay {
    pub fn apply(&self, acc: Vec2, dt: f32) -> Vec2 {
        match *self {
            Decay::Exponential { rate } => acc * rate.powf(dt),
            Decay::Linear { rate } => {
                let step = rate * dt;
                Vec2::new(toward_zero(acc.x, step), toward_zero(acc.y, step))
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Decay::Exponential { rate } => {
                if finite("decay.rate", rate)? > 0.0 && rate <= 1.0 {
                    Ok(())
                } else {
                    Err(ConfigError::DecayRate(rate))
                }
            }
            Decay::Linear { rate } => non_negative("decay.rate", rate).map(|_| ()),
        }
    }
}

fn toward_zero(v: f32, step: f32) -> f32 {
    if v > 0.0 {
        (v - step).max(0.0)
    } else {
        (v + step).min(0.0)
    }
}

/// Per-axis bounds for the clamped model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub min_acc: Vec2,
    pub max_acc: Vec2,
    pub min_vel: Vec2,
    pub max_vel: Vec2,
}

impl Limits {
    /// Bounds of `[-max, max]` on both axes
    pub fn symmetric(max_acc: f32, max_vel: f32) -> Self {
        Self {
            min_acc: Vec2::splat(-max_acc),
            max_acc: Vec2::splat(max_acc),
            min_vel: Vec2::splat(-max_vel),
            max_vel: Vec2::splat(max_vel),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, min, max) in [
            ("limits.acc", self.min_acc, self.max_acc),
            ("limits.vel", self.min_vel, self.max_vel),
        ] {
            if !min.is_finite() || !max.is_finite() {
                return Err(ConfigError::NonFinite(field));
            }
            if min.cmpgt(max).any() {
                return Err(ConfigError::InvertedBounds(field));
            }
        }
        Ok(())
    }
}

/// Acceleration model a body is integrated with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum Motion {
    /// Constant speed along a per-axis direction of ±1, no acceleration
    Directional { speed: f32 },
    /// `acc += jerk * dt`, floored at zero on each axis
    Jerk { jerk: f32, speed: f32 },
    /// Decaying acceleration, velocity and acceleration kept within `limits`
    Clamped { decay: Decay, limits: Limits },
}

impl Motion {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Motion::Directional { speed } => non_negative("motion.speed", *speed).map(|_| ()),
            Motion::Jerk { jerk, speed } => {
                finite("motion.jerk", *jerk)?;
                non_negative("motion.speed", *speed).map(|_| ())
            }
            Motion::Clamped { decay, limits } => {
                decay.validate()?;
                limits.validate()
            }
        }
    }

    /// Fresh velocity and acceleration for a serve
    pub fn serve<R: Rng + ?Sized>(&self, rng: &mut R) -> (Vec2, Vec2) {
        match *self {
            Motion::Directional { speed } | Motion::Jerk { speed, .. } => {
                (random_direction(rng) * speed, Vec2::ZERO)
            }
            Motion::Clamped { limits, .. } => {
                let vel = Vec2::new(
                    rng.gen_range(limits.min_vel.x..=limits.max_vel.x),
                    rng.gen_range(limits.min_vel.y..=limits.max_vel.y),
                );
                (vel, Vec2::ZERO.clamp(limits.min_acc, limits.max_acc))
            }
        }
    }
}

/// Each axis independently -1 or +1
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let sign = |up: bool| if up { 1.0 } else { -1.0 };
    Vec2::new(sign(rng.gen_bool(0.5)), sign(rng.gen_bool(0.5)))
}

/// Position, velocity and acceleration of a moving entity, plus a transient
/// speed boost along the direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub boost: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            ..Self::default()
        }
    }

    /// Advance acceleration, velocity and position by `dt` under `motion`
    pub fn integrate(&mut self, dt: f32, motion: &Motion) {
        let dt = sanitize_dt(dt);
        match *motion {
            Motion::Directional { .. } => {}
            Motion::Jerk { jerk, .. } => {
                self.acc = (self.acc + Vec2::splat(jerk * dt)).max(Vec2::ZERO);
                self.vel += self.acc * dt;
            }
            Motion::Clamped { decay, limits } => {
                self.acc = decay
                    .apply(self.acc, dt)
                    .clamp(limits.min_acc, limits.max_acc);
                self.vel = (self.vel + self.acc * dt).clamp(limits.min_vel, limits.max_vel);
            }
        }
        self.pos += self.vel * dt;
    }

    /// Carry the body along its heading by the current boost, then let the
    /// boost fade linearly at `decay` per second
    pub fn glide(&mut self, dt: f32, decay: f32) {
        let dt = sanitize_dt(dt);
        if self.boost <= 0.0 {
            return;
        }
        self.pos += self.vel.normalize_or_zero() * self.boost * dt;
        self.boost = (self.boost - decay * dt).max(0.0);
    }

    pub fn kick(&mut self, boost: f32) {
        self.boost = boost;
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite() && self.acc.is_finite() && self.boost.is_finite()
    }
}
