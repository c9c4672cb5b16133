use glam::Vec2;

use crate::config::Config;
use crate::kinematics::Body;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Check if circle touches the box.
    ///
    /// `buffer` widens the box for the coarse per-axis rejection only; the
    /// rounded-corner test always uses the bare box and `radius`.
    pub fn touches_circle(&self, center: Vec2, radius: f32, buffer: f32) -> bool {
        let half = self.half_extents();
        let dist = (center - self.center()).abs();

        if dist.x > half.x + buffer + radius || dist.y > half.y + buffer + radius {
            return false;
        }
        if dist.x <= half.x || dist.y <= half.y {
            return true;
        }
        (dist - half).length_squared() <= radius * radius
    }
}

/// Which bound an interval was pushed off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Low,
    High,
}

/// Push the interval `[pos - below, pos + above]` back inside `[lo, hi]`,
/// leaving `margin` of clearance
pub fn push_inside(pos: &mut f32, below: f32, above: f32, lo: f32, hi: f32, margin: f32) -> Option<Contact> {
    if *pos - below < lo {
        *pos = lo + below + margin;
        Some(Contact::Low)
    } else if *pos + above > hi {
        *pos = hi - above - margin;
        Some(Contact::High)
    } else {
        None
    }
}

/// Axis of the play area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The rectangular play area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.arena_width, config.arena_height, config.wall_margin)
    }

    fn range(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Keep a round body of `radius` inside the arena on `axis`, inverting
    /// its velocity on that axis when it had to be moved
    pub fn reflect(&self, body: &mut Body, radius: f32, axis: Axis) -> Option<Contact> {
        let hi = self.range(axis);
        let (pos, vel) = match axis {
            Axis::X => (&mut body.pos.x, &mut body.vel.x),
            Axis::Y => (&mut body.pos.y, &mut body.vel.y),
        };
        let contact = push_inside(pos, radius, radius, 0.0, hi, self.margin)?;
        *vel = -*vel;
        Some(contact)
    }

    /// Keep a paddle's vertical span `[y, y + height]` inside the arena
    pub fn clamp_span(&self, y: &mut f32, height: f32) -> Option<Contact> {
        push_inside(y, 0.0, height, 0.0, self.height, self.margin)
    }
}
