use std::collections::VecDeque;

use glam::Vec2;

use crate::error::ConfigError;
use crate::params::Params;

/// Moving-average filter over the most recent pointer readings.
///
/// Frames without a reading yield `None` and leave the history alone, so the
/// paddle holds its last intent instead of snapping to stop.
#[derive(Debug, Clone)]
pub struct PointerSmoother {
    history: VecDeque<Vec2>,
    window: usize,
}

impl Default for PointerSmoother {
    fn default() -> Self {
        Self {
            history: VecDeque::with_capacity(Params::POINTER_WINDOW),
            window: Params::POINTER_WINDOW,
        }
    }
}

impl PointerSmoother {
    pub fn new(window: usize) -> Result<Self, ConfigError> {
        if window == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        Ok(Self {
            history: VecDeque::with_capacity(window),
            window,
        })
    }

    pub fn push(&mut self, reading: Option<Vec2>) -> Option<Vec2> {
        let reading = reading.filter(|p| p.is_finite())?;
        if self.history.len() == self.window {
            self.history.pop_front();
        }
        self.history.push_back(reading);
        Some(self.history.iter().copied().sum::<Vec2>() / self.history.len() as f32)
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

/// Flip a camera-space reading horizontally so the view acts like a mirror
pub fn mirror_x(reading: Vec2, width: f32) -> Vec2 {
    Vec2::new(width - reading.x, reading.y)
}
