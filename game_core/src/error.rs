use std::fmt;

/// Rejected configuration, raised when an entity or match is constructed
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value is NaN or infinite
    NonFinite(&'static str),
    /// Size or step that must be strictly positive
    NonPositive(&'static str, f32),
    /// Speed, rate or margin that must not be negative
    Negative(&'static str, f32),
    /// Clamp bounds with min > max on some axis
    InvertedBounds(&'static str),
    /// Exponential decay rate outside (0, 1]
    DecayRate(f32),
    /// Paddle does not fit inside the arena
    PaddleTooLarge { height: f32, arena_height: f32 },
    /// Pointer smoothing window of zero
    EmptyWindow,
    /// Micro-step outside `[MIN_FIXED_DT, max_dt]` or too many per frame
    StepRange { fixed_dt: f32, max_dt: f32 },
    /// Ball too big to be served between the walls and paddles
    BallTooLarge { radius: f32, room: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite(field) => write!(f, "{field} must be finite"),
            Self::NonPositive(field, v) => write!(f, "{field} must be positive, got {v}"),
            Self::Negative(field, v) => write!(f, "{field} must not be negative, got {v}"),
            Self::InvertedBounds(field) => write!(f, "{field}: min exceeds max"),
            Self::DecayRate(rate) => {
                write!(f, "exponential decay rate must be in (0, 1], got {rate}")
            }
            Self::PaddleTooLarge {
                height,
                arena_height,
            } => write!(
                f,
                "paddle height {height} does not fit arena height {arena_height}"
            ),
            Self::EmptyWindow => write!(f, "pointer smoothing window must hold at least one reading"),
            Self::StepRange { fixed_dt, max_dt } => write!(
                f,
                "fixed_dt {fixed_dt} does not fit max_dt {max_dt} in a bounded number of steps"
            ),
            Self::BallTooLarge { radius, room } => {
                write!(f, "ball radius {radius} does not fit the {room} units of free play area")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub(crate) fn finite(field: &'static str, v: f32) -> Result<f32, ConfigError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ConfigError::NonFinite(field))
    }
}

pub(crate) fn positive(field: &'static str, v: f32) -> Result<f32, ConfigError> {
    if finite(field, v)? > 0.0 {
        Ok(v)
    } else {
        Err(ConfigError::NonPositive(field, v))
    }
}

pub(crate) fn non_negative(field: &'static str, v: f32) -> Result<f32, ConfigError> {
    if finite(field, v)? >= 0.0 {
        Ok(v)
    } else {
        Err(ConfigError::Negative(field, v))
    }
}
