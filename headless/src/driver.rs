//! Frame loop that stands in for the windowed host: a frame clock, a fake
//! camera finger and the serve countdown.

use anyhow::{Context, Result};
use game_core::pointer::mirror_x;
use game_core::{
    AiPredictive, Config, Controller, Events, FrameInput, HumanPointer, Match, PointerSmoother,
    Side, Snapshot,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parse a (possibly partial) TOML config over the defaults
pub fn parse_config(raw: &str) -> Result<Config> {
    let config: Config = toml::from_str(raw).context("parse config toml")?;
    config.validate().context("validate config")?;
    Ok(config)
}

/// Camera-space fingertip that chases a target with some lag and jitter.
///
/// The camera looks at the player, so readings come out mirrored and are
/// flipped back before they reach the paddle.
pub struct SyntheticFinger {
    pos: Vec2,
    width: f32,
    lag: f32,
    jitter: f32,
    dropout: Option<u32>,
    frame: u32,
    rng: StdRng,
}

impl SyntheticFinger {
    pub fn new(start: Vec2, width: f32, dropout: Option<u32>, seed: u64) -> Self {
        Self {
            pos: mirror_x(start, width),
            width,
            lag: 0.15,
            jitter: 4.0,
            dropout: dropout.filter(|n| *n > 0),
            frame: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Arena-space reading for this frame, `None` when the tracker loses it
    pub fn read(&mut self, target: Vec2) -> Option<Vec2> {
        self.frame = self.frame.wrapping_add(1);
        self.pos += (mirror_x(target, self.width) - self.pos) * self.lag;

        if self.dropout.is_some_and(|n| self.frame % n == 0) {
            return None;
        }

        let noise = Vec2::new(
            self.rng.gen_range(-self.jitter..=self.jitter),
            self.rng.gen_range(-self.jitter..=self.jitter),
        );
        Some(mirror_x(self.pos + noise, self.width))
    }
}

#[derive(Debug, Clone)]
pub struct Options {
    pub seed: u64,
    pub fps: f32,
    /// Frames to wait after a goal before serving again
    pub serve_delay: u32,
    /// Drop every n-th finger reading
    pub dropout: Option<u32>,
    pub ai_vs_ai: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: 12345,
            fps: 60.0,
            serve_delay: 60,
            dropout: None,
            ai_vs_ai: false,
        }
    }
}

/// Running totals for the end-of-run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub frames: u64,
    pub goals: u32,
    pub paddle_hits: u32,
    pub wall_hits: u32,
    pub dropped_readings: u32,
}

pub struct Session {
    game: Match,
    finger: Option<SyntheticFinger>,
    smoother: PointerSmoother,
    dt: f32,
    serve_delay: u32,
    waited: u32,
    stats: Stats,
}

impl Session {
    pub fn new(config: Config, options: &Options) -> Result<Self> {
        if !(options.fps.is_finite() && options.fps > 0.0) {
            anyhow::bail!("fps must be positive, got {}", options.fps);
        }

        let left = if options.ai_vs_ai {
            Controller::new(AiPredictive)
        } else {
            Controller::new(HumanPointer::new(config.finger_sensitivity))
        };
        let finger = (!options.ai_vs_ai).then(|| {
            let start = config.paddle_origin(Side::Left) + Vec2::new(config.paddle_width, config.paddle_height) * 0.5;
            SyntheticFinger::new(start, config.arena_width, options.dropout, options.seed ^ 0x5EED)
        });

        let game = Match::with_controllers(config, options.seed, left, Controller::new(AiPredictive))
            .context("create match")?;

        Ok(Self {
            game,
            finger,
            smoother: PointerSmoother::default(),
            dt: 1.0 / options.fps,
            serve_delay: options.serve_delay,
            waited: 0,
            stats: Stats::default(),
        })
    }

    /// Run one host frame
    pub fn tick(&mut self) -> &Events {
        let pointer = match (&mut self.finger, self.game.ball()) {
            (Some(finger), Some(ball)) => {
                let reading = finger.read(ball.pos());
                if reading.is_none() {
                    self.stats.dropped_readings += 1;
                }
                self.smoother.push(reading)
            }
            _ => None,
        };

        let mut frame = FrameInput::tick(self.dt).with_pointer(pointer);
        if self.game.is_paused() {
            self.waited += 1;
            frame.resume = self.waited > self.serve_delay;
        }

        let events = self.game.step(&frame);
        self.stats.frames += 1;
        if events.goal.is_some() {
            self.stats.goals += 1;
        }
        if events.ball_hit_paddle {
            self.stats.paddle_hits += 1;
        }
        if events.ball_hit_wall {
            self.stats.wall_hits += 1;
        }
        if events.resumed {
            self.waited = 0;
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn game(&self) -> &Match {
        &self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Motion;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config("paddle_speed = 500.0\nbounce_boost = 0.0\n").unwrap();
        assert_eq!(config.paddle_speed, 500.0);
        assert_eq!(config.bounce_boost, 0.0);
        assert_eq!(config.arena_width, Config::default().arena_width);
    }

    #[test]
    fn test_parse_motion_model() {
        let raw = "[ball_motion]\nmodel = \"jerk\"\njerk = 0.5\nspeed = 250.0\n";
        let config = parse_config(raw).unwrap();
        assert_eq!(config.ball_motion, Motion::Jerk { jerk: 0.5, speed: 250.0 });
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        assert!(parse_config("ball_radius = -3.0").is_err());
        assert!(parse_config("fixed_dt = \"fast\"").is_err());
    }

    #[test]
    fn test_finger_dropout_and_mirroring() {
        let mut finger = SyntheticFinger::new(Vec2::new(25.0, 240.0), 640.0, Some(3), 1);
        finger.jitter = 0.0;
        finger.lag = 1.0;

        assert_eq!(finger.read(Vec2::new(100.0, 50.0)), Some(Vec2::new(100.0, 50.0)));
        assert!(finger.read(Vec2::new(100.0, 60.0)).is_some());
        assert_eq!(finger.read(Vec2::new(100.0, 70.0)), None);
        assert_eq!(finger.read(Vec2::new(100.0, 80.0)), Some(Vec2::new(100.0, 80.0)));
    }

    #[test]
    fn test_zero_fps_rejected() {
        let options = Options {
            fps: 0.0,
            ..Options::default()
        };
        assert!(Session::new(Config::default(), &options).is_err());
    }

    #[test]
    fn test_serve_waits_for_delay() {
        let options = Options {
            serve_delay: 5,
            ..Options::default()
        };
        // Frozen paddles guarantee the serve goes in
        let config = Config {
            paddle_speed: 0.0,
            paddle_boost: 0.0,
            ..Config::default()
        };
        let mut session = Session::new(config, &options).unwrap();

        // Run until the first goal
        let mut guard = 0;
        while session.tick().goal.is_none() {
            guard += 1;
            assert!(guard < 10_000, "no goal scored");
        }
        assert!(session.game().is_paused());

        for _ in 0..5 {
            assert!(!session.tick().resumed);
        }
        assert!(session.tick().resumed);
        assert!(!session.game().is_paused());
        assert_eq!(session.stats().goals, 1);
    }

    #[test]
    fn test_ai_vs_ai_session_reports_stats() {
        let options = Options {
            ai_vs_ai: true,
            serve_delay: 0,
            ..Options::default()
        };
        let mut session = Session::new(Config::default(), &options).unwrap();
        for _ in 0..600 {
            session.tick();
        }

        let stats = session.stats();
        assert_eq!(stats.frames, 600);
        assert_eq!(stats.dropped_readings, 0);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.score.left + snapshot.score.right, stats.goals);
        assert!(stats.wall_hits > 0);
    }
}
