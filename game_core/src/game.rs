use hecs::{Entity, World};

use crate::components::{Ball, Goal, Paddle, Side};
use crate::config::Config;
use crate::control::{AiPredictive, Controller, HumanPointer};
use crate::error::ConfigError;
use crate::map::GameMap;
use crate::resources::{Events, FrameInput, GameRng, RoundState, Score, Time};
use crate::snapshot::Snapshot;
use crate::{create_ball, create_paddle, step};

/// One Pong match: the world plus every resource `step` needs.
///
/// The host calls [`Match::step`] once per rendered frame and reads the
/// result back through [`Match::snapshot`].
pub struct Match {
    world: World,
    time: Time,
    map: GameMap,
    config: Config,
    score: Score,
    events: Events,
    round: RoundState,
    rng: GameRng,
    last_goal: Option<Goal>,
    ball: Entity,
    left: Entity,
    right: Entity,
}

impl Match {
    /// Pointer-driven player on the left, predictive AI on the right
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        let left = Controller::new(HumanPointer::new(config.finger_sensitivity));
        let right = Controller::new(AiPredictive);
        Self::with_controllers(config, seed, left, right)
    }

    pub fn with_controllers(
        config: Config,
        seed: u64,
        left: Controller,
        right: Controller,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left = create_paddle(&mut world, Paddle::from_config(&config, Side::Left)?, left);
        let right = create_paddle(&mut world, Paddle::from_config(&config, Side::Right)?, right);

        let origin = config.ball_origin();
        let mut ball = Ball::from_config(&config, origin, glam::Vec2::ZERO)?;
        ball.reset(origin, &mut rng.0);
        let ball = create_ball(&mut world, ball);

        tracing::debug!(seed, width = config.arena_width, height = config.arena_height, "match created");

        Ok(Self {
            world,
            time: Time::new(0.0, 0.0),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            round: RoundState::InProgress,
            rng,
            last_goal: None,
            ball,
            left,
            right,
        })
    }

    /// Advance one frame and report what happened during it
    pub fn step(&mut self, frame: &FrameInput) -> &Events {
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.round,
            &mut self.rng,
            frame,
        );

        if let Some(goal) = self.events.goal {
            self.last_goal = Some(goal);
        } else if self.events.resumed {
            self.last_goal = None;
        }

        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world, self.score, self.round, self.last_goal, self.time.now)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn round(&self) -> RoundState {
        self.round
    }

    pub fn is_paused(&self) -> bool {
        self.round.is_paused()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn last_goal(&self) -> Option<Goal> {
        self.last_goal
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.paddle_entity(side)).ok().map(|p| *p)
    }

    /// Direct access for hosts that script set pieces
    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        self.world.get::<&mut Ball>(self.ball).ok()
    }

    pub fn paddle_mut(&mut self, side: Side) -> Option<hecs::RefMut<'_, Paddle>> {
        let entity = self.paddle_entity(side);
        self.world.get::<&mut Paddle>(entity).ok()
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Scripted;
    use glam::Vec2;

    fn idle_match(seed: u64) -> Match {
        Match::with_controllers(
            Config::new(),
            seed,
            Controller::new(Scripted::idle()),
            Controller::new(Scripted::idle()),
        )
        .unwrap()
    }

    #[test]
    fn test_new_match_starts_at_origins() {
        let game = Match::new(Config::new(), 7).unwrap();
        let config = game.config().clone();

        let ball = game.ball().unwrap();
        assert_eq!(ball.pos(), config.ball_origin());
        assert_eq!(ball.vel().x.abs(), ball.vel().y.abs());
        assert!(ball.vel().x != 0.0);
        assert_eq!(game.paddle(Side::Left).unwrap().pos(), config.paddle_origin(Side::Left));
        assert_eq!(game.paddle(Side::Right).unwrap().pos(), config.paddle_origin(Side::Right));
        assert_eq!(game.score(), Score::new());
        assert!(!game.is_paused());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::new();
        config.ball_radius = -1.0;
        assert!(Match::new(config, 1).is_err());
    }

    #[test]
    fn test_goal_pauses_until_resume() {
        let mut game = idle_match(3);
        {
            let mut ball = game.ball_mut().unwrap();
            ball.body.pos = Vec2::new(5.0, 240.0);
            ball.body.vel = Vec2::new(-200.0, 0.0);
        }

        let events = game.step(&FrameInput::tick(0.1)).clone();
        assert_eq!(events.goal, Some(Goal::Left));
        assert_eq!(game.score(), Score { left: 0, right: 1 });
        assert!(game.is_paused());
        assert_eq!(game.last_goal(), Some(Goal::Left));
        assert_eq!(game.ball().unwrap().pos(), game.config().ball_origin());

        // Paused frames move nothing
        let before = game.snapshot();
        game.step(&FrameInput::tick(0.5));
        assert_eq!(game.snapshot().ball, before.ball);
        assert!(game.is_paused());

        let events = game.step(&FrameInput::tick(0.016).with_resume()).clone();
        assert!(events.resumed);
        assert!(!game.is_paused());
        assert_eq!(game.last_goal(), None);
        assert_eq!(game.snapshot().headline(), None);
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = Match::new(Config::new(), 99).unwrap();
        let mut b = Match::new(Config::new(), 99).unwrap();
        for i in 0..600 {
            let pointer = Some(Vec2::new(20.0, (i % 480) as f32));
            let frame = FrameInput::tick(1.0 / 60.0).with_pointer(pointer).with_resume();
            a.step(&frame);
            b.step(&frame);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_paddle_mut_moves_paddle() {
        let mut game = idle_match(1);
        if let Some(mut paddle) = game.paddle_mut(Side::Right) {
            paddle.body.pos.y = 12.0;
        }
        assert_eq!(game.paddle(Side::Right).unwrap().pos().y, 12.0);
    }
}
