use hecs::World;

use crate::components::*;
use crate::control::Controller;
use crate::{Config, GameRng};

/// Put the ball and both paddles back at their origins for a new round
pub fn reset_round(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config.ball_origin(), &mut rng.0);
    }

    for (_entity, (paddle, intent, controller)) in
        world.query_mut::<(&mut Paddle, &mut PaddleIntent, Option<&mut Controller>)>()
    {
        paddle.reset(config.paddle_origin(paddle.side));
        *intent = PaddleIntent::new();
        if let Some(controller) = controller {
            controller.0.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Scripted;
    use crate::kinematics::Body;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_reset_round_restores_origins() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut world = World::new();

        let mut paddle = Paddle::from_config(&config, Side::Right).unwrap();
        paddle.body.pos.y = 7.0;
        paddle.body.kick(30.0);
        let paddle_entity = create_paddle(&mut world, paddle, Controller::new(Scripted::new(vec![1])));
        world.insert_one(paddle_entity, PaddleIntent::moving(1)).unwrap();

        let mut ball = Ball::from_config(&config, Vec2::new(3.0, 3.0), Vec2::new(-1.0, 0.0)).unwrap();
        ball.body.kick(5.0);
        let ball_entity = create_ball(&mut world, ball);

        reset_round(&mut world, &config, &mut rng);

        let paddle = world.get::<&Paddle>(paddle_entity).unwrap();
        assert_eq!(paddle.body, Body::new(config.paddle_origin(Side::Right), Vec2::ZERO));
        assert_eq!(*world.get::<&PaddleIntent>(paddle_entity).unwrap(), PaddleIntent::new());

        let ball = world.get::<&Ball>(ball_entity).unwrap();
        assert_eq!(ball.pos(), config.ball_origin());
        assert_eq!(ball.body.boost, 0.0);
        assert!(ball.vel().x != 0.0 && ball.vel().y != 0.0);
    }
}
