use glam::Vec2;
use hecs::World;

use crate::components::*;
use crate::control::{ControlInput, Controller};

/// Let each paddle's controller pick its direction intent for this step
pub fn steer_paddles(world: &mut World, pointer: Option<Vec2>) {
    let input = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ControlInput {
            ball_pos: ball.pos(),
            ball_vel: ball.vel(),
            pointer,
        })
        .unwrap_or(ControlInput {
            pointer,
            ..ControlInput::default()
        });

    for (_entity, (paddle, intent, controller)) in
        world.query_mut::<(&mut Paddle, &mut PaddleIntent, &mut Controller)>()
    {
        // None holds the current intent
        if let Some(dir) = controller.0.steer(paddle, &input) {
            if intent.set(dir) {
                paddle.body.kick(paddle.boost);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{AiPredictive, HumanPointer, Scripted};
    use crate::systems::check_collisions;
    use crate::{create_ball, create_paddle, Config, Events, GameMap};

    fn paddle_intent(world: &World, side: Side) -> i8 {
        world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .find(|(_e, (p, _))| p.side == side)
            .map(|(_e, (_, intent))| intent.dir)
            .unwrap()
    }

    #[test]
    fn test_ai_steers_toward_ball() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Paddle::from_config(&config, Side::Right).unwrap(), Controller::new(AiPredictive));
        let ball = Ball::from_config(&config, Vec2::new(320.0, 20.0), Vec2::new(-100.0, 0.0)).unwrap();
        create_ball(&mut world, ball);

        steer_paddles(&mut world, None);

        assert_eq!(paddle_intent(&world, Side::Right), -1);
    }

    #[test]
    fn test_pointer_steers_human_and_boosts_on_launch() {
        let config = Config::new();
        let mut world = World::new();
        let paddle = Paddle::from_config(&config, Side::Left).unwrap();
        let below = paddle.center() + Vec2::new(0.0, 50.0);
        create_paddle(&mut world, paddle, Controller::new(HumanPointer::new(10.0)));

        steer_paddles(&mut world, Some(below));

        assert_eq!(paddle_intent(&world, Side::Left), 1);
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.body.boost, config.paddle_boost);
        }

        // Lost reading: intent is held
        steer_paddles(&mut world, None);
        assert_eq!(paddle_intent(&world, Side::Left), 1);
    }

    #[test]
    fn test_steering_without_ball() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Paddle::from_config(&config, Side::Left).unwrap(), Controller::new(Scripted::new(vec![-1])));

        steer_paddles(&mut world, None);

        assert_eq!(paddle_intent(&world, Side::Left), -1);
    }

    #[test]
    fn test_paddle_pinned_at_wall_gets_no_repeat_boost() {
        let config = Config::new();
        let map = GameMap::from_config(&config);
        let mut events = Events::new();
        let mut world = World::new();
        let entity = create_paddle(
            &mut world,
            Paddle::from_config(&config, Side::Left).unwrap(),
            Controller::new(Scripted::new(vec![-1; 8])),
        );

        steer_paddles(&mut world, None);
        assert_eq!(world.get::<&Paddle>(entity).unwrap().body.boost, config.paddle_boost);

        for _ in 0..4 {
            {
                let mut paddle = world.get::<&mut Paddle>(entity).unwrap();
                paddle.body.boost = 0.0;
                paddle.body.pos.y = -5.0;
            }
            check_collisions(&mut world, &map, &config, &mut events);
            assert_eq!(paddle_intent(&world, Side::Left), 1, "wall turns the paddle");

            steer_paddles(&mut world, None);
            assert_eq!(paddle_intent(&world, Side::Left), -1);
            assert_eq!(world.get::<&Paddle>(entity).unwrap().body.boost, 0.0, "held push is not a launch");
        }
    }
}
