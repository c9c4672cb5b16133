use crate::map::{Aabb, Axis};
use crate::{Ball, Config, Events, GameMap, Paddle, PaddleIntent};
use hecs::World;

/// Bounce the ball off a paddle it touches while heading toward it.
///
/// Velocity and acceleration are inverted, the bounce boost is injected and
/// the ball is moved flush against the face it came from, so the next step
/// does not register the same hit again. A ball whose centre is over the
/// paddle's width came in over an end cap and goes back out the same way;
/// everything else, corners included, leaves through a side face.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Aabb, buffer: f32, boost: f32) -> bool {
    let pos = ball.pos();
    if !paddle.touches_circle(pos, ball.radius, buffer) {
        return false;
    }

    let offset = pos - paddle.center();
    let half = paddle.half_extents();
    let over_cap = offset.x.abs() <= half.x && offset.y.abs() > half.y;
    let closing = if over_cap {
        offset.y * ball.vel().y < 0.0
    } else {
        offset.x * ball.vel().x < 0.0
    };
    if !closing {
        return false;
    }

    ball.body.vel = -ball.body.vel;
    ball.body.acc = -ball.body.acc;
    ball.body.kick(boost);
    if over_cap {
        ball.body.pos.y = if offset.y < 0.0 {
            paddle.min.y - ball.radius
        } else {
            paddle.max.y + ball.radius
        };
    } else {
        ball.body.pos.x = if offset.x < 0.0 {
            paddle.min.x - ball.radius
        } else {
            paddle.max.x + ball.radius
        };
    }
    true
}

/// Keep ball and paddles inside the arena, then resolve ball/paddle hits
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Top/bottom walls; the side walls are goal lines
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(contact) = map.reflect(&mut ball.body, ball.radius, Axis::Y) {
            tracing::debug!(?contact, y = ball.body.pos.y, "ball hit wall");
            events.ball_hit_wall = true;
        }
    }

    // Paddles stop at the walls and bounce their intent back
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        if map.clamp_span(&mut paddle.body.pos.y, paddle.height).is_some() {
            intent.bounce();
            paddle.body.vel.y = -paddle.body.vel.y;
        }
    }

    // Collect paddle boxes without holding borrows
    let paddles: Vec<_> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, Aabb::from_corner_size(p.pos(), p.size())))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for (side, aabb) in &paddles {
            if bounce_off_paddle(ball, aabb, config.collision_buffer, config.bounce_boost) {
                tracing::debug!(?side, x = ball.body.pos.x, "ball hit paddle");
                events.ball_hit_paddle = true;
                break;
            }
        }
    }
}
