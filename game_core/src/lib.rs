pub mod components;
pub mod config;
pub mod control;
pub mod error;
pub mod game;
pub mod kinematics;
pub mod map;
pub mod params;
pub mod pointer;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use control::{AiPredictive, Controller, HumanPointer, PaddleController, Scripted};
pub use error::ConfigError;
pub use game::Match;
pub use kinematics::{Body, Decay, Limits, Motion};
pub use map::GameMap;
pub use params::*;
pub use pointer::PointerSmoother;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use kinematics::sanitize_dt;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// While the round is paused the frame only watches for the resume signal.
/// Otherwise `dt` is split into fixed micro-steps; a goal ends the frame,
/// resets every entity and pauses the round.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    round: &mut RoundState,
    rng: &mut GameRng,
    frame: &FrameInput,
) {
    events.clear();

    if round.is_paused() {
        if frame.resume {
            *round = RoundState::InProgress;
            events.resumed = true;
            tracing::info!(left = score.left, right = score.right, "round resumed");
        }
        return;
    }

    let dt = sanitize_dt(frame.dt);
    if dt == 0.0 && frame.dt != 0.0 {
        tracing::warn!(dt = frame.dt, "ignoring invalid frame time");
    }

    // Clamp dt to prevent large jumps
    let clamped_dt = dt.min(config.max_dt);

    // Equal micro-steps no longer than fixed_dt, bounded per frame
    let steps = micro_steps(clamped_dt, config.fixed_dt);
    let step_dt = if steps == 0 { 0.0 } else { clamped_dt / steps as f32 };
    for i in 1..=steps {
        let step_time = Time {
            dt: step_dt,
            now: time.now + step_dt * i as f32,
        };

        // 1. Controllers choose paddle intents
        steer_paddles(world, frame.pointer);

        // 2. Move paddles based on intents
        move_paddles(world, &step_time);

        // 3. Move ball
        move_ball(world, &step_time);

        // 4. Walls, then ball vs paddles
        check_collisions(world, map, config, events);

        // 5. Ball crossed a goal line
        if check_scoring(world, map, score, events).is_some() {
            reset_round(world, config, rng);
            *round = RoundState::PausedBetweenRounds;
            break;
        }
    }

    time.dt = clamped_dt;
    time.now += clamped_dt;
}

/// Number of micro-steps that cover `dt` without exceeding `fixed_dt`
fn micro_steps(dt: f32, fixed_dt: f32) -> u32 {
    if dt <= 0.0 {
        return 0;
    }
    // NaN casts to 0 and infinity saturates, so the cap also covers bad input
    ((dt / fixed_dt).ceil() as u32).clamp(1, Params::MAX_SUBSTEPS)
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle, controller: Controller) -> hecs::Entity {
    world.spawn((paddle, PaddleIntent::new(), controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
