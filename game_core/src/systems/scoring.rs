use crate::{Ball, Events, GameMap, Goal, Score};
use hecs::World;

/// Check if ball left the arena through a goal line and award the point
pub fn check_scoring(world: &mut World, map: &GameMap, score: &mut Score, events: &mut Events) -> Option<Goal> {
    let goal = world
        .query::<&Ball>()
        .iter()
        .find_map(|(_e, ball)| ball.check_scored(map.width))?;

    let scorer = goal.scorer();
    score.award(scorer);
    events.goal = Some(goal);
    tracing::info!(?goal, ?scorer, left = score.left, right = score.right, "point scored");
    Some(goal)
}
