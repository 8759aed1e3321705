//! Scoring module - score tracking and check_scoring system

use bevy::prelude::*;

use crate::ball::Ball;
use crate::events::{EventBus, GameEvent};
use crate::paddle::Side;
use crate::world::Arena;

/// Score resource tracking left/right points
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Declared winning score. Reaching it is announced once per side; the match
/// keeps going.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct WinningScore {
    pub target: u32,
    pub announced: Vec<Side>,
}

impl WinningScore {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            announced: Vec::new(),
        }
    }

    /// Sides that have reached the target and not been announced yet
    pub fn newly_reached(&mut self, score: &Score) -> Vec<Side> {
        let mut reached = Vec::new();
        for side in Side::BOTH {
            if score.get(side) >= self.target && !self.announced.contains(&side) {
                self.announced.push(side);
                reached.push(side);
            }
        }
        reached
    }
}

/// Which side scores if the ball is out of bounds.
/// Past the left edge is a point for the right side, and vice versa.
pub fn out_of_bounds(ball: &Ball, arena: &Arena) -> Option<Side> {
    if ball.position.x < 0.0 {
        Some(Side::Right)
    } else if ball.position.x > arena.width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Award a point and re-serve if the ball has left the court
pub fn score_ball(ball: &mut Ball, score: &mut Score, arena: &Arena) -> Option<Side> {
    let scorer = out_of_bounds(ball, arena)?;
    score.award(scorer);
    ball.reset();
    Some(scorer)
}

/// Check if the ball left the court and award points
pub fn check_scoring(
    arena: Res<Arena>,
    mut score: ResMut<Score>,
    mut bus: ResMut<EventBus>,
    mut balls: Query<&mut Ball>,
) {
    for mut ball in &mut balls {
        // Only take `&mut` on a point, so `Score` reads as changed only then
        if out_of_bounds(&ball, &arena).is_none() {
            continue;
        }
        if let Some(scorer) = score_ball(&mut ball, &mut score, &arena) {
            bus.emit(GameEvent::Point {
                scorer,
                score_left: score.left,
                score_right: score.right,
            });
        }
    }
}

/// Announce when a side first reaches the winning score
pub fn announce_winning_score(
    score: Res<Score>,
    mut winning: ResMut<WinningScore>,
    mut bus: ResMut<EventBus>,
) {
    if !score.is_changed() {
        return;
    }
    for side in winning.newly_reached(&score) {
        bus.emit(GameEvent::WinningScoreReached {
            side,
            score: score.get(side),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, vx: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(350.0, 250.0), 7.0, 2.0);
        ball.position = Vec2::new(x, 120.0);
        ball.velocity = Vec2::new(vx, -1.5);
        ball
    }

    #[test]
    fn test_past_right_edge_scores_left() {
        let arena = Arena::default();
        let mut score = Score::default();
        let mut ball = ball_at(701.0, 2.0);

        assert_eq!(score_ball(&mut ball, &mut score, &arena), Some(Side::Left));
        assert_eq!(score, Score { left: 1, right: 0 });
        assert_eq!(ball.position, Vec2::new(350.0, 250.0));
        assert_eq!(ball.velocity, Vec2::new(-2.0, 0.0));
    }

    #[test]
    fn test_past_left_edge_scores_right() {
        let arena = Arena::default();
        let mut score = Score::default();
        let mut ball = ball_at(-0.5, -2.0);

        assert_eq!(score_ball(&mut ball, &mut score, &arena), Some(Side::Right));
        assert_eq!(score, Score { left: 0, right: 1 });
        assert_eq!(ball.velocity, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_on_the_edge_is_still_in_play() {
        let arena = Arena::default();
        let mut score = Score::default();

        let mut ball = ball_at(0.0, -2.0);
        assert_eq!(score_ball(&mut ball, &mut score, &arena), None);
        let mut ball = ball_at(700.0, 2.0);
        assert_eq!(score_ball(&mut ball, &mut score, &arena), None);
        assert_eq!(score, Score::default());
    }

    #[test]
    fn test_reset_flips_direction_unconditionally() {
        // Leaving on the right while (oddly) heading left still flips the sign
        let arena = Arena::default();
        let mut score = Score::default();
        let mut ball = ball_at(705.0, -2.0);

        score_ball(&mut ball, &mut score, &arena);
        assert_eq!(ball.velocity.x, 2.0);
    }

    #[test]
    fn test_winning_score_announced_once() {
        let mut winning = WinningScore::new(2);
        let mut score = Score { left: 1, right: 0 };
        assert!(winning.newly_reached(&score).is_empty());

        score.left = 2;
        assert_eq!(winning.newly_reached(&score), vec![Side::Left]);

        score.left = 3;
        score.right = 2;
        assert_eq!(winning.newly_reached(&score), vec![Side::Right]);
        assert!(winning.newly_reached(&score).is_empty());
    }

    #[derive(Resource, Default)]
    struct ScoreChanges(u32);

    fn count_score_changes(score: Res<Score>, mut changes: ResMut<ScoreChanges>) {
        if score.is_changed() {
            changes.0 += 1;
        }
    }

    #[test]
    fn test_score_changes_only_on_a_point() {
        let mut app = App::new();
        app.insert_resource(Arena::default())
            .insert_resource(EventBus::new())
            .init_resource::<Score>()
            .init_resource::<ScoreChanges>()
            .add_systems(Update, (check_scoring, count_score_changes).chain());
        let ball = app
            .world_mut()
            .spawn(Ball::new(Vec2::new(350.0, 250.0), 7.0, 2.0))
            .id();

        // First run sees the freshly inserted resource
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(app.world().resource::<ScoreChanges>().0, 1);

        app.world_mut().get_mut::<Ball>(ball).unwrap().position.x = 701.0;
        app.update();
        app.update();

        assert_eq!(app.world().resource::<ScoreChanges>().0, 2);
        assert_eq!(*app.world().resource::<Score>(), Score { left: 1, right: 0 });
    }
}
