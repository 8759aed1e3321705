//! Arena geometry, static scenery, and the screen-to-world mapping
//!
//! Game logic works in screen coordinates (origin top-left, y down). Bevy's
//! 2D camera is centered with y up, so everything drawn goes through
//! [`Arena::to_world`].

use bevy::prelude::*;

use crate::ball::Ball;
use crate::constants::*;
use crate::paddle::Paddle;
use crate::settings::GameSettings;

/// Playfield dimensions (matches the window size)
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::new(settings.window_width, settings.window_height)
    }

    /// Screen-space center of the playfield
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Map a screen-space point to world space
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    /// World-space center of a screen-space rectangle given by its top-left corner
    pub fn rect_to_world(&self, top_left: Vec2, size: Vec2) -> Vec2 {
        self.to_world(top_left + size / 2.0)
    }

    /// Filled segments of the dashed center line as (top-left, size), screen space
    pub fn center_line_segments(&self) -> Vec<(Vec2, Vec2)> {
        let slot_height = self.height / CENTER_LINE_SLOTS as f32;
        let x = self.width / 2.0 - CENTER_LINE_WIDTH / 2.0;

        (0..CENTER_LINE_SLOTS)
            .filter(|i| i % 2 == 1)
            .map(|i| {
                (
                    Vec2::new(x, i as f32 * slot_height),
                    Vec2::new(CENTER_LINE_WIDTH, slot_height),
                )
            })
            .collect()
    }
}

/// Marker for center line segments
#[derive(Component)]
pub struct CenterLine;

// ============================================================================
// Scenery spawning
// ============================================================================

/// Spawn the 2D camera and the dashed center divider
pub fn spawn_scenery(mut commands: Commands, arena: Res<Arena>) {
    commands.spawn(Camera2d);

    for (top_left, size) in arena.center_line_segments() {
        commands.spawn((
            Sprite::from_color(CENTER_LINE_COLOR, size),
            Transform::from_translation(arena.rect_to_world(top_left, size).extend(Z_CENTER_LINE)),
            CenterLine,
        ));
    }
}

/// Give the simulated paddles and ball something to draw.
/// Runs once after the court is spawned.
pub fn attach_visuals(
    mut commands: Commands,
    arena: Res<Arena>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    paddles: Query<(Entity, &Paddle)>,
    balls: Query<(Entity, &Ball)>,
) {
    for (entity, paddle) in &paddles {
        commands.entity(entity).insert((
            Sprite::from_color(PADDLE_COLOR, paddle.size),
            Transform::from_translation(
                arena.rect_to_world(paddle.position, paddle.size).extend(Z_PADDLE),
            ),
        ));
    }

    for (entity, ball) in &balls {
        commands.entity(entity).insert((
            Mesh2d(meshes.add(Circle::new(ball.radius))),
            MeshMaterial2d(materials.add(BALL_COLOR)),
            Transform::from_translation(arena.to_world(ball.position).extend(Z_BALL)),
        ));
    }
}

/// Copy simulated paddle and ball positions into their render transforms
pub fn sync_transforms(
    arena: Res<Arena>,
    mut paddles: Query<(&Paddle, &mut Transform), Without<Ball>>,
    mut balls: Query<(&Ball, &mut Transform), Without<Paddle>>,
) {
    for (paddle, mut transform) in &mut paddles {
        let world = arena.rect_to_world(paddle.position, paddle.size);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }

    for (ball, mut transform) in &mut balls {
        let world = arena.to_world(ball.position);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_world_maps_corners() {
        let arena = Arena::default();
        assert_eq!(arena.to_world(Vec2::ZERO), Vec2::new(-350.0, 250.0));
        assert_eq!(arena.to_world(Vec2::new(700.0, 500.0)), Vec2::new(350.0, -250.0));
        assert_eq!(arena.to_world(arena.center()), Vec2::ZERO);
    }

    #[test]
    fn test_rect_to_world_uses_rect_center() {
        let arena = Arena::default();
        // Left paddle at its default spawn
        let world = arena.rect_to_world(Vec2::new(10.0, 200.0), Vec2::new(20.0, 100.0));
        assert_eq!(world, Vec2::new(-330.0, 0.0));
    }

    #[test]
    fn test_center_line_draws_odd_slots() {
        let arena = Arena::default();
        let segments = arena.center_line_segments();

        assert_eq!(segments.len(), 12);
        let (first_pos, first_size) = segments[0];
        assert_eq!(first_pos, Vec2::new(345.0, 20.0));
        assert_eq!(first_size, Vec2::new(10.0, 20.0));

        let (last_pos, _) = segments[segments.len() - 1];
        assert_eq!(last_pos.y, 23.0 * 20.0);
    }
}
