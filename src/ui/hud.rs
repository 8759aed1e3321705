//! HUD components and systems (score display)

use bevy::prelude::*;

use crate::constants::*;
use crate::paddle::Side;
use crate::scoring::Score;
use crate::settings::GameSettings;
use crate::world::Arena;

/// Score text for one side
#[derive(Component)]
pub struct ScoreText(pub Side);

/// Screen position of a side's score text (top-left corner)
pub fn score_text_position(side: Side, arena: &Arena) -> Vec2 {
    let x = match side {
        Side::Left => arena.width / 4.0,
        Side::Right => arena.width * 3.0 / 4.0,
    };
    Vec2::new(x, SCORE_TEXT_TOP)
}

/// Spawn both score texts
pub fn spawn_score_board(
    mut commands: Commands,
    arena: Res<Arena>,
    settings: Res<GameSettings>,
    asset_server: Res<AssetServer>,
) {
    let font = settings
        .score_font
        .as_ref()
        .map(|path| asset_server.load(path.clone()))
        .unwrap_or_default();

    for side in Side::BOTH {
        let position = score_text_position(side, &arena);
        commands.spawn((
            Text::new("0"),
            TextFont {
                font: font.clone(),
                font_size: settings.score_font_size,
                ..default()
            },
            TextColor(SCORE_COLOR),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(position.x),
                top: Val::Px(position.y),
                ..default()
            },
            ScoreText(side),
        ));
    }
}

/// Update score display
pub fn update_score_text(score: Res<Score>, mut texts: Query<(&mut Text, &ScoreText)>) {
    if !score.is_changed() {
        return;
    }
    for (mut text, ScoreText(side)) in &mut texts {
        text.0 = score.get(*side).to_string();
    }
}
