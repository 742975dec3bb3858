use tracing::{debug, info};

use crate::domain::{Game, GameStage, Stroke};
use crate::engine::errors::GameError;
use crate::engine::lobby::invalid_stage;
use crate::engine::GameAction;

/// Сколько раз каждый игрок рисует за партию по умолчанию.
pub const DEFAULT_ROUNDS_PER_PLAYER: u32 = 2;

/// Принять штрих от игрока, чей сейчас ход.
///
/// После `player_count * rounds_per_player` штрихов партия уходит в Voting.
/// Возвращает стадию после хода.
pub fn draw_stroke(
    game: &mut Game,
    name: &str,
    stroke: Stroke,
    rounds_per_player: u32,
) -> Result<GameStage, GameError> {
    if game.stage.is_terminal() {
        return Err(invalid_stage(game, GameAction::DrawStroke));
    }
    if !game.has_player(name) {
        return Err(GameError::UnknownPlayer {
            game_id: game.id,
            name: name.to_string(),
        });
    }
    if game.stage != GameStage::Started {
        return Err(invalid_stage(game, GameAction::DrawStroke));
    }

    let current = game.current_turn().unwrap_or_default();
    if current != name {
        return Err(GameError::NotYourTurn {
            game_id: game.id,
            name: name.to_string(),
            expected: current.to_string(),
        });
    }

    debug!(game_id = game.id, player = name, points = stroke.len(), turn = game.turn_index, "stroke accepted");
    game.strokes.push(stroke);
    game.turn_index += 1;

    let total_turns = game.player_count() * rounds_per_player as usize;
    if game.turn_index >= total_turns {
        game.stage = GameStage::Voting;
        info!(game_id = game.id, strokes = game.strokes.len(), "drawing finished, voting opened");
    }

    Ok(game.stage)
}
