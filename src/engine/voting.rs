use tracing::info;

use crate::domain::{Game, GameStage};
use crate::engine::errors::GameError;
use crate::engine::lobby::invalid_stage;
use crate::engine::GameAction;

/// Голос игрока `name` против игрока `against`.
///
/// Каждый голосует ровно один раз, против себя тоже можно.
/// Когда сумма полученных голосов равна числу игроков, партия уходит в Over.
/// Победителя движок не считает — это дело того, кто показывает результат.
pub fn vote_against(game: &mut Game, name: &str, against: &str) -> Result<GameStage, GameError> {
    if game.stage.is_terminal() {
        return Err(invalid_stage(game, GameAction::VoteAgainst));
    }
    if !game.has_player(name) {
        return Err(unknown_player(game, name));
    }
    if game.stage != GameStage::Voting {
        return Err(invalid_stage(game, GameAction::VoteAgainst));
    }
    if !game.has_player(against) {
        return Err(unknown_player(game, against));
    }

    let game_id = game.id;
    let voter = game
        .players
        .get_mut(name)
        .ok_or_else(|| GameError::UnknownPlayer {
            game_id,
            name: name.to_string(),
        })?;
    if voter.has_voted() {
        return Err(GameError::AlreadyVoted {
            game_id,
            name: name.to_string(),
        });
    }
    voter.voted_against = Some(against.to_string());

    // Цель проверена выше; `&mut Game` не даёт никому удалить её до записи.
    let target = game
        .players
        .get_mut(against)
        .ok_or_else(|| GameError::UnknownPlayer {
            game_id,
            name: against.to_string(),
        })?;
    target.votes += 1;
    info!(game_id, player = name, against, "vote recorded");

    if game.total_votes() as usize == game.player_count() {
        game.stage = GameStage::Over;
        info!(game_id, "all votes in, game over");
    }

    Ok(game.stage)
}

fn unknown_player(game: &Game, name: &str) -> GameError {
    GameError::UnknownPlayer {
        game_id: game.id,
        name: name.to_string(),
    }
}
