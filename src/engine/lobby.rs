use tracing::info;

use crate::domain::{Game, GameStage, Palette, Player};
use crate::engine::errors::GameError;
use crate::engine::{GameAction, RandomSource};

/// Чем закончился вход в партию.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Новый игрок добавлен.
    Joined,
    /// Игрок уже был в партии (переподключение), ничего не изменилось.
    Rejoined,
}

/// Имя игрока не может быть пустым или из одних пробелов: в снапшоте
/// пустая строка в `voted_against` означает "ещё не голосовал".
pub fn validate_name(name: &str) -> Result<(), GameError> {
    if name.trim().is_empty() {
        return Err(GameError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Вход игрока в партию.
///
/// Повторный вход существующего игрока идемпотентен и разрешён в любой
/// стадии, кроме Over. Новый игрок может войти только в Waiting и получает
/// цвет `palette[player_count]`.
pub fn join_player(game: &mut Game, name: &str, palette: &Palette) -> Result<JoinOutcome, GameError> {
    validate_name(name)?;
    if game.stage.is_terminal() {
        return Err(invalid_stage(game, GameAction::Join));
    }
    if game.has_player(name) {
        return Ok(JoinOutcome::Rejoined);
    }
    if game.stage != GameStage::Waiting {
        return Err(invalid_stage(game, GameAction::Join));
    }

    let color = palette
        .color_for(game.player_count())
        .ok_or(GameError::GameFull {
            game_id: game.id,
            capacity: palette.len(),
        })?;

    game.players
        .insert(name.to_string(), Player::new(name, color));
    game.turn_order.push(name.to_string());

    info!(game_id = game.id, player = name, color, players = game.player_count(), "player joined");
    Ok(JoinOutcome::Joined)
}

/// Старт партии владельцем.
///
/// Порядок проверок: игрок известен → это владелец → стадия Waiting.
/// Порядок ходов перемешивается равномерно и больше не меняется.
pub fn start_game<R: RandomSource>(game: &mut Game, name: &str, rng: &mut R) -> Result<(), GameError> {
    if game.stage.is_terminal() {
        return Err(invalid_stage(game, GameAction::Start));
    }
    if !game.has_player(name) {
        return Err(GameError::UnknownPlayer {
            game_id: game.id,
            name: name.to_string(),
        });
    }
    if !game.is_owner(name) {
        return Err(GameError::Unauthorized {
            game_id: game.id,
            name: name.to_string(),
        });
    }
    if game.stage != GameStage::Waiting {
        return Err(invalid_stage(game, GameAction::Start));
    }

    rng.shuffle(&mut game.turn_order);
    game.turn_index = 0;
    game.stage = GameStage::Started;

    info!(game_id = game.id, turn_order = ?game.turn_order, "game started");
    Ok(())
}

pub(crate) fn invalid_stage(game: &Game, action: GameAction) -> GameError {
    GameError::InvalidStage {
        game_id: game.id,
        action,
        stage: game.stage,
    }
}
