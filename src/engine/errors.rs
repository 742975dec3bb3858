use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{GameId, GameStage, PlayerName};
use crate::engine::actions::GameAction;

/// Плоский вид ошибки — то, что уходит клиенту как код.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    UnknownPlayer,
    Unauthorized,
    InvalidStage,
    NotYourTurn,
    AlreadyVoted,
    GameFull,
    RegistryFull,
    InvalidName,
}

/// Ошибки движка партии.
///
/// Все ошибки локальные и восстановимые: при ошибке партия не меняется
/// и рассылка не делается.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Партия {game_id} не найдена")]
    NotFound { game_id: GameId },

    #[error("Игрок '{name}' не участвует в партии {game_id}")]
    UnknownPlayer { game_id: GameId, name: PlayerName },

    #[error("Игрок '{name}' не управляет партией {game_id}")]
    Unauthorized { game_id: GameId, name: PlayerName },

    #[error("Действие {action} недопустимо в партии {game_id}: стадия {stage}")]
    InvalidStage {
        game_id: GameId,
        action: GameAction,
        stage: GameStage,
    },

    #[error("Сейчас не ход игрока '{name}' в партии {game_id}, ходит '{expected}'")]
    NotYourTurn {
        game_id: GameId,
        name: PlayerName,
        expected: PlayerName,
    },

    #[error("Игрок '{name}' уже проголосовал в партии {game_id}")]
    AlreadyVoted { game_id: GameId, name: PlayerName },

    #[error("В партии {game_id} нет свободных цветов (максимум игроков {capacity})")]
    GameFull { game_id: GameId, capacity: usize },

    #[error("Все идентификаторы партий заняты (всего {id_space})")]
    RegistryFull { id_space: u32 },

    #[error("Недопустимое имя игрока '{name}'")]
    InvalidName { name: PlayerName },
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::NotFound { .. } => ErrorKind::NotFound,
            GameError::UnknownPlayer { .. } => ErrorKind::UnknownPlayer,
            GameError::Unauthorized { .. } => ErrorKind::Unauthorized,
            GameError::InvalidStage { .. } => ErrorKind::InvalidStage,
            GameError::NotYourTurn { .. } => ErrorKind::NotYourTurn,
            GameError::AlreadyVoted { .. } => ErrorKind::AlreadyVoted,
            GameError::GameFull { .. } => ErrorKind::GameFull,
            GameError::RegistryFull { .. } => ErrorKind::RegistryFull,
            GameError::InvalidName { .. } => ErrorKind::InvalidName,
        }
    }
}
