use serde::{Deserialize, Serialize};

use crate::api::dto::GameSnapshot;
use crate::api::errors::ApiError;
use crate::domain::GameId;
use crate::engine::{GameError, RandomSource, SessionRegistry};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить снапшот партии.
    GetGame { game_id: GameId },

    /// Список активных партий (для лобби).
    ListGames,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Game(GameSnapshot),
    Games(Vec<GameId>),
}

pub fn run_query<R: RandomSource>(
    registry: &SessionRegistry<R>,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetGame { game_id } => registry
            .snapshot(game_id)
            .map(QueryResponse::Game)
            .ok_or_else(|| GameError::NotFound { game_id }.into()),
        Query::ListGames => Ok(QueryResponse::Games(registry.game_ids())),
    }
}
