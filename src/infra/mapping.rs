use crate::api::dto::{GameSnapshot, PlayerDto};
use crate::domain::{Game, Player};

/// Маппинг игрока в DTO. Пустая строка в `voted_against` — ещё не голосовал.
pub fn player_to_dto(player: &Player) -> PlayerDto {
    PlayerDto {
        color: player.color.clone(),
        votes: player.votes,
        voted_against: player.voted_against.clone().unwrap_or_default(),
    }
}

/// Полный снапшот партии — единственное, что видят клиенты.
pub fn snapshot_of(game: &Game) -> GameSnapshot {
    GameSnapshot {
        id: game.id,
        stage: game.stage,
        owner: game.owner.clone(),
        players: game
            .players
            .iter()
            .map(|(name, p)| (name.clone(), player_to_dto(p)))
            .collect(),
        turn_order: game.turn_order.clone(),
        turn_index: game.turn_index,
        strokes: game.strokes.clone(),
    }
}
