use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{GameId, GameStage, PlayerName, Stroke};

/// DTO игрока внутри снапшота. Имя — ключ в `GameSnapshot::players`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub color: String,
    /// Сколько голосов "против" получил игрок.
    pub votes: u32,
    /// Против кого голосовал. Пустая строка — ещё не голосовал.
    pub voted_against: String,
}

/// Полное состояние партии, которое получают подписчики после каждой мутации.
///
/// Дельт нет: клиент всегда получает снапшот целиком.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    pub id: GameId,
    pub stage: GameStage,
    pub owner: PlayerName,
    pub players: BTreeMap<PlayerName, PlayerDto>,
    /// Порядок ходов. Имеет смысл только после старта.
    pub turn_order: Vec<PlayerName>,
    pub turn_index: usize,
    pub strokes: Vec<Stroke>,
}

impl GameSnapshot {
    /// Чей ход по снапшоту — то же правило, что и в движке.
    pub fn current_turn(&self) -> Option<&str> {
        if self.stage != GameStage::Started || self.turn_order.is_empty() {
            return None;
        }
        self.turn_order
            .get(self.turn_index % self.players.len().max(1))
            .map(String::as_str)
    }
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,
    /// Команда вернула снапшот (NewGame / JoinGame).
    Game(GameSnapshot),
}
