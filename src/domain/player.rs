use serde::{Deserialize, Serialize};

use crate::domain::PlayerName;

/// Состояние игрока внутри одной партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: PlayerName,
    /// Цвет из палитры, выдаётся при входе и больше не меняется.
    pub color: String,
    /// Сколько голосов "против" получил игрок.
    pub votes: u32,
    /// Против кого проголосовал сам игрок. `None` — ещё не голосовал.
    pub voted_against: Option<PlayerName>,
}

impl Player {
    pub fn new(name: impl Into<PlayerName>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            votes: 0,
            voted_against: None,
        }
    }

    pub fn has_voted(&self) -> bool {
        self.voted_against.is_some()
    }
}
