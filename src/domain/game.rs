// src/domain/game.rs

use std::collections::BTreeMap;
use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::player::Player;
use crate::domain::stroke::Stroke;
use crate::domain::{GameId, PlayerName};

/// Стадия партии. Двигается только вперёд:
/// Waiting → Started → Voting → Over.
///
/// На проводе — число 0..=3, как ждёт клиент.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameStage {
    /// Партия создана, игроки могут входить.
    Waiting,
    /// Идёт рисование, новые игроки войти не могут.
    Started,
    /// Все штрихи нарисованы, игроки голосуют.
    Voting,
    /// Все проголосовали. Терминальная стадия.
    Over,
}

impl GameStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStage::Over)
    }

    pub fn code(self) -> u8 {
        match self {
            GameStage::Waiting => 0,
            GameStage::Started => 1,
            GameStage::Voting => 2,
            GameStage::Over => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(GameStage::Waiting),
            1 => Some(GameStage::Started),
            2 => Some(GameStage::Voting),
            3 => Some(GameStage::Over),
            _ => None,
        }
    }
}

impl Serialize for GameStage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for GameStage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        GameStage::from_code(code).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Unsigned(code.into()), &"stage code 0..=3")
        })
    }
}

impl fmt::Display for GameStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStage::Waiting => "waiting",
            GameStage::Started => "started",
            GameStage::Voting => "voting",
            GameStage::Over => "over",
        };
        f.write_str(s)
    }
}

/// Партия — корневой агрегат.
///
/// Подписчиков на уведомления здесь нет: они живут в `notify`,
/// партия ничего не знает о транспорте.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub stage: GameStage,
    /// Кто создал партию. Задаётся один раз и не меняется.
    pub owner: PlayerName,
    /// Игроки по имени. BTreeMap — чтобы перечисление было детерминированным.
    pub players: BTreeMap<PlayerName, Player>,
    /// Порядок ходов. До старта — порядок входа, при старте перемешивается
    /// и дальше фиксирован.
    pub turn_order: Vec<PlayerName>,
    /// Сколько штрихов уже принято. После старта всегда == strokes.len().
    pub turn_index: usize,
    /// Журнал штрихов, только дописывается.
    pub strokes: Vec<Stroke>,
}

impl Game {
    /// Новая партия в стадии Waiting, владелец — единственный игрок.
    pub fn new(id: GameId, owner: impl Into<PlayerName>, owner_color: impl Into<String>) -> Self {
        let owner = owner.into();
        let mut players = BTreeMap::new();
        players.insert(owner.clone(), Player::new(owner.clone(), owner_color));

        Self {
            id,
            stage: GameStage::Waiting,
            owner: owner.clone(),
            players,
            turn_order: vec![owner],
            turn_index: 0,
            strokes: Vec::new(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    pub fn is_owner(&self, name: &str) -> bool {
        self.owner == name
    }

    /// Чей сейчас ход: `turn_order[turn_index mod player_count]`.
    ///
    /// Имеет смысл только в стадии Started, в остальных — `None`.
    pub fn current_turn(&self) -> Option<&str> {
        if self.stage != GameStage::Started || self.turn_order.is_empty() {
            return None;
        }
        let idx = self.turn_index % self.player_count();
        self.turn_order.get(idx).map(String::as_str)
    }

    /// Сумма полученных голосов по всем игрокам.
    pub fn total_votes(&self) -> u32 {
        self.players.values().map(|p| p.votes).sum()
    }
}
