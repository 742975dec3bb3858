use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Palette;
use crate::engine::turns::DEFAULT_ROUNDS_PER_PLAYER;

/// Диапазон id партий по умолчанию: `0..10000`.
pub const DEFAULT_ID_SPACE: u32 = 10_000;

/// Глубина очереди снапшотов для одного подписчика по умолчанию.
pub const DEFAULT_SUBSCRIBER_BUFFER: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректный конфиг: {0}")]
    Invalid(String),
}

/// Настройки движка.
///
/// Все поля необязательны в JSON — отсутствующие берутся из `Default`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Сколько раз каждый игрок рисует до голосования.
    pub rounds_per_player: u32,
    /// Id партий выдаются из `0..id_space`.
    pub id_space: u32,
    /// Цвета игроков. Длина палитры — максимум игроков в партии.
    pub palette: Palette,
    /// Глубина очереди `ChannelSubscriber`.
    pub subscriber_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rounds_per_player: DEFAULT_ROUNDS_PER_PLAYER,
            id_space: DEFAULT_ID_SPACE,
            palette: Palette::default(),
            subscriber_buffer: DEFAULT_SUBSCRIBER_BUFFER,
        }
    }
}

impl EngineConfig {
    /// Разобрать конфиг из JSON и сразу провалидировать.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds_per_player == 0 {
            return Err(ConfigError::Invalid("rounds_per_player = 0".into()));
        }
        if self.id_space == 0 {
            return Err(ConfigError::Invalid("id_space = 0".into()));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::Invalid("palette пустая".into()));
        }
        if let Some(color) = self.palette.first_duplicate() {
            return Err(ConfigError::Invalid(format!(
                "цвет '{color}' повторяется в palette"
            )));
        }
        if self.subscriber_buffer == 0 {
            return Err(ConfigError::Invalid("subscriber_buffer = 0".into()));
        }
        Ok(())
    }

    /// Максимум игроков в одной партии.
    pub fn max_players(&self) -> usize {
        self.palette.len()
    }
}
