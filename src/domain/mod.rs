//! Доменная модель игры: игроки, штрихи, палитра, сама партия.
//!
//! Здесь только данные и простые вычисления над ними.
//! Переходы между стадиями делает engine, НЕ здесь.

pub mod game;
pub mod palette;
pub mod player;
pub mod stroke;

/// Идентификатор партии. Уникален среди активных партий реестра.
pub type GameId = u32;

/// Отображаемое имя игрока. Внутри одной партии это и есть его идентичность.
pub type PlayerName = String;

pub use game::*;
pub use palette::*;
pub use player::*;
pub use stroke::*;
