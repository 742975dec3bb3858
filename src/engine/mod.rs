//! Движок партии: стадии, очередь ходов, голосование, реестр партий.
//!
//! Высокоуровневый объект: `SessionRegistry`.
//! Переходы над одной партией — свободные функции над `&mut Game`:
//!   - `join_player` / `start_game` – лобби
//!   - `draw_stroke` – очередной штрих, переход в Voting
//!   - `vote_against` – голос, переход в Over

pub mod actions;
pub mod errors;
pub mod lobby;
pub mod session_registry;
pub mod turns;
pub mod voting;

pub use actions::GameAction;
pub use errors::{ErrorKind, GameError};
pub use lobby::{join_player, start_game, validate_name, JoinOutcome};
pub use session_registry::SessionRegistry;
pub use turns::draw_stroke;
pub use voting::vote_against;

/// Источник случайности для движка.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерное число из `0..upper`. `upper` > 0.
    fn index_below(&mut self, upper: usize) -> usize;
}
