//! Движок партийной игры "рисуем по очереди и голосуем".
//!
//! Игроки входят в лобби, по очереди рисуют штрихи, потом голосуют,
//! чей вклад был худшим. Здесь только состояние в памяти:
//! стадии партии, очередь ходов, журнал штрихов, подсчёт голосов
//! и рассылка снапшотов подписчикам. HTTP, статика и транспорт — снаружи.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod notify;

pub use api::{execute, run_query, ApiError, Command, CommandResponse, GameSnapshot, Query, QueryResponse};
pub use domain::{Coord, Game, GameId, GameStage, PlayerName, Stroke};
pub use engine::{ErrorKind, GameError, RandomSource, SessionRegistry};
pub use infra::{DeterministicRng, EngineConfig, SystemRng};
pub use notify::{ChannelSubscriber, Notifier, Subscriber, SubscriberHandle, SubscriberRegistry};
