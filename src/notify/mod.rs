//! Граница уведомлений.
//!
//! Движок зависит только от `Notifier`: "подписать H на партию G" и
//! "разослать снапшот S всем подписчикам G". Транспорт (websocket, rpc)
//! живёт снаружи и реализует `Subscriber`.

pub mod channel;
pub mod hub;

use std::sync::Arc;

use thiserror::Error;

use crate::api::dto::GameSnapshot;
use crate::domain::GameId;

pub use channel::ChannelSubscriber;
pub use hub::SubscriberRegistry;

/// Идентичность подключения. По ней подписка заменяется при переподключении.
pub type SubscriberId = u64;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// Подписчик не успевает, снапшот для него выброшен.
    #[error("очередь подписчика переполнена")]
    Full,

    /// Подключение закрыто, подписчика можно забыть.
    #[error("подписчик отключён")]
    Closed,
}

/// Один подписчик (обычно — одно подключение клиента).
///
/// `deliver` не должен блокироваться: рассылка идёт под локом партии.
pub trait Subscriber: Send + Sync {
    fn id(&self) -> SubscriberId;

    fn deliver(&self, snapshot: Arc<GameSnapshot>) -> Result<(), DeliveryError>;
}

pub type SubscriberHandle = Arc<dyn Subscriber>;

/// То, что движок требует от окружения.
pub trait Notifier: Send + Sync {
    /// Зарегистрировать подписчика игрока `player` на партию `game_id`.
    fn subscribe(&self, game_id: GameId, player: &str, subscriber: SubscriberHandle);

    /// Разослать снапшот всем подписчикам партии. Fire-and-forget.
    fn publish(&self, game_id: GameId, snapshot: Arc<GameSnapshot>);
}
