use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::api::dto::GameSnapshot;
use crate::notify::{DeliveryError, Subscriber, SubscriberId};

/// Подписчик поверх bounded mpsc-канала tokio.
///
/// Транспорт держит `Receiver` и пишет снапшоты в сокет в своём темпе.
/// `try_send` никогда не ждёт: переполненная очередь — это `Full`,
/// закрытый `Receiver` — это `Closed`.
#[derive(Debug)]
pub struct ChannelSubscriber {
    id: SubscriberId,
    tx: mpsc::Sender<Arc<GameSnapshot>>,
}

impl ChannelSubscriber {
    pub fn new(id: SubscriberId, buffer: usize) -> (Self, mpsc::Receiver<Arc<GameSnapshot>>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (Self { id, tx }, rx)
    }
}

impl Subscriber for ChannelSubscriber {
    fn id(&self) -> SubscriberId {
        self.id
    }

    fn deliver(&self, snapshot: Arc<GameSnapshot>) -> Result<(), DeliveryError> {
        match self.tx.try_send(snapshot) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(DeliveryError::Full),
            Err(TrySendError::Closed(_)) => Err(DeliveryError::Closed),
        }
    }
}
