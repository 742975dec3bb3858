use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::api::dto::GameSnapshot;
use crate::domain::{GameId, PlayerName};
use crate::notify::{DeliveryError, Notifier, SubscriberHandle, SubscriberId};

struct Subscription {
    player: PlayerName,
    handle: SubscriberHandle,
}

/// Реестр подписчиков по партиям.
///
/// Внутри партии подписка идентифицируется `SubscriberId`: повторная подписка
/// с тем же id заменяет старую, поэтому переподключение не дублирует
/// доставку. У одного игрока может быть несколько разных подключений.
#[derive(Default)]
pub struct SubscriberRegistry {
    games: RwLock<HashMap<GameId, HashMap<SubscriberId, Subscription>>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Убрать подписчика явно (например, при отключении сокета).
    pub fn unsubscribe(&self, game_id: GameId, subscriber_id: SubscriberId) -> bool {
        let mut games = self.games.write();
        let Some(subs) = games.get_mut(&game_id) else {
            return false;
        };
        let removed = subs.remove(&subscriber_id).is_some();
        if subs.is_empty() {
            games.remove(&game_id);
        }
        removed
    }

    /// Забыть все подписки партии (когда окружение выкидывает партию).
    pub fn forget_game(&self, game_id: GameId) {
        self.games.write().remove(&game_id);
    }

    pub fn subscriber_count(&self, game_id: GameId) -> usize {
        self.games.read().get(&game_id).map_or(0, HashMap::len)
    }

    /// Id подключений конкретного игрока, отсортированные.
    pub fn subscribers_of(&self, game_id: GameId, player: &str) -> Vec<SubscriberId> {
        let games = self.games.read();
        let mut ids: Vec<SubscriberId> = games
            .get(&game_id)
            .map(|subs| {
                subs.iter()
                    .filter(|(_, s)| s.player == player)
                    .map(|(id, _)| *id)
                    .collect()
            })
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }
}

impl Notifier for SubscriberRegistry {
    fn subscribe(&self, game_id: GameId, player: &str, subscriber: SubscriberHandle) {
        let id = subscriber.id();
        let replaced = self
            .games
            .write()
            .entry(game_id)
            .or_default()
            .insert(
                id,
                Subscription {
                    player: player.to_string(),
                    handle: subscriber,
                },
            )
            .is_some();
        debug!(game_id, player, subscriber_id = id, replaced, "subscriber registered");
    }

    fn publish(&self, game_id: GameId, snapshot: Arc<GameSnapshot>) {
        let mut closed = Vec::new();
        {
            let games = self.games.read();
            let Some(subs) = games.get(&game_id) else {
                debug!(game_id, "no subscribers to notify");
                return;
            };
            debug!(game_id, subscribers = subs.len(), stage = %snapshot.stage, "broadcasting state");
            for (id, sub) in subs {
                match sub.handle.deliver(Arc::clone(&snapshot)) {
                    Ok(()) => {}
                    Err(DeliveryError::Full) => {
                        warn!(game_id, player = %sub.player, subscriber_id = id, "subscriber lagging, snapshot dropped");
                    }
                    Err(DeliveryError::Closed) => closed.push(*id),
                }
            }
        }

        if !closed.is_empty() {
            let mut games = self.games.write();
            if let Some(subs) = games.get_mut(&game_id) {
                for id in &closed {
                    subs.remove(id);
                }
                if subs.is_empty() {
                    games.remove(&game_id);
                }
            }
            debug!(game_id, pruned = closed.len(), "closed subscribers pruned");
        }
    }
}
