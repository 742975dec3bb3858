// tests/common/mod.rs
//
// Общие хелперы для интеграционных тестов: реестр с детерминированным RNG
// и Notifier, который просто записывает всё, что ему прислали.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;

use drawvote_engine::domain::{Coord, GameId, GameStage, Stroke};
use drawvote_engine::notify::{Notifier, SubscriberHandle};
use drawvote_engine::{DeterministicRng, EngineConfig, GameSnapshot, SessionRegistry};

#[derive(Default)]
pub struct RecordingNotifier {
    pub subscriptions: Mutex<Vec<(GameId, String, u64)>>,
    pub published: Mutex<Vec<(GameId, Arc<GameSnapshot>)>>,
}

impl RecordingNotifier {
    pub fn publish_count(&self) -> usize {
        self.published.lock().len()
    }

    pub fn last_published(&self) -> Option<Arc<GameSnapshot>> {
        self.published.lock().last().map(|(_, s)| Arc::clone(s))
    }

    pub fn subscribed_players(&self, game_id: GameId) -> Vec<String> {
        self.subscriptions
            .lock()
            .iter()
            .filter(|(g, _, _)| *g == game_id)
            .map(|(_, p, _)| p.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn subscribe(&self, game_id: GameId, player: &str, subscriber: SubscriberHandle) {
        self.subscriptions
            .lock()
            .push((game_id, player.to_string(), subscriber.id()));
    }

    fn publish(&self, game_id: GameId, snapshot: Arc<GameSnapshot>) {
        self.published.lock().push((game_id, snapshot));
    }
}

pub fn make_registry(seed: u64) -> (SessionRegistry<DeterministicRng>, Arc<RecordingNotifier>) {
    make_registry_with(EngineConfig::default(), seed)
}

pub fn make_registry_with(
    config: EngineConfig,
    seed: u64,
) -> (SessionRegistry<DeterministicRng>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let registry = SessionRegistry::new(config, DeterministicRng::from_seed(seed), notifier.clone())
        .expect("valid engine config");
    (registry, notifier)
}

/// Короткий штрих из двух точек.
pub fn line(x: i32) -> Stroke {
    Stroke::new(vec![Coord::new(x, 0), Coord::new(x, 10)])
}

/// Создать партию `owner`, добавить остальных, стартовать. Возвращает id.
pub fn started_game(
    registry: &SessionRegistry<DeterministicRng>,
    owner: &str,
    others: &[&str],
) -> GameId {
    let id = registry.new_game(owner, None).unwrap().id;
    for name in others {
        registry.join_game(id, name, None).unwrap();
    }
    registry.start_game(id, owner).unwrap();
    id
}

/// Прорисовать все ходы, пока партия не уйдёт в Voting.
pub fn draw_until_voting(registry: &SessionRegistry<DeterministicRng>, id: GameId) {
    let mut x = 0;
    while let Some(current) = registry.current_turn(id) {
        registry.draw_stroke(id, &current, line(x)).unwrap();
        x += 1;
    }
    assert_eq!(registry.stage(id), Some(GameStage::Voting));
}
