// src/engine/session_registry.rs

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::api::dto::GameSnapshot;
use crate::domain::{Game, GameId, GameStage, PlayerName, Stroke};
use crate::engine::{self, GameAction, GameError, JoinOutcome, RandomSource};
use crate::infra::config::{ConfigError, EngineConfig};
use crate::infra::ids::GameIdAllocator;
use crate::infra::mapping::snapshot_of;
use crate::infra::rng::SystemRng;
use crate::notify::{Notifier, SubscriberHandle};

/// Реестр активных партий.
///
/// - хранит партии по GameId, каждая — под своим мьютексом;
/// - выдаёт новые GameId;
/// - направляет действия игроков в нужную партию;
/// - после каждой успешной мутации рассылает снапшот через `Notifier`.
///
/// Карта партий под RwLock: вставка только в `new_game`, всё остальное —
/// чтение и клон `Arc`. Мутации одной партии сериализуются её мьютексом,
/// рассылка идёт под тем же мьютексом, поэтому снапшоты уходят в порядке мутаций.
pub struct SessionRegistry<R: RandomSource = SystemRng> {
    games: RwLock<HashMap<GameId, Arc<Mutex<Game>>>>,
    ids: GameIdAllocator,
    rng: Mutex<R>,
    notifier: Arc<dyn Notifier>,
    config: EngineConfig,
}

impl<R: RandomSource> SessionRegistry<R> {
    /// Новый пустой реестр. Конфиг проверяется здесь, а не только при
    /// разборе JSON: поля `EngineConfig` публичные.
    pub fn new(
        config: EngineConfig,
        rng: R,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            games: RwLock::new(HashMap::new()),
            ids: GameIdAllocator::new(config.id_space),
            rng: Mutex::new(rng),
            notifier,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Создать партию. Владелец — первый игрок, первый цвет палитры.
    ///
    /// Рассылки нет: единственный подписчик — сам создатель, он получает
    /// снапшот в ответе.
    pub fn new_game(
        &self,
        owner: &str,
        subscriber: Option<SubscriberHandle>,
    ) -> Result<GameSnapshot, GameError> {
        engine::validate_name(owner)?;
        let snapshot = {
            let mut games = self.games.write();
            let id = {
                let mut rng = self.rng.lock();
                self.ids
                    .allocate(&mut *rng, games.len(), |id| games.contains_key(&id))?
            };
            let color = self.config.palette.color_for(0).ok_or(GameError::GameFull {
                game_id: id,
                capacity: 0,
            })?;

            let game = Game::new(id, owner, color);
            let snapshot = snapshot_of(&game);
            games.insert(id, Arc::new(Mutex::new(game)));
            snapshot
        };

        self.attach(snapshot.id, owner, subscriber);
        info!(game_id = snapshot.id, owner, "new game created");
        Ok(snapshot)
    }

    /// Войти в партию (или переподключиться к ней).
    pub fn join_game(
        &self,
        game_id: GameId,
        name: &str,
        subscriber: Option<SubscriberHandle>,
    ) -> Result<GameSnapshot, GameError> {
        let palette = &self.config.palette;
        self.mutate(game_id, GameAction::Join, |game| {
            let outcome = engine::join_player(game, name, palette)?;
            if outcome == JoinOutcome::Rejoined {
                info!(game_id, player = name, "player rejoined");
            }
            self.attach(game_id, name, subscriber);
            Ok(())
        })
    }

    /// Старт партии владельцем: перемешать порядок ходов, стадия Started.
    pub fn start_game(&self, game_id: GameId, name: &str) -> Result<(), GameError> {
        self.mutate(game_id, GameAction::Start, |game| {
            let mut rng = self.rng.lock();
            engine::start_game(game, name, &mut *rng)
        })
        .map(|_| ())
    }

    /// Штрих от игрока, чей сейчас ход.
    pub fn draw_stroke(&self, game_id: GameId, name: &str, stroke: Stroke) -> Result<(), GameError> {
        let rounds = self.config.rounds_per_player;
        self.mutate(game_id, GameAction::DrawStroke, |game| {
            engine::draw_stroke(game, name, stroke, rounds).map(|_| ())
        })
        .map(|_| ())
    }

    /// Голос `name` против `against`.
    pub fn vote_against(&self, game_id: GameId, name: &str, against: &str) -> Result<(), GameError> {
        self.mutate(game_id, GameAction::VoteAgainst, |game| {
            engine::vote_against(game, name, against).map(|_| ())
        })
        .map(|_| ())
    }

    /// Текущий снапшот партии (только чтение, без рассылки).
    pub fn snapshot(&self, game_id: GameId) -> Option<GameSnapshot> {
        let handle = self.games.read().get(&game_id).cloned()?;
        let game = handle.lock();
        Some(snapshot_of(&game))
    }

    /// Чей сейчас ход (если партия в стадии Started).
    pub fn current_turn(&self, game_id: GameId) -> Option<PlayerName> {
        let handle = self.games.read().get(&game_id).cloned()?;
        let game = handle.lock();
        game.current_turn().map(str::to_string)
    }

    /// Стадия партии.
    pub fn stage(&self, game_id: GameId) -> Option<GameStage> {
        let handle = self.games.read().get(&game_id).cloned()?;
        let stage = handle.lock().stage;
        Some(stage)
    }

    /// Id всех активных партий, по возрастанию.
    pub fn game_ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self.games.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    fn handle(&self, game_id: GameId) -> Result<Arc<Mutex<Game>>, GameError> {
        self.games
            .read()
            .get(&game_id)
            .cloned()
            .ok_or(GameError::NotFound { game_id })
    }

    /// Общая обвязка мутации: лок партии → действие → снапшот → рассылка.
    ///
    /// Если `apply` вернул ошибку, партия не тронута и рассылки нет.
    fn mutate(
        &self,
        game_id: GameId,
        action: GameAction,
        apply: impl FnOnce(&mut Game) -> Result<(), GameError>,
    ) -> Result<GameSnapshot, GameError> {
        let handle = self.handle(game_id)?;
        let mut game = handle.lock();
        let stage_before = game.stage;

        if let Err(err) = apply(&mut *game) {
            debug!(game_id, %action, error = %err, "action rejected");
            return Err(err);
        }

        if game.stage != stage_before {
            info!(game_id, %action, from = %stage_before, to = %game.stage, "stage advanced");
        }

        let snapshot = Arc::new(snapshot_of(&game));
        self.notifier.publish(game_id, Arc::clone(&snapshot));
        Ok(Arc::unwrap_or_clone(snapshot))
    }

    fn attach(&self, game_id: GameId, player: &str, subscriber: Option<SubscriberHandle>) {
        match subscriber {
            Some(sub) => self.notifier.subscribe(game_id, player, sub),
            None => warn!(game_id, player, "no subscriber handle, player will not receive updates"),
        }
    }
}
