use crate::domain::GameId;
use crate::engine::{GameError, RandomSource};

/// Сколько случайных попыток делаем, прежде чем искать свободный id перебором.
const RANDOM_ATTEMPTS: usize = 32;

/// Выдача id партий: случайное число из `0..id_space`,
/// при коллизии с активной партией — новая попытка.
///
/// Случайные id не дают угадать соседние партии по номеру.
/// Сам аллокатор состояния не хранит: занятость проверяет вызывающий
/// (реестр держит write-lock на всё время выдачи и вставки).
#[derive(Clone, Debug)]
pub struct GameIdAllocator {
    id_space: u32,
}

impl GameIdAllocator {
    pub fn new(id_space: u32) -> Self {
        Self { id_space }
    }

    pub fn id_space(&self) -> u32 {
        self.id_space
    }

    /// Выдать свободный id.
    ///
    /// `active` — сколько id уже занято, `is_taken` — проверка конкретного id.
    pub fn allocate<R: RandomSource>(
        &self,
        rng: &mut R,
        active: usize,
        is_taken: impl Fn(GameId) -> bool,
    ) -> Result<GameId, GameError> {
        let space = self.id_space as usize;
        if space == 0 || active >= space {
            return Err(GameError::RegistryFull {
                id_space: self.id_space,
            });
        }

        for _ in 0..RANDOM_ATTEMPTS {
            let candidate = rng.index_below(space) as GameId;
            if !is_taken(candidate) {
                return Ok(candidate);
            }
        }

        // Пространство почти заполнено: идём по кругу от случайной точки.
        let start = rng.index_below(space);
        (0..space)
            .map(|offset| ((start + offset) % space) as GameId)
            .find(|id| !is_taken(*id))
            .ok_or(GameError::RegistryFull {
                id_space: self.id_space,
            })
    }
}
