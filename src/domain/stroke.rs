use serde::{Deserialize, Serialize};

/// Точка на холсте.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Один штрих игрока — упорядоченная последовательность точек.
///
/// Для движка штрих непрозрачен: важны только порядок и количество точек.
/// На проводе это просто массив `{x, y}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Stroke {
    pub points: Vec<Coord>,
}

impl Stroke {
    pub fn new(points: Vec<Coord>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Coord>> for Stroke {
    fn from(points: Vec<Coord>) -> Self {
        Self { points }
    }
}

impl FromIterator<Coord> for Stroke {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
