use serde::{Deserialize, Serialize};

/// Цвета по умолчанию, в порядке выдачи игрокам.
pub const DEFAULT_COLORS: [&str; 10] = [
    "darkgreen",
    "darkblue",
    "maroon",
    "red",
    "gold",
    "chartreuse",
    "aqua",
    "fuchsia",
    "cornflower",
    "peachpuff",
];

/// Фиксированная палитра цветов игроков.
///
/// Игрок с порядковым номером `n` (0 — владелец) получает `colors[n]`,
/// поэтому длина палитры — это и максимум игроков в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Palette {
    pub colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }

    /// Цвет для игрока под номером `index`, если палитра его вмещает.
    pub fn color_for(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Первый повторяющийся цвет, если есть.
    pub fn first_duplicate(&self) -> Option<&str> {
        self.colors
            .iter()
            .enumerate()
            .find(|&(i, c)| self.colors[..i].contains(c))
            .map(|(_, c)| c.as_str())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_ten_distinct_colors() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 10);
        assert_eq!(palette.first_duplicate(), None);
        assert_eq!(palette.color_for(0), Some("darkgreen"));
        assert_eq!(palette.color_for(9), Some("peachpuff"));
        assert_eq!(palette.color_for(10), None);
    }

    #[test]
    fn duplicate_color_is_reported() {
        let palette = Palette::new(vec!["red".into(), "gold".into(), "red".into()]);
        assert_eq!(palette.first_duplicate(), Some("red"));
    }
}
