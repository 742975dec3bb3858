use std::fmt;

use serde::{Deserialize, Serialize};

/// Мутирующие действия над партией. Нужны для ошибок и логов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameAction {
    Join,
    Start,
    DrawStroke,
    VoteAgainst,
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameAction::Join => "JoinGame",
            GameAction::Start => "StartGame",
            GameAction::DrawStroke => "DrawStroke",
            GameAction::VoteAgainst => "VoteAgainst",
        };
        f.write_str(s)
    }
}
