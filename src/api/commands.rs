use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::dto::CommandResponse;
use crate::api::errors::ApiError;
use crate::domain::{GameId, PlayerName, Stroke};
use crate::engine::{RandomSource, SessionRegistry};
use crate::notify::SubscriberHandle;

/// Команда верхнего уровня — одно именованное действие клиента.
///
/// На проводе: `{"method": "DrawStroke", "params": {...}}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "method", content = "params")]
pub enum Command {
    NewGame {
        player_name: PlayerName,
    },
    JoinGame {
        game_id: GameId,
        player_name: PlayerName,
    },
    StartGame {
        game_id: GameId,
        player_name: PlayerName,
    },
    DrawStroke {
        game_id: GameId,
        player_name: PlayerName,
        stroke: Stroke,
    },
    VoteAgainst {
        game_id: GameId,
        player_name: PlayerName,
        against: PlayerName,
    },
}

impl Command {
    /// Подписывает ли команда вызывающего на партию.
    pub fn subscribes(&self) -> bool {
        matches!(self, Command::NewGame { .. } | Command::JoinGame { .. })
    }

    pub fn player_name(&self) -> &str {
        match self {
            Command::NewGame { player_name }
            | Command::JoinGame { player_name, .. }
            | Command::StartGame { player_name, .. }
            | Command::DrawStroke { player_name, .. }
            | Command::VoteAgainst { player_name, .. } => player_name,
        }
    }
}

/// Выполнить команду над реестром.
///
/// `subscriber` используется только командами, которые подписывают
/// (NewGame / JoinGame); остальные его отбрасывают.
pub fn execute<R: RandomSource>(
    registry: &SessionRegistry<R>,
    command: Command,
    subscriber: Option<SubscriberHandle>,
) -> Result<CommandResponse, ApiError> {
    let subscriber = match subscriber {
        Some(sub) if !command.subscribes() => {
            debug!(player = command.player_name(), subscriber = sub.id(), "subscriber handle ignored");
            None
        }
        other => other,
    };
    debug!(player = command.player_name(), ?command, "executing command");

    let response = match command {
        Command::NewGame { player_name } => {
            CommandResponse::Game(registry.new_game(&player_name, subscriber)?)
        }
        Command::JoinGame {
            game_id,
            player_name,
        } => CommandResponse::Game(registry.join_game(game_id, &player_name, subscriber)?),
        Command::StartGame {
            game_id,
            player_name,
        } => {
            registry.start_game(game_id, &player_name)?;
            CommandResponse::Ok
        }
        Command::DrawStroke {
            game_id,
            player_name,
            stroke,
        } => {
            registry.draw_stroke(game_id, &player_name, stroke)?;
            CommandResponse::Ok
        }
        Command::VoteAgainst {
            game_id,
            player_name,
            against,
        } => {
            registry.vote_against(game_id, &player_name, &against)?;
            CommandResponse::Ok
        }
    };
    Ok(response)
}
