use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{ErrorKind, GameError};

/// Ошибка внешнего API (то, что отдаём клиенту): код + человекочитаемое сообщение.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{kind:?}: {message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
