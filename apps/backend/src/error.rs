use thiserror::Error;

use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;

/// Service-level error returned by room operations.
///
/// Rule violations during play never surface here; they come back as
/// [`crate::services::ActionOutcome::Ignored`]. What remains are lookups that
/// failed, setup requests that cannot be honoured, and aborted operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Room not found: {room_id}")]
    RoomNotFound { room_id: String },
    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },
    #[error("Room is full: {room_id}")]
    RoomFull { room_id: String },
    #[error("Player already seated: {player_id}")]
    DuplicatePlayer { player_id: String },
    #[error("Room needs four players to start, has {seated}")]
    RoomNotFull { seated: usize },
    #[error("Game already started in room {room_id}")]
    AlreadyStarted { room_id: String },
    #[error("Validation error: {detail}")]
    Validation { kind: ValidationKind, detail: String },
    #[error("Invariant violated: {detail}")]
    Invariant { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable error code for outer layers.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RoomNotFound { .. } => ErrorCode::RoomNotFound,
            AppError::PlayerNotFound { .. } => ErrorCode::PlayerNotFound,
            AppError::RoomFull { .. } => ErrorCode::RoomFull,
            AppError::DuplicatePlayer { .. } => ErrorCode::DuplicatePlayer,
            AppError::RoomNotFull { .. } => ErrorCode::RoomNotFull,
            AppError::AlreadyStarted { .. } => ErrorCode::AlreadyStarted,
            AppError::Validation { kind, .. } => validation_code(*kind),
            AppError::Invariant { .. } => ErrorCode::InvariantViolation,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    pub fn room_not_found(room_id: impl ToString) -> Self {
        Self::RoomNotFound {
            room_id: room_id.to_string(),
        }
    }

    pub fn player_not_found(player_id: impl ToString) -> Self {
        Self::PlayerNotFound {
            player_id: player_id.to_string(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

/// Map a rule-violation kind to its public code.
pub fn validation_code(kind: ValidationKind) -> ErrorCode {
    match kind {
        ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
        ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
        ValidationKind::NotDealer => ErrorCode::NotDealer,
        ValidationKind::BidAlreadyMade => ErrorCode::BidAlreadyMade,
        ValidationKind::NoPendingBeg => ErrorCode::NoPendingBeg,
        ValidationKind::ParseCard => ErrorCode::ParseCard,
        ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
        ValidationKind::IllegalPlay => ErrorCode::IllegalPlay,
        ValidationKind::UnknownAction => ErrorCode::UnknownAction,
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => AppError::Validation { kind, detail },
            DomainError::Invariant(detail) => AppError::Invariant { detail },
        }
    }
}
