//! Error codes surfaced by the room engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are what outer layers show to clients.

use core::fmt;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string. Outer layers
/// use the code to tell "rejected because illegal" apart from "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lookup failures
    /// Room id is unknown (never created or already reaped)
    RoomNotFound,
    /// Player id is not seated in the room
    PlayerNotFound,

    // Setup errors
    /// Four players already seated
    RoomFull,
    /// Same identity already occupies a seat
    DuplicatePlayer,
    /// Game cannot start without exactly four players
    RoomNotFull,
    /// Game already started
    AlreadyStarted,

    // Rule violations (reported as ignored actions, never as errors)
    PhaseMismatch,
    OutOfTurn,
    NotDealer,
    BidAlreadyMade,
    NoPendingBeg,
    ParseCard,
    CardNotInHand,
    IllegalPlay,
    UnknownAction,

    // System errors
    /// Internal invariant would have been broken
    InvariantViolation,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",

            Self::RoomFull => "ROOM_FULL",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::RoomNotFull => "ROOM_NOT_FULL",
            Self::AlreadyStarted => "ALREADY_STARTED",

            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::NotDealer => "NOT_DEALER",
            Self::BidAlreadyMade => "BID_ALREADY_MADE",
            Self::NoPendingBeg => "NO_PENDING_BEG",
            Self::ParseCard => "PARSE_CARD",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::IllegalPlay => "ILLEGAL_PLAY",
            Self::UnknownAction => "UNKNOWN_ACTION",

            Self::InvariantViolation => "INVARIANT_VIOLATION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }

    /// True for codes that mean "the addressed room or player does not exist".
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::RoomNotFound | Self::PlayerNotFound)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
