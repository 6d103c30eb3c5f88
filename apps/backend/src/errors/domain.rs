//! Domain-level error type used by the pure game logic.
//!
//! This error type is transport-agnostic. Service code returns
//! `Result<T, crate::error::AppError>` and converts from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why an action or move was rejected by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Action arrived in a phase that does not accept it.
    PhaseMismatch,
    /// Seat acting is not the seat whose turn it is.
    OutOfTurn,
    /// Only the dealer may answer a beg.
    NotDealer,
    /// Beg or stay already recorded for this round.
    BidAlreadyMade,
    /// Dealer answered without a pending beg.
    NoPendingBeg,
    /// Card token could not be decoded.
    ParseCard,
    /// Card is not held by the acting player.
    CardNotInHand,
    /// Card is held but is not a legal play right now.
    IllegalPlay,
    /// Action name is not one of the known kinds.
    UnknownAction,
}

impl ValidationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::PhaseMismatch => "phase_mismatch",
            ValidationKind::OutOfTurn => "out_of_turn",
            ValidationKind::NotDealer => "not_dealer",
            ValidationKind::BidAlreadyMade => "bid_already_made",
            ValidationKind::NoPendingBeg => "no_pending_beg",
            ValidationKind::ParseCard => "parse_card",
            ValidationKind::CardNotInHand => "card_not_in_hand",
            ValidationKind::IllegalPlay => "illegal_play",
            ValidationKind::UnknownAction => "unknown_action",
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Rule violation; recoverable by discarding the action.
    Validation(ValidationKind, String),
    /// Internal invariant would be broken; the operation must abort.
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {}: {d}", kind.as_str()),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// Validation kind, if this is a rule violation.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Invariant(_) => None,
        }
    }
}
