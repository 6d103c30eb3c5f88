use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// The five player actions a room accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Beg,
    Stay,
    GiveOne,
    GoAgain,
    PlayCard,
}

impl ActionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionKind::Beg => "BEG",
            ActionKind::Stay => "STAY",
            ActionKind::GiveOne => "GIVE_ONE",
            ActionKind::GoAgain => "GO_AGAIN",
            ActionKind::PlayCard => "PLAY_CARD",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEG" => Ok(ActionKind::Beg),
            "STAY" => Ok(ActionKind::Stay),
            "GIVE_ONE" => Ok(ActionKind::GiveOne),
            "GO_AGAIN" => Ok(ActionKind::GoAgain),
            "PLAY_CARD" => Ok(ActionKind::PlayCard),
            other => Err(DomainError::validation(
                ValidationKind::UnknownAction,
                format!("Unknown action: {other}"),
            )),
        }
    }
}
