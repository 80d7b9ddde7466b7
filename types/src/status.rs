use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown status value: {0}")]
pub struct ParseStatusError(pub String);

/// Session-level status of a game, mirroring the active round's phase.
///
/// `Voting` and `RoundEnd` are declared but never assigned by any transition
/// in the current flow; they stay valid so stored values round-trip.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Setup,
    RevealRoles,
    Playing,
    Voting,
    RoundEnd,
    Finished,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Setup => "SETUP",
            GameStatus::RevealRoles => "REVEAL_ROLES",
            GameStatus::Playing => "PLAYING",
            GameStatus::Voting => "VOTING",
            GameStatus::RoundEnd => "ROUND_END",
            GameStatus::Finished => "FINISHED",
        }
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SETUP" => Ok(GameStatus::Setup),
            "REVEAL_ROLES" => Ok(GameStatus::RevealRoles),
            "PLAYING" => Ok(GameStatus::Playing),
            "VOTING" => Ok(GameStatus::Voting),
            "ROUND_END" => Ok(GameStatus::RoundEnd),
            "FINISHED" => Ok(GameStatus::Finished),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Phase of a single round. Ordered: a round only ever advances.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    RevealRoles,
    Drawing,
    Voting,
    Completed,
}

impl RoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::RevealRoles => "REVEAL_ROLES",
            RoundStatus::Drawing => "DRAWING",
            RoundStatus::Voting => "VOTING",
            RoundStatus::Completed => "COMPLETED",
        }
    }

    /// Whether moving to `next` respects the forward-only ordering.
    pub fn can_advance_to(&self, next: RoundStatus) -> bool {
        next >= *self
    }
}

impl Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoundStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REVEAL_ROLES" => Ok(RoundStatus::RevealRoles),
            "DRAWING" => Ok(RoundStatus::Drawing),
            "VOTING" => Ok(RoundStatus::Voting),
            "COMPLETED" => Ok(RoundStatus::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}
