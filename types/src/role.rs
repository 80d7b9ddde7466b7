use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::status::ParseStatusError;

/// Per-round role of a player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Architect,
    Saboteur,
    Player,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Architect => "ARCHITECT",
            Role::Saboteur => "SABOTEUR",
            Role::Player => "PLAYER",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ARCHITECT" => Ok(Role::Architect),
            "SABOTEUR" => Ok(Role::Saboteur),
            "PLAYER" => Ok(Role::Player),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}
