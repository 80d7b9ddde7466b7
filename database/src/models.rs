use serde::{Deserialize, Serialize};
use types::{GameStatus, Role, RoundStatus};
use uuid::Uuid;

/// Static reference data; unique by `name`, never mutated mid-game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub domain: Option<String>,
    pub category: String,
    pub difficulty: i64,
    pub description: Option<String>,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Uuid,
    pub game_id: Uuid,
    pub name: String,
    /// Join position; defines architect rotation and reveal sequencing.
    pub order: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub status: GameStatus,
    pub current_round: i64,
    pub saboteur_wins: i64,
    /// Set once on the first round, immutable afterwards.
    pub saboteur_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Full game graph as returned by the API: players in join order, the
/// saboteur, rounds by number, each with its roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    #[serde(flatten)]
    pub game: Game,
    pub saboteur: Option<Player>,
    pub players: Vec<Player>,
    pub rounds: Vec<RoundDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: Uuid,
    pub game_id: Uuid,
    pub round_number: i64,
    pub brand_id: Uuid,
    /// Snapshot of the brand name at creation time.
    pub brand_name: String,
    pub status: RoundStatus,
    pub saboteur_won: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundDetail {
    #[serde(flatten)]
    pub round: Round,
    pub roles: Vec<RoundRoleDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRole {
    pub id: Uuid,
    pub round_id: Uuid,
    pub player_id: Uuid,
    pub role: Role,
    pub revealed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRoleDetail {
    #[serde(flatten)]
    pub round_role: RoundRole,
    pub player: Player,
}

/// Fields a `PATCH /rounds` call may change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundUpdate {
    pub status: Option<RoundStatus>,
    pub saboteur_won: Option<bool>,
}
