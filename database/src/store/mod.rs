mod brands;
mod games;
mod rounds;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Brand, Game, Player, Round, RoundRole};

/// A game cannot start with fewer players than this.
pub const MIN_PLAYERS: usize = 4;

/// All persistence operations for games, rounds, roles and brands, over a
/// shared SQLite pool. Cheap to clone.
#[derive(Clone)]
pub struct GameStore {
    pool: SqlitePool,
}

impl GameStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn uuid_column(row: &SqliteRow, column: &str) -> Result<Uuid, StoreError> {
    let value: String = row.get(column);
    Ok(Uuid::parse_str(&value)?)
}

pub(crate) fn brand_from_row(row: &SqliteRow) -> Result<Brand, StoreError> {
    Ok(Brand {
        id: uuid_column(row, "id")?,
        name: row.get("name"),
        domain: row.get("domain"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
        description: row.get("description"),
        hint: row.get("hint"),
    })
}

pub(crate) fn player_from_row(row: &SqliteRow) -> Result<Player, StoreError> {
    Ok(Player {
        id: uuid_column(row, "id")?,
        game_id: uuid_column(row, "game_id")?,
        name: row.get("name"),
        order: row.get("ord"),
    })
}

pub(crate) fn game_from_row(row: &SqliteRow) -> Result<Game, StoreError> {
    let status: String = row.get("status");
    let saboteur_id: Option<String> = row.get("saboteur_id");
    Ok(Game {
        id: uuid_column(row, "id")?,
        status: status.parse()?,
        current_round: row.get("current_round"),
        saboteur_wins: row.get("saboteur_wins"),
        saboteur_id: saboteur_id.as_deref().map(Uuid::parse_str).transpose()?,
        created_at: row.get("created_at"),
    })
}

pub(crate) fn round_from_row(row: &SqliteRow) -> Result<Round, StoreError> {
    let status: String = row.get("status");
    Ok(Round {
        id: uuid_column(row, "id")?,
        game_id: uuid_column(row, "game_id")?,
        round_number: row.get("round_number"),
        brand_id: uuid_column(row, "brand_id")?,
        brand_name: row.get("brand_name"),
        status: status.parse()?,
        saboteur_won: row.get("saboteur_won"),
    })
}

pub(crate) fn round_role_from_row(row: &SqliteRow) -> Result<RoundRole, StoreError> {
    let role: String = row.get("role");
    Ok(RoundRole {
        id: uuid_column(row, "id")?,
        round_id: uuid_column(row, "round_id")?,
        player_id: uuid_column(row, "player_id")?,
        role: role.parse()?,
        revealed: row.get("revealed"),
    })
}
