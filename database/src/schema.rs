use sqlx::SqlitePool;

use crate::error::StoreError;

const TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS brands (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        domain TEXT,
        category TEXT NOT NULL,
        difficulty INTEGER NOT NULL,
        description TEXT,
        hint TEXT
    )",
    "CREATE TABLE IF NOT EXISTS games (
        id TEXT PRIMARY KEY,
        status TEXT NOT NULL,
        current_round INTEGER NOT NULL DEFAULT 0,
        saboteur_wins INTEGER NOT NULL DEFAULT 0,
        saboteur_id TEXT,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE IF NOT EXISTS players (
        id TEXT PRIMARY KEY,
        game_id TEXT NOT NULL REFERENCES games(id) ON DELETE CASCADE,
        name TEXT NOT NULL,
        ord INTEGER NOT NULL,
        UNIQUE (game_id, ord)
    )",
    "CREATE TABLE IF NOT EXISTS rounds (
        id TEXT PRIMARY KEY,
        game_id TEXT NOT NULL REFERENCES games(id) ON DELETE CASCADE,
        round_number INTEGER NOT NULL,
        brand_id TEXT NOT NULL REFERENCES brands(id),
        brand_name TEXT NOT NULL,
        status TEXT NOT NULL,
        saboteur_won INTEGER,
        UNIQUE (game_id, round_number),
        UNIQUE (game_id, brand_id)
    )",
    "CREATE TABLE IF NOT EXISTS round_roles (
        id TEXT PRIMARY KEY,
        round_id TEXT NOT NULL REFERENCES rounds(id) ON DELETE CASCADE,
        player_id TEXT NOT NULL REFERENCES players(id) ON DELETE CASCADE,
        role TEXT NOT NULL,
        revealed INTEGER NOT NULL DEFAULT 0,
        UNIQUE (round_id, player_id)
    )",
];

/// Create all tables if they do not exist yet.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    for statement in TABLES {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
    }
    tracing::debug!("schema ready");
    Ok(())
}
