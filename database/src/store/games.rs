use types::GameStatus;
use uuid::Uuid;

use super::{game_from_row, player_from_row, round_from_row, round_role_from_row};
use super::{GameStore, MIN_PLAYERS};
use crate::error::StoreError;
use crate::models::{Game, GameDetail, Player, RoundDetail, RoundRoleDetail};

impl GameStore {
    /// Create a game in SETUP with one player row per name, ordered by
    /// position in the input.
    pub async fn create_game(&self, player_names: &[String]) -> Result<GameDetail, StoreError> {
        if player_names.len() < MIN_PLAYERS {
            return Err(StoreError::InsufficientPlayers(player_names.len()));
        }

        let game = Game {
            id: Uuid::new_v4(),
            status: GameStatus::Setup,
            current_round: 0,
            saboteur_wins: 0,
            saboteur_id: None,
            created_at: chrono::Utc::now(),
        };

        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        sqlx::query(
            "INSERT INTO games (id, status, current_round, saboteur_wins, saboteur_id, created_at)
             VALUES (?, ?, ?, ?, NULL, ?)",
        )
        .bind(game.id.to_string())
        .bind(game.status.as_str())
        .bind(game.current_round)
        .bind(game.saboteur_wins)
        .bind(game.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut players = Vec::with_capacity(player_names.len());
        for (index, name) in player_names.iter().enumerate() {
            let player = Player {
                id: Uuid::new_v4(),
                game_id: game.id,
                name: name.clone(),
                order: index as i64,
            };
            sqlx::query("INSERT INTO players (id, game_id, name, ord) VALUES (?, ?, ?, ?)")
                .bind(player.id.to_string())
                .bind(player.game_id.to_string())
                .bind(&player.name)
                .bind(player.order)
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::Query(e.to_string()))?;
            players.push(player);
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        tracing::info!(game_id = %game.id, players = players.len(), "created game");

        Ok(GameDetail {
            game,
            saboteur: None,
            players,
            rounds: Vec::new(),
        })
    }

    /// Full game graph: players in join order, the saboteur, rounds by
    /// number, each round's roles with their players.
    pub async fn get_game(&self, id: Uuid) -> Result<GameDetail, StoreError> {
        let game = self.game_row(id).await?;
        let players = self.players_of(id).await?;
        let saboteur = game
            .saboteur_id
            .and_then(|sid| players.iter().find(|p| p.id == sid).cloned());

        let round_rows = sqlx::query("SELECT * FROM rounds WHERE game_id = ? ORDER BY round_number ASC")
            .bind(id.to_string())
            .fetch_all(self.pool())
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut rounds = Vec::with_capacity(round_rows.len());
        for row in &round_rows {
            let round = round_from_row(row)?;
            let roles = self.roles_of(round.id, &players).await?;
            rounds.push(RoundDetail { round, roles });
        }

        Ok(GameDetail {
            game,
            saboteur,
            players,
            rounds,
        })
    }

    /// Force a game to a given status (the client uses this to finish a game
    /// the saboteur never won).
    pub async fn update_game_status(
        &self,
        id: Uuid,
        status: GameStatus,
    ) -> Result<Game, StoreError> {
        let result = sqlx::query("UPDATE games SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id.to_string())
            .execute(self.pool())
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::GameNotFound(id));
        }

        self.game_row(id).await
    }

    /// Delete a game; players, rounds and roles go with it.
    pub async fn delete_game(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM games WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool())
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::GameNotFound(id));
        }

        tracing::info!(game_id = %id, "deleted game");
        Ok(())
    }

    pub(crate) async fn game_row(&self, id: Uuid) -> Result<Game, StoreError> {
        let row = sqlx::query("SELECT * FROM games WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        match row {
            Some(row) => game_from_row(&row),
            None => Err(StoreError::GameNotFound(id)),
        }
    }

    pub(crate) async fn players_of(&self, game_id: Uuid) -> Result<Vec<Player>, StoreError> {
        let rows = sqlx::query("SELECT * FROM players WHERE game_id = ? ORDER BY ord ASC")
            .bind(game_id.to_string())
            .fetch_all(self.pool())
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        rows.iter().map(player_from_row).collect()
    }

    /// Roles of a round in reveal order (ascending player order), joined to
    /// the already-loaded players of the owning game.
    pub(crate) async fn roles_of(
        &self,
        round_id: Uuid,
        players: &[Player],
    ) -> Result<Vec<RoundRoleDetail>, StoreError> {
        let rows = sqlx::query(
            "SELECT rr.* FROM round_roles rr
             JOIN players p ON p.id = rr.player_id
             WHERE rr.round_id = ?
             ORDER BY p.ord ASC",
        )
        .bind(round_id.to_string())
        .fetch_all(self.pool())
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut roles = Vec::with_capacity(rows.len());
        for row in &rows {
            let round_role = round_role_from_row(row)?;
            let player = players
                .iter()
                .find(|p| p.id == round_role.player_id)
                .cloned()
                .ok_or_else(|| {
                    StoreError::Query(format!(
                        "round role {} references unknown player {}",
                        round_role.id, round_role.player_id
                    ))
                })?;
            roles.push(RoundRoleDetail { round_role, player });
        }
        Ok(roles)
    }
}
