use sqlx::Row;
use types::{assignment, GameStatus, RoundStatus};
use uuid::Uuid;

use super::{round_from_row, round_role_from_row, GameStore};
use crate::error::StoreError;
use crate::models::{Brand, Round, RoundDetail, RoundRole, RoundRoleDetail, RoundUpdate};

impl GameStore {
    /// Create the next round for a game: pick an unused brand at random,
    /// rotate the architect, fix the saboteur on the first round, and write
    /// round, roles and game update in one transaction.
    pub async fn create_round(&self, game_id: Uuid) -> Result<(RoundDetail, Brand), StoreError> {
        let game = self.game_row(game_id).await?;
        let players = self.players_of(game_id).await?;
        if players.is_empty() {
            return Err(StoreError::InsufficientPlayers(0));
        }

        let used = self.used_brand_ids(game_id).await?;
        let available = self.available_brands(&used).await?;
        let brand = assignment::pick(&available)
            .cloned()
            .ok_or(StoreError::NoBrandsAvailable)?;

        let round_number: i64 = sqlx::query("SELECT COUNT(*) AS n FROM rounds WHERE game_id = ?")
            .bind(game_id.to_string())
            .fetch_one(self.pool())
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?
            .get("n");
        let architect = &players[assignment::architect_index(round_number as usize, players.len())];

        // The saboteur is chosen once, on the first round, and kept for the
        // life of the game.
        let (saboteur_id, saboteur_is_new) = match game.saboteur_id {
            Some(id) => (id, false),
            None => {
                let chosen = assignment::pick(&players).ok_or(StoreError::InsufficientPlayers(0))?;
                (chosen.id, true)
            }
        };

        let round = Round {
            id: Uuid::new_v4(),
            game_id,
            round_number,
            brand_id: brand.id,
            brand_name: brand.name.clone(),
            status: RoundStatus::RevealRoles,
            saboteur_won: None,
        };

        let mut roles = Vec::with_capacity(players.len());
        for player in &players {
            roles.push(RoundRoleDetail {
                round_role: RoundRole {
                    id: Uuid::new_v4(),
                    round_id: round.id,
                    player_id: player.id,
                    role: assignment::resolve_role(player.id, architect.id, saboteur_id),
                    revealed: false,
                },
                player: player.clone(),
            });
        }

        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        sqlx::query(
            "INSERT INTO rounds (id, game_id, round_number, brand_id, brand_name, status, saboteur_won)
             VALUES (?, ?, ?, ?, ?, ?, NULL)",
        )
        .bind(round.id.to_string())
        .bind(round.game_id.to_string())
        .bind(round.round_number)
        .bind(round.brand_id.to_string())
        .bind(&round.brand_name)
        .bind(round.status.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        for role in &roles {
            sqlx::query(
                "INSERT INTO round_roles (id, round_id, player_id, role, revealed)
                 VALUES (?, ?, ?, ?, 0)",
            )
            .bind(role.round_role.id.to_string())
            .bind(role.round_role.round_id.to_string())
            .bind(role.round_role.player_id.to_string())
            .bind(role.round_role.role.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        }

        if saboteur_is_new {
            sqlx::query("UPDATE games SET status = ?, current_round = ?, saboteur_id = ? WHERE id = ?")
                .bind(GameStatus::RevealRoles.as_str())
                .bind(round_number)
                .bind(saboteur_id.to_string())
                .bind(game_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::Query(e.to_string()))?;
        } else {
            sqlx::query("UPDATE games SET status = ?, current_round = ? WHERE id = ?")
                .bind(GameStatus::RevealRoles.as_str())
                .bind(round_number)
                .bind(game_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::Query(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        tracing::info!(
            game_id = %game_id,
            round_number,
            brand = %brand.name,
            "created round"
        );

        Ok((RoundDetail { round, roles }, brand))
    }

    /// Apply a partial update to a round. A true `saboteur_won` finishes the
    /// game immediately and credits the win.
    pub async fn update_round(
        &self,
        round_id: Uuid,
        update: RoundUpdate,
    ) -> Result<RoundDetail, StoreError> {
        let mut round = self.round_row(round_id).await?;

        if let Some(next) = update.status {
            if !round.status.can_advance_to(next) {
                return Err(StoreError::StatusRegression {
                    from: round.status,
                    to: next,
                });
            }
        }

        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        if let Some(next) = update.status {
            sqlx::query("UPDATE rounds SET status = ? WHERE id = ?")
                .bind(next.as_str())
                .bind(round_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::Query(e.to_string()))?;
            round.status = next;
        }

        if let Some(won) = update.saboteur_won {
            sqlx::query("UPDATE rounds SET saboteur_won = ? WHERE id = ?")
                .bind(won)
                .bind(round_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::Query(e.to_string()))?;
            round.saboteur_won = Some(won);

            if won {
                sqlx::query(
                    "UPDATE games SET status = ?, saboteur_wins = saboteur_wins + 1 WHERE id = ?",
                )
                .bind(GameStatus::Finished.as_str())
                .bind(round.game_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::Query(e.to_string()))?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        let players = self.players_of(round.game_id).await?;
        let roles = self.roles_of(round.id, &players).await?;
        Ok(RoundDetail { round, roles })
    }

    /// Mark a role as revealed. When the last role of the round flips, the
    /// round advances to DRAWING and the game to PLAYING in the same
    /// transaction. Re-revealing is a no-op.
    pub async fn reveal_role(
        &self,
        round_role_id: Uuid,
    ) -> Result<(RoundRoleDetail, bool), StoreError> {
        let row = sqlx::query("SELECT * FROM round_roles WHERE id = ?")
            .bind(round_role_id.to_string())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut round_role = match row {
            Some(row) => round_role_from_row(&row)?,
            None => return Err(StoreError::RoleNotFound(round_role_id)),
        };
        let round = self.round_row(round_role.round_id).await?;

        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        sqlx::query("UPDATE round_roles SET revealed = 1 WHERE id = ?")
            .bind(round_role_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        round_role.revealed = true;

        let remaining: i64 =
            sqlx::query("SELECT COUNT(*) AS remaining FROM round_roles WHERE round_id = ? AND revealed = 0")
                .bind(round.id.to_string())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| StoreError::Query(e.to_string()))?
                .get("remaining");
        let all_revealed = remaining == 0;

        // Only the reveal phase itself advances; a stray re-reveal after the
        // round moved on must not drag it back to DRAWING.
        if all_revealed && round.status == RoundStatus::RevealRoles {
            sqlx::query("UPDATE rounds SET status = ? WHERE id = ?")
                .bind(RoundStatus::Drawing.as_str())
                .bind(round.id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::Query(e.to_string()))?;

            sqlx::query("UPDATE games SET status = ? WHERE id = ?")
                .bind(GameStatus::Playing.as_str())
                .bind(round.game_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::Query(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        let players = self.players_of(round.game_id).await?;
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

        tracing::debug!(
            round_id = %round.id,
            player = %player.name,
            all_revealed,
            "revealed role"
        );

        Ok((RoundRoleDetail { round_role, player }, all_revealed))
    }

    pub(crate) async fn round_row(&self, id: Uuid) -> Result<Round, StoreError> {
        let row = sqlx::query("SELECT * FROM rounds WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        match row {
            Some(row) => round_from_row(&row),
            None => Err(StoreError::RoundNotFound(id)),
        }
    }
}
