use std::collections::HashSet;

use uuid::Uuid;

use super::{brand_from_row, GameStore};
use crate::error::StoreError;
use crate::models::Brand;

impl GameStore {
    /// The whole catalog, ordered by difficulty then name.
    pub async fn all_brands(&self) -> Result<Vec<Brand>, StoreError> {
        let rows = sqlx::query("SELECT * FROM brands ORDER BY difficulty ASC, name ASC")
            .fetch_all(self.pool())
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        rows.iter().map(brand_from_row).collect()
    }

    /// Brands not yet used by a game's rounds. The catalog is small
    /// reference data, so the exclusion is done over a full fetch.
    pub async fn available_brands(&self, used: &HashSet<Uuid>) -> Result<Vec<Brand>, StoreError> {
        Ok(self
            .all_brands()
            .await?
            .into_iter()
            .filter(|brand| !used.contains(&brand.id))
            .collect())
    }

    pub(crate) async fn used_brand_ids(&self, game_id: Uuid) -> Result<HashSet<Uuid>, StoreError> {
        let rows = sqlx::query("SELECT brand_id FROM rounds WHERE game_id = ?")
            .bind(game_id.to_string())
            .fetch_all(self.pool())
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                let id: String = sqlx::Row::get(row, "brand_id");
                Uuid::parse_str(&id).map_err(StoreError::from)
            })
            .collect()
    }
}
