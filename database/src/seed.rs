use std::path::Path;

use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;

#[derive(Debug, Deserialize)]
struct BrandSeed {
    name: String,
    domain: Option<String>,
    category: String,
    difficulty: i64,
    description: Option<String>,
    hint: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BrandsFile {
    brands: Vec<BrandSeed>,
}

/// Sync the brand catalog from a JSON file, upserting by unique name so a
/// reseed updates existing rows instead of duplicating them. Returns the
/// number of brands in the file.
pub async fn seed_brands(pool: &SqlitePool, path: &Path) -> Result<usize, StoreError> {
    let raw = std::fs::read_to_string(path)?;
    let file: BrandsFile = serde_json::from_str(&raw)?;

    if file.brands.is_empty() {
        tracing::warn!(path = %path.display(), "no brands found in seed file, skipping");
        return Ok(0);
    }

    for brand in &file.brands {
        sqlx::query(
            "INSERT INTO brands (id, name, domain, category, difficulty, description, hint)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(name) DO UPDATE SET
                domain = excluded.domain,
                category = excluded.category,
                difficulty = excluded.difficulty,
                description = excluded.description,
                hint = excluded.hint",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&brand.name)
        .bind(&brand.domain)
        .bind(&brand.category)
        .bind(brand.difficulty)
        .bind(&brand.description)
        .bind(&brand.hint)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;
    }

    tracing::info!(count = file.brands.len(), "synced brands from seed file");
    Ok(file.brands.len())
}
