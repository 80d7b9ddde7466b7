//! Integration tests for the game store, run against in-memory SQLite.

use database::models::RoundUpdate;
use database::{create_schema, GameStore, StoreError};
use sqlx::sqlite::SqlitePoolOptions;
use types::{GameStatus, Role, RoundStatus};
use uuid::Uuid;

async fn setup_store() -> GameStore {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    create_schema(&pool).await.expect("Failed to create schema");
    GameStore::new(pool)
}

async fn insert_brands(store: &GameStore, count: usize) {
    for i in 0..count {
        sqlx::query(
            "INSERT INTO brands (id, name, domain, category, difficulty, description, hint)
             VALUES (?, ?, ?, ?, ?, NULL, NULL)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(format!("Brand {i:02}"))
        .bind(format!("brand{i}.example"))
        .bind("Test")
        .bind((i % 3 + 1) as i64)
        .execute(store.pool())
        .await
        .expect("Failed to insert brand");
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_create_game_requires_four_players() {
    let store = setup_store().await;

    let err = store
        .create_game(&names(&["A", "B", "C"]))
        .await
        .expect_err("Three players must be rejected");
    assert!(matches!(err, StoreError::InsufficientPlayers(3)));
}

#[tokio::test]
async fn test_create_game_orders_players() {
    let store = setup_store().await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");

    assert_eq!(game.game.status, GameStatus::Setup);
    assert_eq!(game.game.current_round, 0);
    assert_eq!(game.game.saboteur_wins, 0);
    assert!(game.game.saboteur_id.is_none());
    assert!(game.saboteur.is_none());
    assert!(game.rounds.is_empty());

    let player_names: Vec<_> = game.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(player_names, vec!["A", "B", "C", "D"]);
    for (index, player) in game.players.iter().enumerate() {
        assert_eq!(player.order, index as i64);
    }
}

#[tokio::test]
async fn test_create_round_assigns_roles() {
    let store = setup_store().await;
    insert_brands(&store, 6).await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");
    let (round, brand) = store
        .create_round(game.game.id)
        .await
        .expect("Failed to create round");

    assert_eq!(round.round.round_number, 0);
    assert_eq!(round.round.status, RoundStatus::RevealRoles);
    assert_eq!(round.round.brand_id, brand.id);
    assert_eq!(round.round.brand_name, brand.name);
    assert_eq!(round.round.saboteur_won, None);
    assert_eq!(round.roles.len(), 4);

    // Round 0: the architect is the first player by join order.
    let architects: Vec<_> = round
        .roles
        .iter()
        .filter(|r| r.round_role.role == Role::Architect)
        .collect();
    assert_eq!(architects.len(), 1);
    assert_eq!(architects[0].player.name, "A");

    let refreshed = store.get_game(game.game.id).await.expect("Failed to fetch game");
    let saboteur_id = refreshed.game.saboteur_id.expect("Saboteur must be chosen on round 0");
    assert_eq!(refreshed.game.status, GameStatus::RevealRoles);
    assert_eq!(refreshed.game.current_round, 0);

    // SABOTEUR appears iff the game saboteur is not this round's architect.
    let saboteur_roles: Vec<_> = round
        .roles
        .iter()
        .filter(|r| r.round_role.role == Role::Saboteur)
        .collect();
    if saboteur_id == architects[0].player.id {
        assert!(saboteur_roles.is_empty());
    } else {
        assert_eq!(saboteur_roles.len(), 1);
        assert_eq!(saboteur_roles[0].player.id, saboteur_id);
    }

    // Nobody is unrevealed-by-omission: every other player is PLAYER.
    let player_roles = round
        .roles
        .iter()
        .filter(|r| r.round_role.role == Role::Player)
        .count();
    assert_eq!(player_roles, 4 - 1 - saboteur_roles.len());
}

#[tokio::test]
async fn test_architect_rotation_and_saboteur_stability() {
    let store = setup_store().await;
    insert_brands(&store, 8).await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");

    let mut saboteur_ids = Vec::new();
    let mut brand_ids = Vec::new();
    for expected_index in 0..4 {
        let (round, brand) = store
            .create_round(game.game.id)
            .await
            .expect("Failed to create round");
        let architect = round
            .roles
            .iter()
            .find(|r| r.round_role.role == Role::Architect)
            .expect("Every round has an architect");
        assert_eq!(architect.player.order, expected_index);
        brand_ids.push(brand.id);

        let refreshed = store.get_game(game.game.id).await.expect("Failed to fetch game");
        saboteur_ids.push(refreshed.game.saboteur_id.expect("Saboteur is set"));
        assert_eq!(refreshed.game.current_round, expected_index);
    }

    // One saboteur for the whole game.
    assert!(saboteur_ids.windows(2).all(|w| w[0] == w[1]));

    // No brand repeats within a game.
    let mut deduped = brand_ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), brand_ids.len());

    // A fifth round wraps back to the first player.
    let (round, _) = store
        .create_round(game.game.id)
        .await
        .expect("Failed to create round");
    let architect = round
        .roles
        .iter()
        .find(|r| r.round_role.role == Role::Architect)
        .expect("Every round has an architect");
    assert_eq!(architect.player.order, 0);
}

#[tokio::test]
async fn test_saboteur_as_architect_has_no_saboteur_role() {
    let store = setup_store().await;
    insert_brands(&store, 8).await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");

    // Round 0 fixes the saboteur; play forward to the round where the
    // saboteur's own turn as architect comes up.
    store.create_round(game.game.id).await.expect("Failed to create round");
    let refreshed = store.get_game(game.game.id).await.expect("Failed to fetch game");
    let saboteur = refreshed.saboteur.expect("Saboteur is set");

    let mut round_number = 0;
    loop {
        let detail = store.get_game(game.game.id).await.expect("Failed to fetch game");
        let current = &detail.rounds[round_number];
        let architect = current
            .roles
            .iter()
            .find(|r| r.round_role.role == Role::Architect)
            .expect("Every round has an architect");

        if architect.player.id == saboteur.id {
            assert!(current
                .roles
                .iter()
                .all(|r| r.round_role.role != Role::Saboteur));
            break;
        }

        assert_eq!(
            current
                .roles
                .iter()
                .filter(|r| r.round_role.role == Role::Saboteur)
                .count(),
            1
        );
        store.create_round(game.game.id).await.expect("Failed to create round");
        round_number += 1;
        assert!(round_number < 4, "saboteur must be architect within one cycle");
    }
}

#[tokio::test]
async fn test_round_creation_exhausts_brands() {
    let store = setup_store().await;
    insert_brands(&store, 2).await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");

    store.create_round(game.game.id).await.expect("Round 0 should work");
    store.create_round(game.game.id).await.expect("Round 1 should work");

    let err = store
        .create_round(game.game.id)
        .await
        .expect_err("No brands left");
    assert!(matches!(err, StoreError::NoBrandsAvailable));
}

#[tokio::test]
async fn test_create_round_unknown_game() {
    let store = setup_store().await;
    insert_brands(&store, 2).await;

    let missing = Uuid::new_v4();
    let err = store
        .create_round(missing)
        .await
        .expect_err("Unknown game must fail");
    assert!(matches!(err, StoreError::GameNotFound(id) if id == missing));
}

#[tokio::test]
async fn test_reveal_sequence_advances_statuses() {
    let store = setup_store().await;
    insert_brands(&store, 4).await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");
    let (round, _) = store
        .create_round(game.game.id)
        .await
        .expect("Failed to create round");

    // Reveal in player order; only the last reveal flips the statuses.
    for (index, role) in round.roles.iter().enumerate() {
        let (revealed, all_revealed) = store
            .reveal_role(role.round_role.id)
            .await
            .expect("Failed to reveal role");
        assert!(revealed.round_role.revealed);
        assert_eq!(revealed.player.id, role.player.id);

        let detail = store.get_game(game.game.id).await.expect("Failed to fetch game");
        if index < round.roles.len() - 1 {
            assert!(!all_revealed);
            assert_eq!(detail.rounds[0].round.status, RoundStatus::RevealRoles);
            assert_eq!(detail.game.status, GameStatus::RevealRoles);
        } else {
            assert!(all_revealed);
            assert_eq!(detail.rounds[0].round.status, RoundStatus::Drawing);
            assert_eq!(detail.game.status, GameStatus::Playing);
        }
    }
}

#[tokio::test]
async fn test_reveal_unknown_role() {
    let store = setup_store().await;

    let missing = Uuid::new_v4();
    let err = store
        .reveal_role(missing)
        .await
        .expect_err("Unknown role must fail");
    assert!(matches!(err, StoreError::RoleNotFound(id) if id == missing));
}

#[tokio::test]
async fn test_saboteur_win_finishes_game() {
    let store = setup_store().await;
    insert_brands(&store, 4).await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");
    let (round, _) = store
        .create_round(game.game.id)
        .await
        .expect("Failed to create round");

    let updated = store
        .update_round(
            round.round.id,
            RoundUpdate {
                status: Some(RoundStatus::Completed),
                saboteur_won: Some(true),
            },
        )
        .await
        .expect("Failed to update round");

    assert_eq!(updated.round.status, RoundStatus::Completed);
    assert_eq!(updated.round.saboteur_won, Some(true));

    let detail = store.get_game(game.game.id).await.expect("Failed to fetch game");
    assert_eq!(detail.game.status, GameStatus::Finished);
    assert_eq!(detail.game.saboteur_wins, 1);
}

#[tokio::test]
async fn test_saboteur_loss_keeps_game_running() {
    let store = setup_store().await;
    insert_brands(&store, 4).await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");
    let (round, _) = store
        .create_round(game.game.id)
        .await
        .expect("Failed to create round");

    let updated = store
        .update_round(
            round.round.id,
            RoundUpdate {
                status: Some(RoundStatus::Completed),
                saboteur_won: Some(false),
            },
        )
        .await
        .expect("Failed to update round");
    assert_eq!(updated.round.saboteur_won, Some(false));

    let detail = store.get_game(game.game.id).await.expect("Failed to fetch game");
    assert_ne!(detail.game.status, GameStatus::Finished);
    assert_eq!(detail.game.saboteur_wins, 0);
}

#[tokio::test]
async fn test_update_round_rejects_regression() {
    let store = setup_store().await;
    insert_brands(&store, 4).await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");
    let (round, _) = store
        .create_round(game.game.id)
        .await
        .expect("Failed to create round");

    store
        .update_round(
            round.round.id,
            RoundUpdate {
                status: Some(RoundStatus::Completed),
                saboteur_won: None,
            },
        )
        .await
        .expect("Forward update should work");

    let err = store
        .update_round(
            round.round.id,
            RoundUpdate {
                status: Some(RoundStatus::Drawing),
                saboteur_won: None,
            },
        )
        .await
        .expect_err("Regression must be rejected");
    assert!(matches!(
        err,
        StoreError::StatusRegression {
            from: RoundStatus::Completed,
            to: RoundStatus::Drawing,
        }
    ));
}

#[tokio::test]
async fn test_update_round_unknown_round() {
    let store = setup_store().await;

    let missing = Uuid::new_v4();
    let err = store
        .update_round(missing, RoundUpdate::default())
        .await
        .expect_err("Unknown round must fail");
    assert!(matches!(err, StoreError::RoundNotFound(id) if id == missing));
}

#[tokio::test]
async fn test_update_game_status() {
    let store = setup_store().await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");

    let updated = store
        .update_game_status(game.game.id, GameStatus::Finished)
        .await
        .expect("Failed to update game status");
    assert_eq!(updated.status, GameStatus::Finished);

    let err = store
        .update_game_status(Uuid::new_v4(), GameStatus::Finished)
        .await
        .expect_err("Unknown game must fail");
    assert!(matches!(err, StoreError::GameNotFound(_)));
}

#[tokio::test]
async fn test_delete_game_cascades() {
    let store = setup_store().await;
    insert_brands(&store, 4).await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");
    store.create_round(game.game.id).await.expect("Failed to create round");

    store.delete_game(game.game.id).await.expect("Failed to delete game");

    for table in ["players", "rounds", "round_roles"] {
        let count: i64 = sqlx::Row::get(
            &sqlx::query(&format!("SELECT COUNT(*) AS n FROM {table}"))
                .fetch_one(store.pool())
                .await
                .expect("Failed to count rows"),
            "n",
        );
        assert_eq!(count, 0, "{table} should be empty after cascade");
    }

    // Brands are referenced, never owned: the catalog survives.
    let brands = store.all_brands().await.expect("Failed to list brands");
    assert_eq!(brands.len(), 4);

    let err = store
        .delete_game(game.game.id)
        .await
        .expect_err("Second delete must fail");
    assert!(matches!(err, StoreError::GameNotFound(_)));
}

#[tokio::test]
async fn test_get_game_full_graph() {
    let store = setup_store().await;
    insert_brands(&store, 4).await;

    let game = store
        .create_game(&names(&["A", "B", "C", "D"]))
        .await
        .expect("Failed to create game");
    store.create_round(game.game.id).await.expect("Failed to create round");
    store.create_round(game.game.id).await.expect("Failed to create round");

    let detail = store.get_game(game.game.id).await.expect("Failed to fetch game");
    assert_eq!(detail.players.len(), 4);
    assert_eq!(detail.rounds.len(), 2);
    assert_eq!(detail.rounds[0].round.round_number, 0);
    assert_eq!(detail.rounds[1].round.round_number, 1);

    let saboteur = detail.saboteur.expect("Saboteur populated");
    assert_eq!(Some(saboteur.id), detail.game.saboteur_id);

    for round in &detail.rounds {
        assert_eq!(round.roles.len(), 4);
        // Roles come back in reveal order.
        for (index, role) in round.roles.iter().enumerate() {
            assert_eq!(role.player.order, index as i64);
        }
    }
}

#[tokio::test]
async fn test_brand_catalog_ordering() {
    let store = setup_store().await;

    for (name, difficulty) in [("Zebra", 1), ("Acme", 2), ("Mango", 1), ("Kiwi", 3)] {
        sqlx::query(
            "INSERT INTO brands (id, name, domain, category, difficulty, description, hint)
             VALUES (?, ?, NULL, 'Test', ?, NULL, NULL)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(name)
        .bind(difficulty as i64)
        .execute(store.pool())
        .await
        .expect("Failed to insert brand");
    }

    let brands = store.all_brands().await.expect("Failed to list brands");
    let names: Vec<_> = brands.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Mango", "Zebra", "Acme", "Kiwi"]);

    let used: std::collections::HashSet<_> =
        brands.iter().take(2).map(|b| b.id).collect();
    let available = store
        .available_brands(&used)
        .await
        .expect("Failed to list available brands");
    assert_eq!(available.len(), 2);
    assert!(available.iter().all(|b| !used.contains(&b.id)));
}
