use rand::rngs::OsRng;
use rand::Rng;
use uuid::Uuid;

use crate::role::Role;

/// Index of the architect for a round, rotating through players in join
/// order so every player is architect exactly once per full cycle.
pub fn architect_index(round_number: usize, player_count: usize) -> usize {
    assert!(player_count > 0, "cannot assign an architect without players");
    round_number % player_count
}

/// Resolve a player's role for one round. Architect takes priority: when the
/// game's saboteur is also this round's architect, no SABOTEUR role exists
/// for that round.
pub fn resolve_role(player_id: Uuid, architect_id: Uuid, saboteur_id: Uuid) -> Role {
    if player_id == architect_id {
        Role::Architect
    } else if player_id == saboteur_id {
        Role::Saboteur
    } else {
        Role::Player
    }
}

/// Uniform random pick from a slice, drawn from the operating system's
/// entropy source. Saboteur and brand selection go through here: a
/// predictable generator would let a motivated player deduce the saboteur.
pub fn pick<T>(items: &[T]) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let index = OsRng.gen_range(0..items.len());
    items.get(index)
}
