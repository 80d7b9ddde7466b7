pub mod assignment;
pub mod role;
pub mod status;

pub use assignment::{architect_index, pick, resolve_role};
pub use role::Role;
pub use status::{GameStatus, ParseStatusError, RoundStatus};
