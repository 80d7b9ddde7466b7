pub mod brands;
pub mod games;
pub mod logo;
pub mod rounds;

use uuid::Uuid;

use crate::error::ApiError;

/// Parse a required entity id from a query or body field: missing ids answer
/// `<Entity> ID required`, malformed ones `Invalid <entity> ID`, both 400.
fn require_id(value: Option<&str>, entity: &str) -> Result<Uuid, ApiError> {
    let raw = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request(format!("{entity} ID required")))?;
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(format!("Invalid {entity} ID")))
}
