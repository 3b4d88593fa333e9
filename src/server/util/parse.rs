use uuid::Uuid;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a UUID stored as a String, e.g. a user id kept in the session.
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed
/// - `Err(AppError::InternalErr(ParseStringId))` - The stored value is not a UUID
pub fn parse_uuid_from_string(value: String) -> Result<Uuid, AppError> {
    let result = Uuid::parse_str(&value).map_err(|e| InternalError::ParseStringId {
        value,
        source: e,
    })?;

    Ok(result)
}
