//! Input checks shared by the services

use crate::domain::ports::IdGenerator;
use crate::error::DomainError;

/// Reject an empty identifier
pub(crate) fn require_id(value: &str, field: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

/// Trim a text field and reject it when nothing is left
pub(crate) fn require_text(value: &str, field: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Draw a fresh id, failing if the generator returns nothing
pub(crate) fn next_id(ids: &IdGenerator) -> Result<String, DomainError> {
    let id = ids();
    if id.is_empty() {
        return Err(DomainError::Internal(
            "id generator returned empty ID".to_string(),
        ));
    }
    Ok(id)
}
