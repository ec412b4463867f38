//! Validation collaborator. Checks are applied at the persistence boundary,
//! before a write is accepted by the storage layer.

use crate::{CoreError, CoreResult};

/// Reject values that are empty or contain only whitespace.
#[track_caller]
pub fn require_non_blank(value: &str, field: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(
            field,
            format!("{field} must not be blank"),
        ));
    }
    Ok(())
}
