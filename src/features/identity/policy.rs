//! Ownership policy shared by categories and links.
//!
//! Admin may modify or delete anything that exists. Everyone else may only
//! touch records they own. A record that cannot be found is denied exactly
//! like a foreign record, so callers cannot probe for ids.

use crate::core::error::{AppError, Result};
use crate::features::identity::model::ActingUser;

/// Decide whether `actor` may modify a record owned by `owner`.
///
/// `owner` is `None` when the record does not exist.
pub fn can_modify(owner: Option<&str>, actor: &ActingUser) -> bool {
    match owner {
        None => false,
        Some(_) if actor.is_admin() => true,
        Some(owner) => owner == actor.user,
    }
}

/// [`can_modify`] as a `Result`, logging the denial.
pub fn ensure_can_modify(kind: &str, id: i64, owner: Option<&str>, actor: &ActingUser) -> Result<()> {
    if can_modify(owner, actor) {
        return Ok(());
    }

    tracing::warn!(
        "Denied modification of {} {} by {} (owner: {})",
        kind,
        id,
        actor.user,
        owner.unwrap_or("<missing>")
    );
    Err(AppError::PermissionDenied)
}
