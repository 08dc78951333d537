use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::Role,
};

/// Declarative role check: handlers state the roles they accept instead of
/// re-implementing comparisons.
pub fn require_role(claims: &Claims, allowed: &[Role]) -> AppResult<()> {
    if !allowed.contains(&claims.role) {
        return Err(AppError::Forbidden(
            "Insufficient role for this action".to_string(),
        ));
    }
    Ok(())
}

/// Resource-level check: owners see their own exams, super admins see all.
pub fn require_owner_or_admin(claims: &Claims, owner_id: i64) -> AppResult<()> {
    if claims.role != Role::SuperAdmin && claims.sub != owner_id.to_string() {
        return Err(AppError::Forbidden(
            "You can only access your own exams".to_string(),
        ));
    }
    Ok(())
}
