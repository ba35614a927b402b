//! Account-to-student ownership checks.

use crate::error::{EngineError, EngineResult};
use crate::models::{RequesterContext, Role, Student};

/// Verifies that a requester may act on a student's record.
///
/// Staff roles pass unconditionally. A student may only target the
/// record linked to their own account, and a parent only a child linked
/// to theirs. This gate runs before any term or result lookup on the
/// authenticated paths; the public PIN path never calls it.
///
/// # Errors
///
/// - [`EngineError::RoleNotPermitted`] for anonymous requesters.
/// - [`EngineError::NotLinked`] when the link check fails.
pub fn ensure_owned(student: &Student, requester: &RequesterContext) -> EngineResult<()> {
    match requester.role {
        Role::Teacher | Role::Admin => Ok(()),
        Role::Student => ensure_link(student, &student.user_id, requester),
        Role::Parent => ensure_link(student, &student.parent_id, requester),
        Role::Anonymous => Err(EngineError::RoleNotPermitted {
            message: "authentication required".to_string(),
        }),
    }
}

fn ensure_link(
    student: &Student,
    linked: &Option<String>,
    requester: &RequesterContext,
) -> EngineResult<()> {
    match (linked, &requester.actor_id) {
        (Some(link), Some(actor)) if link == actor => Ok(()),
        _ => Err(EngineError::NotLinked {
            student_id: student.student_id.clone(),
        }),
    }
}
