//! Requester identity supplied by the surrounding auth layer.
//!
//! Authentication is an external collaborator: by the time a request
//! reaches this engine it has been reduced to an optional actor id and a
//! role. The public result-verification path runs as [`Role::Anonymous`]
//! — there the PIN itself is the credential.

use serde::{Deserialize, Serialize};

/// The role a requester acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// No authenticated identity.
    Anonymous,
    /// A student account.
    Student,
    /// A parent account.
    Parent,
    /// A teacher account.
    Teacher,
    /// An administrator account.
    Admin,
}

/// The identity and role behind a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequesterContext {
    /// The authenticated actor id, if any.
    pub actor_id: Option<String>,
    /// The role the actor holds.
    pub role: Role,
}

impl RequesterContext {
    /// An unauthenticated requester.
    pub fn anonymous() -> Self {
        Self {
            actor_id: None,
            role: Role::Anonymous,
        }
    }

    /// An authenticated requester with the given id and role.
    pub fn authenticated(actor_id: impl Into<String>, role: Role) -> Self {
        Self {
            actor_id: Some(actor_id.into()),
            role,
        }
    }

    /// The label recorded in audit entries for this requester.
    pub fn audit_actor(&self) -> String {
        self.actor_id
            .clone()
            .unwrap_or_else(|| "anonymous".to_string())
    }

    /// Whether the requester holds staff privileges.
    pub fn is_staff(&self) -> bool {
        matches!(self.role, Role::Teacher | Role::Admin)
    }
}
