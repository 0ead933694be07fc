//! Session Entity
//!
//! The payload a successful login yields: the bearer token plus the
//! authenticated user's profile.

use crate::domain::entity::user::User;

/// Successful login payload
#[derive(Debug, Clone, PartialEq)]
pub struct LoginData {
    /// Opaque bearer token; persisted by the session service, read before
    /// every outgoing request
    pub token: String,
    pub user: User,
}
