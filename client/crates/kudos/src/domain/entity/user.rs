//! User Entity
//!
//! Profile of an application user as served by the backend. Constructed
//! only by the repository layer from verified wire data; carries no
//! behavior beyond pure predicates.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{Role, Team};

/// User entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Backend-issued identifier
    pub id: String,
    pub email: String,
    pub name: String,
    /// Assigned roles; empty for a user with no explicit grants
    pub roles: Vec<Role>,
    /// Whether an admin has approved the account
    pub approved: bool,
    pub team: Option<Team>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether any assigned role grants administrative access
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(Role::is_admin)
    }

    /// Whether the account has passed the approval queue
    #[inline]
    pub fn is_approved(&self) -> bool {
        self.approved
    }

    /// Whether the user carries the named role
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|role| role.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_roles(roles: Vec<Role>) -> User {
        let now = Utc::now();
        User {
            id: "u1".to_string(),
            email: "a@example.com".to_string(),
            name: "Ada".to_string(),
            roles,
            approved: true,
            team: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(user_with_roles(vec![Role::new("r1", "admin")]).is_admin());
        assert!(!user_with_roles(vec![Role::new("r2", "member")]).is_admin());
        assert!(!user_with_roles(vec![]).is_admin());
    }

    #[test]
    fn test_has_role() {
        let user = user_with_roles(vec![Role::new("r1", "member")]);
        assert!(user.has_role("member"));
        assert!(!user.has_role("admin"));
    }
}
