use std::fmt;

/// Admin role names recognized by the client
const ADMIN_ROLE_NAMES: &[&str] = &["admin", "super_admin"];

/// A role attached to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: String,
}

impl Role {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Whether this role grants administrative access
    #[inline]
    pub fn is_admin(&self) -> bool {
        ADMIN_ROLE_NAMES.contains(&self.name.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        assert!(Role::new("r1", "admin").is_admin());
        assert!(Role::new("r2", "super_admin").is_admin());
        assert!(!Role::new("r3", "member").is_admin());
        assert!(!Role::new("r4", "Admin").is_admin());
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::new("r1", "member").to_string(), "member");
    }
}
