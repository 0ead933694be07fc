//! Kudos Entity
//!
//! One recognition message from a sender to one or more recipients.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{Category, Recipient};

/// Kudos entity
#[derive(Debug, Clone, PartialEq)]
pub struct Kudos {
    pub id: String,
    pub message: String,
    /// Absent when the sender chose to stay anonymous
    pub sender: Option<Recipient>,
    /// Never assumed present on the wire; defaults to empty
    pub recipients: Vec<Recipient>,
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
}

impl Kudos {
    /// Whether the sender withheld their identity
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.sender.is_none()
    }

    /// Whether the given user is among the recipients
    pub fn mentions(&self, user_id: &str) -> bool {
        self.recipients.iter().any(|r| r.id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions() {
        let kudos = Kudos {
            id: "k1".to_string(),
            message: "Great launch!".to_string(),
            sender: None,
            recipients: vec![Recipient::new("u2", "Grace")],
            category: None,
            created_at: Utc::now(),
        };
        assert!(kudos.is_anonymous());
        assert!(kudos.mentions("u2"));
        assert!(!kudos.mentions("u1"));
    }
}
