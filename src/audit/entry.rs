//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A session was established
    Login,
    /// A session ended
    Logout,
    /// Entity was created
    Create,
    /// Entity was updated
    Update,
    /// Entity was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Login => write!(f, "LOGIN"),
            Operation::Logout => write!(f, "LOGOUT"),
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Session,
    Expense,
    Category,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Session => write!(f, "Session"),
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Category => write!(f, "Category"),
        }
    }
}

/// A single audit log entry
///
/// Session entries carry no entity id. Entity entries carry the server id
/// and a label (expense title or category name). Tokens are never recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,

    /// Human-readable label for the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Free-form detail: logout reason, or changed fields for updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, entity_type: EntityType) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: None,
            label: None,
            detail: None,
        }
    }

    /// A session was established; `email` is known only for interactive logins
    pub fn login(email: Option<&str>) -> Self {
        Self {
            label: email.map(str::to_string),
            ..Self::new(Operation::Login, EntityType::Session)
        }
    }

    /// A session ended for `reason` (user, rejected, expired)
    pub fn logout(reason: &str) -> Self {
        Self {
            detail: Some(reason.to_string()),
            ..Self::new(Operation::Logout, EntityType::Session)
        }
    }

    pub fn create(entity_type: EntityType, entity_id: impl ToString, label: &str) -> Self {
        Self {
            entity_id: Some(entity_id.to_string()),
            label: Some(label.to_string()),
            ..Self::new(Operation::Create, entity_type)
        }
    }

    pub fn update(
        entity_type: EntityType,
        entity_id: impl ToString,
        label: &str,
        changes: Option<String>,
    ) -> Self {
        Self {
            entity_id: Some(entity_id.to_string()),
            label: Some(label.to_string()),
            detail: changes,
            ..Self::new(Operation::Update, entity_type)
        }
    }

    pub fn delete(entity_type: EntityType, entity_id: impl ToString, label: Option<&str>) -> Self {
        Self {
            entity_id: Some(entity_id.to_string()),
            label: label.map(str::to_string),
            ..Self::new(Operation::Delete, entity_type)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
        );

        if let Some(id) = &self.entity_id {
            output.push_str(&format!(" #{}", id));
        }

        if let Some(label) = &self.label {
            output.push_str(&format!(" ({})", label));
        }

        if let Some(detail) = &self.detail {
            output.push_str(&format!(": {}", detail));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Login.to_string(), "LOGIN");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_session_entries_have_no_entity_id() {
        let login = AuditEntry::login(Some("a@b.com"));
        assert_eq!(login.entity_type, EntityType::Session);
        assert!(login.entity_id.is_none());
        assert_eq!(login.label.as_deref(), Some("a@b.com"));

        let logout = AuditEntry::logout("expired");
        assert_eq!(logout.operation, Operation::Logout);
        assert_eq!(logout.detail.as_deref(), Some("expired"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::delete(EntityType::Expense, 7, None);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["operation"], "delete");
        assert_eq!(json["entity_type"], "expense");
        assert_eq!(json["entity_id"], "7");
        assert!(json.get("label").is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Expense,
            3,
            "Coffee",
            Some("amount: 4.5 -> 5".into()),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Expense #3 (Coffee): amount: 4.5 -> 5"));
    }
}
