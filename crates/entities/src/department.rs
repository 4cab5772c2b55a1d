//! Department entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ministry department consultants belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier.
    pub id: Uuid,
    /// Department name.
    pub name: String,
    /// Short description shown on the request form.
    pub description: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl Department {
    /// Creates a new department.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_creation() {
        let dept = Department::new("Counseling", "One-on-one support");

        assert_eq!(dept.name, "Counseling");
        assert_eq!(dept.description, "One-on-one support");
    }
}
