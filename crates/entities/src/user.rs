//! User-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Requests consultations.
    Student,
    /// Handles assigned consultations for one department.
    Consultant,
    /// Manages users, departments, content, and assignments.
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Self::Student
    }
}

/// A user in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Profile picture URL.
    pub avatar_url: Option<String>,
    /// Role in the system.
    pub role: Role,
    /// Department this user serves. Set only for consultants.
    pub department_id: Option<Uuid>,
    /// Whether the account may sign in.
    pub active: bool,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user. Self-signup always starts as a student.
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            email: email.into(),
            avatar_url: None,
            role: Role::Student,
            department_id: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department_id: Uuid) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Sets the avatar URL.
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Returns true if this user may be assigned consultations for the
    /// given department.
    pub fn serves_department(&self, department_id: Uuid) -> bool {
        self.role == Role::Consultant
            && self.active
            && self.department_id == Some(department_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("Test User", "test@example.com");

        assert_eq!(user.full_name, "Test User");
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.role, Role::Student);
        assert!(user.active);
        assert!(user.department_id.is_none());
    }

    #[test]
    fn test_serves_department() {
        let dept = Uuid::new_v4();
        let consultant = User::new("C", "c@example.com")
            .with_role(Role::Consultant)
            .with_department(dept);

        assert!(consultant.serves_department(dept));
        assert!(!consultant.serves_department(Uuid::new_v4()));

        let student = User::new("S", "s@example.com");
        assert!(!student.serves_department(dept));
    }

    #[test]
    fn test_inactive_consultant_does_not_serve() {
        let dept = Uuid::new_v4();
        let mut consultant = User::new("C", "c@example.com")
            .with_role(Role::Consultant)
            .with_department(dept);
        consultant.active = false;

        assert!(!consultant.serves_department(dept));
    }
}
