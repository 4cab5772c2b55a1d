//! API wire type definitions.
//!
//! Wire types carry ids as strings and mirror the entity shapes; the
//! submitter profile is reused from `entities` since it is already plain
//! serializable data.

use chrono::{DateTime, Utc};
use entities::StudentProfile;
use serde::{Deserialize, Serialize};

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Consultant,
    Admin,
}

impl From<entities::Role> for Role {
    fn from(role: entities::Role) -> Self {
        match role {
            entities::Role::Student => Role::Student,
            entities::Role::Consultant => Role::Consultant,
            entities::Role::Admin => Role::Admin,
        }
    }
}

impl From<Role> for entities::Role {
    fn from(role: Role) -> Self {
        match role {
            Role::Student => entities::Role::Student,
            Role::Consultant => entities::Role::Consultant,
            Role::Admin => entities::Role::Admin,
        }
    }
}

/// Consultation lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsultationStatus {
    Pending,
    AwaitingAcceptance,
    Active,
    Paused,
    Completed,
}

impl From<entities::ConsultationStatus> for ConsultationStatus {
    fn from(status: entities::ConsultationStatus) -> Self {
        match status {
            entities::ConsultationStatus::Pending => ConsultationStatus::Pending,
            entities::ConsultationStatus::AwaitingAcceptance => {
                ConsultationStatus::AwaitingAcceptance
            }
            entities::ConsultationStatus::Active => ConsultationStatus::Active,
            entities::ConsultationStatus::Paused => ConsultationStatus::Paused,
            entities::ConsultationStatus::Completed => ConsultationStatus::Completed,
        }
    }
}

impl From<ConsultationStatus> for entities::ConsultationStatus {
    fn from(status: ConsultationStatus) -> Self {
        match status {
            ConsultationStatus::Pending => entities::ConsultationStatus::Pending,
            ConsultationStatus::AwaitingAcceptance => {
                entities::ConsultationStatus::AwaitingAcceptance
            }
            ConsultationStatus::Active => entities::ConsultationStatus::Active,
            ConsultationStatus::Paused => entities::ConsultationStatus::Paused,
            ConsultationStatus::Completed => entities::ConsultationStatus::Completed,
        }
    }
}

/// A user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub department_id: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&entities::User> for User {
    fn from(user: &entities::User) -> Self {
        Self {
            id: user.id.to_string(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            avatar_url: user.avatar_url.clone(),
            role: user.role.into(),
            department_id: user.department_id.map(|id| id.to_string()),
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// A department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<&entities::Department> for Department {
    fn from(department: &entities::Department) -> Self {
        Self {
            id: department.id.to_string(),
            name: department.name.clone(),
            description: department.description.clone(),
            created_at: department.created_at,
        }
    }
}

/// A chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&entities::Message> for Message {
    fn from(message: &entities::Message) -> Self {
        Self {
            id: message.id.to_string(),
            sender_id: message.sender_id.to_string(),
            text: message.text.clone(),
            timestamp: message.timestamp,
        }
    }
}

/// A chat message classified for the requesting viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatLine {
    pub message: Message,
    pub own: bool,
}

/// A consultation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    pub id: String,
    pub student_id: String,
    pub consultant_id: Option<String>,
    pub department_id: String,
    pub status: ConsultationStatus,
    pub student_accepted: bool,
    pub consultant_accepted: bool,
    pub problem_description: String,
    pub preferred_time: String,
    pub messages: Vec<Message>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub testimonial: Option<String>,
    pub profile: StudentProfile,
    pub created_at: DateTime<Utc>,
}

impl From<&entities::Consultation> for Consultation {
    fn from(consultation: &entities::Consultation) -> Self {
        Self {
            id: consultation.id.to_string(),
            student_id: consultation.student_id.to_string(),
            consultant_id: consultation.consultant_id.map(|id| id.to_string()),
            department_id: consultation.department_id.to_string(),
            status: consultation.status.into(),
            student_accepted: consultation.student_accepted,
            consultant_accepted: consultation.consultant_accepted,
            problem_description: consultation.problem_description.clone(),
            preferred_time: consultation.preferred_time.clone(),
            messages: consultation.messages.iter().map(Message::from).collect(),
            last_message_at: consultation.last_message_at,
            testimonial: consultation.testimonial.clone(),
            profile: consultation.profile.clone(),
            created_at: consultation.created_at,
        }
    }
}

/// A donation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub amount: f64,
    pub phone_number: String,
    pub transaction_id: String,
    pub screenshot_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<&entities::Donation> for Donation {
    fn from(donation: &entities::Donation) -> Self {
        Self {
            id: donation.id.to_string(),
            name: donation.name.clone(),
            email: donation.email.clone(),
            amount: donation.amount,
            phone_number: donation.phone_number.clone(),
            transaction_id: donation.transaction_id.clone(),
            screenshot_url: donation.screenshot_url.clone(),
            created_at: donation.created_at,
        }
    }
}

/// A news announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl From<&entities::NewsArticle> for NewsArticle {
    fn from(article: &entities::NewsArticle) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.title.clone(),
            content: article.content.clone(),
            author: article.author.clone(),
            image_url: article.image_url.clone(),
            published_at: article.published_at,
        }
    }
}

/// A published testimonial, projected from a completed consultation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub quote: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            entities::ConsultationStatus::Pending,
            entities::ConsultationStatus::AwaitingAcceptance,
            entities::ConsultationStatus::Active,
            entities::ConsultationStatus::Paused,
            entities::ConsultationStatus::Completed,
        ] {
            let wire: ConsultationStatus = status.into();
            let back: entities::ConsultationStatus = wire.into();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_user_conversion() {
        let user = entities::User::new("Test User", "test@example.com")
            .with_role(entities::Role::Consultant)
            .with_department(uuid::Uuid::new_v4());
        let wire = User::from(&user);

        assert_eq!(wire.id, user.id.to_string());
        assert_eq!(wire.role, Role::Consultant);
        assert_eq!(wire.department_id, user.department_id.map(|d| d.to_string()));
    }

    #[test]
    fn test_status_wire_spelling() {
        let json = serde_json::to_string(&ConsultationStatus::AwaitingAcceptance).unwrap();
        assert_eq!(json, "\"AWAITING_ACCEPTANCE\"");
    }
}
