//! Consultation entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Message, StudentProfile};

/// Lifecycle status of a consultation.
///
/// Stored and transmitted in the upper-case form used by the web client
/// (`PENDING`, `AWAITING_ACCEPTANCE`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsultationStatus {
    /// Created by a student, no consultant assigned yet.
    Pending,
    /// Consultant assigned, waiting for both parties to accept.
    AwaitingAcceptance,
    /// Both parties accepted. The only status in which chat is enabled.
    Active,
    /// Administratively paused. Chat disabled.
    Paused,
    /// Closed by the consultant. Chat disabled; one testimonial allowed.
    Completed,
}

impl Default for ConsultationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::AwaitingAcceptance => "AWAITING_ACCEPTANCE",
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Completed => "COMPLETED",
        };
        f.write_str(s)
    }
}

/// The pre-image of a consultation's lifecycle fields, captured before a
/// transition is computed.
///
/// A guarded store write compares this against the stored document and
/// fails closed when they no longer match, so two parties acting on the
/// same stale snapshot cannot silently overwrite each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusGuard {
    /// Expected status.
    pub status: ConsultationStatus,
    /// Expected student acceptance flag.
    pub student_accepted: bool,
    /// Expected consultant acceptance flag.
    pub consultant_accepted: bool,
}

/// The central record tracking one student's support request through
/// assignment, mutual acceptance, active chat, and completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    /// Unique identifier.
    pub id: Uuid,
    /// The requesting student.
    pub student_id: Uuid,
    /// The assigned consultant. Unset while the request is pending.
    pub consultant_id: Option<Uuid>,
    /// The department the request was filed under.
    pub department_id: Uuid,
    /// Current lifecycle status.
    pub status: ConsultationStatus,
    /// Whether the student has accepted the assignment.
    pub student_accepted: bool,
    /// Whether the assigned consultant has accepted the assignment.
    pub consultant_accepted: bool,
    /// What the student needs help with.
    pub problem_description: String,
    /// Preferred meeting time, free-form.
    pub preferred_time: String,
    /// Chat log, append-only, in insertion order.
    pub messages: Vec<Message>,
    /// Timestamp of the latest message.
    pub last_message_at: Option<DateTime<Utc>>,
    /// Testimonial left by the student after completion. First write wins.
    pub testimonial: Option<String>,
    /// The submitter's profile at request time.
    pub profile: StudentProfile,
    /// When this record was created. Immutable.
    pub created_at: DateTime<Utc>,
}

impl Consultation {
    /// Creates a new consultation request. Always starts pending with no
    /// consultant and both acceptance flags cleared.
    pub fn new(
        student_id: Uuid,
        department_id: Uuid,
        problem_description: impl Into<String>,
        preferred_time: impl Into<String>,
        profile: StudentProfile,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            consultant_id: None,
            department_id,
            status: ConsultationStatus::Pending,
            student_accepted: false,
            consultant_accepted: false,
            problem_description: problem_description.into(),
            preferred_time: preferred_time.into(),
            messages: Vec::new(),
            last_message_at: None,
            testimonial: None,
            profile,
            created_at: Utc::now(),
        }
    }

    /// Captures the lifecycle pre-image for a guarded store write.
    pub fn guard(&self) -> StatusGuard {
        StatusGuard {
            status: self.status,
            student_accepted: self.student_accepted,
            consultant_accepted: self.consultant_accepted,
        }
    }

    /// Returns true if the given user is the student or the assigned
    /// consultant on this consultation.
    pub fn is_participant(&self, user_id: Uuid) -> bool {
        self.student_id == user_id || self.consultant_id == Some(user_id)
    }

    /// Returns true if messages may currently be appended.
    pub fn chat_enabled(&self) -> bool {
        self.status == ConsultationStatus::Active
    }
}
