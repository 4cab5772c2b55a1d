//! Chat log projections.
//!
//! The message list itself lives on the consultation document and only grows
//! through the engine's `SendMessage` transition. These helpers are pure
//! read-side projections over it.

use entities::{Consultation, Message};
use uuid::Uuid;

/// One rendered chat line, classified for the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatLine {
    /// The message, as stored.
    pub message: Message,
    /// True when the viewer sent this message.
    pub own: bool,
}

/// Projects the chat log for display, in insertion order as stored.
pub fn render(consultation: &Consultation, viewer_id: Uuid) -> Vec<ChatLine> {
    consultation
        .messages
        .iter()
        .map(|message| ChatLine {
            message: message.clone(),
            own: message.sender_id == viewer_id,
        })
        .collect()
}

/// Flattens the chat log into `"<displayName>: <text>"` lines for the
/// summarization collaborator.
///
/// Messages from the student resolve to `student_name`; everything else is
/// attributed to `consultant_name`.
pub fn flatten_transcript(
    consultation: &Consultation,
    student_name: &str,
    consultant_name: &str,
) -> String {
    consultation
        .messages
        .iter()
        .map(|message| {
            let name = if message.sender_id == consultation.student_id {
                student_name
            } else {
                consultant_name
            };
            format!("{}: {}", name, message.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use entities::{
        EnrollmentStatus, FellowshipStanding, ProgramTrack, SchoolLevel, StudentProfile,
    };

    fn sample_profile() -> StudentProfile {
        StudentProfile {
            full_name: "Test Student".to_string(),
            email: "student@example.com".to_string(),
            phone_number: "+251900000000".to_string(),
            telegram_username: None,
            mother_church: "Grace Chapel".to_string(),
            entry_year: "2022".to_string(),
            department_name: "Counseling".to_string(),
            school_level: SchoolLevel::FirstYear,
            graduation_year: "2028".to_string(),
            enrollment: EnrollmentStatus::Regular,
            program: ProgramTrack::Degree,
            fellowship: FellowshipStanding::Current,
            talents: Vec::new(),
            special_care: Vec::new(),
            photo_url: None,
            comments: None,
        }
    }

    fn with_messages() -> (Consultation, Uuid, Uuid) {
        let student = Uuid::new_v4();
        let consultant = Uuid::new_v4();
        let mut c = Consultation::new(
            student,
            Uuid::new_v4(),
            "Need advice",
            "Weekends",
            sample_profile(),
        );
        c.consultant_id = Some(consultant);
        c.messages.push(Message::new(student, "Hi, thanks for taking this", Utc::now()));
        c.messages.push(Message::new(consultant, "Glad to help", Utc::now()));
        c.messages.push(Message::new(student, "When can we meet?", Utc::now()));
        (c, student, consultant)
    }

    #[test]
    fn render_classifies_ownership_in_order() {
        let (c, student, _) = with_messages();
        let lines = render(&c, student);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].own);
        assert!(!lines[1].own);
        assert!(lines[2].own);
        assert_eq!(lines[0].message.text, "Hi, thanks for taking this");
        assert_eq!(lines[2].message.text, "When can we meet?");
    }

    #[test]
    fn transcript_resolves_display_names() {
        let (c, _, _) = with_messages();
        let transcript = flatten_transcript(&c, "Abel", "Sara");

        assert_eq!(
            transcript,
            "Abel: Hi, thanks for taking this\nSara: Glad to help\nAbel: When can we meet?"
        );
    }

    #[test]
    fn empty_log_renders_empty() {
        let c = Consultation::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Need advice",
            "Weekends",
            sample_profile(),
        );
        assert!(render(&c, Uuid::new_v4()).is_empty());
        assert_eq!(flatten_transcript(&c, "A", "B"), "");
    }
}
