//! The consultation state-transition function.

use chrono::{DateTime, Utc};
use entities::{Consultation, ConsultationStatus, Message, Role, StatusGuard, User};
use uuid::Uuid;

use crate::TransitionError;

/// The authenticated caller requesting a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// User ID.
    pub id: Uuid,
    /// Role, used for the per-action authorization gate.
    pub role: Role,
}

impl Actor {
    /// Creates a new actor.
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }
}

/// The fields of a consultant candidate the assignment check needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsultantRef {
    /// User ID.
    pub id: Uuid,
    /// Role of the candidate.
    pub role: Role,
    /// Department the candidate serves.
    pub department_id: Option<Uuid>,
    /// Whether the account is active.
    pub active: bool,
}

impl From<&User> for ConsultantRef {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
            department_id: user.department_id,
            active: user.active,
        }
    }
}

/// An action requested against a consultation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsultationAction {
    /// Admin assigns (or reassigns) a consultant.
    Assign { consultant: ConsultantRef },
    /// A participant accepts the assignment.
    Accept,
    /// A participant sends a chat message.
    SendMessage { text: String },
    /// The assigned consultant closes the consultation.
    Complete,
    /// The student leaves a one-time testimonial.
    SubmitTestimonial { text: String },
}

/// The outcome of a legal transition.
///
/// `guard` is the lifecycle pre-image the caller must pass to the store so
/// the write fails closed if the document moved underneath it.
#[derive(Debug, Clone)]
pub struct Transition {
    /// The consultation post-image to persist.
    pub consultation: Consultation,
    /// The message created by a `SendMessage` action, if any.
    pub appended: Option<Message>,
    /// The lifecycle pre-image for the conditional write.
    pub guard: StatusGuard,
}

/// Decides whether `action` is legal on `current` for `actor`, and if so
/// computes the next state. Pure: persistence of the result is the caller's
/// job, and `current` is never mutated.
pub fn apply(
    current: &Consultation,
    actor: &Actor,
    action: ConsultationAction,
    now: DateTime<Utc>,
) -> Result<Transition, TransitionError> {
    match action {
        ConsultationAction::Assign { consultant } => assign(current, actor, consultant),
        ConsultationAction::Accept => accept(current, actor),
        ConsultationAction::SendMessage { text } => send_message(current, actor, text, now),
        ConsultationAction::Complete => complete(current, actor),
        ConsultationAction::SubmitTestimonial { text } => submit_testimonial(current, actor, text),
    }
}

fn assign(
    current: &Consultation,
    actor: &Actor,
    consultant: ConsultantRef,
) -> Result<Transition, TransitionError> {
    if actor.role != Role::Admin {
        return Err(TransitionError::NotPermitted {
            action: "assign a consultant",
        });
    }
    // Reassignment while still awaiting acceptance is allowed and resets
    // both acceptance flags.
    if !matches!(
        current.status,
        ConsultationStatus::Pending | ConsultationStatus::AwaitingAcceptance
    ) {
        return Err(TransitionError::NotAssignable {
            status: current.status,
        });
    }
    if consultant.role != Role::Consultant || !consultant.active {
        return Err(TransitionError::ConsultantIneligible);
    }
    if consultant.department_id != Some(current.department_id) {
        return Err(TransitionError::DepartmentMismatch);
    }

    let guard = current.guard();
    let mut next = current.clone();
    next.consultant_id = Some(consultant.id);
    next.student_accepted = false;
    next.consultant_accepted = false;
    next.status = ConsultationStatus::AwaitingAcceptance;

    Ok(Transition {
        consultation: next,
        appended: None,
        guard,
    })
}

fn accept(current: &Consultation, actor: &Actor) -> Result<Transition, TransitionError> {
    if !current.is_participant(actor.id) {
        return Err(TransitionError::NotPermitted {
            action: "accept the assignment",
        });
    }

    let already_accepted = if actor.id == current.student_id {
        current.student_accepted
    } else {
        current.consultant_accepted
    };

    match current.status {
        ConsultationStatus::AwaitingAcceptance => {}
        // Re-issuing an accept after the consultation went active is a
        // harmless no-op, not an error.
        ConsultationStatus::Active if already_accepted => {
            return Ok(Transition {
                consultation: current.clone(),
                appended: None,
                guard: current.guard(),
            });
        }
        status => return Err(TransitionError::NotAwaitingAcceptance { status }),
    }

    let guard = current.guard();
    let mut next = current.clone();
    if actor.id == next.student_id {
        next.student_accepted = true;
    } else {
        next.consultant_accepted = true;
    }
    // Recompute from the freshly merged flags. Whichever party accepts
    // second is the one whose action activates the consultation.
    if next.student_accepted && next.consultant_accepted {
        next.status = ConsultationStatus::Active;
    }

    Ok(Transition {
        consultation: next,
        appended: None,
        guard,
    })
}

fn send_message(
    current: &Consultation,
    actor: &Actor,
    text: String,
    now: DateTime<Utc>,
) -> Result<Transition, TransitionError> {
    if !current.is_participant(actor.id) {
        return Err(TransitionError::NotPermitted {
            action: "send a message",
        });
    }
    if current.status != ConsultationStatus::Active {
        return Err(TransitionError::ChatDisabled {
            status: current.status,
        });
    }
    if text.trim().is_empty() {
        return Err(TransitionError::EmptyMessage);
    }

    let guard = current.guard();
    let mut next = current.clone();
    let message = Message::new(actor.id, text, now);
    next.messages.push(message.clone());
    next.last_message_at = Some(now);

    Ok(Transition {
        consultation: next,
        appended: Some(message),
        guard,
    })
}

fn complete(current: &Consultation, actor: &Actor) -> Result<Transition, TransitionError> {
    let is_assigned_consultant = current.consultant_id == Some(actor.id);
    if !is_assigned_consultant && actor.role != Role::Admin {
        return Err(TransitionError::NotPermitted {
            action: "complete the consultation",
        });
    }
    if current.status != ConsultationStatus::Active {
        return Err(TransitionError::NotActive {
            status: current.status,
        });
    }

    let guard = current.guard();
    let mut next = current.clone();
    next.status = ConsultationStatus::Completed;

    Ok(Transition {
        consultation: next,
        appended: None,
        guard,
    })
}

fn submit_testimonial(
    current: &Consultation,
    actor: &Actor,
    text: String,
) -> Result<Transition, TransitionError> {
    if actor.id != current.student_id {
        return Err(TransitionError::NotPermitted {
            action: "submit a testimonial",
        });
    }
    if current.status != ConsultationStatus::Completed {
        return Err(TransitionError::NotCompleted {
            status: current.status,
        });
    }
    if current.testimonial.is_some() {
        return Err(TransitionError::TestimonialAlreadySubmitted);
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TransitionError::EmptyTestimonial);
    }

    let guard = current.guard();
    let mut next = current.clone();
    next.testimonial = Some(trimmed.to_string());

    Ok(Transition {
        consultation: next,
        appended: None,
        guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
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
            school_level: SchoolLevel::ThirdYear,
            graduation_year: "2027".to_string(),
            enrollment: EnrollmentStatus::Regular,
            program: ProgramTrack::Degree,
            fellowship: FellowshipStanding::Current,
            talents: Vec::new(),
            special_care: Vec::new(),
            photo_url: None,
            comments: None,
        }
    }

    struct Fixture {
        consultation: Consultation,
        student: Actor,
        consultant: Actor,
        consultant_ref: ConsultantRef,
        admin: Actor,
    }

    fn fixture() -> Fixture {
        let student_id = Uuid::new_v4();
        let consultant_id = Uuid::new_v4();
        let department_id = Uuid::new_v4();
        let consultation = Consultation::new(
            student_id,
            department_id,
            "Struggling with coursework and faith",
            "Weekday evenings",
            sample_profile(),
        );
        Fixture {
            consultation,
            student: Actor::new(student_id, Role::Student),
            consultant: Actor::new(consultant_id, Role::Consultant),
            consultant_ref: ConsultantRef {
                id: consultant_id,
                role: Role::Consultant,
                department_id: Some(department_id),
                active: true,
            },
            admin: Actor::new(Uuid::new_v4(), Role::Admin),
        }
    }

    /// status == ACTIVE iff both flags; AWAITING_ACCEPTANCE iff assigned
    /// and not both flags.
    fn assert_invariant(c: &Consultation) {
        let both = c.student_accepted && c.consultant_accepted;
        assert_eq!(c.status == ConsultationStatus::Active, both);
        assert_eq!(c.status == ConsultationStatus::Pending, c.consultant_id.is_none());
        if c.status == ConsultationStatus::AwaitingAcceptance {
            assert!(c.consultant_id.is_some());
            assert!(!both);
        }
    }

    fn assign(f: &Fixture, c: &Consultation) -> Consultation {
        apply(
            c,
            &f.admin,
            ConsultationAction::Assign {
                consultant: f.consultant_ref,
            },
            Utc::now(),
        )
        .unwrap()
        .consultation
    }

    fn accept(c: &Consultation, actor: &Actor) -> Consultation {
        apply(c, actor, ConsultationAction::Accept, Utc::now())
            .unwrap()
            .consultation
    }

    fn activated(f: &Fixture) -> Consultation {
        let c = assign(f, &f.consultation);
        let c = accept(&c, &f.student);
        accept(&c, &f.consultant)
    }

    #[test]
    fn full_happy_path() {
        let f = fixture();
        assert_eq!(f.consultation.status, ConsultationStatus::Pending);
        assert_invariant(&f.consultation);

        let c = assign(&f, &f.consultation);
        assert_eq!(c.status, ConsultationStatus::AwaitingAcceptance);
        assert_eq!(c.consultant_id, Some(f.consultant.id));
        assert!(!c.student_accepted && !c.consultant_accepted);
        assert_invariant(&c);

        let c = accept(&c, &f.student);
        assert_eq!(c.status, ConsultationStatus::AwaitingAcceptance);
        assert!(c.student_accepted && !c.consultant_accepted);
        assert_invariant(&c);

        let c = accept(&c, &f.consultant);
        assert_eq!(c.status, ConsultationStatus::Active);
        assert!(c.student_accepted && c.consultant_accepted);
        assert_invariant(&c);

        let transition = apply(
            &c,
            &f.student,
            ConsultationAction::SendMessage {
                text: "Hello".to_string(),
            },
            Utc::now(),
        )
        .unwrap();
        let c = transition.consultation;
        assert_eq!(c.messages.len(), 1);
        assert_eq!(c.messages[0].sender_id, f.student.id);
        assert_eq!(c.messages[0].text, "Hello");
        assert_eq!(c.last_message_at, Some(c.messages[0].timestamp));
        assert_eq!(transition.appended.unwrap().id, c.messages[0].id);

        let c = apply(&c, &f.consultant, ConsultationAction::Complete, Utc::now())
            .unwrap()
            .consultation;
        assert_eq!(c.status, ConsultationStatus::Completed);

        let c = apply(
            &c,
            &f.student,
            ConsultationAction::SubmitTestimonial {
                text: "Great help".to_string(),
            },
            Utc::now(),
        )
        .unwrap()
        .consultation;
        assert_eq!(c.testimonial.as_deref(), Some("Great help"));
    }

    #[test]
    fn assign_requires_admin() {
        let f = fixture();
        let err = apply(
            &f.consultation,
            &f.student,
            ConsultationAction::Assign {
                consultant: f.consultant_ref,
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, TransitionError::NotPermitted { .. }));
    }

    #[test]
    fn assign_rejects_department_mismatch() {
        let f = fixture();
        let foreign = ConsultantRef {
            department_id: Some(Uuid::new_v4()),
            ..f.consultant_ref
        };
        let err = apply(
            &f.consultation,
            &f.admin,
            ConsultationAction::Assign { consultant: foreign },
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(err, TransitionError::DepartmentMismatch);
    }

    #[test]
    fn assign_rejects_non_consultant_and_inactive() {
        let f = fixture();
        let not_consultant = ConsultantRef {
            role: Role::Student,
            ..f.consultant_ref
        };
        let err = apply(
            &f.consultation,
            &f.admin,
            ConsultationAction::Assign {
                consultant: not_consultant,
            },
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(err, TransitionError::ConsultantIneligible);

        let inactive = ConsultantRef {
            active: false,
            ..f.consultant_ref
        };
        let err = apply(
            &f.consultation,
            &f.admin,
            ConsultationAction::Assign {
                consultant: inactive,
            },
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(err, TransitionError::ConsultantIneligible);
    }

    #[test]
    fn reassignment_resets_acceptance() {
        let f = fixture();
        let c = assign(&f, &f.consultation);
        let c = accept(&c, &f.student);
        assert!(c.student_accepted);

        let other_id = Uuid::new_v4();
        let other = ConsultantRef {
            id: other_id,
            ..f.consultant_ref
        };
        let c = apply(
            &c,
            &f.admin,
            ConsultationAction::Assign { consultant: other },
            Utc::now(),
        )
        .unwrap()
        .consultation;

        assert_eq!(c.status, ConsultationStatus::AwaitingAcceptance);
        assert_eq!(c.consultant_id, Some(other_id));
        assert!(!c.student_accepted && !c.consultant_accepted);
        assert_invariant(&c);
    }

    #[test]
    fn assign_rejected_once_active() {
        let f = fixture();
        let c = activated(&f);
        let err = apply(
            &c,
            &f.admin,
            ConsultationAction::Assign {
                consultant: f.consultant_ref,
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, TransitionError::NotAssignable { .. }));
    }

    #[test]
    fn accept_is_idempotent() {
        let f = fixture();
        let c = assign(&f, &f.consultation);

        let once = accept(&c, &f.student);
        let twice = accept(&once, &f.student);
        assert_eq!(once.status, twice.status);
        assert_eq!(once.student_accepted, twice.student_accepted);
        assert_eq!(once.consultant_accepted, twice.consultant_accepted);

        // Re-accepting after activation is also a no-op.
        let active = accept(&once, &f.consultant);
        assert_eq!(active.status, ConsultationStatus::Active);
        let again = accept(&active, &f.consultant);
        assert_eq!(again.status, ConsultationStatus::Active);
        assert_eq!(again.messages.len(), active.messages.len());
    }

    #[test]
    fn accept_order_is_commutative() {
        let f = fixture();
        let c = assign(&f, &f.consultation);

        let a = accept(&accept(&c, &f.student), &f.consultant);
        let b = accept(&accept(&c, &f.consultant), &f.student);
        assert_eq!(a.status, ConsultationStatus::Active);
        assert_eq!(b.status, ConsultationStatus::Active);
    }

    #[test]
    fn accept_rejects_outsiders() {
        let f = fixture();
        let c = assign(&f, &f.consultation);
        let outsider = Actor::new(Uuid::new_v4(), Role::Consultant);
        let err = apply(&c, &outsider, ConsultationAction::Accept, Utc::now()).unwrap_err();
        assert!(matches!(err, TransitionError::NotPermitted { .. }));
    }

    #[test]
    fn accept_rejected_while_pending() {
        let f = fixture();
        let err = apply(
            &f.consultation,
            &f.student,
            ConsultationAction::Accept,
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TransitionError::NotAwaitingAcceptance {
                status: ConsultationStatus::Pending
            }
        );
    }

    #[test]
    fn chat_gated_on_status() {
        let f = fixture();
        let send = |c: &Consultation| {
            apply(
                c,
                &f.student,
                ConsultationAction::SendMessage {
                    text: "hi".to_string(),
                },
                Utc::now(),
            )
        };

        // Pending
        let err = send(&f.consultation).unwrap_err();
        assert_eq!(
            err,
            TransitionError::ChatDisabled {
                status: ConsultationStatus::Pending
            }
        );

        // Awaiting acceptance
        let c = assign(&f, &f.consultation);
        assert!(send(&c).is_err());

        // Paused
        let mut paused = activated(&f);
        paused.status = ConsultationStatus::Paused;
        paused.student_accepted = false;
        paused.consultant_accepted = false;
        assert!(send(&paused).is_err());

        // Completed
        let mut done = activated(&f);
        done.status = ConsultationStatus::Completed;
        assert!(send(&done).is_err());
    }

    #[test]
    fn empty_message_rejected() {
        let f = fixture();
        let c = activated(&f);
        let err = apply(
            &c,
            &f.student,
            ConsultationAction::SendMessage {
                text: "   \n".to_string(),
            },
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(err, TransitionError::EmptyMessage);
    }

    #[test]
    fn messages_are_append_only() {
        let f = fixture();
        let mut c = activated(&f);
        let mut seen = Vec::new();

        for (actor, text) in [
            (&f.student, "first"),
            (&f.consultant, "second"),
            (&f.student, "third"),
        ] {
            c = apply(
                &c,
                actor,
                ConsultationAction::SendMessage {
                    text: text.to_string(),
                },
                Utc::now(),
            )
            .unwrap()
            .consultation;
            seen.push((c.messages.last().unwrap().id, text.to_string()));
        }

        assert_eq!(c.messages.len(), 3);
        for (i, (id, text)) in seen.iter().enumerate() {
            assert_eq!(c.messages[i].id, *id);
            assert_eq!(c.messages[i].text, *text);
        }
    }

    #[test]
    fn complete_requires_assigned_consultant_or_admin() {
        let f = fixture();
        let c = activated(&f);

        let err = apply(&c, &f.student, ConsultationAction::Complete, Utc::now()).unwrap_err();
        assert!(matches!(err, TransitionError::NotPermitted { .. }));

        let done = apply(&c, &f.admin, ConsultationAction::Complete, Utc::now())
            .unwrap()
            .consultation;
        assert_eq!(done.status, ConsultationStatus::Completed);
    }

    #[test]
    fn complete_requires_active() {
        let f = fixture();
        let c = assign(&f, &f.consultation);
        let err = apply(&c, &f.consultant, ConsultationAction::Complete, Utc::now()).unwrap_err();
        assert!(matches!(err, TransitionError::NotActive { .. }));
    }

    #[test]
    fn testimonial_first_write_wins() {
        let f = fixture();
        let c = activated(&f);
        let c = apply(&c, &f.consultant, ConsultationAction::Complete, Utc::now())
            .unwrap()
            .consultation;

        let c = apply(
            &c,
            &f.student,
            ConsultationAction::SubmitTestimonial {
                text: "  Great help  ".to_string(),
            },
            Utc::now(),
        )
        .unwrap()
        .consultation;
        assert_eq!(c.testimonial.as_deref(), Some("Great help"));

        let err = apply(
            &c,
            &f.student,
            ConsultationAction::SubmitTestimonial {
                text: "Changed my mind".to_string(),
            },
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(err, TransitionError::TestimonialAlreadySubmitted);
        assert_eq!(c.testimonial.as_deref(), Some("Great help"));
    }

    #[test]
    fn testimonial_requires_completed_and_student() {
        let f = fixture();
        let c = activated(&f);

        let err = apply(
            &c,
            &f.student,
            ConsultationAction::SubmitTestimonial {
                text: "Too early".to_string(),
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, TransitionError::NotCompleted { .. }));

        let done = apply(&c, &f.consultant, ConsultationAction::Complete, Utc::now())
            .unwrap()
            .consultation;
        let err = apply(
            &done,
            &f.consultant,
            ConsultationAction::SubmitTestimonial {
                text: "Not mine to write".to_string(),
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, TransitionError::NotPermitted { .. }));
    }

    #[test]
    fn guard_carries_pre_image() {
        let f = fixture();
        let c = assign(&f, &f.consultation);
        let transition = apply(&c, &f.student, ConsultationAction::Accept, Utc::now()).unwrap();

        assert_eq!(transition.guard.status, ConsultationStatus::AwaitingAcceptance);
        assert!(!transition.guard.student_accepted);
        assert!(!transition.guard.consultant_accepted);
        assert!(transition.consultation.student_accepted);
    }

    #[test]
    fn rejected_action_leaves_state_unchanged() {
        let f = fixture();
        let before = f.consultation.clone();
        let _ = apply(
            &f.consultation,
            &f.student,
            ConsultationAction::SendMessage {
                text: "hi".to_string(),
            },
            Utc::now(),
        );
        assert_eq!(f.consultation.status, before.status);
        assert_eq!(f.consultation.messages.len(), before.messages.len());
    }
}
