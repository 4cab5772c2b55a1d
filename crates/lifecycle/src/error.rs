//! Transition error types.

use entities::ConsultationStatus;
use thiserror::Error;

/// Errors produced when an action is rejected by the lifecycle engine.
///
/// Every variant means the consultation was left unchanged. The messages
/// are user-facing; the server surfaces them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The caller is not allowed to perform this action.
    #[error("You are not allowed to {action} on this consultation")]
    NotPermitted { action: &'static str },

    /// The selected user is not an active consultant.
    #[error("The selected user is not an active consultant")]
    ConsultantIneligible,

    /// The consultant belongs to a different department.
    #[error("The consultant does not belong to this consultation's department")]
    DepartmentMismatch,

    /// A consultant can only be assigned before the consultation is underway.
    #[error("A consultant cannot be assigned while the consultation is {status}")]
    NotAssignable { status: ConsultationStatus },

    /// Acceptance is only meaningful while waiting for both parties.
    #[error("This consultation is not awaiting acceptance (currently {status})")]
    NotAwaitingAcceptance { status: ConsultationStatus },

    /// Messages may only be sent while the consultation is active.
    #[error("Chat is disabled while the consultation is {status}")]
    ChatDisabled { status: ConsultationStatus },

    /// Message text was empty after trimming.
    #[error("Message text cannot be empty")]
    EmptyMessage,

    /// Only an active consultation can be completed.
    #[error("Only an active consultation can be completed (currently {status})")]
    NotActive { status: ConsultationStatus },

    /// A testimonial can only be left once the consultation is completed.
    #[error("A testimonial can only be left after the consultation is completed")]
    NotCompleted { status: ConsultationStatus },

    /// A testimonial already exists. First write wins.
    #[error("A testimonial has already been submitted")]
    TestimonialAlreadySubmitted,

    /// Testimonial text was empty after trimming.
    #[error("Testimonial text cannot be empty")]
    EmptyTestimonial,
}
