//! Consultation API endpoints.
//!
//! Every lifecycle mutation runs through the engine and is persisted with
//! the guard it produced, so a request racing a stale snapshot gets a
//! conflict instead of silently overwriting the other party's action.

use std::sync::Arc;

use api_protocol::{requests::*, responses::*};
use axum::{extract::State, Extension, Json};
use chrono::Utc;
use consult_store::{ConsultStore, ConsultationFilter};
use entities::{Consultation, ConsultationStatus, Role};
use lifecycle::{apply, Actor, ConsultantRef, ConsultationAction};

use crate::api::{parse_id, require_admin};
use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Summary text shown when the summarization collaborator fails.
const SUMMARY_FALLBACK: &str = "Failed to generate summary.";

fn actor(user: &AuthenticatedUser) -> Actor {
    Actor::new(user.id, user.role)
}

async fn load_consultation<S: ConsultStore>(
    state: &AppState<S>,
    consultation_id: &str,
) -> ServerResult<Consultation> {
    let id = parse_id(consultation_id, "consultation_id")?;
    state
        .store
        .get_consultation(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Consultation not found".to_string()))
}

/// Loads, transitions, and writes back under the engine's guard.
async fn transact<S: ConsultStore>(
    state: &AppState<S>,
    user: &AuthenticatedUser,
    consultation_id: &str,
    action: ConsultationAction,
) -> ServerResult<Consultation> {
    let current = load_consultation(state, consultation_id).await?;
    let transition = apply(&current, &actor(user), action, Utc::now())?;
    let written = state
        .store
        .update_consultation(transition.consultation, Some(transition.guard))
        .await?;
    Ok(written)
}

/// Creates a new consultation request.
pub async fn create_consultation<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateConsultationRequest>,
) -> ServerResult<Json<CreateConsultationResponse>> {
    if user.role != Role::Student {
        return Err(ServerError::PermissionDenied(
            "Only students can request consultations".to_string(),
        ));
    }
    if request.problem_description.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Please describe what you need help with".to_string(),
        ));
    }

    let department_id = parse_id(&request.department_id, "department_id")?;
    state
        .store
        .get_department(department_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Department not found".to_string()))?;

    let consultation = Consultation::new(
        user.id,
        department_id,
        request.problem_description.trim(),
        request.preferred_time,
        request.profile,
    );
    let consultation = state.store.create_consultation(consultation).await?;

    tracing::info!(consultation_id = %consultation.id, "Consultation requested");

    Ok(Json(CreateConsultationResponse {
        consultation: (&consultation).into(),
    }))
}

/// Lists consultations visible to the caller.
///
/// Students see their own requests, consultants their assignments, admins
/// everything.
pub async fn list_consultations<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<ListConsultationsRequest>,
) -> ServerResult<Json<ListConsultationsResponse>> {
    let mut filter = ConsultationFilter {
        status: request.status.map(Into::into),
        limit: request.limit,
        offset: request.offset,
        ..Default::default()
    };
    match user.role {
        Role::Student => filter.student_id = Some(user.id),
        Role::Consultant => filter.consultant_id = Some(user.id),
        Role::Admin => {}
    }

    let (consultations, total_count) = state.store.list_consultations(filter).await?;

    Ok(Json(ListConsultationsResponse {
        consultations: consultations.iter().map(Into::into).collect(),
        total_count,
    }))
}

/// Gets one consultation with its chat log classified for the viewer.
pub async fn get_consultation<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<GetConsultationRequest>,
) -> ServerResult<Json<GetConsultationResponse>> {
    let consultation = load_consultation(&state, &request.consultation_id).await?;
    if !consultation.is_participant(user.id) && user.role != Role::Admin {
        return Err(ServerError::PermissionDenied(
            "You are not part of this consultation".to_string(),
        ));
    }

    let chat = lifecycle::render(&consultation, user.id)
        .into_iter()
        .map(|line| api_protocol::ChatLine {
            message: (&line.message).into(),
            own: line.own,
        })
        .collect();

    Ok(Json(GetConsultationResponse {
        consultation: (&consultation).into(),
        chat,
    }))
}

/// Assigns (or reassigns) a consultant. Admin only.
pub async fn assign_consultant<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<AssignConsultantRequest>,
) -> ServerResult<Json<AssignConsultantResponse>> {
    let consultant_id = request.consultant_id.ok_or_else(|| {
        ServerError::InvalidRequest("A consultant must be selected".to_string())
    })?;
    let consultant_id = parse_id(&consultant_id, "consultant_id")?;
    let consultant = state
        .store
        .get_user(consultant_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Consultant not found".to_string()))?;

    let consultation = transact(
        &state,
        &user,
        &request.consultation_id,
        ConsultationAction::Assign {
            consultant: ConsultantRef::from(&consultant),
        },
    )
    .await?;

    tracing::info!(
        consultation_id = %consultation.id,
        consultant_id = %consultant_id,
        "Consultant assigned"
    );

    Ok(Json(AssignConsultantResponse {
        consultation: (&consultation).into(),
    }))
}

/// Records the caller's acceptance of the assignment.
pub async fn accept_consultation<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<AcceptConsultationRequest>,
) -> ServerResult<Json<AcceptConsultationResponse>> {
    let consultation = transact(
        &state,
        &user,
        &request.consultation_id,
        ConsultationAction::Accept,
    )
    .await?;

    if consultation.status == ConsultationStatus::Active {
        tracing::info!(consultation_id = %consultation.id, "Consultation activated");
    }

    Ok(Json(AcceptConsultationResponse {
        consultation: (&consultation).into(),
    }))
}

/// Appends a chat message.
pub async fn send_message<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<SendMessageRequest>,
) -> ServerResult<Json<SendMessageResponse>> {
    let consultation = transact(
        &state,
        &user,
        &request.consultation_id,
        ConsultationAction::SendMessage { text: request.text },
    )
    .await?;

    let message = consultation
        .messages
        .last()
        .ok_or_else(|| ServerError::Internal("Appended message missing".to_string()))?;

    Ok(Json(SendMessageResponse {
        message: message.into(),
        consultation: (&consultation).into(),
    }))
}

/// Closes the consultation. Assigned consultant (or admin).
pub async fn complete_consultation<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CompleteConsultationRequest>,
) -> ServerResult<Json<CompleteConsultationResponse>> {
    let consultation = transact(
        &state,
        &user,
        &request.consultation_id,
        ConsultationAction::Complete,
    )
    .await?;

    tracing::info!(consultation_id = %consultation.id, "Consultation completed");

    Ok(Json(CompleteConsultationResponse {
        consultation: (&consultation).into(),
    }))
}

/// Records the student's one-time testimonial.
pub async fn submit_testimonial<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<SubmitTestimonialRequest>,
) -> ServerResult<Json<SubmitTestimonialResponse>> {
    let consultation = transact(
        &state,
        &user,
        &request.consultation_id,
        ConsultationAction::SubmitTestimonial { text: request.text },
    )
    .await?;

    tracing::info!(consultation_id = %consultation.id, "Testimonial submitted");

    Ok(Json(SubmitTestimonialResponse {
        consultation: (&consultation).into(),
    }))
}

/// Pauses a consultation. Admin only.
///
/// This is an out-of-band status override, not an engine transition: there
/// is no modeled path into or out of `PAUSED`, and a paused consultation
/// behaves like any other non-active one (chat disabled).
pub async fn pause_consultation<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<PauseConsultationRequest>,
) -> ServerResult<Json<PauseConsultationResponse>> {
    require_admin(&user)?;

    let current = load_consultation(&state, &request.consultation_id).await?;
    let guard = current.guard();
    let mut next = current;
    next.status = ConsultationStatus::Paused;
    let consultation = state.store.update_consultation(next, Some(guard)).await?;

    tracing::info!(consultation_id = %consultation.id, "Consultation paused");

    Ok(Json(PauseConsultationResponse {
        consultation: (&consultation).into(),
    }))
}

/// Summarizes the chat for the consultant.
///
/// A collaborator failure never touches consultation state; the caller
/// gets the fallback text and the conversation continues unaffected.
pub async fn summarize_chat<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<SummarizeChatRequest>,
) -> ServerResult<Json<SummarizeChatResponse>> {
    let consultation = load_consultation(&state, &request.consultation_id).await?;
    let is_assigned_consultant = consultation.consultant_id == Some(user.id);
    if !is_assigned_consultant && user.role != Role::Admin {
        return Err(ServerError::PermissionDenied(
            "Only the assigned consultant can summarize this chat".to_string(),
        ));
    }

    // Display names come from the request-time snapshot and the consultant
    // record; a deleted consultant account degrades to a generic label.
    let student_name = consultation.profile.full_name.clone();
    let consultant_name = match consultation.consultant_id {
        Some(id) => state
            .store
            .get_user(id)
            .await?
            .map(|u| u.full_name)
            .unwrap_or_else(|| "Consultant".to_string()),
        None => "Consultant".to_string(),
    };
    let transcript = lifecycle::flatten_transcript(&consultation, &student_name, &consultant_name);

    let summary = match &state.summarizer {
        Some(summarizer) => match summarizer.summarize(&transcript).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(consultation_id = %consultation.id, error = %e, "Summarization failed");
                SUMMARY_FALLBACK.to_string()
            }
        },
        None => {
            tracing::warn!("Summarization requested but no service is configured");
            SUMMARY_FALLBACK.to_string()
        }
    };

    Ok(Json(SummarizeChatResponse { summary }))
}

/// Lists published testimonials for the public site.
pub async fn list_testimonials<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(_request): Json<ListTestimonialsRequest>,
) -> ServerResult<Json<ListTestimonialsResponse>> {
    let (consultations, _) = state
        .store
        .list_consultations(ConsultationFilter {
            status: Some(ConsultationStatus::Completed),
            ..Default::default()
        })
        .await?;

    let testimonials = consultations
        .iter()
        .filter_map(|c| {
            c.testimonial.as_ref().map(|quote| api_protocol::Testimonial {
                name: c.profile.full_name.clone(),
                quote: quote.clone(),
            })
        })
        .collect();

    Ok(Json(ListTestimonialsResponse { testimonials }))
}
