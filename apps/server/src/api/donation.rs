//! Donation API endpoints.

use std::sync::Arc;

use api_protocol::{requests::*, responses::*};
use axum::{extract::State, Extension, Json};
use consult_store::ConsultStore;
use entities::Donation;

use crate::api::require_admin;
use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Records a donation from the public donate page.
pub async fn submit_donation<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<SubmitDonationRequest>,
) -> ServerResult<Json<SubmitDonationResponse>> {
    if request.name.trim().is_empty() || request.transaction_id.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Name and transaction reference are required".to_string(),
        ));
    }
    if request.amount <= 0.0 {
        return Err(ServerError::InvalidRequest(
            "Amount must be positive".to_string(),
        ));
    }

    let mut donation = Donation::new(
        request.name.trim(),
        request.amount,
        request.phone_number,
        request.transaction_id.trim(),
        request.screenshot_url,
    );
    if let Some(email) = request.email {
        donation = donation.with_email(email);
    }
    let donation = state.store.create_donation(donation).await?;

    tracing::info!(donation_id = %donation.id, "Donation recorded");

    Ok(Json(SubmitDonationResponse {
        donation: (&donation).into(),
    }))
}

/// Lists donations. Admin only.
pub async fn list_donations<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(_request): Json<ListDonationsRequest>,
) -> ServerResult<Json<ListDonationsResponse>> {
    require_admin(&caller)?;

    let donations = state.store.list_donations().await?;

    Ok(Json(ListDonationsResponse {
        donations: donations.iter().map(Into::into).collect(),
    }))
}
