//! API request types.

use entities::StudentProfile;
use serde::{Deserialize, Serialize};

use crate::types::*;

// ============================================================================
// Auth Requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

// ============================================================================
// Consultation Requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsultationRequest {
    pub department_id: String,
    pub problem_description: String,
    pub preferred_time: String,
    pub profile: StudentProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConsultationsRequest {
    pub status: Option<ConsultationStatus>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetConsultationRequest {
    pub consultation_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignConsultantRequest {
    pub consultation_id: String,
    /// Unset means the admin submitted without choosing a consultant.
    pub consultant_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptConsultationRequest {
    pub consultation_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub consultation_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteConsultationRequest {
    pub consultation_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTestimonialRequest {
    pub consultation_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PauseConsultationRequest {
    pub consultation_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeChatRequest {
    pub consultation_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTestimonialsRequest {}

// ============================================================================
// User Requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub department_id: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersRequest {
    pub role: Option<Role>,
    pub department_id: Option<String>,
    pub active: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub user_id: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<Role>,
    pub department_id: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    pub user_id: String,
}

// ============================================================================
// Department Requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDepartmentsRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDepartmentRequest {
    pub department_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDepartmentRequest {
    pub department_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDepartmentRequest {
    pub department_id: String,
}

// ============================================================================
// Donation Requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitDonationRequest {
    pub name: String,
    pub email: Option<String>,
    pub amount: f64,
    pub phone_number: String,
    pub transaction_id: String,
    pub screenshot_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDonationsRequest {}

// ============================================================================
// News Requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNewsRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNewsRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetNewsRequest {
    pub article_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNewsRequest {
    pub article_id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteNewsRequest {
    pub article_id: String,
}
