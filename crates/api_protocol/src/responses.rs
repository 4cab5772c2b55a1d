//! API response types.

use serde::{Deserialize, Serialize};

use crate::types::*;

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCurrentUserResponse {
    pub user: User,
}

// ============================================================================
// Consultation Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsultationResponse {
    pub consultation: Consultation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConsultationsResponse {
    pub consultations: Vec<Consultation>,
    pub total_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetConsultationResponse {
    pub consultation: Consultation,
    /// The chat log classified for the requesting viewer.
    pub chat: Vec<ChatLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignConsultantResponse {
    pub consultation: Consultation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptConsultationResponse {
    pub consultation: Consultation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub message: Message,
    pub consultation: Consultation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteConsultationResponse {
    pub consultation: Consultation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTestimonialResponse {
    pub consultation: Consultation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PauseConsultationResponse {
    pub consultation: Consultation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeChatResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTestimonialsResponse {
    pub testimonials: Vec<Testimonial>,
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
    pub total_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserResponse {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserResponse {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {}

// ============================================================================
// Department Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartmentResponse {
    pub department: Department,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDepartmentsResponse {
    pub departments: Vec<Department>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDepartmentResponse {
    pub department: Department,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDepartmentResponse {
    pub department: Department,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDepartmentResponse {}

// ============================================================================
// Donation Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitDonationResponse {
    pub donation: Donation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDonationsResponse {
    pub donations: Vec<Donation>,
}

// ============================================================================
// News Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNewsResponse {
    pub article: NewsArticle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNewsResponse {
    pub articles: Vec<NewsArticle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetNewsResponse {
    pub article: NewsArticle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNewsResponse {
    pub article: NewsArticle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteNewsResponse {}
