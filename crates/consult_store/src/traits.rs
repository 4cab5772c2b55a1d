//! Store trait definitions.

use async_trait::async_trait;
use entities::{
    Consultation, ConsultationStatus, Department, Donation, NewsArticle, Role, StatusGuard, User,
};
use uuid::Uuid;

use crate::StoreResult;

/// Filter options for listing users.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Filter by role.
    pub role: Option<Role>,
    /// Filter by department (consultant-eligibility lookup).
    pub department_id: Option<Uuid>,
    /// Filter by active flag.
    pub active: Option<bool>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Filter options for listing consultations.
#[derive(Debug, Clone, Default)]
pub struct ConsultationFilter {
    /// Filter by the requesting student.
    pub student_id: Option<Uuid>,
    /// Filter by the assigned consultant.
    pub consultant_id: Option<Uuid>,
    /// Filter by status.
    pub status: Option<ConsultationStatus>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Trait for the document store the application persists into.
#[async_trait]
pub trait ConsultStore: Send + Sync {
    // =========================================================================
    // User operations
    // =========================================================================

    /// Creates a new user. Fails if the email is already registered.
    async fn create_user(&self, user: User) -> StoreResult<User>;

    /// Gets a user by ID.
    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Gets a user by email.
    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Lists users with optional filters.
    async fn list_users(&self, filter: UserFilter) -> StoreResult<(Vec<User>, u32)>;

    /// Updates a user.
    async fn update_user(&self, user: User) -> StoreResult<User>;

    /// Deletes a user.
    async fn delete_user(&self, id: Uuid) -> StoreResult<()>;

    // =========================================================================
    // Department operations
    // =========================================================================

    /// Creates a new department.
    async fn create_department(&self, department: Department) -> StoreResult<Department>;

    /// Gets a department by ID.
    async fn get_department(&self, id: Uuid) -> StoreResult<Option<Department>>;

    /// Lists all departments.
    async fn list_departments(&self) -> StoreResult<Vec<Department>>;

    /// Updates a department.
    async fn update_department(&self, department: Department) -> StoreResult<Department>;

    /// Deletes a department. References are not cascaded.
    async fn delete_department(&self, id: Uuid) -> StoreResult<()>;

    // =========================================================================
    // Consultation operations
    // =========================================================================

    /// Creates a new consultation.
    async fn create_consultation(&self, consultation: Consultation) -> StoreResult<Consultation>;

    /// Gets a consultation by ID.
    async fn get_consultation(&self, id: Uuid) -> StoreResult<Option<Consultation>>;

    /// Lists consultations with optional filters.
    async fn list_consultations(
        &self,
        filter: ConsultationFilter,
    ) -> StoreResult<(Vec<Consultation>, u32)>;

    /// Writes a consultation back.
    ///
    /// With a guard, the write only succeeds while the stored document's
    /// lifecycle fields still match the pre-image; otherwise it fails with
    /// [`StoreError::StaleState`](crate::StoreError::StaleState) and the
    /// stored document is untouched. Lifecycle transitions must always pass
    /// the guard produced by the engine.
    async fn update_consultation(
        &self,
        consultation: Consultation,
        guard: Option<StatusGuard>,
    ) -> StoreResult<Consultation>;

    // =========================================================================
    // Donation operations
    // =========================================================================

    /// Creates a new donation record.
    async fn create_donation(&self, donation: Donation) -> StoreResult<Donation>;

    /// Gets a donation by ID.
    async fn get_donation(&self, id: Uuid) -> StoreResult<Option<Donation>>;

    /// Lists all donations, newest first.
    async fn list_donations(&self) -> StoreResult<Vec<Donation>>;

    // =========================================================================
    // News operations
    // =========================================================================

    /// Creates a new article.
    async fn create_news(&self, article: NewsArticle) -> StoreResult<NewsArticle>;

    /// Gets an article by ID.
    async fn get_news(&self, id: Uuid) -> StoreResult<Option<NewsArticle>>;

    /// Lists all articles, newest first.
    async fn list_news(&self) -> StoreResult<Vec<NewsArticle>>;

    /// Updates an article.
    async fn update_news(&self, article: NewsArticle) -> StoreResult<NewsArticle>;

    /// Deletes an article.
    async fn delete_news(&self, id: Uuid) -> StoreResult<()>;
}
