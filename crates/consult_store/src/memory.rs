//! In-memory store implementation.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use entities::{
    Consultation, Department, Donation, NewsArticle, StatusGuard, User,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{ConsultStore, ConsultationFilter, StoreError, StoreResult, UserFilter};

/// In-memory document store.
///
/// Backs the server's default mode and the test suite. The guard check in
/// [`update_consultation`](ConsultStore::update_consultation) runs under the
/// collection's write lock, so two writers racing from the same snapshot
/// cannot both land.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    departments: Arc<RwLock<HashMap<Uuid, Department>>>,
    consultations: Arc<RwLock<HashMap<Uuid, Consultation>>>,
    donations: Arc<RwLock<HashMap<Uuid, Donation>>>,
    news: Arc<RwLock<HashMap<Uuid, NewsArticle>>>,
}

impl MemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn paginate<T>(mut items: Vec<T>, limit: Option<u32>, offset: Option<u32>) -> (Vec<T>, u32) {
    let total = items.len() as u32;
    if let Some(offset) = offset {
        items = items.into_iter().skip(offset as usize).collect();
    }
    if let Some(limit) = limit {
        items = items.into_iter().take(limit as usize).collect();
    }
    (items, total)
}

#[async_trait]
impl ConsultStore for MemoryStore {
    // =========================================================================
    // User operations
    // =========================================================================

    async fn create_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(StoreError::already_exists("User", user.id.to_string()));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::already_exists("User", user.email.clone()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self, filter: UserFilter) -> StoreResult<(Vec<User>, u32)> {
        let users = self.users.read().await;
        let mut result: Vec<User> = users
            .values()
            .filter(|u| {
                filter.role.map_or(true, |role| u.role == role)
                    && filter
                        .department_id
                        .map_or(true, |id| u.department_id == Some(id))
                    && filter.active.map_or(true, |active| u.active == active)
            })
            .cloned()
            .collect();
        result.sort_by_key(|u| u.created_at);

        Ok(paginate(result, filter.limit, filter.offset))
    }

    async fn update_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(StoreError::not_found("User", user.id.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<()> {
        let mut users = self.users.write().await;
        if users.remove(&id).is_none() {
            return Err(StoreError::not_found("User", id.to_string()));
        }
        Ok(())
    }

    // =========================================================================
    // Department operations
    // =========================================================================

    async fn create_department(&self, department: Department) -> StoreResult<Department> {
        let mut departments = self.departments.write().await;
        if departments.contains_key(&department.id) {
            return Err(StoreError::already_exists(
                "Department",
                department.id.to_string(),
            ));
        }
        departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn get_department(&self, id: Uuid) -> StoreResult<Option<Department>> {
        let departments = self.departments.read().await;
        Ok(departments.get(&id).cloned())
    }

    async fn list_departments(&self) -> StoreResult<Vec<Department>> {
        let departments = self.departments.read().await;
        let mut result: Vec<Department> = departments.values().cloned().collect();
        result.sort_by_key(|d| d.created_at);
        Ok(result)
    }

    async fn update_department(&self, department: Department) -> StoreResult<Department> {
        let mut departments = self.departments.write().await;
        if !departments.contains_key(&department.id) {
            return Err(StoreError::not_found(
                "Department",
                department.id.to_string(),
            ));
        }
        departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn delete_department(&self, id: Uuid) -> StoreResult<()> {
        let mut departments = self.departments.write().await;
        if departments.remove(&id).is_none() {
            return Err(StoreError::not_found("Department", id.to_string()));
        }
        Ok(())
    }

    // =========================================================================
    // Consultation operations
    // =========================================================================

    async fn create_consultation(&self, consultation: Consultation) -> StoreResult<Consultation> {
        let mut consultations = self.consultations.write().await;
        if consultations.contains_key(&consultation.id) {
            return Err(StoreError::already_exists(
                "Consultation",
                consultation.id.to_string(),
            ));
        }
        consultations.insert(consultation.id, consultation.clone());
        Ok(consultation)
    }

    async fn get_consultation(&self, id: Uuid) -> StoreResult<Option<Consultation>> {
        let consultations = self.consultations.read().await;
        Ok(consultations.get(&id).cloned())
    }

    async fn list_consultations(
        &self,
        filter: ConsultationFilter,
    ) -> StoreResult<(Vec<Consultation>, u32)> {
        let consultations = self.consultations.read().await;
        let mut result: Vec<Consultation> = consultations
            .values()
            .filter(|c| {
                filter.student_id.map_or(true, |id| c.student_id == id)
                    && filter
                        .consultant_id
                        .map_or(true, |id| c.consultant_id == Some(id))
                    && filter.status.map_or(true, |status| c.status == status)
            })
            .cloned()
            .collect();
        result.sort_by_key(|c| c.created_at);

        Ok(paginate(result, filter.limit, filter.offset))
    }

    async fn update_consultation(
        &self,
        consultation: Consultation,
        guard: Option<StatusGuard>,
    ) -> StoreResult<Consultation> {
        let mut consultations = self.consultations.write().await;
        let stored = consultations
            .get(&consultation.id)
            .ok_or_else(|| StoreError::not_found("Consultation", consultation.id.to_string()))?;

        if let Some(guard) = guard {
            if stored.guard() != guard {
                tracing::debug!(
                    consultation_id = %consultation.id,
                    "Guarded write rejected: document moved since read"
                );
                return Err(StoreError::stale_state(consultation.id.to_string()));
            }
        }

        consultations.insert(consultation.id, consultation.clone());
        Ok(consultation)
    }

    // =========================================================================
    // Donation operations
    // =========================================================================

    async fn create_donation(&self, donation: Donation) -> StoreResult<Donation> {
        let mut donations = self.donations.write().await;
        if donations.contains_key(&donation.id) {
            return Err(StoreError::already_exists(
                "Donation",
                donation.id.to_string(),
            ));
        }
        donations.insert(donation.id, donation.clone());
        Ok(donation)
    }

    async fn get_donation(&self, id: Uuid) -> StoreResult<Option<Donation>> {
        let donations = self.donations.read().await;
        Ok(donations.get(&id).cloned())
    }

    async fn list_donations(&self) -> StoreResult<Vec<Donation>> {
        let donations = self.donations.read().await;
        let mut result: Vec<Donation> = donations.values().cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    // =========================================================================
    // News operations
    // =========================================================================

    async fn create_news(&self, article: NewsArticle) -> StoreResult<NewsArticle> {
        let mut news = self.news.write().await;
        if news.contains_key(&article.id) {
            return Err(StoreError::already_exists("NewsArticle", article.id.to_string()));
        }
        news.insert(article.id, article.clone());
        Ok(article)
    }

    async fn get_news(&self, id: Uuid) -> StoreResult<Option<NewsArticle>> {
        let news = self.news.read().await;
        Ok(news.get(&id).cloned())
    }

    async fn list_news(&self) -> StoreResult<Vec<NewsArticle>> {
        let news = self.news.read().await;
        let mut result: Vec<NewsArticle> = news.values().cloned().collect();
        result.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(result)
    }

    async fn update_news(&self, article: NewsArticle) -> StoreResult<NewsArticle> {
        let mut news = self.news.write().await;
        if !news.contains_key(&article.id) {
            return Err(StoreError::not_found("NewsArticle", article.id.to_string()));
        }
        news.insert(article.id, article.clone());
        Ok(article)
    }

    async fn delete_news(&self, id: Uuid) -> StoreResult<()> {
        let mut news = self.news.write().await;
        if news.remove(&id).is_none() {
            return Err(StoreError::not_found("NewsArticle", id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use entities::{
        ConsultationStatus, EnrollmentStatus, FellowshipStanding, ProgramTrack, Role, SchoolLevel,
        StudentProfile,
    };
    use lifecycle::{apply, Actor, ConsultationAction};

    fn sample_profile() -> StudentProfile {
        StudentProfile {
            full_name: "Test Student".to_string(),
            email: "student@example.com".to_string(),
            phone_number: "+251900000000".to_string(),
            telegram_username: None,
            mother_church: "Grace Chapel".to_string(),
            entry_year: "2022".to_string(),
            department_name: "Counseling".to_string(),
            school_level: SchoolLevel::FourthYear,
            graduation_year: "2026".to_string(),
            enrollment: EnrollmentStatus::Regular,
            program: ProgramTrack::Degree,
            fellowship: FellowshipStanding::Current,
            talents: Vec::new(),
            special_care: Vec::new(),
            photo_url: None,
            comments: None,
        }
    }

    fn awaiting_consultation(student: Uuid, consultant: Uuid) -> Consultation {
        let mut c = Consultation::new(
            student,
            Uuid::new_v4(),
            "Need advice",
            "Weekends",
            sample_profile(),
        );
        c.consultant_id = Some(consultant);
        c.status = ConsultationStatus::AwaitingAcceptance;
        c
    }

    #[tokio::test]
    async fn user_email_uniqueness() {
        let store = MemoryStore::new();
        store
            .create_user(User::new("One", "same@example.com"))
            .await
            .unwrap();

        let err = store
            .create_user(User::new("Two", "same@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn list_users_filters_consultant_eligibility() {
        let store = MemoryStore::new();
        let dept = Uuid::new_v4();
        let eligible = User::new("C1", "c1@example.com")
            .with_role(Role::Consultant)
            .with_department(dept);
        let other_dept = User::new("C2", "c2@example.com")
            .with_role(Role::Consultant)
            .with_department(Uuid::new_v4());
        let student = User::new("S", "s@example.com");
        store.create_user(eligible.clone()).await.unwrap();
        store.create_user(other_dept).await.unwrap();
        store.create_user(student).await.unwrap();

        let (found, total) = store
            .list_users(UserFilter {
                role: Some(Role::Consultant),
                department_id: Some(dept),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(found[0].id, eligible.id);
    }

    #[tokio::test]
    async fn guarded_update_rejects_stale_writer() {
        let store = MemoryStore::new();
        let student = Uuid::new_v4();
        let consultant = Uuid::new_v4();
        let stored = store
            .create_consultation(awaiting_consultation(student, consultant))
            .await
            .unwrap();

        // Both parties read the same snapshot.
        let snapshot = store.get_consultation(stored.id).await.unwrap().unwrap();

        let student_accept = apply(
            &snapshot,
            &Actor::new(student, Role::Student),
            ConsultationAction::Accept,
            Utc::now(),
        )
        .unwrap();
        let consultant_accept = apply(
            &snapshot,
            &Actor::new(consultant, Role::Consultant),
            ConsultationAction::Accept,
            Utc::now(),
        )
        .unwrap();

        // First write lands.
        store
            .update_consultation(student_accept.consultation, Some(student_accept.guard))
            .await
            .unwrap();

        // Second write was computed from the stale snapshot and must fail
        // closed rather than silently dropping the first acceptance.
        let err = store
            .update_consultation(
                consultant_accept.consultation,
                Some(consultant_accept.guard),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::StaleState { .. }));

        // Reload-and-retry reaches the activated state with both flags.
        let fresh = store.get_consultation(stored.id).await.unwrap().unwrap();
        let retried = apply(
            &fresh,
            &Actor::new(consultant, Role::Consultant),
            ConsultationAction::Accept,
            Utc::now(),
        )
        .unwrap();
        let final_doc = store
            .update_consultation(retried.consultation, Some(retried.guard))
            .await
            .unwrap();

        assert_eq!(final_doc.status, ConsultationStatus::Active);
        assert!(final_doc.student_accepted && final_doc.consultant_accepted);
    }

    #[tokio::test]
    async fn concurrent_accepts_both_survive() {
        let store = Arc::new(MemoryStore::new());
        let student = Uuid::new_v4();
        let consultant = Uuid::new_v4();
        let stored = store
            .create_consultation(awaiting_consultation(student, consultant))
            .await
            .unwrap();
        let snapshot = store.get_consultation(stored.id).await.unwrap().unwrap();

        let mut handles = Vec::new();
        for actor in [
            Actor::new(student, Role::Student),
            Actor::new(consultant, Role::Consultant),
        ] {
            let store = Arc::clone(&store);
            let mut current = snapshot.clone();
            handles.push(tokio::spawn(async move {
                // Reload-and-retry loop on conflict.
                loop {
                    let transition =
                        apply(&current, &actor, ConsultationAction::Accept, Utc::now()).unwrap();
                    match store
                        .update_consultation(transition.consultation, Some(transition.guard))
                        .await
                    {
                        Ok(_) => break,
                        Err(StoreError::StaleState { .. }) => {
                            current = store
                                .get_consultation(current.id)
                                .await
                                .unwrap()
                                .unwrap();
                        }
                        Err(e) => panic!("unexpected store error: {e}"),
                    }
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let final_doc = store.get_consultation(stored.id).await.unwrap().unwrap();
        assert_eq!(final_doc.status, ConsultationStatus::Active);
        assert!(final_doc.student_accepted && final_doc.consultant_accepted);
    }

    #[tokio::test]
    async fn unguarded_update_still_writes() {
        let store = MemoryStore::new();
        let stored = store
            .create_consultation(awaiting_consultation(Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap();

        let mut changed = stored.clone();
        changed.status = ConsultationStatus::Paused;
        let written = store.update_consultation(changed, None).await.unwrap();
        assert_eq!(written.status, ConsultationStatus::Paused);
    }

    #[tokio::test]
    async fn news_listed_newest_first() {
        let store = MemoryStore::new();
        let older = NewsArticle::new("Older", "body", "Staff");
        let mut newer = NewsArticle::new("Newer", "body", "Staff");
        newer.published_at = older.published_at + chrono::Duration::seconds(10);
        store.create_news(older).await.unwrap();
        store.create_news(newer).await.unwrap();

        let listed = store.list_news().await.unwrap();
        assert_eq!(listed[0].title, "Newer");
        assert_eq!(listed[1].title, "Older");
    }
}
