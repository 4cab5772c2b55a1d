//! Donation entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A donation submitted through the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    /// Unique identifier.
    pub id: Uuid,
    /// Donor name.
    pub name: String,
    /// Donor email, if given.
    pub email: Option<String>,
    /// Donated amount.
    pub amount: f64,
    /// Donor phone number.
    pub phone_number: String,
    /// Bank transaction reference.
    pub transaction_id: String,
    /// URL of the uploaded payment screenshot.
    pub screenshot_url: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl Donation {
    /// Creates a new donation record.
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        phone_number: impl Into<String>,
        transaction_id: impl Into<String>,
        screenshot_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: None,
            amount,
            phone_number: phone_number.into(),
            transaction_id: transaction_id.into(),
            screenshot_url: screenshot_url.into(),
            created_at: Utc::now(),
        }
    }

    /// Sets the donor email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
