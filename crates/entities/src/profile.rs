//! Submitter profile snapshot definitions.
//!
//! A consultation captures the requesting student's profile at submission
//! time, so the record stays meaningful even if the account changes later.

use serde::{Deserialize, Serialize};

/// School level at the time of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolLevel {
    Remedial,
    FirstYear,
    SecondYear,
    ThirdYear,
    FourthYear,
    FifthYear,
    SixthYear,
    SeventhYear,
}

/// Enrollment standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Regular,
    IrregularPrivate,
}

/// Academic program track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramTrack {
    Degree,
    Masters,
}

/// Standing within the campus fellowship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FellowshipStanding {
    Current,
    Alumni,
}

/// The submitter's profile as entered on the request form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Telegram handle, if given.
    pub telegram_username: Option<String>,
    /// Home congregation.
    pub mother_church: String,
    /// Year of university entry.
    pub entry_year: String,
    /// Name of the department the request was filed under.
    pub department_name: String,
    /// School level.
    pub school_level: SchoolLevel,
    /// Expected graduation year.
    pub graduation_year: String,
    /// Enrollment standing.
    pub enrollment: EnrollmentStatus,
    /// Program track.
    pub program: ProgramTrack,
    /// Fellowship standing.
    pub fellowship: FellowshipStanding,
    /// Self-reported talents.
    pub talents: Vec<String>,
    /// Special-care notes.
    pub special_care: Vec<String>,
    /// Photo URL, if given.
    pub photo_url: Option<String>,
    /// Free-form comments.
    pub comments: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

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
            talents: vec!["singing".to_string()],
            special_care: Vec::new(),
            photo_url: None,
            comments: None,
        }
    }

    #[test]
    fn test_profile_round_trip() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let back: StudentProfile = serde_json::from_str(&json).unwrap();

        assert_eq!(back, profile);
        assert!(json.contains("third_year"));
        assert!(json.contains("regular"));
    }
}
