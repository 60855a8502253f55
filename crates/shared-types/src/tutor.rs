use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Backend payloads
// ---------------------------------------------------------------------------

/// A subject category a tutor can teach in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A tutor's public profile as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TutorProfile {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Headline numbers shown on the tutor dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct TutorStats {
    pub total_sessions: u64,
    pub completed_sessions: u64,
    pub upcoming_sessions: u64,
    pub total_students: u64,
    pub total_earnings: f64,
    pub average_rating: f64,
    pub total_reviews: u64,
}

impl TutorStats {
    /// Share of booked sessions already completed, as a whole percentage.
    pub fn completion_rate(&self) -> u8 {
        if self.total_sessions == 0 {
            return 0;
        }
        let pct = self.completed_sessions.saturating_mul(100) / self.total_sessions;
        pct.min(100) as u8
    }
}

/// Whether the signed-in user may create a tutor profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    pub eligible: bool,
    #[serde(default)]
    pub has_profile: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Request body for `POST /tutors/create-profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
#[serde(rename_all = "camelCase")]
pub struct CreateTutorProfileRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 20, max = 2000, message = "Bio must be between 20 and 2000 characters"))
    )]
    pub bio: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1.0, max = 1000.0, message = "Hourly rate must be between 1 and 1000"))
    )]
    pub hourly_rate: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(max = 80, message = "Experience must be 80 years or less"))
    )]
    pub experience_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Pick at least one category"))
    )]
    pub category_ids: Vec<String>,
}

/// Request body for `PUT /tutors/profile`. Absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
#[serde(rename_all = "camelCase")]
pub struct UpdateTutorProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 20, max = 2000, message = "Bio must be between 20 and 2000 characters"))
    )]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1.0, max = 1000.0, message = "Hourly rate must be between 1 and 1000"))
    )]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl UpdateTutorProfileRequest {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
