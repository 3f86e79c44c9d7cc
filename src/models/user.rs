use serde::{Deserialize, Serialize};
use crate::models::JobType;

/// Job-seeker profile as returned by `/api/users/user`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub skills: Vec<String>,
    pub education: String,
    pub experience: String,
    /// Resume URL
    pub resume: String,
    /// Collar preference; seeds the job type of the public search
    #[serde(rename = "jobType", deserialize_with = "crate::models::job::lenient_job_type")]
    pub preferred_job_type: Option<JobType>,
}

/// Number of weighted fields taken into account by [`profile_completion`]
pub const PROFILE_FIELDS: usize = 8;

/// Percentage of the eight weighted profile fields that are filled in.
pub fn profile_completion(profile: &UserProfile) -> u8 {
    let filled = [
        &profile.name,
        &profile.email,
        &profile.phone,
        &profile.location,
        &profile.education,
        &profile.experience,
        &profile.resume,
    ]
    .iter()
    .filter(|value| !value.trim().is_empty())
    .count()
        + usize::from(profile.skills.iter().any(|skill| !skill.trim().is_empty()));

    ((filled as f64 / PROFILE_FIELDS as f64) * 100.0).round() as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
    Hired,
    /// Any status this client does not know yet
    #[serde(other)]
    Unknown,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Reviewed => "Reviewed",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
            ApplicationStatus::Unknown => "Unknown",
        }
    }
}

/// A job application belonging to the signed-in user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    #[serde(alias = "_id")]
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    pub status: ApplicationStatus,
    pub applied_at: Option<chrono::DateTime<chrono::Utc>>,
}
