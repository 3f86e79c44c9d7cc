// ============================================================================
// API ENVELOPES - request/response bodies of the REST backend
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::{AdminProfile, Application, CompanyProfile, JobDetail, JobSummary, Pagination, UserProfile};

/// Login payload. `pass_key` is only sent for the admin role.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub company: Option<CompanyProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub admin: Option<AdminProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// Shared by `/api/jobs` and `/api/company/list-jobs`
#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub jobs: Vec<JobSummary>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobDetailResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub job: Option<JobDetail>,
}

/// Logout and other acknowledgement-only endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApplicationStatus, JobType};

    #[test]
    fn admin_credentials_serialize_pass_key() {
        let body = serde_json::to_value(Credentials {
            email: "root@example.com".to_string(),
            password: "S3cret!pass".to_string(),
            pass_key: Some("k-123".to_string()),
        })
        .unwrap();
        assert_eq!(body["passKey"], "k-123");

        let body = serde_json::to_value(Credentials::default()).unwrap();
        assert!(body.get("passKey").is_none());
    }

    #[test]
    fn jobs_response_reads_pagination_block() {
        let response: JobsResponse = serde_json::from_str(
            r#"{"success":true,"jobs":[{"_id":"a","title":"Driver"}],
                "pagination":{"currentPage":2,"totalPages":5,"totalJobs":42,"hasNextPage":true,"hasPrevPage":true}}"#,
        )
        .unwrap();
        assert_eq!(response.jobs.len(), 1);
        let pagination = response.pagination.unwrap();
        assert_eq!(pagination.total_jobs, 42);
        assert_eq!(pagination.current_page, 2);
    }

    #[test]
    fn server_failure_keeps_message() {
        let response: UserResponse =
            serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
        assert!(response.user.is_none());
    }

    #[test]
    fn odd_job_types_do_not_fail_the_listing() {
        let response: JobsResponse = serde_json::from_str(
            r#"{"success":true,"jobs":[
                {"_id":"a","title":"Driver","type":"Blue"},
                {"_id":"b","title":"Clerk","type":""},
                {"_id":"c","title":"Analyst","type":"white"},
                {"_id":"d","title":"Guard","type":"grey"},
                {"_id":"e","title":"Cook","type":null}
            ]}"#,
        )
        .unwrap();
        let types: Vec<_> = response.jobs.iter().map(|job| job.job_type).collect();
        assert_eq!(
            types,
            vec![Some(JobType::Blue), None, Some(JobType::White), None, None]
        );
    }

    #[test]
    fn unknown_application_status_keeps_the_list() {
        let response: ApplicationsResponse = serde_json::from_str(
            r#"{"success":true,"applications":[
                {"_id":"1","status":"accepted"},
                {"_id":"2","status":"shortlisted"}
            ]}"#,
        )
        .unwrap();
        let statuses: Vec<_> = response.applications.iter().map(|a| a.status.clone()).collect();
        assert_eq!(statuses, vec![ApplicationStatus::Unknown, ApplicationStatus::Shortlisted]);
    }
}
