use async_trait::async_trait;
use crate::models::{Application, Credentials, Identity, JobDetail, JobSummary, Role};
use crate::models::api::JobsResponse;
use crate::services::ClientError;

/// Session endpoints, one set per role
#[async_trait(?Send)]
pub trait SessionBackend {
    /// Verifies the cookie session of `role` and returns its profile
    async fn whoami(&self, role: Role) -> Result<Identity, ClientError>;

    async fn login(&self, role: Role, credentials: &Credentials) -> Result<Identity, ClientError>;

    async fn logout(&self, role: Role) -> Result<(), ClientError>;

    /// Applications of the signed-in end user
    async fn applications(&self) -> Result<Vec<Application>, ClientError>;
}

/// Job listing endpoints
#[async_trait(?Send)]
pub trait JobsBackend {
    /// `GET /api/jobs` with already-serialized filter pairs
    async fn search_jobs(&self, query: &[(String, String)]) -> Result<JobsResponse, ClientError>;

    /// The signed-in recruiter's own postings
    async fn company_jobs(&self) -> Result<Vec<JobSummary>, ClientError>;

    async fn job_detail(&self, id: &str) -> Result<JobDetail, ClientError>;
}
