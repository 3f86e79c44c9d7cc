// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// Every request carries the browser cookies and the configured client id.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::models::api::{
    AckResponse, AdminResponse, ApplicationsResponse, CompanyResponse, JobDetailResponse, JobsResponse, UserResponse,
};
use crate::models::{to_query_string, Application, Credentials, Identity, JobDetail, JobSummary, Role};
use crate::services::{ClientError, JobsBackend, SessionBackend};
use crate::utils::constants::CLIENT_ID_PARAM;

/// Cookies travel with every request; the backend session lives in them
pub const CREDENTIALS: RequestCredentials = RequestCredentials::Include;

/// Absolute request URL: base + path, the caller's pairs, then `clientId`
/// when one is configured.
pub fn request_url(base: &str, path: &str, query: &[(String, String)], client_id: Option<&str>) -> String {
    let mut pairs = query.to_vec();
    if let Some(client_id) = client_id.filter(|id| !id.trim().is_empty()) {
        pairs.push((CLIENT_ID_PARAM.to_string(), client_id.to_string()));
    }

    let url = format!("{}{}", base.trim_end_matches('/'), path);
    if pairs.is_empty() {
        url
    } else {
        format!("{}?{}", url, to_query_string(&pairs))
    }
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    client_id: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_url.clone(),
            client_id: CONFIG.client_id.clone(),
        }
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> String {
        request_url(&self.base_url, path, query, self.client_id.as_deref())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> Result<T, ClientError> {
        let response = Request::get(&self.url(path, query))
            .credentials(CREDENTIALS)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn post<B: serde::Serialize, T: DeserializeOwned>(&self, path: &str, body: Option<&B>) -> Result<T, ClientError> {
        let builder = Request::post(&self.url(path, &[])).credentials(CREDENTIALS);

        let response = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ClientError::Parse(format!("serialization error: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ClientError::Network(e.to_string()))?;
        read_json(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps status codes onto [`ClientError`] and decodes the body
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status == 401 {
        return Err(ClientError::Unauthenticated);
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<AckResponse>(&body)
            .ok()
            .and_then(|ack| ack.message)
            .unwrap_or_else(|| response.status_text());
        return Err(ClientError::Http { status, message });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}

fn identity_from_user(response: UserResponse) -> Result<Identity, ClientError> {
    match (response.success, response.user) {
        (true, Some(user)) => Ok(Identity::User(user)),
        _ => Err(ClientError::server(response.message, "Could not load user")),
    }
}

fn identity_from_company(response: CompanyResponse) -> Result<Identity, ClientError> {
    match (response.success, response.company) {
        (true, Some(company)) => Ok(Identity::Company(company)),
        _ => Err(ClientError::server(response.message, "Could not load company")),
    }
}

fn identity_from_admin(response: AdminResponse) -> Result<Identity, ClientError> {
    match (response.success, response.admin) {
        (true, Some(admin)) => Ok(Identity::Admin(admin)),
        _ => Err(ClientError::server(response.message, "Could not load admin")),
    }
}

#[async_trait(?Send)]
impl SessionBackend for ApiClient {
    async fn whoami(&self, role: Role) -> Result<Identity, ClientError> {
        let path = role.whoami_path();
        match role {
            Role::User => identity_from_user(self.get(path, &[]).await?),
            Role::Company => identity_from_company(self.get(path, &[]).await?),
            Role::Admin => identity_from_admin(self.get(path, &[]).await?),
        }
    }

    async fn login(&self, role: Role, credentials: &Credentials) -> Result<Identity, ClientError> {
        log::info!("🔐 Login as {} <{}>", role.display_name(), credentials.email);
        let path = role.login_path();
        match role {
            Role::User => identity_from_user(self.post(path, Some(credentials)).await?),
            Role::Company => identity_from_company(self.post(path, Some(credentials)).await?),
            Role::Admin => identity_from_admin(self.post(path, Some(credentials)).await?),
        }
    }

    async fn logout(&self, role: Role) -> Result<(), ClientError> {
        let ack: AckResponse = self.post::<(), _>(role.logout_path(), None).await?;
        if ack.success {
            Ok(())
        } else {
            Err(ClientError::server(ack.message, "Logout failed"))
        }
    }

    async fn applications(&self) -> Result<Vec<Application>, ClientError> {
        let response: ApplicationsResponse = self.get("/api/users/applications", &[]).await?;
        if !response.success {
            return Err(ClientError::server(response.message, "Could not load applications"));
        }
        Ok(response.applications)
    }
}

#[async_trait(?Send)]
impl JobsBackend for ApiClient {
    async fn search_jobs(&self, query: &[(String, String)]) -> Result<JobsResponse, ClientError> {
        self.get("/api/jobs", query).await
    }

    async fn company_jobs(&self) -> Result<Vec<JobSummary>, ClientError> {
        let response: JobsResponse = self.get("/api/company/list-jobs", &[]).await?;
        if !response.success {
            return Err(ClientError::server(response.message, "Could not load your jobs"));
        }
        Ok(response.jobs)
    }

    async fn job_detail(&self, id: &str) -> Result<JobDetail, ClientError> {
        let path = format!("/api/jobs/{}", urlencoding::encode(id));
        let response: JobDetailResponse = self.get(&path, &[]).await?;
        match (response.success, response.job) {
            (true, Some(job)) => Ok(job),
            _ => Err(ClientError::server(response.message, "Job not found")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_is_appended_after_the_query() {
        let query = vec![
            ("page".to_string(), "2".to_string()),
            ("states[]".to_string(), "Tamil Nadu".to_string()),
        ];
        assert_eq!(
            request_url("https://api.example.com", "/api/jobs", &query, Some("portal-web")),
            "https://api.example.com/api/jobs?page=2&states%5B%5D=Tamil%20Nadu&clientId=portal-web"
        );
    }

    #[test]
    fn client_id_alone_still_makes_a_query() {
        assert_eq!(
            request_url("https://api.example.com/", "/api/users/user", &[], Some("portal-web")),
            "https://api.example.com/api/users/user?clientId=portal-web"
        );
    }

    #[test]
    fn no_client_id_means_no_extra_param() {
        assert_eq!(
            request_url("http://localhost:5000", "/api/admin/logout", &[], None),
            "http://localhost:5000/api/admin/logout"
        );
        assert_eq!(
            request_url("http://localhost:5000", "/api/jobs", &[], Some("  ")),
            "http://localhost:5000/api/jobs"
        );
    }

    #[test]
    fn requests_carry_cookies() {
        assert_eq!(CREDENTIALS, RequestCredentials::Include);
    }
}
