// In-memory backends shared by unit tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::models::api::JobsResponse;
use crate::models::{
    AdminProfile, Application, CompanyProfile, Credentials, Identity, JobDetail, JobSummary, Pagination, Role,
    UserProfile,
};
use crate::services::{ClientError, JobsBackend, SessionBackend};

pub fn user_identity(name: &str) -> Identity {
    Identity::User(UserProfile {
        id: format!("u-{}", name),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        ..UserProfile::default()
    })
}

pub fn company_identity(name: &str) -> Identity {
    Identity::Company(CompanyProfile {
        id: format!("c-{}", name),
        name: name.to_string(),
        ..CompanyProfile::default()
    })
}

pub fn admin_identity(name: &str) -> Identity {
    Identity::Admin(AdminProfile {
        id: format!("a-{}", name),
        name: name.to_string(),
        ..AdminProfile::default()
    })
}

pub fn application(job_id: &str) -> Application {
    Application {
        id: format!("app-{}", job_id),
        job_id: job_id.to_string(),
        job_title: format!("Job {}", job_id),
        ..Application::default()
    }
}

pub fn job(id: &str) -> JobSummary {
    JobSummary {
        id: id.to_string(),
        title: format!("Job {}", id),
        ..JobSummary::default()
    }
}

#[derive(Default)]
struct SessionInner {
    whoami: HashMap<Role, Result<Identity, ClientError>>,
    login: HashMap<Role, Result<Identity, ClientError>>,
    logout: Option<ClientError>,
    applications: Option<Result<Vec<Application>, ClientError>>,
    applications_hang: bool,
    calls: Vec<String>,
}

/// Scripted [`SessionBackend`]; clones share the script and call log
#[derive(Clone, Default)]
pub struct FakeSessionBackend {
    inner: Rc<RefCell<SessionInner>>,
}

impl FakeSessionBackend {
    pub fn whoami_returns(&self, role: Role, result: Result<Identity, ClientError>) {
        self.inner.borrow_mut().whoami.insert(role, result);
    }

    pub fn login_returns(&self, role: Role, result: Result<Identity, ClientError>) {
        self.inner.borrow_mut().login.insert(role, result);
    }

    pub fn logout_fails_with(&self, error: ClientError) {
        self.inner.borrow_mut().logout = Some(error);
    }

    pub fn applications_return(&self, result: Result<Vec<Application>, ClientError>) {
        self.inner.borrow_mut().applications = Some(result);
    }

    /// `applications()` stays pending forever
    pub fn applications_never_answer(&self) {
        self.inner.borrow_mut().applications_hang = true;
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.borrow().calls.clone()
    }

    fn record(&self, call: String) {
        self.inner.borrow_mut().calls.push(call);
    }
}

#[async_trait(?Send)]
impl SessionBackend for FakeSessionBackend {
    async fn whoami(&self, role: Role) -> Result<Identity, ClientError> {
        self.record(format!("whoami:{:?}", role));
        self.inner
            .borrow()
            .whoami
            .get(&role)
            .cloned()
            .unwrap_or(Err(ClientError::Unauthenticated))
    }

    async fn login(&self, role: Role, credentials: &Credentials) -> Result<Identity, ClientError> {
        self.record(format!("login:{:?}:{}", role, credentials.email));
        self.inner
            .borrow()
            .login
            .get(&role)
            .cloned()
            .unwrap_or(Err(ClientError::Server("Invalid credentials".to_string())))
    }

    async fn logout(&self, role: Role) -> Result<(), ClientError> {
        self.record(format!("logout:{:?}", role));
        match &self.inner.borrow().logout {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    async fn applications(&self) -> Result<Vec<Application>, ClientError> {
        self.record("applications".to_string());
        let hang = self.inner.borrow().applications_hang;
        if hang {
            return futures::future::pending().await;
        }
        self.inner
            .borrow()
            .applications
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[derive(Default)]
struct JobsInner {
    search: Vec<Result<JobsResponse, ClientError>>,
    company_jobs: Option<Result<Vec<JobSummary>, ClientError>>,
    detail: Option<Result<JobDetail, ClientError>>,
    queries: Vec<Vec<(String, String)>>,
}

/// Scripted [`JobsBackend`]; search responses are served in push order
#[derive(Clone, Default)]
pub struct FakeJobsBackend {
    inner: Rc<RefCell<JobsInner>>,
}

impl FakeJobsBackend {
    pub fn push_search(&self, result: Result<JobsResponse, ClientError>) {
        self.inner.borrow_mut().search.push(result);
    }

    pub fn company_jobs_return(&self, result: Result<Vec<JobSummary>, ClientError>) {
        self.inner.borrow_mut().company_jobs = Some(result);
    }

    pub fn detail_returns(&self, result: Result<JobDetail, ClientError>) {
        self.inner.borrow_mut().detail = Some(result);
    }

    pub fn queries(&self) -> Vec<Vec<(String, String)>> {
        self.inner.borrow().queries.clone()
    }
}

pub fn jobs_response(ids: &[&str], current_page: u32, total_pages: u32, total_jobs: u64) -> JobsResponse {
    JobsResponse {
        success: true,
        message: None,
        jobs: ids.iter().map(|id| job(id)).collect(),
        pagination: Some(Pagination {
            current_page,
            total_pages,
            total_jobs,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }),
    }
}

#[async_trait(?Send)]
impl JobsBackend for FakeJobsBackend {
    async fn search_jobs(&self, query: &[(String, String)]) -> Result<JobsResponse, ClientError> {
        let mut inner = self.inner.borrow_mut();
        inner.queries.push(query.to_vec());
        if inner.search.is_empty() {
            return Err(ClientError::Network("no scripted response".to_string()));
        }
        inner.search.remove(0)
    }

    async fn company_jobs(&self) -> Result<Vec<JobSummary>, ClientError> {
        self.inner
            .borrow()
            .company_jobs
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn job_detail(&self, _id: &str) -> Result<JobDetail, ClientError> {
        self.inner
            .borrow()
            .detail
            .clone()
            .unwrap_or(Err(ClientError::Http { status: 404, message: "Job not found".to_string() }))
    }
}
