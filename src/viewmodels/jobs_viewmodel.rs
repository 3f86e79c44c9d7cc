// ============================================================================
// JOBS VIEWMODEL - public search, recruiter listing, job detail
// ============================================================================

use crate::config::CONFIG;
use crate::models::{JobDetail, JobSummary, JobsPage, Pagination, SearchFilter};
use crate::services::{ApiClient, ClientError, JobsBackend};
use crate::state::{Generation, RequestGeneration};

/// What the home page lists. Recruiters never see the public search.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeJobs {
    Public(JobsPage),
    /// The recruiter's own postings, unfiltered and unpaginated
    Recruiter(Vec<JobSummary>),
}

pub struct JobsViewModel<B> {
    backend: B,
    page_size: u32,
}

impl JobsViewModel<ApiClient> {
    pub fn new() -> Self {
        Self::with(ApiClient::new(), CONFIG.jobs.page_size)
    }
}

impl Default for JobsViewModel<ApiClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: JobsBackend> JobsViewModel<B> {
    pub fn with(backend: B, page_size: u32) -> Self {
        Self {
            backend,
            page_size: page_size.max(1),
        }
    }

    pub async fn try_fetch_page(&self, filter: &SearchFilter, page: u32) -> Result<JobsPage, ClientError> {
        let query = filter.to_query(page, self.page_size);
        let response = self.backend.search_jobs(&query).await?;
        if !response.success {
            return Err(ClientError::server(response.message, "Failed to fetch jobs"));
        }
        // Without a pagination block the items are the whole result
        let pagination = response.pagination.unwrap_or_else(|| Pagination {
            current_page: 1,
            total_pages: 1,
            total_jobs: response.jobs.len() as u64,
            has_next_page: false,
            has_prev_page: false,
        });
        Ok(JobsPage::from_response(response.jobs, pagination, self.page_size))
    }

    /// One page of results; any failure yields the empty page, never stale data
    pub async fn fetch_page(&self, filter: &SearchFilter, page: u32) -> JobsPage {
        match self.try_fetch_page(filter, page).await {
            Ok(jobs_page) => {
                log::info!(
                    "📦 Page {}/{}: {} jobs ({} total)",
                    jobs_page.current_page,
                    jobs_page.total_pages,
                    jobs_page.items.len(),
                    jobs_page.total_count
                );
                jobs_page
            }
            Err(e) => {
                log::error!("❌ Error fetching jobs: {}", e);
                JobsPage::empty()
            }
        }
    }

    /// Fetch that only counts while `ticket` is the latest one issued.
    ///
    /// The caller takes the ticket when the request starts; resolves to
    /// `None` once a newer fetch has begun.
    pub async fn fetch_if_current(
        &self,
        generation: &RequestGeneration,
        ticket: Generation,
        filter: &SearchFilter,
        page: u32,
    ) -> Option<JobsPage> {
        let jobs_page = self.fetch_page(filter, page).await;
        if generation.is_current(ticket) {
            Some(jobs_page)
        } else {
            log::warn!("⚠️ Discarding stale jobs response for page {}", page);
            None
        }
    }

    pub async fn recruiter_jobs(&self) -> Result<Vec<JobSummary>, ClientError> {
        let jobs = self.backend.company_jobs().await?;
        log::info!("📋 {} recruiter jobs loaded", jobs.len());
        Ok(jobs)
    }

    pub async fn job_detail(&self, id: &str) -> Result<JobDetail, ClientError> {
        self.backend.job_detail(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::api::JobsResponse;
    use crate::models::{to_query_string, SalaryRange};
    use crate::test_support::*;
    use futures::executor::block_on;

    fn vm(backend: &FakeJobsBackend) -> JobsViewModel<FakeJobsBackend> {
        JobsViewModel::with(backend.clone(), 9)
    }

    #[test]
    fn successful_fetch_maps_pagination() {
        let backend = FakeJobsBackend::default();
        backend.push_search(Ok(jobs_response(&["a", "b", "c"], 2, 5, 42)));

        let page = block_on(vm(&backend).fetch_page(&SearchFilter::default(), 2));
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.total_count, 42);
        assert!(page.has_next && page.has_prev);
    }

    #[test]
    fn failed_fetch_after_success_yields_empty_page() {
        let backend = FakeJobsBackend::default();
        backend.push_search(Ok(jobs_response(&["a"], 1, 5, 42)));
        backend.push_search(Err(ClientError::Network("offline".to_string())));
        let vm = vm(&backend);

        let first = block_on(vm.fetch_page(&SearchFilter::default(), 1));
        assert_eq!(first.total_count, 42);

        let second = block_on(vm.fetch_page(&SearchFilter::default(), 2));
        assert_eq!(second, JobsPage::empty());
        assert_eq!(second.total_count, 0);
        assert!(second.items.is_empty());
    }

    #[test]
    fn server_reported_failure_yields_empty_page() {
        let backend = FakeJobsBackend::default();
        backend.push_search(Ok(JobsResponse {
            success: false,
            message: Some("Database unavailable".to_string()),
            jobs: Vec::new(),
            pagination: None,
        }));

        let vm = vm(&backend);
        let result = block_on(vm.try_fetch_page(&SearchFilter::default(), 1));
        assert_eq!(result, Err(ClientError::Server("Database unavailable".to_string())));
    }

    #[test]
    fn filter_is_forwarded_as_query() {
        let backend = FakeJobsBackend::default();
        backend.push_search(Ok(jobs_response(&[], 1, 1, 0)));
        let filter = SearchFilter {
            title: "Driver".to_string(),
            salary_range: Some(SalaryRange::UpTo3),
            ..SearchFilter::default()
        };

        block_on(vm(&backend).fetch_page(&filter, 1));
        let queries = backend.queries();
        assert_eq!(
            to_query_string(&queries[0]),
            "page=1&limit=9&title=Driver&salaryMin=0&salaryMax=299999"
        );
    }

    #[test]
    fn stale_response_is_discarded() {
        let backend = FakeJobsBackend::default();
        backend.push_search(Ok(jobs_response(&["new"], 1, 1, 1)));
        backend.push_search(Ok(jobs_response(&["old"], 1, 1, 1)));
        let vm = vm(&backend);
        let generation = RequestGeneration::new();

        let filter = SearchFilter::default();
        let welder = SearchFilter {
            title: "Welder".to_string(),
            ..SearchFilter::default()
        };
        let first = generation.begin();
        let second = generation.begin();
        let slow = vm.fetch_if_current(&generation, first, &filter, 1);
        let fast = vm.fetch_if_current(&generation, second, &welder, 1);

        // The later request resolves first and wins
        let latest = block_on(fast).expect("latest response applies");
        assert_eq!(latest.items[0].id, "new");
        assert_eq!(block_on(slow), None);
    }

    #[test]
    fn ticket_order_follows_request_start_not_polling() {
        let backend = FakeJobsBackend::default();
        backend.push_search(Ok(jobs_response(&["old"], 1, 1, 1)));
        backend.push_search(Ok(jobs_response(&["new"], 1, 1, 1)));
        let vm = vm(&backend);
        let generation = RequestGeneration::new();
        let filter = SearchFilter::default();

        let older = generation.begin();
        let newer = generation.begin();
        // The older task happens to run first and must still lose
        assert_eq!(block_on(vm.fetch_if_current(&generation, older, &filter, 1)), None);
        let latest = block_on(vm.fetch_if_current(&generation, newer, &filter, 2)).expect("newest start applies");
        assert_eq!(latest.items[0].id, "new");
    }

    #[test]
    fn recruiter_jobs_bypass_public_search() {
        let backend = FakeJobsBackend::default();
        backend.company_jobs_return(Ok(vec![job("mine-1"), job("mine-2")]));

        let jobs = block_on(vm(&backend).recruiter_jobs()).unwrap();
        assert_eq!(jobs.len(), 2);
        assert!(backend.queries().is_empty());
    }

    #[test]
    fn missing_job_detail_is_an_error() {
        let backend = FakeJobsBackend::default();
        let result = block_on(vm(&backend).job_detail("nope"));
        assert!(matches!(result, Err(ClientError::Http { status: 404, .. })));
    }

    #[test]
    fn job_detail_is_returned_as_served() {
        let backend = FakeJobsBackend::default();
        let detail = JobDetail {
            summary: job("j-7"),
            description: "Night shift forklift operator".to_string(),
            requirements: vec!["Forklift licence".to_string()],
            experience: "1-2 years".to_string(),
            openings: Some(3),
        };
        backend.detail_returns(Ok(detail.clone()));

        let result = block_on(vm(&backend).job_detail("j-7"));
        assert_eq!(result, Ok(detail));
    }

    #[test]
    fn missing_pagination_counts_the_items() {
        let backend = FakeJobsBackend::default();
        backend.push_search(Ok(JobsResponse {
            pagination: None,
            ..jobs_response(&["a", "b"], 1, 1, 2)
        }));

        let page = block_on(vm(&backend).fetch_page(&SearchFilter::default(), 1));
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_count, 2);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
    }
}
