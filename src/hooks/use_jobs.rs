// ============================================================================
// USE JOBS - job discovery state for the home listing
// ============================================================================
// Every change of filter, page, role-derived job type or recruiter status
// triggers exactly one fetch (no debounce). Responses of superseded
// fetches are dropped through the request generation.
// ============================================================================

use yew::prelude::*;
use crate::hooks::session_context::{report, use_sessions};
use crate::hooks::use_toast::use_toast;
use crate::models::{JobType, JobsPage, Role, SearchFilter};
use crate::state::RequestGeneration;
use crate::viewmodels::{HomeJobs, JobsViewModel};

#[derive(Clone, PartialEq)]
pub struct UseJobsHandle {
    pub filter: UseStateHandle<SearchFilter>,
    pub page: UseStateHandle<u32>,
    pub jobs: UseStateHandle<HomeJobs>,
    pub loading: UseStateHandle<bool>,
    /// Replaces the filter and goes back to page 1
    pub set_filter: Callback<SearchFilter>,
    pub go_to_page: Callback<u32>,
}

/// Filter actually sent: an unset job type falls back to the user's preference
pub fn effective_filter(filter: &SearchFilter, role_job_type: Option<JobType>) -> SearchFilter {
    let mut effective = filter.clone();
    if effective.job_type.is_none() {
        effective.job_type = role_job_type;
    }
    effective
}

#[hook]
pub fn use_jobs() -> UseJobsHandle {
    let sessions = use_sessions();
    let toaster = use_toast();

    let filter = use_state(SearchFilter::default);
    let page = use_state(|| 1u32);
    let jobs = use_state(|| HomeJobs::Public(JobsPage::empty()));
    let loading = use_state(|| false);
    let generation = (*use_state(RequestGeneration::new)).clone();

    let (recruiter, company_pending, role_job_type) = match &sessions {
        Some(handle) => (
            handle.company.is_authenticated(),
            handle.company.is_loading(),
            handle
                .user
                .identity()
                .and_then(|identity| identity.as_user())
                .and_then(|user| user.preferred_job_type),
        ),
        None => (false, false, None),
    };
    let invalidate = sessions.as_ref().map(|handle| handle.invalidate.clone()).unwrap_or_default();

    {
        let jobs = jobs.clone();
        let loading = loading.clone();
        let deps = (
            effective_filter(&filter, role_job_type),
            *page,
            recruiter,
            company_pending,
        );
        use_effect_with(deps, move |(filter, page, recruiter, company_pending)| {
            // The recruiter branch cannot be decided until that session settles
            if !*company_pending {
                let filter = filter.clone();
                let page = *page;
                let recruiter = *recruiter;
                loading.set(true);

                if recruiter {
                    let ticket = generation.begin();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = JobsViewModel::new().recruiter_jobs().await;
                        if !generation.is_current(ticket) {
                            return;
                        }
                        match result {
                            Ok(list) => jobs.set(HomeJobs::Recruiter(list)),
                            Err(e) => {
                                report(&e, Role::Company, &invalidate, &toaster, "Failed to load your jobs");
                                jobs.set(HomeJobs::Recruiter(Vec::new()));
                            }
                        }
                        loading.set(false);
                    });
                } else {
                    let ticket = generation.begin();
                    wasm_bindgen_futures::spawn_local(async move {
                        let vm = JobsViewModel::new();
                        if let Some(jobs_page) = vm.fetch_if_current(&generation, ticket, &filter, page).await {
                            jobs.set(HomeJobs::Public(jobs_page));
                            loading.set(false);
                        }
                    });
                }
            }
            || ()
        });
    }

    let set_filter = {
        let filter = filter.clone();
        let page = page.clone();
        Callback::from(move |next: SearchFilter| {
            filter.set(next);
            page.set(1);
        })
    };

    let go_to_page = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next.max(1)))
    };

    UseJobsHandle {
        filter,
        page,
        jobs,
        loading,
        set_filter,
        go_to_page,
    }
}
