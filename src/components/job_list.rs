use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::routes::Route;
use crate::models::JobSummary;

#[derive(Properties, PartialEq)]
pub struct JobCardProps {
    pub job: JobSummary,
}

#[function_component(JobCard)]
pub fn job_card(props: &JobCardProps) -> Html {
    let job = &props.job;
    let place = match (job.location.is_empty(), job.state.is_empty()) {
        (false, false) => format!("{}, {}", job.location, job.state),
        (false, true) => job.location.clone(),
        (true, false) => job.state.clone(),
        (true, true) => String::new(),
    };
    let posted = job.posted_at.map(|at| at.format("%d %b %Y").to_string());

    html! {
        <div class="job-card">
            <div class="job-card-header">
                <Link<Route> to={Route::JobDetail { id: job.id.clone() }} classes="job-title">
                    {&job.title}
                </Link<Route>>
                if job.is_verified {
                    <span class="badge badge-verified">{"Verified"}</span>
                }
            </div>
            <div class="job-company">{&job.company_name}</div>
            <div class="job-meta">
                if !place.is_empty() {
                    <span class="job-location">{"📍 "}{place}</span>
                }
                if let Some(job_type) = job.job_type {
                    <span class="job-type">{job_type.display_name()}</span>
                }
                if !job.category.is_empty() {
                    <span class="job-category">{&job.category}</span>
                }
            </div>
            if let Some(salary) = job.salary_label() {
                <div class="job-salary">{salary}</div>
            }
            if let Some(posted) = posted {
                <div class="job-posted">{"Posted "}{posted}</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct JobListProps {
    pub jobs: Vec<JobSummary>,
    pub loading: bool,
    #[prop_or(AttrValue::from("No jobs match your search."))]
    pub empty_message: AttrValue,
}

#[function_component(JobList)]
pub fn job_list(props: &JobListProps) -> Html {
    if props.loading {
        return html! {
            <div class="job-list-loading">
                <div class="spinner"></div>
                <p>{"Loading jobs..."}</p>
            </div>
        };
    }

    if props.jobs.is_empty() {
        return html! {
            <div class="job-list-empty">
                <p>{props.empty_message.clone()}</p>
            </div>
        };
    }

    html! {
        <div class="job-list">
            { for props.jobs.iter().map(|job| html! {
                <JobCard key={job.id.clone()} job={job.clone()} />
            }) }
        </div>
    }
}
