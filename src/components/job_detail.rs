use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::routes::Route;
use crate::hooks::use_toast;
use crate::models::JobDetail;
use crate::viewmodels::JobsViewModel;

#[derive(Properties, PartialEq)]
pub struct JobDetailPageProps {
    pub id: String,
}

#[derive(Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Box<JobDetail>),
    Failed(String),
}

#[function_component(JobDetailPage)]
pub fn job_detail_page(props: &JobDetailPageProps) -> Html {
    let toaster = use_toast();
    let state = use_state(|| DetailState::Loading);

    {
        let state = state.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            state.set(DetailState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match JobsViewModel::new().job_detail(&id).await {
                    Ok(detail) => state.set(DetailState::Loaded(Box::new(detail))),
                    Err(e) => {
                        log::error!("❌ Failed to load job {}: {}", id, e);
                        toaster.error(format!("Failed to load job: {}", e.user_message()));
                        state.set(DetailState::Failed(e.user_message()));
                    }
                }
            });
            || ()
        });
    }

    let body = match &*state {
        DetailState::Loading => html! {
            <div class="page-loading"><div class="spinner"></div></div>
        },
        DetailState::Failed(message) => html! {
            <div class="job-detail-error"><p>{message}</p></div>
        },
        DetailState::Loaded(detail) => {
            let job = &detail.summary;
            html! {
                <article class="job-detail">
                    <h1>{&job.title}</h1>
                    <div class="job-company">
                        {&job.company_name}
                        if job.is_verified {
                            <span class="badge badge-verified">{"Verified"}</span>
                        }
                    </div>
                    <div class="job-meta">
                        <span>{format!("📍 {} {}", job.location, job.state).trim().to_string()}</span>
                        if let Some(job_type) = job.job_type {
                            <span>{job_type.display_name()}</span>
                        }
                        if let Some(salary) = job.salary_label() {
                            <span>{salary}</span>
                        }
                        if let Some(openings) = detail.openings {
                            <span>{format!("{} openings", openings)}</span>
                        }
                    </div>
                    if !detail.experience.is_empty() {
                        <p class="job-experience">{"Experience: "}{&detail.experience}</p>
                    }
                    <section class="job-description">
                        <h2>{"Description"}</h2>
                        <p>{&detail.description}</p>
                    </section>
                    if !detail.requirements.is_empty() {
                        <section class="job-requirements">
                            <h2>{"Requirements"}</h2>
                            <ul>
                                { for detail.requirements.iter().map(|r| html! { <li>{r}</li> }) }
                            </ul>
                        </section>
                    }
                </article>
            }
        }
    };

    html! {
        <div class="page job-detail-page">
            <Link<Route> to={Route::Home} classes="back-link">{"← Back to jobs"}</Link<Route>>
            { body }
        </div>
    }
}
