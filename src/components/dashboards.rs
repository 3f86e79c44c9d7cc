use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::job_list::JobList;
use crate::components::routes::Route;
use crate::hooks::{report, use_sessions, use_toast};
use crate::models::{profile_completion, Application, Identity, Role};
use crate::viewmodels::JobsViewModel;

fn application_row(application: &Application) -> Html {
    let applied = application
        .applied_at
        .map(|at| at.format("%d %b %Y").to_string())
        .unwrap_or_default();
    let status_class = format!("status status-{}", application.status.label().to_lowercase());

    html! {
        <tr key={application.id.clone()}>
            <td>
                <Link<Route> to={Route::JobDetail { id: application.job_id.clone() }}>
                    {&application.job_title}
                </Link<Route>>
            </td>
            <td>{&application.company_name}</td>
            <td><span class={status_class}>{application.status.label()}</span></td>
            <td>{applied}</td>
        </tr>
    }
}

#[function_component(UserDashboard)]
pub fn user_dashboard() -> Html {
    let Some(sessions) = use_sessions() else {
        return html! {};
    };
    let Some(profile) = sessions.user.identity().and_then(Identity::as_user).cloned() else {
        return html! {};
    };

    let completion = profile_completion(&profile);
    let on_refresh = {
        let refresh = sessions.refresh_applications.clone();
        Callback::from(move |_| refresh.emit(()))
    };
    let applications = &*sessions.applications;

    html! {
        <div class="page dashboard user-dashboard">
            <section class="profile-card">
                <h1>{format!("Welcome, {}", profile.name)}</h1>
                <p>{&profile.email}</p>
                <div class="profile-completion">
                    <span>{format!("Profile {}% complete", completion)}</span>
                    <div class="progress">
                        <div class="progress-bar" style={format!("width: {}%", completion)}></div>
                    </div>
                </div>
                if !profile.skills.is_empty() {
                    <div class="skills">
                        { for profile.skills.iter().map(|s| html! { <span class="chip">{s}</span> }) }
                    </div>
                }
            </section>

            <section class="applications">
                <div class="section-header">
                    <h2>{format!("My applications ({})", applications.len())}</h2>
                    <button class="btn-link" onclick={on_refresh} disabled={*sessions.applications_loading}>
                        {"Refresh"}
                    </button>
                </div>
                if applications.is_empty() {
                    <p class="empty">{"You have not applied to any jobs yet."}</p>
                } else {
                    <table class="applications-table">
                        <thead>
                            <tr><th>{"Job"}</th><th>{"Company"}</th><th>{"Status"}</th><th>{"Applied"}</th></tr>
                        </thead>
                        <tbody>
                            { for applications.iter().map(application_row) }
                        </tbody>
                    </table>
                }
            </section>
        </div>
    }
}

#[function_component(RecruiterDashboard)]
pub fn recruiter_dashboard() -> Html {
    let sessions = use_sessions();
    let toaster = use_toast();
    let jobs = use_state(Vec::new);
    let loading = use_state(|| true);

    {
        let jobs = jobs.clone();
        let loading = loading.clone();
        let invalidate = sessions.as_ref().map(|s| s.invalidate.clone()).unwrap_or_default();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match JobsViewModel::new().recruiter_jobs().await {
                    Ok(list) => jobs.set(list),
                    Err(e) => report(&e, Role::Company, &invalidate, &toaster, "Failed to load your jobs"),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let company = sessions
        .as_ref()
        .and_then(|s| s.company.identity().and_then(Identity::as_company).cloned());

    html! {
        <div class="page dashboard recruiter-dashboard">
            if let Some(company) = company {
                <section class="profile-card">
                    <h1>{&company.name}</h1>
                    <p>{&company.email}</p>
                    if company.is_verified {
                        <span class="badge badge-verified">{"Verified recruiter"}</span>
                    } else {
                        <span class="badge badge-pending">{"Awaiting verification"}</span>
                    }
                </section>
            }
            <section class="job-results">
                <h2>{format!("Your postings ({})", jobs.len())}</h2>
                <JobList
                    jobs={(*jobs).clone()}
                    loading={*loading}
                    empty_message="You have not posted any jobs yet."
                />
            </section>
        </div>
    }
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let admin = use_sessions().and_then(|s| s.admin.identity().and_then(Identity::as_admin).cloned());

    html! {
        <div class="page dashboard admin-dashboard">
            if let Some(admin) = admin {
                <section class="profile-card">
                    <h1>{"Administration"}</h1>
                    <p>{format!("Signed in as {} ({})", admin.name, admin.email)}</p>
                </section>
            }
        </div>
    }
}
