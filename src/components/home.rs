use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::job_list::JobList;
use crate::components::login_form::LoginForm;
use crate::components::pager::Pager;
use crate::components::routes::{LoginPrompt, Route};
use crate::components::search_panel::SearchPanel;
use crate::hooks::use_jobs;
use crate::models::Role;
use crate::utils::take_redirect;
use crate::viewmodels::HomeJobs;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let handle = use_jobs();
    let navigator = use_navigator();
    let location = use_location();

    let show_login = location
        .and_then(|l| l.query::<LoginPrompt>().ok())
        .map(|prompt| prompt.login)
        .unwrap_or(false);

    let close_login = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.replace(&Route::Home);
            }
        })
    };

    let on_login = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let Some(navigator) = &navigator else { return };
            match take_redirect().and_then(|path| Route::recognize(&path)) {
                Some(route) if route != Route::NotFound && route != Route::Home => navigator.push(&route),
                _ => navigator.replace(&Route::Home),
            }
        })
    };

    let listing = match &*handle.jobs {
        HomeJobs::Recruiter(jobs) => html! {
            <section class="job-results recruiter">
                <h2>{"Your job postings"}</h2>
                <JobList
                    jobs={jobs.clone()}
                    loading={*handle.loading}
                    empty_message="You have not posted any jobs yet."
                />
            </section>
        },
        HomeJobs::Public(page) => html! {
            <>
                <SearchPanel filter={(*handle.filter).clone()} on_change={handle.set_filter.clone()} />
                <section class="job-results">
                    <p class="result-count">{format!("{} jobs found", page.total_count)}</p>
                    <JobList jobs={page.items.clone()} loading={*handle.loading} />
                    <Pager
                        current={page.current_page}
                        total={page.total_pages}
                        has_prev={page.has_prev}
                        has_next={page.has_next}
                        on_page={handle.go_to_page.clone()}
                    />
                </section>
            </>
        },
    };

    html! {
        <div class="page home">
            { listing }
            if show_login {
                <div class="modal-backdrop">
                    <div class="modal">
                        <button class="modal-close" onclick={close_login}>{"✕"}</button>
                        <LoginForm role={Role::User} on_success={on_login} />
                    </div>
                </div>
            }
        </div>
    }
}
