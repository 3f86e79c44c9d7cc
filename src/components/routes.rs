use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboards::{AdminDashboard, RecruiterDashboard, UserDashboard};
use crate::components::home::HomePage;
use crate::components::job_detail::JobDetailPage;
use crate::components::login_form::LoginPage;
use crate::components::route_guard::RoleGuard;
use crate::models::Role;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/jobs/:id")]
    JobDetail { id: String },
    #[at("/dashboard")]
    UserDashboard,
    #[at("/recruiter/login")]
    RecruiterLogin,
    #[at("/recruiter")]
    RecruiterDashboard,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin")]
    AdminDashboard,
    #[at("/unauth")]
    Unauthorized,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// `?login=true` opens the job-seeker login prompt on the home page
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginPrompt {
    #[serde(default)]
    pub login: bool,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::JobDetail { id } => html! { <JobDetailPage {id} /> },
        Route::UserDashboard => html! {
            <RoleGuard role={Role::User}><UserDashboard /></RoleGuard>
        },
        Route::RecruiterLogin => html! { <LoginPage role={Role::Company} /> },
        Route::RecruiterDashboard => html! {
            <RoleGuard role={Role::Company}><RecruiterDashboard /></RoleGuard>
        },
        Route::AdminLogin => html! { <LoginPage role={Role::Admin} /> },
        Route::AdminDashboard => html! {
            <RoleGuard role={Role::Admin}><AdminDashboard /></RoleGuard>
        },
        Route::Unauthorized => html! {
            <div class="page unauthorized">
                <h1>{"Not authorized"}</h1>
                <p>{"You need an administrator account to view this page."}</p>
                <Link<Route> to={Route::AdminLogin} classes="btn-primary">{"Admin login"}</Link<Route>>
            </div>
        },
        Route::NotFound => html! {
            <div class="page not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Back to jobs"}</Link<Route>>
            </div>
        },
    }
}
