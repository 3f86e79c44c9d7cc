use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::routes::{LoginPrompt, Route};
use crate::hooks::use_sessions;
use crate::models::{Role, RoleSession};

/// Header entry for one role: nothing while verifying, a login link when
/// anonymous, dashboard plus logout when signed in.
fn role_entry(role: Role, session: &RoleSession, on_logout: &Callback<Role>) -> Html {
    if session.is_loading() {
        return html! {};
    }

    match session.identity() {
        Some(identity) => {
            let dashboard = match role {
                Role::User => Route::UserDashboard,
                Role::Company => Route::RecruiterDashboard,
                Role::Admin => Route::AdminDashboard,
            };
            let onclick = {
                let on_logout = on_logout.clone();
                Callback::from(move |_| on_logout.emit(role))
            };
            html! {
                <div class="header-role">
                    <Link<Route> to={dashboard} classes="header-link">
                        {format!("{} ({})", identity.display_name(), role.display_name())}
                    </Link<Route>>
                    <button class="btn-link" {onclick}>{"Logout"}</button>
                </div>
            }
        }
        None => match role {
            Role::User => html! {
                <Link<Route, LoginPrompt> to={Route::Home} query={Some(LoginPrompt { login: true })} classes="header-link">
                    {"Job seeker login"}
                </Link<Route, LoginPrompt>>
            },
            Role::Company => html! {
                <Link<Route> to={Route::RecruiterLogin} classes="header-link">{"Recruiter login"}</Link<Route>>
            },
            // Admin login is reached by URL only
            Role::Admin => html! {},
        },
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let Some(sessions) = use_sessions() else {
        return html! {};
    };

    html! {
        <header class="app-header">
            <Link<Route> to={Route::Home} classes="brand">{"JobPortal"}</Link<Route>>
            <nav class="header-nav">
                { for Role::ALL.into_iter().map(|role| role_entry(role, sessions.session(role), &sessions.logout)) }
            </nav>
        </header>
    }
}
