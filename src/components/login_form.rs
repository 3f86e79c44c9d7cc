use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::routes::Route;
use crate::hooks::{use_sessions, use_toast, LoginRequest};
use crate::models::{Credentials, Role};
use crate::services::ClientError;
use crate::utils::{take_redirect, validate_credentials};

/// Landing route after a successful login when no redirect was remembered
pub fn home_route(role: Role) -> Route {
    match role {
        Role::User => Route::UserDashboard,
        Role::Company => Route::RecruiterDashboard,
        Role::Admin => Route::AdminDashboard,
    }
}

/// Route to open after login: the remembered path if it resolves, else the role's home
pub fn after_login_route(role: Role, remembered: Option<String>) -> Route {
    remembered
        .and_then(|path| Route::recognize(&path))
        .filter(|route| *route != Route::NotFound)
        .unwrap_or_else(|| home_route(role))
}

/// Message shown for a form that fails the local checks, if any
pub fn validation_message(role: Role, credentials: &Credentials) -> Option<String> {
    validate_credentials(role, credentials).err().map(|e| e.user_message())
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub role: Role,
    #[prop_or_default]
    pub on_success: Callback<()>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let sessions = use_sessions();
    let toaster = use_toast();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let pass_key_ref = use_node_ref();
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let pass_key_ref = pass_key_ref.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let on_success = props.on_success.clone();
        let role = props.role;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let credentials = Credentials {
                email: value(&email_ref).trim().to_string(),
                password: value(&password_ref),
                pass_key: (role == Role::Admin).then(|| value(&pass_key_ref)),
            };

            // Same checks the view model runs, surfaced inline before the round trip
            if let Some(message) = validation_message(role, &credentials) {
                toaster.error(message.clone());
                error.set(Some(message));
                return;
            }

            let Some(handle) = sessions.as_ref() else {
                toaster.error("Session service unavailable");
                return;
            };

            error.set(None);
            submitting.set(true);

            let submitting = submitting.clone();
            let error = error.clone();
            let on_success = on_success.clone();
            handle.login.emit(LoginRequest {
                role,
                credentials,
                on_done: Callback::from(move |result: Result<(), ClientError>| {
                    submitting.set(false);
                    match result {
                        Ok(()) => on_success.emit(()),
                        Err(e) => error.set(Some(e.user_message())),
                    }
                }),
            });
        })
    };

    let title = match props.role {
        Role::User => "Sign in to apply",
        Role::Company => "Recruiter login",
        Role::Admin => "Admin login",
    };

    html! {
        <form class="login-form" onsubmit={on_submit}>
            <h2>{title}</h2>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input ref={email_ref} type="email" id="email" name="email" placeholder="you@example.com" />
            </div>
            <div class="form-group">
                <label for="password">{"Password"}</label>
                <input ref={password_ref} type="password" id="password" name="password" />
            </div>
            if props.role == Role::Admin {
                <div class="form-group">
                    <label for="pass-key">{"Pass key"}</label>
                    <input ref={pass_key_ref} type="password" id="pass-key" name="passKey" />
                </div>
            }
            if let Some(message) = (*error).clone() {
                <p class="form-error">{message}</p>
            }
            <button type="submit" class="btn-primary" disabled={*submitting}>
                { if *submitting { "Signing in..." } else { "Sign in" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub role: Role,
}

/// Full-page login used by the recruiter and admin routes
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let navigator = use_navigator();
    let role = props.role;

    let on_success = Callback::from(move |_| {
        let route = after_login_route(role, take_redirect());
        log::info!("✅ {} logged in, opening {}", role.display_name(), route.to_path());
        if let Some(navigator) = &navigator {
            navigator.push(&route);
        }
    });

    html! {
        <div class="login-screen">
            <div class="login-container">
                <LoginForm {role} {on_success} />
            </div>
        </div>
    }
}
