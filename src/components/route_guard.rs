use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::routes::{LoginPrompt, Route};
use crate::hooks::use_role_session;
use crate::models::{AuthStatus, Role, RoleSession};
use crate::utils::remember_redirect;

/// What a protected route does for the current session state
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// Verification still running; show a loading indicator, never redirect
    Pending,
    Allow,
    Redirect { to: Route, open_login: bool },
}

/// Where an anonymous visitor of a `role`-protected route is sent
pub fn login_route(role: Role) -> (Route, bool) {
    match role {
        Role::User => (Route::Home, true),
        Role::Company => (Route::RecruiterLogin, false),
        Role::Admin => (Route::Unauthorized, false),
    }
}

pub fn guard(role: Role, session: &RoleSession) -> GuardDecision {
    match session.status() {
        AuthStatus::Unknown => GuardDecision::Pending,
        AuthStatus::Authenticated => GuardDecision::Allow,
        AuthStatus::Anonymous => {
            let (to, open_login) = login_route(role);
            GuardDecision::Redirect { to, open_login }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RoleGuardProps {
    pub role: Role,
    pub children: Children,
}

#[function_component(RoleGuard)]
pub fn role_guard(props: &RoleGuardProps) -> Html {
    let session = use_role_session(props.role);
    let navigator = use_navigator();
    let location = use_location();
    let decision = guard(props.role, &session);

    {
        let decision = decision.clone();
        let role = props.role;
        use_effect_with(decision, move |decision| {
            if let (GuardDecision::Redirect { to, open_login }, Some(navigator)) = (decision, navigator) {
                if let Some(location) = location {
                    remember_redirect(location.path());
                }
                log::info!("🔒 {} session required, redirecting to {}", role.display_name(), to.to_path());
                if *open_login {
                    if let Err(e) = navigator.push_with_query(to, &LoginPrompt { login: true }) {
                        log::error!("❌ Redirect failed: {}", e);
                        navigator.push(to);
                    }
                } else {
                    navigator.push(to);
                }
            }
            || ()
        });
    }

    match decision {
        GuardDecision::Pending => html! {
            <div class="page-loading">
                <div class="spinner"></div>
                <p>{"Checking your session..."}</p>
            </div>
        },
        GuardDecision::Allow => html! { <>{props.children.clone()}</> },
        GuardDecision::Redirect { .. } => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{admin_identity, company_identity, user_identity};

    #[test]
    fn unknown_session_never_redirects() {
        for role in Role::ALL {
            assert_eq!(guard(role, &RoleSession::unknown()), GuardDecision::Pending);
        }
    }

    #[test]
    fn authenticated_session_is_allowed() {
        assert_eq!(guard(Role::User, &RoleSession::authenticated(user_identity("Asha"))), GuardDecision::Allow);
        assert_eq!(
            guard(Role::Company, &RoleSession::authenticated(company_identity("Acme"))),
            GuardDecision::Allow
        );
        assert_eq!(guard(Role::Admin, &RoleSession::authenticated(admin_identity("Root"))), GuardDecision::Allow);
    }

    #[test]
    fn anonymous_admin_goes_to_unauthorized() {
        assert_eq!(
            guard(Role::Admin, &RoleSession::anonymous()),
            GuardDecision::Redirect { to: Route::Unauthorized, open_login: false }
        );
    }

    #[test]
    fn anonymous_user_gets_home_with_login_prompt() {
        assert_eq!(
            guard(Role::User, &RoleSession::anonymous()),
            GuardDecision::Redirect { to: Route::Home, open_login: true }
        );
    }

    #[test]
    fn anonymous_recruiter_goes_to_recruiter_login() {
        assert_eq!(
            guard(Role::Company, &RoleSession::anonymous()),
            GuardDecision::Redirect { to: Route::RecruiterLogin, open_login: false }
        );
    }
}
