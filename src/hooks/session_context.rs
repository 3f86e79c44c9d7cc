// ============================================================================
// SESSION CONTEXT - the three role sessions, shared app-wide
// ============================================================================
// Constructed once by the provider at application start. On mount every
// role is verified in its own task; none waits for another.
// ============================================================================

use yew::prelude::*;
use crate::hooks::use_toast::{use_toast, Toaster};
use crate::models::{Application, Credentials, Role, RoleSession};
use crate::services::ClientError;
use crate::viewmodels::SessionViewModel;

/// Login form submission; `on_done` reports the outcome back to the form
#[derive(Clone, PartialEq)]
pub struct LoginRequest {
    pub role: Role,
    pub credentials: Credentials,
    pub on_done: Callback<Result<(), ClientError>>,
}

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub user: UseStateHandle<RoleSession>,
    pub company: UseStateHandle<RoleSession>,
    pub admin: UseStateHandle<RoleSession>,
    pub applications: UseStateHandle<Vec<Application>>,
    pub applications_loading: UseStateHandle<bool>,
    pub login: Callback<LoginRequest>,
    pub logout: Callback<Role>,
    /// Call when any request answered 401 for this role
    pub invalidate: Callback<Role>,
    pub refresh_applications: Callback<()>,
}

impl SessionHandle {
    pub fn session(&self, role: Role) -> &RoleSession {
        match role {
            Role::User => &self.user,
            Role::Company => &self.company,
            Role::Admin => &self.admin,
        }
    }

    fn state(&self, role: Role) -> UseStateHandle<RoleSession> {
        match role {
            Role::User => self.user.clone(),
            Role::Company => self.company.clone(),
            Role::Admin => self.admin.clone(),
        }
    }
}

#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let toaster = use_toast();

    let user = use_state(RoleSession::unknown);
    let company = use_state(RoleSession::unknown);
    let admin = use_state(RoleSession::unknown);
    let applications = use_state(Vec::<Application>::new);
    let applications_loading = use_state(|| false);

    let state_for = {
        let user = user.clone();
        let company = company.clone();
        let admin = admin.clone();
        move |role: Role| match role {
            Role::User => user.clone(),
            Role::Company => company.clone(),
            Role::Admin => admin.clone(),
        }
    };

    let logout = {
        let state_for = state_for.clone();
        let applications = applications.clone();
        let toaster = toaster.clone();
        Callback::from(move |role: Role| {
            let session = state_for(role);
            let applications = applications.clone();
            let toaster = toaster.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let cleared = SessionViewModel::new().logout(role).await;
                if role == Role::User {
                    applications.set(Vec::new());
                }
                session.set(cleared);
                toaster.info("Logged out");
            });
        })
    };

    let invalidate = {
        let state_for = state_for.clone();
        let applications = applications.clone();
        let toaster = toaster.clone();
        Callback::from(move |role: Role| {
            let session = state_for(role);
            if !session.is_authenticated() {
                return;
            }
            session.set(SessionViewModel::new().invalidate(role));
            if role == Role::User {
                applications.set(Vec::new());
            }
            toaster.error(ClientError::Unauthenticated.user_message());
        })
    };

    let refresh_applications = {
        let applications = applications.clone();
        let applications_loading = applications_loading.clone();
        let invalidate = invalidate.clone();
        let toaster = toaster.clone();
        Callback::from(move |_| {
            let applications = applications.clone();
            let applications_loading = applications_loading.clone();
            let invalidate = invalidate.clone();
            let toaster = toaster.clone();
            applications_loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match SessionViewModel::new().applications().await {
                    Ok(list) => applications.set(list),
                    Err(e) => report(&e, Role::User, &invalidate, &toaster, "Failed to load applications"),
                }
                applications_loading.set(false);
            });
        })
    };

    // Side fetch after verification or login; failures leave the list empty
    // and never touch the session
    let load_applications = {
        let applications = applications.clone();
        let applications_loading = applications_loading.clone();
        Callback::from(move |_| {
            let applications = applications.clone();
            let applications_loading = applications_loading.clone();
            applications_loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match SessionViewModel::new().applications().await {
                    Ok(list) => applications.set(list),
                    Err(e) => {
                        log::warn!("⚠️ Applications unavailable: {}", e);
                        applications.set(Vec::new());
                    }
                }
                applications_loading.set(false);
            });
        })
    };

    // Bootstrap: one fire-and-forget task per role. Applications follow as
    // a separate task once the user session is known to be valid.
    {
        let state_for = state_for.clone();
        let load_applications = load_applications.clone();
        use_effect_with((), move |_| {
            for role in Role::ALL {
                let session = state_for(role);
                let load_applications = load_applications.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let settled = SessionViewModel::new().bootstrap(role).await;
                    let fetch_applications = role == Role::User && settled.is_authenticated();
                    session.set(settled);
                    if fetch_applications {
                        load_applications.emit(());
                    }
                });
            }
            || ()
        });
    }

    let login = {
        let state_for = state_for.clone();
        let load_applications = load_applications.clone();
        let toaster = toaster.clone();
        Callback::from(move |request: LoginRequest| {
            let LoginRequest { role, credentials, on_done } = request;
            let session = state_for(role);
            let load_applications = load_applications.clone();
            let toaster = toaster.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match SessionViewModel::new().login(role, &credentials).await {
                    Ok(settled) => {
                        session.set(settled);
                        if role == Role::User {
                            load_applications.emit(());
                        }
                        toaster.success("Logged in successfully");
                        on_done.emit(Ok(()));
                    }
                    Err(e) => {
                        log::error!("❌ {} login failed: {}", role.display_name(), e);
                        toaster.error(e.user_message());
                        on_done.emit(Err(e));
                    }
                }
            });
        })
    };

    let handle = SessionHandle {
        user,
        company,
        admin,
        applications,
        applications_loading,
        login,
        logout,
        invalidate,
        refresh_applications,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Error policy for user-initiated requests: 401 ends the role's session,
/// anything else becomes a toast.
pub fn report(error: &ClientError, role: Role, invalidate: &Callback<Role>, toaster: &Toaster, context: &str) {
    log::error!("❌ {}: {}", context, error);
    if error.is_unauthorized() {
        invalidate.emit(role);
    } else {
        toaster.error(format!("{}: {}", context, error.user_message()));
    }
}

#[hook]
pub fn use_sessions() -> Option<SessionHandle> {
    use_context::<SessionHandle>()
}

/// Convenience for components that only care about one role
#[hook]
pub fn use_role_session(role: Role) -> RoleSession {
    use_sessions()
        .map(|handle| (*handle.state(role)).clone())
        .unwrap_or_else(RoleSession::anonymous)
}
