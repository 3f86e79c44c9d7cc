// ============================================================================
// SESSION VIEWMODEL - per-role session bootstrap, login and logout
// ============================================================================
// Returns values only; hooks own the UI state and apply them.
// The server cookie session is the only source of truth: the persisted
// hint just decides whether a verification request is worth sending.
// ============================================================================

use crate::models::{Application, Credentials, Role, RoleSession};
use crate::services::{ApiClient, ClientError, SessionBackend};
use crate::utils::{validate_credentials, HintStore, LocalHints};

pub struct SessionViewModel<B, H> {
    backend: B,
    hints: H,
}

impl SessionViewModel<ApiClient, LocalHints> {
    pub fn new() -> Self {
        Self::with(ApiClient::new(), LocalHints)
    }
}

impl Default for SessionViewModel<ApiClient, LocalHints> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: SessionBackend, H: HintStore> SessionViewModel<B, H> {
    pub fn with(backend: B, hints: H) -> Self {
        Self { backend, hints }
    }

    /// Settles `role` once: no hint means no request.
    ///
    /// Any failure resolves to anonymous; nothing is retried. The hint is
    /// dropped only when the server actually rejected the session, so an
    /// offline start still verifies on the next load.
    pub async fn bootstrap(&self, role: Role) -> RoleSession {
        let key = role.hint_key();
        if !self.hints.get(key) {
            log::info!("ℹ️ No {} hint, skipping verification", role.display_name());
            return RoleSession::anonymous();
        }

        log::info!("🔍 Verifying {} session...", role.display_name());
        match self.backend.whoami(role).await {
            Ok(identity) if identity.role() == role => {
                log::info!("✅ {} session valid: {}", role.display_name(), identity.display_name());
                RoleSession::authenticated(identity)
            }
            Ok(other) => {
                log::error!("❌ {} whoami returned a {:?} profile", role.display_name(), other.role());
                self.hints.clear(key);
                RoleSession::anonymous()
            }
            Err(e) => {
                log::warn!("⚠️ {} session not valid: {}", role.display_name(), e);
                if matches!(e, ClientError::Unauthenticated | ClientError::Server(_)) {
                    self.hints.clear(key);
                }
                RoleSession::anonymous()
            }
        }
    }

    /// Validates locally, then logs in. Nothing is sent when validation fails.
    pub async fn login(&self, role: Role, credentials: &Credentials) -> Result<RoleSession, ClientError> {
        validate_credentials(role, credentials)?;

        let identity = self.backend.login(role, credentials).await.map_err(|e| match e {
            // A rejected login is not an expired session
            ClientError::Unauthenticated => ClientError::Server("Invalid email or password".to_string()),
            other => other,
        })?;
        if identity.role() != role {
            return Err(ClientError::Parse(format!("expected a {:?} profile", role)));
        }

        self.hints.set(role.hint_key(), true);
        log::info!("✅ Logged in as {}: {}", role.display_name(), identity.display_name());
        Ok(RoleSession::authenticated(identity))
    }

    /// Best-effort on the server, guaranteed locally
    pub async fn logout(&self, role: Role) -> RoleSession {
        if let Err(e) = self.backend.logout(role).await {
            log::warn!("⚠️ {} logout request failed: {}", role.display_name(), e);
        }
        self.invalidate(role)
    }

    /// Drops local state after the server reported the session invalid
    pub fn invalidate(&self, role: Role) -> RoleSession {
        self.hints.clear(role.hint_key());
        log::info!("👋 {} session cleared", role.display_name());
        RoleSession::anonymous()
    }

    /// Applications of the signed-in user. Fetched on its own once the
    /// user session is authenticated; never holds up the session itself.
    pub async fn applications(&self) -> Result<Vec<Application>, ClientError> {
        let applications = self.backend.applications().await?;
        log::info!("📋 {} applications loaded", applications.len());
        Ok(applications)
    }
}
