use serde::{Deserialize, Serialize};
use crate::models::{AdminProfile, CompanyProfile, UserProfile};

// ============================================================================
// SESSION - one independent session per role
// ============================================================================

/// Independently authenticated actor types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    User,
    Company,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Company, Role::Admin];

    /// localStorage key holding the "try to verify on next load" hint
    pub fn hint_key(&self) -> &'static str {
        match self {
            Role::User => "boolC",
            Role::Company => "bool",
            Role::Admin => "boolAP",
        }
    }

    pub fn whoami_path(&self) -> &'static str {
        match self {
            Role::User => "/api/users/user",
            Role::Company => "/api/company/company",
            Role::Admin => "/api/admin/admin",
        }
    }

    pub fn login_path(&self) -> &'static str {
        match self {
            Role::User => "/api/users/user-login",
            Role::Company => "/api/company/login",
            Role::Admin => "/api/admin/login",
        }
    }

    pub fn logout_path(&self) -> &'static str {
        match self {
            Role::User => "/api/users/logout",
            Role::Company => "/api/company/logout",
            Role::Admin => "/api/admin/logout",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::User => "Job seeker",
            Role::Company => "Recruiter",
            Role::Admin => "Admin",
        }
    }
}

/// Tri-state authentication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// Verification not settled yet
    #[default]
    Unknown,
    Authenticated,
    Anonymous,
}

/// Profile returned by a role's whoami/login endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    User(UserProfile),
    Company(CompanyProfile),
    Admin(AdminProfile),
}

impl Identity {
    pub fn role(&self) -> Role {
        match self {
            Identity::User(_) => Role::User,
            Identity::Company(_) => Role::Company,
            Identity::Admin(_) => Role::Admin,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Identity::User(user) => &user.name,
            Identity::Company(company) => &company.name,
            Identity::Admin(admin) => &admin.name,
        }
    }

    pub fn as_user(&self) -> Option<&UserProfile> {
        match self {
            Identity::User(user) => Some(user),
            _ => None,
        }
    }

    pub fn as_company(&self) -> Option<&CompanyProfile> {
        match self {
            Identity::Company(company) => Some(company),
            _ => None,
        }
    }

    pub fn as_admin(&self) -> Option<&AdminProfile> {
        match self {
            Identity::Admin(admin) => Some(admin),
            _ => None,
        }
    }
}

/// Session entity for a single role.
///
/// Starts `Unknown`, is settled once by bootstrap and afterwards only moves
/// through explicit login/logout or an invalid-session response.
/// `Authenticated` always carries an identity; the other states never do.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoleSession {
    status: AuthStatus,
    identity: Option<Identity>,
}

impl RoleSession {
    /// Session still being verified
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            status: AuthStatus::Authenticated,
            identity: Some(identity),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            status: AuthStatus::Anonymous,
            identity: None,
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == AuthStatus::Unknown
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }
}
