use serde::{Deserialize, Serialize};

/// Recruiter (company) account as returned by `/api/company/company`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    /// Set once an administrator has verified the recruiter
    pub is_verified: bool,
}
