use serde::{Deserialize, Serialize};

/// Platform administrator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}
