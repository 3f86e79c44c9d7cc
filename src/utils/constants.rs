/// Query parameter carrying the configured client identifier
pub const CLIENT_ID_PARAM: &str = "clientId";

/// sessionStorage key for the path a guard bounced the visitor away from
pub const STORAGE_KEY_REDIRECT_AFTER_LOGIN: &str = "redirectAfterLogin";

/// Filter vocabularies offered by the search panel
pub const JOB_CATEGORIES: &[&str] = &[
    "Construction",
    "Delivery & Logistics",
    "Driving",
    "Electrical",
    "Healthcare",
    "Hospitality",
    "IT & Software",
    "Manufacturing",
    "Retail",
    "Security",
];

pub const LOCATION_STATES: &[&str] = &[
    "Delhi",
    "Gujarat",
    "Karnataka",
    "Kerala",
    "Maharashtra",
    "Rajasthan",
    "Tamil Nadu",
    "Telangana",
    "Uttar Pradesh",
    "West Bengal",
];
