use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub client_id: Option<String>,
    pub environment: String,
    pub enable_logging: bool,
    pub jobs: JobsConfig,
    pub ui: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            client_id: None,
            environment: "development".to_string(),
            enable_logging: true,
            jobs: JobsConfig::default(),
            ui: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    /// Results per page on the public listing
    pub page_size: u32,
    /// Page buttons shown before the pager collapses into a sliding window
    pub pagination_window: u32,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            page_size: 9,
            pagination_window: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub toast_duration_ms: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: option_env!("API_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            client_id: option_env!("CLIENT_ID")
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.to_string()),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            jobs: JobsConfig {
                page_size: option_env!("JOBS_PAGE_SIZE")
                    .unwrap_or("9").parse().unwrap_or(defaults.jobs.page_size),
                pagination_window: defaults.jobs.pagination_window,
            },
            ui: UIConfig {
                toast_duration_ms: option_env!("TOAST_DURATION_MS")
                    .unwrap_or("3000").parse().unwrap_or(defaults.ui.toast_duration_ms),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Global configuration, read once
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
