use thiserror::Error;

/// Everything a request or a form submission can fail with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// No session, or the server rejected it (HTTP 401)
    #[error("not authenticated")]
    Unauthenticated,
    /// Client-side field check; the request was never sent
    #[error("{0}")]
    Validation(String),
    /// Offline, DNS, CORS...
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
    /// HTTP 200 with `{success:false, message}`
    #[error("{0}")]
    Server(String),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthenticated)
    }

    /// Text for a toast. Server and validation messages are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Unauthenticated => "Your session has expired, please log in again".to_string(),
            ClientError::Validation(msg) | ClientError::Server(msg) => msg.clone(),
            ClientError::Network(_) => "Network error, please check your connection".to_string(),
            ClientError::Http { status, .. } if *status >= 500 => "Server error, please try again later".to_string(),
            ClientError::Http { message, .. } if !message.trim().is_empty() => message.clone(),
            ClientError::Http { status, .. } => format!("Request failed ({})", status),
            ClientError::Parse(_) => "Unexpected response from server".to_string(),
        }
    }

    /// Error for a `success:false` envelope
    pub fn server(message: Option<String>, fallback: &str) -> Self {
        ClientError::Server(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        )
    }
}
