pub mod error;
pub mod backend;
pub mod api_client;

pub use error::ClientError;
pub use backend::{JobsBackend, SessionBackend};
pub use api_client::ApiClient;
