// Shared utilities

pub mod constants;
pub mod pagination;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use pagination::{page_window, PageItem};
pub use storage::{remember_redirect, take_redirect, HintStore, LocalHints, MemoryHints};
pub use validation::{validate_credentials, validate_email, validate_password};
