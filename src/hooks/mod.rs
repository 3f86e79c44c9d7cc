pub mod use_toast;
pub mod session_context;
pub mod use_jobs;

pub use use_toast::{use_toast, ToastContext, ToastProvider, Toaster};
pub use session_context::{
    report, use_role_session, use_sessions, LoginRequest, SessionContextProvider, SessionHandle,
};
pub use use_jobs::{effective_filter, use_jobs, UseJobsHandle};
