pub mod session_viewmodel;
pub mod jobs_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use jobs_viewmodel::{HomeJobs, JobsViewModel};
