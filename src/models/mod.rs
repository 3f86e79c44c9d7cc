pub mod session;
pub mod user;
pub mod company;
pub mod admin;
pub mod job;
pub mod filter;
pub mod api;

pub use session::{AuthStatus, Identity, Role, RoleSession};
pub use user::{profile_completion, Application, ApplicationStatus, UserProfile};
pub use company::CompanyProfile;
pub use admin::AdminProfile;
pub use job::{JobDetail, JobSummary, JobType, JobsPage, Pagination};
pub use filter::{to_query_string, SalaryRange, SearchFilter};
pub use api::Credentials;
