pub mod app;
pub mod routes;
pub mod route_guard;
pub mod header;
pub mod login_form;
pub mod search_panel;
pub mod job_list;
pub mod pager;
pub mod home;
pub mod job_detail;
pub mod dashboards;
pub mod toast_host;

pub use app::App;
pub use routes::{switch, LoginPrompt, Route};
pub use route_guard::{guard, login_route, GuardDecision, RoleGuard};
pub use header::Header;
pub use login_form::{after_login_route, LoginForm, LoginPage};
pub use search_panel::SearchPanel;
pub use job_list::{JobCard, JobList};
pub use pager::Pager;
pub use home::HomePage;
pub use job_detail::JobDetailPage;
pub use dashboards::{AdminDashboard, RecruiterDashboard, UserDashboard};
pub use toast_host::ToastHost;
