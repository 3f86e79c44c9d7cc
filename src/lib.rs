// ============================================================================
// JOB PORTAL WEB - Yew front-end for the job marketplace
// ============================================================================
// Layout:
// - models: wire types and domain values (roles, jobs, filters)
// - services: REST client behind backend traits
// - viewmodels: session bootstrap and job discovery logic
// - state / hooks: Yew state shared through context providers
// - components: routes, guards and pages
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(test)]
#[path = "../build_support/env.rs"]
mod build_env;

pub use components::App;
