// ============================================================================
// STATE MODULE - shared state containers
// ============================================================================

pub mod request_generation;
pub mod toast_state;

pub use request_generation::{Generation, RequestGeneration};
pub use toast_state::{Toast, ToastAction, ToastKind, ToastQueue};
