//! Runscope API-test phase for Stagecraft pipelines
//!
//! The phase provisions a shared serverless function on first deploy and
//! declares a pipeline stage that invokes it with a Runscope trigger URL
//! and access token. The function is durable, account-wide infrastructure:
//! every pipeline using this phase type in the same account and region
//! reuses the same stack, and deleting one pipeline's phase leaves it in
//! place.

pub mod phase;
pub mod settings;

// Re-exports
pub use phase::RunscopePhase;
pub use settings::{DEFAULT_STACK_NAME, RunscopeSettings};
