//! Runscope phase settings

use std::path::PathBuf;

/// Default name for the shared backing-function stack
pub const DEFAULT_STACK_NAME: &str = "StagecraftRunscopeLambda";

/// Where the Runscope phase finds its assets and names its stack
///
/// The stack name keys the lookup-or-create sequence: every pipeline using
/// the same name in the same account and region shares one backing
/// function. Overriding it scopes the function to whatever granularity the
/// caller wants. Asset paths are resolved by the orchestrator and passed
/// in; the phase has no filesystem layout of its own.
#[derive(Debug, Clone)]
pub struct RunscopeSettings {
    /// Registry name of the backing-function stack
    pub stack_name: String,

    /// Directory holding the pre-built function code bundle
    pub code_dir: PathBuf,

    /// Path to the infrastructure template for the backing function
    pub template_path: PathBuf,
}

impl RunscopeSettings {
    pub fn new(code_dir: impl Into<PathBuf>, template_path: impl Into<PathBuf>) -> Self {
        Self {
            stack_name: DEFAULT_STACK_NAME.to_string(),
            code_dir: code_dir.into(),
            template_path: template_path.into(),
        }
    }

    pub fn with_stack_name(mut self, name: impl Into<String>) -> Self {
        self.stack_name = name.into();
        self
    }
}
