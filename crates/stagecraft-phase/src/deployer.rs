//! Phase deployer trait definition

use crate::context::{PhaseConfig, PhaseContext, PhaseSecrets, SecretQuestion};
use crate::error::Result;
use crate::stage::StageDeclaration;
use async_trait::async_trait;

/// Phase plugin abstraction
///
/// Every phase type pluggable into a Stagecraft pipeline implements this
/// trait so the orchestrator can validate configuration, collect secrets
/// and provision backing infrastructure through one interface.
#[async_trait]
pub trait PhaseDeployer: Send + Sync {
    /// Returns the phase type tag (e.g. "runscope")
    fn name(&self) -> &str;

    /// Validate the phase configuration, returning one message per problem
    ///
    /// An empty list means the configuration is deployable.
    fn check(&self, config: &PhaseConfig) -> Vec<String>;

    /// The secret prompts this phase needs, tagged with the owning phase
    fn secret_questions(&self, config: &PhaseConfig) -> Vec<SecretQuestion>;

    /// Collect this phase's secrets from an interactive operator
    ///
    /// Suspends until the operator has answered every prompt; cancellation
    /// is operator-driven (an interrupt ends the whole process).
    async fn secrets_for_phase(&self, config: &PhaseConfig) -> Result<PhaseSecrets>;

    /// Provision backing infrastructure if needed and declare the stage
    async fn deploy_phase(&self, context: &PhaseContext) -> Result<StageDeclaration>;

    /// Tear down infrastructure owned by this phase; true on success
    async fn delete_phase(&self, context: &PhaseContext) -> Result<bool>;
}
