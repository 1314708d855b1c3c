//! Runscope phase implementation

use crate::settings::RunscopeSettings;
use async_trait::async_trait;
use stagecraft_phase::{
    ActionDeclaration, ActionTypeId, ArtifactUploader, FileLoader, PhaseConfig, PhaseContext,
    PhaseDeployer, PhaseError, PhaseSecrets, Prompt, PromptRequest, Result, RoleProvisioner,
    SecretQuestion, Stack, StackParameter, StackRegistry, StageDeclaration,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Secret keys collected from the operator and forwarded to the function
const SECRET_TRIGGER_URL: &str = "runscopeTriggerUrl";
const SECRET_ACCESS_TOKEN: &str = "runscopeAccessToken";

/// Logical key the code bundle is uploaded under
const ARTIFACT_KEY: &str = "stagecraft/runscope";

/// Fixed sizing and runtime of the shared backing function
const HANDLER: &str = "runscope.run_tests";
const MEMORY_SIZE: &str = "128";
const TIMEOUT: &str = "300";
const RUNTIME: &str = "python3.6";

/// Stack output exposing the invocable function name
const FUNCTION_NAME_OUTPUT: &str = "FunctionName";

/// Phase that triggers a Runscope test run from the pipeline
///
/// Holds its collaborators behind the port traits, so the same phase runs
/// against the production cloud adapters or in-memory fakes.
pub struct RunscopePhase {
    settings: RunscopeSettings,
    stacks: Arc<dyn StackRegistry>,
    roles: Arc<dyn RoleProvisioner>,
    artifacts: Arc<dyn ArtifactUploader>,
    files: Arc<dyn FileLoader>,
    prompt: Arc<dyn Prompt>,
}

impl RunscopePhase {
    pub fn new(
        settings: RunscopeSettings,
        stacks: Arc<dyn StackRegistry>,
        roles: Arc<dyn RoleProvisioner>,
        artifacts: Arc<dyn ArtifactUploader>,
        files: Arc<dyn FileLoader>,
        prompt: Arc<dyn Prompt>,
    ) -> Self {
        Self {
            settings,
            stacks,
            roles,
            artifacts,
            files,
            prompt,
        }
    }

    fn questions(config: &PhaseConfig) -> Vec<PromptRequest> {
        vec![
            PromptRequest::input(
                SECRET_TRIGGER_URL,
                format!(
                    "'{}' phase - Please enter your Runscope Trigger URL",
                    config.name
                ),
            ),
            PromptRequest::input(
                SECRET_ACCESS_TOKEN,
                format!(
                    "'{}' phase - Please enter your Runscope Access Token",
                    config.name
                ),
            ),
        ]
    }

    /// Upload the code bundle and create the backing-function stack
    ///
    /// Role acquisition and template load fail the deploy; artifacts
    /// already uploaded by a failed attempt are left behind, only the
    /// stack lookup gates reuse.
    async fn provision_stack(&self, context: &PhaseContext) -> Result<Stack> {
        tracing::info!("Creating Lambda function for Runscope tests");
        let account = &context.account;

        let role = self
            .roles
            .create_invocation_role(&account.account_id, &account.region)
            .await?
            .ok_or_else(|| {
                PhaseError::RoleUnavailable(format!(
                    "no invocation role for account {} in {}",
                    account.account_id, account.region
                ))
            })?;

        let bucket = format!(
            "codepipeline-{}-{}",
            account.region, account.account_id
        );
        let uploaded = self
            .artifacts
            .upload_directory(&self.settings.code_dir, ARTIFACT_KEY, &bucket)
            .await?;

        let template = self
            .files
            .load_file(&self.settings.template_path)
            .await?
            .ok_or_else(|| PhaseError::TemplateMissing(self.settings.template_path.clone()))?;

        let mut parameters = BTreeMap::new();
        parameters.insert("S3Bucket".to_string(), uploaded.bucket);
        parameters.insert("S3Key".to_string(), uploaded.key);
        parameters.insert(
            "Description".to_string(),
            "Lambda function backing the Runscope pipeline phase".to_string(),
        );
        parameters.insert(
            "FunctionName".to_string(),
            self.settings.stack_name.clone(),
        );
        parameters.insert("Handler".to_string(), HANDLER.to_string());
        parameters.insert("MemorySize".to_string(), MEMORY_SIZE.to_string());
        parameters.insert("RoleArn".to_string(), role.arn);
        parameters.insert("Runtime".to_string(), RUNTIME.to_string());
        parameters.insert("Timeout".to_string(), TIMEOUT.to_string());

        self.stacks
            .create_stack(
                &self.settings.stack_name,
                &template,
                &StackParameter::from_map(&parameters),
            )
            .await
    }

    /// Build the one-action stage invoking the backing function
    fn stage_declaration(context: &PhaseContext, function_name: &str) -> Result<StageDeclaration> {
        let mut user_parameters = BTreeMap::new();
        user_parameters.insert(
            SECRET_TRIGGER_URL,
            required_secret(&context.secrets, SECRET_TRIGGER_URL)?,
        );
        user_parameters.insert(
            SECRET_ACCESS_TOKEN,
            required_secret(&context.secrets, SECRET_ACCESS_TOKEN)?,
        );

        let mut configuration = BTreeMap::new();
        configuration.insert("FunctionName".to_string(), function_name.to_string());
        configuration.insert(
            "UserParameters".to_string(),
            serde_json::to_string(&user_parameters)?,
        );

        Ok(StageDeclaration {
            name: context.phase_name.clone(),
            actions: vec![ActionDeclaration {
                input_artifacts: Vec::new(),
                name: context.phase_name.clone(),
                action_type_id: ActionTypeId::lambda_invoke(),
                configuration,
                run_order: 1,
            }],
        })
    }
}

fn required_secret<'a>(secrets: &'a PhaseSecrets, name: &str) -> Result<&'a str> {
    secrets
        .get(name)
        .ok_or_else(|| PhaseError::MissingSecret(name.to_string()))
}

#[async_trait]
impl PhaseDeployer for RunscopePhase {
    fn name(&self) -> &str {
        "runscope"
    }

    fn check(&self, _config: &PhaseConfig) -> Vec<String> {
        Vec::new() // no required parameters beyond the universal ones
    }

    fn secret_questions(&self, config: &PhaseConfig) -> Vec<SecretQuestion> {
        Self::questions(config)
            .into_iter()
            .map(|question| SecretQuestion {
                phase_name: config.name.clone(),
                name: question.name,
                message: question.message,
            })
            .collect()
    }

    async fn secrets_for_phase(&self, config: &PhaseConfig) -> Result<PhaseSecrets> {
        self.prompt.ask(&Self::questions(config)).await
    }

    async fn deploy_phase(&self, context: &PhaseContext) -> Result<StageDeclaration> {
        tracing::info!("Creating runscope phase '{}'", context.phase_name);

        let stack = match self.stacks.get_stack(&self.settings.stack_name).await? {
            Some(stack) => stack,
            None => self.provision_stack(context).await?,
        };

        let function_name = stack
            .output(FUNCTION_NAME_OUTPUT)
            .ok_or_else(|| PhaseError::MissingOutput {
                key: FUNCTION_NAME_OUTPUT.to_string(),
                stack: stack.name.clone(),
            })?;

        Self::stage_declaration(context, function_name)
    }

    async fn delete_phase(&self, context: &PhaseContext) -> Result<bool> {
        // The backing function is shared across pipelines; removing one
        // pipeline's phase must not tear it down.
        tracing::info!(
            "Nothing to delete for runscope phase '{}'",
            context.phase_name
        );
        Ok(true)
    }
}
