use async_trait::async_trait;
use stagecraft_phase::{
    ArtifactUploader, FileLoader, ObjectLocation, PhaseSecrets, Prompt, PromptRequest, Result,
    Role, RoleProvisioner, Stack, StackParameter, StackRegistry,
};
use stagecraft_phase_runscope::{RunscopePhase, RunscopeSettings};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Shared log of collaborator calls, in invocation order
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

pub struct FakeRegistry {
    log: CallLog,
    existing: Option<Stack>,
    pub last_create: Mutex<Option<(String, String, Vec<StackParameter>)>>,
}

impl FakeRegistry {
    pub fn new(log: CallLog, existing: Option<Stack>) -> Self {
        Self {
            log,
            existing,
            last_create: Mutex::new(None),
        }
    }
}

#[async_trait]
impl StackRegistry for FakeRegistry {
    async fn get_stack(&self, name: &str) -> Result<Option<Stack>> {
        self.log.record(format!("get_stack:{name}"));
        Ok(self.existing.clone())
    }

    async fn create_stack(
        &self,
        name: &str,
        template: &str,
        parameters: &[StackParameter],
    ) -> Result<Stack> {
        self.log.record(format!("create_stack:{name}"));
        *self.last_create.lock().unwrap() =
            Some((name.to_string(), template.to_string(), parameters.to_vec()));
        Ok(Stack::new(name).with_output("FunctionName", name))
    }
}

pub struct FakeRoles {
    log: CallLog,
    role: Option<Role>,
}

impl FakeRoles {
    pub fn new(log: CallLog, role: Option<Role>) -> Self {
        Self { log, role }
    }
}

#[async_trait]
impl RoleProvisioner for FakeRoles {
    async fn create_invocation_role(
        &self,
        account_id: &str,
        region: &str,
    ) -> Result<Option<Role>> {
        self.log.record(format!("create_role:{account_id}:{region}"));
        Ok(self.role.clone())
    }
}

pub struct FakeUploader {
    log: CallLog,
}

impl FakeUploader {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

#[async_trait]
impl ArtifactUploader for FakeUploader {
    async fn upload_directory(
        &self,
        local_path: &Path,
        key: &str,
        bucket: &str,
    ) -> Result<ObjectLocation> {
        self.log.record(format!(
            "upload:{}:{key}:{bucket}",
            local_path.display()
        ));
        Ok(ObjectLocation {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

pub struct FakeFiles {
    log: CallLog,
    content: Option<String>,
}

impl FakeFiles {
    pub fn new(log: CallLog, content: Option<&str>) -> Self {
        Self {
            log,
            content: content.map(String::from),
        }
    }
}

#[async_trait]
impl FileLoader for FakeFiles {
    async fn load_file(&self, path: &Path) -> Result<Option<String>> {
        self.log.record(format!("load_file:{}", path.display()));
        Ok(self.content.clone())
    }
}

pub struct FakePrompt {
    log: CallLog,
    answers: PhaseSecrets,
}

impl FakePrompt {
    pub fn new(log: CallLog, answers: PhaseSecrets) -> Self {
        Self { log, answers }
    }
}

#[async_trait]
impl Prompt for FakePrompt {
    async fn ask(&self, prompts: &[PromptRequest]) -> Result<PhaseSecrets> {
        for prompt in prompts {
            self.log.record(format!("ask:{}:{}", prompt.kind, prompt.name));
        }
        Ok(self.answers.clone())
    }
}

/// Collaborator fakes wired to one call log, plus the phase under test
pub struct Harness {
    pub log: CallLog,
    pub registry: Arc<FakeRegistry>,
    pub phase: RunscopePhase,
}

pub struct HarnessConfig {
    pub existing_stack: Option<Stack>,
    pub role: Option<Role>,
    pub template: Option<&'static str>,
    pub answers: PhaseSecrets,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            existing_stack: None,
            role: Some(Role::new("arn:aws:iam::111111111111:role/pipeline-invoke")),
            template: Some("Resources: {}"),
            answers: PhaseSecrets::new(),
        }
    }
}

pub fn harness(config: HarnessConfig) -> Harness {
    let log = CallLog::new();
    let registry = Arc::new(FakeRegistry::new(log.clone(), config.existing_stack));

    let phase = RunscopePhase::new(
        RunscopeSettings::new("assets/runscope-code", "assets/runscope-lambda.yml"),
        registry.clone(),
        Arc::new(FakeRoles::new(log.clone(), config.role)),
        Arc::new(FakeUploader::new(log.clone())),
        Arc::new(FakeFiles::new(log.clone(), config.template)),
        Arc::new(FakePrompt::new(log.clone(), config.answers)),
    );

    Harness {
        log,
        registry,
        phase,
    }
}

pub fn secrets() -> PhaseSecrets {
    let mut secrets = PhaseSecrets::new();
    secrets.set(
        "runscopeTriggerUrl",
        "https://api.runscope.com/radar/abc/trigger",
    );
    secrets.set("runscopeAccessToken", "token-123");
    secrets
}
