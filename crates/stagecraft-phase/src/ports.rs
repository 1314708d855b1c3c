//! Collaborator ports consumed by phase deployers
//!
//! Production implementations of the cloud-facing ports live with the
//! orchestrator; phases depend only on these traits, so they stay
//! testable with in-memory fakes.

use crate::context::PhaseSecrets;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A provisioned resource stack and its named outputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stack {
    /// Registry name the stack was created under
    pub name: String,

    /// Output values exposed by the stack
    pub outputs: BTreeMap<String, String>,
}

impl Stack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outputs: BTreeMap::new(),
        }
    }

    pub fn with_output(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.outputs.insert(key.into(), value.into());
        self
    }

    pub fn output(&self, key: &str) -> Option<&str> {
        self.outputs.get(key).map(String::as_str)
    }
}

/// One key/value stack parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackParameter {
    pub key: String,
    pub value: String,
}

impl StackParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Ordered parameter list from a flat map, sorted by key
    pub fn from_map(map: &BTreeMap<String, String>) -> Vec<StackParameter> {
        map.iter()
            .map(|(key, value)| StackParameter::new(key, value))
            .collect()
    }
}

/// Location of an uploaded artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

/// Service role granting the backing function pipeline-invocation rights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub arn: String,
}

impl Role {
    pub fn new(arn: impl Into<String>) -> Self {
        Self { arn: arn.into() }
    }
}

/// One prompt presented to an interactive operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// Prompt kind (e.g. "input")
    #[serde(rename = "type")]
    pub kind: String,

    /// Answer key the response is stored under
    pub name: String,

    /// Text shown to the operator
    pub message: String,
}

impl PromptRequest {
    /// Free-text input prompt
    pub fn input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: "input".to_string(),
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Registry of provisioned stacks, keyed by name
///
/// Lookup-or-create through this port is the idempotency mechanism for
/// shared backing infrastructure. No locking happens around the
/// lookup-then-create sequence; concurrent deploys racing on the same
/// name rely on `create_stack` rejecting duplicates.
#[async_trait]
pub trait StackRegistry: Send + Sync {
    /// Look up a stack by name; an absent stack is not an error
    async fn get_stack(&self, name: &str) -> Result<Option<Stack>>;

    /// Create a stack from a template and wait for the resulting handle
    async fn create_stack(
        &self,
        name: &str,
        template: &str,
        parameters: &[StackParameter],
    ) -> Result<Stack>;
}

/// Provisions the role that lets the pipeline invoke backing compute
#[async_trait]
pub trait RoleProvisioner: Send + Sync {
    /// Acquire or create the invocation role for an account and region
    async fn create_invocation_role(
        &self,
        account_id: &str,
        region: &str,
    ) -> Result<Option<Role>>;
}

/// Uploads local code bundles to an artifact bucket
#[async_trait]
pub trait ArtifactUploader: Send + Sync {
    /// Upload a directory as a single artifact under the given key
    async fn upload_directory(
        &self,
        local_path: &Path,
        key: &str,
        bucket: &str,
    ) -> Result<ObjectLocation>;
}

/// Reads local asset files
#[async_trait]
pub trait FileLoader: Send + Sync {
    /// Read a file to a string; an absent file is not an error
    async fn load_file(&self, path: &Path) -> Result<Option<String>>;
}

/// Presents prompts to an interactive operator
#[async_trait]
pub trait Prompt: Send + Sync {
    /// Present the prompts in order and collect one answer per prompt
    async fn ask(&self, prompts: &[PromptRequest]) -> Result<PhaseSecrets>;
}
