//! Phase configuration and deploy context

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-supplied configuration for one phase instance
///
/// Owned by the orchestrator and read-only to phase deployers. Fields a
/// particular phase type does not interpret are kept verbatim in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseConfig {
    /// Display label and lookup key for the phase
    pub name: String,

    /// Orchestrator-owned fields this component does not interpret
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PhaseConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: BTreeMap::new(),
        }
    }
}

/// Target account identity for a deploy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Cloud account identifier
    pub account_id: String,

    /// Region the pipeline and its backing infrastructure live in
    pub region: String,
}

impl AccountConfig {
    pub fn new(account_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            region: region.into(),
        }
    }
}

/// Secrets collected for one phase, keyed by secret name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseSecrets {
    values: BTreeMap<String, String>,
}

impl PhaseSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for PhaseSecrets {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// One secret prompt, tagged with the phase that owns it
///
/// The tag lets a multi-phase pipeline disambiguate otherwise identical
/// prompts when collecting secrets up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretQuestion {
    pub phase_name: String,
    pub name: String,
    pub message: String,
}

/// Everything a deployer needs for one deploy invocation
///
/// Constructed by the orchestrator per deploy; never mutated by phases.
#[derive(Debug, Clone)]
pub struct PhaseContext {
    /// Name of the phase instance being deployed
    pub phase_name: String,

    /// Account and region the deploy targets
    pub account: AccountConfig,

    /// Secrets previously collected for this phase
    pub secrets: PhaseSecrets,
}

impl PhaseContext {
    pub fn new(phase_name: impl Into<String>, account: AccountConfig, secrets: PhaseSecrets) -> Self {
        Self {
            phase_name: phase_name.into(),
            account,
            secrets,
        }
    }
}
