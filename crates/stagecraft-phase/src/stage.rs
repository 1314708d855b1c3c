//! Pipeline stage declarations produced by phase deployers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifies the action implementation the pipeline service should run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionTypeId {
    pub category: String,
    pub owner: String,
    pub version: String,
    pub provider: String,
}

impl ActionTypeId {
    /// Action type for invoking a serverless function from the pipeline
    pub fn lambda_invoke() -> Self {
        Self {
            category: "Invoke".to_string(),
            owner: "AWS".to_string(),
            version: "1".to_string(),
            provider: "Lambda".to_string(),
        }
    }
}

/// One action within a pipeline stage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDeclaration {
    /// Named artifacts consumed by the action, in pipeline order
    pub input_artifacts: Vec<String>,

    /// Action display name
    pub name: String,

    /// Which action implementation to run
    pub action_type_id: ActionTypeId,

    /// Implementation-specific configuration, flat string map
    pub configuration: BTreeMap<String, String>,

    /// Position within the stage; actions with equal run order run together
    pub run_order: u32,
}

/// Declarative description of one pipeline stage
///
/// Constructed fresh on every deploy and immutable once returned; the
/// pipeline execution engine consumes it as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDeclaration {
    pub name: String,
    pub actions: Vec<ActionDeclaration>,
}
