//! Stagecraft phase plugin abstraction
//!
//! This crate defines the contract between the Stagecraft pipeline
//! orchestrator and its phase plugins: the data model for phase
//! configuration and stage declarations, the [`PhaseDeployer`] trait every
//! phase type implements, and the collaborator ports a phase consumes to
//! provision backing infrastructure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              pipeline orchestrator               │
//! └─────────────────┬───────────────────────────────┘
//!                   │ trait PhaseDeployer
//! ┌─────────────────▼───────────────────────────────┐
//! │               stagecraft-phase                   │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │            Phase Abstraction              │   │
//! │  │  trait PhaseDeployer { ... }              │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────────────┐     │
//! │  │ Stage Model  │  │  Collaborator Ports  │     │
//! │  └──────────────┘  └──────────────────────┘     │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │   runscope    │   (and further phase crates)
//! │    phase      │
//! └───────────────┘
//! ```
//!
//! The cloud-side implementations of the ports (stack registry, role
//! provisioner, artifact uploader) live with the orchestrator; this crate
//! only ships the two boundary implementations that touch the local
//! machine, [`LocalFiles`] and [`ConsolePrompt`].

pub mod console;
pub mod context;
pub mod deployer;
pub mod error;
pub mod files;
pub mod ports;
pub mod stage;

// Re-exports
pub use console::ConsolePrompt;
pub use context::{AccountConfig, PhaseConfig, PhaseContext, PhaseSecrets, SecretQuestion};
pub use deployer::PhaseDeployer;
pub use error::{PhaseError, Result};
pub use files::LocalFiles;
pub use ports::{
    ArtifactUploader, FileLoader, ObjectLocation, Prompt, PromptRequest, Role, RoleProvisioner,
    Stack, StackParameter, StackRegistry,
};
pub use stage::{ActionDeclaration, ActionTypeId, StageDeclaration};
