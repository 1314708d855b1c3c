//! Console implementation of the interactive prompt port
//!
//! The only interactive I/O in the workspace lives here; phase deployers
//! describe their prompts as data and never touch the terminal.

use crate::context::PhaseSecrets;
use crate::error::Result;
use crate::ports::{Prompt, PromptRequest};
use async_trait::async_trait;
use std::io::Write;

/// Collects prompt answers from the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompt;

#[async_trait]
impl Prompt for ConsolePrompt {
    async fn ask(&self, prompts: &[PromptRequest]) -> Result<PhaseSecrets> {
        let mut secrets = PhaseSecrets::new();
        for prompt in prompts {
            print!("{}: ", prompt.message);
            std::io::stdout().flush()?;

            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;
            secrets.set(&prompt.name, input.trim_end_matches(['\r', '\n']));
        }
        Ok(secrets)
    }
}
