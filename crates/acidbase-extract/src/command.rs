//! Extractor backed by an external program.
//!
//! The document bytes go to the program's stdin and the reply is read from
//! its stdout. The prompt, MIME type and filename are passed as
//! environment variables. A non-zero exit is an `Invocation` error carrying
//! stderr, so a wrapper that prints `503` or `overloaded` gets retried.

use std::process::Stdio;

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::Extractor;
use crate::document::SourceDocument;
use crate::error::ExtractError;
use crate::prompt::EXTRACTION_PROMPT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandExtractor {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Environment variable that must hold the service credential before
    /// the program is started.
    #[serde(default)]
    pub credential_var: Option<String>,
}

impl CommandExtractor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            credential_var: None,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn credential_var(mut self, var: impl Into<String>) -> Self {
        self.credential_var = Some(var.into());
        self
    }

    fn check_credential(&self) -> Result<(), ExtractError> {
        let Some(var) = &self.credential_var else {
            return Ok(());
        };
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(()),
            _ => Err(ExtractError::MissingCredential(var.clone())),
        }
    }
}

impl Extractor for CommandExtractor {
    fn name(&self) -> &str {
        &self.program
    }

    async fn extract(&self, document: &SourceDocument) -> Result<String, ExtractError> {
        self.check_credential()?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env("ACIDBASE_PROMPT", EXTRACTION_PROMPT)
            .env("ACIDBASE_MIME_TYPE", document.mime_type)
            .env("ACIDBASE_FILENAME", &document.filename)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ExtractError::Invocation(format!("failed to start {}: {e}", self.program))
            })?;

        // Feed stdin while stdout and stderr drain, so neither side can fill
        // a pipe and stall the other.
        let stdin = child.stdin.take();
        let write = async move {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };
            match stdin.write_all(&document.bytes).await {
                // A program that never reads stdin closes the pipe early.
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                result => result,
            }
        };
        let (written, output) = tokio::join!(write, child.wait_with_output());
        let output = output?;
        written?;
        debug!(program = %self.program, status = %output.status, "extractor exited");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                stderr
            };
            return Err(ExtractError::Invocation(message));
        }

        String::from_utf8(output.stdout).map_err(|e| ExtractError::ResponseParse(e.to_string()))
    }
}
