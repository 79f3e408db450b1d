use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExternalToolError {
    #[error("failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("input file not found: {0}")]
    InputMissing(PathBuf),
}

/// Captured streams of a finished external tool.
#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run an external tool to completion and capture its streams.
///
/// Both the sox conversion and the DeepSpeech transcription go through this
/// one contract: argument list in, captured stdout/stderr out, non-zero exit
/// reported as a typed error rather than garbage output.
pub fn run_tool(tool: &str, args: &[&str]) -> Result<ToolOutput, ExternalToolError> {
    let output = Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ExternalToolError::Spawn {
            tool: tool.to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(ExternalToolError::Failed {
            tool: tool.to_string(),
            status: output.status,
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(ToolOutput { stdout, stderr })
}
