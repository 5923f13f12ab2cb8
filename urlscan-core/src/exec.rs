use async_trait::async_trait;
use tokio::process::Command;

/// Error from a subprocess invocation.
///
/// Adapters convert these into inline "Hata: …" text rather than failing the
/// request, so a broken tool yields partial results instead of an error page.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to spawn shell: {0}")]
    Spawn(std::io::Error),
    #[error("command exited with {status}")]
    NonZero {
        status: std::process::ExitStatus,
        /// Whatever the tool printed before failing.
        output: String,
    },
}

/// Capability interface for running one shell command line and capturing its
/// text output. The production implementation spawns a real shell; tests
/// substitute a stub so no external tool is ever invoked.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn run(&self, command_line: &str) -> Result<String, ExecError>;
}

/// Runs command lines through `bash -c`, capturing stdout and stderr as a
/// single trimmed text blob (stdout first).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellExecutor;

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn run(&self, command_line: &str) -> Result<String, ExecError> {
        let output = Command::new("bash")
            .arg("-c")
            .arg(command_line)
            .output()
            .await
            .map_err(ExecError::Spawn)?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }
        let text = text.trim().to_string();

        if !output.status.success() {
            return Err(ExecError::NonZero {
                status: output.status,
                output: text,
            });
        }

        Ok(text)
    }
}
