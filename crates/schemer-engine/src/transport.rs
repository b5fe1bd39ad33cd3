//! HTTP transport for the color API.
//!
//! Requests go through a `curl` child process, spawned with tokio the same
//! way other external tools are invoked. The [`Transport`] trait is the seam
//! tests use to substitute canned responses.

use crate::fetcher::SchemeError;
use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Something that can perform a GET request and return the response body.
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the body as text.
    ///
    /// Non-OK responses and transport failures are reported as
    /// [`SchemeError::Network`] (or [`SchemeError::Spawn`] /
    /// [`SchemeError::Timeout`]).
    fn get(&self, url: &str) -> impl Future<Output = Result<String, SchemeError>> + Send;
}

/// Transport backed by the `curl` command-line tool.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl CurlTransport {
    /// Locate `curl` on PATH.
    pub fn discover() -> Result<Self, SchemeError> {
        let program = which::which("curl").map_err(|e| {
            SchemeError::Spawn(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("curl not found on PATH: {e}"),
            ))
        })?;
        Ok(Self::with_program(program))
    }

    /// Use a specific curl binary.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    /// Bound each request by `timeout`.
    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn command(&self, url: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        // --globoff keeps `{}` and `[]` in the color or mode from expanding
        // into extra requests
        cmd.args(["--silent", "--show-error", "--fail", "--location", "--globoff"])
            .arg("--header")
            .arg("Accept: application/json")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

impl Transport for CurlTransport {
    async fn get(&self, url: &str) -> Result<String, SchemeError> {
        debug!(%url, "requesting scheme");

        let child = self.command(url).spawn().map_err(SchemeError::Spawn)?;

        let output = match self.timeout {
            Some(limit) => timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| SchemeError::Timeout(url.to_string()))?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| SchemeError::network(url, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = if stderr.trim().is_empty() {
                format!("curl exited with code {}", output.status.code().unwrap_or(-1))
            } else {
                stderr.trim().to_string()
            };
            return Err(SchemeError::network(url, reason));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| SchemeError::network(url, format!("response is not UTF-8: {e}")))
    }
}
