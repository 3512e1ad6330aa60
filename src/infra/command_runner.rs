//! Process execution with timeout and guaranteed kill.

use std::process::Stdio;

use tokio::io::AsyncReadExt;

use crate::application::ports::{CapturedOutput, CommandRunner, RunOptions};
use crate::domain::RunError;

/// Production [`CommandRunner`] backed by tokio.
///
/// `tokio::time::timeout` around `.output().await` does NOT kill the
/// child process when the timeout fires — the future is dropped but the
/// OS process keeps running. This implementation uses `tokio::select!`
/// with explicit `child.kill()` to guarantee the checker is terminated,
/// and `kill_on_drop(true)` as a safety net if the request future is
/// dropped mid-run (client disconnect).
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        opts: &RunOptions,
    ) -> Result<CapturedOutput, RunError> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .envs(opts.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunError::Launch {
                program: program.to_string(),
                source,
            })?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        // Read stdout/stderr CONCURRENTLY with wait() to avoid pipe
        // deadlock: a checker writing more than the OS pipe buffer (64KB
        // on Linux) blocks on write, and a bare wait() would then never
        // resolve.
        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stdout_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stderr_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                );
                // Reap the child; the exit status itself is not inspected.
                status.map_err(|source| RunError::Wait {
                    program: program.to_string(),
                    source,
                })?;

                // Merge the two streams as `2>&1` would: one text block,
                // stdout first.
                let mut text = String::from_utf8_lossy(&stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&stderr));
                Ok(CapturedOutput { text })
            } => result,
            () = tokio::time::sleep(opts.timeout) => {
                let _ = child.kill().await;
                Err(RunError::Timeout {
                    program: program.to_string(),
                    timeout: opts.timeout,
                })
            }
        }
    }
}
