//! Subprocess invocation of the external formatter.
//!
//! One child process per format request; arguments are passed as a literal
//! vector with no shell in between. The full source is written to the
//! child's stdin while stdout and stderr are drained concurrently, so a
//! formatter that streams output (or spills warnings) never blocks on a
//! full pipe with the invoker still writing. Output and diagnostics are
//! accumulated as raw bytes and decoded once the process exits.
//!
//! There is no timeout and no retry: the call waits for the child to exit
//! and surfaces a single outcome.

use std::io::ErrorKind;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{FormatError, FormatResult};

/// Run the formatter and return its stdout as the formatted text.
///
/// # Errors
/// - [`FormatError::Launch`] if the binary cannot be spawned at all.
/// - [`FormatError::FormatterFailed`] if it exits nonzero; carries the exit
///   code and the accumulated stderr text.
/// - [`FormatError::Io`] if writing the source to the child's stdin fails
///   for any reason other than the child closing its end.
pub async fn run_formatter(program: &str, args: &[String], source: &str) -> FormatResult<String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| FormatError::launch(program, err))?;

    // stdin is piped above, so the handle is always present.
    let stdin = child.stdin.take();
    let feed_stdin = async move {
        let Some(mut stdin) = stdin else {
            return Ok(());
        };
        match stdin.write_all(source.as_bytes()).await {
            // The child closed its end of the pipe; its exit status and
            // stderr decide the outcome, not the truncated write.
            Err(err) if err.kind() != ErrorKind::BrokenPipe => Err(err),
            _ => Ok(()),
        }
        // Dropping the handle closes the pipe, signaling end of input.
    };

    let (output, write_result) = tokio::join!(child.wait_with_output(), feed_stdin);
    let output = output?;

    if !output.status.success() {
        return Err(FormatError::failed(
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }

    write_result?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
