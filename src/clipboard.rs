/*!
 * Clipboard support for DirPrompt
 *
 * Copies generated prompts to the system clipboard by piping them into
 * whatever clipboard command the platform provides.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the clipboard command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Copy text to the system clipboard.
///
/// Prefers the tmux buffer when a session is active, then falls back to
/// the platform's native clipboard command.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let (cmd, args) = detect_command()?;
    pipe_to_command(cmd, args, text)
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    env::var_os("PATH").map_or(false, |paths| {
        env::split_paths(&paths).any(|dir| dir.join(command).exists())
    })
}

/// Pick the first available clipboard command for this platform
fn detect_command() -> Result<(&'static str, &'static [&'static str])> {
    if env::var("TMUX").is_ok() && command_exists("tmux") {
        return Ok(("tmux", &["load-buffer", "-w", "-"]));
    }

    let candidates: &'static [(&'static str, &'static [&'static str])] =
        if cfg!(target_os = "macos") {
            &[("pbcopy", &[])]
        } else if cfg!(target_os = "windows") {
            &[("clip.exe", &[])]
        } else {
            &[
                ("wl-copy", &[]),
                ("xsel", &["-b", "-i"]),
                ("xclip", &["-selection", "clipboard", "-in"]),
                // WSL
                ("clip.exe", &[]),
            ]
        };

    for &(cmd, args) in candidates {
        if command_exists(cmd) {
            return Ok((cmd, args));
        }
    }

    Err(ClipboardError::NoClipboardFound)
}

/// Spawn the command and feed it the text on stdin
fn pipe_to_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to spawn {}", cmd)))?;

    let stdin = child.stdin.as_mut().ok_or_else(|| {
        ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
    })?;
    stdin
        .write_all(text.as_bytes())
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to write to {}", cmd)))?;

    let status = child
        .wait()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to wait for {}", cmd)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}
