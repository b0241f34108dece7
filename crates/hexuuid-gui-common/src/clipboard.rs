//! Clipboard export (platform-specific)

#[cfg(target_os = "macos")]
use std::io::Write;

/// Copy text to the system clipboard.
///
/// Currently only supports macOS via pbcopy.
#[cfg(target_os = "macos")]
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    use std::process::{Command, Stdio};

    let mut child = Command::new("pbcopy")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| format!("Failed to spawn pbcopy: {}", e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| format!("Failed to write to pbcopy: {}", e))?;
    }

    child.wait().map_err(|e| format!("pbcopy failed: {}", e))?;

    Ok(())
}

/// Copy text to the system clipboard (non-macOS platforms)
#[cfg(not(target_os = "macos"))]
pub fn copy_to_clipboard(_text: &str) -> Result<(), String> {
    Err("Clipboard export not implemented for this platform".to_string())
}
