// src/infrastructure/clipboard.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::clipboard::ClipboardService;
use tracing::{debug, instrument};

#[cfg(not(target_os = "linux"))]
use arboard::Clipboard;

#[cfg(target_os = "linux")]
type Tool = (&'static str, &'static [&'static str]);
#[cfg(target_os = "linux")]
const WL_COPY: Tool = ("wl-copy", &[]);
#[cfg(target_os = "linux")]
const XCLIP: Tool = ("xclip", &["-selection", "clipboard"]);
#[cfg(target_os = "linux")]
const XSEL: Tool = ("xsel", &["--clipboard", "--input"]);

/// System clipboard.
///
/// On Linux the selection is owned by a process and disappears when it exits, so the copy
/// is handed to `wl-copy` (Wayland) or `xclip`/`xsel` (X11), which keep running in the
/// background. Other platforms use `arboard` directly.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    #[cfg(target_os = "linux")]
    fn candidates() -> Vec<Tool> {
        if std::env::var("WAYLAND_DISPLAY").is_ok() {
            debug!("Wayland detected");
            vec![WL_COPY]
        } else {
            debug!("X11 detected");
            vec![XCLIP, XSEL]
        }
    }

    #[cfg(target_os = "linux")]
    fn pipe_to(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| std::io::Error::other(format!("No stdin pipe for {}", program)))?;
        stdin.write_all(text.as_bytes())?;
        drop(stdin);

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(std::io::Error::other(format!(
                "{} exited with status: {}",
                program, status
            )))
        }
    }

    #[cfg(target_os = "linux")]
    fn copy_with_tools(&self, text: &str) -> DomainResult<()> {
        let candidates = Self::candidates();
        for (program, args) in &candidates {
            match Self::pipe_to(program, args, text) {
                Ok(()) => {
                    debug!("Copied {} bytes with {}", text.len(), program);
                    return Ok(());
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("{} not found", program);
                }
                Err(e) => {
                    return Err(DomainError::Other(format!("{} failed: {}", program, e)));
                }
            }
        }
        let names: Vec<&str> = candidates.iter().map(|(p, _)| *p).collect();
        Err(DomainError::Other(format!(
            "No clipboard tool found, install one of: {}",
            names.join(", ")
        )))
    }

    #[cfg(not(target_os = "linux"))]
    fn copy_with_arboard(&self, text: &str) -> DomainResult<()> {
        let mut clipboard = Clipboard::new()
            .map_err(|e| DomainError::Other(format!("Failed to open clipboard: {}", e)))?;
        clipboard
            .set_text(text)
            .map_err(|e| DomainError::Other(format!("Failed to set clipboard text: {}", e)))?;
        debug!("Copied {} bytes with arboard", text.len());
        Ok(())
    }
}

impl ClipboardService for SystemClipboard {
    #[instrument(level = "debug", skip(self))]
    fn copy_to_clipboard(&self, text: &str) -> DomainResult<()> {
        let text = text.trim_end_matches('\n');

        #[cfg(target_os = "linux")]
        {
            self.copy_with_tools(text)
        }

        #[cfg(not(target_os = "linux"))]
        {
            self.copy_with_arboard(text)
        }
    }
}

/// Clipboard that only remembers what was copied
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    copied: std::sync::Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ClipboardService for RecordingClipboard {
    fn copy_to_clipboard(&self, text: &str) -> DomainResult<()> {
        self.copied
            .lock()
            .map_err(|_| DomainError::Other("Clipboard lock poisoned".to_string()))?
            .push(text.to_string());
        Ok(())
    }
}
