//! Clipboard sink for exported text.
//!
//! [`SystemClipboard`] is a thin wrapper around the `arboard` crate. On Linux
//! (X11/Wayland) the copied text is served by this process, so it is only
//! available while the process runs unless a clipboard manager takes it over.

use crate::error::{ExportError, Result};

/// Destination for copied text.
pub trait ClipboardSink {
    /// Replace the clipboard content with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

impl From<arboard::Error> for ExportError {
    fn from(err: arboard::Error) -> Self {
        ExportError::Clipboard {
            message: err.to_string(),
        }
    }
}

/// The system clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Open the system clipboard.
    ///
    /// Fails when no clipboard is available, e.g. in a headless session.
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text)?;
        Ok(())
    }
}

/// Clipboard kept in memory, for sessions without a system clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub content: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.content = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_replaces_content() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.set_text("first").unwrap();
        clipboard.set_text("second").unwrap();
        assert_eq!(clipboard.content.as_deref(), Some("second"));
    }
}
