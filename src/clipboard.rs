use crate::error::{AnalystError, Result};

/// Seam over the platform clipboard so the copy path is testable without a
/// display server.
pub trait ClipboardSink: Send {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| AnalystError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| AnalystError::Clipboard(e.to_string()))
    }
}
