use crate::error::{Result, SineError};

/// Destination for copied table text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Copy text that must stay pasteable after the caller is done with the
    /// sink. Blocks where the platform needs the writer to stay alive.
    fn set_text_and_wait(&mut self, text: &str) -> Result<()> {
        self.set_text(text)
    }
}

/// Copy from a one-shot run, which drops the sink right after.
pub fn copy_once(sink: &mut dyn ClipboardSink, text: &str) -> Result<()> {
    sink.set_text_and_wait(text)
}

/// The desktop clipboard.
///
/// On X11 and Wayland the copied text is served by this process, so it stays
/// pasteable only while the handle is alive or while
/// [`ClipboardSink::set_text_and_wait`] is blocking.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| SineError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| SineError::Clipboard(e.to_string()))?;
        tracing::info!("Copied {} bytes to the clipboard", text.len());
        Ok(())
    }

    #[cfg(target_os = "linux")]
    fn set_text_and_wait(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        tracing::info!(
            "Serving {} bytes on the clipboard until another application takes it over",
            text.len()
        );
        self.inner
            .set()
            .wait()
            .text(text)
            .map_err(|e| SineError::Clipboard(e.to_string()))
    }
}

/// In-process clipboard for headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
    waited: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Whether the last write asked for the text to outlive the sink.
    pub fn waited(&self) -> bool {
        self.waited
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        self.waited = false;
        Ok(())
    }

    fn set_text_and_wait(&mut self, text: &str) -> Result<()> {
        self.set_text(text)?;
        self.waited = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_keeps_last_write() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);
        clipboard.set_text("1, 2").unwrap();
        clipboard.set_text("").unwrap();
        assert_eq!(clipboard.contents(), Some(""));
        assert_eq!(clipboard.writes(), 2);
    }

    #[test]
    fn test_copy_once_keeps_text_past_the_sink() {
        let mut clipboard = MemoryClipboard::new();
        copy_once(&mut clipboard, "0, 250").unwrap();
        assert_eq!(clipboard.contents(), Some("0, 250"));
        assert!(clipboard.waited());

        clipboard.set_text("1").unwrap();
        assert!(!clipboard.waited());
    }
}
