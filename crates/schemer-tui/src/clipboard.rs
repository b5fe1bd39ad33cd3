//! Copy-to-clipboard with a terminal fallback.
//!
//! The primary path is the system clipboard (via `arboard`). When it can't
//! be opened or rejects the write, the value is sent to the terminal as an
//! OSC 52 escape sequence, which most terminal emulators turn into a
//! clipboard write.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;
use tracing::warn;

/// Errors that can occur while copying.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The clipboard could not be opened.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard refused the write.
    #[error("Clipboard rejected the write: {0}")]
    Rejected(String),

    /// Writing the terminal escape sequence failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which path a successful copy took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    /// System clipboard.
    Primary,
    /// Terminal escape sequence.
    Fallback,
}

/// Something that can receive clipboard text.
pub trait ClipboardBackend {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Open the system clipboard.
    pub fn open() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner })
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}

/// OSC 52 clipboard writer.
#[derive(Debug)]
pub struct Osc52Clipboard<W> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    /// Write escape sequences to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the writer and return the underlying output.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Build the OSC 52 sequence that sets the clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> ClipboardBackend for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Clipboard with a primary backend and a fallback.
#[derive(Debug)]
pub struct Clipboard<P, F> {
    primary: Option<P>,
    fallback: F,
}

/// The clipboard used by the terminal UI.
pub type TerminalClipboard = Clipboard<SystemClipboard, Osc52Clipboard<std::io::Stdout>>;

impl TerminalClipboard {
    /// Open the system clipboard, falling back to OSC 52 on stdout.
    pub fn for_terminal() -> Self {
        let primary = SystemClipboard::open()
            .inspect_err(|e| warn!(error = %e, "system clipboard unavailable, using OSC 52"))
            .ok();
        Clipboard::new(primary, Osc52Clipboard::new(std::io::stdout()))
    }
}

impl<P: ClipboardBackend, F: ClipboardBackend> Clipboard<P, F> {
    /// Create a clipboard from its two paths.
    pub fn new(primary: Option<P>, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Copy `value`, trying the primary path first.
    pub fn copy(&mut self, value: &str) -> Result<CopyPath, ClipboardError> {
        if let Some(primary) = self.primary.as_mut() {
            match primary.set_text(value) {
                Ok(()) => return Ok(CopyPath::Primary),
                Err(e) => warn!(error = %e, "clipboard write rejected, using fallback"),
            }
        }

        self.fallback.set_text(value)?;
        Ok(CopyPath::Fallback)
    }

    /// The primary backend, if one is available.
    pub fn primary(&self) -> Option<&P> {
        self.primary.as_ref()
    }

    /// The fallback backend.
    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

/// In-memory clipboard used by headless mode and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    reject: bool,
}

impl MemoryClipboard {
    /// A clipboard that accepts writes.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write.
    pub fn rejecting() -> Self {
        Self {
            contents: None,
            reject: true,
        }
    }

    /// Current contents.
    pub fn text(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.reject {
            return Err(ClipboardError::Rejected("write refused".into()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Read back the clipboard text from an OSC 52 stream.
    fn decode_osc52(bytes: &[u8]) -> String {
        let s = std::str::from_utf8(bytes).unwrap();
        let payload = s
            .strip_prefix("\x1b]52;c;")
            .and_then(|rest| rest.strip_suffix('\x07'))
            .unwrap();
        String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap()
    }

    #[test]
    fn test_primary_path() {
        let mut clipboard = Clipboard::new(Some(MemoryClipboard::new()), MemoryClipboard::new());

        let path = clipboard.copy("#FF0000").unwrap();

        assert_eq!(path, CopyPath::Primary);
        assert_eq!(clipboard.primary().unwrap().text(), Some("#FF0000"));
        assert_eq!(clipboard.fallback().text(), None);
    }

    #[test]
    fn test_fallback_when_primary_rejects() {
        let mut clipboard =
            Clipboard::new(Some(MemoryClipboard::rejecting()), MemoryClipboard::new());

        let path = clipboard.copy("#00FF00").unwrap();

        assert_eq!(path, CopyPath::Fallback);
        assert_eq!(clipboard.fallback().text(), Some("#00FF00"));
    }

    #[test]
    fn test_fallback_when_primary_missing() {
        let mut clipboard: Clipboard<MemoryClipboard, _> =
            Clipboard::new(None, Osc52Clipboard::new(Vec::new()));

        let path = clipboard.copy("#0047AB").unwrap();

        assert_eq!(path, CopyPath::Fallback);
        let written = clipboard.fallback.into_inner();
        assert_eq!(decode_osc52(&written), "#0047AB");
    }

    #[test]
    fn test_fallback_failure_is_reported() {
        let mut clipboard =
            Clipboard::new(Some(MemoryClipboard::rejecting()), MemoryClipboard::rejecting());

        assert!(matches!(
            clipboard.copy("#FFFFFF"),
            Err(ClipboardError::Rejected(_))
        ));
    }

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }
}
