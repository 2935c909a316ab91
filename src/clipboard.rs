use crate::error::{QuickCopyError, Result};

/// In-page copy capability, as exposed by the embedding host.
///
/// The primary mechanism stages the text in a hidden, focused, selected
/// editable element and invokes the host's copy command; this sidesteps the
/// focus-related permission failures the direct clipboard API hits when the
/// page lacks user-gesture focus. The direct write is kept as a fallback.
#[allow(async_fn_in_trait)]
pub trait CopySurface {
    /// Guard for the staged element. Implementations must remove the element
    /// from the document when the guard is dropped, so cleanup happens on
    /// every exit path.
    type Staged;

    /// Insert a hidden zero-opacity editable element holding `text`, focus
    /// it, and select its contents.
    fn stage(&mut self, text: &str) -> Result<Self::Staged>;

    /// Invoke the host's copy command against the staged selection. Returns
    /// the command's success flag.
    fn copy_command(&mut self, staged: &Self::Staged) -> bool;

    /// Write `text` through the direct system clipboard API.
    async fn clipboard_write(&mut self, text: &str) -> Result<()>;
}

/// Write `text` to the clipboard through the page's copy surface.
///
/// Tries the staged-element copy command first and falls back to the direct
/// clipboard write only when the command itself reports failure. The staged
/// element is removed exactly once per invocation, before the fallback runs.
pub async fn copy_in_page<S: CopySurface>(surface: &mut S, text: &str) -> Result<()> {
    let staged = surface.stage(text)?;
    let copied = surface.copy_command(&staged);
    drop(staged);

    if copied {
        Ok(())
    } else {
        log::debug!("copy command reported failure, retrying via direct clipboard write");
        surface.clipboard_write(text).await
    }
}

/// Trait for direct clipboard operations, allowing for mocking in tests
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
    fn get_text(&mut self) -> Result<String>;
}

/// System clipboard implementation using arboard
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| QuickCopyError::ClipboardError(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text)
            .map_err(|e| QuickCopyError::ClipboardError(e.to_string()))
    }

    fn get_text(&mut self) -> Result<String> {
        self.clipboard
            .get_text()
            .map_err(|e| QuickCopyError::ClipboardError(e.to_string()))
    }
}

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(text)
}
