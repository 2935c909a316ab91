use crate::error::Result;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// How long a status glyph stays on the badge before it is cleared.
pub const CLEAR_DELAY: Duration = Duration::from_millis(1200);

pub const SUCCESS_GLYPH: &str = "✓";
pub const ERROR_GLYPH: &str = "!";
pub const SUCCESS_COLOR: &str = "#4CAF50";
pub const ERROR_COLOR: &str = "#F44336";
pub const GLYPH_COLOR: &str = "#FFFFFF";

/// Toolbar badge, as exposed by the embedding host.
pub trait Badge {
    fn set_text(&mut self, text: &str) -> Result<()>;
    fn set_background_color(&mut self, color: &str) -> Result<()>;

    /// Not supported on all host versions; callers tolerate failure.
    fn set_text_color(&mut self, color: &str) -> Result<()>;
}

/// Shows the outcome of a copy attempt on the badge and clears it after
/// [`CLEAR_DELAY`].
///
/// Each show aborts the previously scheduled clear before arming a new one,
/// so rapid attempts coalesce into a single trailing clear.
pub struct StatusIndicator<B: Badge + Send + 'static> {
    badge: Arc<Mutex<B>>,
    pending_clear: Option<JoinHandle<()>>,
}

impl<B: Badge + Send + 'static> StatusIndicator<B> {
    pub fn new(badge: B) -> Self {
        Self {
            badge: Arc::new(Mutex::new(badge)),
            pending_clear: None,
        }
    }

    pub fn show_success(&mut self) {
        self.show(SUCCESS_GLYPH, SUCCESS_COLOR);
    }

    pub fn show_error(&mut self) {
        self.show(ERROR_GLYPH, ERROR_COLOR);
    }

    fn show(&mut self, glyph: &str, background: &str) {
        if let Ok(mut badge) = self.badge.lock() {
            if let Err(e) = badge.set_text(glyph) {
                log::warn!("failed to set badge text: {e}");
            }
            if let Err(e) = badge.set_background_color(background) {
                log::warn!("failed to set badge background: {e}");
            }
            if let Err(e) = badge.set_text_color(GLYPH_COLOR) {
                log::debug!("badge text color unsupported on this host: {e}");
            }
        }

        if let Some(pending) = self.pending_clear.take() {
            pending.abort();
        }
        let badge = Arc::clone(&self.badge);
        self.pending_clear = Some(tokio::spawn(async move {
            tokio::time::sleep(CLEAR_DELAY).await;
            if let Ok(mut badge) = badge.lock() {
                if let Err(e) = badge.set_text("") {
                    log::warn!("failed to clear badge: {e}");
                }
            }
        }));
    }
}
