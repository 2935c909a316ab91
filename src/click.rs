use std::time::{Duration, Instant};

/// Two clicks closer together than this are treated as a double click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Classification of a toolbar-icon click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    Single,
    Double,
}

/// Classifies clicks as single or double from the delta to the previous click.
///
/// The rule is memoryless beyond the immediately preceding click: every click
/// overwrites the stored timestamp, including the second click of a double.
/// Three rapid clicks therefore classify as a double followed by another
/// double relative to click two. That is the intended behavior of the simple
/// delta rule, not a bug to debounce away.
#[derive(Debug)]
pub struct Disambiguator {
    last_click: Option<Instant>,
    window: Duration,
}

impl Disambiguator {
    pub fn new() -> Self {
        Self::with_window(DOUBLE_CLICK_WINDOW)
    }

    /// Disambiguator with a custom double-click window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            last_click: None,
            window,
        }
    }

    /// Classify a click occurring at `now` and record it as the new
    /// predecessor for the next classification.
    pub fn classify(&mut self, now: Instant) -> Click {
        let click = match self.last_click {
            Some(prev) if now.saturating_duration_since(prev) < self.window => Click::Double,
            _ => Click::Single,
        };
        self.last_click = Some(now);
        click
    }
}

impl Default for Disambiguator {
    fn default() -> Self {
        Self::new()
    }
}
