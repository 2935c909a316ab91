//! # QuickCopy
//!
//! The core of a "copy this page" tool: single click on the toolbar icon
//! copies the page's title and URL, double click copies the page's readable
//! content rendered as Markdown.
//!
//! ## Features
//!
//! - Single/double click disambiguation over a 300 ms window
//! - Readability extraction piped into Markdown with a raw-document fallback
//! - In-page clipboard writing with a staged-element primary mechanism and a
//!   direct-write fallback
//! - Toolbar badge status indicator with a 1.2 s auto-clear
//! - CLI that formats and copies from local input via the system clipboard
//!
//! The browser runtime, the readability parser, and the page itself are
//! injected capabilities: [`page::Page`], [`clipboard::CopySurface`], and
//! [`badge::Badge`]. The embedding host wires real adapters; tests use fakes.
//!
//! ## Example
//!
//! ```no_run
//! use quickcopy::{copy_to_clipboard, title_and_url};
//!
//! let text = title_and_url("Example", "https://example.com");
//! copy_to_clipboard(&text).unwrap();
//! ```

pub mod badge;
pub mod click;
pub mod clipboard;
pub mod error;
pub mod extension;
pub mod input;
pub mod markdown;
pub mod page;

pub use badge::{Badge, StatusIndicator};
pub use click::{Click, Disambiguator, DOUBLE_CLICK_WINDOW};
pub use clipboard::{copy_to_clipboard, Clipboard, CopySurface, SystemClipboard};
pub use error::{QuickCopyError, Result};
pub use extension::QuickCopy;
pub use input::{read_body_file, read_stdin};
pub use markdown::{article_markdown, fallback_markdown, title_and_url, Article};
pub use page::Page;

/// Format an article as Markdown and copy it to the system clipboard.
///
/// This is the high-level function behind the CLI's article mode; it returns
/// the number of bytes copied.
pub fn copy_article_to_clipboard(
    article: &Article,
    source_url: &str,
    domain: &str,
) -> Result<usize> {
    let markdown = article_markdown(article, source_url, domain);
    let len = markdown.len();
    copy_to_clipboard(&markdown)?;
    Ok(len)
}
