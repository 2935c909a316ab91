use crate::badge::{Badge, StatusIndicator};
use crate::click::{Click, Disambiguator};
use crate::clipboard::{copy_in_page, CopySurface};
use crate::error::Result;
use crate::markdown::{article_markdown, fallback_markdown, title_and_url};
use crate::page::Page;
use std::time::Instant;

/// The extension core: owns the click disambiguator and the status
/// indicator, and runs the copy pipeline against an injected page.
pub struct QuickCopy<B: Badge + Send + 'static> {
    clicks: Disambiguator,
    indicator: StatusIndicator<B>,
}

impl<B: Badge + Send + 'static> QuickCopy<B> {
    pub fn new(badge: B) -> Self {
        log::debug!("quickcopy ready");
        Self {
            clicks: Disambiguator::new(),
            indicator: StatusIndicator::new(badge),
        }
    }

    /// Handle a toolbar-icon click on `page` occurring at `now`.
    ///
    /// Single click copies `"{title}\n{url}"`; double click runs the
    /// extraction pipeline and copies the resulting Markdown. The outcome is
    /// reflected on the badge either way; errors never propagate past here.
    pub async fn on_clicked<P>(&mut self, page: &mut P, now: Instant)
    where
        P: Page + CopySurface,
    {
        let outcome = match self.clicks.classify(now) {
            Click::Single => copy_title_and_url(page).await,
            Click::Double => copy_readable_content(page).await,
        };

        match outcome {
            Ok(()) => self.indicator.show_success(),
            Err(e) => {
                log::error!("copy failed: {e}");
                self.indicator.show_error();
            }
        }
    }

}

async fn copy_title_and_url<P: Page + CopySurface>(page: &mut P) -> Result<()> {
    let text = title_and_url(&page.title(), &page.url());
    copy_in_page(page, &text).await
}

/// Extraction pipeline: load the reader, extract, format, write.
///
/// A reader load failure is terminal. Extraction yielding nothing usable
/// (or failing outright) downgrades to the fallback formatting, so the
/// user still gets something copied.
async fn copy_readable_content<P: Page + CopySurface>(page: &mut P) -> Result<()> {
    page.load_reader().await?;

    let source_url = page.url();
    let extracted = page.extract_article().await;
    let markdown = match extracted {
        Ok(Some(article)) => article_markdown(&article, &source_url, &page.domain()),
        Ok(None) => raw_document_markdown(page, &source_url),
        Err(e) => {
            log::warn!("extraction failed, falling back to raw document: {e}");
            raw_document_markdown(page, &source_url)
        }
    };

    copy_in_page(page, &markdown).await
}

fn raw_document_markdown<P: Page>(page: &P, source_url: &str) -> String {
    fallback_markdown(&page.title(), &page.domain(), &page.body_text(), source_url)
}
