use crate::error::Result;
use crate::markdown::Article;

/// Capabilities of the active page, as exposed by the embedding host.
///
/// The document accessors always succeed; the host substitutes empty strings
/// for anything it cannot read. The async operations run in the page's
/// execution context and complete only once the host confirms them.
#[allow(async_fn_in_trait)]
pub trait Page {
    /// The document's title (may be empty).
    fn title(&self) -> String;

    /// The page's URL (may be empty).
    fn url(&self) -> String;

    /// The document's domain.
    fn domain(&self) -> String;

    /// The document body rendered as plain text.
    fn body_text(&self) -> String;

    /// Load the readability collaborator into the page. An error here aborts
    /// the extraction pipeline; there is no fallback without the reader.
    async fn load_reader(&mut self) -> Result<()>;

    /// Snapshot the document and run readability extraction on it.
    ///
    /// `Ok(None)` means the parse completed but found nothing usable; an
    /// error means the parse itself failed. Callers downgrade both to the
    /// fallback formatting path.
    async fn extract_article(&mut self) -> Result<Option<Article>>;
}
