use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static LINE_LEADING_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s+").expect("valid regex"));
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s+").expect("valid regex"));

/// Structured result of readability extraction on a page's document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub site_name: Option<String>,
    pub text_content: String,
}

/// Plain-text rendering for a single click: title on the first line, URL on
/// the second. Total for all inputs, including empty strings.
pub fn title_and_url(title: &str, url: &str) -> String {
    format!("{title}\n{url}")
}

/// Normalize extracted article text for the Markdown body.
///
/// Collapses whitespace runs to single spaces, strips leading whitespace
/// after newlines, trims, then reinserts paragraph breaks after
/// sentence-ending periods. The collapse is idempotent.
pub fn normalize_body(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let collapsed = LINE_LEADING_WS.replace_all(&collapsed, "\n");
    let trimmed = collapsed.trim();
    SENTENCE_END.replace_all(trimmed, ".\n\n").into_owned()
}

/// Markdown document for a successfully extracted article: heading, a
/// source-attribution blockquote (site name, or the page's domain when the
/// article carries none), and the normalized body.
pub fn article_markdown(article: &Article, source_url: &str, domain: &str) -> String {
    let site = article.site_name.as_deref().unwrap_or(domain);
    format!(
        "# {}\n\n> 来源：[{}]({})\n\n{}",
        article.title,
        site,
        source_url,
        normalize_body(&article.text_content)
    )
}

/// Markdown document built from the raw document when extraction yields
/// nothing usable. The body is passed through as-is.
pub fn fallback_markdown(title: &str, domain: &str, body_text: &str, source_url: &str) -> String {
    format!("# {title}\n\n> 来源：[{domain}]({source_url})\n\n{body_text}")
}
