use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Marker that opens the table cell holding a sequence description. The
/// description starts right after the marker's trailing newline.
const DESCRIPTION_MARKER: &str = "<td valign=top align=left>\n";
const MAX_DESCRIPTIONS: usize = 5;

static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("Displaying .* of (.*) results found.").unwrap());
static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)<td valign=top align=left>\n(.*)\n").unwrap());
// A tag opens only on `<` followed by a name, `/` or `!`, and quoted
// attribute values may contain `>`.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<[A-Za-z/!](?:[^>"']|"[^"]*"|'[^']*')*>"#).unwrap()
});

/// Responses the OEIS answers with instead of a result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeError {
    BadQuery,
    NoMatch,
}

impl ScrapeError {
    /// The literal phrase that identifies this response on the page.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrapeError::BadQuery => "Sorry, the page you requested was not found.",
            ScrapeError::NoMatch => "Sorry, but the terms do not match anything in the table.",
        }
    }
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub count: i64,
    pub descriptions: Vec<String>,
    pub error: Option<ScrapeError>,
}

impl SearchResult {
    fn from_error(error: ScrapeError) -> Self {
        SearchResult {
            error: Some(error),
            ..Default::default()
        }
    }
}

/// Classifies an OEIS search page and pulls out the match count and the
/// first few descriptions.
///
/// The bad-query marker wins over the no-match marker, and either one
/// short-circuits extraction entirely.
pub fn html_to_result(html: &str) -> SearchResult {
    for error in [ScrapeError::BadQuery, ScrapeError::NoMatch] {
        if html.contains(error.as_str()) {
            tracing::debug!("Page classified as {:?}", error);
            return SearchResult::from_error(error);
        }
    }

    let count = parse_count(html);
    let descriptions = top_five_results(html);
    tracing::debug!(count, found = descriptions.len(), "Scraped result page");

    SearchResult {
        count,
        descriptions,
        error: None,
    }
}

/// Reads the total from the "Displaying a-b of N results found." line.
/// Anything unparseable counts as zero.
fn parse_count(html: &str) -> i64 {
    COUNT_RE
        .find(html)
        .and_then(|m| m.as_str().split(' ').nth(3))
        .and_then(|total| total.parse().ok())
        .unwrap_or(0)
}

/// Up to five descriptions in page order, tags stripped.
///
/// The text is cut at a fixed offset past the start of each marker, so a
/// block only counts once its closing newline has arrived. A truncated page
/// yields whatever complete blocks precede the cut.
pub fn top_five_results(html: &str) -> Vec<String> {
    DESCRIPTION_RE
        .find_iter(html)
        .take(MAX_DESCRIPTIONS)
        .map(|m| {
            let snippet = html[m.start() + DESCRIPTION_MARKER.len()..m.end()].trim();
            strip_tags(snippet).trim().to_string()
        })
        .collect()
}

/// Removes markup without decoding entities, so `&gt;` stays as written.
/// A bare `<` in running text is left alone.
fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}
