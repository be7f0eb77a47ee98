use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

use crate::error::{FetchError, Result};
use crate::htmlscraper::{html_to_result, SearchResult};

fn create_client() -> Result<reqwest::blocking::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("oeis-search/", env!("CARGO_PKG_VERSION"))),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

    let client = reqwest::blocking::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(FetchError::Network)?;

    Ok(client)
}

/// Downloads the raw search page. The status code is not inspected: the
/// OEIS reports malformed queries on a 404 page whose body still has to be
/// classified.
pub fn fetch_html(url: &str) -> Result<String> {
    let client = create_client()?;

    tracing::debug!("GET {}", url);
    let response = client.get(url).send().map_err(FetchError::Network)?;
    tracing::debug!(status = %response.status(), "Response received");

    // `text` consumes the response, so the body is released whether or not
    // the read succeeds.
    let body = response.text().map_err(FetchError::Body)?;
    tracing::debug!(bytes = body.len(), "Body read");

    Ok(body)
}

/// Queries the OEIS and scrapes its answer.
pub fn fetch_results(url: &str) -> Result<SearchResult> {
    let html = fetch_html(url)?;
    Ok(html_to_result(&html))
}
