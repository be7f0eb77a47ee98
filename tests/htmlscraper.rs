use oeis_search::htmlscraper::{html_to_result, top_five_results, ScrapeError, SearchResult};

const RESULTS: &str = include_str!("fixtures/results.html");
const TRUNCATED: &str = include_str!("fixtures/truncated.html");
const FOUR_RESULTS: &str = include_str!("fixtures/four_results.html");
const NO_RESULT: &str = include_str!("fixtures/no_result.html");
const BAD_QUERY: &str = include_str!("fixtures/bad_query.html");

fn first_page_descriptions() -> Vec<String> {
    [
        "The positive integers. Also called the natural numbers, the whole numbers or the counting numbers, but these terms are ambiguous.",
        "Digital sum (i.e., sum of digits) of n; also called digsum(n).",
        "Powers of primes. Alternatively, 1 and the prime powers (p^k, p prime, k &gt;= 1).",
        "The nonnegative integers.",
        "Palindromes in base 10.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn no_results_page() {
    assert_eq!(
        html_to_result(NO_RESULT),
        SearchResult {
            count: 0,
            descriptions: vec![],
            error: Some(ScrapeError::NoMatch),
        }
    );
}

#[test]
fn bad_query_page() {
    let result = html_to_result(BAD_QUERY);

    assert_eq!(result.count, 0);
    assert!(result.descriptions.is_empty());
    assert_eq!(
        result.error.map(|e| e.as_str()),
        Some("Sorry, the page you requested was not found.")
    );
}

#[test]
fn lots_of_results_keeps_first_five() {
    assert_eq!(
        html_to_result(RESULTS),
        SearchResult {
            count: 11196,
            descriptions: first_page_descriptions(),
            error: None,
        }
    );
}

#[test]
fn truncated_page_keeps_complete_blocks() {
    let mut expected = first_page_descriptions();
    expected.pop();

    assert_eq!(
        html_to_result(TRUNCATED),
        SearchResult {
            count: 11196,
            descriptions: expected,
            error: None,
        }
    );
}

#[test]
fn four_results() {
    let result = html_to_result(FOUR_RESULTS);

    assert_eq!(result.count, 4);
    assert_eq!(
        result.descriptions,
        vec![
            "Numbers k such that k and 4*k are anagrams.",
            "Numbers m with the property that shifting the rightmost digit of m to the left end multiplies the number by 4.",
            "Numbers that are proper divisors of the number you get by rotating digits right once.",
            "Non-repdigit numbers n such that n divides A045876(n).",
        ]
    );
    assert_eq!(result.error, None);
}

#[test]
fn top_five_ignores_classification() {
    // The extractor alone does not look for the error markers.
    assert_eq!(top_five_results(RESULTS).len(), 5);
    assert_eq!(top_five_results(FOUR_RESULTS).len(), 4);
    assert!(top_five_results(NO_RESULT).is_empty());
}
