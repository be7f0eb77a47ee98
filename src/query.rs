pub const DEFAULT_ENDPOINT: &str = "https://oeis.org/search";

const TERM_SEPARATOR: &str = "%20";
const QUERY_SUFFIX: &str = "&sort=&language=&go=Search";

/// Builds a search URL against the default endpoint.
pub fn create_query<S: AsRef<str>>(args: &[S]) -> String {
    build_query(DEFAULT_ENDPOINT, args)
}

/// Builds a search URL from command line tokens.
///
/// Only tokens that parse as a base-10 `i64` are kept, verbatim and in
/// order, each followed by an encoded space. Anything else is dropped
/// without complaint.
pub fn build_query<S: AsRef<str>>(endpoint: &str, args: &[S]) -> String {
    let mut query = format!("{}?q=", endpoint);

    for term in args.iter().map(AsRef::as_ref) {
        if term.parse::<i64>().is_ok() {
            query.push_str(term);
            query.push_str(TERM_SEPARATOR);
        } else {
            tracing::debug!("Ignoring non-integer term {:?}", term);
        }
    }

    query.push_str(QUERY_SUFFIX);
    query
}
