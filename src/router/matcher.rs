use std::collections::HashMap;

use crate::http::parser::{ParseError, parse_request_line};
use crate::router::route::Route;

/// A successful route lookup.
///
/// Holds the request's method and path verbatim, plus one entry in `params`
/// for each `:<name>` segment of the matched pattern, bound to the literal
/// text of the corresponding path segment. A literal route matches with an
/// empty `params` map; that is still a match, distinct from no match at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The request method, as matched
    pub method: String,
    /// The request path, as matched
    pub path: String,
    /// Captured path parameters, keyed by pattern segment name
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// Looks up a captured parameter by name.
    ///
    /// # Example
    ///
    /// ```
    /// # use junction::router::{Route, find_match};
    /// let routes = vec![Route::new("GET", "/toasters/:toaster_id")];
    /// let found = find_match(&routes, "GET", "/toasters/42").unwrap();
    ///
    /// assert_eq!(found.param("toaster_id"), Some("42"));
    /// assert_eq!(found.param("missing"), None);
    /// ```
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|v| v.as_str())
    }
}

/// Finds the first route matching the given method and path.
///
/// The table is scanned in registration order and the earliest structurally
/// matching route wins, even when a later route is more specific. Method
/// comparison is exact (no case normalization). Returns `None` when no route
/// matches; that is a normal outcome, not an error.
///
/// # Example
///
/// ```
/// # use junction::router::{Route, find_match};
/// let routes = vec![
///     Route::new("GET", "/toasters"),
///     Route::new("GET", "/toasters/:toaster_id"),
/// ];
///
/// let found = find_match(&routes, "GET", "/toasters/42").unwrap();
/// assert_eq!(found.path, "/toasters/42");
/// assert_eq!(found.param("toaster_id"), Some("42"));
///
/// assert!(find_match(&routes, "GET", "/waffle-makers").is_none());
/// ```
pub fn find_match(routes: &[Route], method: &str, path: &str) -> Option<RouteMatch> {
    for route in routes {
        if route.method != method {
            continue;
        }

        if let Some(params) = match_pattern(&route.pattern, path) {
            tracing::trace!(method, path, pattern = %route.pattern, "Route matched");

            return Some(RouteMatch {
                method: method.to_string(),
                path: path.to_string(),
                params,
            });
        }
    }

    None
}

/// Parses a raw request line and matches it against the table.
///
/// The three outcomes stay distinct: `Err` for a malformed request line
/// (no route lookup is attempted), `Ok(None)` for a well-formed line no
/// route matches, `Ok(Some(_))` for a match.
pub fn resolve(routes: &[Route], raw_line: &str) -> Result<Option<RouteMatch>, ParseError> {
    let request = parse_request_line(raw_line)?;
    Ok(find_match(routes, &request.method, &request.path))
}

/// Matches a single pattern against a path, collecting captures.
///
/// Both strings are split on `/`; the segment lists must have equal length.
/// Splitting keeps the empty leading segment, so the root path "/" matches
/// the pattern "/" and never an empty pattern.
fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();

    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            params.insert(name.to_string(), (*path_segment).to_string());
        } else if pattern_segment != path_segment {
            return None;
        }
    }

    Some(params)
}
