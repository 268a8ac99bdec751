use junction::http::parser::{ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_request_line() {
    let parsed = parse_request_line("GET / HTTP/1.1").unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/");
}

#[test]
fn test_parse_post_request_line() {
    let parsed = parse_request_line("POST /toasters HTTP/1.1").unwrap();

    assert_eq!(parsed.method, "POST");
    assert_eq!(parsed.path, "/toasters");
}

#[test]
fn test_parse_keeps_path_verbatim() {
    let parsed = parse_request_line("GET /search?q=rust HTTP/1.1").unwrap();

    // No query-string handling: the second token is the path, untouched
    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_parse_preserves_method_case() {
    let parsed = parse_request_line("get /toasters HTTP/1.1").unwrap();

    // No normalization: the method token comes back exactly as sent
    assert_eq!(parsed.method, "get");
}

#[test]
fn test_parse_discards_protocol_token() {
    let old = parse_request_line("GET /toasters HTTP/1.0").unwrap();
    let new = parse_request_line("GET /toasters HTTP/1.1").unwrap();

    assert_eq!(old, new);
}

#[test]
fn test_parse_empty_line() {
    let result = parse_request_line("");

    assert!(matches!(result, Err(ParseError::MissingMethod)));
}

#[test]
fn test_parse_method_only() {
    let result = parse_request_line("GET");

    assert!(matches!(result, Err(ParseError::MissingPath)));
}

#[test]
fn test_parse_missing_protocol() {
    let result = parse_request_line("GET /toasters");

    assert!(matches!(result, Err(ParseError::MissingVersion)));
}

#[test]
fn test_parse_whitespace_only_line() {
    let result = parse_request_line("   ");

    assert!(matches!(result, Err(ParseError::MissingMethod)));
}

#[test]
fn test_parse_tolerates_repeated_separators() {
    let parsed = parse_request_line("GET   /toasters\tHTTP/1.1").unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/toasters");
}

#[test]
fn test_parse_ignores_tokens_after_protocol() {
    let parsed = parse_request_line("GET /toasters HTTP/1.1 trailing junk").unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/toasters");
}
