use crate::http::request::ParsedRequest;

#[derive(Debug)]
pub enum ParseError {
    MissingMethod,
    MissingPath,
    MissingVersion,
}

pub fn parse_request_line(line: &str) -> Result<ParsedRequest, ParseError> {
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::MissingMethod)?;
    let path = parts.next().ok_or(ParseError::MissingPath)?;

    // Protocol token (e.g. "HTTP/1.1") must be present but is not kept.
    // Anything after it is ignored.
    parts.next().ok_or(ParseError::MissingVersion)?;

    Ok(ParsedRequest {
        method: method.to_string(),
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let parsed = parse_request_line("GET / HTTP/1.1").unwrap();

        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.path, "/");
    }
}
