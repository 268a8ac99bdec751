/// A request line decomposed into its routable parts.
///
/// Carries exactly what route matching needs. The protocol token present in
/// the raw line ("HTTP/1.1") is validated during parsing and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// The method token, verbatim (no case normalization)
    pub method: String,
    /// The request path, verbatim, with its leading `/`
    pub path: String,
}
