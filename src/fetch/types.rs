//! Fetch result data.

/// What the fetch collaborator hands to the request flow.
///
/// Produced once per request and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Final HTTP status code
    pub status_code: u16,
    /// Raw response body
    pub body: Vec<u8>,
    /// Body decoded with the response charset (never fails)
    pub text: String,
    /// URL of the final response after any redirects
    pub final_url: String,
    /// `Location` header of a 3xx response when redirects were not followed
    pub redirect_location: Option<String>,
}
