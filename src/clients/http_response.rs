//! HTTP response types.
//!
//! [`HttpResponse`] keeps the body as raw bytes; callers decode it into one
//! of the [`resources`](crate::resources) types, or any other shape, with
//! [`HttpResponse::json`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// Rate limit information parsed from the `X-Shopify-Shop-Api-Call-Limit` header.
///
/// The header format is "X/Y" where X is the current request count and Y is
/// the bucket size. The value is informational; the client never throttles.
///
/// ```rust
/// use shopify_rest::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.bucket_size, 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// The current number of requests made in this bucket.
    pub request_count: u32,
    /// The maximum number of requests allowed in this bucket.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses the rate limit header value, returning `None` on malformed input.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;

        Some(Self {
            request_count: count.parse().ok()?,
            bucket_size: size.parse().ok()?,
        })
    }
}

/// A response from the Shopify REST Admin API.
///
/// Any status code is represented here, including 4xx and 5xx; use
/// [`is_ok`](Self::is_ok) to check for success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
    /// Rate limit information (from `X-Shopify-Shop-Api-Call-Limit` header).
    pub api_call_limit: Option<ApiCallLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the call limit header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let api_call_limit = headers
            .get("x-shopify-shop-api-call-limit")
            .and_then(|values| values.first())
            .and_then(|value| ApiCallLimit::parse(value));

        Self {
            code,
            headers,
            body,
            api_call_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is not valid JSON for `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::clients::HttpResponse;
    /// use shopify_rest::resources::CountResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), br#"{"count":3}"#.to_vec());
    /// let count: CountResponse = response.json().unwrap();
    /// assert_eq!(count.count, 3);
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 422, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_api_call_limit_parsing() {
        assert_eq!(
            ApiCallLimit::parse("1/40"),
            Some(ApiCallLimit {
                request_count: 1,
                bucket_size: 40
            })
        );

        assert!(ApiCallLimit::parse("invalid").is_none());
        assert!(ApiCallLimit::parse("40").is_none());
        assert!(ApiCallLimit::parse("40/").is_none());
        assert!(ApiCallLimit::parse("/80").is_none());
        assert!(ApiCallLimit::parse("abc/def").is_none());
        assert!(ApiCallLimit::parse("1/2/3").is_none());
    }

    #[test]
    fn test_new_parses_call_limit_header() {
        let mut headers = HashMap::new();
        headers.insert(
            "x-shopify-shop-api-call-limit".to_string(),
            vec!["32/40".to_string()],
        );

        let response = HttpResponse::new(200, headers, Vec::new());
        let limit = response.api_call_limit.unwrap();
        assert_eq!(limit.request_count, 32);
        assert_eq!(limit.bucket_size, 40);
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = HttpResponse::new(200, headers, Vec::new());
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
    }

    #[test]
    fn test_deprecation_reason_extraction() {
        let mut headers = HashMap::new();
        headers.insert(
            "x-shopify-api-deprecated-reason".to_string(),
            vec!["This endpoint is deprecated".to_string()],
        );

        let response = HttpResponse::new(200, headers, Vec::new());
        assert_eq!(
            response.deprecation_reason(),
            Some("This endpoint is deprecated")
        );
        assert!(HttpResponse::new(200, HashMap::new(), Vec::new())
            .deprecation_reason()
            .is_none());
    }

    #[test]
    fn test_text_keeps_raw_body() {
        let response = HttpResponse::new(404, HashMap::new(), br#"{"errors":"Not Found"}"#.to_vec());
        assert_eq!(response.text(), r#"{"errors":"Not Found"}"#);
    }

    #[test]
    fn test_json_decodes_body() {
        let response = HttpResponse::new(200, HashMap::new(), br#"{"count":12}"#.to_vec());
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["count"], 12);

        let empty = HttpResponse::new(200, HashMap::new(), Vec::new());
        assert!(empty.json::<serde_json::Value>().is_err());
    }
}
