//! Description of the single countries GET request.

use std::collections::BTreeMap;

/// Default API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1";

/// Fields requested from the API; everything else is left out of the payload.
pub const REQUESTED_FIELDS: &[&str] = &["name", "flags", "population"];

/// Context key used to correlate the host's response with this request.
pub const CONTEXT_KEY: &str = "request";

/// Context value marking the countries request.
pub const CONTEXT_VALUE: &str = "countries";

/// Everything the host needs to issue the countries request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountriesRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub context: BTreeMap<String, String>,
}

impl CountriesRequest {
    /// Builds the request against `endpoint` (an API base URL).
    ///
    /// ```
    /// use countrydeck::fetch::CountriesRequest;
    ///
    /// let req = CountriesRequest::new("https://restcountries.com/v3.1/");
    /// assert_eq!(req.url, "https://restcountries.com/v3.1/all?fields=name,flags,population");
    /// ```
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        let url = format!(
            "{}/all?fields={}",
            endpoint.trim_end_matches('/'),
            REQUESTED_FIELDS.join(",")
        );

        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let mut context = BTreeMap::new();
        context.insert(CONTEXT_KEY.to_string(), CONTEXT_VALUE.to_string());

        Self {
            url,
            headers,
            context,
        }
    }

    /// Whether a response context belongs to this kind of request.
    #[must_use]
    pub fn owns_response(context: &BTreeMap<String, String>) -> bool {
        context.get(CONTEXT_KEY).map(String::as_str) == Some(CONTEXT_VALUE)
    }
}

impl Default for CountriesRequest {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
