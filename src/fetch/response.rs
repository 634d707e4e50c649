//! Completion half of the countries fetch: status check and JSON decoding.

use crate::domain::country::{Country, Dataset};
use crate::domain::error::{FetchError, Result};

/// Turns the host's web-request result into a dataset.
///
/// A status outside 200–299 becomes [`FetchError::RequestFailed`]; a body that
/// is not a JSON array of objects becomes [`FetchError::Malformed`]. Either way
/// the caller receives
/// [`CountryDeckError::CountriesUnavailable`](crate::domain::CountryDeckError::CountriesUnavailable).
///
/// # Errors
///
/// Returns `CountriesUnavailable` for any non-success status or undecodable body.
pub fn decode_response(status: u16, body: &[u8]) -> Result<Dataset> {
    let _span = tracing::debug_span!("decode_response", status, body_len = body.len()).entered();

    if !(200..=299).contains(&status) {
        return Err(FetchError::RequestFailed { status }.into());
    }

    let countries: Vec<Country> = serde_json::from_slice(body).map_err(FetchError::from)?;
    tracing::debug!(country_count = countries.len(), "countries decoded");

    Ok(Dataset::new(countries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountryDeckError;

    #[test]
    fn success_status_with_array_decodes() {
        let body = br#"[
            {"name": {"common": "Chile"}, "flags": {"svg": "https://flagcdn.com/cl.svg"}, "population": 19116209},
            {"name": {"common": "Brazil"}, "flags": {"svg": "https://flagcdn.com/br.svg"}, "population": 212559409}
        ]"#;

        let dataset = decode_response(200, body).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.countries()[0].display_name(), "Chile");
        assert_eq!(dataset.countries()[1].population, Some(212_559_409));
    }

    #[test]
    fn server_error_is_unavailable_with_status_source() {
        let err = decode_response(500, b"oops").unwrap_err();
        assert!(matches!(
            err,
            CountryDeckError::CountriesUnavailable(FetchError::RequestFailed { status: 500 })
        ));
    }

    #[test]
    fn redirect_and_client_errors_fail() {
        assert!(decode_response(301, b"[]").is_err());
        assert!(decode_response(404, b"[]").is_err());
        assert!(decode_response(299, b"[]").is_ok());
    }

    #[test]
    fn non_array_body_is_unavailable() {
        let err = decode_response(200, br#"{"status": 404}"#).unwrap_err();
        assert!(matches!(
            err,
            CountryDeckError::CountriesUnavailable(FetchError::Malformed(_))
        ));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn empty_array_is_an_empty_dataset() {
        assert!(decode_response(200, b"[]").unwrap().is_empty());
    }
}
