//! Data fetcher for the country list.
//!
//! Zellij plugins cannot block on I/O, so the fetch is split in two halves
//! joined by the host:
//!
//! ```text
//! CountriesRequest ──web_request──▶ Zellij ──WebRequestResult──▶ decode_response
//! ```
//!
//! - `request`: URL, headers, and correlation context for the single GET
//! - `response`: status validation, JSON decoding, and error normalisation

pub mod request;
pub mod response;

pub use request::{CountriesRequest, DEFAULT_ENDPOINT};
pub use response::decode_response;
