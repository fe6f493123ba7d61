//! NewType for the base URL of the CGI-Clinics API.

use crate::errors::InvalidApiUrl;
use aliri_braid::braid;

/// An [ApiUrl] is the base URL of a CGI-Clinics API deployment, e.g.
/// `https://v2.cgiclinics.eu/api/1.0/`
#[braid(validator, serde)]
pub struct ApiUrl(String);

impl ApiUrl {
    /// The production CGI-Clinics platform.
    pub fn public() -> Self {
        ApiUrl::from_static("https://v2.cgiclinics.eu/api/1.0/")
    }
}

impl aliri_braid::Validator for ApiUrl {
    type Error = InvalidApiUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if !(s.starts_with("http://") || s.starts_with("https://")) {
            Err(InvalidApiUrl::Protocol(s.to_string()))
        } else if !s.ends_with("/api/1.0/") {
            Err(InvalidApiUrl::EndpointVersion(s.to_string()))
        } else {
            Ok(())
        }
    }
}
