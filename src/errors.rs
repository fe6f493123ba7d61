//! Errors for this crate.
//! About anyhow: see https://github.com/TrueLayer/reqwest-middleware/issues/119

use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum InvalidApiUrl {
    #[error("Given URL does not end with \"/api/1.0/\": {0}")]
    EndpointVersion(String),

    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),
}

aliri_braid::from_infallible!(InvalidApiUrl);

/// Error for resource identifiers which cannot possibly be valid.
#[derive(thiserror::Error, Debug)]
pub enum InvalidIdentifier {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

aliri_braid::from_infallible!(InvalidIdentifier);

/// Errors representing failed interactions with the CGI-Clinics API.
#[derive(thiserror::Error, Debug)]
pub enum CgiError {
    /// Error response with an explanation from the server.
    #[error("({status:?} {reason:?}): {text}")]
    Error {
        status: StatusCode,
        reason: &'static str,
        text: String,
        source: reqwest::Error,
    },

    /// Error response without explanation from the server.
    #[error(transparent)]
    Raw(#[from] reqwest::Error),

    /// Error from reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),
}

pub(crate) async fn check(res: reqwest::Response) -> Result<reqwest::Response, CgiError> {
    match res.error_for_status_ref() {
        Ok(_) => Ok(res),
        Err(source) => {
            let status = res.status();
            let reason = status.canonical_reason().unwrap_or("unknown reason");
            let text = res.text().await.map_err(CgiError::Raw)?;
            Err(CgiError::Error {
                status,
                reason,
                text,
                source,
            })
        }
    }
}

/// An error which might occur while uploading or downloading files.
#[derive(thiserror::Error, Debug)]
pub enum FileIOError {
    #[error("\"{0}\" is an invalid file path")]
    PathError(String),
    #[error(transparent)]
    Cgi(CgiError),
    #[error(transparent)]
    IO(std::io::Error),
}

impl From<reqwest::Error> for FileIOError {
    fn from(e: reqwest::Error) -> Self {
        FileIOError::Cgi(CgiError::Raw(e))
    }
}

impl From<reqwest_middleware::Error> for FileIOError {
    fn from(e: reqwest_middleware::Error) -> Self {
        FileIOError::Cgi(e.into())
    }
}

impl From<CgiError> for FileIOError {
    fn from(e: CgiError) -> Self {
        FileIOError::Cgi(e)
    }
}

impl From<std::io::Error> for FileIOError {
    fn from(e: std::io::Error) -> Self {
        FileIOError::IO(e)
    }
}

impl From<reqwest_middleware::Error> for CgiError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => CgiError::Middleware(e),
            reqwest_middleware::Error::Reqwest(e) => CgiError::Raw(e),
        }
    }
}

/// Errors from resolving the API token before any request is sent.
#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    #[error("CGI_CLINICS_API_TOKEN is not set and no token was entered")]
    Missing,

    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}
