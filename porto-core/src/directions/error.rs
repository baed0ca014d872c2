use thiserror::Error;

/// Errors from [`crate::DirectionsProvider::route`].
///
/// Every variant is terminal: the guide shows no directions and does not
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The request never reached the service.
    #[error("network error requesting {url}: {message}")]
    NetworkError { url: String, message: String },
    /// The service did not answer within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },
    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpError {
        url: String,
        status: u16,
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse directions response: {message}")]
    ParseError { message: String },
    /// The service reported a non-`OK` status such as `ZERO_RESULTS` or
    /// `REQUEST_DENIED`.
    #[error("directions service returned {status}: {message}")]
    ServiceError { status: String, message: String },
    /// The response succeeded but carried no route legs.
    #[error("no route found between the requested points")]
    NoRoute,
}
