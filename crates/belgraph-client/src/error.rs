use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or authentication failure from the HTTP layer, passed through
    /// unchanged. The client performs no retry.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status} for function '{function}'")]
    Api { function: String, status: u16 },

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A catalog call was given out-of-range parameters.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
