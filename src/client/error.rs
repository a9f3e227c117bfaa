use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum ClientError {
    #[display("Invalid API base URL: {_0}")]
    InvalidBaseUrl(String),

    #[display("Network error: {_0}")]
    Network(String),

    #[display("Failed to fetch {endpoint} (HTTP {status})")]
    Status { endpoint: String, status: u16 },

    #[display("Failed to decode response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl std::error::Error for ClientError {}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidBaseUrl(err.to_string())
    }
}

impl ClientError {
    /// True when the server answered but refused the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }
}
