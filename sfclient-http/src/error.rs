use http::StatusCode;

use sfclient_types::error::FabricError;
use sfclient_types::json::ConversionError;

#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("Request could not be sent:\n  {0}")]
    Request(reqwest::Error),
    #[error("Response body could not be read:\n  {0}")]
    BodyRead(reqwest::Error),
}

/// Failure of a single client operation.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Cluster rejected the credentials with status code '{status}'.")]
    InvalidCredentials { status: StatusCode },
    #[error("Received status code '{status}' indicating an error:\n  {error}")]
    Fabric {
        status: StatusCode,
        error: FabricError,
    },
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("Could not convert message body:\n  {0}")]
    Conversion(#[from] ConversionError),
}

impl ClientError {
    /// Whether the operation may succeed when retried unchanged.
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Fabric { error, .. } => error.is_transient(),
            ClientError::Request(RequestError::Request(cause)) => cause.is_timeout() || cause.is_connect(),
            ClientError::InvalidCredentials { .. }
            | ClientError::Request(RequestError::BodyRead(_))
            | ClientError::Conversion(_) => false,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CreateClientError {
    #[error("Base URL '{url}' is not valid. It must be a fully qualified URL, like 'https://example.com:19080/'.")]
    InvalidBaseUrl { url: String },
    #[error("Failed to instantiate client, due to an error: {cause}")]
    InstantiationFailure {
        cause: String
    },
}
