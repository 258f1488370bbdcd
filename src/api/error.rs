use std::fmt;
use thiserror::Error;

/// Which gateway call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOperation {
    ListArtists,
    ListAlbums,
    ListTracks,
    ListLibrary,
    ServerName,
    TriggerScan,
}

impl GatewayOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListArtists => "list artists",
            Self::ListAlbums => "list albums",
            Self::ListTracks => "list tracks",
            Self::ListLibrary => "list library",
            Self::ServerName => "server name",
            Self::TriggerScan => "trigger scan",
        }
    }
}

impl fmt::Display for GatewayOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum GatewayErrorKind {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Body(#[source] serde_json::Error),
}

/// The single failure kind surfaced by the remote library gateway.
#[derive(Debug, Error)]
#[error("{operation} failed at {endpoint}: {kind}")]
pub struct GatewayError {
    pub operation: GatewayOperation,
    pub endpoint: String,
    #[source]
    pub kind: GatewayErrorKind,
}

impl GatewayError {
    pub fn network(
        operation: GatewayOperation,
        endpoint: impl Into<String>,
        err: reqwest::Error,
    ) -> Self {
        Self {
            operation,
            endpoint: endpoint.into(),
            kind: GatewayErrorKind::Network(err),
        }
    }

    pub fn status(
        operation: GatewayOperation,
        endpoint: impl Into<String>,
        status: reqwest::StatusCode,
    ) -> Self {
        Self {
            operation,
            endpoint: endpoint.into(),
            kind: GatewayErrorKind::Status(status),
        }
    }

    pub fn body(
        operation: GatewayOperation,
        endpoint: impl Into<String>,
        err: serde_json::Error,
    ) -> Self {
        Self {
            operation,
            endpoint: endpoint.into(),
            kind: GatewayErrorKind::Body(err),
        }
    }
}
