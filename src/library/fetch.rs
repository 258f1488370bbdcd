use crate::api::error::GatewayError;
use crate::api::gateway::LibraryClient;
use crate::api::models::{Album, Artist, Track};
use tracing::debug;

/// Identifies one issued fetch: the server session it belongs to and a
/// sequence number unique within that session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub session: u64,
    pub seq: u64,
}

/// An asynchronous action a controller transition asks its driver to run.
///
/// The base URL is captured when the request is issued, so a request made
/// before a server change still goes to the old server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Artists {
        ticket: FetchTicket,
        base_url: String,
    },
    Albums {
        ticket: FetchTicket,
        base_url: String,
        artist_id: String,
    },
    Tracks {
        ticket: FetchTicket,
        base_url: String,
        album_id: String,
    },
    Library {
        ticket: FetchTicket,
        base_url: String,
    },
    ServerName {
        ticket: FetchTicket,
        base_url: String,
    },
    Scan {
        ticket: FetchTicket,
        base_url: String,
    },
}

impl FetchRequest {
    pub fn ticket(&self) -> FetchTicket {
        match self {
            Self::Artists { ticket, .. }
            | Self::Albums { ticket, .. }
            | Self::Tracks { ticket, .. }
            | Self::Library { ticket, .. }
            | Self::ServerName { ticket, .. }
            | Self::Scan { ticket, .. } => *ticket,
        }
    }

    pub fn base_url(&self) -> &str {
        match self {
            Self::Artists { base_url, .. }
            | Self::Albums { base_url, .. }
            | Self::Tracks { base_url, .. }
            | Self::Library { base_url, .. }
            | Self::ServerName { base_url, .. }
            | Self::Scan { base_url, .. } => base_url,
        }
    }
}

/// Result of a [`FetchRequest`], carrying the same ticket and selection key.
#[derive(Debug)]
pub enum Completion {
    Artists {
        ticket: FetchTicket,
        result: Result<Vec<Artist>, GatewayError>,
    },
    Albums {
        ticket: FetchTicket,
        artist_id: String,
        result: Result<Vec<Album>, GatewayError>,
    },
    Tracks {
        ticket: FetchTicket,
        album_id: String,
        result: Result<Vec<Track>, GatewayError>,
    },
    Library {
        ticket: FetchTicket,
        result: Result<Vec<Track>, GatewayError>,
    },
    ServerName {
        ticket: FetchTicket,
        result: Result<String, GatewayError>,
    },
    Scan {
        ticket: FetchTicket,
        result: Result<(), GatewayError>,
    },
}

/// Runs one request against the gateway. Never fails: errors travel inside
/// the completion so the controller can turn them into state.
pub async fn execute(request: FetchRequest) -> Completion {
    let client = LibraryClient::new(request.base_url());
    debug!(?request, "executing fetch");
    match request {
        FetchRequest::Artists { ticket, .. } => Completion::Artists {
            ticket,
            result: client.list_artists().await,
        },
        FetchRequest::Albums {
            ticket, artist_id, ..
        } => {
            let result = client.list_albums(&artist_id).await;
            Completion::Albums {
                ticket,
                artist_id,
                result,
            }
        }
        FetchRequest::Tracks {
            ticket, album_id, ..
        } => {
            let result = client.list_tracks(&album_id).await;
            Completion::Tracks {
                ticket,
                album_id,
                result,
            }
        }
        FetchRequest::Library { ticket, .. } => Completion::Library {
            ticket,
            result: client.list_library().await,
        },
        FetchRequest::ServerName { ticket, .. } => Completion::ServerName {
            ticket,
            result: client.server_name().await,
        },
        FetchRequest::Scan { ticket, .. } => Completion::Scan {
            ticket,
            result: client.trigger_scan().await,
        },
    }
}
