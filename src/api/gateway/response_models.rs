// Envelope types for endpoints that do not return a bare collection.
#[derive(Debug, Deserialize)]
struct TracksEnvelope {
    tracks: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct ServerNameResponse {
    #[serde(alias = "serverName")]
    server_name: String,
}
