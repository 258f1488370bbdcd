// Read-oriented browsing calls plus the rescan trigger.
impl LibraryClient {
    pub async fn list_artists(&self) -> Result<Vec<Artist>, GatewayError> {
        let url = self.build_url("/api/library/artists", &[]);
        self.get_json(GatewayOperation::ListArtists, url).await
    }

    pub async fn list_albums(&self, artist_id: &str) -> Result<Vec<Album>, GatewayError> {
        let url = self.build_url("/api/library/albums", &[("artistId", artist_id)]);
        self.get_json(GatewayOperation::ListAlbums, url).await
    }

    /// Album-scoped listing; the server wraps it as `{ "tracks": [...] }`.
    pub async fn list_tracks(&self, album_id: &str) -> Result<Vec<Track>, GatewayError> {
        let url = self.build_url("/api/library/tracks", &[("albumId", album_id)]);
        let envelope: TracksEnvelope = self.get_json(GatewayOperation::ListTracks, url).await?;
        Ok(envelope.tracks)
    }

    /// Unfiltered listing of the entire library, returned as a bare array.
    pub async fn list_library(&self) -> Result<Vec<Track>, GatewayError> {
        let url = self.build_url("/api/library/tracks", &[]);
        self.get_json(GatewayOperation::ListLibrary, url).await
    }

    pub async fn server_name(&self) -> Result<String, GatewayError> {
        let url = self.build_url("/api/settings/server-name", &[]);
        let response: ServerNameResponse = self.get_json(GatewayOperation::ServerName, url).await?;
        Ok(response.server_name)
    }

    /// Asks the server to rescan its library. The response body is ignored.
    pub async fn trigger_scan(&self) -> Result<(), GatewayError> {
        let operation = GatewayOperation::TriggerScan;
        let url = self.build_url("/api/library/scan", &[]);
        debug!(%operation, %url, "gateway request");
        let response = HTTP_CLIENT
            .post(&url)
            .send()
            .await
            .map_err(|e| GatewayError::network(operation, &url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::status(operation, url, status));
        }
        Ok(())
    }
}
