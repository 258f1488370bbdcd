use crate::api::models::{Album, Artist, Track};
use crate::config::ClientConfig;
use crate::library::endpoint::ServerEndpoint;
use crate::library::fetch::{Completion, FetchRequest, FetchTicket};
use crate::library::normalize::normalize_tracks;
use crate::library::playback::PlaybackTracker;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    ArtistSelected,
    AlbumSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Artists,
    Albums,
    Tracks,
    Library,
    ServerName,
    Scan,
}

/// Latest outstanding ticket per slot. A completion is applied only when its
/// ticket is the one stored here; anything else is stale.
#[derive(Debug, Clone, Default)]
struct PendingFetches {
    artists: Option<FetchTicket>,
    albums: Option<FetchTicket>,
    tracks: Option<FetchTicket>,
    library: Option<FetchTicket>,
    server_name: Option<FetchTicket>,
    scan: Option<FetchTicket>,
}

/// Session state tree for library browsing.
///
/// Every mutation goes through a transition method that updates the whole
/// tree in one call and returns the fetches the caller must run. Results come
/// back through [`SelectionController::apply`] in any order; a result whose
/// ticket or selection key is no longer current is dropped.
#[derive(Debug, Clone)]
pub struct SelectionController {
    config: ClientConfig,
    endpoint: ServerEndpoint,
    playback: PlaybackTracker,
    session: u64,
    next_seq: u64,
    pending: PendingFetches,
    artists: Vec<Artist>,
    selected_artist: Option<Artist>,
    albums: Vec<Album>,
    selected_album: Option<Album>,
    tracks: Vec<Track>,
    library: Vec<Track>,
    library_requested: bool,
    server_name: String,
}

impl SelectionController {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            endpoint: ServerEndpoint::new(&config.server_url),
            server_name: config.fallback_server_name.clone(),
            playback: PlaybackTracker::new(),
            session: 0,
            next_seq: 0,
            pending: PendingFetches::default(),
            artists: Vec::new(),
            selected_artist: None,
            albums: Vec::new(),
            selected_album: None,
            tracks: Vec::new(),
            library: Vec::new(),
            library_requested: false,
            config,
        }
    }

    // -- accessors ---------------------------------------------------------

    pub fn phase(&self) -> SelectionPhase {
        match (&self.selected_artist, &self.selected_album) {
            (None, _) => SelectionPhase::Idle,
            (Some(_), None) => SelectionPhase::ArtistSelected,
            (Some(_), Some(_)) => SelectionPhase::AlbumSelected,
        }
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn selected_artist(&self) -> Option<&Artist> {
        self.selected_artist.as_ref()
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn selected_album(&self) -> Option<&Album> {
        self.selected_album.as_ref()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn library(&self) -> &[Track] {
        &self.library
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn endpoint(&self) -> &ServerEndpoint {
        &self.endpoint
    }

    pub fn playback(&self) -> &PlaybackTracker {
        &self.playback
    }

    pub fn artists_loading(&self) -> bool {
        self.pending.artists.is_some()
    }

    pub fn albums_loading(&self) -> bool {
        self.pending.albums.is_some()
    }

    pub fn tracks_loading(&self) -> bool {
        self.pending.tracks.is_some()
    }

    pub fn library_loading(&self) -> bool {
        self.pending.library.is_some()
    }

    pub fn scan_in_progress(&self) -> bool {
        self.pending.scan.is_some()
    }

    /// Playing track's metadata from the album list, then the library list.
    pub fn now_playing(&self) -> Option<&Track> {
        self.playback
            .now_playing(&self.tracks)
            .or_else(|| self.playback.now_playing(&self.library))
    }

    // -- ticket bookkeeping ------------------------------------------------

    fn pending_mut(&mut self, slot: Slot) -> &mut Option<FetchTicket> {
        match slot {
            Slot::Artists => &mut self.pending.artists,
            Slot::Albums => &mut self.pending.albums,
            Slot::Tracks => &mut self.pending.tracks,
            Slot::Library => &mut self.pending.library,
            Slot::ServerName => &mut self.pending.server_name,
            Slot::Scan => &mut self.pending.scan,
        }
    }

    fn issue(&mut self, slot: Slot) -> FetchTicket {
        self.next_seq += 1;
        let ticket = FetchTicket {
            session: self.session,
            seq: self.next_seq,
        };
        *self.pending_mut(slot) = Some(ticket);
        ticket
    }

    /// Consumes the slot's outstanding ticket if `ticket` is it.
    fn accept(&mut self, slot: Slot, ticket: FetchTicket) -> bool {
        let pending = self.pending_mut(slot);
        if *pending == Some(ticket) {
            *pending = None;
            true
        } else {
            debug!(?slot, ?ticket, "dropping stale response");
            false
        }
    }

    fn base_url(&self) -> String {
        self.endpoint.base_url().to_string()
    }

    // -- requests ----------------------------------------------------------

    /// Initial fetch sequence against the current server.
    pub fn start(&mut self) -> Vec<FetchRequest> {
        vec![self.refresh_artists(), self.refresh_server_name()]
    }

    pub fn refresh_artists(&mut self) -> FetchRequest {
        FetchRequest::Artists {
            ticket: self.issue(Slot::Artists),
            base_url: self.base_url(),
        }
    }

    fn refresh_server_name(&mut self) -> FetchRequest {
        FetchRequest::ServerName {
            ticket: self.issue(Slot::ServerName),
            base_url: self.base_url(),
        }
    }

    fn refresh_tracks(&mut self, album_id: String) -> FetchRequest {
        FetchRequest::Tracks {
            ticket: self.issue(Slot::Tracks),
            base_url: self.base_url(),
            album_id,
        }
    }

    /// Unfiltered listing of the whole library.
    pub fn load_library(&mut self) -> FetchRequest {
        self.library_requested = true;
        FetchRequest::Library {
            ticket: self.issue(Slot::Library),
            base_url: self.base_url(),
        }
    }

    /// Asks the server to rescan; the affected track lists are refetched when
    /// the scan call returns.
    pub fn request_rescan(&mut self) -> FetchRequest {
        FetchRequest::Scan {
            ticket: self.issue(Slot::Scan),
            base_url: self.base_url(),
        }
    }

    // -- user transitions --------------------------------------------------

    pub fn select_artist(&mut self, artist: Artist) -> Option<FetchRequest> {
        if self
            .selected_artist
            .as_ref()
            .is_some_and(|current| current.id == artist.id)
        {
            return None;
        }

        let ticket = self.issue(Slot::Albums);
        let artist_id = artist.id.clone();
        debug!(%artist_id, "artist selected");
        self.selected_artist = Some(artist);
        self.albums.clear();
        self.selected_album = None;
        self.tracks.clear();
        self.pending.tracks = None;

        Some(FetchRequest::Albums {
            ticket,
            base_url: self.base_url(),
            artist_id,
        })
    }

    /// Rejects albums that do not belong to the selected artist.
    pub fn select_album(&mut self, album: Album) -> Option<FetchRequest> {
        let Some(artist) = self.selected_artist.as_ref() else {
            warn!(album_id = %album.id, "album selected with no artist selected");
            return None;
        };
        if album.artist_id != artist.id {
            warn!(
                album_id = %album.id,
                album_artist = %album.artist_id,
                selected_artist = %artist.id,
                "album does not belong to the selected artist"
            );
            return None;
        }
        if self
            .selected_album
            .as_ref()
            .is_some_and(|current| current.id == album.id)
        {
            return None;
        }

        let album_id = album.id.clone();
        debug!(%album_id, "album selected");
        self.selected_album = Some(album);
        self.tracks.clear();
        Some(self.refresh_tracks(album_id))
    }

    /// Switches servers: selection and fetched data reset, in-flight results
    /// from the old server are dropped, and the initial fetches run again.
    /// Playback is left alone.
    pub fn set_server_url(&mut self, raw: &str) -> Vec<FetchRequest> {
        if !self.endpoint.set_base_url(raw) {
            warn!(url = raw, "ignoring empty server url");
            return Vec::new();
        }
        info!(url = %self.endpoint.base_url(), "server url changed");

        self.session += 1;
        self.pending = PendingFetches::default();
        self.artists.clear();
        self.selected_artist = None;
        self.albums.clear();
        self.selected_album = None;
        self.tracks.clear();
        self.library.clear();
        self.library_requested = false;
        self.server_name = self.config.fallback_server_name.clone();

        self.start()
    }

    /// Hands `track_id` to the player. Only ids visible in the current album
    /// or library list are accepted.
    pub fn play(&mut self, track_id: &str) -> bool {
        let visible = self
            .tracks
            .iter()
            .chain(self.library.iter())
            .any(|track| track.id == track_id);
        if !visible {
            warn!(track_id, "refusing to play a track that is not listed");
            return false;
        }

        self.playback.play(&self.endpoint.client(), track_id);
        true
    }

    // -- network completions -----------------------------------------------

    pub fn apply(&mut self, completion: Completion) -> Vec<FetchRequest> {
        match completion {
            Completion::Artists { ticket, result } => {
                if !self.accept(Slot::Artists, ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(artists) => {
                        self.endpoint.record_listing(true);
                        self.artists = artists;
                        if self.config.auto_select_first && self.selected_artist.is_none() {
                            if let Some(first) = self.artists.first().cloned() {
                                return self.select_artist(first).into_iter().collect();
                            }
                        }
                    }
                    Err(err) => {
                        warn!(%err, "artist listing failed; server marked unreachable");
                        self.endpoint.record_listing(false);
                        self.artists.clear();
                    }
                }
                Vec::new()
            }
            Completion::Albums {
                ticket,
                artist_id,
                result,
            } => {
                let still_selected = self
                    .selected_artist
                    .as_ref()
                    .is_some_and(|artist| artist.id == artist_id);
                if !still_selected || !self.accept(Slot::Albums, ticket) {
                    debug!(%artist_id, "dropping albums for superseded artist");
                    return Vec::new();
                }

                self.selected_album = None;
                self.tracks.clear();
                self.pending.tracks = None;
                match result {
                    Ok(albums) => {
                        self.albums = adopt_albums(albums, &artist_id);
                        if self.config.auto_select_first {
                            if let Some(first) = self.albums.first().cloned() {
                                return self.select_album(first).into_iter().collect();
                            }
                        }
                    }
                    Err(err) => {
                        warn!(%err, %artist_id, "album listing failed");
                        self.albums.clear();
                    }
                }
                Vec::new()
            }
            Completion::Tracks {
                ticket,
                album_id,
                result,
            } => {
                let still_selected = self
                    .selected_album
                    .as_ref()
                    .is_some_and(|album| album.id == album_id);
                if !still_selected || !self.accept(Slot::Tracks, ticket) {
                    debug!(%album_id, "dropping tracks for superseded album");
                    return Vec::new();
                }

                match result {
                    Ok(tracks) => self.tracks = normalize_tracks(tracks),
                    Err(err) => {
                        warn!(%err, %album_id, "track listing failed");
                        self.tracks.clear();
                    }
                }
                Vec::new()
            }
            Completion::Library { ticket, result } => {
                if !self.accept(Slot::Library, ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(tracks) => {
                        self.endpoint.record_listing(true);
                        self.library = normalize_tracks(tracks);
                    }
                    Err(err) => {
                        warn!(%err, "library listing failed; server marked unreachable");
                        self.endpoint.record_listing(false);
                        self.library.clear();
                    }
                }
                Vec::new()
            }
            Completion::ServerName { ticket, result } => {
                if !self.accept(Slot::ServerName, ticket) {
                    return Vec::new();
                }
                self.server_name = match result {
                    Ok(name) if !name.trim().is_empty() => name.trim().to_string(),
                    Ok(_) => self.config.fallback_server_name.clone(),
                    Err(err) => {
                        debug!(%err, "server name unavailable, using fallback");
                        self.config.fallback_server_name.clone()
                    }
                };
                Vec::new()
            }
            Completion::Scan { ticket, result } => {
                if !self.accept(Slot::Scan, ticket) {
                    return Vec::new();
                }
                if let Err(err) = result {
                    warn!(%err, "rescan request failed");
                }

                let mut followups = Vec::new();
                if let Some(album_id) = self.selected_album.as_ref().map(|album| album.id.clone())
                {
                    followups.push(self.refresh_tracks(album_id));
                }
                if self.library_requested {
                    followups.push(self.load_library());
                }
                followups
            }
        }
    }
}

/// Albums from a listing scoped to `artist_id`: missing owners are filled in,
/// albums owned by someone else are dropped.
fn adopt_albums(albums: Vec<Album>, artist_id: &str) -> Vec<Album> {
    albums
        .into_iter()
        .filter_map(|mut album| {
            if album.artist_id.is_empty() {
                album.artist_id = artist_id.to_string();
            }
            if album.artist_id == artist_id {
                Some(album)
            } else {
                warn!(album_id = %album.id, owner = %album.artist_id, %artist_id, "dropping album listed under another artist");
                None
            }
        })
        .collect()
}
