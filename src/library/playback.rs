use crate::api::gateway::LibraryClient;
use crate::api::models::Track;

/// The single authoritative "now playing" identity handed to the audio player.
///
/// The stream URL and the playing id are only ever set together, so a URL is
/// never present without its track id. A new `play` replaces both; there is no
/// explicit stop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackTracker {
    playing_track_id: Option<String>,
    stream_url: Option<String>,
}

impl PlaybackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the player at `track_id` on the server `client` talks to.
    pub fn play(&mut self, client: &LibraryClient, track_id: &str) {
        self.stream_url = Some(client.stream_url(track_id));
        self.playing_track_id = Some(track_id.to_string());
    }

    pub fn playing_track_id(&self) -> Option<&str> {
        self.playing_track_id.as_deref()
    }

    pub fn stream_url(&self) -> Option<&str> {
        self.stream_url.as_deref()
    }

    pub fn is_playing(&self, track_id: &str) -> bool {
        self.playing_track_id.as_deref() == Some(track_id)
    }

    /// Metadata for the playing track, if it is still in `tracks`.
    pub fn now_playing<'a>(&self, tracks: &'a [Track]) -> Option<&'a Track> {
        let id = self.playing_track_id.as_deref()?;
        tracks.iter().find(|track| track.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_play_replaces_earlier() {
        let client = LibraryClient::new("http://host:5279");
        let mut playback = PlaybackTracker::new();
        playback.play(&client, "7");
        playback.play(&client, "9");

        assert_eq!(playback.playing_track_id(), Some("9"));
        assert_eq!(playback.stream_url(), Some("http://host:5279/api/music/stream/9"));
        assert!(!playback.is_playing("7"));
    }

    #[test]
    fn now_playing_is_empty_when_track_left_the_list() {
        let mut playback = PlaybackTracker::new();
        assert!(playback.now_playing(&[]).is_none());

        playback.play(&LibraryClient::new("http://host"), "9");
        let visible = vec![Track {
            id: "9".to_string(),
            title: "Warszawa".to_string(),
            ..Default::default()
        }];
        assert_eq!(playback.now_playing(&visible).map(|t| t.title.as_str()), Some("Warszawa"));
        assert!(playback.now_playing(&[]).is_none());
        assert!(playback.stream_url().is_some());
    }
}
