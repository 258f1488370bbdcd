use crate::api::models::Track;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Deduplicates a raw track collection by id and sorts it for display.
///
/// When several entries share an id the last one in input order wins and
/// takes that entry's position. The result is ordered by artist, release year,
/// album and track number (strings compared case-insensitively, numbers with
/// missing or non-numeric values as 0). The sort is stable, so running the
/// result through again returns it unchanged.
pub fn normalize_tracks(tracks: Vec<Track>) -> Vec<Track> {
    let mut last_seen: HashMap<String, usize> = HashMap::with_capacity(tracks.len());
    for (index, track) in tracks.iter().enumerate() {
        last_seen.insert(track.id.clone(), index);
    }

    let mut unique: Vec<Track> = tracks
        .into_iter()
        .enumerate()
        .filter(|(index, track)| last_seen.get(&track.id) == Some(index))
        .map(|(_, track)| track)
        .collect();

    unique.sort_by(compare_tracks);
    unique
}

/// Composite display order: artist, release year, album, track number.
pub fn compare_tracks(a: &Track, b: &Track) -> Ordering {
    a.artist
        .to_lowercase()
        .cmp(&b.artist.to_lowercase())
        .then_with(|| a.release_year_key().total_cmp(&b.release_year_key()))
        .then_with(|| a.album.to_lowercase().cmp(&b.album.to_lowercase()))
        .then_with(|| a.track_number_key().total_cmp(&b.track_number_key()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, artist: &str, year: &str, album: &str, number: &str) -> Track {
        Track {
            id: id.to_string(),
            title: format!("track {id}"),
            artist: artist.to_string(),
            album: album.to_string(),
            release_year: Some(year.to_string()),
            track_number: Some(number.to_string()),
            ..Default::default()
        }
    }

    fn ids(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn later_duplicate_wins() {
        let mut stale = track("1", "Bowie", "1977", "Low", "2");
        stale.title = "old title".to_string();
        let fresh = track("1", "Bowie", "1977", "Low", "2");
        let other = track("2", "Bowie", "1977", "Low", "1");

        let normalized = normalize_tracks(vec![stale, other, fresh.clone()]);
        assert_eq!(ids(&normalized), vec!["2", "1"]);
        assert_eq!(normalized[1], fresh);
    }

    #[test]
    fn sorts_by_composite_key() {
        let tracks = vec![
            track("a", "eno", "1975", "Another Green World", "1"),
            track("b", "Bowie", "1977", "Low", "10"),
            track("c", "Bowie", "1977", "Low", "2"),
            track("d", "bowie", "1976", "Station to Station", "1"),
            track("e", "Bowie", "1977", "heroes", "1"),
        ];

        let normalized = normalize_tracks(tracks);
        assert_eq!(ids(&normalized), vec!["d", "e", "c", "b", "a"]);
    }

    #[test]
    fn unparseable_numbers_sort_first() {
        let tracks = vec![
            track("a", "X", "1990", "A", "1"),
            track("b", "X", "unknown", "Z", "1"),
            track("c", "X", "1990", "A", "bonus"),
        ];

        let normalized = normalize_tracks(tracks);
        assert_eq!(ids(&normalized), vec!["b", "c", "a"]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let tracks = vec![
            track("z", "X", "2000", "A", "1"),
            track("y", "x", "2000", "a", "1"),
            track("x", "X", "2000", "A", "1"),
        ];

        let normalized = normalize_tracks(tracks);
        assert_eq!(ids(&normalized), vec!["z", "y", "x"]);
        assert!(normalized
            .windows(2)
            .all(|pair| compare_tracks(&pair[0], &pair[1]) != Ordering::Greater));
    }

    #[test]
    fn normalizing_twice_is_a_no_op() {
        let tracks = vec![
            track("3", "Can", "1971", "Tago Mago", "2"),
            track("1", "Bowie", "1977", "Low", "1"),
            track("3", "Can", "1971", "Tago Mago", "1"),
            track("2", "bowie", "1977", "Low", "1"),
            track("4", "", "", "", ""),
        ];

        let once = normalize_tracks(tracks);
        let twice = normalize_tracks(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 4);
    }

    #[test]
    fn empty_input() {
        assert!(normalize_tracks(Vec::new()).is_empty());
    }
}
