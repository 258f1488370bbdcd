use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Scalar the server may send either as a JSON string or a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Number(serde_json::Number),
}

impl Loose {
    fn into_string(self) -> String {
        match self {
            Loose::Text(text) => text,
            Loose::Number(number) => number.to_string(),
        }
    }
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Loose::deserialize(deserializer).map(Loose::into_string)
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.map(Loose::into_string))
}

fn loose_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_text(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Artist {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, alias = "artistName")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Album {
    #[serde(alias = "albumId", deserialize_with = "id_string")]
    pub id: String,
    /// Empty when the server omitted it; filled in from the listing scope on ingest.
    #[serde(default, alias = "artistId", deserialize_with = "loose_id")]
    pub artist_id: String,
    #[serde(default, alias = "albumName")]
    pub name: String,
    #[serde(default, alias = "releaseYear", deserialize_with = "loose_text")]
    pub release_year: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Track {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, alias = "trackTitle")]
    pub title: String,
    #[serde(default, alias = "artistName")]
    pub artist: String,
    #[serde(default, alias = "albumName")]
    pub album: String,
    #[serde(default)]
    pub genre: Option<String>,
    /// Source-formatted as `hours:minutes:seconds[.fraction]`.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, alias = "trackNumber", deserialize_with = "loose_text")]
    pub track_number: Option<String>,
    #[serde(default, alias = "releaseYear", deserialize_with = "loose_text")]
    pub release_year: Option<String>,
}

impl Track {
    pub fn duration(&self) -> Option<Duration> {
        self.duration.as_deref().and_then(parse_duration)
    }

    pub fn duration_label(&self) -> String {
        self.duration()
            .map(format_duration)
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn release_year_key(&self) -> f64 {
        numeric_key(self.release_year.as_deref())
    }

    pub fn track_number_key(&self) -> f64 {
        numeric_key(self.track_number.as_deref())
    }
}

impl Album {
    pub fn year_label(&self) -> String {
        self.release_year.clone().unwrap_or_default()
    }
}

/// Numeric value of a loosely typed field; missing or non-numeric is 0.
pub fn numeric_key(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parses `h:m:s[.frac]`, `m:s[.frac]` or plain seconds.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let parts: Vec<&str> = raw.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }

    let (whole, last) = parts.split_at(parts.len() - 1);
    let seconds: f64 = last[0].trim().parse().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }

    let mut total = 0u64;
    for part in whole {
        let value: u64 = part.trim().parse().ok()?;
        total = total.checked_mul(60)?.checked_add(value)?;
    }
    let total = total.checked_mul(60)?;
    let seconds = Duration::try_from_secs_f64(seconds).ok()?;

    Duration::from_secs(total).checked_add(seconds)
}

pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}
