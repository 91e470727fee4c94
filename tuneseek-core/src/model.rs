//! Track model and its catalog wire format

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Resolution token the catalog bakes into small artwork URLs
const SMALL_ARTWORK_TOKEN: &str = "100x100";

/// One song record returned by the catalog.
///
/// Immutable once fetched; the store only ever replaces whole result lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: i64,
    pub name: String,
    pub artist_name: String,
    pub collection_name: Option<String>,
    pub artwork_url_small: String,
    pub preview_url: Option<String>,
    pub genre: String,
    pub release_date: Option<String>,
}

impl Track {
    /// Artwork URL rescaled to `size`x`size` by swapping the resolution token.
    pub fn artwork_url(&self, size: u32) -> String {
        self.artwork_url_small
            .replace(SMALL_ARTWORK_TOKEN, &format!("{size}x{size}"))
    }

    /// Release date as a short human date, falling back to the raw string.
    pub fn release_date_label(&self) -> Option<String> {
        let raw = self.release_date.as_deref()?;
        match DateTime::parse_from_rfc3339(raw) {
            Ok(date) => Some(date.format("%b %-d, %Y").to_string()),
            Err(_) => Some(raw.to_string()),
        }
    }

    /// Whether `route_id` (a path segment) names this track
    pub fn matches_id(&self, route_id: &str) -> bool {
        route_id.trim().parse::<i64>().ok() == Some(self.id)
    }
}

/// Catalog result row as it appears on the wire
#[derive(Deserialize)]
pub(crate) struct CatalogTrack {
    #[serde(rename = "trackId")]
    track_id: i64,
    #[serde(rename = "trackName")]
    track_name: String,
    #[serde(rename = "artistName", default)]
    artist_name: String,
    #[serde(rename = "collectionName")]
    collection_name: Option<String>,
    #[serde(rename = "artworkUrl100", default)]
    artwork_url_100: String,
    #[serde(rename = "previewUrl")]
    preview_url: Option<String>,
    #[serde(rename = "primaryGenreName", default)]
    primary_genre_name: String,
    #[serde(rename = "releaseDate")]
    release_date: Option<String>,
}

impl From<CatalogTrack> for Track {
    fn from(row: CatalogTrack) -> Self {
        Track {
            id: row.track_id,
            name: row.track_name,
            artist_name: row.artist_name,
            collection_name: row.collection_name,
            artwork_url_small: row.artwork_url_100,
            preview_url: row.preview_url,
            genre: row.primary_genre_name,
            release_date: row.release_date,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_track(id: i64, name: &str) -> Track {
    Track {
        id,
        name: name.to_string(),
        artist_name: "The Beatles".to_string(),
        collection_name: Some("Abbey Road".to_string()),
        artwork_url_small: format!("https://is1.example/{id}/100x100bb.jpg"),
        preview_url: Some(format!("https://audio.example/{id}.m4a")),
        genre: "Rock".to_string(),
        release_date: Some("1969-09-26T07:00:00Z".to_string()),
    }
}
