//! Bundled demo catalog.
//!
//! The surface itself never fetches anything; this module plays the part of
//! the external library/lyrics providers so the binary runs standalone. The
//! engine looks up durations and synced lyrics here by track id.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::models::{LyricLine, Track};

const CATALOG_JSON: &str = include_str!("../assets/demo_catalog.json");

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub track: Track,
    pub duration_seconds: f64,
    #[serde(default)]
    pub synced_lyrics: Vec<LyricLine>,
}

static CATALOG: Lazy<Vec<CatalogEntry>> =
    Lazy::new(|| serde_json::from_str(CATALOG_JSON).unwrap_or_default());

/// The bundled tracks in playback order, as the initial queue.
pub fn demo_queue() -> Vec<Track> {
    CATALOG.iter().map(|entry| entry.track.clone()).collect()
}

pub fn duration_for(track_id: &str) -> f64 {
    CATALOG
        .iter()
        .find(|entry| entry.track.id == track_id)
        .map(|entry| entry.duration_seconds.max(0.0))
        .unwrap_or(0.0)
}

pub fn lyrics_for(track_id: &str) -> Vec<LyricLine> {
    CATALOG
        .iter()
        .find(|entry| entry.track.id == track_id)
        .map(|entry| entry.synced_lyrics.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        assert!(!CATALOG.is_empty());
        for entry in CATALOG.iter() {
            assert!(!entry.track.id.is_empty());
            assert!(entry.duration_seconds > 0.0);
        }
    }

    #[test]
    fn synced_lyrics_are_sorted_and_inside_the_track() {
        for entry in CATALOG.iter() {
            let mut previous = f64::MIN;
            for line in &entry.synced_lyrics {
                assert!(line.timestamp_seconds >= previous, "{}", entry.track.title);
                assert!(line.timestamp_seconds < entry.duration_seconds);
                previous = line.timestamp_seconds;
            }
        }
    }

    #[test]
    fn lookups_by_unknown_id_fall_back_to_empty_values() {
        assert_eq!(duration_for("missing"), 0.0);
        assert!(lyrics_for("missing").is_empty());
    }
}
