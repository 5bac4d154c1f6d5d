//! Shared data model for the player surface.

use serde::{Deserialize, Serialize};

/// Artist credit attached to a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// Album metadata with the cover art ladder used across the UI.
/// Empty locator strings mean "no art available" and render as a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub title: String,
    #[serde(default)]
    pub cover_small: String,
    #[serde(default)]
    pub cover_medium: String,
    #[serde(default)]
    pub cover_big: String,
    #[serde(default)]
    pub cover_xl: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: Artist,
    pub album: Album,
}

/// One timed lyric line. Lines are kept sorted ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    pub timestamp_seconds: f64,
    pub text: String,
}

/// Repeat mode for playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RepeatMode {
    #[default]
    Off,
    All,
    One,
}

impl RepeatMode {
    /// Advance through the fixed cycle off -> all -> one -> off.
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Streaming quality tier. Cycled in declaration order by the selector button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AudioQuality {
    Max,
    #[default]
    High,
    Normal,
    DataSaver,
}

impl AudioQuality {
    pub fn next(self) -> Self {
        match self {
            AudioQuality::Max => AudioQuality::High,
            AudioQuality::High => AudioQuality::Normal,
            AudioQuality::Normal => AudioQuality::DataSaver,
            AudioQuality::DataSaver => AudioQuality::Max,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AudioQuality::Max => "MAX",
            AudioQuality::High => "HIGH",
            AudioQuality::Normal => "NORMAL",
            AudioQuality::DataSaver => "DATA SAVER",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AudioQuality::Max => "HiFi Plus Quality (24-bit, up to 192kHz)",
            AudioQuality::High => "HiFi Quality (16-bit, 44.1kHz)",
            AudioQuality::Normal => "High Quality (320kbps AAC)",
            AudioQuality::DataSaver => "Data Saver (128kbps AAC)",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            AudioQuality::Max => "crown",
            AudioQuality::High => "star",
            AudioQuality::Normal => "disc",
            AudioQuality::DataSaver => "leaf",
        }
    }
}

/// Format seconds as m:ss. Malformed values render as 0:00 instead of NaN text.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    let mins = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", mins, secs)
}

/// Index of the last line whose timestamp has been reached, or None before
/// the first line (and for empty lyric sets).
pub fn active_lyric_index(lines: &[LyricLine], playback_seconds: f64) -> Option<usize> {
    if lines.is_empty() || !playback_seconds.is_finite() {
        return None;
    }

    let mut active = None;
    for (index, line) in lines.iter().enumerate() {
        if playback_seconds >= line.timestamp_seconds {
            active = Some(index);
        } else {
            break;
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(stamps: &[f64]) -> Vec<LyricLine> {
        stamps
            .iter()
            .map(|stamp| LyricLine {
                timestamp_seconds: *stamp,
                text: format!("line at {stamp}"),
            })
            .collect()
    }

    #[test]
    fn format_duration_renders_minutes_and_padded_seconds() {
        assert_eq!(format_duration(50.0), "0:50");
        assert_eq!(format_duration(120.0), "2:00");
        assert_eq!(format_duration(200.0), "3:20");
        assert_eq!(format_duration(0.0), "0:00");
    }

    #[test]
    fn format_duration_never_renders_nan_text() {
        assert_eq!(format_duration(f64::NAN), "0:00");
        assert_eq!(format_duration(f64::INFINITY), "0:00");
        assert_eq!(format_duration(-3.0), "0:00");
    }

    #[test]
    fn repeat_mode_cycles_through_all_three_states() {
        assert_eq!(RepeatMode::Off.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::Off);
    }

    #[test]
    fn audio_quality_cycles_in_fixed_order() {
        let mut quality = AudioQuality::Max;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(quality);
            quality = quality.next();
        }
        assert_eq!(
            seen,
            vec![
                AudioQuality::Max,
                AudioQuality::High,
                AudioQuality::Normal,
                AudioQuality::DataSaver,
            ]
        );
        assert_eq!(quality, AudioQuality::Max);
    }

    #[test]
    fn active_lyric_index_is_none_before_first_line() {
        let lines = lines(&[5.0, 10.0, 15.0]);
        assert_eq!(active_lyric_index(&lines, 0.0), None);
        assert_eq!(active_lyric_index(&lines, 4.9), None);
    }

    #[test]
    fn active_lyric_index_tracks_the_last_reached_line() {
        let lines = lines(&[5.0, 10.0, 15.0]);
        assert_eq!(active_lyric_index(&lines, 5.0), Some(0));
        assert_eq!(active_lyric_index(&lines, 12.3), Some(1));
        assert_eq!(active_lyric_index(&lines, 99.0), Some(2));
    }

    #[test]
    fn active_lyric_index_handles_degenerate_input() {
        assert_eq!(active_lyric_index(&[], 10.0), None);
        let lines = lines(&[5.0]);
        assert_eq!(active_lyric_index(&lines, f64::NAN), None);
    }
}
