//! Drag state for the seekbar.
//!
//! The track displays an externally supplied progress ratio until a press
//! lands on it; from then until release the provisional drag ratio wins, and
//! the external clock is ignored. Release reports the position to commit
//! exactly once.

/// Normalized position of a pointer along the track.
///
/// A zero or non-finite track width yields 0 so a collapsed layout can never
/// produce NaN; coordinates outside the track clamp to the ends.
pub fn seek_ratio(client_x: f64, track_left: f64, track_width: f64) -> f64 {
    if !track_width.is_finite() || track_width <= 0.0 || !client_x.is_finite() {
        return 0.0;
    }
    ((client_x - track_left) / track_width).clamp(0.0, 1.0)
}

/// Seekbar gesture session: `Idle` until a press, `Dragging` until release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SeekDrag {
    #[default]
    Idle,
    Dragging {
        ratio: f64,
    },
}

impl SeekDrag {
    /// Press on the track: enter `Dragging` at the press coordinate without
    /// waiting for movement.
    pub fn press(&mut self, client_x: f64, track_left: f64, track_width: f64) {
        *self = SeekDrag::Dragging {
            ratio: seek_ratio(client_x, track_left, track_width),
        };
    }

    /// Pointer moved while the gesture is live. A move with no prior press is
    /// a no-op.
    pub fn drag_to(&mut self, client_x: f64, track_left: f64, track_width: f64) {
        if let SeekDrag::Dragging { ratio } = self {
            *ratio = seek_ratio(client_x, track_left, track_width);
        }
    }

    /// Release ends the session and returns the position to commit, scaled
    /// by `total`. Returns None when idle (release without press) and when
    /// the duration is non-positive or non-finite, in which case nothing may
    /// be committed.
    pub fn release(&mut self, total: f64) -> Option<f64> {
        match *self {
            SeekDrag::Idle => None,
            SeekDrag::Dragging { ratio } => {
                *self = SeekDrag::Idle;
                (total.is_finite() && total > 0.0).then_some(ratio * total)
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, SeekDrag::Dragging { .. })
    }

    /// Ratio the track should render: the provisional drag ratio while a
    /// session is live, the external progress otherwise.
    pub fn displayed_ratio(&self, progress: f64) -> f64 {
        match *self {
            SeekDrag::Dragging { ratio } => ratio,
            SeekDrag::Idle => {
                if progress.is_finite() {
                    progress.clamp(0.0, 1.0)
                } else {
                    0.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK_LEFT: f64 = 100.0;
    const TRACK_WIDTH: f64 = 400.0;

    #[test]
    fn ratio_clamps_coordinates_outside_the_track() {
        assert_eq!(seek_ratio(40.0, TRACK_LEFT, TRACK_WIDTH), 0.0);
        assert_eq!(seek_ratio(900.0, TRACK_LEFT, TRACK_WIDTH), 1.0);
        assert_eq!(seek_ratio(300.0, TRACK_LEFT, TRACK_WIDTH), 0.5);
    }

    #[test]
    fn ratio_survives_degenerate_track_geometry() {
        assert_eq!(seek_ratio(250.0, TRACK_LEFT, 0.0), 0.0);
        assert_eq!(seek_ratio(250.0, TRACK_LEFT, -10.0), 0.0);
        assert_eq!(seek_ratio(250.0, TRACK_LEFT, f64::NAN), 0.0);
        assert_eq!(seek_ratio(f64::NAN, TRACK_LEFT, TRACK_WIDTH), 0.0);
    }

    #[test]
    fn idle_display_mirrors_external_progress() {
        let drag = SeekDrag::default();
        assert_eq!(drag.displayed_ratio(0.25), 0.25);
        // Rendering twice with the same progress cannot drift.
        assert_eq!(drag.displayed_ratio(0.25), 0.25);
        assert_eq!(drag.displayed_ratio(1.7), 1.0);
        assert_eq!(drag.displayed_ratio(f64::NAN), 0.0);
    }

    #[test]
    fn press_adopts_the_press_point_immediately() {
        let mut drag = SeekDrag::default();
        drag.press(340.0, TRACK_LEFT, TRACK_WIDTH);
        assert!(drag.is_dragging());
        assert_eq!(drag.displayed_ratio(0.1), 0.6);
    }

    #[test]
    fn external_progress_is_ignored_while_dragging() {
        let mut drag = SeekDrag::default();
        drag.press(300.0, TRACK_LEFT, TRACK_WIDTH);
        // Clock keeps advancing externally; the displayed ratio must not move.
        assert_eq!(drag.displayed_ratio(0.8), 0.5);
        assert_eq!(drag.displayed_ratio(0.9), 0.5);
        drag.drag_to(400.0, TRACK_LEFT, TRACK_WIDTH);
        assert_eq!(drag.displayed_ratio(0.95), 0.75);
    }

    #[test]
    fn release_commits_once_with_the_final_ratio() {
        let mut drag = SeekDrag::default();
        drag.press(200.0, TRACK_LEFT, TRACK_WIDTH);
        drag.drag_to(260.0, TRACK_LEFT, TRACK_WIDTH);
        drag.drag_to(340.0, TRACK_LEFT, TRACK_WIDTH);
        assert_eq!(drag.release(200.0), Some(120.0));
        // The session is gone; a second release reports nothing.
        assert_eq!(drag.release(200.0), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn release_without_press_is_a_no_op() {
        let mut drag = SeekDrag::default();
        assert_eq!(drag.release(200.0), None);
    }

    #[test]
    fn release_against_unusable_duration_commits_nothing() {
        let mut drag = SeekDrag::default();
        drag.press(340.0, TRACK_LEFT, TRACK_WIDTH);
        assert_eq!(drag.release(0.0), None);

        drag.press(340.0, TRACK_LEFT, TRACK_WIDTH);
        assert_eq!(drag.release(-5.0), None);

        drag.press(340.0, TRACK_LEFT, TRACK_WIDTH);
        assert_eq!(drag.release(f64::NAN), None);
        // The failed commit still ends the session.
        assert!(!drag.is_dragging());
    }

    #[test]
    fn press_drag_release_scenario_at_fixed_clock() {
        // total=200s, elapsed=50s: idle display is 0.25.
        let mut drag = SeekDrag::default();
        assert_eq!(drag.displayed_ratio(50.0 / 200.0), 0.25);

        // Press at ratio 0.6: provisional position 120s is shown immediately.
        drag.press(TRACK_LEFT + 0.6 * TRACK_WIDTH, TRACK_LEFT, TRACK_WIDTH);
        assert_eq!(drag.displayed_ratio(0.25) * 200.0, 120.0);

        // Release without moving: exactly one commit of 120s.
        assert_eq!(drag.release(200.0), Some(120.0));
        assert_eq!(drag.release(200.0), None);
    }
}
