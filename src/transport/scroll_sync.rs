//! User-scroll override for the auto-tracking lyrics pane.
//!
//! The pane follows the active line until the user scrolls it by hand; a
//! quiet window then has to elapse with no further scrolling before
//! auto-tracking resumes. All timing flows through caller-supplied clock
//! readings in milliseconds so the transitions can be driven directly.

/// How long the pane stays hands-off after the last user scroll.
pub const QUIET_WINDOW_MS: f64 = 1500.0;

/// Scroll events landing this soon after a programmatic scroll are echoes of
/// that scroll, not user input, and must not arm the override.
pub const SELF_SCROLL_GUARD_MS: f64 = 250.0;

/// `AutoTracking` (no deadline) or `UserOverride` (deadline armed).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOverride {
    quiet_until: Option<f64>,
}

impl ScrollOverride {
    /// A user scroll arrived: enter (or stay in) `UserOverride` and restart
    /// the quiet window. Only the latest deadline counts.
    pub fn note_user_scroll(&mut self, now: f64) {
        self.quiet_until = Some(now + QUIET_WINDOW_MS);
    }

    /// True while programmatic scrolling is suppressed.
    pub fn is_user_scrolling(&self, now: f64) -> bool {
        matches!(self.quiet_until, Some(deadline) if now < deadline)
    }

    /// Perform the `UserOverride -> AutoTracking` transition if the quiet
    /// window has elapsed. Returns true exactly when this call made the
    /// transition, i.e. when the caller owes one catch-up centering scroll.
    pub fn try_resume(&mut self, now: f64) -> bool {
        match self.quiet_until {
            Some(deadline) if now >= deadline => {
                self.quiet_until = None;
                true
            }
            _ => false,
        }
    }
}

/// Scroll offset that vertically centers a child at `line_top` inside a
/// container of the given visible height, clamped to the top of the content.
pub fn center_scroll_target(line_top: f64, container_height: f64) -> f64 {
    if !line_top.is_finite() || !container_height.is_finite() {
        return 0.0;
    }
    (line_top - container_height / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_out_auto_tracking() {
        let sync = ScrollOverride::default();
        assert!(!sync.is_user_scrolling(0.0));
    }

    #[test]
    fn user_scroll_suppresses_tracking_for_the_quiet_window() {
        let mut sync = ScrollOverride::default();
        sync.note_user_scroll(1_000.0);
        // 200ms after the scroll the override is still holding.
        assert!(sync.is_user_scrolling(1_200.0));
        assert!(!sync.try_resume(1_200.0));
        // Once the window elapses the resume fires, exactly once.
        assert!(sync.try_resume(1_000.0 + QUIET_WINDOW_MS));
        assert!(!sync.try_resume(1_000.0 + QUIET_WINDOW_MS));
        assert!(!sync.is_user_scrolling(1_000.0 + QUIET_WINDOW_MS));
    }

    #[test]
    fn repeated_scrolls_coalesce_into_one_live_deadline() {
        let mut sync = ScrollOverride::default();
        let mut now = 0.0;
        // Scrolls every 500ms, each inside the previous window, keep the
        // override alive indefinitely.
        for _ in 0..10 {
            sync.note_user_scroll(now);
            now += 500.0;
            assert!(sync.is_user_scrolling(now));
            assert!(!sync.try_resume(now));
        }
        // Only the latest deadline matters: a gap past it resumes tracking.
        assert!(sync.try_resume(now + QUIET_WINDOW_MS));
    }

    #[test]
    fn resume_is_observable_only_after_the_latest_deadline() {
        let mut sync = ScrollOverride::default();
        sync.note_user_scroll(0.0);
        sync.note_user_scroll(800.0);
        // The first scroll's deadline has passed, the rearmed one has not.
        assert!(sync.is_user_scrolling(1_600.0));
        assert!(!sync.try_resume(1_600.0));
        assert!(sync.try_resume(800.0 + QUIET_WINDOW_MS));
    }

    #[test]
    fn center_target_clamps_to_the_top() {
        assert_eq!(center_scroll_target(40.0, 600.0), 0.0);
        assert_eq!(center_scroll_target(500.0, 600.0), 200.0);
        assert_eq!(center_scroll_target(f64::NAN, 600.0), 0.0);
    }
}
