//! Mute toggle with restore-previous-volume semantics.

/// Volume adopted on unmute when no usable level was recorded.
pub const DEFAULT_RESTORE_VOLUME: f64 = 1.0;

/// Remembers the last audible level across a mute so unmuting can restore
/// it. Muting at level 0 records nothing, so the unmute falls back to the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VolumeMemory {
    muted: bool,
    restore: Option<f64>,
}

impl VolumeMemory {
    /// Flip the mute state; returns the level the output should adopt.
    pub fn toggle(&mut self, current: f64) -> f64 {
        if self.muted {
            self.muted = false;
            self.restore
                .take()
                .filter(|level| *level > 0.0)
                .unwrap_or(DEFAULT_RESTORE_VOLUME)
        } else {
            self.muted = true;
            if current > 0.0 {
                self.restore = Some(current);
            }
            0.0
        }
    }

    /// The slider moved. Dragging to zero counts as muting; any audible
    /// level clears the mute.
    pub fn set_level(&mut self, level: f64) -> f64 {
        let level = if level.is_finite() {
            level.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.muted = level == 0.0;
        level
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

/// Icon tier for the current output level.
pub fn volume_icon(volume: f64, muted: bool) -> &'static str {
    if muted || volume <= 0.0 {
        "volume-x"
    } else if volume < 0.5 {
        "volume-1"
    } else {
        "volume-2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmute_restores_the_level_recorded_at_mute_time() {
        let mut memory = VolumeMemory::default();
        assert_eq!(memory.toggle(0.7), 0.0);
        assert!(memory.is_muted());
        assert_eq!(memory.toggle(0.0), 0.7);
        assert!(!memory.is_muted());
    }

    #[test]
    fn unmute_with_nothing_recorded_falls_back_to_full_volume() {
        let mut memory = VolumeMemory::default();
        assert_eq!(memory.toggle(0.0), 0.0);
        assert_eq!(memory.toggle(0.0), DEFAULT_RESTORE_VOLUME);
    }

    #[test]
    fn slider_to_zero_reads_as_muted() {
        let mut memory = VolumeMemory::default();
        assert_eq!(memory.set_level(0.0), 0.0);
        assert!(memory.is_muted());
        assert_eq!(memory.set_level(0.4), 0.4);
        assert!(!memory.is_muted());
    }

    #[test]
    fn slider_levels_are_normalized() {
        let mut memory = VolumeMemory::default();
        assert_eq!(memory.set_level(3.0), 1.0);
        assert_eq!(memory.set_level(-1.0), 0.0);
        assert_eq!(memory.set_level(f64::NAN), 0.0);
    }

    #[test]
    fn icon_tiers_follow_the_level() {
        assert_eq!(volume_icon(0.7, true), "volume-x");
        assert_eq!(volume_icon(0.0, false), "volume-x");
        assert_eq!(volume_icon(0.3, false), "volume-1");
        assert_eq!(volume_icon(0.5, false), "volume-2");
    }
}
