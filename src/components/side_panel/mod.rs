//! Slide-in side panel with the queue, lyrics, and details tabs.

use dioxus::prelude::*;

use crate::components::{Icon, PlayerController, VolumeControl};
use crate::models::{format_duration, AudioQuality, LyricLine};
use crate::transport::{
    center_scroll_target, ScrollOverride, QUIET_WINDOW_MS, SELF_SCROLL_GUARD_MS,
};
use crate::utils::{now_millis, sleep_ms};

// Tab/state/controller definitions shared by all panels.
include!("types.rs");
// Backdrop, panel chrome, and tab dispatch.
include!("overlay.rs");
// Upcoming tracks list.
include!("queue_panel.rs");
// Synced lyrics with auto-centering scroll.
include!("lyrics_panel.rs");
// Track metadata, volume, and quality tab.
include!("details_panel.rs");
