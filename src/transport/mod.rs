//! Pure interaction state machines for the transport surface.
//!
//! These objects own no rendering and no timers; components feed them
//! pointer coordinates, scroll notifications, and clock readings, and apply
//! whatever they return. Keeping them free of UI plumbing is what makes the
//! gesture rules testable.

mod scroll_sync;
mod seek;
mod volume;

pub use scroll_sync::{center_scroll_target, ScrollOverride, QUIET_WINDOW_MS, SELF_SCROLL_GUARD_MS};
pub use seek::{seek_ratio, SeekDrag};
pub use volume::{volume_icon, VolumeMemory, DEFAULT_RESTORE_VOLUME};
