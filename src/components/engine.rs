//! Simulated playback engine.
//!
//! Owns the authoritative playback signals (queue, clock, transport flags)
//! and advances the clock on a timer, standing in for a real audio backend.
//! The UI only talks to [`PlayerController`]; swapping the simulation for a
//! real engine means re-implementing these methods, not the components.

use std::collections::HashSet;

use dioxus::prelude::*;
use rand::seq::SliceRandom;

use crate::catalog;
use crate::models::{active_lyric_index, LyricLine, RepeatMode, Track};
use crate::utils::{now_millis, sleep_ms};

/// Clock granularity of the simulated engine.
const CLOCK_TICK_MS: u64 = 250;

/// Output volume in [0, 1], distributed separately from the controller so the
/// volume widgets stay independent of playback state.
#[derive(Clone, Copy, PartialEq)]
pub struct VolumeSignal(pub Signal<f64>);

/// Mute/restore memory shared by every volume widget on the surface.
#[derive(Clone, Copy, PartialEq)]
pub struct MuteMemorySignal(pub Signal<crate::transport::VolumeMemory>);

/// Handle over the playback signals. Copy, so components and spawned tasks
/// can capture it freely; every read goes through the live signals.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerController {
    queue: Signal<Vec<Track>>,
    queue_index: Signal<usize>,
    now_playing: Signal<Option<Track>>,
    is_playing: Signal<bool>,
    elapsed: Signal<f64>,
    total: Signal<f64>,
    lyric_lines: Signal<Vec<LyricLine>>,
    shuffle_enabled: Signal<bool>,
    repeat_mode: Signal<RepeatMode>,
    liked_ids: Signal<HashSet<String>>,
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            queue: Signal::new(Vec::new()),
            queue_index: Signal::new(0),
            now_playing: Signal::new(None),
            is_playing: Signal::new(false),
            elapsed: Signal::new(0.0),
            total: Signal::new(0.0),
            lyric_lines: Signal::new(Vec::new()),
            shuffle_enabled: Signal::new(false),
            repeat_mode: Signal::new(RepeatMode::Off),
            liked_ids: Signal::new(HashSet::new()),
        }
    }

    // --- observed state ---

    pub fn queue(&self) -> Vec<Track> {
        (self.queue)()
    }

    pub fn queue_index(&self) -> usize {
        (self.queue_index)()
    }

    pub fn now_playing(&self) -> Option<Track> {
        (self.now_playing)()
    }

    pub fn is_playing(&self) -> bool {
        (self.is_playing)()
    }

    pub fn elapsed(&self) -> f64 {
        (self.elapsed)()
    }

    pub fn total(&self) -> f64 {
        (self.total)()
    }

    /// Normalized elapsed/total, 0 when the duration is unusable.
    pub fn progress(&self) -> f64 {
        let total = self.total();
        if total.is_finite() && total > 0.0 {
            (self.elapsed() / total).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn lyric_lines(&self) -> Vec<LyricLine> {
        (self.lyric_lines)()
    }

    /// Index of the lyric line the clock has reached, None before the first.
    pub fn current_lyric_index(&self) -> Option<usize> {
        active_lyric_index(&self.lyric_lines.read(), self.elapsed())
    }

    pub fn shuffle_enabled(&self) -> bool {
        (self.shuffle_enabled)()
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        (self.repeat_mode)()
    }

    pub fn is_liked(&self, track_id: &str) -> bool {
        self.liked_ids.read().contains(track_id)
    }

    // --- transport commands ---

    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        let empty = tracks.is_empty();
        self.queue.set(tracks);
        if empty {
            self.unload();
        } else {
            self.load_index(0, false);
        }
    }

    pub fn toggle_play(&mut self) {
        if self.now_playing.peek().is_none() {
            return;
        }
        let playing = *self.is_playing.peek();
        self.is_playing.set(!playing);
    }

    /// Jump the playback clock. Ignored while no track with a usable
    /// duration is loaded.
    pub fn commit_seek(&mut self, position: f64) {
        let total = *self.total.peek();
        if !position.is_finite() || !(total > 0.0) {
            return;
        }
        self.elapsed.set(position.clamp(0.0, total));
    }

    pub fn skip_next(&mut self) {
        if *self.repeat_mode.peek() == RepeatMode::One {
            self.elapsed.set(0.0);
            return;
        }
        let index = *self.queue_index.peek();
        let len = self.queue.peek().len();
        let action = action_at_track_end(index, len, *self.repeat_mode.peek());
        match action {
            EndAction::Advance(next) => {
                let play = *self.is_playing.peek();
                self.load_index(next, play)
            }
            EndAction::Replay | EndAction::Stop => {}
        }
    }

    pub fn skip_previous(&mut self) {
        let index = *self.queue_index.peek();
        if index > 0 && !self.queue.peek().is_empty() {
            let play = *self.is_playing.peek();
            self.load_index(index - 1, play);
        } else {
            self.elapsed.set(0.0);
        }
    }

    pub fn select_queue_item(&mut self, index: usize) {
        if index < self.queue.peek().len() {
            self.load_index(index, true);
        }
    }

    pub fn remove_from_queue(&mut self, index: usize) {
        let len = self.queue.peek().len();
        if index >= len {
            return;
        }
        let current = *self.queue_index.peek();
        let was_playing = *self.is_playing.peek();
        self.queue.with_mut(|items| {
            items.remove(index);
        });

        if self.queue.peek().is_empty() {
            self.unload();
            return;
        }

        let last = self.queue.peek().len() - 1;
        let next = index_after_remove(current, index).min(last);
        if index == current {
            // The playing row went away: move to its successor, keep the
            // play/pause state.
            self.load_index(next, was_playing);
        } else {
            self.queue_index.set(next);
        }
    }

    pub fn clear_queue(&mut self) {
        self.queue.set(Vec::new());
        self.unload();
    }

    /// Toggle shuffle. Turning it on reshuffles the upcoming part of the
    /// queue, leaving history and the current track in place.
    pub fn toggle_shuffle(&mut self) {
        let enabled = !*self.shuffle_enabled.peek();
        self.shuffle_enabled.set(enabled);
        if !enabled {
            return;
        }
        let current = *self.queue_index.peek();
        self.queue.with_mut(|items| {
            if current + 1 < items.len() {
                items[current + 1..].shuffle(&mut rand::thread_rng());
            }
        });
    }

    pub fn cycle_repeat(&mut self) {
        let next = self.repeat_mode.peek().cycle();
        self.repeat_mode.set(next);
    }

    pub fn toggle_like(&mut self) {
        let Some(track) = self.now_playing.peek().clone() else {
            return;
        };
        self.liked_ids.with_mut(|ids| {
            if !ids.remove(&track.id) {
                ids.insert(track.id);
            }
        });
    }

    // --- engine internals ---

    fn load_index(&mut self, index: usize, play: bool) {
        let Some(track) = self.queue.peek().get(index).cloned() else {
            return;
        };
        self.queue_index.set(index);
        self.total.set(catalog::duration_for(&track.id));
        self.lyric_lines.set(catalog::lyrics_for(&track.id));
        self.elapsed.set(0.0);
        self.now_playing.set(Some(track));
        if play {
            self.is_playing.set(true);
        }
    }

    fn unload(&mut self) {
        self.queue_index.set(0);
        self.now_playing.set(None);
        self.is_playing.set(false);
        self.elapsed.set(0.0);
        self.total.set(0.0);
        self.lyric_lines.set(Vec::new());
    }

    fn advance_clock(&mut self, dt_seconds: f64) {
        if !*self.is_playing.peek() {
            return;
        }
        let total = *self.total.peek();
        let next = (*self.elapsed.peek() + dt_seconds).max(0.0);
        if total > 0.0 && next >= total {
            self.handle_track_end(total);
        } else {
            self.elapsed.set(next);
        }
    }

    fn handle_track_end(&mut self, total: f64) {
        let index = *self.queue_index.peek();
        let len = self.queue.peek().len();
        let action = action_at_track_end(index, len, *self.repeat_mode.peek());
        match action {
            EndAction::Replay => self.elapsed.set(0.0),
            EndAction::Advance(next) => self.load_index(next, true),
            EndAction::Stop => {
                self.elapsed.set(total);
                self.is_playing.set(false);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum EndAction {
    Replay,
    Advance(usize),
    Stop,
}

/// What happens when the current track runs out (or is skipped past).
fn action_at_track_end(current: usize, len: usize, repeat: RepeatMode) -> EndAction {
    if repeat == RepeatMode::One {
        return EndAction::Replay;
    }
    if current + 1 < len {
        return EndAction::Advance(current + 1);
    }
    if repeat == RepeatMode::All && len > 0 {
        return EndAction::Advance(0);
    }
    EndAction::Stop
}

/// Where the current row lands after removing `removed` from the queue.
fn index_after_remove(current: usize, removed: usize) -> usize {
    if removed < current {
        current.saturating_sub(1)
    } else {
        current
    }
}

/// Headless component that drives the simulated playback clock.
#[component]
pub fn EngineLoop() -> Element {
    let controller = use_context::<PlayerController>();

    use_effect(move || {
        let mut controller = controller;
        spawn(async move {
            let mut last_tick = now_millis();
            loop {
                sleep_ms(CLOCK_TICK_MS).await;
                let now = now_millis();
                // Wall-clock delta, capped so a suspended tab cannot fast-forward.
                let dt = ((now - last_tick) / 1000.0).clamp(0.0, 2.0);
                last_tick = now;
                controller.advance_clock(dt);
            }
        });
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_end_respects_repeat_modes() {
        assert_eq!(
            action_at_track_end(1, 3, RepeatMode::Off),
            EndAction::Advance(2)
        );
        assert_eq!(action_at_track_end(2, 3, RepeatMode::Off), EndAction::Stop);
        assert_eq!(
            action_at_track_end(2, 3, RepeatMode::All),
            EndAction::Advance(0)
        );
        assert_eq!(action_at_track_end(2, 3, RepeatMode::One), EndAction::Replay);
        assert_eq!(action_at_track_end(0, 0, RepeatMode::All), EndAction::Stop);
    }

    #[test]
    fn removing_rows_keeps_the_current_row_stable() {
        // Removing ahead of the cursor leaves it alone.
        assert_eq!(index_after_remove(1, 2), 1);
        // Removing behind it shifts it back by one.
        assert_eq!(index_after_remove(2, 0), 1);
        assert_eq!(index_after_remove(0, 0), 0);
    }
}
