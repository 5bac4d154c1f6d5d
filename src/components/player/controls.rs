use dioxus::prelude::*;

use crate::components::{Icon, MuteMemorySignal, PlayerController, VolumeSignal};
use crate::models::RepeatMode;
use crate::transport::volume_icon;

/// Play/Pause button - completely isolated component
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut controller = use_context::<PlayerController>();
    let playing = controller.is_playing();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "w-10 h-10 rounded-full bg-white flex items-center justify-center hover:scale-105 transition-transform shadow-lg",
            onclick: move |_| controller.toggle_play(),
            if playing {
                Icon {
                    name: "pause".to_string(),
                    class: "w-5 h-5 text-black".to_string(),
                }
            } else {
                Icon {
                    name: "play".to_string(),
                    class: "w-5 h-5 text-black ml-0.5".to_string(),
                }
            }
        }
    }
}

/// Previous button - completely isolated component
#[component]
pub(super) fn PrevButton() -> Element {
    let mut controller = use_context::<PlayerController>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "p-2 text-zinc-300 hover:text-white transition-colors",
            onclick: move |_| controller.skip_previous(),
            Icon { name: "prev".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Next button - completely isolated component
#[component]
pub(super) fn NextButton() -> Element {
    let mut controller = use_context::<PlayerController>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "p-2 text-zinc-300 hover:text-white transition-colors",
            onclick: move |_| controller.skip_next(),
            Icon { name: "next".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Repeat button - cycles off -> all -> one
#[component]
pub(super) fn RepeatButton() -> Element {
    let mut controller = use_context::<PlayerController>();
    let mode = controller.repeat_mode();

    rsx! {
        button {
            id: "repeat-btn",
            r#type: "button",
            class: match mode {
                RepeatMode::Off => "p-2 text-zinc-400 hover:text-white transition-colors",
                RepeatMode::All | RepeatMode::One => {
                    "p-2 text-emerald-400 hover:text-emerald-300 transition-colors"
                }
            },
            onclick: move |_| controller.cycle_repeat(),
            Icon {
                name: match mode {
                    RepeatMode::One => "repeat-1".to_string(),
                    _ => "repeat".to_string(),
                },
                class: "w-5 h-5".to_string(),
            }
        }
    }
}

/// Shuffle button - toggle shuffle mode
#[component]
pub(super) fn ShuffleButton() -> Element {
    let mut controller = use_context::<PlayerController>();
    let enabled = controller.shuffle_enabled();

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            class: if enabled { "p-2 text-emerald-400 hover:text-emerald-300 transition-colors" } else { "p-2 text-zinc-400 hover:text-white transition-colors" },
            onclick: move |_| controller.toggle_shuffle(),
            Icon { name: "shuffle".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Mute button plus level slider. Unmuting restores the level that was live
/// when the mute happened; both volume widgets on the surface share one
/// memory, so they stay consistent.
#[component]
pub fn VolumeControl(slider_class: String) -> Element {
    let mut volume = use_context::<VolumeSignal>().0;
    let mut memory = use_context::<MuteMemorySignal>().0;
    let level = volume();
    let muted = memory().is_muted();

    let on_toggle_mute = move |_| {
        let current = *volume.peek();
        let next = memory.write().toggle(current);
        volume.set(next);
    };

    let on_level_change = move |e: Event<FormData>| {
        if let Ok(value) = e.value().parse::<f64>() {
            let next = memory.write().set_level(value / 100.0);
            volume.set(next);
        }
    };

    rsx! {
        div { class: "flex items-center gap-2",
            button {
                class: "p-2 rounded-full hover:bg-white/10 text-zinc-400 hover:text-white transition-colors",
                onclick: on_toggle_mute,
                Icon {
                    name: volume_icon(level, muted).to_string(),
                    class: "w-5 h-5".to_string(),
                }
            }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                value: (level * 100.0).round() as i32,
                class: slider_class,
                oninput: on_level_change,
            }
        }
    }
}
