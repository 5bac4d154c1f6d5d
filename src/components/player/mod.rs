//! Bottom transport bar: seekbar, track info, transport buttons, volume,
//! and the buttons that open the side panel.

use dioxus::prelude::*;

use crate::components::{Icon, PlayerController, SidePanel, SidePanelController, SidePanelTab};
use crate::models::AudioQuality;

mod controls;
mod seekbar;

pub use controls::VolumeControl;

use controls::{NextButton, PlayPauseButton, PrevButton, RepeatButton, ShuffleButton};
use seekbar::Seekbar;

#[component]
pub fn Player() -> Element {
    let mut controller = use_context::<PlayerController>();
    let panel = use_context::<SidePanelController>();
    let mut quality = use_context::<Signal<AudioQuality>>();

    let track = controller.now_playing();
    let total = controller.total();
    let progress = controller.progress();
    let liked = track
        .as_ref()
        .map(|track| controller.is_liked(&track.id))
        .unwrap_or(false);
    let tier = quality();

    rsx! {
        div { class: "player-shell fixed bottom-0 left-0 right-0 bg-zinc-950/90 backdrop-blur-xl border-t border-zinc-800/60 z-40",
            div { class: "max-w-screen-2xl mx-auto px-4",
                Seekbar {
                    progress,
                    total,
                    on_commit: move |position| controller.commit_seek(position),
                }

                div { class: "h-20 flex items-center justify-between gap-4",
                    // Now playing info
                    div { class: "flex items-center gap-4 min-w-0 flex-1",
                        match &track {
                            Some(track) => rsx! {
                                button {
                                    class: "w-14 h-14 rounded-md bg-zinc-800 flex-shrink-0 overflow-hidden hover:ring-2 hover:ring-emerald-500/50 transition-all cursor-pointer",
                                    title: "Track details",
                                    onclick: {
                                        let mut panel = panel;
                                        move |_| panel.open(SidePanelTab::Details)
                                    },
                                    if track.album.cover_medium.is_empty() {
                                        div { class: "w-full h-full flex items-center justify-center bg-gradient-to-br from-emerald-600 to-teal-700",
                                            Icon { name: "music".to_string(), class: "w-6 h-6 text-white/70".to_string() }
                                        }
                                    } else {
                                        img {
                                            src: "{track.album.cover_medium}",
                                            alt: "{track.title}",
                                            class: "w-full h-full object-cover",
                                            loading: "lazy",
                                        }
                                    }
                                }
                                div { class: "min-w-0",
                                    h3 { class: "text-white text-sm font-medium truncate", "{track.title}" }
                                    p { class: "text-zinc-400 text-xs truncate", "{track.artist.name}" }
                                }
                                button {
                                    class: if liked { "p-2 rounded-full hover:bg-white/10 text-emerald-400 flex-shrink-0" } else { "p-2 rounded-full hover:bg-white/10 text-zinc-400 hover:text-emerald-400 transition-colors flex-shrink-0" },
                                    onclick: move |_| controller.toggle_like(),
                                    Icon {
                                        name: if liked { "heart-filled".to_string() } else { "heart".to_string() },
                                        class: "w-5 h-5".to_string(),
                                    }
                                }
                            },
                            None => rsx! {
                                div { class: "w-14 h-14 rounded-md bg-zinc-800/50 flex items-center justify-center",
                                    Icon { name: "music".to_string(), class: "w-6 h-6 text-zinc-600".to_string() }
                                }
                                div { class: "min-w-0",
                                    p { class: "text-sm text-zinc-500", "No track playing" }
                                    p { class: "text-xs text-zinc-600", "Select a song to start" }
                                }
                            },
                        }
                    }

                    // Transport controls
                    div { class: "flex items-center gap-3",
                        ShuffleButton {}
                        PrevButton {}
                        PlayPauseButton {}
                        NextButton {}
                        RepeatButton {}
                    }

                    // Panel openers, quality, volume
                    div { class: "flex items-center gap-3 flex-1 justify-end",
                        button {
                            class: "p-2 rounded-full hover:bg-white/10 text-zinc-400 hover:text-white transition-colors",
                            title: "Lyrics",
                            onclick: {
                                let mut panel = panel;
                                move |_| panel.open(SidePanelTab::Lyrics)
                            },
                            Icon { name: "lyrics".to_string(), class: "w-5 h-5".to_string() }
                        }
                        button {
                            class: "p-2 rounded-full hover:bg-white/10 text-zinc-400 hover:text-white transition-colors",
                            title: "Queue",
                            onclick: {
                                let mut panel = panel;
                                move |_| panel.open(SidePanelTab::Queue)
                            },
                            Icon { name: "queue".to_string(), class: "w-5 h-5".to_string() }
                        }
                        button {
                            class: "p-2 rounded-full hover:bg-white/10 text-white transition-colors",
                            title: "{tier.description()}",
                            onclick: move |_| {
                                let next = quality().next();
                                quality.set(next);
                            },
                            Icon { name: tier.icon_name().to_string(), class: "w-5 h-5".to_string() }
                        }
                        div { class: "hidden md:block min-w-[140px]",
                            VolumeControl { slider_class: "w-full h-1.5 bg-zinc-800 rounded-full appearance-none cursor-pointer accent-zinc-400".to_string() }
                        }
                    }
                }
            }
        }
        SidePanel {}
    }
}
