use dioxus::prelude::*;

use crate::catalog;
use crate::components::{
    EngineLoop, Icon, MuteMemorySignal, Player, PlayerController, SidePanelController, VolumeSignal,
};
use crate::models::AudioQuality;
use crate::transport::VolumeMemory;

/// Root of the player surface. Owns the app-wide state and provides it via
/// context; everything below consumes signals and controller handles.
#[component]
pub fn PlayerApp() -> Element {
    let controller = use_context_provider(PlayerController::new);
    let volume = use_signal(|| 0.8f64);
    use_context_provider(|| VolumeSignal(volume));
    let mute_memory = use_signal(VolumeMemory::default);
    use_context_provider(|| MuteMemorySignal(mute_memory));
    use_context_provider(|| Signal::new(AudioQuality::default()));
    use_context_provider(SidePanelController::new);

    // Seed the queue from the bundled catalog on first mount; playback stays
    // paused until the user asks for it.
    {
        let mut controller = controller;
        use_effect(move || {
            controller.set_queue(catalog::demo_queue());
        });
    }

    let track = controller.now_playing();

    rsx! {
        div { class: "min-h-screen bg-zinc-950 text-white",
            div { class: "max-w-screen-2xl mx-auto px-6 pt-16 pb-40 flex flex-col items-center gap-6",
                match &track {
                    Some(track) => rsx! {
                        if track.album.cover_big.is_empty() {
                            div { class: "w-64 h-64 rounded-2xl bg-gradient-to-br from-emerald-600 to-teal-700 flex items-center justify-center shadow-2xl",
                                Icon { name: "music".to_string(), class: "w-20 h-20 text-white/70".to_string() }
                            }
                        } else {
                            img {
                                src: "{track.album.cover_big}",
                                alt: "{track.title}",
                                class: "w-64 h-64 rounded-2xl object-cover shadow-2xl",
                            }
                        }
                        div { class: "text-center",
                            h1 { class: "text-2xl font-bold text-white", "{track.title}" }
                            p { class: "text-zinc-400", "{track.artist.name} • {track.album.title}" }
                        }
                    },
                    None => rsx! {
                        div { class: "w-64 h-64 rounded-2xl bg-zinc-900 flex items-center justify-center",
                            Icon { name: "music".to_string(), class: "w-20 h-20 text-zinc-700".to_string() }
                        }
                        p { class: "text-zinc-500", "Open the queue to pick a track." }
                    },
                }
            }
            Player {}
            EngineLoop {}
        }
    }
}
