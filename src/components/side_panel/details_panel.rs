// Current-track metadata plus secondary volume and quality controls.

#[component]
fn DetailsPanel() -> Element {
    let controller = use_context::<PlayerController>();
    let mut quality = use_context::<Signal<AudioQuality>>();
    let total = controller.total();

    let Some(track) = controller.now_playing() else {
        return rsx! {
            div { class: "h-full flex items-center justify-center",
                p { class: "text-zinc-400", "No track playing" }
            }
        };
    };

    let tier = quality();

    rsx! {
        div { class: "h-full overflow-y-auto pr-1 space-y-6",
            if track.album.cover_xl.is_empty() {
                div { class: "w-full aspect-square rounded-lg bg-gradient-to-br from-emerald-600 to-teal-700 flex items-center justify-center",
                    Icon { name: "music".to_string(), class: "w-16 h-16 text-white/70".to_string() }
                }
            } else {
                img {
                    src: "{track.album.cover_xl}",
                    alt: "{track.title}",
                    class: "w-full aspect-square rounded-lg object-cover",
                }
            }

            div {
                h2 { class: "text-2xl font-bold text-white", "{track.title}" }
                p { class: "text-zinc-400", "{track.artist.name}" }
            }

            div { class: "pt-4 border-t border-zinc-800/80",
                h3 { class: "text-white font-medium mb-2", "About" }
                div { class: "space-y-2 text-sm",
                    p { class: "text-zinc-400", "Album • {track.album.title}" }
                    p { class: "text-zinc-400", "Duration • {format_duration(total)}" }
                }
            }

            div { class: "pt-4 border-t border-zinc-800/80",
                h3 { class: "text-white font-medium mb-2", "Volume" }
                VolumeControl { slider_class: "w-full h-1.5 bg-zinc-800 rounded-full appearance-none cursor-pointer accent-white".to_string() }
            }

            div { class: "pt-4 border-t border-zinc-800/80",
                h3 { class: "text-white font-medium mb-2", "Audio Quality" }
                button {
                    class: "inline-flex items-center gap-2 px-4 py-1.5 rounded-full text-xs font-medium bg-white/10 text-white hover:bg-white/20 transition-colors",
                    onclick: move |_| {
                        let next = quality().next();
                        quality.set(next);
                    },
                    Icon { name: tier.icon_name().to_string(), class: "w-4 h-4".to_string() }
                    span { "{tier.label()}" }
                }
                p { class: "text-sm text-zinc-400 mt-2", "{tier.description()}" }
            }
        }
    }
}
