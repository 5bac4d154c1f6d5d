// Upcoming tracks list with select, remove, and clear.

#[component]
fn QueuePanel() -> Element {
    let mut controller = use_context::<PlayerController>();
    let queue = controller.queue();
    let current_index = controller.queue_index();
    let has_track = controller.now_playing().is_some();

    if queue.is_empty() {
        return rsx! {
            div { class: "h-full flex flex-col items-center justify-center text-center px-4 gap-2",
                p { class: "text-zinc-400 text-sm", "Queue is empty." }
                p { class: "text-zinc-500 text-xs", "Tracks you line up will show here." }
            }
        };
    }

    rsx! {
        div { class: "h-full flex flex-col gap-3",
            div { class: "flex items-center justify-between",
                h3 { class: "text-white font-medium", "Queue" }
                button {
                    class: "text-sm text-zinc-400 hover:text-white transition-colors",
                    onclick: move |_| controller.clear_queue(),
                    "Clear"
                }
            }
            div { class: "flex-1 overflow-y-auto pr-1 space-y-2",
                for (index , track) in queue.iter().enumerate() {
                    div {
                        key: "{track.id}:{index}",
                        class: if has_track && index == current_index {
                            "flex items-center gap-2 p-2 rounded-lg bg-white/10"
                        } else {
                            "flex items-center gap-2 p-2 rounded-lg hover:bg-white/5 transition-colors"
                        },
                        button {
                            class: "flex-1 text-left flex items-center gap-3 min-w-0",
                            onclick: move |_| controller.select_queue_item(index),
                            if track.album.cover_small.is_empty() {
                                div { class: "w-10 h-10 rounded bg-zinc-800 flex items-center justify-center text-zinc-500 flex-shrink-0",
                                    Icon { name: "music".to_string(), class: "w-4 h-4".to_string() }
                                }
                            } else {
                                img {
                                    src: "{track.album.cover_small}",
                                    alt: "{track.title}",
                                    class: "w-10 h-10 rounded object-cover flex-shrink-0",
                                    loading: "lazy",
                                }
                            }
                            div { class: "flex-1 min-w-0",
                                p { class: "text-white truncate text-sm", "{track.title}" }
                                p { class: "text-xs text-zinc-400 truncate", "{track.artist.name}" }
                            }
                        }
                        button {
                            class: "p-2 rounded-lg text-zinc-500 hover:text-red-400 transition-colors flex-shrink-0",
                            title: "Remove from queue",
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                controller.remove_from_queue(index);
                            },
                            Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                        }
                    }
                }
            }
        }
    }
}
