// Backdrop plus the sliding panel itself. Rendering nothing while closed is
// what tears the tab contents (and their timers/listeners) down.

#[component]
pub fn SidePanel() -> Element {
    let panel = use_context::<SidePanelController>();
    let mut controller = use_context::<PlayerController>();
    let state = panel.current();

    if !state.is_open {
        return rsx! {};
    }

    let lines = controller.lyric_lines();
    let current_index = controller.current_lyric_index();
    // Key the lyrics pane by track so a track change tears its scroll state
    // down instead of leaking it into the next song.
    let track_key = controller
        .now_playing()
        .map(|track| track.id)
        .unwrap_or_default();

    let on_backdrop_click = {
        let mut panel = panel;
        move |_| panel.close()
    };
    let on_close_click = {
        let mut panel = panel;
        move |_| panel.close()
    };

    rsx! {
        div { class: "fixed inset-0 bg-black/60 z-50", onclick: on_backdrop_click,
            div {
                class: "absolute right-0 top-0 bottom-0 w-full max-w-[500px] bg-zinc-950 border-l border-zinc-800/80 flex flex-col",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                div { class: "flex items-center justify-between p-4 border-b border-zinc-800/80",
                    div { class: "flex items-center gap-2",
                        for tab in SidePanelTab::ALL {
                            button {
                                key: "{tab.label()}",
                                class: if tab == state.active_tab {
                                    "px-4 py-2 rounded-full text-sm font-medium bg-white/15 text-white flex items-center gap-2"
                                } else {
                                    "px-4 py-2 rounded-full text-sm font-medium text-zinc-400 hover:text-white transition-colors flex items-center gap-2"
                                },
                                onclick: {
                                    let mut panel = panel;
                                    move |_| panel.set_tab(tab)
                                },
                                Icon { name: tab.icon_name().to_string(), class: "w-4 h-4".to_string() }
                                "{tab.label()}"
                            }
                        }
                    }
                    button {
                        class: "p-2 rounded-full hover:bg-white/10 text-zinc-400 hover:text-white transition-colors",
                        onclick: on_close_click,
                        Icon { name: "x".to_string(), class: "w-5 h-5".to_string() }
                    }
                }
                div { class: "flex-1 overflow-hidden p-4",
                    match state.active_tab {
                        SidePanelTab::Queue => rsx! {
                            QueuePanel {}
                        },
                        SidePanelTab::Lyrics => rsx! {
                            LyricsPanel {
                                key: "{track_key}",
                                lines,
                                current_index,
                                on_seek_line: move |timestamp| controller.commit_seek(timestamp),
                            }
                        },
                        SidePanelTab::Details => rsx! {
                            DetailsPanel {}
                        },
                    }
                }
            }
        }
    }
}
