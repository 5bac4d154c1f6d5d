// Synced lyrics pane. Follows the active line with a centering scroll until
// the user scrolls by hand; a 1.5s quiet window then has to pass before the
// pane snaps back to tracking.

const LYRICS_SCROLL_ID: &str = "lyrics-scroll-pane";

fn lyric_line_dom_id(index: usize) -> String {
    format!("{LYRICS_SCROLL_ID}-line-{index}")
}

/// Measure the line and pane, then smooth-scroll the line to the vertical
/// middle. Returns false when either element is gone (closed panel, stale
/// index), which callers treat as a no-op.
async fn center_lyric_line(index: usize) -> bool {
    let line_id = lyric_line_dom_id(index);
    let probe = format!(
        r#"(function() {{
            const pane = document.getElementById("{LYRICS_SCROLL_ID}");
            const line = document.getElementById("{line_id}");
            if (!pane || !line) {{ dioxus.send(null); return; }}
            dioxus.send([line.offsetTop, pane.clientHeight]);
        }})();"#
    );
    let mut probe_eval = document::eval(&probe);
    let Ok(Some((line_top, pane_height))) = probe_eval.recv::<Option<(f64, f64)>>().await else {
        return false;
    };

    let target = center_scroll_target(line_top, pane_height);
    let scroll = format!(
        r#"(function() {{
            const pane = document.getElementById("{LYRICS_SCROLL_ID}");
            if (pane) pane.scrollTo({{ top: {target}, behavior: "smooth" }});
        }})();"#
    );
    let _ = document::eval(&scroll);
    true
}

#[derive(Props, Clone, PartialEq)]
struct LyricsPanelProps {
    lines: Vec<LyricLine>,
    current_index: Option<usize>,
    on_seek_line: EventHandler<f64>,
}

#[component]
fn LyricsPanel(props: LyricsPanelProps) -> Element {
    let controller = use_context::<PlayerController>();
    let mut override_state = use_signal(ScrollOverride::default);
    let mut quiet_timer_generation = use_signal(|| 0u64);
    let mut programmatic_scroll_until = use_signal(|| 0.0f64);
    let mut last_centered = use_signal(|| None::<usize>);

    let on_pane_scroll = move |_| {
        let now = now_millis();
        // Echo of our own scrollTo, not the user's hand.
        if now < *programmatic_scroll_until.peek() {
            return;
        }
        override_state.write().note_user_scroll(now);
        last_centered.set(None);

        // One live quiet timer: newer scrolls bump the generation and strand
        // any wake already in flight.
        let generation = quiet_timer_generation.peek().wrapping_add(1);
        quiet_timer_generation.set(generation);
        spawn(async move {
            sleep_ms(QUIET_WINDOW_MS as u64).await;
            if *quiet_timer_generation.peek() != generation {
                return;
            }
            if !override_state.write().try_resume(now_millis()) {
                return;
            }
            // Catch up on the line the clock reached while the user held the pane.
            let Some(index) = controller.current_lyric_index() else {
                return;
            };
            if center_lyric_line(index).await {
                programmatic_scroll_until.set(now_millis() + SELF_SCROLL_GUARD_MS);
                last_centered.set(Some(index));
            }
        });
    };

    // Re-runs on every clock tick; recenters whenever the active line moved
    // and the user is not holding the pane.
    use_effect(move || {
        let Some(index) = controller.current_lyric_index() else {
            return;
        };
        if override_state.peek().is_user_scrolling(now_millis()) {
            return;
        }
        if *last_centered.peek() == Some(index) {
            return;
        }
        last_centered.set(Some(index));
        spawn(async move {
            if center_lyric_line(index).await {
                programmatic_scroll_until.set(now_millis() + SELF_SCROLL_GUARD_MS);
            }
        });
    });

    if props.lines.is_empty() {
        return rsx! {
            div { class: "h-full flex items-center justify-center",
                p { class: "text-zinc-400 text-center", "No lyrics available" }
            }
        };
    }

    rsx! {
        div {
            id: LYRICS_SCROLL_ID,
            onscroll: on_pane_scroll,
            class: "relative h-full overflow-y-auto overflow-x-hidden rounded-xl border border-zinc-800/80 bg-zinc-900/40 p-4 space-y-1",
            for (index , line) in props.lines.iter().enumerate() {
                button {
                    key: "{index}",
                    id: lyric_line_dom_id(index),
                    class: if Some(index) == props.current_index {
                        "w-full text-left px-3 py-2.5 rounded-lg bg-emerald-500/15 text-emerald-300"
                    } else {
                        "w-full text-left px-3 py-2 rounded-lg text-zinc-400 hover:text-zinc-200 hover:bg-zinc-800/60 transition-colors"
                    },
                    onclick: {
                        let timestamp = line.timestamp_seconds;
                        let on_seek_line = props.on_seek_line;
                        move |_| on_seek_line.call(timestamp)
                    },
                    span { class: "text-xs text-zinc-500 mr-2 font-mono",
                        "{format_duration(line.timestamp_seconds)}"
                    }
                    span {
                        class: if Some(index) == props.current_index {
                            "text-lg font-semibold leading-relaxed"
                        } else {
                            "text-base leading-relaxed"
                        },
                        "{line.text}"
                    }
                }
            }
        }
    }
}
