//! Interactive seekbar.
//!
//! A press on the track starts a drag session that owns the displayed ratio
//! until release; the externally advancing progress is ignored in between.
//! While a session is live a viewport-sized overlay captures pointer
//! movement, so the drag keeps working after the pointer leaves the track.
//! The overlay exists only for the lifetime of the session, which keeps the
//! capture handlers scoped exactly to it.

use dioxus::prelude::*;

use crate::models::format_duration;
use crate::transport::SeekDrag;

const SEEK_TRACK_ID: &str = "transport-seek-track";

/// Left edge and width of the track element, from the live layout.
async fn seek_track_bounds() -> Option<(f64, f64)> {
    let script = format!(
        r#"(function() {{
            const track = document.getElementById("{SEEK_TRACK_ID}");
            if (!track) {{ dioxus.send(null); return; }}
            const rect = track.getBoundingClientRect();
            dioxus.send([rect.left, rect.width]);
        }})();"#
    );
    let mut bounds_eval = document::eval(&script);
    bounds_eval
        .recv::<Option<(f64, f64)>>()
        .await
        .ok()
        .flatten()
}

#[component]
pub(super) fn Seekbar(progress: f64, total: f64, on_commit: EventHandler<f64>) -> Element {
    let mut drag = use_signal(SeekDrag::default);
    let mut track_bounds = use_signal(|| None::<(f64, f64)>);

    // Prime the geometry cache so the first press can resolve synchronously.
    use_effect(move || {
        spawn(async move {
            if let Some(bounds) = seek_track_bounds().await {
                track_bounds.set(Some(bounds));
            }
        });
    });

    let on_track_press = move |evt: PointerEvent| {
        evt.prevent_default();
        let x = evt.client_coordinates().x;
        // Press against the cached geometry first: the thumb must jump to the
        // press point without waiting for a layout round-trip.
        if let Some((left, width)) = *track_bounds.peek() {
            drag.write().press(x, left, width);
        }
        spawn(async move {
            let Some((left, width)) = seek_track_bounds().await else {
                return;
            };
            track_bounds.set(Some((left, width)));
            // Only adjust a still-live session: if the press already released,
            // re-entering the drag here would strand it with no release coming.
            let mut session = drag.write();
            if session.is_dragging() {
                session.drag_to(x, left, width);
            }
        });
    };

    let on_capture_move = move |evt: PointerEvent| {
        if let Some((left, width)) = *track_bounds.peek() {
            drag.write().drag_to(evt.client_coordinates().x, left, width);
        }
    };

    let on_capture_release = move |evt: PointerEvent| {
        if let Some((left, width)) = *track_bounds.peek() {
            drag.write().drag_to(evt.client_coordinates().x, left, width);
        }
        if let Some(position) = drag.write().release(total) {
            on_commit.call(position);
        }
    };

    let shown = drag().displayed_ratio(progress);

    rsx! {
        div { class: "flex items-center w-full gap-3 px-2 py-2",
            span { class: "text-xs text-zinc-500 min-w-[40px] text-right font-mono",
                "{format_duration(shown * total)}"
            }
            div {
                id: SEEK_TRACK_ID,
                class: "relative flex-1 h-1.5 bg-zinc-800 rounded-full cursor-pointer group",
                style: "touch-action: none;",
                onpointerdown: on_track_press,
                div {
                    class: "absolute left-0 top-0 h-full bg-white/90 group-hover:bg-emerald-400 rounded-full transition-colors",
                    style: "width: {shown * 100.0}%;",
                }
                div {
                    class: "absolute -top-1.5 h-4 w-4 bg-white rounded-full shadow-lg opacity-0 group-hover:opacity-100 transition-opacity -translate-x-1/2",
                    style: "left: {shown * 100.0}%;",
                }
            }
            span { class: "text-xs text-zinc-500 min-w-[40px] font-mono", "{format_duration(total)}" }
        }
        if drag().is_dragging() {
            div {
                class: "fixed inset-0 z-[70] cursor-pointer select-none",
                style: "touch-action: none;",
                onpointermove: on_capture_move,
                onpointerup: on_capture_release,
                onpointercancel: on_capture_release,
            }
        }
    }
}
