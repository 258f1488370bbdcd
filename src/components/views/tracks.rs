use crate::components::{dispatch, play_track};
use audiarr::library::SelectionController;
use dioxus::prelude::*;

/// Track table for the selected album, or for the whole library when toggled.
#[component]
pub fn TrackTable() -> Element {
    let mut session = use_context::<Signal<SelectionController>>();
    let mut show_library = use_signal(|| false);

    let state = session.read();
    let rows = if show_library() {
        state.library().to_vec()
    } else {
        state.tracks().to_vec()
    };
    let playback = state.playback().clone();
    let loading = if show_library() {
        state.library_loading()
    } else {
        state.tracks_loading()
    };
    let scanning = state.scan_in_progress();
    drop(state);

    let on_toggle_library = move |_| {
        let enable = !show_library();
        show_library.set(enable);
        if enable {
            let request = session.write().load_library();
            dispatch(session, vec![request]);
        }
    };

    let on_rescan = move |_| {
        if session.read().scan_in_progress() {
            return;
        }
        let request = session.write().request_rescan();
        dispatch(session, vec![request]);
    };

    rsx! {
        section { class: "panel",
            header { class: "panel-header",
                span {
                    if show_library() { "All Tracks" } else { "Tracks" }
                }
                div { class: "button-row",
                    button {
                        class: "button",
                        onclick: on_toggle_library,
                        if show_library() { "Album view" } else { "Whole library" }
                    }
                    button {
                        class: "button primary",
                        disabled: scanning,
                        onclick: on_rescan,
                        if scanning { "Scanning..." } else { "Rescan" }
                    }
                }
            }
            div { class: "track-scroll",
                if rows.is_empty() {
                    p { class: "panel-note",
                        if loading {
                            "Loading tracks..."
                        } else if show_library() {
                            "No tracks in the library."
                        } else {
                            "No tracks available for this album."
                        }
                    }
                } else {
                    table { class: "track-table",
                        thead {
                            tr {
                                th { "Song" }
                                th { "Time" }
                                th { "Artist" }
                                th { "Album" }
                                th { "Genre" }
                            }
                        }
                        tbody {
                            {
                                rows.into_iter().map(|track| {
                                    let is_current = playback.is_playing(&track.id);
                                    let class = if is_current {
                                        "track-row active"
                                    } else {
                                        "track-row"
                                    };
                                    let duration = track.duration_label();
                                    let genre = track.genre.clone().unwrap_or_default();
                                    let track_id = track.id.clone();
                                    rsx! {
                                        tr {
                                            key: "{track.id}",
                                            class: "{class}",
                                            title: "Double-click to play",
                                            ondoubleclick: move |_| play_track(session, &track_id),
                                            td { "{track.title}" }
                                            td { class: "track-time", "{duration}" }
                                            td { "{track.artist}" }
                                            td { "{track.album}" }
                                            td { "{genre}" }
                                        }
                                    }
                                })
                            }
                        }
                    }
                }
            }
        }
    }
}
