use audiarr::library::SelectionController;
use dioxus::prelude::*;

/// Hands the active stream URL to the browser's audio element.
#[component]
pub fn NowPlayingBar() -> Element {
    let session = use_context::<Signal<SelectionController>>();
    let state = session.read();
    let Some(url) = state.playback().stream_url().map(str::to_string) else {
        return rsx! {};
    };
    let caption = state
        .now_playing()
        .map(|track| format!("{} - {}", track.title, track.artist));
    drop(state);

    rsx! {
        div { class: "now-playing-bar",
            p { class: "now-playing-label", "Now Playing" }
            if let Some(caption) = caption {
                p { class: "now-playing-caption", "{caption}" }
            }
            audio {
                controls: true,
                autoplay: true,
                src: "{url}",
                "Your browser does not support the audio element."
            }
        }
    }
}
