use crate::components::views::{AlbumList, ArtistList, ServerPrompt, TrackTable};
use crate::components::NowPlayingBar;
use audiarr::api::{Album, Artist};
use audiarr::config::ClientConfig;
use audiarr::library::{execute, FetchRequest, SelectionController};
use dioxus::prelude::*;

/// Runs each request and feeds its completion back into the controller,
/// recursively dispatching whatever the transition asks for next.
pub fn dispatch(mut session: Signal<SelectionController>, requests: Vec<FetchRequest>) {
    for request in requests {
        spawn(async move {
            let completion = execute(request).await;
            let followups = session.write().apply(completion);
            dispatch(session, followups);
        });
    }
}

pub fn select_artist(mut session: Signal<SelectionController>, artist: Artist) {
    let request = session.write().select_artist(artist);
    dispatch(session, request.into_iter().collect());
}

pub fn select_album(mut session: Signal<SelectionController>, album: Album) {
    let request = session.write().select_album(album);
    dispatch(session, request.into_iter().collect());
}

pub fn play_track(mut session: Signal<SelectionController>, track_id: &str) {
    session.write().play(track_id);
}

#[component]
pub fn LibraryShell() -> Element {
    let mut session = use_signal(|| {
        SelectionController::new(ClientConfig::default().with_auto_select(true))
    });
    use_context_provider(|| session);

    // Initial artist listing and server-name lookup
    use_hook(move || {
        let requests = session.write().start();
        dispatch(session, requests);
    });

    let reachable = session.read().endpoint().is_reachable();
    let title = session.read().server_name().to_string();

    rsx! {
        div { class: "library-shell",
            h1 { class: "library-title", "{title}" }

            if !reachable {
                ServerPrompt {}
            } else {
                div { class: "browse-grid",
                    ArtistList {}
                    AlbumList {}
                }
                TrackTable {}
                NowPlayingBar {}
            }
        }
    }
}
