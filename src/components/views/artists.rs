use crate::components::select_artist;
use audiarr::library::SelectionController;
use dioxus::prelude::*;

#[component]
pub fn ArtistList() -> Element {
    let session = use_context::<Signal<SelectionController>>();
    let state = session.read();
    let artists = state.artists().to_vec();
    let selected_id = state.selected_artist().map(|artist| artist.id.clone());
    let loading = state.artists_loading();
    drop(state);

    rsx! {
        section { class: "panel panel-list",
            header { class: "panel-header",
                "Artists"
            }
            if loading && artists.is_empty() {
                p { class: "panel-note", "Loading artists..." }
            }
            ul { class: "select-list",
                {
                    artists.into_iter().map(|artist| {
                        let active = selected_id.as_deref() == Some(artist.id.as_str());
                        let class = if active {
                            "select-item active"
                        } else {
                            "select-item"
                        };
                        let key = artist.id.clone();
                        let label = artist.name.clone();
                        rsx! {
                            li {
                                key: "{key}",
                                class: "{class}",
                                onclick: move |_| select_artist(session, artist.clone()),
                                "{label}"
                            }
                        }
                    })
                }
            }
        }
    }
}
