use crate::components::select_album;
use audiarr::library::SelectionController;
use dioxus::prelude::*;

#[component]
pub fn AlbumList() -> Element {
    let session = use_context::<Signal<SelectionController>>();
    let state = session.read();
    let albums = state.albums().to_vec();
    let selected_id = state.selected_album().map(|album| album.id.clone());
    let loading = state.albums_loading();
    drop(state);

    rsx! {
        section { class: "panel panel-list",
            header { class: "panel-header",
                "Albums"
            }
            if loading {
                p { class: "panel-note", "Loading albums..." }
            }
            ul { class: "select-list",
                {
                    albums.into_iter().map(|album| {
                        let active = selected_id.as_deref() == Some(album.id.as_str());
                        let class = if active {
                            "select-item active"
                        } else {
                            "select-item"
                        };
                        let key = album.id.clone();
                        let label = format!("{} ({})", album.name, album.year_label());
                        rsx! {
                            li {
                                key: "{key}",
                                class: "{class}",
                                onclick: move |_| select_album(session, album.clone()),
                                "{label}"
                            }
                        }
                    })
                }
            }
        }
    }
}
