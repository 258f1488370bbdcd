use crate::components::dispatch;
use audiarr::library::SelectionController;
use dioxus::prelude::*;

/// Shown while the artist listing fails; lets the user point at another server.
#[component]
pub fn ServerPrompt() -> Element {
    let mut session = use_context::<Signal<SelectionController>>();
    let mut custom_url = use_signal(String::new);
    let current_url = session.read().endpoint().base_url().to_string();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let url = custom_url();
        if url.trim().is_empty() {
            return;
        }
        let requests = session.write().set_server_url(&url);
        dispatch(session, requests);
    };

    rsx! {
        section { class: "panel panel-body",
            p { class: "server-prompt-text",
                "No server found at "
                strong { "{current_url}" }
                ". Please enter the server URL:"
            }
            form { class: "server-form", onsubmit: on_submit,
                input {
                    r#type: "text",
                    value: "{custom_url}",
                    placeholder: "e.g. http://192.168.1.100:5280",
                    oninput: move |evt| custom_url.set(evt.value()),
                }
                button {
                    class: "button primary",
                    r#type: "submit",
                    "Set Server URL"
                }
            }
        }
    }
}
