//! Search box: text input with clear and search buttons

use crate::components::helpers::LoadingSpinner;
use crate::components::icons::{SearchIcon, XIcon};
use dioxus::prelude::*;

/// Pure view of the search box.
///
/// `value` is the local echo of what was typed; the page owns it so typing
/// never waits on the store. Enter behaves like the search button.
#[component]
pub fn SearchInputView(
    value: String,
    loading: bool,
    on_input: EventHandler<String>,
    on_search: EventHandler<String>,
    on_clear: EventHandler<()>,
    #[props(default = "Search for tracks...")] placeholder: &'static str,
    #[props(default)] autofocus: bool,
) -> Element {
    let has_text = !value.is_empty();

    rsx! {
        div { class: "flex items-center gap-1 w-full bg-gray-800/70 rounded-full px-4 py-1 focus-within:ring-1 focus-within:ring-emerald-400/60",
            input {
                r#type: "search",
                class: "flex-1 bg-transparent py-2 text-gray-100 placeholder-gray-500 focus:outline-none",
                "data-testid": "search-input",
                value: "{value}",
                placeholder,
                oninput: move |e| on_input.call(e.value()),
                onkeydown: {
                    let value = value.clone();
                    move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            on_search.call(value.clone());
                        }
                    }
                },
                onmounted: move |event| async move {
                    if autofocus {
                        let _ = event.data().set_focus(true).await;
                    }
                },
            }
            if has_text {
                button {
                    class: "w-8 h-8 flex items-center justify-center rounded-full text-gray-400 hover:text-white hover:bg-gray-700",
                    "data-testid": "clear-search",
                    title: "Clear",
                    onclick: move |_| on_clear.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
            button {
                class: "w-8 h-8 flex items-center justify-center rounded-full text-gray-300 hover:text-white hover:bg-gray-700 disabled:cursor-not-allowed disabled:opacity-60",
                "data-testid": "search-button",
                title: "Search",
                disabled: loading,
                onclick: {
                    let value = value.clone();
                    move |_| on_search.call(value.clone())
                },
                if loading {
                    LoadingSpinner { inline: true }
                } else {
                    SearchIcon { class: "w-5 h-5" }
                }
            }
        }
    }
}
