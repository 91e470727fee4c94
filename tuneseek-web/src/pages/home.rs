use crate::Route;
use dioxus::prelude::*;
use tuneseek_ui::{PageContainer, SearchIcon};

#[component]
pub fn Home() -> Element {
    rsx! {
        PageContainer {
            div { class: "flex flex-col items-center text-center py-24 gap-6",
                h1 { class: "text-4xl font-bold", "iTunes Track Search" }
                p { class: "text-gray-400 max-w-md",
                    "Find songs in the iTunes catalog, play a short preview and open a track for the full details."
                }
                button {
                    class: "inline-flex items-center gap-2 px-6 py-3 rounded-full bg-emerald-500 hover:bg-emerald-400 text-black font-semibold",
                    onclick: move |_| {
                        navigator().push(Route::Search {});
                    },
                    SearchIcon { class: "w-5 h-5" }
                    "Start searching"
                }
            }
        }
    }
}
