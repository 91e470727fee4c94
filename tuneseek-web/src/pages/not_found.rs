use crate::Route;
use dioxus::prelude::*;
use tuneseek_ui::PageContainer;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        PageContainer {
            div { class: "text-center py-24", "data-testid": "not-found",
                h1 { class: "text-3xl font-bold mb-2", "Page not found" }
                p { class: "text-gray-400 mb-6", "Nothing lives at {path}." }
                Link {
                    to: Route::Home {},
                    class: "text-emerald-400 hover:text-emerald-300",
                    "Go home"
                }
            }
        }
    }
}
