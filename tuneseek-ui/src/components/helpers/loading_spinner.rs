//! Loading spinner component

use dioxus::prelude::*;

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(
    #[props(default = "Loading...".to_string())] message: String,
    /// Small inline variant, used inside buttons
    #[props(default)]
    inline: bool,
) -> Element {
    if inline {
        return rsx! {
            div { class: "animate-spin rounded-full h-5 w-5 border-b-2 border-emerald-400" }
        };
    }

    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-emerald-400" }
            p { class: "ml-4 text-gray-300", "{message}" }
        }
    }
}
