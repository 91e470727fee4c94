//! Back-to-search button

use crate::components::icons::ArrowLeftIcon;
use dioxus::prelude::*;

/// Link-styled button shown at the top of every details page state
#[component]
pub fn BackButton(
    #[props(default = "Back to Search".to_string())] text: String,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        nav { class: "mb-6",
            button {
                class: "group inline-flex items-center gap-2 text-sm text-gray-400 hover:text-emerald-300 transition-colors",
                "data-testid": "back-button",
                onclick: move |_| on_click.call(()),
                ArrowLeftIcon { class: "w-4 h-4 transition-transform group-hover:-translate-x-0.5" }
                span { "{text}" }
            }
        }
    }
}
