use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();
    let search_active = matches!(current_route, Route::Search {} | Route::TrackDetails { .. });
    let search_class = if search_active {
        "text-white"
    } else {
        "text-gray-400 hover:text-white"
    };

    rsx! {
        header { class: "border-b border-gray-800",
            nav { class: "container mx-auto max-w-6xl px-6 py-4 flex items-center gap-6",
                Link {
                    to: Route::Home {},
                    class: "text-lg font-bold text-emerald-400",
                    "tuneseek"
                }
                Link { to: Route::Search {}, class: "{search_class}", "Search" }
            }
        }
        main { Outlet::<Route> {} }
    }
}
