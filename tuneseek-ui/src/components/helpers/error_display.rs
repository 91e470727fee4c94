//! Error display component

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;
use tuneseek_core::ErrorInfo;

/// Inline error line for a failed catalog call
#[component]
pub fn ErrorDisplay(error: ErrorInfo) -> Element {
    let status = error.status.map(|s| format!("HTTP {s}"));

    rsx! {
        div {
            class: "flex items-start gap-2 bg-red-900/60 border border-red-700 text-red-100 px-4 py-3 rounded-lg mb-4",
            "data-testid": "search-error",
            AlertTriangleIcon { class: "w-5 h-5 mt-0.5 shrink-0" }
            div {
                p { "Error: {error.message}" }
                if let Some(status) = status {
                    p { class: "text-xs text-red-300 mt-1", "{status}" }
                }
            }
        }
    }
}
