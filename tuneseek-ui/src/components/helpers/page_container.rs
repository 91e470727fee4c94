//! Page container component

use dioxus::prelude::*;

/// Centered page column. `narrow` is for single-item pages.
#[component]
pub fn PageContainer(#[props(default)] narrow: bool, children: Element) -> Element {
    let width = if narrow { "max-w-4xl" } else { "max-w-6xl" };

    rsx! {
        div { class: "container mx-auto {width} px-6 py-8", {children} }
    }
}
