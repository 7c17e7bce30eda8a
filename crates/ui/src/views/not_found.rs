use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        NotFoundPanel { path }
    }
}

#[component]
pub fn NotFoundPanel(path: String) -> Element {
    rsx! {
        div { class: "page not-found",
            h1 { "Module not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to Modules" }
        }
    }
}
