use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, NotFoundView, TopicView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/modules/:slug", TopicView)] Topic { slug: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        nav { class: "header",
            Link { to: Route::Home {}, class: "brand", "Quality Sensei" }
        }
    }
}
