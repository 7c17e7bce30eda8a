use dioxus::prelude::*;
use dioxus_router::Link;
use sensei_core::model::{Tab, TopicId};

use super::TabNavigation;
use crate::content::learning_objectives;
use crate::routes::Route;

/// Shared frame of every topic page: header, tabs, objectives, body.
#[component]
pub fn ModuleLayout(
    topic: TopicId,
    active: Tab,
    on_tab: EventHandler<Tab>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "page module",
            header { class: "module-header",
                Link { to: Route::Home {}, "← Back to Modules" }
                div { class: "module-name",
                    span { class: "muted", "Module: " }
                    span { "{topic.group().title()}" }
                }
            }
            div { class: "module-title",
                h1 { "{topic.title()}" }
                TabNavigation { active, on_select: on_tab }
            }
            section { class: "card objectives",
                h2 { "Learning Objectives" }
                p { "{topic.description()}" }
                ul {
                    for objective in learning_objectives(topic) {
                        li { "{objective}" }
                    }
                }
            }
            {children}
        }
    }
}
