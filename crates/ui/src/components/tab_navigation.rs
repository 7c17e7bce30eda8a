use dioxus::prelude::*;
use sensei_core::model::Tab;

#[component]
pub fn TabNavigation(active: Tab, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        div { class: "tabs", role: "tablist",
            for tab in Tab::ALL {
                button {
                    key: "{tab}",
                    id: "tab-{tab}",
                    role: "tab",
                    class: if tab == active { "active" } else { "" },
                    aria_selected: tab == active,
                    onclick: move |_| on_select.call(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}
