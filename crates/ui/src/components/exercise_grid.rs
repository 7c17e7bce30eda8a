use dioxus::prelude::*;

use crate::vm::ActionItemVm;

/// One button per tracked action, for topics without a bespoke exercise.
#[component]
pub fn ExerciseGrid(items: Vec<ActionItemVm>, on_action: EventHandler<String>) -> Element {
    rsx! {
        section { class: "card",
            h3 { "Interactive Practice Elements" }
            div { class: "exercises",
                for item in items {
                    button {
                        key: "{item.id}",
                        id: "exercise-{item.id}",
                        class: if item.completed { "exercise done" } else { "exercise" },
                        onclick: {
                            let id = item.id.clone();
                            move |_| on_action.call(id.clone())
                        },
                        "{item.description}"
                    }
                }
            }
        }
    }
}
