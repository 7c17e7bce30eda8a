use dioxus::prelude::*;

use crate::vm::ProgressTrackerVm;

#[component]
pub fn ProgressTracker(vm: ProgressTrackerVm) -> Element {
    rsx! {
        section { class: "card progress-tracker",
            div { class: "module-title",
                h2 { "Progress Tracker" }
                span { class: "percentage", "{vm.percentage}%" }
            }
            div { class: "bar",
                div { class: "fill", style: vm.bar_style() }
            }
            p { class: "muted", "{vm.summary_label()}" }
            if vm.recorded {
                p { class: "completion-banner", "Module completed" }
            }
            ul { class: "action-list",
                for item in vm.items.iter() {
                    li {
                        key: "{item.id}",
                        class: if item.completed { "done" } else { "" },
                        span {
                            if item.completed { "✓ " } else { "○ " }
                            "{item.description}"
                        }
                        if let Some(at) = item.completed_at_str.as_ref() {
                            span { class: "muted", "{at}" }
                        }
                    }
                }
            }
        }
    }
}
