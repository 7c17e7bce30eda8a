use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HomeVm, TopicGroupVm, map_home};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();

    let mut resource = use_resource(move || {
        let progress = progress.clone();
        async move {
            let overview = progress.course_overview().await.map_err(|err| {
                warn!(error = %err, "failed to load course overview");
                ViewError::Unknown
            })?;
            Ok::<_, ViewError>(map_home(&overview))
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page home",
            h1 { "Quality Sensei" }
            p { class: "muted", "Hands-on web automation practice, one module at a time." }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    CourseProgress { vm: vm.clone() }
                    div { class: "topic-groups",
                        for group in vm.groups.iter().cloned() {
                            TopicGroupCard { key: "{group.title}", group }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                    button { onclick: move |_| resource.restart(), "Retry" }
                },
            }
        }
    }
}

#[component]
fn CourseProgress(vm: HomeVm) -> Element {
    rsx! {
        section { class: "card course-progress",
            div { class: "module-title",
                h2 { "Course progress" }
                span { class: "percentage", "{vm.percentage}%" }
            }
            div { class: "bar",
                div { class: "fill", style: vm.bar_style() }
            }
            p { class: "muted", "{vm.completed} of {vm.total} modules completed" }
        }
    }
}

#[component]
fn TopicGroupCard(group: TopicGroupVm) -> Element {
    rsx! {
        section { class: "card topic-group",
            div { class: "module-title",
                h2 { "{group.title}" }
                span { class: "badge", "{group.completed}/{group.total}" }
            }
            p { class: "muted", "{group.description}" }
            ul { class: "topic-list",
                for topic in group.topics.iter() {
                    li { key: "{topic.slug}",
                        Link {
                            to: Route::Topic { slug: topic.slug.to_string() },
                            class: "card topic-card",
                            h3 { "{topic.title}" }
                            p { "{topic.description}" }
                            if topic.completed {
                                span { class: "badge done", "Completed" }
                            } else {
                                span { class: "badge", "Not started" }
                            }
                            if let Some(at) = topic.last_attempt_str.clone() {
                                p { class: "muted", "Last attempt: {at}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
