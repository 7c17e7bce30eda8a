use dioxus::prelude::*;
use sensei_core::model::{Tab, TopicId};
use tracing::warn;

use crate::components::{ExerciseGrid, MarkdownPanel, ModuleLayout, ProgressTracker, TablePanel};
use crate::content::{TabBody, topic_tabs};
use crate::context::AppContext;
use crate::views::{NotFoundPanel, ViewError};
use crate::vm::ProgressTrackerVm;

#[cfg(test)]
use services::TopicSession;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn TopicView(slug: String) -> Element {
    match slug.parse::<TopicId>() {
        Ok(topic) => rsx! {
            TopicPage { key: "{topic}", topic }
        },
        Err(_) => rsx! {
            NotFoundPanel { path: format!("modules/{slug}") }
        },
    }
}

#[component]
fn TopicPage(topic: TopicId) -> Element {
    let ctx = use_context::<AppContext>();
    let practice = ctx.practice();

    let session = use_signal({
        let practice = practice.clone();
        move || {
            practice.start(topic).map_err(|err| {
                warn!(topic = %topic, error = %err, "failed to start topic session");
                ViewError::Unknown
            })
        }
    });
    let mut active = use_signal(Tab::default);
    let error = use_signal(|| None::<ViewError>);

    let log_action = use_callback(move |action_id: String| {
        let practice = practice.clone();
        let mut session = session;
        let mut error = error;
        spawn(async move {
            let current = session.read().clone();
            let Ok(mut current) = current else {
                return;
            };
            let result = practice.log_action(&mut current, &action_id).await;
            // Keep the session even on failure; a later log retries the write.
            session.set(Ok(current));
            match result {
                Ok(_) => error.set(None),
                Err(err) => {
                    warn!(topic = %topic, error = %err, "failed to record progress");
                    error.set(Some(ViewError::Unknown));
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<TopicTestHandles>() {
                handles.register(log_action, session);
            }
        }
    }

    let tabs = topic_tabs(topic);
    let body = match &*session.read() {
        Ok(current) => {
            let vm = ProgressTrackerVm::from(current);
            let panel = match *tabs.select(active()) {
                TabBody::Exercises if topic == TopicId::Tables => rsx! {
                    TablePanel { on_action: log_action }
                },
                TabBody::Exercises => rsx! {
                    ExerciseGrid { items: vm.items.clone(), on_action: log_action }
                },
                TabBody::Markdown(markdown) => rsx! {
                    MarkdownPanel { markdown }
                },
            };
            rsx! {
                {panel}
                ProgressTracker { vm }
            }
        }
        Err(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
    };

    rsx! {
        ModuleLayout {
            topic,
            active: active(),
            on_tab: move |tab| active.set(tab),

            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
            {body}
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct TopicTestHandles {
    log: Rc<RefCell<Option<Callback<String>>>>,
    session: Rc<RefCell<Option<Signal<Result<TopicSession, ViewError>>>>>,
}

#[cfg(test)]
impl TopicTestHandles {
    pub(crate) fn register(
        &self,
        log: Callback<String>,
        session: Signal<Result<TopicSession, ViewError>>,
    ) {
        *self.log.borrow_mut() = Some(log);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn log(&self) -> Callback<String> {
        (*self.log.borrow()).expect("topic log registered")
    }

    pub(crate) fn session(&self) -> Signal<Result<TopicSession, ViewError>> {
        (*self.session.borrow()).expect("topic session registered")
    }
}
