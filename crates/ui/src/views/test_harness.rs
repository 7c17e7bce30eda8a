use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use sensei_core::time::fixed_now;
use services::{Clock, ProgressService, TopicPracticeService};
use storage::repository::{ProgressRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::topic::TopicTestHandles;
use crate::views::{HomeView, NotFoundView, TopicView};

#[derive(Clone)]
struct TestApp {
    progress: Arc<ProgressService>,
    practice: Arc<TopicPracticeService>,
}

impl UiApp for TestApp {
    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn practice(&self) -> Arc<TopicPracticeService> {
        Arc::clone(&self.practice)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Topic(String),
    NotFound(Vec<String>),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    topic_handles: TopicTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.topic_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Topic(slug) => rsx! { TopicView { slug } },
        ViewKind::NotFound(segments) => rsx! { NotFoundView { segments } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress: Arc<ProgressService>,
    pub topic_handles: TopicTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Log an action through the mounted topic page.
    pub fn log(&self, action_id: &str) {
        let log = self.topic_handles.log();
        self.dom.in_runtime(|| log.call(action_id.to_string()));
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_repo(view, Storage::in_memory().progress)
}

pub fn setup_view_harness_with_repo(
    view: ViewKind,
    repo: Arc<dyn ProgressRepository>,
) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let progress = Arc::new(ProgressService::new(clock, repo));
    let practice = Arc::new(TopicPracticeService::new(clock, Arc::clone(&progress)));
    let topic_handles = TopicTestHandles::default();

    let app = Arc::new(TestApp {
        progress: Arc::clone(&progress),
        practice,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            topic_handles: topic_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        progress,
        topic_handles,
    }
}
