use std::sync::Arc;
use std::time::{Duration, Instant};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::QuizResults;
use quiz_core::time::fixed_now;
use services::{
    AppServices, Clock, IdentityShuffler, QuestionLoader, QuestionSource, QuizLoopService,
    ResultsService,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{QuizView, ResultsView};

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    results: Arc<ResultsService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handoff: Option<QuizResults>,
    quiz_handles: Option<QuizTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let handoff = props.handoff.clone();
    use_context_provider(move || {
        let ctx = build_app_context(&app);
        if let Some(results) = handoff {
            ctx.handoff().put(results);
        }
        ctx
    });
    use_context_provider(|| props.view);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/quiz")]
    QuizRedirect {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

#[component]
fn QuizRedirect() -> Element {
    rsx! { p { "quiz restarted" } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub quiz_handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending futures a few times so resources settle before rendering.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    /// Keep driving for at least `duration` of wall-clock time so timers can fire.
    pub async fn drive_for(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        while Instant::now() < deadline {
            self.drive_async().await;
        }
    }

    pub fn quiz_handles(&self) -> QuizTestHandles {
        self.quiz_handles.clone().expect("quiz handles available")
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    source: Arc<dyn QuestionSource>,
    handoff: Option<QuizResults>,
) -> ViewHarness {
    setup_view_harness_with_storage(view, source, handoff, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    source: Arc<dyn QuestionSource>,
    handoff: Option<QuizResults>,
    storage: Storage,
) -> ViewHarness {
    let loader = QuestionLoader::new(source).with_shuffler(Arc::new(IdentityShuffler));
    let services = AppServices::from_loader(&storage, loader, Clock::fixed(fixed_now()));
    let app = Arc::new(TestApp {
        quiz_loop: services.quiz_loop(),
        results: services.results(),
    });

    let quiz_handles = match view {
        ViewKind::Quiz => Some(QuizTestHandles::default()),
        ViewKind::Results => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handoff,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        quiz_handles,
    }
}
