use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::QuizResults;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizOptionVm, QuizScreenVm, QuizStep, QuizVm, start_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let handoff = ctx.handoff();
    let clock = quiz_loop.clock();

    let vm = use_signal(|| None::<QuizVm>);

    let resource = {
        let quiz_loop = quiz_loop.clone();
        let handoff = handoff.clone();
        use_resource(move || {
            let quiz_loop = quiz_loop.clone();
            let handoff = handoff.clone();
            let mut vm = vm;
            async move {
                handoff.clear();
                let started = start_quiz(&quiz_loop).await?;
                vm.set(Some(started));
                Ok::<_, ViewError>(())
            }
        })
    };

    // The session is already final here; only the best-score write is pending.
    let on_complete = use_callback(move |results: QuizResults| {
        let quiz_loop = quiz_loop.clone();
        let handoff = handoff.clone();
        spawn(async move {
            quiz_loop.finish(&results).await;
            handoff.put(results);
            let _ = navigator.replace(Route::Results {});
        });
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let step = {
            let mut guard = vm.write();
            let Some(vm) = guard.as_mut() else {
                return;
            };
            match intent {
                QuizIntent::Select(option) => {
                    vm.select(option);
                    QuizStep::Continue
                }
                QuizIntent::Previous => {
                    vm.previous();
                    QuizStep::Continue
                }
                QuizIntent::Next => vm.next(clock),
            }
        };
        if let QuizStep::Completed(results) = step {
            on_complete.call(results);
        }
    });

    // Memo so that writes leaving (token, seconds) unchanged do not reschedule the tick.
    let timer_key = use_memo(move || vm.read().as_ref().and_then(QuizVm::timer_key));
    let _timer = use_resource(move || {
        let key = timer_key();
        let mut vm = vm;
        async move {
            let Some((token, _)) = key else {
                return;
            };
            tokio::time::sleep(TICK_INTERVAL).await;
            let step = vm.write().as_mut().map(|vm| vm.tick(token, clock));
            if let Some(QuizStep::Completed(results)) = step {
                on_complete.call(results);
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let state = view_state_from_resource(resource);
    let screen = vm.read().as_ref().map(QuizVm::screen);

    let body = match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "status", "Loading questions…" }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
        ViewState::Ready(()) => match screen {
            Some(Some(screen)) => rsx! {
                QuizScreen { screen, dispatch }
            },
            Some(None) => rsx! {
                p { class: "status", "Loading results…" }
            },
            None => rsx! {
                p { class: "status", "Loading questions…" }
            },
        },
    };

    rsx! {
        section { class: "card quiz", {body} }
    }
}

#[component]
fn QuizScreen(screen: QuizScreenVm, dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-meta",
            span { class: "position", "{screen.position_label}" }
            span { class: "timer", "⏱ {screen.timer_label}" }
        }
        div { class: "progress",
            div { class: "progress-fill", style: "width: {screen.percent}%" }
        }
        h2 { class: "question", "{screen.question}" }
        div { class: "options",
            for option in screen.options.iter().cloned() {
                OptionButton { key: "{option.label}", option, dispatch }
            }
        }
        div { class: "actions",
            button {
                class: "prev",
                disabled: !screen.can_previous,
                onclick: move |_| dispatch.call(QuizIntent::Previous),
                "Previous"
            }
            button {
                class: "next",
                disabled: !screen.can_next,
                onclick: move |_| dispatch.call(QuizIntent::Next),
                "{screen.next_label}"
            }
        }
    }
}

#[component]
fn OptionButton(option: QuizOptionVm, dispatch: Callback<QuizIntent>) -> Element {
    let class = if option.selected { "option selected" } else { "option" };
    let label = option.label.clone();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| dispatch.call(QuizIntent::Select(label.clone())),
            "{option.label}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
