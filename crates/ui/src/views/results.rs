use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ResultRowVm, ResultsVm, map_results};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let results_service = ctx.results();
    let handoff = ctx.handoff();
    let missing = handoff.is_empty();

    let resource = use_resource(move || {
        let results_service = results_service.clone();
        let handoff = handoff.clone();
        async move {
            let results = handoff.peek();
            let report = results_service.present(results.as_ref()).await;
            Ok::<_, ViewError>(report.map(|report| map_results(&report)))
        }
    });

    // Nothing was handed off (direct visit or reload): start over.
    use_effect(move || {
        if missing {
            let _ = navigator.replace(Route::Quiz {});
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        section { class: "card results",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "status", "Loading results…" }
                },
                ViewState::Ready(Some(vm)) => rsx! {
                    ResultsBody { vm }
                },
                ViewState::Ready(None) => rsx! {},
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn ResultsBody(vm: ResultsVm) -> Element {
    rsx! {
        h2 { class: "score", "{vm.score_line}" }
        p { class: "best", "{vm.best_line}" }
        p { class: "elapsed", "{vm.elapsed_line}" }
        ul { class: "results-list",
            for row in vm.rows.iter().cloned() {
                ResultRowItem { key: "{row.key}", row }
            }
        }
        Link { class: "restart", to: Route::Quiz {}, "Restart Quiz" }
    }
}

#[component]
fn ResultRowItem(row: ResultRowVm) -> Element {
    rsx! {
        li {
            div { class: "row-head",
                span { class: "row-title", "{row.title}" }
                span { class: "{row.badge_class}", "{row.badge}" }
            }
            p { class: "answer", "{row.answer_line}" }
            if let Some(line) = row.correct_line.as_ref() {
                p { class: "correct", "{line}" }
            }
        }
    }
}
