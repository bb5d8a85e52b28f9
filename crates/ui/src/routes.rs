use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_route};

use crate::views::{QuizView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StartView)] Start {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/results", ResultsView)] Results {},
}

/// The root path starts a quiz right away.
#[component]
fn StartView() -> Element {
    rsx! { QuizView {} }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer",
                p { "Quiz App" }
            }
        }
    }
}

#[component]
fn Header() -> Element {
    let route = use_route::<Route>();
    let on_results = matches!(route, Route::Results {});

    rsx! {
        header { class: "header",
            Link { class: "brand", to: Route::Start {}, "Quiz App" }
            nav {
                if !on_results {
                    Link { class: "nav-link", to: Route::Quiz {}, "Start" }
                }
            }
        }
    }
}
