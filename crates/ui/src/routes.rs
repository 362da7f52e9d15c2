use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, ResultsView, UploadView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/upload", UploadView)] Upload {},
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Docbrief" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Upload {}, "Upload" } }
                li { Link { to: Route::Results {}, "Results" } }
            }
        }
    }
}
