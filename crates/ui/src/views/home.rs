use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let has_results = ctx.has_results();

    rsx! {
        div { class: "page",
            h2 { "Home" }
            p { "Read the summary, flashcards, quiz and narration generated for a document." }
            p { class: "view-hint", "Backend: {ctx.backend_origin()}" }
            div { class: "home-actions",
                Link { class: "btn btn-primary", to: Route::Upload {}, "Open results" }
                if has_results {
                    Link { class: "btn btn-secondary", to: Route::Results {}, "View latest results" }
                }
            }
        }
    }
}
