use dioxus::prelude::*;
use dioxus_router::use_navigator;

use brief_core::ContentBundle;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ResultIntent, ResultViewState, SectionKind, map_results};

use super::autoplay::use_audio_autoplay;
use super::sections::{AudioSection, FlashcardsSection, QuizSection, SummarySection};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn log_mounted_bundle(bundle: Option<&ContentBundle>) {
    match bundle {
        Some(bundle) => tracing::debug!(
            title = bundle.title(),
            summary = bundle.summary_text().is_some(),
            audio = ?bundle.audio_path(),
            flashcards = bundle.flashcards().len(),
            quiz = bundle.quiz_items().len(),
            "results view mounted"
        ),
        None => tracing::debug!("results view mounted without navigation state"),
    }
}

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    // The bundle is captured once; later navigation-state changes need a remount.
    let vm = use_hook(|| {
        let bundle = ctx.current_results();
        if cfg!(debug_assertions) {
            log_mounted_bundle(bundle.as_deref());
        }
        bundle.and_then(|bundle| map_results(&bundle, ctx.backend_origin()))
    });

    // Owned by the page so collapsing the Audio section does not replay it.
    use_audio_autoplay(vm.as_ref().and_then(|vm| vm.audio.clone()));

    let mut state = use_signal(ResultViewState::default);
    let dispatch = use_callback(move |intent: ResultIntent| {
        tracing::trace!(?intent, "results intent");
        let next = state.peek().reduce(intent);
        state.set(next);
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<ResultsTestHandles>() {
            handles.register(dispatch, state);
        }
    });

    let Some(vm) = vm else {
        return rsx! { NoContent {} };
    };

    let view_state = state.read().clone();
    let sections = view_state.sections;

    rsx! {
        div { class: "page results-page",
            h1 { class: "results-title", "{vm.title}" }

            if let Some(text) = vm.summary.clone() {
                SummarySection {
                    text,
                    expanded: sections.is_expanded(SectionKind::Summary),
                    on_intent: dispatch,
                }
            }

            if vm.audio.is_some() {
                AudioSection {
                    source: vm.audio.clone(),
                    expanded: sections.is_expanded(SectionKind::Audio),
                    on_intent: dispatch,
                }
            }

            if !vm.flashcards.is_empty() {
                FlashcardsSection {
                    cards: vm.flashcards.clone(),
                    flipped: view_state.flipped.clone(),
                    expanded: sections.is_expanded(SectionKind::Flashcards),
                    on_intent: dispatch,
                }
            }

            if !vm.quiz.is_empty() {
                QuizSection {
                    rows: vm.quiz.clone(),
                    expanded: sections.is_expanded(SectionKind::Quiz),
                    on_intent: dispatch,
                }
            }

            div { class: "results-nav",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Upload {});
                    },
                    "Upload Another"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "Go Home"
                }
            }
        }
    }
}

#[component]
fn NoContent() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page results-empty",
            p { class: "results-empty__message", "⚠️ No content found." }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Upload {});
                },
                "Back to Upload"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ResultsTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ResultIntent>>>>,
    state: Rc<RefCell<Option<Signal<ResultViewState>>>>,
}

#[cfg(test)]
impl ResultsTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<ResultIntent>,
        state: Signal<ResultViewState>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn dispatch(&self) -> Callback<ResultIntent> {
        (*self.dispatch.borrow()).expect("results dispatch registered")
    }

    pub(crate) fn state(&self) -> Signal<ResultViewState> {
        (*self.state.borrow()).expect("results state registered")
    }
}
