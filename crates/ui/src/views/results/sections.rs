use dioxus::prelude::*;

use brief_core::AudioSource;

use crate::vm::{CardFlipState, FlashcardVm, QuizRowVm, ResultIntent, SectionKind};

use super::autoplay::AUDIO_ELEMENT_ID;

//
// ─── HEADER ────────────────────────────────────────────────────────────────────
//

fn counted_title(kind: SectionKind, count: usize) -> String {
    format!("{} ({count})", kind.title())
}

/// Clickable section header. Always rendered, whatever the expansion state.
#[component]
fn SectionHeader(
    kind: SectionKind,
    title: String,
    expanded: bool,
    on_intent: Callback<ResultIntent>,
) -> Element {
    let chevron_class = if expanded {
        "results-chevron results-chevron--up"
    } else {
        "results-chevron results-chevron--down"
    };
    let chevron_path = if expanded { "M6 15l6-6 6 6" } else { "M6 9l6 6 6-6" };

    rsx! {
        button {
            id: kind.toggle_id(),
            class: "results-section-toggle",
            r#type: "button",
            aria_expanded: "{expanded}",
            onclick: move |_| on_intent.call(ResultIntent::ToggleSection(kind)),
            div { class: "results-section-heading",
                SectionIcon { kind }
                h2 { class: "results-section-title", "{title}" }
            }
            span { class: chevron_class, aria_hidden: "true",
                svg {
                    view_box: "0 0 24 24",
                    stroke: "currentColor",
                    stroke_width: "2",
                    fill: "none",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: chevron_path }
                }
            }
        }
    }
}

#[component]
fn SectionIcon(kind: SectionKind) -> Element {
    let (modifier, paths): (&str, &[&str]) = match kind {
        SectionKind::Summary => (
            "summary",
            &[
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
                "M14 2v6h6",
                "M16 13H8",
                "M16 17H8",
            ],
        ),
        SectionKind::Audio => (
            "audio",
            &["M9 18V5l12-2v13", "M9 18a3 3 0 1 1-6 0 3 3 0 0 1 6 0z", "M21 16a3 3 0 1 1-6 0 3 3 0 0 1 6 0z"],
        ),
        SectionKind::Flashcards => (
            "flashcards",
            &["M4 19.5A2.5 2.5 0 0 1 6.5 17H20", "M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z"],
        ),
        SectionKind::Quiz => (
            "quiz",
            &["M12 5a3 3 0 1 0-5.99.14 4 4 0 0 0-2.53 5.77 4 4 0 0 0 .56 6.59A4 4 0 1 0 12 18z", "M12 5a3 3 0 1 1 5.99.14 4 4 0 0 1 2.53 5.77 4 4 0 0 1-.56 6.59A4 4 0 1 1 12 18z"],
        ),
    };

    rsx! {
        span { class: "results-icon results-icon--{modifier}", aria_hidden: "true",
            svg {
                view_box: "0 0 24 24",
                stroke: "currentColor",
                stroke_width: "1.8",
                fill: "none",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                for d in paths.iter() {
                    path { d: *d }
                }
            }
        }
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

#[component]
pub(super) fn SummarySection(
    text: String,
    expanded: bool,
    on_intent: Callback<ResultIntent>,
) -> Element {
    rsx! {
        section { class: "results-section results-section--summary",
            SectionHeader {
                kind: SectionKind::Summary,
                title: SectionKind::Summary.title().to_string(),
                expanded,
                on_intent,
            }
            if expanded {
                // Bounded, scrollable; CSS keeps the literal line breaks.
                div { class: "results-summary-scroll",
                    p { class: "results-summary-text", "{text}" }
                }
            }
        }
    }
}

//
// ─── AUDIO ─────────────────────────────────────────────────────────────────────
//

#[component]
pub(super) fn AudioSection(
    #[props(!optional)] source: Option<AudioSource>,
    expanded: bool,
    on_intent: Callback<ResultIntent>,
) -> Element {
    rsx! {
        section { class: "results-section results-section--audio",
            SectionHeader {
                kind: SectionKind::Audio,
                title: SectionKind::Audio.title().to_string(),
                expanded,
                on_intent,
            }
            if expanded {
                div { class: "results-audio-body",
                    AudioBody { source }
                }
            }
        }
    }
}

/// Player when a source exists, otherwise an explanation of why it is missing.
#[component]
pub(crate) fn AudioBody(#[props(!optional)] source: Option<AudioSource>) -> Element {
    match source {
        Some(source) => rsx! { AudioPlayer { source } },
        None => rsx! { AudioUnavailable {} },
    }
}

#[component]
fn AudioPlayer(source: AudioSource) -> Element {
    rsx! {
        audio { id: AUDIO_ELEMENT_ID, class: "results-audio", controls: true,
            source { src: "{source.src}", r#type: "{source.mime}" }
            "Your browser does not support the audio element."
        }
    }
}

#[component]
fn AudioUnavailable() -> Element {
    rsx! {
        div { class: "results-audio-unavailable",
            p { class: "results-audio-unavailable__title",
                "⚠️ Audio generation failed. This could be because:"
            }
            ul {
                li { "ELEVENLABS_API_KEY is not set in your .env file" }
                li { "API key is invalid or expired" }
                li { "Network error occurred during audio generation" }
            }
            p { class: "results-audio-unavailable__note",
                "The summary is still available above. Audio is an optional feature."
            }
        }
    }
}

//
// ─── FLASHCARDS ────────────────────────────────────────────────────────────────
//

#[component]
pub(super) fn FlashcardsSection(
    cards: Vec<FlashcardVm>,
    flipped: CardFlipState,
    expanded: bool,
    on_intent: Callback<ResultIntent>,
) -> Element {
    let count = cards.len();
    let card_nodes = cards.iter().map(|card| {
        let index = card.index;
        let is_flipped = flipped.is_flipped(index);
        let face = card.face(is_flipped);
        let class = if is_flipped {
            "flashcard flashcard--answer"
        } else {
            "flashcard flashcard--question"
        };
        rsx! {
            div {
                key: "{index}",
                id: "flashcard-{index}",
                class: "{class}",
                role: "button",
                onclick: move |_| on_intent.call(ResultIntent::ToggleCard(index)),
                div { class: "flashcard-face",
                    p { class: "flashcard-label", "{face.label}" }
                    p { class: "flashcard-text", "{face.text}" }
                    p { class: "flashcard-hint", "{face.hint}" }
                }
            }
        }
    });

    rsx! {
        section { class: "results-section results-section--flashcards",
            SectionHeader {
                kind: SectionKind::Flashcards,
                title: counted_title(SectionKind::Flashcards, count),
                expanded,
                on_intent,
            }
            if expanded {
                div { class: "flashcard-grid",
                    {card_nodes}
                }
            }
        }
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

#[component]
pub(super) fn QuizSection(
    rows: Vec<QuizRowVm>,
    expanded: bool,
    on_intent: Callback<ResultIntent>,
) -> Element {
    let count = rows.len();

    rsx! {
        section { class: "results-section results-section--quiz",
            SectionHeader {
                kind: SectionKind::Quiz,
                title: counted_title(SectionKind::Quiz, count),
                expanded,
                on_intent,
            }
            if expanded {
                ol { class: "quiz-list",
                    for row in rows {
                        li { key: "{row.key}", class: "quiz-item",
                            div { class: "quiz-question",
                                span { class: "quiz-index", "{row.display_index}" }
                                p { class: "quiz-question-text", "{row.question}" }
                            }
                            div { class: "quiz-answer",
                                p { class: "quiz-answer-label", "Answer:" }
                                p { class: "quiz-answer-text", "{row.answer}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
