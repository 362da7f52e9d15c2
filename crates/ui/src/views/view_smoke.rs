use brief_core::{BackendOrigin, ContentBundle, Flashcard, QuizItem};

use crate::views::results::AutoplayEvent;
use crate::vm::{ResultIntent, SectionKind};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_origin};

fn full_bundle() -> ContentBundle {
    ContentBundle::new()
        .with_file_name("lecture.pdf")
        .with_summary("Line one.\n\nLine two.")
        .with_audio_path("/audio/out.mp3")
        .with_flashcards(vec![
            Flashcard::new("What is Rust?", "A systems language."),
            Flashcard::new("Who owns a value?", "Exactly one binding."),
        ])
        .with_quiz(vec![
            QuizItem::new("Q1", "A1"),
            QuizItem::new("Q2", "A2").with_id(5),
        ])
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_without_content_renders_fallback() {
    for results in [None, Some(ContentBundle::new()), Some(ContentBundle::new().with_summary(""))] {
        let harness = setup_view_harness(ViewKind::Results, results);
        let html = harness.render();
        assert!(html.contains("No content found."), "missing fallback in {html}");
        assert!(html.contains("Back to Upload"), "missing upload action in {html}");
        assert_eq!(html.matches("<button").count(), 1, "expected one control in {html}");
        assert!(!html.contains("results-section"), "unexpected section in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_with_any_field_skips_fallback() {
    let bundles = [
        ContentBundle::new().with_summary("text"),
        ContentBundle::new().with_audio_path("/audio/out.mp3"),
        ContentBundle::new().with_flashcards(vec![Flashcard::new("Q", "A")]),
        ContentBundle::new().with_quiz(vec![QuizItem::new("Q", "A")]),
    ];
    for bundle in bundles {
        let harness = setup_view_harness(ViewKind::Results, Some(bundle));
        let html = harness.render();
        assert!(!html.contains("No content found."), "fallback rendered in {html}");
        assert!(html.contains("Upload Another"), "missing nav in {html}");
        assert!(html.contains("Go Home"), "missing nav in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_renders_all_sections_in_order() {
    let harness = setup_view_harness(ViewKind::Results, Some(full_bundle()));
    let html = harness.render();

    assert!(html.contains("lecture.pdf"), "missing title in {html}");
    let positions: Vec<usize> = [
        "results-section--summary",
        "results-section--audio",
        "results-section--flashcards",
        "results-section--quiz",
    ]
    .iter()
    .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker} in {html}")))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "order {positions:?}");

    assert!(html.contains("Line one.\n\nLine two."), "summary whitespace lost in {html}");
    assert!(html.contains("Flashcards (2)"), "missing card count in {html}");
    assert!(html.contains("Quiz Questions (2)"), "missing quiz count in {html}");
    assert_eq!(html.matches("results-chevron--up").count(), 4);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_indices_fall_back_to_position() {
    let bundle = ContentBundle::new().with_quiz(vec![
        QuizItem::new("Q1", "A1"),
        QuizItem::new("Q2", "A2").with_id(5),
    ]);
    let harness = setup_view_harness(ViewKind::Results, Some(bundle));
    let html = harness.render();
    assert!(html.contains(r#"class="quiz-index">1<"#), "missing index 1 in {html}");
    assert!(html.contains(r#"class="quiz-index">5<"#), "missing index 5 in {html}");
    assert!(html.contains("A1") && html.contains("A2"), "answers hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn audio_section_points_at_backend_origin() {
    let bundle = ContentBundle::new().with_audio_path("/audio/out.mp3");
    let harness = setup_view_harness(ViewKind::Results, Some(bundle));
    let html = harness.render();
    assert!(html.contains("Audio Summary"), "missing audio header in {html}");
    assert!(
        html.contains(r#"src="http://localhost:5000/audio/out.mp3""#),
        "missing audio src in {html}"
    );
    assert!(html.contains(r#"type="audio/mpeg""#), "missing mime in {html}");
    assert!(!html.contains("Audio generation failed"), "unexpected panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn audio_section_uses_configured_origin() {
    let origin = BackendOrigin::parse("http://127.0.0.1:9000/").expect("origin");
    let bundle = ContentBundle::new().with_audio_path("/audio/x.mp3");
    let harness = setup_view_harness_with_origin(ViewKind::Results, Some(bundle), origin);
    let html = harness.render();
    assert!(
        html.contains(r#"src="http://127.0.0.1:9000/audio/x.mp3""#),
        "missing audio src in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn audio_body_without_source_explains_failure() {
    let harness = setup_view_harness(ViewKind::AudioBody(None), None);
    let html = harness.render();
    assert!(html.contains("Audio generation failed"), "missing panel in {html}");
    assert!(html.contains("ELEVENLABS_API_KEY"), "missing cause in {html}");
    assert!(!html.contains("<audio"), "unexpected player in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_only_bundle_flips_on_click() {
    let bundle = ContentBundle::new().with_flashcards(vec![Flashcard::new("Q", "A")]);
    let mut harness = setup_view_harness(ViewKind::Results, Some(bundle));

    let html = harness.render();
    assert!(html.contains("Flashcards (1)"), "missing header in {html}");
    for marker in [
        "results-section--summary",
        "results-section--audio",
        "results-section--quiz",
    ] {
        assert!(!html.contains(marker), "unexpected {marker} in {html}");
    }
    assert!(html.contains(r#"class="flashcard-text">Q<"#), "question hidden in {html}");
    assert!(html.contains("Click to reveal answer"), "missing hint in {html}");

    harness.send(ResultIntent::ToggleCard(0));
    let html = harness.render();
    assert!(html.contains(r#"class="flashcard-text">A<"#), "answer hidden in {html}");
    assert!(html.contains("Click to see question"), "missing hint in {html}");

    harness.send(ResultIntent::ToggleCard(0));
    let html = harness.render();
    assert!(html.contains(r#"class="flashcard-text">Q<"#), "question hidden in {html}");
    assert!(!harness.results_state().flipped.is_flipped(0));
}

#[tokio::test(flavor = "current_thread")]
async fn flipping_one_card_keeps_the_other() {
    let mut harness = setup_view_harness(ViewKind::Results, Some(full_bundle()));
    harness.send(ResultIntent::ToggleCard(1));

    let html = harness.render();
    assert!(html.contains("What is Rust?"), "first card flipped in {html}");
    assert!(html.contains("Exactly one binding."), "second card not flipped in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn collapsing_a_section_keeps_its_header() {
    let mut harness = setup_view_harness(ViewKind::Results, Some(full_bundle()));
    harness.send(ResultIntent::ToggleSection(SectionKind::Summary));

    let html = harness.render();
    assert!(html.contains("results-toggle-summary"), "header gone in {html}");
    assert!(!html.contains("results-summary-scroll"), "body still shown in {html}");
    assert!(html.contains("results-chevron--down"), "chevron not flipped in {html}");
    assert!(html.contains("flashcard-grid"), "other section collapsed in {html}");
    assert!(html.contains("quiz-list"), "other section collapsed in {html}");

    let state = harness.results_state();
    assert!(!state.sections.is_expanded(SectionKind::Summary));
    assert!(state.sections.is_expanded(SectionKind::Audio));
}

#[tokio::test(flavor = "current_thread")]
async fn collapsed_audio_section_drops_the_player() {
    let mut harness = setup_view_harness(ViewKind::Results, Some(full_bundle()));
    harness.send(ResultIntent::ToggleSection(SectionKind::Audio));

    let html = harness.render();
    assert!(html.contains("Audio Summary"), "header gone in {html}");
    assert!(!html.contains("<audio"), "player still mounted in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn autoplay_runs_once_across_rerenders_and_toggles() {
    let mut harness = setup_view_harness(ViewKind::Results, Some(full_bundle()));
    assert_eq!(harness.autoplay_attempts(), 1);

    harness.send(ResultIntent::ToggleCard(0));
    harness.send(ResultIntent::ToggleSection(SectionKind::Summary));
    assert_eq!(harness.autoplay_attempts(), 1);

    harness.send(ResultIntent::ToggleSection(SectionKind::Audio));
    harness.send(ResultIntent::ToggleSection(SectionKind::Audio));
    assert!(harness.render().contains("<audio"), "player not back");
    assert_eq!(
        harness.autoplay_events(),
        vec![AutoplayEvent::Started(
            "http://localhost:5000/audio/out.mp3".to_string()
        )]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn bundle_without_audio_never_autoplays() {
    let bundle = ContentBundle::new().with_summary("text");
    let harness = setup_view_harness(ViewKind::Results, Some(bundle));
    assert_eq!(harness.autoplay_attempts(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn new_audio_source_cancels_the_previous_attempt() {
    let origin = BackendOrigin::default();
    let first = origin.audio_source("/audio/one.mp3");
    let second = origin.audio_source("/audio/two.mp3");
    let mut harness = setup_view_harness(ViewKind::Autoplay(Some(first.clone())), None);

    harness.set_autoplay_source(Some(first.clone()));
    harness.set_autoplay_source(Some(second.clone()));
    harness.set_autoplay_source(Some(second.clone()));
    harness.set_autoplay_source(None);

    assert_eq!(
        harness.autoplay_events(),
        vec![
            AutoplayEvent::Started(first.src),
            AutoplayEvent::Cancelled,
            AutoplayEvent::Started(second.src),
            AutoplayEvent::Cancelled,
        ]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_links_to_results_when_loaded() {
    let harness = setup_view_harness(ViewKind::Home, None);
    let html = harness.render();
    assert!(html.contains("Open results"), "missing upload link in {html}");
    assert!(!html.contains("View latest results"), "unexpected link in {html}");

    let harness = setup_view_harness(ViewKind::Home, Some(full_bundle()));
    let html = harness.render();
    assert!(html.contains("View latest results"), "missing results link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_renders_path_form() {
    let harness = setup_view_harness(ViewKind::Upload, None);
    let html = harness.render();
    assert!(html.contains("upload-path-input"), "missing input in {html}");
    assert!(html.contains("Open results"), "missing action in {html}");
}
