use std::path::Path;

use serde::Deserialize;

use crate::error::BundleError;
use crate::model::items::{Flashcard, QuizItem};

/// Title used when the payload carries no file name.
pub const DEFAULT_TITLE: &str = "Document Results";

//
// ─── BUNDLE ────────────────────────────────────────────────────────────────────
//

/// Everything the processing backend produced for one document.
///
/// A missing field means the feature was not requested or not produced; it is
/// never an error. Empty strings are treated the same as missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBundle {
    summary_text: Option<String>,
    file_name: Option<String>,
    audio_path: Option<String>,
    flashcards: Vec<Flashcard>,
    quiz_items: Vec<QuizItem>,
}

impl ContentBundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_summary(mut self, text: impl Into<String>) -> Self {
        self.summary_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_audio_path(mut self, path: impl Into<String>) -> Self {
        self.audio_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_flashcards(mut self, cards: Vec<Flashcard>) -> Self {
        self.flashcards = cards;
        self
    }

    #[must_use]
    pub fn with_quiz(mut self, items: Vec<QuizItem>) -> Self {
        self.quiz_items = items;
        self
    }

    /// Decode a `/summary` response body.
    ///
    /// # Errors
    ///
    /// Returns `BundleError::Json` when the body is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, BundleError> {
        let payload: BundlePayload = serde_json::from_str(raw)?;
        Ok(payload.into())
    }

    /// Read and decode a saved `/summary` response body.
    ///
    /// # Errors
    ///
    /// Returns `BundleError::Io` when the file cannot be read and
    /// `BundleError::Json` when it cannot be decoded.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| BundleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    #[must_use]
    pub fn summary_text(&self) -> Option<&str> {
        non_empty(self.summary_text.as_deref())
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        non_empty(self.file_name.as_deref())
    }

    /// Path of the generated narration, relative to the backend origin.
    #[must_use]
    pub fn audio_path(&self) -> Option<&str> {
        non_empty(self.audio_path.as_deref())
    }

    #[must_use]
    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    #[must_use]
    pub fn quiz_items(&self) -> &[QuizItem] {
        &self.quiz_items
    }

    #[must_use]
    pub fn has_content(&self) -> bool {
        self.summary_text().is_some()
            || !self.flashcards.is_empty()
            || !self.quiz_items.is_empty()
            || self.audio_path().is_some()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.file_name().unwrap_or(DEFAULT_TITLE)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

//
// ─── WIRE FORMAT ───────────────────────────────────────────────────────────────
//

// Backend responses use snake_case, navigation state uses camelCase, and saved
// state can carry both. Each spelling gets its own slot.
#[derive(Debug, Default, Deserialize)]
struct BundlePayload {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    file_name: Option<String>,
    #[serde(default, rename = "fileName")]
    file_name_camel: Option<String>,
    #[serde(default)]
    audio_url: Option<String>,
    #[serde(default, rename = "audioUrl")]
    audio_url_camel: Option<String>,
    #[serde(default)]
    flashcards: Option<Vec<Flashcard>>,
    #[serde(default)]
    quiz: Option<Vec<QuizItem>>,
}

/// The first non-empty spelling, else whichever one was present.
fn either_spelling(camel: Option<String>, snake: Option<String>) -> Option<String> {
    match (camel, snake) {
        (Some(camel), _) if !camel.is_empty() => Some(camel),
        (camel, Some(snake)) if !snake.is_empty() => Some(snake),
        (camel, snake) => camel.or(snake),
    }
}

impl From<BundlePayload> for ContentBundle {
    fn from(payload: BundlePayload) -> Self {
        Self {
            summary_text: payload.summary,
            file_name: either_spelling(payload.file_name_camel, payload.file_name),
            audio_path: either_spelling(payload.audio_url_camel, payload.audio_url),
            flashcards: payload.flashcards.unwrap_or_default(),
            quiz_items: payload.quiz.unwrap_or_default(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
