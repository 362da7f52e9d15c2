use serde::{Deserialize, Serialize};

/// A question/answer pair rendered as a flip card.
///
/// Missing sides decode as empty text so one incomplete card never costs the
/// rest of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl Flashcard {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// One entry of the generated answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuizItemPayload")]
pub struct QuizItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub question: String,
    pub correct_answer: String,
}

impl QuizItem {
    #[must_use]
    pub fn new(question: impl Into<String>, correct_answer: impl Into<String>) -> Self {
        Self {
            id: None,
            question: question.into(),
            correct_answer: correct_answer.into(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Number shown in the item's badge.
    ///
    /// An explicit non-zero `id` wins; otherwise the 1-based position is used.
    #[must_use]
    pub fn display_index(&self, position: usize) -> i64 {
        match self.id {
            Some(id) if id != 0 => id,
            _ => i64::try_from(position).map_or(i64::MAX, |p| p.saturating_add(1)),
        }
    }
}

// Either answer spelling may appear, and a null or missing text is blank.
#[derive(Deserialize)]
struct QuizItemPayload {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    correct_answer: Option<String>,
    #[serde(default, rename = "correctAnswer")]
    correct_answer_camel: Option<String>,
}

impl From<QuizItemPayload> for QuizItem {
    fn from(payload: QuizItemPayload) -> Self {
        let correct_answer = payload
            .correct_answer
            .filter(|s| !s.is_empty())
            .or(payload.correct_answer_camel)
            .unwrap_or_default();
        Self {
            id: payload.id,
            question: payload.question.unwrap_or_default(),
            correct_answer,
        }
    }
}
