use brief_core::{AudioSource, BackendOrigin, ContentBundle, Flashcard, QuizItem};

/// UI-ready projection of a `ContentBundle` that passed the content gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub title: String,
    pub summary: Option<String>,
    pub audio: Option<AudioSource>,
    pub flashcards: Vec<FlashcardVm>,
    pub quiz: Vec<QuizRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardVm {
    pub index: usize,
    pub question: String,
    pub answer: String,
}

/// What a flashcard shows for a given flip state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardFace {
    pub label: &'static str,
    pub text: String,
    pub hint: &'static str,
}

impl FlashcardVm {
    fn new(index: usize, card: &Flashcard) -> Self {
        Self {
            index,
            question: card.question.clone(),
            answer: card.answer.clone(),
        }
    }

    #[must_use]
    pub fn face(&self, flipped: bool) -> FlashcardFace {
        if flipped {
            FlashcardFace {
                label: "Answer",
                text: self.answer.clone(),
                hint: "Click to see question",
            }
        } else {
            FlashcardFace {
                label: "Question",
                text: self.question.clone(),
                hint: "Click to reveal answer",
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRowVm {
    pub key: String,
    pub display_index: i64,
    pub question: String,
    pub answer: String,
}

impl QuizRowVm {
    fn new(position: usize, item: &QuizItem) -> Self {
        let key = match item.id {
            Some(id) if id != 0 => format!("quiz-id-{id}"),
            _ => format!("quiz-pos-{position}"),
        };
        Self {
            key,
            display_index: item.display_index(position),
            question: item.question.clone(),
            answer: item.correct_answer.clone(),
        }
    }
}

/// Map a bundle into the results view model.
///
/// Returns `None` when the bundle has nothing to show.
#[must_use]
pub fn map_results(bundle: &ContentBundle, origin: &BackendOrigin) -> Option<ResultsVm> {
    if !bundle.has_content() {
        return None;
    }

    Some(ResultsVm {
        title: bundle.title().to_string(),
        summary: bundle.summary_text().map(str::to_string),
        audio: bundle.audio_path().map(|path| origin.audio_source(path)),
        flashcards: bundle
            .flashcards()
            .iter()
            .enumerate()
            .map(|(index, card)| FlashcardVm::new(index, card))
            .collect(),
        quiz: bundle
            .quiz_items()
            .iter()
            .enumerate()
            .map(|(position, item)| QuizRowVm::new(position, item))
            .collect(),
    })
}
