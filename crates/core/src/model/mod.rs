mod bundle;
mod items;

pub use bundle::{ContentBundle, DEFAULT_TITLE};
pub use items::{Flashcard, QuizItem};
