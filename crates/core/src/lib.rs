pub mod audio;
pub mod error;
pub mod model;

pub use audio::{AUDIO_MIME, AudioSource, BackendOrigin};
pub use error::BundleError;
pub use model::{ContentBundle, DEFAULT_TITLE, Flashcard, QuizItem};
