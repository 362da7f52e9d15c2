mod result_state;
mod results_vm;

pub use result_state::{
    CardFlipState, ResultIntent, ResultViewState, SectionKind, SectionVisibility,
};
pub use results_vm::{FlashcardFace, FlashcardVm, QuizRowVm, ResultsVm, map_results};
