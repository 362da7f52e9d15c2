mod autoplay;
mod scripts;
mod sections;
mod view;

pub use view::ResultsView;

#[cfg(test)]
pub(crate) use autoplay::{AutoplayEvent, AutoplayLog, use_audio_autoplay};
#[cfg(test)]
pub(crate) use sections::AudioBody;
#[cfg(test)]
pub(crate) use view::ResultsTestHandles;
