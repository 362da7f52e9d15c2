use dioxus::core::Task;
use dioxus::document;
use dioxus::prelude::*;
use serde::Deserialize;

use brief_core::AudioSource;

use super::scripts::autoplay_script;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

pub(super) const AUDIO_ELEMENT_ID: &str = "results-audio";

#[derive(Debug, Deserialize)]
struct PlaybackReport {
    started: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AutoplayOutcome {
    Started,
    Blocked,
    Failed,
}

/// Try to start playback once per distinct source.
///
/// Call this from the page, not the player: collapsing the Audio section
/// unmounts the player but must not count as a new source. A new source
/// cancels the previous attempt before starting its own, and leaving the page
/// drops the caller's scope together with the attempt. When the player is not
/// mounted the script reports it and nothing plays.
pub(crate) fn use_audio_autoplay(source: Option<AudioSource>) {
    let mut in_flight = use_signal(|| None::<Task>);
    let mut last_source = use_signal(|| None::<AudioSource>);
    #[cfg(test)]
    let log = use_hook(try_consume_context::<AutoplayLog>);

    use_effect(use_reactive((&source,), move |(source,)| {
        if *last_source.peek() == source {
            return;
        }
        last_source.set(source.clone());

        let previous = in_flight.write().take();
        if let Some(task) = previous {
            task.cancel();
            #[cfg(test)]
            if let Some(log) = log.as_ref() {
                log.push(AutoplayEvent::Cancelled);
            }
        }

        let Some(source) = source else {
            return;
        };
        #[cfg(test)]
        if let Some(log) = log.as_ref() {
            log.push(AutoplayEvent::Started(source.src.clone()));
        }
        let task = spawn(attempt_autoplay(source));
        in_flight.set(Some(task));
    }));
}

async fn attempt_autoplay(source: AudioSource) {
    let mut eval = document::eval(&autoplay_script(AUDIO_ELEMENT_ID));
    let report = eval.recv::<PlaybackReport>().await;
    report_playback(&source.src, report);
}

/// Log how the attempt ended. Nothing here reaches the page.
fn report_playback<E: std::fmt::Debug>(
    src: &str,
    report: Result<PlaybackReport, E>,
) -> AutoplayOutcome {
    match report {
        Ok(report) if report.started => {
            tracing::debug!(src, "narration autoplay started");
            AutoplayOutcome::Started
        }
        Ok(report) => {
            // Usually the webview's autoplay policy; the user can still press play.
            tracing::warn!(
                src,
                reason = report.error.as_deref().unwrap_or("unknown"),
                "narration autoplay blocked"
            );
            AutoplayOutcome::Blocked
        }
        Err(err) => {
            tracing::warn!(src, error = ?err, "narration autoplay script failed");
            AutoplayOutcome::Failed
        }
    }
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum AutoplayEvent {
    Started(String),
    Cancelled,
}

/// Records what the autoplay hook did, when provided as context.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AutoplayLog(Rc<RefCell<Vec<AutoplayEvent>>>);

#[cfg(test)]
impl AutoplayLog {
    fn push(&self, event: AutoplayEvent) {
        self.0.borrow_mut().push(event);
    }

    pub(crate) fn events(&self) -> Vec<AutoplayEvent> {
        self.0.borrow().clone()
    }

    pub(crate) fn attempts(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|event| matches!(event, AutoplayEvent::Started(_)))
            .count()
    }
}
