use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use brief_core::{AudioSource, BackendOrigin, ContentBundle};

use crate::context::{UiApp, build_app_context};
use crate::views::results::{
    AudioBody, AutoplayEvent, AutoplayLog, ResultsTestHandles, use_audio_autoplay,
};
use crate::views::{HomeView, ResultsView, UploadView};
use crate::vm::{ResultIntent, ResultViewState};

#[derive(Clone)]
struct TestApp {
    origin: BackendOrigin,
    results: Option<ContentBundle>,
}

impl UiApp for TestApp {
    fn backend_origin(&self) -> BackendOrigin {
        self.origin.clone()
    }

    fn initial_results(&self) -> Option<ContentBundle> {
        self.results.clone()
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Home,
    Upload,
    Results,
    AudioBody(Option<AudioSource>),
    /// Bare host for the autoplay hook whose source the test can swap.
    Autoplay(Option<AudioSource>),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    results_handles: ResultsTestHandles,
    autoplay_log: AutoplayLog,
    autoplay_source: SourceSlot,
}

type SourceSlot = Rc<RefCell<Option<Signal<Option<AudioSource>>>>>;

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.results_handles.clone());
    use_context_provider(|| props.autoplay_log.clone());
    use_context_provider(|| props.autoplay_source.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Upload => rsx! { UploadView {} },
        ViewKind::Results => rsx! { ResultsView {} },
        ViewKind::AudioBody(source) => rsx! { AudioBody { source } },
        ViewKind::Autoplay(source) => rsx! { AutoplayHost { initial: source } },
    }
}

#[component]
fn AutoplayHost(#[props(!optional)] initial: Option<AudioSource>) -> Element {
    let slot = use_context::<SourceSlot>();
    let source = use_signal(move || initial);
    use_hook(|| *slot.borrow_mut() = Some(source));
    use_audio_autoplay(source());
    rsx! { div { class: "autoplay-host" } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub results_handles: ResultsTestHandles,
    autoplay_log: AutoplayLog,
    autoplay_source: SourceSlot,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Dispatch a results intent as if the user clicked, then re-render.
    pub fn send(&mut self, intent: ResultIntent) {
        let dispatch = self.results_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn results_state(&self) -> ResultViewState {
        let state = self.results_handles.state();
        self.dom.in_runtime(|| state.read().clone())
    }

    /// Swap the source seen by the autoplay host, then re-render.
    pub fn set_autoplay_source(&mut self, source: Option<AudioSource>) {
        let mut signal = (*self.autoplay_source.borrow()).expect("autoplay host mounted");
        self.dom.in_runtime(|| signal.set(source));
        drive_dom(&mut self.dom);
    }

    pub fn autoplay_events(&self) -> Vec<AutoplayEvent> {
        self.autoplay_log.events()
    }

    pub fn autoplay_attempts(&self) -> usize {
        self.autoplay_log.attempts()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, results: Option<ContentBundle>) -> ViewHarness {
    setup_view_harness_with_origin(view, results, BackendOrigin::default())
}

pub fn setup_view_harness_with_origin(
    view: ViewKind,
    results: Option<ContentBundle>,
    origin: BackendOrigin,
) -> ViewHarness {
    let results_handles = ResultsTestHandles::default();
    let autoplay_log = AutoplayLog::default();
    let autoplay_source = SourceSlot::default();
    let app = Arc::new(TestApp { origin, results });

    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            ViewRouterHarness,
            ViewHarnessProps {
                app,
                view,
                results_handles: results_handles.clone(),
                autoplay_log: autoplay_log.clone(),
                autoplay_source: autoplay_source.clone(),
            },
        ),
        results_handles,
        autoplay_log,
        autoplay_source,
    };
    harness.rebuild();
    harness
}
