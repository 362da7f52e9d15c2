use std::path::{Path, PathBuf};
use std::sync::Arc;

use brief_core::{BackendOrigin, ContentBundle};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, AppContext, UiApp, build_app_context};

/// Desktop viewer for generated document summaries, flashcards, quizzes and narration.
#[derive(Debug, Parser)]
#[command(name = "docbrief", version)]
struct Args {
    /// Saved `/summary` response to open on launch.
    #[arg(long, env = "DOCBRIEF_BUNDLE")]
    bundle: Option<PathBuf>,

    /// Origin of the backend that serves generated audio.
    #[arg(long, env = "DOCBRIEF_BACKEND_ORIGIN", default_value = "http://localhost:5000")]
    backend_origin: BackendOrigin,
}

struct DesktopApp {
    backend_origin: BackendOrigin,
    results: Option<ContentBundle>,
}

impl UiApp for DesktopApp {
    fn backend_origin(&self) -> BackendOrigin {
        self.backend_origin.clone()
    }

    fn initial_results(&self) -> Option<ContentBundle> {
        self.results.clone()
    }
}

fn init_tracing() {
    let level = if cfg!(debug_assertions) { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,app={level},ui={level}")));

    // The desktop launcher may install its own subscriber; whichever is first wins.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

fn load_bundle(path: &Path) -> Option<ContentBundle> {
    match ContentBundle::from_json_file(path) {
        Ok(bundle) => {
            tracing::info!(
                path = %path.display(),
                has_content = bundle.has_content(),
                "preloaded results"
            );
            Some(bundle)
        }
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "could not preload results");
            None
        }
    }
}

/// Resolve the launch configuration into the context the UI consumes.
fn prepare_context(args: Args) -> AppContext {
    let results = args.bundle.as_deref().and_then(load_bundle);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        backend_origin: args.backend_origin,
        results,
    });
    build_app_context(&app)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = match Args::try_parse() {
        Ok(args) => args,
        // `--help` and `--version` are not failures.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(err.into()),
    };
    tracing::debug!(?args, "starting docbrief");

    let context = prepare_context(args);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Docbrief")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
