use dioxus::prelude::*;
use dioxus_router::use_navigator;

use brief_core::ContentBundle;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

/// Load a saved `/summary` response into navigation state.
pub(crate) fn open_results(ctx: &AppContext, raw_path: &str) -> Result<(), ViewError> {
    let path = raw_path.trim();
    if path.is_empty() {
        return Err(ViewError::MissingPath);
    }

    let bundle = ContentBundle::from_json_file(path).map_err(|err| {
        tracing::warn!(path, error = %err, "failed to load results");
        ViewError::from(&err)
    })?;
    tracing::info!(
        path,
        has_content = bundle.has_content(),
        "loaded results"
    );
    ctx.set_results(bundle);
    Ok(())
}

#[component]
pub fn UploadView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut path = use_signal(String::new);
    let mut error = use_signal(|| None::<ViewError>);

    rsx! {
        div { class: "page upload-page",
            header { class: "view-header",
                h2 { class: "view-title", "Upload" }
                p { class: "view-subtitle",
                    "Open the JSON response saved from the summary service."
                }
            }
            div { class: "view-divider" }
            div { class: "upload-form",
                input {
                    class: "upload-path-input",
                    r#type: "text",
                    placeholder: "/path/to/results.json",
                    value: "{path()}",
                    oninput: move |evt| path.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| match open_results(&ctx, &path()) {
                        Ok(()) => {
                            error.set(None);
                            let _ = navigator.push(Route::Results {});
                        }
                        Err(err) => error.set(Some(err)),
                    },
                    "Open results"
                }
            }
            if let Some(err) = error() {
                p { class: "upload-error", "{err.message()}" }
            }
        }
    }
}
