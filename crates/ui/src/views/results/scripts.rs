/// Reload the narration element and try to start it, reporting the outcome.
pub(super) fn autoplay_script(element_id: &str) -> String {
    format!(
        r#"(function() {{
                    const el = document.getElementById({element_id:?});
                    if (!el) {{
                        dioxus.send({{ started: false, error: "audio element not mounted" }});
                        return;
                    }}
                    el.load();
                    el.play()
                        .then(() => dioxus.send({{ started: true, error: null }}))
                        .catch((err) => dioxus.send({{
                            started: false,
                            error: String((err && err.message) || err),
                        }}));
                }})();"#,
        element_id = element_id,
    )
}
