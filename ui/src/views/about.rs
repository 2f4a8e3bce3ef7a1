use dioxus::prelude::*;

/// Server-function snippet shown in the explainer. Mirrors `api::submit_name`;
/// keep in sync if that signature changes.
const SERVER_FN_SNIPPET: &str = r#"#[server(SubmitName)]
pub async fn submit_name(name: String) -> Result<String, ServerFnError> {
    tokio::time::sleep(std::time::Duration::from_millis(SUBMIT_DELAY_MS)).await;

    Ok(compose_greeting(&name))
}"#;

const SUBMIT_SNIPPET: &str = r#"let on_submit = move |evt: FormEvent| async move {
    evt.prevent_default();

    let Some(request) = form.with_mut(GreetingForm::begin_submit) else {
        return;
    };

    match api::submit_name(request).await {
        Ok(greeting) => form.with_mut(|f| f.settle_ok(greeting)),
        Err(err) => form.with_mut(|f| f.settle_err(err.to_string())),
    }
};"#;

/// Static explainer page for the moving parts behind the greeting form.
/// Purely presentational; nothing here touches the form controller.
#[component]
pub fn About() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-about",
            header { class: "card__header",
                h1 { class: "card__title", {crate::t!("about-title")} }
                p { class: "card__subtitle", {crate::t!("about-subtitle")} }
            }

            details { class: "about__section",
                summary { class: "about__summary", {crate::t!("about-server-title")} }
                div { class: "about__body",
                    p { {crate::t!("about-server-body-1")} }
                    pre { class: "about__code",
                        code { "{SERVER_FN_SNIPPET}" }
                    }
                    p { {crate::t!("about-server-body-2")} }
                }
            }

            details { class: "about__section",
                summary { class: "about__summary", {crate::t!("about-state-title")} }
                div { class: "about__body",
                    p { {crate::t!("about-state-body")} }
                    ul { class: "about__list",
                        li { {crate::t!("about-state-name")} }
                        li { {crate::t!("about-state-greeting")} }
                        li { {crate::t!("about-state-flag")} }
                    }
                    pre { class: "about__code",
                        code { "{SUBMIT_SNIPPET}" }
                    }
                }
            }

            details { class: "about__section",
                summary { class: "about__summary", {crate::t!("about-theme-title")} }
                div { class: "about__body",
                    p { {crate::t!("about-theme-body")} }
                }
            }
        }
    }
}
