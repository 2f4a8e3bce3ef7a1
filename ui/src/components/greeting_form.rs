use dioxus::prelude::*;

use crate::core::form::GreetingForm;
use crate::t;

/// Greeting form card plus the conditional result panel.
///
/// All state lives in one [`GreetingForm`] signal; the submit handler drives
/// the machine and awaits the server function in between. Re-entry while a
/// call is outstanding is rejected by `begin_submit`, the disabled controls
/// are presentation on top of that guard.
#[component]
pub fn GreetingFormCard() -> Element {
    let mut form = use_signal(GreetingForm::default);
    let state = form();

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();

        let Some(request) = form.with_mut(GreetingForm::begin_submit) else {
            return;
        };

        match api::submit_name(request).await {
            Ok(greeting) => form.with_mut(|f| f.settle_ok(greeting)),
            Err(err) => form.with_mut(|f| f.settle_err(err.to_string())),
        }
    };

    let submit_label = if state.is_submitting() {
        t!("form-submitting")
    } else {
        t!("form-submit")
    };

    let feedback = state
        .error()
        .map(|message| format!("{}: {message}", t!("form-error-prefix")));

    rsx! {
        section { class: "card greeting-form",
            header { class: "card__header",
                h1 { class: "card__title", {t!("form-title")} }
                p { class: "card__subtitle", {t!("form-subtitle")} }
            }

            form { class: "greeting-form__fields", onsubmit: on_submit,
                label { class: "greeting-form__label", r#for: "name",
                    {t!("form-name-label")}
                }
                input {
                    id: "name",
                    r#type: "text",
                    class: "greeting-form__input",
                    placeholder: t!("form-name-placeholder"),
                    value: "{state.name()}",
                    disabled: state.is_submitting(),
                    oninput: move |evt| form.with_mut(|f| f.set_name(evt.value())),
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: state.is_submitting(),
                    "{submit_label}"
                }
            }

            if let Some(message) = feedback {
                p { class: "greeting-form__feedback greeting-form__feedback--error",
                    "⚠️ {message}"
                }
            }
        }

        if let Some(greeting) = state.greeting() {
            section { class: "card greeting-card",
                p { class: "greeting-card__text", "{greeting}" }
            }
        }
    }
}
