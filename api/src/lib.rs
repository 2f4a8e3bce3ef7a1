//! Server functions shared by the Greetly platform crates.

use dioxus::prelude::*;

/// Artificial processing delay for `submit_name`, in milliseconds. The pause
/// exists so callers actually exercise their in-flight UI; real work would
/// replace it.
#[cfg(feature = "server")]
const SUBMIT_DELAY_MS: u64 = 500;

/// Compose the canonical greeting for a raw name input.
///
/// Leading and trailing whitespace is stripped before formatting; nothing
/// else about the input is validated or altered. Total over all inputs.
pub fn compose_greeting(name: &str) -> String {
    format!("Hello {}!", name.trim())
}

/// Produce a personalized greeting on the server.
///
/// Sleeps briefly before answering (`SUBMIT_DELAY_MS`) so the caller's
/// loading state is visible, then returns the composed greeting.
#[server(SubmitName)]
pub async fn submit_name(name: String) -> Result<String, ServerFnError> {
    tokio::time::sleep(std::time::Duration::from_millis(SUBMIT_DELAY_MS)).await;

    Ok(compose_greeting(&name))
}
