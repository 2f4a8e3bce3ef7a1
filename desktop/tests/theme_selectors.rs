#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the greeting
  form, result panel, and about sections) remain present in the unified shared
  theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Cards & shared UI
    ".card {",
    ".card__title",
    ".card__subtitle",
    // Buttons
    ".button {",
    ".button--primary",
    // Greeting form
    ".greeting-form__fields",
    ".greeting-form__input",
    ".greeting-form__feedback--error",
    // Greeting result panel
    ".greeting-card",
    ".greeting-card__text",
    // About sections
    ".about__section",
    ".about__summary",
    ".about__code",
    // Accessibility helper used by the navbar locale switcher
    ".visually-hidden",
];

#[test]
fn required_theme_selectors_present() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Missing required selectors in ui/assets/theme/main.css: {missing:?}"
    );
}
