//! Shared UI crate for Greetly. Cross-platform views and form logic live here.

use dioxus::prelude::*;

/// Unified theme stylesheet. Web links it as an asset; desktop additionally
/// embeds the same file at compile time (see `desktop/src/main.rs`).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Greeting form card (components/greeting_form.rs)
    pub mod greeting_form;
    pub use greeting_form::GreetingFormCard;
}
