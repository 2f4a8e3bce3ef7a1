//! Platform-agnostic form logic. No Dioxus types in here so everything
//! unit-tests synchronously.

pub mod form;
