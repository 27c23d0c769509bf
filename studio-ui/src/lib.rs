//! studio-ui - Dioxus components for the print studio
//!
//! Contains the pure view components used by both the web app and the mock
//! gallery, plus the stateful `ProductPage` that wires browser input to
//! `studio_core` state.

pub mod components;
pub mod shortcuts;
pub mod wasm_utils;

pub use components::*;
