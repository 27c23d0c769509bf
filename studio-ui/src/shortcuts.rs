//! Window-level keyboard shortcuts
//!
//! Element-level `onkeydown` only fires while a descendant has focus, and
//! focus usually sits on `body`, so shortcuts listen on the window instead.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::dioxus_core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use studio_core::Shortcut;

use crate::wasm_utils::{key_chord, WindowEventListener};

/// Call `on_trigger` whenever `shortcut` is pressed while the calling
/// component is mounted. The listener is removed on unmount.
pub fn use_shortcut(shortcut: Shortcut, on_trigger: Callback<()>) {
    let mut listener: Signal<Option<WindowEventListener>> = use_signal(|| None);
    // Cleared synchronously on unmount. Listener removal is deferred, and a
    // key event in between must not reach the dropped callback.
    let active = use_hook(|| Rc::new(Cell::new(true)));

    // use_effect so the window lookup runs after the first render, not during it
    let effect_active = active.clone();
    use_effect(move || {
        let Some(window) = web_sys_x::window() else {
            return;
        };

        // The keydown callback runs from wasm-bindgen outside the Dioxus
        // runtime, so restore it before touching signals.
        let runtime = Runtime::current();
        let active = effect_active.clone();

        let attached = WindowEventListener::new(window, "keydown", move |event| {
            if !active.get() {
                return;
            }
            let _guard = RuntimeGuard::new(runtime.clone());
            if key_chord(&event).is_some_and(|chord| shortcut.matches(&chord)) {
                on_trigger.call(());
            }
        });

        listener.set(Some(attached));
    });

    use_drop(move || {
        active.set(false);
        // Detach after the diff cycle rather than during scope teardown
        if let Ok(mut guard) = listener.try_write() {
            if let Some(attached) = guard.take() {
                spawn(async move {
                    drop(attached);
                });
            }
        }
    });
}
