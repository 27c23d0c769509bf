//! Viewport switcher for responsive testing

use dioxus::prelude::*;

/// Breakpoint definition
#[derive(Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub name: &'static str,
    pub width: u32, // 0 = full width
}

impl Breakpoint {
    pub const fn new(name: &'static str, width: u32) -> Self {
        Self { name, width }
    }

    /// Inline style constraining the mock to this width
    pub fn style(self) -> String {
        if self.width > 0 {
            format!("width: {}px; margin: 0 auto;", self.width)
        } else {
            String::new()
        }
    }
}

pub const BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint::new("Mobile", 375),
    Breakpoint::new("Tablet", 768),
    Breakpoint::new("Desktop", 1280),
    Breakpoint::new("Full", 0),
];

/// Width selector plus a container constrained to the chosen width
#[component]
pub fn MockViewport(children: Element) -> Element {
    let mut selected = use_signal(|| BREAKPOINTS[BREAKPOINTS.len() - 1]);
    let style = selected().style();

    rsx! {
        div { class: "flex gap-1 mb-4",
            for breakpoint in BREAKPOINTS.iter().copied() {
                button {
                    class: if selected().name == breakpoint.name { "px-2 py-1 text-xs rounded bg-gray-600 text-white" } else { "px-2 py-1 text-xs rounded text-gray-400 hover:bg-gray-700" },
                    onclick: move |_| selected.set(breakpoint),
                    "{breakpoint.name}"
                }
            }
        }
        div { class: "bg-white text-black rounded-lg overflow-hidden", style, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_width_has_no_style() {
        assert_eq!(Breakpoint::new("Full", 0).style(), "");
    }

    #[test]
    fn test_fixed_width_style() {
        assert_eq!(
            Breakpoint::new("Mobile", 375).style(),
            "width: 375px; margin: 0 auto;"
        );
    }
}
