//! Fixture data for mocks

use studio_core::ImageRef;

/// Inline SVG shirt graphic so mocks never need a real upload
pub const SAMPLE_IMAGE_URL: &str = "data:image/svg+xml;utf8,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 64 64'%3E%3Cpath d='M20 6l-14 8 6 12 6-3v35h28V23l6 3 6-12-14-8c-2 5-6 8-12 8s-10-3-12-8z' fill='%236366f1'/%3E%3C/svg%3E";

pub fn sample_image() -> ImageRef {
    ImageRef::new(SAMPLE_IMAGE_URL, "sample-shirt.svg")
}

pub const LONG_TEXT: &str = "Class of 2026\nState Champions\nGo Falcons!\nThis line is past the limit";
