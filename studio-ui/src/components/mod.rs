//! Shared UI components

pub mod hello_world;
pub mod product_page;

pub use hello_world::{HelloWorld, DEFAULT_GREETING};
pub use product_page::{OptionsForm, PreviewPanel, ProductPage, ProductPageView};
