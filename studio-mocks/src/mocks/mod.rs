//! Component mocks with interactive controls

pub mod framework;
mod hello_world;
mod product_page;
pub mod url_state;

pub use hello_world::HelloWorldMock;
pub use product_page::ProductPageMock;
