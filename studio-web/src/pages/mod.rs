mod hello;
mod layout;
mod product;

pub use hello::Hello;
pub use layout::AppLayout;
pub use product::Product;
