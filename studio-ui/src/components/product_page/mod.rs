//! Product customization page

mod options_form;
mod page;
mod preview_panel;
mod view;

pub use options_form::OptionsForm;
pub use page::ProductPage;
pub use preview_panel::PreviewPanel;
pub use view::ProductPageView;
