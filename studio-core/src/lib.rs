//! studio-core - Framework-free presentation state for the print studio
//!
//! Holds the product page state, the actions that mutate it, shortcut
//! matching and the pure view model. Nothing here touches the DOM, so the
//! whole crate is testable natively.

mod config;
mod layout;
mod load;
mod product;
mod shortcut;
mod state;
mod view;

pub use config::StudioConfig;
pub use layout::{LayoutMode, ParseLayoutModeError};
pub use load::LoadSequence;
pub use product::{Build, Measurements, ParseBuildError, ParseProductTypeError, ProductType};
pub use shortcut::{KeyChord, Modifier, Shortcut};
pub use state::{Action, ImageRef, PresentationState};
pub use view::{PreviewContent, ProductPageModel};
