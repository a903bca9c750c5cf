mod catalog;
mod controller;
mod error;
mod pagination;
mod product;
mod session;
mod view;

pub use catalog::CatalogStore;
pub use controller::CatalogController;
#[cfg(feature = "emitter")]
pub use controller::VIEW_CHANGED;
pub use error::CatalogError;
pub use pagination::{PageWindow, WINDOW_SIZE};
pub use product::{generate, generate_seeded, Product};
pub use session::Session;
pub use view::{compute_view, filter, sort, total_pages, CatalogView, SortOrder, ViewState, PAGE_SIZE};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
