use std::sync::Arc;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::catalog::CatalogStore;
use crate::error::CatalogError;
use crate::product::Product;
use crate::view::{compute_view, filter, total_pages, CatalogView, SortOrder, ViewState};

/// Event emitted to the renderer after every setter, carrying the
/// JSON-serialized [`CatalogView`].
#[cfg(feature = "emitter")]
pub const VIEW_CHANGED: &str = "view_changed";

/// Catalog List Controller: owns the view state and turns the static
/// product collection into the page currently visible to the user.
///
/// Every setter replaces one field of the state, recomputes the derived
/// view from scratch, and returns it. There is no implicit reactivity:
/// the caller gets exactly one fresh [`CatalogView`] per mutation.
///
/// Changing the query or sort order does not reset the stored page
/// (matching the behavior this component models); after a narrowing
/// search the returned view may have an empty `items` slice until the
/// caller requests a page again. Page requests themselves are clamped
/// to `[1, total_pages]` here, in the controller, rather than trusting
/// the renderer to bounds-check.
pub struct CatalogController {
    products: Arc<[Product]>,
    state: ViewState,
    #[cfg(feature = "emitter")]
    emitter: EventEmitter,
}

impl CatalogController {
    pub fn new(products: impl Into<Arc<[Product]>>) -> Self {
        CatalogController {
            products: products.into(),
            state: ViewState::default(),
            #[cfg(feature = "emitter")]
            emitter: EventEmitter::new(),
        }
    }

    /// Build a controller from the current store snapshot.
    pub fn from_store(store: &CatalogStore) -> Result<Self, CatalogError> {
        Ok(CatalogController::new(store.snapshot()?))
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Recompute and return the current view without changing state.
    pub fn view(&self) -> CatalogView {
        compute_view(&self.products, &self.state)
    }

    /// Replace the search query. Any string is accepted; the stored page
    /// is left as-is.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> CatalogView {
        self.state.query = query.into();
        self.refresh()
    }

    /// Replace the sort order. The stored page is left as-is.
    pub fn set_sort_order(&mut self, sort: SortOrder) -> CatalogView {
        self.state.sort = sort;
        self.refresh()
    }

    /// Replace the sort order from a wire token; unrecognized tokens
    /// degrade to the default order.
    pub fn set_sort_token(&mut self, token: &str) -> CatalogView {
        self.set_sort_order(SortOrder::from_token(token))
    }

    /// Request a page. Out-of-range requests clamp to `[1, total_pages]`
    /// of the current filtered collection; this never fails.
    ///
    /// Scroll-to-top is the renderer's business; hook it on the
    /// `view_changed` notification.
    pub fn set_current_page(&mut self, page: u32) -> CatalogView {
        let total = total_pages(filter(&self.products, &self.state.query).len());
        self.state.page = page.clamp(1, total);
        self.refresh()
    }

    /// Register a renderer callback for [`VIEW_CHANGED`] notifications.
    /// Fire-and-forget: listeners receive the serialized view and return
    /// nothing.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener);
    }

    fn refresh(&mut self) -> CatalogView {
        let view = compute_view(&self.products, &self.state);
        #[cfg(feature = "emitter")]
        if let Ok(payload) = serde_json::to_string(&view) {
            self.emitter.emit(VIEW_CHANGED, payload);
        }
        view
    }
}
