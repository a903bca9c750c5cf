use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Number of products per rendered page.
pub const PAGE_SIZE: usize = 8;

/// Ordering applied to the filtered collection. All orders are stable:
/// products with equal keys keep their relative filtered order, so page
/// boundaries are deterministic across recomputations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "price-asc")]
    PriceAscending,
    #[serde(rename = "price-desc")]
    PriceDescending,
    #[serde(rename = "rating")]
    RatingDescending,
}

impl SortOrder {
    /// Map a wire token to an order. Unrecognized tokens degrade to
    /// `Default` rather than failing.
    pub fn from_token(token: &str) -> Self {
        match token {
            "price-asc" => SortOrder::PriceAscending,
            "price-desc" => SortOrder::PriceDescending,
            "rating" => SortOrder::RatingDescending,
            _ => SortOrder::Default,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceAscending => "price-asc",
            SortOrder::PriceDescending => "price-desc",
            SortOrder::RatingDescending => "rating",
        }
    }
}

/// The mutable view tuple owned by the controller: search query, sort
/// order, current page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub query: String,
    pub sort: SortOrder,
    pub page: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            query: String::new(),
            sort: SortOrder::Default,
            page: 1,
        }
    }
}

/// What the renderer receives: the visible slice plus the numbers the
/// page links need.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    pub page: u32,
    pub total_pages: u32,
    /// Size of the filtered collection before slicing.
    pub total_matched: usize,
    pub items: Vec<Product>,
    pub query: String,
    pub sort: SortOrder,
}

/// Recompute the visible page from scratch: filter, stable sort, slice.
///
/// Pure and total. An empty filtered set reports page 1 of 1 with zero
/// items; a stored page past the last page yields an empty `items` slice
/// rather than panicking (the controller clamps pages on page requests,
/// but a narrowed search can leave the stored page out of range).
pub fn compute_view(products: &[Product], state: &ViewState) -> CatalogView {
    let mut matched = filter(products, &state.query);
    sort(&mut matched, state.sort);

    let total_matched = matched.len();
    let total_pages = total_pages(total_matched);

    let start = (state.page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE);
    let end = start.saturating_add(PAGE_SIZE).min(total_matched);
    let items = if start < total_matched {
        matched[start..end].to_vec()
    } else {
        Vec::new()
    };

    CatalogView {
        page: state.page,
        total_pages,
        total_matched,
        items,
        query: state.query.clone(),
        sort: state.sort,
    }
}

/// Case-insensitive substring match of the query against product names.
/// The empty query matches everything, order preserved.
pub fn filter(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Reorder in place per the selected order. `Vec::sort_by` is stable, so
/// equal keys keep their input order; `Default` does not reorder at all.
pub fn sort(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::Default => {}
        SortOrder::PriceAscending => products.sort_by(|a, b| a.price_cents.cmp(&b.price_cents)),
        SortOrder::PriceDescending => products.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortOrder::RatingDescending => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }
}

/// Page count for a filtered collection: `ceil(count / 8)`, minimum 1.
/// The empty set is page 1 of 1 with zero items, never zero pages.
pub fn total_pages(count: usize) -> u32 {
    (count.div_ceil(PAGE_SIZE)).max(1) as u32
}
