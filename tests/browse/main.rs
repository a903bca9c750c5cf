mod fixture;

use fixture::{catalog, priced, rated};
use vitrina::{
    compute_view, filter, sort, CatalogController, CatalogStore, SortOrder, ViewState, PAGE_SIZE,
};

#[test]
fn fifty_products_make_seven_pages() {
    let c = CatalogController::new(catalog());
    let view = c.view();

    assert_eq!(view.total_matched, 50);
    assert_eq!(view.total_pages, 7); // 6 full pages of 8, 1 page of 2
    assert_eq!(view.items.len(), PAGE_SIZE);
}

#[test]
fn scenario_producto_1_substring_pagination() {
    let mut c = CatalogController::new(catalog());
    let view = c.set_search_query("Producto 1");

    // Substring match: "Producto 1" plus "Producto 10".."Producto 19"
    assert_eq!(view.total_matched, 11);
    assert_eq!(view.total_pages, 2);

    let names: Vec<&str> = view.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Producto 1", "Producto 10", "Producto 11", "Producto 12", "Producto 13",
            "Producto 14", "Producto 15", "Producto 16",
        ]
    );

    let view = c.set_current_page(2);
    let names: Vec<&str> = view.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Producto 17", "Producto 18", "Producto 19"]);
}

#[test]
fn filtering_returns_exactly_the_matching_names() {
    let products = catalog();
    for query in ["Producto 2", "producto 2", "PRODUCTO 2", "ducto 2"] {
        let matched = filter(&products, query);
        for product in &matched {
            assert!(product.name.to_lowercase().contains(&query.to_lowercase()));
        }
        // and nothing that matches was dropped
        let expected = products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query.to_lowercase()))
            .count();
        assert_eq!(matched.len(), expected);
    }
}

#[test]
fn sorting_is_a_permutation_of_the_filtered_set() {
    let products = catalog();
    for order in [
        SortOrder::Default,
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
        SortOrder::RatingDescending,
    ] {
        let filtered = filter(&products, "Producto");
        let mut sorted = filtered.clone();
        sort(&mut sorted, order);

        let mut before: Vec<u32> = filtered.iter().map(|p| p.id).collect();
        let mut after: Vec<u32> = sorted.iter().map(|p| p.id).collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after, "order {:?} dropped or duplicated products", order);
    }
}

#[test]
fn equal_keys_keep_their_filtered_order() {
    // Three identical prices interleaved with others
    let products = vec![
        priced(1, 500),
        priced(2, 100),
        priced(3, 500),
        priced(4, 900),
        priced(5, 500),
    ];

    let mut by_price = products.clone();
    sort(&mut by_price, SortOrder::PriceAscending);
    let ids: Vec<u32> = by_price.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1, 3, 5, 4]);

    let mut by_price_desc = products.clone();
    sort(&mut by_price_desc, SortOrder::PriceDescending);
    let ids: Vec<u32> = by_price_desc.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![4, 1, 3, 5, 2]);

    // Same property for ratings
    let products = vec![rated(1, 4), rated(2, 4), rated(3, 5), rated(4, 4)];
    let mut by_rating = products.clone();
    sort(&mut by_rating, SortOrder::RatingDescending);
    let ids: Vec<u32> = by_rating.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1, 2, 4]);
}

#[test]
fn concatenated_pages_reproduce_the_sorted_collection() {
    let products = catalog();
    for order in [
        SortOrder::Default,
        SortOrder::PriceAscending,
        SortOrder::RatingDescending,
    ] {
        let mut expected = filter(&products, "");
        sort(&mut expected, order);

        let mut state = ViewState {
            sort: order,
            ..ViewState::default()
        };
        let total_pages = compute_view(&products, &state).total_pages;

        let mut collected = Vec::new();
        for page in 1..=total_pages {
            state.page = page;
            let view = compute_view(&products, &state);
            collected.extend(view.items);
        }

        assert_eq!(collected, expected, "order {:?} paged with gaps or overlap", order);
    }
}

#[test]
fn page_requests_clamp_at_both_ends() {
    let mut c = CatalogController::new(catalog());

    let view = c.set_current_page(0);
    assert_eq!(view.page, 1);

    let view = c.set_current_page(100);
    assert_eq!(view.page, 7);
    assert_eq!(view.items.len(), 2);
}

#[test]
fn empty_result_is_page_one_of_one() {
    let mut c = CatalogController::new(catalog());
    let view = c.set_search_query("zzz");

    assert_eq!(view.total_matched, 0);
    assert_eq!(view.total_pages, 1);
    assert!(view.items.is_empty());
}

#[test]
fn narrowing_a_search_keeps_the_stored_page() {
    let mut c = CatalogController::new(catalog());
    c.set_current_page(6);

    // 11 matches leave only 2 pages; page 6 is kept and renders empty
    let view = c.set_search_query("Producto 1");
    assert_eq!(c.state().page, 6);
    assert_eq!(view.total_pages, 2);
    assert!(view.items.is_empty());

    // the next page request clamps back into range
    let view = c.set_current_page(6);
    assert_eq!(view.page, 2);
    assert_eq!(view.items.len(), 3);
}

#[test]
fn sort_survives_query_changes() {
    let mut c = CatalogController::new(catalog());
    c.set_sort_order(SortOrder::PriceAscending);
    let view = c.set_search_query("Producto 1");

    assert_eq!(view.sort, SortOrder::PriceAscending);
    for pair in view.items.windows(2) {
        assert!(pair[0].price_cents <= pair[1].price_cents);
    }
}

#[test]
fn store_seeds_once_and_feeds_controllers() {
    let store = CatalogStore::new();
    store.seed(catalog()).unwrap();

    let a = CatalogController::from_store(&store).unwrap();
    let b = CatalogController::from_store(&store).unwrap();
    assert_eq!(a.view(), b.view());
}
