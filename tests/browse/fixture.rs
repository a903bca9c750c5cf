use vitrina::{generate_seeded, Product};

/// The standard 50-product session catalog, fixed seed.
pub fn catalog() -> Vec<Product> {
    generate_seeded(50, 7)
}

/// A product with a chosen price and everything else fixed.
pub fn priced(id: u32, price_cents: u64) -> Product {
    Product::new(
        id,
        format!("Producto {}", id),
        price_cents,
        3,
        "https://via.placeholder.com/150",
        format!("Descripción breve del producto {}.", id),
    )
}

/// A product with a chosen rating and everything else fixed.
pub fn rated(id: u32, rating: u8) -> Product {
    Product::new(
        id,
        format!("Producto {}", id),
        1000,
        rating,
        "https://via.placeholder.com/150",
        format!("Descripción breve del producto {}.", id),
    )
}
