use serde::{Deserialize, Serialize};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// A single catalog entry. Generated once at session start and never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Price in cents. Integer cents keep sort keys total (`Ord`), where
    /// the original held a two-decimal string and compared parsed floats.
    pub price_cents: u64,
    /// Star rating, 0 through 5 inclusive.
    pub rating: u8,
    pub image: String,
    pub description: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price_cents: u64,
        rating: u8,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            price_cents,
            rating: rating.min(5),
            image: image.into(),
            description: description.into(),
        }
    }

    /// Price in whole currency units, for display.
    pub fn price(&self) -> f64 {
        self.price_cents as f64 / 100.0
    }
}

/// Generate the synthetic session catalog: products `1..=count` named
/// `Producto {n}`, with pseudo-random price (0–100.00) and rating (0–5).
pub fn generate(count: u32) -> Vec<Product> {
    generate_seeded(count, 0x5eed_ca7a)
}

/// Same as [`generate`] but with an explicit seed, so fixtures are
/// reproducible.
pub fn generate_seeded(count: u32, seed: u64) -> Vec<Product> {
    let mut rng = XorShift::new(seed);
    (1..=count)
        .map(|n| {
            Product::new(
                n,
                format!("Producto {}", n),
                rng.next_below(10_001),
                rng.next_below(6) as u8,
                PLACEHOLDER_IMAGE,
                format!("Descripción breve del producto {}.", n),
            )
        })
        .collect()
}

// xorshift64: enough randomness for demo data, no crate needed.
struct XorShift {
    state: u64,
}

impl XorShift {
    fn new(seed: u64) -> Self {
        XorShift { state: seed | 1 }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}
