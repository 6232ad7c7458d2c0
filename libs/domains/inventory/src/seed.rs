//! Sample catalog seeding for local development and demos.

use chrono::{Days, Months, Utc};
use tracing::info;

use crate::error::InventoryResult;
use crate::models::ProductInput;
use crate::store::ProductStore;

/// The sample catalog: ten products across three categories, three of them
/// out of stock. Perishables expire a few days out, electronics carry
/// longer dates, clothing never expires.
pub fn sample_catalog() -> Vec<ProductInput> {
    let today = Utc::now().date_naive();

    let entry = |name: &str, category: &str, unit_price, expiration_date, quantity_in_stock| {
        ProductInput {
            id: None,
            name: name.to_string(),
            category: category.to_string(),
            unit_price,
            expiration_date,
            quantity_in_stock,
        }
    };

    vec![
        entry(
            "Laptop",
            "electronics",
            1200.00,
            today.checked_add_months(Months::new(24)),
            50,
        ),
        entry(
            "Smartphone",
            "electronics",
            800.00,
            today.checked_add_months(Months::new(12)),
            0,
        ),
        entry(
            "Bread",
            "food",
            2.50,
            today.checked_add_days(Days::new(5)),
            10,
        ),
        entry("Milk", "food", 3.00, today.checked_add_days(Days::new(2)), 0),
        entry("T-Shirt", "clothing", 25.00, None, 20),
        entry("Jeans", "clothing", 50.00, None, 5),
        entry(
            "Monitor",
            "electronics",
            300.00,
            today.checked_add_months(Months::new(36)),
            15,
        ),
        entry("Eggs", "food", 4.00, today.checked_add_days(Days::new(3)), 0),
        entry("Dress", "clothing", 70.00, None, 12),
        entry(
            "Mouse",
            "electronics",
            25.00,
            today.checked_add_months(Months::new(12)),
            30,
        ),
    ]
}

/// Insert the sample catalog when the store holds no records yet.
///
/// Returns the number of products inserted (zero when the store already
/// has data).
pub async fn seed_if_empty<S: ProductStore>(store: &S) -> InventoryResult<usize> {
    if !store.all().await?.is_empty() {
        return Ok(0);
    }

    let catalog = sample_catalog();
    let count = catalog.len();
    for input in catalog {
        store.insert(input).await?;
    }

    info!("Seeded {} sample products", count);
    Ok(count)
}
