//! The in-memory query engine: filter, sort, page.
//!
//! Operates on a snapshot of the store; the store itself never orders or
//! filters anything.

use std::cmp::Ordering;

use crate::models::{Availability, Page, Product, ProductQuery, SortDirection, SortField};

/// Apply the filter predicates, the single-key sort, and the page slice to
/// a product snapshot.
///
/// `query.page` and `query.size` are validated at the HTTP boundary; this
/// function assumes `size > 0`. A page index past the end yields an empty
/// `content`, never an error.
pub fn execute(mut products: Vec<Product>, query: &ProductQuery) -> Page<Product> {
    if let Some(name) = non_empty(query.name.as_deref()) {
        let needle = name.to_lowercase();
        products.retain(|p| p.name.to_lowercase().contains(&needle));
    }

    if let Some(category) = non_empty(query.category.as_deref()) {
        products.retain(|p| p.category.eq_ignore_ascii_case(category));
    }

    match query.availability {
        Availability::InStock => products.retain(|p| p.quantity_in_stock > 0),
        Availability::OutOfStock => products.retain(|p| p.quantity_in_stock == 0),
        Availability::All => {}
    }

    if let Some(field) = query.sort.field {
        // sort_by is stable, so ties keep their snapshot order.
        products.sort_by(|a, b| compare(a, b, field, query.sort.direction));
    }

    let total_elements = products.len() as u64;
    let total_pages = products.len().div_ceil(query.size as usize) as u32;

    let start = query.page as usize * query.size as usize;
    let content: Vec<Product> = products
        .into_iter()
        .skip(start)
        .take(query.size as usize)
        .collect();

    Page {
        content,
        total_elements,
        total_pages,
        number: query.page,
    }
}

/// Order two products by a single field.
///
/// Products without an expiration date sort after every dated one, in both
/// directions; only the date-to-date comparison is reoriented for
/// descending order.
fn compare(a: &Product, b: &Product, field: SortField, direction: SortDirection) -> Ordering {
    let ordering = match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => compare_ignore_case(&a.name, &b.name),
        SortField::Category => compare_ignore_case(&a.category, &b.category),
        SortField::UnitPrice => a.unit_price.total_cmp(&b.unit_price),
        SortField::QuantityInStock => a.quantity_in_stock.cmp(&b.quantity_in_stock),
        SortField::ExpirationDate => {
            return match (a.expiration_date, b.expiration_date) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(lhs), Some(rhs)) => direction.apply(lhs.cmp(&rhs)),
            };
        }
    };

    direction.apply(ordering)
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortSpec;
    use chrono::NaiveDate;

    fn product(
        id: u32,
        name: &str,
        category: &str,
        unit_price: f64,
        expiration_date: Option<NaiveDate>,
        quantity_in_stock: u32,
    ) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            unit_price,
            expiration_date,
            quantity_in_stock,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Laptop", "electronics", 1200.0, date(2027, 8, 6), 50),
            product(2, "Smartphone", "electronics", 800.0, date(2026, 12, 1), 0),
            product(3, "Bread", "food", 2.5, date(2026, 8, 11), 10),
            product(4, "Milk", "food", 3.0, date(2026, 8, 8), 0),
            product(5, "T-Shirt", "clothing", 25.0, None, 20),
            product(6, "Jeans", "clothing", 50.0, None, 5),
            product(7, "Monitor", "electronics", 300.0, date(2029, 8, 6), 15),
            product(8, "Eggs", "food", 4.0, date(2026, 8, 9), 0),
            product(9, "Dress", "clothing", 70.0, None, 12),
            product(10, "Mouse", "electronics", 25.0, date(2027, 2, 1), 30),
        ]
    }

    fn query() -> ProductQuery {
        ProductQuery {
            size: 100,
            sort: SortSpec {
                field: None,
                direction: SortDirection::Asc,
            },
            ..ProductQuery::default()
        }
    }

    fn names(page: &Page<Product>) -> Vec<&str> {
        page.content.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn name_filter_matches_substrings_case_insensitively() {
        let page = execute(
            catalog(),
            &ProductQuery {
                name: Some("PHONE".to_string()),
                ..query()
            },
        );

        assert_eq!(names(&page), vec!["Smartphone"]);
        assert_eq!(page.total_elements, 1);
    }

    #[test]
    fn empty_name_filter_is_skipped() {
        let page = execute(
            catalog(),
            &ProductQuery {
                name: Some(String::new()),
                ..query()
            },
        );

        assert_eq!(page.total_elements, 10);
    }

    #[test]
    fn category_filter_requires_exact_match_ignoring_case() {
        let page = execute(
            catalog(),
            &ProductQuery {
                category: Some("FOOD".to_string()),
                ..query()
            },
        );

        assert_eq!(names(&page), vec!["Bread", "Milk", "Eggs"]);

        // "foo" is a substring of "food" but not an exact match
        let page = execute(
            catalog(),
            &ProductQuery {
                category: Some("foo".to_string()),
                ..query()
            },
        );
        assert_eq!(page.total_elements, 0);
    }

    #[test]
    fn name_and_category_filters_combine_with_and() {
        let page = execute(
            catalog(),
            &ProductQuery {
                name: Some("o".to_string()),
                category: Some("electronics".to_string()),
                ..query()
            },
        );

        assert_eq!(
            names(&page),
            vec!["Laptop", "Smartphone", "Monitor", "Mouse"]
        );
    }

    #[test]
    fn availability_partitions_the_catalog() {
        let in_stock = execute(
            catalog(),
            &ProductQuery {
                availability: Availability::InStock,
                ..query()
            },
        );
        let out_of_stock = execute(
            catalog(),
            &ProductQuery {
                availability: Availability::OutOfStock,
                ..query()
            },
        );

        assert_eq!(in_stock.total_elements, 7);
        assert_eq!(out_of_stock.total_elements, 3);

        // No overlap, and together they cover the whole catalog
        let mut ids: Vec<u32> = in_stock
            .content
            .iter()
            .chain(out_of_stock.content.iter())
            .map(|p| p.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());

        assert!(in_stock.content.iter().all(|p| p.quantity_in_stock > 0));
        assert!(out_of_stock
            .content
            .iter()
            .all(|p| p.quantity_in_stock == 0));
    }

    #[test]
    fn sorts_by_name_case_insensitively() {
        let page = execute(
            catalog(),
            &ProductQuery {
                sort: SortSpec::parse("name,asc"),
                ..query()
            },
        );

        assert_eq!(
            names(&page),
            vec![
                "Bread",
                "Dress",
                "Eggs",
                "Jeans",
                "Laptop",
                "Milk",
                "Monitor",
                "Mouse",
                "Smartphone",
                "T-Shirt"
            ]
        );
    }

    #[test]
    fn sorts_by_unit_price() {
        let page = execute(
            catalog(),
            &ProductQuery {
                sort: SortSpec::parse("unitPrice,asc"),
                ..query()
            },
        );

        let prices: Vec<f64> = page.content.iter().map(|p| p.unit_price).collect();
        let mut sorted = prices.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(prices, sorted);
        assert_eq!(page.content[0].name, "Bread");
    }

    #[test]
    fn sorts_by_quantity_in_stock_descending() {
        let page = execute(
            catalog(),
            &ProductQuery {
                sort: SortSpec::parse("quantityInStock,desc"),
                ..query()
            },
        );

        assert_eq!(page.content[0].name, "Laptop");
        assert_eq!(page.content.last().unwrap().quantity_in_stock, 0);
    }

    #[test]
    fn reversing_direction_reverses_the_sequence() {
        // Only tie-free fields: stable sorting leaves tied records in
        // snapshot order for both directions, so the sequences would not
        // be exact mirrors.
        for raw in ["id", "name"] {
            let asc = execute(
                catalog(),
                &ProductQuery {
                    sort: SortSpec::parse(&format!("{raw},asc")),
                    ..query()
                },
            );
            let desc = execute(
                catalog(),
                &ProductQuery {
                    sort: SortSpec::parse(&format!("{raw},desc")),
                    ..query()
                },
            );

            let mut reversed: Vec<u32> = desc.content.iter().map(|p| p.id).collect();
            reversed.reverse();
            let ascending: Vec<u32> = asc.content.iter().map(|p| p.id).collect();
            assert_eq!(ascending, reversed, "field {raw}");
        }
    }

    #[test]
    fn expiration_sort_puts_undated_products_last_ascending() {
        let page = execute(
            catalog(),
            &ProductQuery {
                sort: SortSpec::parse("expirationDate,asc"),
                ..query()
            },
        );

        let sorted_names = names(&page);
        assert_eq!(sorted_names[0], "Milk");
        // The three non-perishables trail the dated products
        assert_eq!(&sorted_names[7..], &["T-Shirt", "Jeans", "Dress"]);
    }

    #[test]
    fn expiration_sort_puts_undated_products_last_descending_too() {
        let page = execute(
            catalog(),
            &ProductQuery {
                sort: SortSpec::parse("expirationDate,desc"),
                ..query()
            },
        );

        let sorted_names = names(&page);
        assert_eq!(sorted_names[0], "Monitor");
        assert_eq!(&sorted_names[7..], &["T-Shirt", "Jeans", "Dress"]);
    }

    #[test]
    fn undated_products_compare_equal_and_keep_snapshot_order() {
        let page = execute(
            catalog(),
            &ProductQuery {
                category: Some("clothing".to_string()),
                sort: SortSpec::parse("expirationDate,asc"),
                ..query()
            },
        );

        // All three are undated: stable sort preserves id order
        assert_eq!(names(&page), vec!["T-Shirt", "Jeans", "Dress"]);
    }

    #[test]
    fn unknown_sort_field_keeps_input_order() {
        let page = execute(
            catalog(),
            &ProductQuery {
                sort: SortSpec::parse("warehouse,desc"),
                ..query()
            },
        );

        let ids: Vec<u32> = page.content.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn pages_are_exhaustive_and_non_overlapping() {
        let size = 3;
        let full = execute(
            catalog(),
            &ProductQuery {
                sort: SortSpec::parse("name,asc"),
                ..query()
            },
        );

        let paged = |page_index| {
            execute(
                catalog(),
                &ProductQuery {
                    sort: SortSpec::parse("name,asc"),
                    page: page_index,
                    size,
                    ..ProductQuery::default()
                },
            )
        };

        let total_pages = paged(0).total_pages;
        assert_eq!(total_pages, 4);

        let mut collected = Vec::new();
        for page_index in 0..total_pages {
            let page = paged(page_index);
            assert!(page.content.len() <= size as usize);
            assert_eq!(page.number, page_index);
            assert_eq!(page.total_elements, 10);
            collected.extend(page.content);
        }

        assert_eq!(collected, full.content);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let page = execute(
            catalog(),
            &ProductQuery {
                page: 99,
                size: 10,
                ..query()
            },
        );

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 10);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.number, 99);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = execute(
            catalog(),
            &ProductQuery {
                size: 4,
                ..query()
            },
        );

        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let page = execute(
            catalog(),
            &ProductQuery {
                name: Some("nothing-matches-this".to_string()),
                ..query()
            },
        );

        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.content.is_empty());
    }

    #[test]
    fn total_elements_counts_matches_before_paging() {
        let page = execute(
            catalog(),
            &ProductQuery {
                category: Some("electronics".to_string()),
                size: 2,
                ..query()
            },
        );

        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_elements, 4);
        assert_eq!(page.total_pages, 2);
    }
}
