use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - a single tracked inventory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store on creation
    pub id: u32,
    /// Product name
    pub name: String,
    /// Free-text category, compared case-insensitively
    pub category: String,
    /// Price per unit
    pub unit_price: f64,
    /// Expiration date; absent for non-perishable goods
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    /// Units currently in stock
    pub quantity_in_stock: u32,
}

/// Request body for creating or fully replacing a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Omit (or send 0) to let the store assign the next free id
    #[serde(default)]
    pub id: Option<u32>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub quantity_in_stock: u32,
}

impl ProductInput {
    /// Build the stored record once the final id is known.
    pub fn into_product(self, id: u32) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            unit_price: self.unit_price,
            expiration_date: self.expiration_date,
            quantity_in_stock: self.quantity_in_stock,
        }
    }
}

/// Availability partition for the stock filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Availability {
    #[default]
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "in")]
    InStock,
    #[strum(serialize = "out")]
    OutOfStock,
}

impl Availability {
    /// Parse the `available` query value; anything unrecognized keeps all records.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

/// Product field a result set can be ordered by.
///
/// Parsed from the wire names (`unitPrice`, `expirationDate`, ...); an
/// unrecognized name is treated as "no ordering" by the query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    Id,
    Name,
    Category,
    UnitPrice,
    QuantityInStock,
    ExpirationDate,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Orient a comparison result along this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Single-key sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// `None` when the requested field is unrecognized; the engine then
    /// keeps the input order
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parse the `sortBy` query format `<field>,<asc|desc>`.
    ///
    /// A missing or unrecognized direction falls back to descending, and
    /// anything after the first `field,direction` pair is ignored (no
    /// multi-key sort).
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(',');
        let field = parts.next().and_then(|f| f.trim().parse().ok());
        let direction = parts
            .next()
            .and_then(|d| d.trim().parse().ok())
            .unwrap_or_default();
        Self { field, direction }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: Some(SortField::Id),
            direction: SortDirection::Desc,
        }
    }
}

/// Query specification the engine executes against a store snapshot.
///
/// `page` and `size` are validated at the HTTP boundary; the engine
/// assumes `size > 0`.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    /// Case-insensitive name substring filter
    pub name: Option<String>,
    /// Case-insensitive category equality filter
    pub category: Option<String>,
    pub availability: Availability,
    pub sort: SortSpec,
    /// Zero-based page index
    pub page: u32,
    pub size: u32,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            name: None,
            category: None,
            availability: Availability::All,
            sort: SortSpec::default(),
            page: 0,
            size: 10,
        }
    }
}

/// One page of results plus the metadata clients need to page further.
///
/// `total_elements` counts every record that matched the filters, before
/// the page slice was taken.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// The requested page index
    pub number: u32,
}
