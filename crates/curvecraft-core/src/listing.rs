use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{Product, Review};

/// Lean product summary returned by the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub compression: String,
    pub categories: Vec<String>,
    /// The product's primary image.
    pub image: String,
    /// Mean review rating to one decimal place; `null` without reviews.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub rating: Option<Decimal>,
    pub reviews_count: usize,
}

impl From<&Product> for ProductListing {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            price: product.price,
            sizes: product.sizes.clone(),
            colors: product.colors.clone(),
            compression: product.compression.clone(),
            categories: product.categories.clone(),
            image: product.images.primary.clone(),
            rating: average_rating(&product.reviews),
            reviews_count: product.reviews.len(),
        }
    }
}

/// Arithmetic mean of the review ratings, rounded half-to-even to one place.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn average_rating(reviews: &[Review]) -> Option<Decimal> {
    if reviews.is_empty() {
        return None;
    }

    let sum: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
    let count = Decimal::from(reviews.len());
    Some((Decimal::from(sum) / count).round_dp(1))
}
