use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::ProductListing;
use crate::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    /// Star rating. Expected to be 1-5 but not enforced.
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fabric {
    pub composition: String,
    pub feel: String,
    pub care: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImages {
    pub primary: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub before: String,
    pub after: String,
}

/// A catalog product as served by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Regenerated on every process start. Key on `slug` for anything durable.
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    /// Free-text compression level, e.g. `"Firm"`, `"Medium"`, `"Light"`.
    pub compression: String,
    pub categories: Vec<String>,
    pub description: String,
    pub fabric: Fabric,
    pub images: ProductImages,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Product definition without an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductConfig {
    pub name: String,
    pub slug: String,
    pub price: Decimal,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub compression: String,
    pub categories: Vec<String>,
    pub description: String,
    pub fabric: Fabric,
    pub images: ProductImages,
    pub reviews: Vec<Review>,
}

impl ProductConfig {
    /// Materialize the product with a freshly generated id.
    #[must_use]
    pub fn into_product(self) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: self.name,
            slug: self.slug,
            price: self.price,
            sizes: self.sizes,
            colors: self.colors,
            compression: self.compression,
            categories: self.categories,
            description: self.description,
            fabric: self.fabric,
            images: self.images,
            reviews: self.reviews,
        }
    }
}

/// Immutable product snapshot, built once before the server accepts traffic.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from product definitions, assigning fresh ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if any slug is empty or appears twice.
    pub fn new(configs: Vec<ProductConfig>) -> Result<Self, CatalogError> {
        validate_products(&configs)?;
        Ok(Self::from_configs(configs))
    }

    /// The built-in storefront catalog.
    ///
    /// Content is fixed; only the generated ids differ between calls.
    #[must_use]
    pub fn seed() -> Self {
        Self::from_configs(crate::seed::builtin_products())
    }

    fn from_configs(configs: Vec<ProductConfig>) -> Self {
        Self {
            products: configs
                .into_iter()
                .map(ProductConfig::into_product)
                .collect(),
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Case-sensitive exact slug match.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Lean listing projection of every product, in catalog order.
    #[must_use]
    pub fn listings(&self) -> Vec<ProductListing> {
        self.products.iter().map(ProductListing::from).collect()
    }
}

fn validate_products(products: &[ProductConfig]) -> Result<(), CatalogError> {
    let mut seen_slugs = HashSet::new();

    for product in products {
        if product.slug.trim().is_empty() {
            return Err(CatalogError::EmptySlug {
                name: product.name.clone(),
            });
        }

        if !seen_slugs.insert(product.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug {
                slug: product.slug.clone(),
                name: product.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
