use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product '{name}' has an empty slug")]
    EmptySlug { name: String },

    #[error("duplicate product slug: '{slug}' (from product '{name}')")]
    DuplicateSlug { slug: String, name: String },
}

/// Checkout rejections surfaced to the client as a 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("cart total is out of range")]
    AmountOutOfRange,
}
