pub mod app_config;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod listing;
mod seed;

pub use app_config::{AppConfig, Environment};
pub use catalog::{Catalog, Fabric, Product, ProductConfig, ProductImages, Review};
pub use checkout::{checkout, Address, CartItem, CheckoutRequest, Order, PromoCode};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{CatalogError, CheckoutError, ConfigError};
pub use listing::{average_rating, ProductListing};
