//! Peripheral page widgets: buy/sell mode, search placeholders, category
//! cards and the product page's gallery and description toggle.

mod category;
mod description;
mod gallery;
mod mode;

pub use category::{CategoryRoute, route_category, route_product};
pub use description::DescriptionToggle;
pub use gallery::Gallery;
pub use mode::{MarketMode, ModeToggle, ModeTransition, PageKind, PlaceholderRotator, SearchRequest};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorefrontError {
    #[error("Unknown market mode: {0}")]
    UnknownMode(String),
}
