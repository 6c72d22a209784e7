//! Home page category cards.

use tracing::info;

use crate::storefront::MarketMode;

const PAGE_READY_CATEGORY: &str = "electronics";
const CATEGORY_PAGE: &str = "electronics.html";
const PRODUCT_PAGE: &str = "product.html";

/// Where a click on a category card leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRoute {
    /// Open this page
    Page(&'static str),
    /// The category has no page yet; show this notice instead
    ComingSoon(String),
}

/// Routes a category card click.
///
/// `slug` is the card's category key and `name` its visible title. Only
/// electronics has a page so far.
pub fn route_category(slug: &str, name: &str, mode: MarketMode) -> CategoryRoute {
    info!(%mode, category = slug, "category selected");
    if slug == PAGE_READY_CATEGORY {
        return CategoryRoute::Page(CATEGORY_PAGE);
    }
    CategoryRoute::ComingSoon(format!(
        "Opening \"{}\" in {mode} mode\n\n(Category page coming soon)",
        name.trim()
    ))
}

/// Every product card on a category page opens the product page.
pub const fn route_product() -> &'static str {
    PRODUCT_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_category_cases() {
        struct TestCase {
            slug: &'static str,
            name: &'static str,
            mode: MarketMode,
            expected: CategoryRoute,
        }

        let cases = [
            TestCase {
                slug: "electronics",
                name: "Electronics",
                mode: MarketMode::Buy,
                expected: CategoryRoute::Page("electronics.html"),
            },
            TestCase {
                slug: "electronics",
                name: "Electronics",
                mode: MarketMode::Sell,
                expected: CategoryRoute::Page("electronics.html"),
            },
            TestCase {
                slug: "drones",
                name: " Drones ",
                mode: MarketMode::Buy,
                expected: CategoryRoute::ComingSoon(
                    "Opening \"Drones\" in buy mode\n\n(Category page coming soon)".to_string(),
                ),
            },
            TestCase {
                slug: "spaces",
                name: "Studio Spaces",
                mode: MarketMode::Sell,
                expected: CategoryRoute::ComingSoon(
                    "Opening \"Studio Spaces\" in sell mode\n\n(Category page coming soon)"
                        .to_string(),
                ),
            },
        ];

        for case in &cases {
            assert_eq!(
                route_category(case.slug, case.name, case.mode),
                case.expected,
                "slug {}",
                case.slug
            );
        }
    }

    #[test]
    fn test_route_product() {
        assert_eq!(route_product(), "product.html");
    }
}
