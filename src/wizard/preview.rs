//! Derived views of the draft: listing preview, price hints, character counter.

use serde::Serialize;

use crate::wizard::{ListingDraft, PhotoCollection, PhotoId};
use crate::{
    DAYS_PER_MONTH_PRICE, DAYS_PER_WEEK_PRICE, MONTHLY_PRICE_PERCENT, Money, WEEKLY_PRICE_PERCENT,
};

const NAME_PLACEHOLDER: &str = "Your Item Name";
const CATEGORY_PLACEHOLDER: &str = "Category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum PreviewImage {
    Photo(PhotoId),
    /// Shown as "No image"
    Placeholder,
}

/// The listing card as a renter would see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingPreview {
    pub image: PreviewImage,
    pub name: String,
    pub price: String,
    pub category: String,
    /// Empty until a condition is chosen
    pub condition: String,
}

impl ListingPreview {
    pub fn project(draft: &ListingDraft, photos: &PhotoCollection) -> Self {
        let image = photos
            .primary()
            .or_else(|| photos.get(0))
            .map_or(PreviewImage::Placeholder, |photo| PreviewImage::Photo(photo.id));

        let name = if draft.item_name.is_empty() {
            NAME_PLACEHOLDER.to_string()
        } else {
            draft.item_name.clone()
        };

        let price = format!("{}/day", draft.price_daily.unwrap_or(Money::ZERO));

        let category = draft
            .category
            .map_or_else(|| CATEGORY_PLACEHOLDER.to_string(), |category| category.badge());

        let condition = draft
            .condition
            .map(|condition| format!("Condition: {}", condition.label()))
            .unwrap_or_default();

        Self {
            image,
            name,
            price,
            category,
            condition,
        }
    }
}

/// Suggested discounted rates for the pricing step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PricingHint {
    pub weekly: Option<Money>,
    pub monthly: Option<Money>,
}

impl PricingHint {
    /// Weekly keeps 85% of seven days, monthly 75% of thirty, both rounded
    /// to whole units. No hint for a zero or missing daily price.
    pub const fn suggest(daily: Option<Money>) -> Self {
        match daily {
            Some(daily) if !daily.is_zero() => Self {
                weekly: Some(
                    daily
                        .times(DAYS_PER_WEEK_PRICE)
                        .percent_rounded_to_units(WEEKLY_PRICE_PERCENT),
                ),
                monthly: Some(
                    daily
                        .times(DAYS_PER_MONTH_PRICE)
                        .percent_rounded_to_units(MONTHLY_PRICE_PERCENT),
                ),
            },
            _ => Self {
                weekly: None,
                monthly: None,
            },
        }
    }

    pub fn weekly_text(&self) -> String {
        self.weekly
            .map(|price| format!("Suggested: {price} ({}% off)", 100 - WEEKLY_PRICE_PERCENT))
            .unwrap_or_default()
    }

    pub fn monthly_text(&self) -> String {
        self.monthly
            .map(|price| format!("Suggested: {price} ({}% off)", 100 - MONTHLY_PRICE_PERCENT))
            .unwrap_or_default()
    }
}

/// Live character counter under the description box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DescriptionCount {
    pub chars: usize,
    pub over_soft_limit: bool,
}

impl DescriptionCount {
    pub fn of(text: &str, soft_limit: usize) -> Self {
        let chars = text.chars().count();
        Self {
            chars,
            over_soft_limit: chars > soft_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::png_upload;
    use crate::wizard::{Category, Condition, DecodedImage, ImageFormat};

    fn photos(count: usize) -> PhotoCollection {
        let mut photos = PhotoCollection::new(8);
        let files = (0..count).map(|i| png_upload(&format!("{i}.png")));
        for pending in photos.reserve(files).pending {
            let image = DecodedImage {
                format: ImageFormat::Png,
                bytes: pending.file().shared_bytes().clone(),
            };
            photos.complete(pending, Ok(image)).expect("complete photo");
        }
        photos
    }

    #[test]
    fn test_empty_draft_uses_placeholders() {
        let preview = ListingPreview::project(&ListingDraft::default(), &photos(0));
        assert_eq!(preview.image, PreviewImage::Placeholder);
        assert_eq!(preview.name, "Your Item Name");
        assert_eq!(preview.price, "€0/day");
        assert_eq!(preview.category, "Category");
        assert_eq!(preview.condition, "");
    }

    #[test]
    fn test_filled_draft() {
        let draft = ListingDraft {
            item_name: "Sony Alpha 7iii".to_string(),
            category: Some(Category::Cameras),
            condition: Some(Condition::LikeNew),
            price_daily: Money::parse_amount("45.5"),
            ..ListingDraft::default()
        };
        let mut photos = photos(3);
        photos.set_primary(2).expect("set primary");
        let primary = photos.get(2).map(|p| p.id).expect("third photo");

        let preview = ListingPreview::project(&draft, &photos);
        assert_eq!(preview.image, PreviewImage::Photo(primary));
        assert_eq!(preview.name, "Sony Alpha 7iii");
        assert_eq!(preview.price, "€45.50/day");
        assert_eq!(preview.category, "CAMERAS");
        assert_eq!(preview.condition, "Condition: Like-new");
    }

    #[test]
    fn test_pricing_hint_cases() {
        struct TestCase {
            daily: Option<Money>,
            weekly: Option<u64>,
            monthly: Option<u64>,
        }

        let cases = [
            TestCase {
                daily: Some(Money::from_units(45)),
                weekly: Some(268),
                monthly: Some(1013),
            },
            TestCase {
                daily: Some(Money::from_units(10)),
                weekly: Some(60),
                monthly: Some(225),
            },
            TestCase {
                daily: Some(Money::ZERO),
                weekly: None,
                monthly: None,
            },
            TestCase {
                daily: None,
                weekly: None,
                monthly: None,
            },
        ];

        for case in &cases {
            let hint = PricingHint::suggest(case.daily);
            let daily = case.daily;
            assert_eq!(
                hint.weekly,
                case.weekly.map(Money::from_units),
                "weekly for {daily:?}"
            );
            assert_eq!(
                hint.monthly,
                case.monthly.map(Money::from_units),
                "monthly for {daily:?}"
            );
        }
    }

    #[test]
    fn test_hint_text() {
        let hint = PricingHint::suggest(Some(Money::from_units(45)));
        assert_eq!(hint.weekly_text(), "Suggested: €268 (15% off)");
        assert_eq!(hint.monthly_text(), "Suggested: €1013 (25% off)");
        assert_eq!(PricingHint::default().weekly_text(), "");
    }

    #[test]
    fn test_description_count() {
        assert_eq!(DescriptionCount::of("héllo", 500), DescriptionCount {
            chars: 5,
            over_soft_limit: false,
        });
        assert!(DescriptionCount::of(&"x".repeat(501), 500).over_soft_limit);
        assert!(!DescriptionCount::of(&"x".repeat(500), 500).over_soft_limit);
    }
}
