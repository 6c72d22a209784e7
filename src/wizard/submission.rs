//! The listing record handed off on a successful submit.

use serde::Serialize;

use crate::Money;
use crate::wizard::{Category, Condition, FileUpload};

/// A fully validated listing.
///
/// Photos are the raw uploads in collection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSubmission {
    pub photos: Vec<FileUpload>,
    pub item_name: String,
    pub category: Category,
    pub condition: Condition,
    pub price_daily: Money,
    pub price_weekly: String,
    pub price_monthly: String,
    pub min_rental: String,
    pub deposit: String,
    pub description: String,
    pub location: String,
}

/// Receives submitted listings.
pub trait ListingSink {
    fn submit_listing(&mut self, listing: &ListingSubmission);
}

impl ListingSink for Vec<ListingSubmission> {
    fn submit_listing(&mut self, listing: &ListingSubmission) {
        self.push(listing.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::png_upload;

    #[test]
    fn test_serialized_shape() {
        let listing = ListingSubmission {
            photos: vec![png_upload("front.png")],
            item_name: "Light Box".to_string(),
            category: Category::Lighting,
            condition: Condition::Good,
            price_daily: Money::from_units(12),
            price_weekly: String::new(),
            price_monthly: String::new(),
            min_rental: "1".to_string(),
            deposit: "100".to_string(),
            description: "Soft even light for product shots".to_string(),
            location: "Berlin".to_string(),
        };

        let json = serde_json::to_value(&listing).expect("serialize listing");
        assert_eq!(json["itemName"], "Light Box");
        assert_eq!(json["category"], "lighting");
        assert_eq!(json["condition"], "good");
        assert_eq!(json["priceDaily"], 1200);
        assert_eq!(json["photos"][0]["name"], "front.png");
        assert_eq!(json["photos"][0]["contentType"], "image/png");
        assert_eq!(json["photos"][0]["size"], 12);

        let mut sink: Vec<ListingSubmission> = Vec::new();
        sink.submit_listing(&listing);
        assert_eq!(sink.len(), 1);
    }
}
