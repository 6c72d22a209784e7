//! Listing fields: raw inputs as typed, and the accumulated draft.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::wizard::{Step, WizardError};
use crate::{DEFAULT_MIN_RENTAL, Money};

/// Every input the wizard captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    #[display(fmt = "itemName")]
    ItemName,
    #[display(fmt = "category")]
    Category,
    #[display(fmt = "condition")]
    Condition,
    #[display(fmt = "priceDaily")]
    PriceDaily,
    #[display(fmt = "priceWeekly")]
    PriceWeekly,
    #[display(fmt = "priceMonthly")]
    PriceMonthly,
    #[display(fmt = "minRental")]
    MinRental,
    #[display(fmt = "deposit")]
    Deposit,
    #[display(fmt = "description")]
    Description,
    #[display(fmt = "location")]
    Location,
}

impl Field {
    /// The step whose screen shows this field
    pub const fn step(self) -> Step {
        match self {
            Self::ItemName | Self::Category | Self::Condition => Step::Details,
            Self::PriceDaily
            | Self::PriceWeekly
            | Self::PriceMonthly
            | Self::MinRental
            | Self::Deposit => Step::Pricing,
            Self::Description | Self::Location => Step::Description,
        }
    }
}

/// Catalogue section a listing appears under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[display(fmt = "electronics")]
    Electronics,
    #[display(fmt = "cameras")]
    Cameras,
    #[display(fmt = "lighting")]
    Lighting,
    #[display(fmt = "audio")]
    Audio,
    #[display(fmt = "drones")]
    Drones,
    #[display(fmt = "furniture")]
    Furniture,
    #[display(fmt = "spaces")]
    Spaces,
    #[display(fmt = "crew")]
    Crew,
    #[display(fmt = "other")]
    Other,
}

/// State of the item being rented out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    #[display(fmt = "new")]
    New,
    #[display(fmt = "like-new")]
    LikeNew,
    #[display(fmt = "good")]
    Good,
    #[display(fmt = "fair")]
    Fair,
}

impl FromStr for Category {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.to_string() == value)
            .ok_or_else(|| WizardError::UnknownOption {
                field: Field::Category,
                value: value.to_string(),
            })
    }
}

impl FromStr for Condition {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|condition| condition.to_string() == value)
            .ok_or_else(|| WizardError::UnknownOption {
                field: Field::Condition,
                value: value.to_string(),
            })
    }
}

impl Category {
    pub const ALL: [Self; 9] = [
        Self::Electronics,
        Self::Cameras,
        Self::Lighting,
        Self::Audio,
        Self::Drones,
        Self::Furniture,
        Self::Spaces,
        Self::Crew,
        Self::Other,
    ];

    /// Uppercase badge text, e.g. `CAMERAS`
    pub fn badge(self) -> String {
        self.to_string().to_uppercase()
    }
}

impl Condition {
    pub const ALL: [Self; 4] = [Self::New, Self::LikeNew, Self::Good, Self::Fair];

    /// Value with its first letter capitalized, e.g. `Like-new`
    pub fn label(self) -> String {
        let value = self.to_string();
        let mut chars = value.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

/// Text inputs exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInputs {
    pub item_name: String,
    pub price_daily: String,
    pub price_weekly: String,
    pub price_monthly: String,
    pub min_rental: String,
    pub deposit: String,
    pub description: String,
    pub location: String,
}

impl Default for FieldInputs {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            price_daily: String::new(),
            price_weekly: String::new(),
            price_monthly: String::new(),
            min_rental: DEFAULT_MIN_RENTAL.to_string(),
            deposit: String::new(),
            description: String::new(),
            location: String::new(),
        }
    }
}

impl FieldInputs {
    pub(crate) fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::ItemName => Some(&mut self.item_name),
            Field::PriceDaily => Some(&mut self.price_daily),
            Field::PriceWeekly => Some(&mut self.price_weekly),
            Field::PriceMonthly => Some(&mut self.price_monthly),
            Field::MinRental => Some(&mut self.min_rental),
            Field::Deposit => Some(&mut self.deposit),
            Field::Description => Some(&mut self.description),
            Field::Location => Some(&mut self.location),
            Field::Category | Field::Condition => None,
        }
    }
}

/// Values accepted so far; what the preview and the submission read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub item_name: String,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    pub price_daily: Option<Money>,
    pub price_weekly: String,
    pub price_monthly: String,
    pub min_rental: String,
    pub deposit: String,
    pub description: String,
    pub location: String,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            category: None,
            condition: None,
            price_daily: None,
            price_weekly: String::new(),
            price_monthly: String::new(),
            min_rental: DEFAULT_MIN_RENTAL.to_string(),
            deposit: String::new(),
            description: String::new(),
            location: String::new(),
        }
    }
}
