//! Per-step field checks.
//!
//! Checks are pure: they read the raw inputs and selections and return a
//! [`StepReport`]. The wizard decides what to persist from the report.

use serde::Serialize;

use crate::Money;
use crate::wizard::{Category, Condition, Field, FieldInputs, Step, WizardConfig};

/// A single field that failed its check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
pub enum FieldError {
    #[error("Item name must be at least {min} characters")]
    ItemNameTooShort { min: usize },

    #[error("Please choose a category")]
    CategoryMissing,

    #[error("Please choose a condition")]
    ConditionMissing,

    #[error("Please enter a valid daily price")]
    InvalidDailyPrice,

    #[error("Description must be at least {min} characters")]
    DescriptionTooShort { min: usize },
}

impl FieldError {
    pub const fn field(&self) -> Field {
        match self {
            Self::ItemNameTooShort { .. } => Field::ItemName,
            Self::CategoryMissing => Field::Category,
            Self::ConditionMissing => Field::Condition,
            Self::InvalidDailyPrice => Field::PriceDaily,
            Self::DescriptionTooShort { .. } => Field::Description,
        }
    }
}

/// Non-blocking notices raised while checking a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StepWarning {
    /// Listings without photos are allowed but discouraged
    NoPhotos,
}

/// Outcome of checking one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: Step,
    pub errors: Vec<FieldError>,
    pub warnings: Vec<StepWarning>,
}

impl StepReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field() == field)
    }
}

/// Everything a step check reads.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StepInputs<'a> {
    pub inputs: &'a FieldInputs,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    pub photo_count: usize,
}

/// A daily price the listing may use: a plain number no lower than the minimum.
pub(crate) fn valid_daily_price(raw: &str, minimum: Money) -> Option<Money> {
    Money::parse_amount_at_least(raw, minimum)
}

pub(crate) fn check_step(step: Step, state: &StepInputs<'_>, config: &WizardConfig) -> StepReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match step {
        Step::Photos => {
            if state.photo_count == 0 {
                warnings.push(StepWarning::NoPhotos);
            }
        }
        Step::Details => {
            if state.inputs.item_name.trim().chars().count() < config.min_item_name_len {
                errors.push(FieldError::ItemNameTooShort {
                    min: config.min_item_name_len,
                });
            }
            if state.category.is_none() {
                errors.push(FieldError::CategoryMissing);
            }
            if state.condition.is_none() {
                errors.push(FieldError::ConditionMissing);
            }
        }
        Step::Pricing => {
            if valid_daily_price(&state.inputs.price_daily, config.min_daily_price).is_none() {
                errors.push(FieldError::InvalidDailyPrice);
            }
        }
        Step::Description => {
            if state.inputs.description.trim().chars().count() < config.min_description_len {
                errors.push(FieldError::DescriptionTooShort {
                    min: config.min_description_len,
                });
            }
        }
    }

    StepReport {
        step,
        errors,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs_with(edit: impl FnOnce(&mut FieldInputs)) -> FieldInputs {
        let mut inputs = FieldInputs::default();
        edit(&mut inputs);
        inputs
    }

    #[test]
    fn test_photos_step_warns_but_passes() {
        let inputs = FieldInputs::default();
        let state = StepInputs {
            inputs: &inputs,
            category: None,
            condition: None,
            photo_count: 0,
        };
        let report = check_step(Step::Photos, &state, &WizardConfig::default());
        assert!(report.is_valid());
        assert_eq!(report.warnings, vec![StepWarning::NoPhotos]);

        let with_photo = StepInputs {
            photo_count: 1,
            ..state
        };
        let report = check_step(Step::Photos, &with_photo, &WizardConfig::default());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_details_reports_each_failure() {
        let inputs = inputs_with(|i| i.item_name = "  TV ".to_string());
        let state = StepInputs {
            inputs: &inputs,
            category: None,
            condition: None,
            photo_count: 0,
        };
        let report = check_step(Step::Details, &state, &WizardConfig::default());
        assert_eq!(
            report.errors,
            vec![
                FieldError::ItemNameTooShort { min: 3 },
                FieldError::CategoryMissing,
                FieldError::ConditionMissing,
            ]
        );
        assert_eq!(report.error_for(Field::ItemName).map(ToString::to_string).as_deref(), Some(
            "Item name must be at least 3 characters"
        ));
    }

    #[test]
    fn test_details_accepts_three_chars() {
        let inputs = inputs_with(|i| i.item_name = "Amp".to_string());
        let state = StepInputs {
            inputs: &inputs,
            category: Some(Category::Audio),
            condition: Some(Condition::Good),
            photo_count: 0,
        };
        assert!(check_step(Step::Details, &state, &WizardConfig::default()).is_valid());
    }

    #[test]
    fn test_daily_price_cases() {
        struct TestCase {
            raw: &'static str,
            valid: bool,
        }

        let cases = [
            TestCase {
                raw: "",
                valid: false,
            },
            TestCase {
                raw: "0",
                valid: false,
            },
            TestCase {
                raw: "0.99",
                valid: false,
            },
            TestCase {
                raw: "0.999",
                valid: false,
            },
            TestCase {
                raw: "0.996",
                valid: false,
            },
            TestCase {
                raw: "-5",
                valid: false,
            },
            TestCase {
                raw: "abc",
                valid: false,
            },
            TestCase {
                raw: "12abc",
                valid: false,
            },
            TestCase {
                raw: "1",
                valid: true,
            },
            TestCase {
                raw: " 45.50 ",
                valid: true,
            },
        ];

        for case in &cases {
            let inputs = inputs_with(|i| i.price_daily = case.raw.to_string());
            let state = StepInputs {
                inputs: &inputs,
                category: None,
                condition: None,
                photo_count: 0,
            };
            let report = check_step(Step::Pricing, &state, &WizardConfig::default());
            assert_eq!(report.is_valid(), case.valid, "daily price {:?}", case.raw);
        }
    }

    #[test]
    fn test_description_length_is_trimmed() {
        let short = inputs_with(|i| i.description = "  too short  ".to_string());
        let long = inputs_with(|i| i.description = "Ten chars!".to_string());

        for (inputs, valid) in [(&short, false), (&long, true)] {
            let state = StepInputs {
                inputs,
                category: None,
                condition: None,
                photo_count: 0,
            };
            let report = check_step(Step::Description, &state, &WizardConfig::default());
            assert_eq!(report.is_valid(), valid);
        }
    }
}
