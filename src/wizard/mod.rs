//! Four-step listing wizard.
//!
//! [`ListingWizard`] holds the step cursor, the raw field inputs, the
//! accepted draft and the photo collection. The step indicator may jump to
//! any step; "next" only moves on once the current step validates, and
//! submit re-checks every step.

mod decode;
mod fields;
mod photos;
mod preview;
mod step;
mod submission;
mod validation;

use std::collections::BTreeMap;

pub use decode::{DecodeError, DecodedImage, ImageDecoder, ImageFormat, SignatureDecoder};
pub use fields::{Category, Condition, Field, FieldInputs, ListingDraft};
pub use photos::{
    FileUpload, PendingPhoto, Photo, PhotoCollection, PhotoError, PhotoId, PhotoIntake,
};
pub use preview::{DescriptionCount, ListingPreview, PreviewImage, PricingHint};
pub use step::{Progress, Step, StepStatus};
pub use submission::{ListingSink, ListingSubmission};
pub use validation::{FieldError, StepReport, StepWarning};

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    DESCRIPTION_SOFT_LIMIT, MAX_PHOTOS, MIN_DAILY_PRICE, MIN_DESCRIPTION_LEN, MIN_ITEM_NAME_LEN,
    Money,
};
use validation::{StepInputs, check_step, valid_daily_price};

/// Validation thresholds and limits.
///
/// `min_daily_price` is in minor units when read from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub max_photos: usize,
    pub min_item_name_len: usize,
    pub min_description_len: usize,
    pub min_daily_price: Money,
    pub description_soft_limit: usize,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            max_photos: MAX_PHOTOS,
            min_item_name_len: MIN_ITEM_NAME_LEN,
            min_description_len: MIN_DESCRIPTION_LEN,
            min_daily_price: Money::from_units(MIN_DAILY_PRICE),
            description_soft_limit: DESCRIPTION_SOFT_LIMIT,
        }
    }
}

impl WizardConfig {
    /// Reads a config from JSON; missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `WizardError::InvalidConfig` for malformed JSON or a zero
    /// photo limit.
    pub fn from_json(json: &str) -> Result<Self, WizardError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| WizardError::InvalidConfig(e.to_string()))?;
        if config.max_photos == 0 {
            return Err(WizardError::InvalidConfig("max_photos must be at least 1".to_string()));
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Step {0} does not exist")]
    InvalidStep(u8),

    #[error("Unknown {field} option: {value}")]
    UnknownOption { field: Field, value: String },

    #[error("Step {step} has {} invalid field(s)", .errors.len())]
    StepInvalid { step: Step, errors: Vec<FieldError> },

    #[error("Listing has already been submitted")]
    AlreadySubmitted,

    #[error("Invalid wizard config: {0}")]
    InvalidConfig(String),
}

/// Result of pressing "next".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved(Step),
    /// The current step failed; the cursor did not move
    Blocked(StepReport),
    /// The last step validated; there is nowhere further to go
    Finished,
}

/// Aggregate result of [`ListingWizard::ingest_photos`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntakeReport {
    /// In completion order
    pub added: Vec<PhotoId>,
    pub failed: Vec<PhotoError>,
    pub skipped_non_image: usize,
    pub dropped_over_limit: usize,
}

impl IntakeReport {
    pub const fn limit_reached(&self) -> bool {
        self.dropped_over_limit > 0
    }
}

#[derive(Debug, Clone)]
pub struct ListingWizard {
    config: WizardConfig,
    step: Step,
    inputs: FieldInputs,
    draft: ListingDraft,
    photos: PhotoCollection,
    errors: BTreeMap<Field, FieldError>,
    submitted: bool,
}

impl Default for ListingWizard {
    fn default() -> Self {
        Self::new(WizardConfig::default())
    }
}

impl ListingWizard {
    pub fn new(config: WizardConfig) -> Self {
        Self {
            photos: PhotoCollection::new(config.max_photos),
            config,
            step: Step::FIRST,
            inputs: FieldInputs::default(),
            draft: ListingDraft::default(),
            errors: BTreeMap::new(),
            submitted: false,
        }
    }

    pub const fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub const fn current_step(&self) -> Step {
        self.step
    }

    pub fn progress(&self) -> Progress {
        Progress::for_step(self.step)
    }

    pub const fn submit_visible(&self) -> bool {
        self.step.is_last()
    }

    pub const fn inputs(&self) -> &FieldInputs {
        &self.inputs
    }

    pub const fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub const fn photos(&self) -> &PhotoCollection {
        &self.photos
    }

    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// The error currently shown next to `field`, if any
    pub fn field_error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn field_errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    /// Jumps straight to a step from the step indicator, without validation.
    ///
    /// # Errors
    /// Returns `WizardError::InvalidStep` for numbers outside `1..=4`; the
    /// cursor does not move.
    pub fn go_to_step(&mut self, number: u8) -> Result<Step, WizardError> {
        let step = Step::try_from(number)?;
        self.enter(step);
        Ok(step)
    }

    /// "Edit listing" on the preview returns to the first step.
    pub fn edit_listing(&mut self) -> Step {
        self.enter(Step::FIRST);
        Step::FIRST
    }

    fn enter(&mut self, step: Step) {
        if step != self.step {
            debug!(from = %self.step, to = %step, "wizard step changed");
        }
        self.step = step;
    }

    /// Checks one step against the current inputs.
    ///
    /// Fields that pass are copied into the draft; the shown error for each
    /// field of the step is replaced by the outcome of this check.
    ///
    /// # Errors
    /// Returns `WizardError::InvalidStep` for numbers outside `1..=4`.
    pub fn validate_step(&mut self, number: u8) -> Result<StepReport, WizardError> {
        let step = Step::try_from(number)?;
        Ok(self.check(step))
    }

    fn check(&mut self, step: Step) -> StepReport {
        let state = StepInputs {
            inputs: &self.inputs,
            category: self.draft.category,
            condition: self.draft.condition,
            photo_count: self.photos.len(),
        };
        let report = check_step(step, &state, &self.config);

        self.errors.retain(|field, _| field.step() != step);
        for error in &report.errors {
            self.errors.insert(error.field(), error.clone());
        }

        match step {
            Step::Photos => {}
            Step::Details => {
                if report.error_for(Field::ItemName).is_none() {
                    self.draft.item_name = self.inputs.item_name.trim().to_string();
                }
            }
            Step::Pricing => {
                let minimum = self.config.min_daily_price;
                if let Some(price) = valid_daily_price(&self.inputs.price_daily, minimum) {
                    self.draft.price_daily = Some(price);
                }
                self.draft.price_weekly.clone_from(&self.inputs.price_weekly);
                self.draft.price_monthly.clone_from(&self.inputs.price_monthly);
                self.draft.min_rental.clone_from(&self.inputs.min_rental);
                self.draft.deposit.clone_from(&self.inputs.deposit);
            }
            Step::Description => {
                if report.error_for(Field::Description).is_none() {
                    self.draft.description = self.inputs.description.trim().to_string();
                }
                self.draft.location = self.inputs.location.trim().to_string();
            }
        }

        if report.warnings.contains(&StepWarning::NoPhotos) {
            warn!("listing has no photos");
        }
        if !report.is_valid() {
            info!(step = %step, errors = report.errors.len(), "step validation failed");
        }
        report
    }

    /// Validates the current step and moves to the next one if it passes.
    pub fn advance_from_current_step(&mut self) -> Advance {
        let report = self.check(self.step);
        if !report.is_valid() {
            return Advance::Blocked(report);
        }
        match self.step.next() {
            Some(next) => {
                self.enter(next);
                Advance::Moved(next)
            }
            None => Advance::Finished,
        }
    }

    /// Records a raw input value.
    ///
    /// Item name, daily price and description also update the draft live so
    /// the preview, price hints and character counter follow typing.
    ///
    /// # Errors
    /// Returns `WizardError::UnknownOption` when a category or condition
    /// value is not one of the fixed options.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), WizardError> {
        match field {
            Field::Category => {
                self.select_category(value.parse()?);
                return Ok(());
            }
            Field::Condition => {
                self.select_condition(value.parse()?);
                return Ok(());
            }
            Field::ItemName => self.draft.item_name = value.trim().to_string(),
            Field::PriceDaily => self.draft.price_daily = Money::parse_amount(value),
            Field::Description => self.draft.description = value.to_string(),
            Field::PriceWeekly
            | Field::PriceMonthly
            | Field::MinRental
            | Field::Deposit
            | Field::Location => {}
        }
        if let Some(slot) = self.inputs.slot_mut(field) {
            *slot = value.to_string();
        }
        Ok(())
    }

    pub fn select_category(&mut self, category: Category) {
        self.draft.category = Some(category);
        self.errors.remove(&Field::Category);
    }

    pub fn select_condition(&mut self, condition: Condition) {
        self.draft.condition = Some(condition);
        self.errors.remove(&Field::Condition);
    }

    pub fn pricing_hint(&self) -> PricingHint {
        PricingHint::suggest(self.draft.price_daily)
    }

    pub fn description_count(&self) -> DescriptionCount {
        DescriptionCount::of(&self.inputs.description, self.config.description_soft_limit)
    }

    pub fn preview(&self) -> ListingPreview {
        ListingPreview::project(&self.draft, &self.photos)
    }

    /// Claims photo slots for a dropped or picked batch.
    ///
    /// Each returned [`PendingPhoto`] is finished with
    /// [`complete_photo`](Self::complete_photo) once its decode is done.
    /// Dropping one instead gives its slot back.
    pub fn add_photos(&mut self, files: impl IntoIterator<Item = FileUpload>) -> PhotoIntake {
        let intake = self.photos.reserve(files);
        if intake.skipped_non_image > 0 {
            debug!(
                skipped = intake.skipped_non_image,
                "non-image files skipped"
            );
        }
        if intake.limit_reached() {
            warn!(
                max = self.config.max_photos,
                dropped = intake.dropped_over_limit,
                "photo limit reached"
            );
        }
        intake
    }

    /// Applies one finished decode.
    ///
    /// # Errors
    /// Returns `PhotoError::Decode` when decoding failed (the slot is freed)
    /// and `PhotoError::UnknownPending` for a slot this wizard did not issue.
    pub fn complete_photo(
        &mut self,
        pending: PendingPhoto,
        decoded: Result<DecodedImage, DecodeError>,
    ) -> Result<PhotoId, PhotoError> {
        match self.photos.complete(pending, decoded) {
            Ok(id) => {
                debug!(%id, count = self.photos.len(), "photo added");
                Ok(id)
            }
            Err(err) => {
                warn!(error = %err, "photo not added");
                Err(err)
            }
        }
    }

    /// Claims slots for `files`, decodes them concurrently and applies each
    /// result as soon as it is ready.
    ///
    /// Dropping the future part way through frees the slots of decodes that
    /// had not finished.
    pub async fn ingest_photos<D>(
        &mut self,
        decoder: &D,
        files: impl IntoIterator<Item = FileUpload>,
    ) -> IntakeReport
    where
        D: ImageDecoder + ?Sized,
    {
        let intake = self.add_photos(files);
        let mut report = IntakeReport {
            skipped_non_image: intake.skipped_non_image,
            dropped_over_limit: intake.dropped_over_limit,
            ..IntakeReport::default()
        };

        let mut decodes: FuturesUnordered<_> = intake
            .pending
            .into_iter()
            .map(|pending| async move {
                let decoded = decoder.decode(pending.file()).await;
                (pending, decoded)
            })
            .collect();

        while let Some((pending, decoded)) = decodes.next().await {
            match self.complete_photo(pending, decoded) {
                Ok(id) => report.added.push(id),
                Err(err) => report.failed.push(err),
            }
        }
        report
    }

    /// # Errors
    /// Returns `PhotoError::IndexOutOfBounds` if there is no such photo.
    pub fn set_primary_photo(&mut self, index: usize) -> Result<(), PhotoError> {
        self.photos.set_primary(index)
    }

    /// # Errors
    /// Returns `PhotoError::IndexOutOfBounds` if there is no such photo.
    pub fn delete_photo(&mut self, index: usize) -> Result<Photo, PhotoError> {
        let removed = self.photos.delete(index)?;
        debug!(id = %removed.id, was_primary = removed.is_primary, "photo deleted");
        Ok(removed)
    }

    /// Validates every step and hands the listing to `sink`.
    ///
    /// On the first failing step the cursor moves there and nothing is sent.
    ///
    /// # Errors
    /// Returns `WizardError::StepInvalid` naming the failing step, or
    /// `WizardError::AlreadySubmitted` after a successful submit.
    pub fn submit<S: ListingSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<ListingSubmission, WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }

        for step in Step::ALL {
            let report = self.check(step);
            if !report.is_valid() {
                self.enter(step);
                return Err(WizardError::StepInvalid {
                    step,
                    errors: report.errors,
                });
            }
        }

        let (Some(category), Some(condition), Some(price_daily)) =
            (self.draft.category, self.draft.condition, self.draft.price_daily)
        else {
            self.enter(Step::Details);
            return Err(WizardError::StepInvalid {
                step: Step::Details,
                errors: Vec::new(),
            });
        };

        let listing = ListingSubmission {
            photos: self.photos.iter().map(|photo| photo.file.clone()).collect(),
            item_name: self.draft.item_name.clone(),
            category,
            condition,
            price_daily,
            price_weekly: self.draft.price_weekly.clone(),
            price_monthly: self.draft.price_monthly.clone(),
            min_rental: self.draft.min_rental.clone(),
            deposit: self.draft.deposit.clone(),
            description: self.draft.description.clone(),
            location: self.draft.location.clone(),
        };

        sink.submit_listing(&listing);
        self.submitted = true;
        info!(
            name = %listing.item_name,
            category = %category,
            photos = listing.photos.len(),
            "listing submitted"
        );
        Ok(listing)
    }
}
