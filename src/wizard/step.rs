//! Wizard steps and the progress indicator.

use serde::Serialize;

use crate::TOTAL_STEPS;
use crate::prelude::*;
use crate::wizard::WizardError;

/// One screen of the listing wizard, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[display(fmt = "Photos")]
    Photos = 1,
    #[display(fmt = "Details")]
    Details = 2,
    #[display(fmt = "Pricing")]
    Pricing = 3,
    #[display(fmt = "Description")]
    Description = 4,
}

impl Step {
    pub const ALL: [Self; TOTAL_STEPS as usize] =
        [Self::Photos, Self::Details, Self::Pricing, Self::Description];
    pub const FIRST: Self = Self::Photos;
    pub const LAST: Self = Self::Description;

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Photos),
            2 => Some(Self::Details),
            3 => Some(Self::Pricing),
            4 => Some(Self::Description),
            _ => None,
        }
    }

    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub const fn is_last(self) -> bool {
        matches!(self, Self::LAST)
    }
}

impl TryFrom<u8> for Step {
    type Error = WizardError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(WizardError::InvalidStep(number))
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.number()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

/// State of the step indicator above the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub steps: Vec<(Step, StepStatus)>,
    /// Connector lines between adjacent steps, left to right
    pub lines: Vec<bool>,
    pub submit_visible: bool,
}

impl Progress {
    pub fn for_step(current: Step) -> Self {
        let steps = Step::ALL
            .iter()
            .map(|&step| {
                let status = match step.cmp(&current) {
                    std::cmp::Ordering::Less => StepStatus::Completed,
                    std::cmp::Ordering::Equal => StepStatus::Active,
                    std::cmp::Ordering::Greater => StepStatus::Upcoming,
                };
                (step, status)
            })
            .collect();

        let lines = (1..TOTAL_STEPS).map(|line| line < current.number()).collect();

        Self {
            steps,
            lines,
            submit_visible: current.is_last(),
        }
    }

    pub fn status(&self, step: Step) -> Option<StepStatus> {
        self.steps.iter().find(|(s, _)| *s == step).map(|(_, status)| *status)
    }
}
