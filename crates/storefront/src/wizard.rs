use chrono::{DateTime, Utc};
use shared::{
    domain::{toggle, ColorPreference},
    protocol::{ArtworkDetails, CommissionRequest, PersonalInfo, WizardStep, WizardView},
};
use tracing::info;

use crate::{error::FlowError, intake::OrderIntake, validate::RequiredFields};

fn step_name(step: WizardStep) -> &'static str {
    match step {
        WizardStep::PersonalInfo => "personal info",
        WizardStep::ArtworkDetails => "artwork details",
        WizardStep::Review => "review",
        WizardStep::Success => "success",
    }
}

/// Four-step commission form. Each step's required fields gate the move
/// forward; going back never discards entered data.
#[derive(Debug, Clone)]
pub struct CustomOrderWizard {
    step: WizardStep,
    request: CommissionRequest,
    submitted_at: Option<DateTime<Utc>>,
}

impl Default for CustomOrderWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomOrderWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::PersonalInfo,
            request: CommissionRequest::default(),
            submitted_at: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn request(&self) -> &CommissionRequest {
        &self.request
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    fn require_step(&self, expected: WizardStep, action: &'static str) -> Result<(), FlowError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(FlowError::InvalidTransition {
                action,
                step: step_name(self.step),
            })
        }
    }

    pub fn set_personal(&mut self, personal: PersonalInfo) -> Result<(), FlowError> {
        self.require_step(WizardStep::PersonalInfo, "edit personal info")?;
        self.request.personal = personal;
        Ok(())
    }

    pub fn set_details(&mut self, details: ArtworkDetails) -> Result<(), FlowError> {
        self.require_step(WizardStep::ArtworkDetails, "edit artwork details")?;
        self.request.details = details;
        Ok(())
    }

    /// Returns whether the color is selected after the toggle.
    pub fn toggle_color(&mut self, color: ColorPreference) -> Result<bool, FlowError> {
        self.require_step(WizardStep::ArtworkDetails, "edit color preferences")?;
        toggle(&mut self.request.colors, color);
        Ok(self.request.colors.contains(&color))
    }

    pub fn next(&mut self) -> Result<WizardStep, FlowError> {
        self.step = match self.step {
            WizardStep::PersonalInfo => {
                self.request.personal.ensure_complete()?;
                WizardStep::ArtworkDetails
            }
            WizardStep::ArtworkDetails => {
                self.request.details.ensure_complete()?;
                WizardStep::Review
            }
            step => {
                return Err(FlowError::InvalidTransition {
                    action: "advance",
                    step: step_name(step),
                })
            }
        };
        Ok(self.step)
    }

    pub fn back(&mut self) -> Result<WizardStep, FlowError> {
        self.step = match self.step {
            WizardStep::ArtworkDetails => WizardStep::PersonalInfo,
            WizardStep::Review => WizardStep::ArtworkDetails,
            step => {
                return Err(FlowError::InvalidTransition {
                    action: "go back",
                    step: step_name(step),
                })
            }
        };
        Ok(self.step)
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.step, WizardStep::ArtworkDetails | WizardStep::Review)
    }

    /// Sends the request from the review step. A failed submission leaves
    /// the wizard on review with its data intact.
    pub async fn submit(&mut self, intake: &dyn OrderIntake) -> Result<DateTime<Utc>, FlowError> {
        self.require_step(WizardStep::Review, "submit")?;
        self.request.personal.ensure_complete()?;
        self.request.details.ensure_complete()?;

        let submitted_at = intake
            .submit_commission(&self.request)
            .await
            .map_err(FlowError::Intake)?;
        info!(email = %self.request.personal.email, "commission request submitted");
        self.step = WizardStep::Success;
        self.submitted_at = Some(submitted_at);
        Ok(submitted_at)
    }

    pub fn view(&self) -> WizardView {
        WizardView {
            step: self.step,
            request: self.request.clone(),
            can_go_back: self.can_go_back(),
        }
    }
}

#[cfg(test)]
#[path = "tests/wizard_tests.rs"]
mod tests;
