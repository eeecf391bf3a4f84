use shared::protocol::{ArtworkDetails, CheckoutForm, ContactMessage, PersonalInfo};

use crate::error::FlowError;

/// Forms whose required fields must be non-blank before they are accepted.
pub trait RequiredFields {
    /// Names of required fields that are empty or whitespace only, in form order.
    fn missing_fields(&self) -> Vec<&'static str>;

    fn ensure_complete(&self) -> Result<(), FlowError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FlowError::MissingFields(missing))
        }
    }
}

fn blank(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

impl RequiredFields for CheckoutForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        blank(&[
            ("first_name", filled(&self.first_name)),
            ("last_name", filled(&self.last_name)),
            ("email", filled(&self.email)),
            ("phone", filled(&self.phone)),
            ("address", filled(&self.address)),
            ("city", filled(&self.city)),
            ("state", filled(&self.state)),
            ("zip", filled(&self.zip)),
            ("country", filled(&self.country)),
            ("card_name", filled(&self.card_name)),
            ("card_number", filled(&self.card_number)),
            ("exp_date", filled(&self.exp_date)),
            ("cvv", filled(&self.cvv)),
        ])
    }
}

impl RequiredFields for PersonalInfo {
    fn missing_fields(&self) -> Vec<&'static str> {
        blank(&[("name", filled(&self.name)), ("email", filled(&self.email))])
    }
}

impl RequiredFields for ArtworkDetails {
    fn missing_fields(&self) -> Vec<&'static str> {
        blank(&[
            ("art_type", self.art_type.is_some()),
            ("size", self.size.is_some()),
            ("theme", filled(&self.theme)),
            ("budget", self.budget.is_some()),
            ("timeline", self.timeline.is_some()),
            ("description", filled(&self.description)),
        ])
    }
}

impl RequiredFields for ContactMessage {
    fn missing_fields(&self) -> Vec<&'static str> {
        blank(&[
            ("name", filled(&self.name)),
            ("email", filled(&self.email)),
            ("subject", self.subject.is_some()),
            ("message", filled(&self.message)),
        ])
    }
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
