use chrono::{DateTime, Utc};
use shared::protocol::ContactMessage;
use tracing::info;

use crate::{error::FlowError, intake::OrderIntake, validate::RequiredFields};

pub async fn submit_contact(
    message: &ContactMessage,
    intake: &dyn OrderIntake,
) -> Result<DateTime<Utc>, FlowError> {
    message.ensure_complete()?;
    let submitted_at = intake
        .submit_contact(message)
        .await
        .map_err(FlowError::Intake)?;
    info!(subject = ?message.subject, "contact message accepted");
    Ok(submitted_at)
}

#[cfg(test)]
mod tests {
    use shared::domain::ContactSubject;

    use super::*;
    use crate::test_support::RecordingIntake;

    #[tokio::test]
    async fn incomplete_messages_never_reach_intake() {
        let intake = RecordingIntake::ok();
        let err = submit_contact(&ContactMessage::default(), &intake)
            .await
            .expect_err("blank");
        assert!(matches!(err, FlowError::MissingFields(ref f) if f.len() == 4));
        assert!(intake.contacts.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn complete_message_is_forwarded() {
        let intake = RecordingIntake::ok();
        let message = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: Some(ContactSubject::Exhibition),
            message: "Are you showing in the fall?".into(),
        };
        submit_contact(&message, &intake).await.expect("accepted");
        assert_eq!(intake.contacts.lock().expect("lock").as_slice(), &[message]);
    }
}
