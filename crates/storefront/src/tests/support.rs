use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use shared::protocol::{CheckoutForm, CommissionRequest, ContactMessage};

use crate::intake::{OrderIntake, OrderReceipt, OrderSubmission};

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid timestamp")
}

/// Records every submission; optionally rejects them all.
#[derive(Default, Clone)]
pub struct RecordingIntake {
    pub orders: Arc<Mutex<Vec<OrderSubmission>>>,
    pub commissions: Arc<Mutex<Vec<CommissionRequest>>>,
    pub contacts: Arc<Mutex<Vec<ContactMessage>>>,
    fail: bool,
}

impl RecordingIntake {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            Err(anyhow!("intake unavailable"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OrderIntake for RecordingIntake {
    async fn submit_order(&self, order: &OrderSubmission) -> Result<OrderReceipt> {
        self.check()?;
        self.orders.lock().expect("orders lock").push(order.clone());
        Ok(OrderReceipt {
            order_number: "ART-123456".into(),
            placed_at: fixed_time(),
        })
    }

    async fn submit_commission(&self, request: &CommissionRequest) -> Result<DateTime<Utc>> {
        self.check()?;
        self.commissions.lock().expect("commissions lock").push(request.clone());
        Ok(fixed_time())
    }

    async fn submit_contact(&self, message: &ContactMessage) -> Result<DateTime<Utc>> {
        self.check()?;
        self.contacts.lock().expect("contacts lock").push(message.clone());
        Ok(fixed_time())
    }
}

pub fn complete_checkout_form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone: "505-555-0100".into(),
        address: "12 Gallery Row".into(),
        address2: String::new(),
        city: "Santa Fe".into(),
        state: "NM".into(),
        zip: "87501".into(),
        country: "US".into(),
        card_name: "Ada Lovelace".into(),
        card_number: "4242424242424242".into(),
        exp_date: "12/29".into(),
        cvv: "123".into(),
    }
}
