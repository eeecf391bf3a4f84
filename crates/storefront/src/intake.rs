use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{
    domain::CartItem,
    protocol::{CartTotals, CheckoutForm, CommissionRequest, ContactMessage},
};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct OrderSubmission {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub promo_applied: bool,
    pub customer: CheckoutForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order_number: String,
    pub placed_at: DateTime<Utc>,
}

/// Destination for completed checkouts, commission requests and contact
/// messages. Failures surface to the visitor and leave their flow in place.
#[async_trait]
pub trait OrderIntake: Send + Sync {
    async fn submit_order(&self, order: &OrderSubmission) -> Result<OrderReceipt>;
    async fn submit_commission(&self, request: &CommissionRequest) -> Result<DateTime<Utc>>;
    async fn submit_contact(&self, message: &ContactMessage) -> Result<DateTime<Utc>>;
}

/// Accepts everything and records it in the log. Payment details are never logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingIntake;

#[async_trait]
impl OrderIntake for LoggingIntake {
    async fn submit_order(&self, order: &OrderSubmission) -> Result<OrderReceipt> {
        let order_number = generate_order_number();
        info!(
            %order_number,
            items = order.items.len(),
            total = order.totals.total,
            promo_applied = order.promo_applied,
            email = %order.customer.email,
            "order received"
        );
        Ok(OrderReceipt {
            order_number,
            placed_at: Utc::now(),
        })
    }

    async fn submit_commission(&self, request: &CommissionRequest) -> Result<DateTime<Utc>> {
        info!(
            name = %request.personal.name,
            email = %request.personal.email,
            details = ?request.details,
            colors = ?request.colors,
            "commission request received"
        );
        Ok(Utc::now())
    }

    async fn submit_contact(&self, message: &ContactMessage) -> Result<DateTime<Utc>> {
        info!(
            name = %message.name,
            email = %message.email,
            subject = ?message.subject,
            "contact message received"
        );
        Ok(Utc::now())
    }
}

/// `ART-` followed by six digits in `100000..=999999`.
pub fn generate_order_number() -> String {
    let n = 100_000 + (Uuid::new_v4().as_u128() % 900_000) as u32;
    format!("ART-{n}")
}
