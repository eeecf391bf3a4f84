//! Cart → checkout → confirmation.
//!
//! Items and the promo flag change only while the visitor is on the cart
//! step. Confirmation is terminal for the flow's lifetime.

use shared::{
    domain::{Artwork, ArtworkId, CartItem},
    protocol::{CartTotals, CartView, CheckoutForm, CheckoutStep, OrderConfirmation},
};
use tracing::{debug, info};

use crate::{
    error::FlowError,
    intake::{OrderIntake, OrderSubmission},
    validate::RequiredFields,
};

pub const PROMO_CODE: &str = "ART10";
pub const SHIPPING_FLAT: u64 = 50;
const PROMO_DISCOUNT_PERCENT: u64 = 10;
const TAX_PERCENT: u64 = 7;

/// `amount * percent / 100`, rounded half up.
fn percent_of(amount: u64, percent: u64) -> u64 {
    (amount * percent + 50) / 100
}

/// Whole-dollar totals. Tax applies after the discount and before shipping.
pub fn compute_totals(items: &[CartItem], promo_applied: bool) -> CartTotals {
    let subtotal: u64 = items.iter().map(|item| item.price).sum();
    let discount = if promo_applied {
        percent_of(subtotal, PROMO_DISCOUNT_PERCENT)
    } else {
        0
    };
    let taxable = subtotal - discount;
    let shipping = SHIPPING_FLAT;
    let tax = percent_of(taxable, TAX_PERCENT);
    CartTotals {
        subtotal,
        discount,
        shipping,
        tax,
        total: taxable + shipping + tax,
    }
}

fn step_name(step: CheckoutStep) -> &'static str {
    match step {
        CheckoutStep::Cart => "cart",
        CheckoutStep::Checkout => "checkout",
        CheckoutStep::Confirmation => "confirmation",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoOutcome {
    Applied,
    AlreadyApplied,
}

#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    items: Vec<CartItem>,
    promo_applied: bool,
    confirmation: Option<OrderConfirmation>,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Cart,
            items: Vec::new(),
            promo_applied: false,
            confirmation: None,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn promo_applied(&self) -> bool {
        self.promo_applied
    }

    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    pub fn totals(&self) -> CartTotals {
        compute_totals(&self.items, self.promo_applied)
    }

    fn require_step(&self, expected: CheckoutStep, action: &'static str) -> Result<(), FlowError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(FlowError::InvalidTransition {
                action,
                step: step_name(self.step),
            })
        }
    }

    pub fn add(&mut self, artwork: &Artwork) -> Result<(), FlowError> {
        self.require_step(CheckoutStep::Cart, "change the cart")?;
        if !artwork.available {
            return Err(FlowError::ArtworkUnavailable(artwork.id));
        }
        if self.items.iter().any(|item| item.id == artwork.id) {
            return Err(FlowError::AlreadyInCart(artwork.id));
        }
        self.items.push(CartItem::from(artwork));
        debug!(artwork_id = %artwork.id, items = self.items.len(), "added to cart");
        Ok(())
    }

    pub fn remove(&mut self, id: ArtworkId) -> Result<CartItem, FlowError> {
        self.require_step(CheckoutStep::Cart, "change the cart")?;
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(FlowError::NotInCart(id))?;
        let removed = self.items.remove(position);
        debug!(artwork_id = %id, items = self.items.len(), "removed from cart");
        Ok(removed)
    }

    /// Case-insensitive match against [`PROMO_CODE`]. Once applied, later
    /// submissions of any code leave the discount in place.
    pub fn apply_promo(&mut self, code: &str) -> Result<PromoOutcome, FlowError> {
        self.require_step(CheckoutStep::Cart, "apply a promo code")?;
        if self.promo_applied {
            return Ok(PromoOutcome::AlreadyApplied);
        }
        if !code.eq_ignore_ascii_case(PROMO_CODE) {
            return Err(FlowError::InvalidPromoCode);
        }
        self.promo_applied = true;
        Ok(PromoOutcome::Applied)
    }

    pub fn proceed_to_checkout(&mut self) -> Result<(), FlowError> {
        self.require_step(CheckoutStep::Cart, "proceed to checkout")?;
        if self.items.is_empty() {
            return Err(FlowError::EmptyCart);
        }
        self.step = CheckoutStep::Checkout;
        Ok(())
    }

    pub fn return_to_cart(&mut self) -> Result<(), FlowError> {
        self.require_step(CheckoutStep::Checkout, "return to the cart")?;
        self.step = CheckoutStep::Cart;
        Ok(())
    }

    /// Validates the form, hands the order to `intake` and moves to
    /// confirmation. On any error the flow stays on the checkout step.
    pub async fn place_order(
        &mut self,
        form: CheckoutForm,
        intake: &dyn OrderIntake,
    ) -> Result<OrderConfirmation, FlowError> {
        self.require_step(CheckoutStep::Checkout, "place an order")?;
        form.ensure_complete()?;

        let submission = OrderSubmission {
            items: self.items.clone(),
            totals: self.totals(),
            promo_applied: self.promo_applied,
            customer: form,
        };
        let receipt = intake
            .submit_order(&submission)
            .await
            .map_err(FlowError::Intake)?;

        let confirmation = OrderConfirmation {
            order_number: receipt.order_number,
            items: submission.items,
            totals: submission.totals,
            email: submission.customer.email,
            placed_at: receipt.placed_at,
        };
        info!(
            order_number = %confirmation.order_number,
            total = confirmation.totals.total,
            "order placed"
        );
        self.step = CheckoutStep::Confirmation;
        self.confirmation = Some(confirmation.clone());
        Ok(confirmation)
    }

    pub fn view(&self) -> CartView {
        CartView {
            step: self.step,
            items: self.items.clone(),
            totals: self.totals(),
            promo_applied: self.promo_applied,
            confirmation: self.confirmation.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/cart_tests.rs"]
mod tests;
