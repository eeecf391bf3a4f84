//! Session-scoped storefront flows: hero rotation, cart checkout, the
//! commission wizard and the room visualizer.

pub mod cart;
pub mod contact;
pub mod error;
pub mod hero;
pub mod intake;
pub mod session;
pub mod task;
pub mod validate;
pub mod visualize;
pub mod wizard;

pub use cart::CheckoutFlow;
pub use error::{FlowError, RotatorError};
pub use hero::{HeroRotator, HeroSlider};
pub use intake::{LoggingIntake, OrderIntake, OrderReceipt, OrderSubmission};
pub use session::{Session, Sessions};
pub use task::ScheduledTask;
pub use validate::RequiredFields;
pub use visualize::Visualizer;
pub use wizard::CustomOrderWizard;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
