use std::time::Duration;

use shared::{
    domain::{ArtworkId, FrameId, RoomId, SessionId},
    error::{ApiError, ErrorCode},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid promo code")]
    InvalidPromoCode,
    #[error("cannot {action} during the {step} step")]
    InvalidTransition {
        action: &'static str,
        step: &'static str,
    },
    #[error("artwork {0} not found")]
    UnknownArtwork(ArtworkId),
    #[error("room {0} not found")]
    UnknownRoom(RoomId),
    #[error("frame '{0}' is not offered")]
    UnknownFrame(FrameId),
    #[error("session {0} not found")]
    UnknownSession(SessionId),
    #[error("artwork {0} is no longer available")]
    ArtworkUnavailable(ArtworkId),
    #[error("artwork {0} is already in the cart")]
    AlreadyInCart(ArtworkId),
    #[error("artwork {0} is not in the cart")]
    NotInCart(ArtworkId),
    #[error("size must be between 50% and 150%, got {0}%")]
    SizeOutOfRange(u32),
    #[error("catalog has no {0}")]
    CatalogIncomplete(&'static str),
    #[error("submission failed: {0}")]
    Intake(#[source] anyhow::Error),
}

impl FlowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FlowError::MissingFields(_)
            | FlowError::ArtworkUnavailable(_)
            | FlowError::AlreadyInCart(_)
            | FlowError::SizeOutOfRange(_) => ErrorCode::Validation,
            FlowError::InvalidPromoCode => ErrorCode::InvalidPromoCode,
            FlowError::EmptyCart | FlowError::InvalidTransition { .. } => ErrorCode::InvalidState,
            FlowError::UnknownArtwork(_)
            | FlowError::UnknownRoom(_)
            | FlowError::UnknownFrame(_)
            | FlowError::UnknownSession(_)
            | FlowError::NotInCart(_) => ErrorCode::NotFound,
            FlowError::Intake(_) => ErrorCode::Upstream,
            FlowError::CatalogIncomplete(_) => ErrorCode::Internal,
        }
    }
}

impl From<FlowError> for ApiError {
    fn from(value: FlowError) -> Self {
        match value {
            FlowError::MissingFields(fields) => {
                ApiError::missing_fields(fields.into_iter().map(str::to_string).collect())
            }
            other => ApiError::new(other.code(), other.to_string()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RotatorError {
    #[error("fade ({fade:?}) must be shorter than the rotation interval ({interval:?})")]
    FadeTooLong { fade: Duration, interval: Duration },
}
