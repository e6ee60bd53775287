//! AGCOD operations and their request and response shapes.

use crate::constants::TARGET_PREFIX;
use crate::model::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

mod sealed {
    /// Request bodies that carry a partner id.
    ///
    /// Only the client sets it, right before the body is serialized.
    pub trait PartnerScoped {
        fn set_partner_id(&mut self, partner_id: &str);
    }

    pub trait Sealed {}
}

pub(crate) use sealed::PartnerScoped;

/// Operation describes one AGCOD API call: its name and its body shapes.
///
/// The client dispatches every operation through the same signing and sending
/// routine; only the name and the request/response types differ.
///
/// This trait is sealed: the three operations below are the only ones the
/// client will sign.
pub trait Operation: sealed::Sealed {
    /// Operation name, used as path and in the `x-amz-target` header.
    const NAME: &'static str;

    /// Request body.
    type Request: Serialize + sealed::PartnerScoped;

    /// Response body.
    type Response: DeserializeOwned;

    /// Request path, e.g. `/CreateGiftCard`.
    fn path() -> String {
        format!("/{}", Self::NAME)
    }

    /// Value of the `x-amz-target` header.
    fn target() -> String {
        format!("{TARGET_PREFIX}./{}", Self::NAME)
    }
}

/// Issue a new gift card.
#[derive(Debug, Clone, Copy)]
pub struct CreateGiftCard;

impl sealed::Sealed for CreateGiftCard {}

impl Operation for CreateGiftCard {
    const NAME: &'static str = "CreateGiftCard";
    type Request = CreateGiftCardRequest;
    type Response = CreateGiftCardResponse;
}

/// Cancel a gift card that has not been claimed yet.
#[derive(Debug, Clone, Copy)]
pub struct CancelGiftCard;

impl sealed::Sealed for CancelGiftCard {}

impl Operation for CancelGiftCard {
    const NAME: &'static str = "CancelGiftCard";
    type Request = CancelGiftCardRequest;
    type Response = CancelGiftCardResponse;
}

/// Query the funds left in the partner account.
#[derive(Debug, Clone, Copy)]
pub struct GetAvailableFunds;

impl sealed::Sealed for GetAvailableFunds {}

impl Operation for GetAvailableFunds {
    const NAME: &'static str = "GetAvailableFunds";
    type Request = GetAvailableFundsRequest;
    type Response = GetAvailableFundsResponse;
}

impl sealed::PartnerScoped for CreateGiftCardRequest {
    fn set_partner_id(&mut self, partner_id: &str) {
        partner_id.clone_into(&mut self.partner_id);
    }
}

impl sealed::PartnerScoped for CancelGiftCardRequest {
    fn set_partner_id(&mut self, partner_id: &str) {
        partner_id.clone_into(&mut self.partner_id);
    }
}

impl sealed::PartnerScoped for GetAvailableFundsRequest {
    fn set_partner_id(&mut self, partner_id: &str) {
        partner_id.clone_into(&mut self.partner_id);
    }
}
