//! Request and response bodies of the AGCOD operations.
//!
//! Field names follow the AGCOD JSON documents (camelCase on the wire).

use agcod_core::utils::Redact;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug, Formatter};

/// Monetary amount as sent to and received from AGCOD.
///
/// Whole amounts go on the wire as JSON integers (`10`), fractional ones as
/// JSON floats (`12.5`). No validation happens here; the remote service decides
/// which amount and currency combinations are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    // Largest integer an f64 represents exactly.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    /// Create an amount from a float.
    pub fn new(value: f64) -> Self {
        Amount(value)
    }

    /// The amount as a float.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(value as f64)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount(f64::from(value))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Amount(f64::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.0.is_finite() {
            return Err(S::Error::custom(format!("amount must be finite, got {}", self.0)));
        }
        if self.0.fract() == 0.0 && self.0.abs() <= Self::MAX_EXACT {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Amount)
    }
}

/// GiftCardValue is an amount in an ISO 4217 currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardValue {
    /// Amount in the unit of `currency_code`.
    pub amount: Amount,
    /// ISO 4217 currency code, e.g. `USD` or `JPY`.
    pub currency_code: String,
}

impl GiftCardValue {
    /// Create a new value.
    pub fn new(amount: impl Into<Amount>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }
}

/// Optional channel specific fields of a CreateGiftCard request.
///
/// Every field left as `None` is omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiftCardOptions {
    /// Brick & mortar only: free-form transaction source object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_source: Option<serde_json::Value>,
    /// Brick & mortar only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Brick & mortar only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,
    /// Brick & mortar only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_details: Option<String>,
    /// Resellers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
    /// Prime video use case only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// Caller reference stored alongside the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
}

/// Body of a CreateGiftCard request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiftCardRequest {
    /// Idempotency key of this creation.
    pub creation_request_id: String,
    /// Partner id, always taken from the client config.
    pub partner_id: String,
    /// Value of the card to create.
    pub value: GiftCardValue,
    /// Channel specific fields.
    #[serde(flatten)]
    pub options: CreateGiftCardOptions,
}

/// Status and value of an issued card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// Card status, e.g. `Fulfilled` or `RefundedToPurchaser`.
    pub card_status: String,
    /// Value of the card.
    pub value: GiftCardValue,
}

/// Result of a CreateGiftCard call.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiftCardResponse {
    /// Creation request id the card was issued for.
    pub creation_request_id: String,
    /// Card status and value.
    pub card_info: CardInfo,
    /// Redeemable claim code.
    pub gc_claim_code: String,
    /// Remote id of the card.
    pub gc_id: String,
    /// Expiration date, absent for marketplaces whose cards never expire.
    #[serde(default)]
    pub gc_expiration_date: Option<String>,
    /// Operation status, e.g. `SUCCESS`.
    pub status: String,
}

impl Debug for CreateGiftCardResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateGiftCardResponse")
            .field("creation_request_id", &self.creation_request_id)
            .field("card_info", &self.card_info)
            .field("gc_claim_code", &Redact::from(&self.gc_claim_code))
            .field("gc_id", &self.gc_id)
            .field("gc_expiration_date", &self.gc_expiration_date)
            .field("status", &self.status)
            .finish()
    }
}

/// Body of a CancelGiftCard request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelGiftCardRequest {
    /// Creation request id used when the card was created.
    pub creation_request_id: String,
    /// Partner id, always taken from the client config.
    pub partner_id: String,
}

/// Result of a CancelGiftCard call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelGiftCardResponse {
    /// Creation request id of the cancelled card.
    pub creation_request_id: String,
    /// Operation status, e.g. `SUCCESS`.
    pub status: String,
}

/// Body of a GetAvailableFunds request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAvailableFundsRequest {
    /// Partner id, always taken from the client config.
    pub partner_id: String,
}

/// Result of a GetAvailableFunds call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAvailableFundsResponse {
    /// Funds left in the partner account.
    pub available_funds: GiftCardValue,
    /// Operation status, e.g. `SUCCESS`.
    pub status: String,
    /// Remote timestamp of the balance, e.g. `20240101T000000Z`.
    pub timestamp: String,
}
