//! Client for the Amazon Incentives API (AGCOD).
//!
//! The client issues, cancels and funds-checks Amazon gift cards. Each call
//! builds a JSON body, signs it with AWS Signature Version 4 for the
//! `AGCODService` service, POSTs it to one of the six known endpoints and
//! decodes the JSON reply.
//!
//! ## Example
//!
//! ```no_run
//! use agcod::{default_context, Config, GiftCardValue, IncentivesClient};
//!
//! # async fn example() -> agcod::Result<()> {
//! let ctx = default_context();
//! // Reads AGCOD_PARTNER_ID, AGCOD_ACCESS_KEY_ID, AGCOD_SECRET_ACCESS_KEY and AGCOD_ENDPOINT.
//! let config = Config::default().from_env(&ctx).build()?;
//! let client = IncentivesClient::with_context(ctx, config);
//!
//! let card = client
//!     .create_gift_card("order-1", GiftCardValue::new(10, "USD"))
//!     .await?;
//! client.cancel_gift_card(&card.creation_request_id).await?;
//!
//! let funds = client.get_available_funds().await?;
//! println!("{} {} left", funds.available_funds.amount, funds.available_funds.currency_code);
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub use agcod_core::{Context, Error, ErrorKind, Result};

mod constants;

mod endpoint;
pub use endpoint::Endpoint;

mod credential;
pub use credential::Credential;

mod config;
pub use config::ClientConfig;
pub use config::Config;

mod sign_request;
pub use sign_request::RequestSigner;

pub mod model;
pub use model::{
    Amount, CancelGiftCardResponse, CardInfo, CreateGiftCardOptions, CreateGiftCardResponse,
    GetAvailableFundsResponse, GiftCardValue,
};

pub mod operation;
pub use operation::Operation;

mod client;
pub use client::IncentivesClient;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;
