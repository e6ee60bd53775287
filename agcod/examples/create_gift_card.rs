use agcod::{default_context, Config, Context, ErrorKind, GiftCardValue, IncentivesClient};

use agcod_http_send_reqwest::ReqwestHttpSend;
use anyhow::Result;
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Timeouts are the transport's business, the client never retries.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let ctx: Context = default_context().with_http_send(ReqwestHttpSend::new(http));

    // Load AGCOD_PARTNER_ID, AGCOD_ACCESS_KEY_ID, AGCOD_SECRET_ACCESS_KEY and AGCOD_ENDPOINT
    let config = Config::default().from_env(&ctx).build()?;
    println!("Using endpoint {}", config.endpoint);
    let client = IncentivesClient::with_context(ctx, config);

    // Example 1: check the balance
    let funds = client.get_available_funds().await?;
    println!(
        "Available funds: {} {} at {}",
        funds.available_funds.amount, funds.available_funds.currency_code, funds.timestamp
    );

    // Example 2: create a card, reusing the id makes the call idempotent
    let id = env::args().nth(1).unwrap_or_else(|| "example-1".to_string());
    match client
        .create_gift_card(&id, GiftCardValue::new(10, "USD"))
        .await
    {
        Ok(card) => {
            println!(
                "Created card {} ({}) for {}",
                card.gc_id, card.card_info.card_status, card.creation_request_id
            );

            // Example 3: cancel it again while it is still unclaimed
            let cancelled = client.cancel_gift_card(&id).await?;
            println!("Cancel status: {}", cancelled.status);
        }
        Err(e) if e.kind() == ErrorKind::UnexpectedStatus => {
            eprintln!(
                "Remote rejected the request with {:?}: {}",
                e.status(),
                e.body().unwrap_or_default()
            );
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
