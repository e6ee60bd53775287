use super::{body, header, init_client, RecordingHttpSend, RefusingHttpSend, PARTNER_ID};
use agcod::operation::{CancelGiftCard, CreateGiftCard, GetAvailableFunds, Operation};
use agcod::{CardInfo, CreateGiftCardOptions, Endpoint, ErrorKind, GiftCardValue};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;

const CREATE_RESPONSE: &str = r#"{"creationRequestId":"abc123","cardInfo":{"cardStatus":"AVAILABLE","value":{"currencyCode":"USD","amount":25}},"gcClaimCode":"CODE-XYZ","gcId":"gc-1","gcExpirationDate":"2030-01-01","status":"SUCCESS"}"#;
const CANCEL_RESPONSE: &str = r#"{"creationRequestId":"req-1","status":"SUCCESS"}"#;
const FUNDS_RESPONSE: &str = r#"{"availableFunds":{"amount":1500.5,"currencyCode":"USD"},"status":"SUCCESS","timestamp":"20240101T000000Z"}"#;

#[tokio::test]
async fn test_create_gift_card() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, CREATE_RESPONSE);
    let client = init_client(Endpoint::NorthAmericaSandbox, http.clone());

    let resp = client
        .create_gift_card("req-1", GiftCardValue::new(10, "USD"))
        .await?;

    let req = http.single_request();
    assert_eq!(req.method(), Method::POST);
    assert_eq!(
        req.uri().to_string(),
        "https://agcod-v2-gamma.amazon.com/CreateGiftCard"
    );
    assert_eq!(
        body(&req),
        r#"{"creationRequestId":"req-1","partnerId":"Abcde","value":{"amount":10,"currencyCode":"USD"}}"#
    );
    assert_eq!(
        header(&req, "x-amz-target"),
        "com.amazonaws.agcod.AGCODService./CreateGiftCard"
    );
    assert_eq!(header(&req, "accept"), "application/json");
    assert_eq!(header(&req, "content-type"), "application/json");
    assert!(header(&req, "authorization")
        .starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    assert!(header(&req, "authorization").contains("/us-east-1/AGCODService/aws4_request"));
    assert_eq!(header(&req, "x-amz-date").len(), "20240101T000000Z".len());

    assert_eq!(resp.creation_request_id, "abc123");
    assert_eq!(
        resp.card_info,
        CardInfo {
            card_status: "AVAILABLE".to_string(),
            value: GiftCardValue::new(25, "USD"),
        }
    );
    assert_eq!(resp.gc_claim_code, "CODE-XYZ");
    assert_eq!(resp.gc_id, "gc-1");
    assert_eq!(resp.gc_expiration_date.as_deref(), Some("2030-01-01"));
    assert_eq!(resp.status, "SUCCESS");
    Ok(())
}

#[tokio::test]
async fn test_create_gift_card_with_options() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, CREATE_RESPONSE);
    let client = init_client(Endpoint::EuropeSandbox, http.clone());

    let options = CreateGiftCardOptions {
        program_id: Some("prog-1".to_string()),
        external_reference: Some("order-42".to_string()),
        ..Default::default()
    };
    client
        .create_gift_card_with_options("req-2", GiftCardValue::new(12.5, "EUR"), options)
        .await?;

    let req = http.single_request();
    assert_eq!(
        body(&req),
        r#"{"creationRequestId":"req-2","partnerId":"Abcde","value":{"amount":12.5,"currencyCode":"EUR"},"programId":"prog-1","externalReference":"order-42"}"#
    );
    Ok(())
}

#[tokio::test]
async fn test_cancel_gift_card() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, CANCEL_RESPONSE);
    let client = init_client(Endpoint::NorthAmericaSandbox, http.clone());

    let resp = client.cancel_gift_card("req-1").await?;

    let req = http.single_request();
    assert_eq!(
        req.uri().to_string(),
        "https://agcod-v2-gamma.amazon.com/CancelGiftCard"
    );
    assert_eq!(
        body(&req),
        r#"{"creationRequestId":"req-1","partnerId":"Abcde"}"#
    );
    assert_eq!(
        header(&req, "x-amz-target"),
        "com.amazonaws.agcod.AGCODService./CancelGiftCard"
    );

    assert_eq!(resp.creation_request_id, "req-1");
    assert_eq!(resp.status, "SUCCESS");
    Ok(())
}

#[tokio::test]
async fn test_get_available_funds() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, FUNDS_RESPONSE);
    let client = init_client(Endpoint::NorthAmericaSandbox, http.clone());

    let resp = client.get_available_funds().await?;

    let req = http.single_request();
    assert_eq!(
        req.uri().to_string(),
        "https://agcod-v2-gamma.amazon.com/GetAvailableFunds"
    );
    assert_eq!(body(&req), r#"{"partnerId":"Abcde"}"#);
    assert_eq!(
        header(&req, "x-amz-target"),
        "com.amazonaws.agcod.AGCODService./GetAvailableFunds"
    );

    assert_eq!(resp.available_funds, GiftCardValue::new(1500.5, "USD"));
    assert_eq!(resp.status, "SUCCESS");
    assert_eq!(resp.timestamp, "20240101T000000Z");
    Ok(())
}

#[tokio::test]
async fn test_every_endpoint_and_operation() -> anyhow::Result<()> {
    for endpoint in Endpoint::ALL {
        let scope = format!("/{}/AGCODService/aws4_request", endpoint.region());

        let http = RecordingHttpSend::new(StatusCode::OK, CREATE_RESPONSE);
        let client = init_client(endpoint, http.clone());
        client
            .create_gift_card("req-1", GiftCardValue::new(10, "USD"))
            .await?;
        let req = http.single_request();
        assert_eq!(
            req.uri().to_string(),
            format!("https://{}{}", endpoint.host(), CreateGiftCard::path()),
            "{endpoint} create url mismatch"
        );
        assert_eq!(header(&req, "x-amz-target"), CreateGiftCard::target());
        assert!(header(&req, "authorization").contains(&scope), "{endpoint} scope mismatch");

        let http = RecordingHttpSend::new(StatusCode::OK, CANCEL_RESPONSE);
        let client = init_client(endpoint, http.clone());
        client.cancel_gift_card("req-1").await?;
        let req = http.single_request();
        assert_eq!(
            req.uri().to_string(),
            format!("https://{}{}", endpoint.host(), CancelGiftCard::path()),
            "{endpoint} cancel url mismatch"
        );
        assert_eq!(header(&req, "x-amz-target"), CancelGiftCard::target());
        assert!(header(&req, "authorization").contains(&scope), "{endpoint} scope mismatch");

        let http = RecordingHttpSend::new(StatusCode::OK, FUNDS_RESPONSE);
        let client = init_client(endpoint, http.clone());
        client.get_available_funds().await?;
        let req = http.single_request();
        assert_eq!(
            req.uri().to_string(),
            format!("https://{}{}", endpoint.host(), GetAvailableFunds::path()),
            "{endpoint} funds url mismatch"
        );
        assert_eq!(header(&req, "x-amz-target"), GetAvailableFunds::target());
        assert!(header(&req, "authorization").contains(&scope), "{endpoint} scope mismatch");
    }
    Ok(())
}

#[tokio::test]
async fn test_partner_prefix() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, CREATE_RESPONSE);
    let client = init_client(Endpoint::JapanSandbox, http.clone()).with_partner_prefix(true);
    client
        .create_gift_card("req-1", GiftCardValue::new(500, "JPY"))
        .await?;
    let req = http.single_request();
    assert_eq!(
        body(&req),
        r#"{"creationRequestId":"Abcdereq-1","partnerId":"Abcde","value":{"amount":500,"currencyCode":"JPY"}}"#
    );

    let http = RecordingHttpSend::new(StatusCode::OK, CANCEL_RESPONSE);
    let client = init_client(Endpoint::JapanSandbox, http.clone()).with_partner_prefix(true);
    client.cancel_gift_card("req-1").await?;
    let req = http.single_request();
    assert_eq!(
        body(&req),
        format!(r#"{{"creationRequestId":"{PARTNER_ID}req-1","partnerId":"{PARTNER_ID}"}}"#)
    );
    Ok(())
}

#[tokio::test]
async fn test_unexpected_status() {
    let error_body = r#"{"errorCode":"F400","errorType":"InvalidAmountInput","message":"Amount is invalid","status":"FAILURE"}"#;
    let http = RecordingHttpSend::new(StatusCode::BAD_REQUEST, error_body);
    let client = init_client(Endpoint::NorthAmericaSandbox, http.clone());

    let err = client
        .create_gift_card("req-1", GiftCardValue::new(-1, "USD"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(err.body(), Some(error_body));
    http.single_request();
}

#[tokio::test]
async fn test_invalid_response() {
    let http = RecordingHttpSend::new(StatusCode::OK, r#"{"status":"SUCCESS"}"#);
    let client = init_client(Endpoint::NorthAmericaSandbox, http.clone());

    let err = client.get_available_funds().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
}

#[tokio::test]
async fn test_transport_failure_is_not_retried() {
    let http = RefusingHttpSend::default();

    let client = init_client(Endpoint::NorthAmericaProduction, http.clone());
    let err = client
        .create_gift_card("req-1", GiftCardValue::new(10, "USD"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.to_string(), "transport error: connection refused");
    assert_eq!(http.attempts(), 1);

    let err = client.cancel_gift_card("req-1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(http.attempts(), 2);

    let err = client.get_available_funds().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(http.attempts(), 3);
}

#[tokio::test]
async fn test_long_prefixed_id_is_sent_unchanged() -> anyhow::Result<()> {
    let id = "order-2024-01-01-0000000000000000000042";
    let prefixed = format!("{PARTNER_ID}{id}");
    assert!(prefixed.chars().count() > 40);

    let http = RecordingHttpSend::new(StatusCode::OK, CREATE_RESPONSE);
    let client = init_client(Endpoint::NorthAmericaSandbox, http.clone()).with_partner_prefix(true);
    client
        .create_gift_card(id, GiftCardValue::new(10, "USD"))
        .await?;

    let req = http.single_request();
    assert_eq!(
        body(&req),
        format!(
            r#"{{"creationRequestId":"{prefixed}","partnerId":"{PARTNER_ID}","value":{{"amount":10,"currencyCode":"USD"}}}}"#
        )
    );
    Ok(())
}

#[tokio::test]
async fn test_non_finite_amount_is_not_sent() {
    let http = RefusingHttpSend::default();
    let client = init_client(Endpoint::NorthAmericaSandbox, http.clone());

    let err = client
        .create_gift_card("req-1", GiftCardValue::new(f64::NAN, "USD"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert_eq!(http.attempts(), 0);
}
