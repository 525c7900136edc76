use std::sync::Arc;

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use xumm_api_client::auth::StaticCredentials;
use xumm_api_client::error::XummError;
use xumm_api_client::platform::{XummApi, XummRestClient};
use xumm_api_client::types::KycStatus;

const KEY: &str = "aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee";
const SECRET: &str = "01234567-89ab-cdef-0123-456789abcdef";

fn build_client(server: &MockServer) -> XummRestClient {
    let credentials = Arc::new(StaticCredentials::new(KEY, SECRET).unwrap());
    XummRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build()
        .unwrap()
}

fn application_details() -> serde_json::Value {
    serde_json::json!({
        "quota": {},
        "application": {
            "uuidv4": "00000000-1111-2222-3333-444444444444",
            "name": "Test App",
            "webhookurl": "https://example.com/webhook",
            "disabled": 0
        },
        "call": { "uuidv4": "55555555-6666-7777-8888-999999999999" }
    })
}

#[tokio::test]
async fn test_ping_returns_application_details() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "pong": true, "auth": application_details() });

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("x-api-key", KEY))
        .and(header("x-api-secret", SECRET))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let details = client.ping().await.unwrap();
    assert_eq!(details.application.name, "Test App");
    assert!(!details.application.is_disabled());
    assert_eq!(details.call.uuidv4, "55555555-6666-7777-8888-999999999999");
}

#[tokio::test]
async fn test_ping_error_marker() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "error": { "reference": "3a04c7d3-94aa-4d8d-9559-62bb5e8a7a13", "code": 812 }
    });

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(403).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.ping().await.unwrap_err();
    match err {
        XummError::Api(api_error) => {
            assert_eq!(api_error.code, Some(812));
            assert_eq!(
                api_error.reference.as_deref(),
                Some("3a04c7d3-94aa-4d8d-9559-62bb5e8a7a13")
            );
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_ping_without_auth_is_unexpected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "pong": true })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.ping().await.unwrap_err();
    assert!(matches!(err, XummError::UnexpectedResponse(_)));
    assert_eq!(err.to_string(), "Unexpected response for ping request");
}

#[tokio::test]
async fn test_get_curated_assets() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "issuers": ["Bitstamp"],
        "currencies": ["USD"],
        "details": {
            "Bitstamp": {
                "id": 185,
                "name": "Bitstamp",
                "domain": "bitstamp.net",
                "avatar": "https://xumm.app/assets/icons/currencies/ex-bitstamp.png",
                "shortlist": 1,
                "currencies": {
                    "USD": {
                        "id": 178,
                        "issuer_id": 185,
                        "issuer": "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B",
                        "currency": "USD",
                        "name": "US Dollar",
                        "avatar": "https://xumm.app/assets/icons/currencies/fiat-dollar.png",
                        "shortlist": 1
                    }
                }
            }
        }
    });

    Mock::given(method("GET"))
        .and(path("/curated-assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let assets = client.get_curated_assets().await.unwrap();
    assert_eq!(assets.issuers, vec!["Bitstamp"]);
    let bitstamp = &assets.details["Bitstamp"];
    assert_eq!(bitstamp.domain.as_deref(), Some("bitstamp.net"));
    assert_eq!(
        bitstamp.currencies["USD"].issuer,
        "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B"
    );
}

#[tokio::test]
async fn test_get_rates_normalizes_code() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "USD": 1.0,
        "XRP": 0.52,
        "__meta": {
            "currency": {
                "en": "US Dollar",
                "code": "USD",
                "symbol": "$",
                "isoDecimals": 2
            }
        }
    });

    Mock::given(method("GET"))
        .and(path("/rates/USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let rates = client.get_rates(" usd ").await.unwrap();
    assert_eq!(rates.xrp.to_string(), "0.52");
    assert_eq!(rates.meta.currency.code, "USD");
    assert_eq!(rates.meta.currency.iso_decimals, 2);
}

#[tokio::test]
async fn test_kyc_status_for_account_approved() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "account": "rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY",
        "kycApproved": true
    });

    Mock::given(method("GET"))
        .and(path("/kyc-status/rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let status = client
        .get_kyc_status(" rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY ")
        .await
        .unwrap();
    assert_eq!(status, KycStatus::Successful);
}

#[tokio::test]
async fn test_kyc_status_for_account_not_approved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/kyc-status/rNotApproved"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "account": "rNotApproved", "kycApproved": 0 })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/kyc-status/rMissingFlag"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert_eq!(
        client.get_kyc_status("rNotApproved").await.unwrap(),
        KycStatus::None
    );
    assert_eq!(
        client.get_kyc_status("rMissingFlag").await.unwrap(),
        KycStatus::None
    );
}

#[tokio::test]
async fn test_kyc_status_for_user_token() {
    let server = MockServer::start().await;
    let token = "691d5ae8-968b-44c8-8835-f25da1214f35";
    let response = serde_json::json!({
        "kycStatus": "IN_PROGRESS",
        "possibleStatuses": {
            "NONE": "No KYC attempt has been made",
            "IN_PROGRESS": "KYC flow has been started, but did not finish (yet)",
            "REJECTED": "KYC flow has been started and rejected (NO SUCCESSFUL KYC)",
            "SUCCESSFUL": "KYC flow has been started and was SUCCESSFUL :)"
        }
    });

    Mock::given(method("POST"))
        .and(path("/kyc-status"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "user_token": token })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let status = client.get_kyc_status(token).await.unwrap();
    assert_eq!(status, KycStatus::InProgress);
}

#[tokio::test]
async fn test_kyc_status_for_user_token_defaults_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/kyc-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let status = client.get_kyc_status("some-user-token").await.unwrap();
    assert_eq!(status, KycStatus::None);
}

#[tokio::test]
async fn test_kyc_status_for_user_token_empty_status_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/kyc-status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "kycStatus": "" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let status = client.get_kyc_status("some-user-token").await.unwrap();
    assert_eq!(status, KycStatus::None);
}

#[tokio::test]
async fn test_kyc_status_for_account_non_object_body_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/kyc-status/rUnknown"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!("not found")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/kyc-status/rErrored"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "error": { "code": 404 } })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert_eq!(
        client.get_kyc_status("rUnknown").await.unwrap(),
        KycStatus::None
    );
    assert_eq!(
        client.get_kyc_status("rErrored").await.unwrap(),
        KycStatus::None
    );
}

#[tokio::test]
async fn test_get_transaction_trims_hash() {
    let server = MockServer::start().await;
    let hash = "A17E4DEAD62BF705D9B73B4EAEE2CD8D8F5C5F29C6B2BC6E4A4F4E2C2F2B1D0E";
    let response = serde_json::json!({
        "txid": hash,
        "node": "wss://xrplcluster.com",
        "transaction": { "TransactionType": "Payment", "hash": hash },
        "balanceChanges": {
            "rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY": [{
                "counterparty": "",
                "currency": "XRP",
                "value": "-10.000012",
                "formatted": { "value": "-10.000012", "currency": "XRP" }
            }]
        }
    });

    Mock::given(method("GET"))
        .and(path(format!("/xrpl-tx/{hash}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let tx = client.get_transaction(&format!("  {hash}\n")).await.unwrap();
    assert_eq!(tx.txid, hash);
    assert_eq!(tx.transaction["TransactionType"], "Payment");
    let changes = &tx.balance_changes["rPEPPER7kfTD9w2To4CQk6UCfuHM9c6GDY"];
    assert_eq!(changes[0].value, "-10.000012");
}

#[tokio::test]
async fn test_generic_over_xumm_api() {
    async fn kyc_passed<C: XummApi>(client: &C, account: &str) -> bool {
        client
            .get_kyc_status(account)
            .await
            .map(|s| s.is_successful())
            .unwrap_or(false)
    }

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/kyc-status/rApproved"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "kycApproved": "yes" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert!(kyc_passed(&client, "rApproved").await);
}
