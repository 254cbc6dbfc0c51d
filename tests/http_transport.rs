use bptf_classifieds::{Classifieds, Payload, TransportError};
use bptf_classifieds::request::{
    DeleteAllListingsParams,
    DeleteListingParams,
    DeleteListingsParams,
    GetUserLimitsParams,
};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::{Mock, MockServer, ResponseTemplate};
use wiremock::matchers::{body_json, header_exists, method, path, query_param};

async fn setup() -> (MockServer, Classifieds) {
    let server = MockServer::start().await;
    let classifieds = Classifieds::builder()
        .token("T")
        .base_url(format!("{}/api", server.uri()))
        .build();

    (server, classifieds)
}

#[tokio::test]
async fn empty_body_resolves_to_status() {
    let (server, classifieds) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/classifieds/listings/440_1"))
        .and(query_param("token", "T"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let payload = classifieds.delete_listing(DeleteListingParams::new("440_1"))
        .unwrap()
        .await
        .unwrap()
        .unwrap();

    assert_eq!(payload, Payload::Status(StatusCode::NO_CONTENT));
}

#[tokio::test]
async fn error_status_is_http_error() {
    let (server, classifieds) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/classifieds/listings"))
        .respond_with(ResponseTemplate::new(501))
        .mount(&server)
        .await;

    let error = classifieds.delete_all_listings(DeleteAllListingsParams::default())
        .unwrap()
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(error, TransportError::Http { .. }));
    assert_eq!(error.name(), "HttpError");
    assert_eq!(error.to_string(), "Error 501: Not Implemented");
}

#[tokio::test]
async fn error_message_is_read_from_body() {
    let (server, classifieds) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/classifieds/limits"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Unauthorized",
        })))
        .mount(&server)
        .await;

    let error = classifieds.get_user_limits(GetUserLimitsParams::default())
        .unwrap()
        .await
        .unwrap()
        .unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(error.to_string(), "Error 401: Unauthorized");
}

#[tokio::test]
async fn json_body_is_decoded() {
    let (server, classifieds) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/classifieds/limits"))
        .and(query_param("token", "T"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            include_str!("../src/response/fixtures/user_limits.json"),
            "application/json",
        ))
        .mount(&server)
        .await;

    let response = classifieds.get_user_limits(GetUserLimitsParams::default())
        .unwrap()
        .await
        .unwrap()
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(response.listings.total, 150);
    assert_eq!(response.listings.remaining(), 150);
}

#[tokio::test]
async fn delete_body_is_sent() {
    let (server, classifieds) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/classifieds/delete/v1"))
        .and(body_json(json!({ "listing_ids": ["440_1", "440_2"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deleted": 2,
            "skipped": [],
            "errors": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = classifieds.delete_listings(DeleteListingsParams::new(["440_1", "440_2"]))
        .unwrap()
        .await
        .unwrap()
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(response.deleted, 2);
}

#[tokio::test]
async fn callback_receives_outcome() {
    let (server, classifieds) = setup().await;
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    Mock::given(method("DELETE"))
        .and(path("/api/classifieds/listings/440_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Listing deleted",
        })))
        .mount(&server)
        .await;

    let output = classifieds
        .delete_listing(DeleteListingParams::new("440_1").callback(move |result| {
            let _ = tx.send(result);
        }))
        .unwrap()
        .await;
    let payload = rx.recv().await.unwrap().unwrap();

    assert!(output.is_none());
    assert_eq!(payload.data().and_then(|body| body.message.as_deref()), Some("Listing deleted"));
}
