use wiremock::matchers::{any, body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::spawn_app;

#[tokio::test]
async fn options_preflight_returns_200_with_cross_origin_headers() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/send-confirmation", &app.address),
        )
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        "*",
        response
            .headers()
            .get("Access-Control-Allow-Origin")
            .expect("Missing Access-Control-Allow-Origin header")
    );
    assert_eq!(
        "POST, OPTIONS",
        response
            .headers()
            .get("Access-Control-Allow-Methods")
            .expect("Missing Access-Control-Allow-Methods header")
    );
    assert_eq!(
        "authorization, x-client-info, apikey, content-type",
        response
            .headers()
            .get("Access-Control-Allow-Headers")
            .expect("Missing Access-Control-Allow-Headers header")
    );
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn non_json_content_type_is_rejected_with_400() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/send-confirmation", &app.address))
        .header("Content-Type", "text/plain")
        .body(r#"{"email":"ursula@example.com"}"#)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    assert_eq!(
        serde_json::json!({ "error": "Invalid content type" }),
        response.json::<serde_json::Value>().await.unwrap()
    );
}

#[tokio::test]
async fn empty_body_is_rejected_with_400() {
    let app = spawn_app().await;

    let response = app.post_send_confirmation("".into()).await;

    assert_eq!(400, response.status().as_u16());
    assert_eq!(
        serde_json::json!({ "error": "Empty request body" }),
        response.json::<serde_json::Value>().await.unwrap()
    );
}

#[tokio::test]
async fn malformed_json_is_rejected_with_400() {
    let app = spawn_app().await;

    let response = app.post_send_confirmation("{not json".into()).await;

    assert_eq!(400, response.status().as_u16());
    assert_eq!(
        serde_json::json!({ "error": "Malformed JSON body" }),
        response.json::<serde_json::Value>().await.unwrap()
    );
}

#[tokio::test]
async fn invalid_email_shapes_are_rejected_with_400() {
    let app = spawn_app().await;

    let test_cases = vec![
        (r#"{"email":"not-an-email"}"#, "no at symbol"),
        (r#"{"email":"ursula@domain"}"#, "undotted domain"),
        (r#"{"email":"ursula le@domain.com"}"#, "embedded whitespace"),
        (r#"{}"#, "missing email field"),
    ];

    for (body, description) in test_cases {
        let response = app.post_send_confirmation(body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload had {}.",
            description
        );
        assert_eq!(
            serde_json::json!({ "error": "Invalid email format" }),
            response.json::<serde_json::Value>().await.unwrap()
        );
    }
}

#[tokio::test]
async fn a_valid_request_triggers_one_provider_send_and_returns_success() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .and(body_partial_json(
            serde_json::json!({ "to": ["ursula@example.com"] }),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_send_confirmation(r#"{"email":"ursula@example.com"}"#.into())
        .await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        serde_json::json!({ "success": true }),
        response.json::<serde_json::Value>().await.unwrap()
    );
}

#[tokio::test]
async fn a_provider_failure_maps_to_500_with_an_error_message() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_send_confirmation(r#"{"email":"ursula@example.com"}"#.into())
        .await;

    assert_eq!(500, response.status().as_u16());
    let body = response.json::<serde_json::Value>().await.unwrap();
    let message = body["error"].as_str().expect("error is not a string");
    assert!(!message.is_empty());
}

#[tokio::test]
async fn failure_responses_carry_cross_origin_headers_too() {
    let app = spawn_app().await;

    let response = app.post_send_confirmation("".into()).await;

    assert_eq!(400, response.status().as_u16());
    assert_eq!(
        "*",
        response
            .headers()
            .get("Access-Control-Allow-Origin")
            .expect("Missing Access-Control-Allow-Origin header")
    );
}
