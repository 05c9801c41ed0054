use actix_web::http::StatusCode as StubStatus;
use payloads::{AuthEndpoint, ClientError};
use reqwest::StatusCode;
use test_helpers::{
    StubReply, alice_login, assert_rejected, spawn_app, unreachable_client,
};

#[tokio::test]
async fn unreachable_server_is_a_network_error() -> anyhow::Result<()> {
    let client = unreachable_client();

    let result = client.login(&alice_login()).await;
    assert!(matches!(result, Err(ClientError::Network(_))));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Network error. Please check your connection."
    );

    Ok(())
}

#[tokio::test]
async fn refusal_with_error_status_reads_body() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.respond_with(
        AuthEndpoint::Login,
        StubReply::Json(
            StubStatus::UNAUTHORIZED,
            serde_json::json!({ "success": false, "errors": "Wrong password" }),
        ),
    );

    let result = app.client.login(&alice_login()).await;
    assert_rejected(result, "Wrong password");

    Ok(())
}

#[tokio::test]
async fn non_json_error_status_is_api_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.respond_with(
        AuthEndpoint::Login,
        StubReply::Text(
            StubStatus::INTERNAL_SERVER_ERROR,
            "database unavailable".into(),
        ),
    );

    match app.client.login(&alice_login()).await {
        Err(ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(text, "database unavailable");
        }
        other => panic!("Expected APIError, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn garbage_success_body_is_decode_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.respond_with(
        AuthEndpoint::Signup,
        StubReply::Text(StubStatus::OK, "<html>oops</html>".into()),
    );

    let result = app.client.signup(&alice_login()).await;
    assert!(matches!(result, Err(ClientError::Decode(_))));

    Ok(())
}

#[tokio::test]
async fn success_without_token_is_rejected_by_client() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.respond_with(
        AuthEndpoint::Login,
        StubReply::Json(StubStatus::OK, serde_json::json!({ "success": true })),
    );

    let result = app.client.login(&alice_login()).await;
    assert!(matches!(result, Err(ClientError::MissingToken)));

    Ok(())
}
