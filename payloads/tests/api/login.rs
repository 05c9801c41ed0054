use payloads::{AuthEndpoint, AuthOutcome};
use test_helpers::{
    alice_login, assert_rejected, spawn_app, stub::INVALID_CREDENTIALS,
};

#[tokio::test]
async fn login_refused_for_unknown_user() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.login(&alice_login()).await;
    assert_rejected(result, INVALID_CREDENTIALS);

    Ok(())
}

#[tokio::test]
async fn login_after_signup_issues_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    match app.client.login(&alice_login()).await? {
        AuthOutcome::Authenticated { token } => assert!(!token.is_empty()),
        AuthOutcome::Rejected { errors } => panic!("login refused: {errors}"),
    }

    Ok(())
}

#[tokio::test]
async fn wrong_password_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let mut credentials = alice_login();
    credentials.password = "not-it".into();
    let result = app.client.login(&credentials).await;
    assert_rejected(result, INVALID_CREDENTIALS);

    Ok(())
}

#[tokio::test]
async fn login_posts_to_login_without_username() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let _ = app.client.login(&alice_login()).await?;

    let requests = app.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].endpoint, AuthEndpoint::Login);
    assert_eq!(
        requests[0].body,
        serde_json::json!({
            "email": "alice@example.com",
            "password": "supersecret",
        })
    );

    Ok(())
}
